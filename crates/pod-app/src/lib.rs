//! # pod-app
//!
//! Wires the podhub building blocks into one explicit context: the identity
//! registry, the persisted session, and the content store, all configured
//! from [`pod_config::PodConfig`].
//!
//! [`AppContext`] is where role and ownership checks live. The lower crates
//! trust their callers; everything a signed-in user can trigger should go
//! through here.

mod context;
pub mod error;
pub mod logging;

pub use context::AppContext;
pub use error::AppError;
pub use logging::init_tracing;
