//! # pod-auth
//!
//! Account registry and session persistence for podhub.
//!
//! - [`IdentityRegistry`]: seeded + registered accounts, credential lookup
//! - [`SessionStore`]: the current identity, written through to a
//!   [`KeyValueStore`] under a fixed key
//! - [`FileKeyValueStore`] / [`MemoryKeyValueStore`]: durable and test backends

pub mod error;
pub mod kv;
pub mod registry;
pub mod seed;
pub mod session;

pub use error::AuthError;
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use registry::{IdentityRegistry, NewAccount};
pub use session::{SESSION_KEY, SessionStore};
