//! Entity structs for all podhub domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema export.

mod account;
mod comment;
mod episode;
mod podcast;

pub use account::{Account, AccountProfile};
pub use comment::Comment;
pub use episode::Episode;
pub use podcast::Podcast;
