//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are merged into the stored record; everything else is left as is.

pub mod episode;
pub mod podcast;
