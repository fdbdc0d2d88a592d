//! # pod-core
//!
//! Core types, ID generation, and error types for podhub.
//!
//! This crate provides the foundational types shared across all podhub crates:
//! - Entity structs for accounts, podcasts, episodes and comments
//! - Role and sort-order enums
//! - ID prefix constants and random ID generation
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
