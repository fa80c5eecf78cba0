//! v1 API Data Transfer Objects.
//!
//! Wire types for the v1 REST API, kept apart from the domain types in
//! `src/models/` and `src/feed/`.

pub mod feed;
pub mod stats;

pub use feed::*;
pub use stats::*;
