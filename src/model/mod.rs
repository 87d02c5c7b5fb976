//! In-memory representations of parsed API documents and sync results.

pub mod api;
pub mod stats;
