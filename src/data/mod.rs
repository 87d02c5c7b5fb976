//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for the two entity kinds the sync
//! service persists: alliances and corporations. Each write is atomic per
//! entity; no transaction spans more than one row.

pub mod alliance;
pub mod corporation;
