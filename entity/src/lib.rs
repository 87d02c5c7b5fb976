//! SeaORM entity models for huginn.
//!
//! Two tables are managed by the sync service: `eve_alliance` and
//! `eve_corporation`. External EVE Online IDs are stored alongside an
//! auto-incremented surrogate key; foreign keys reference the surrogate key.

pub mod eve_alliance;
pub mod eve_corporation;
pub mod prelude;
