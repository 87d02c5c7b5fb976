//! Service layer for the sync flows.
//!
//! `sync` runs the full alliance list reconciliation, `corporation` refreshes
//! a single corporation's sheet, and `import` walks every stored alliance's
//! members through the corporation updater. Progress is reported through the
//! observer in `progress` rather than printed.

pub mod corporation;
pub mod import;
pub mod progress;
pub mod sync;
