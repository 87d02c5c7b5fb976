//! huginn — alliance and corporation data synchronization for EVE Online's
//! XML API.
//!
//! The service pulls the master alliance list, parses its rowsets, and
//! reconciles alliance membership in the database: every corporation seen in
//! a member rowset gets its alliance reference and join date set, and every
//! stored corporation that was not seen has its reference cleared. A second
//! flow refreshes per-corporation detail from the corporation sheet endpoint
//! and can be run in bulk across all known alliances' members.

pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod parser;
pub mod service;
pub mod util;
