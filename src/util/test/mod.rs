//! Shared helpers for unit and integration tests: database/mock-server
//! setup, XML document fixtures, and mock API endpoints.

pub mod mock;
