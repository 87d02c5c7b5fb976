//! Error types for the huginn sync service.
//!
//! A single unified error enum covers the fetch, parse, and persistence
//! layers. All variants are fatal for the operation in flight; there are no
//! retries in this crate, any retry or backoff policy belongs to whatever
//! sits in front of the API.

use thiserror::Error;

/// Main error type for the sync service.
#[derive(Error, Debug)]
pub enum Error {
    /// The fetched document is missing the structure the API schema promises
    /// (no `result` element, no `alliances` rowset, or a row without its
    /// identifying attribute). Carries the raw payload for diagnostics.
    #[error("invalid API response, expected document structure not found:\n{0}")]
    InvalidApiResponse(String),
    /// The API answered with a non-success HTTP status.
    #[error("API returned HTTP {status} for {path}")]
    FetchStatus { status: u16, path: String },
    /// The document could not be fetched at all (connection, TLS, timeout).
    #[error(transparent)]
    Fetch(#[from] reqwest::Error),
    /// The document is not well-formed XML.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    /// An attribute in the document could not be decoded.
    #[error(transparent)]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),
    /// A timestamp field did not match the API's `YYYY-MM-DD HH:MM:SS` format.
    #[error("failed to parse timestamp field: {0}")]
    DateParse(#[from] chrono::ParseError),
    /// An integer field could not be parsed.
    #[error("failed to parse integer field: {0}")]
    IntParse(#[from] std::num::ParseIntError),
    /// A decimal field could not be parsed.
    #[error("failed to parse decimal field: {0}")]
    FloatParse(#[from] std::num::ParseFloatError),
    /// Database error (query failures, connection issues, constraint
    /// violations).
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
    /// Configuration error (missing environment variable).
    #[error("configuration error: {0}")]
    Config(#[from] std::env::VarError),
}
