//! Parsers for EVE Online XML API documents.
//!
//! The API wraps every response in an `<eveapi>` envelope holding a
//! `<result>` element; list payloads sit in named `<rowset>` containers of
//! `<row>` elements. Missing structure is a fatal invalid-response error that
//! carries the raw payload for diagnostics; text filler between elements is
//! skipped silently. Timestamps use a fixed `YYYY-MM-DD HH:MM:SS` format and
//! a malformed value fails the whole document.

pub mod alliance;
pub mod corporation;

use quick_xml::events::BytesStart;

use crate::error::Error;

/// Timestamp format used by every date field in the XML API.
pub(crate) static API_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the decoded value of `name` on the element, or `None` when the
/// attribute is absent.
pub(crate) fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, Error> {
    match element.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}
