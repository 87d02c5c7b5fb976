use chrono::NaiveDateTime;

/// One alliance row from the alliance list document, together with the
/// corporation IDs found in its nested `memberCorporations` rowset.
///
/// Member corporations inherit the alliance's `startDate` as their join date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllianceListRow {
    pub alliance_id: i64,
    pub name: String,
    pub ticker: String,
    pub member_count: i32,
    pub date_founded: NaiveDateTime,
    pub member_corporation_ids: Vec<i64>,
}

/// Parsed corporation sheet document.
///
/// Only `corporationID` is guaranteed by the schema; the remaining detail
/// elements may be absent from the document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CorporationSheet {
    pub corporation_id: i64,
    pub name: Option<String>,
    pub ticker: Option<String>,
    pub ceo_id: Option<i64>,
    pub member_count: Option<i32>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub tax_rate: Option<f32>,
}
