use chrono::NaiveDateTime;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::Error;
use crate::model::api::AllianceListRow;
use crate::parser::{attribute, API_DATE_FORMAT};

/// Parses an `AllianceList.xml.aspx` response into alliance rows with their
/// member corporation IDs.
///
/// The document must contain a `<result>` element holding a
/// `<rowset name="alliances">`; anything else is an [`Error::InvalidApiResponse`]
/// carrying the raw payload. Alliance rows appear in document order, which
/// the reconciler relies on for last-write-wins semantics.
pub fn parse_alliance_list(body: &str) -> Result<Vec<AllianceListRow>, Error> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut in_result = false;
    let mut in_alliances = false;
    let mut found_alliances_rowset = false;
    // 1 = inside an alliance row, 2 = inside a member corporation row.
    let mut row_depth = 0usize;
    let mut current: Option<AllianceListRow> = None;
    let mut alliances = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.name().as_ref() {
                b"result" => in_result = true,
                b"rowset" if in_result && !in_alliances => {
                    if attribute(&element, "name")?.as_deref() == Some("alliances") {
                        in_alliances = true;
                        found_alliances_rowset = true;
                    }
                }
                b"row" if in_alliances => {
                    row_depth += 1;
                    if row_depth == 1 {
                        current = Some(parse_alliance_row(&element, body)?);
                    } else if let Some(row) = current.as_mut() {
                        push_member_corporation(row, &element, body)?;
                    }
                }
                _ => {}
            },
            Event::Empty(element) => {
                // Member corporation rows are usually self-closing.
                if element.name().as_ref() == b"row" && row_depth >= 1 {
                    if let Some(row) = current.as_mut() {
                        push_member_corporation(row, &element, body)?;
                    }
                }
            }
            Event::End(element) => match element.name().as_ref() {
                b"row" if row_depth > 0 => {
                    row_depth -= 1;
                    if row_depth == 0 {
                        if let Some(row) = current.take() {
                            alliances.push(row);
                        }
                    }
                }
                b"rowset" if in_alliances && row_depth == 0 => in_alliances = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !found_alliances_rowset {
        return Err(Error::InvalidApiResponse(body.to_string()));
    }

    Ok(alliances)
}

fn parse_alliance_row(element: &BytesStart<'_>, body: &str) -> Result<AllianceListRow, Error> {
    let alliance_id = attribute(element, "allianceID")?
        .ok_or_else(|| Error::InvalidApiResponse(body.to_string()))?
        .parse::<i64>()?;
    let name = attribute(element, "name")?
        .ok_or_else(|| Error::InvalidApiResponse(body.to_string()))?;
    let ticker = attribute(element, "shortName")?
        .ok_or_else(|| Error::InvalidApiResponse(body.to_string()))?;
    let member_count = attribute(element, "memberCount")?
        .ok_or_else(|| Error::InvalidApiResponse(body.to_string()))?
        .parse::<i32>()?;
    let date_founded = attribute(element, "startDate")?
        .ok_or_else(|| Error::InvalidApiResponse(body.to_string()))?;
    let date_founded = NaiveDateTime::parse_from_str(&date_founded, API_DATE_FORMAT)?;

    Ok(AllianceListRow {
        alliance_id,
        name,
        ticker,
        member_count,
        date_founded,
        member_corporation_ids: Vec::new(),
    })
}

fn push_member_corporation(
    row: &mut AllianceListRow,
    element: &BytesStart<'_>,
    body: &str,
) -> Result<(), Error> {
    let corporation_id = attribute(element, "corporationID")?
        .ok_or_else(|| Error::InvalidApiResponse(body.to_string()))?
        .parse::<i64>()?;
    row.member_corporation_ids.push(corporation_id);

    Ok(())
}
