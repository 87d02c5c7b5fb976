use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Error;
use crate::model::api::CorporationSheet;

/// Parses a `CorporationSheet.xml.aspx` response.
///
/// The schema guarantees a `<result>` element with a `<corporationID>` child;
/// a document missing either is an [`Error::InvalidApiResponse`]. The
/// remaining detail elements are optional and stay `None` when absent.
pub fn parse_corporation_sheet(body: &str) -> Result<CorporationSheet, Error> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut in_result = false;
    let mut corporation_id: Option<i64> = None;
    let mut sheet = CorporationSheet::default();

    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                let name = element.name();
                if name.as_ref() == b"result" {
                    in_result = true;
                    continue;
                }
                if !in_result {
                    continue;
                }

                match name.as_ref() {
                    b"corporationID" => {
                        let text = reader.read_text(name)?;
                        corporation_id = Some(text.trim().parse::<i64>()?);
                    }
                    b"corporationName" => {
                        sheet.name = Some(reader.read_text(name)?.trim().to_string());
                    }
                    b"ticker" => {
                        sheet.ticker = Some(reader.read_text(name)?.trim().to_string());
                    }
                    b"ceoID" => {
                        let text = reader.read_text(name)?;
                        sheet.ceo_id = Some(text.trim().parse::<i64>()?);
                    }
                    b"memberCount" => {
                        let text = reader.read_text(name)?;
                        sheet.member_count = Some(text.trim().parse::<i32>()?);
                    }
                    b"description" => {
                        sheet.description = Some(reader.read_text(name)?.trim().to_string());
                    }
                    b"url" => {
                        sheet.url = Some(reader.read_text(name)?.trim().to_string());
                    }
                    b"taxRate" => {
                        let text = reader.read_text(name)?;
                        sheet.tax_rate = Some(text.trim().parse::<f32>()?);
                    }
                    _ => {}
                }
            }
            Event::End(element) => {
                if element.name().as_ref() == b"result" {
                    in_result = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match corporation_id {
        Some(corporation_id) => Ok(CorporationSheet {
            corporation_id,
            ..sheet
        }),
        None => Err(Error::InvalidApiResponse(body.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::parser::corporation::parse_corporation_sheet;
    use crate::util::test::fixture::corporation_sheet_xml;

    /// Expect all detail fields from a complete sheet
    #[test]
    fn parses_full_sheet() {
        let body = corporation_sheet_xml(288888, "Vanguard Frontiers");

        let sheet = parse_corporation_sheet(&body).unwrap();

        assert_eq!(sheet.corporation_id, 288888);
        assert_eq!(sheet.name.as_deref(), Some("Vanguard Frontiers"));
        assert_eq!(sheet.ticker.as_deref(), Some("VF-288888"));
        assert_eq!(sheet.ceo_id, Some(90000001));
        assert_eq!(sheet.member_count, Some(120));
        assert_eq!(sheet.tax_rate, Some(5.0));
    }

    /// Expect optional elements to stay None when absent
    #[test]
    fn tolerates_missing_detail_elements() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<eveapi version="2">
  <result>
    <corporationID>288888</corporationID>
    <corporationName>Vanguard Frontiers</corporationName>
  </result>
</eveapi>"#;

        let sheet = parse_corporation_sheet(body).unwrap();

        assert_eq!(sheet.corporation_id, 288888);
        assert_eq!(sheet.name.as_deref(), Some("Vanguard Frontiers"));
        assert_eq!(sheet.ceo_id, None);
        assert_eq!(sheet.tax_rate, None);
    }

    /// Expect InvalidApiResponse when corporationID is missing
    #[test]
    fn rejects_sheet_without_corporation_id() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<eveapi version="2">
  <result>
    <corporationName>Vanguard Frontiers</corporationName>
  </result>
</eveapi>"#;

        let result = parse_corporation_sheet(body);

        assert!(matches!(result, Err(Error::InvalidApiResponse(_))));
    }

    /// Expect InvalidApiResponse for an API error envelope with no result
    #[test]
    fn rejects_error_envelope() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<eveapi version="2">
  <error code="523">Corporation not found</error>
</eveapi>"#;

        let result = parse_corporation_sheet(body);

        assert!(matches!(result, Err(Error::InvalidApiResponse(_))));
    }
}
