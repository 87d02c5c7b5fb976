use std::sync::Mutex;

use mockito::{Matcher, Mock, ServerGuard};

use crate::service::corporation::CORPORATION_SHEET_PATH;
use crate::service::progress::{SyncEvent, SyncObserver};
use crate::service::sync::ALLIANCE_LIST_PATH;

/// Mocks the alliance list endpoint with the given response body
pub fn mock_alliance_list_endpoint(
    server: &mut ServerGuard,
    body: &str,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", ALLIANCE_LIST_PATH)
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(body)
        .expect(expected_requests)
        .create()
}

/// Mocks the corporation sheet endpoint for one corporation ID
pub fn mock_corporation_sheet_endpoint(
    server: &mut ServerGuard,
    corporation_id: i64,
    body: &str,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", CORPORATION_SHEET_PATH)
        .match_query(Matcher::UrlEncoded(
            "corporationID".into(),
            corporation_id.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(body)
        .expect(expected_requests)
        .create()
}

/// Mocks the corporation sheet endpoint answering a server error
pub fn mock_corporation_sheet_failure(
    server: &mut ServerGuard,
    corporation_id: i64,
    status: usize,
) -> Mock {
    server
        .mock("GET", CORPORATION_SHEET_PATH)
        .match_query(Matcher::UrlEncoded(
            "corporationID".into(),
            corporation_id.to_string(),
        ))
        .with_status(status)
        .expect(1)
        .create()
}

/// [`SyncObserver`] that records every event for later assertions.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SyncEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<SyncEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SyncObserver for RecordingObserver {
    fn notify(&self, event: SyncEvent) {
        self.events.lock().unwrap().push(event);
    }
}
