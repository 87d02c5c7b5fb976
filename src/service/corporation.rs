use sea_orm::DatabaseConnection;

use crate::client::ApiClient;
use crate::data::corporation::CorporationRepository;
use crate::error::Error;
use crate::parser::corporation::parse_corporation_sheet;
use crate::service::progress::{SyncEvent, SyncObserver, DEFAULT_OBSERVER};

pub static CORPORATION_SHEET_PATH: &str = "/corp/CorporationSheet.xml.aspx";

pub struct CorporationService<'a> {
    db: &'a DatabaseConnection,
    api_client: &'a ApiClient,
    observer: &'a dyn SyncObserver,
}

impl<'a> CorporationService<'a> {
    /// Creates a new instance of [`CorporationService`] reporting progress
    /// through `tracing`
    pub fn new(db: &'a DatabaseConnection, api_client: &'a ApiClient) -> Self {
        Self {
            db,
            api_client,
            observer: &DEFAULT_OBSERVER,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn SyncObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Fetches the corporation's sheet document and merges its details into
    /// the stored record, creating the corporation on first observation.
    ///
    /// Independent of other corporations; the alliance reference is owned by
    /// the full alliance sync and is not modified here. Fetch and parse
    /// failures propagate to the caller.
    pub async fn update_corporation(
        &self,
        corporation_id: i64,
    ) -> Result<entity::eve_corporation::Model, Error> {
        let params = [("corporationID", corporation_id.to_string())];
        let body = self.api_client.fetch(CORPORATION_SHEET_PATH, &params).await?;
        let sheet = parse_corporation_sheet(&body)?;

        let corporation = CorporationRepository::new(self.db)
            .upsert_sheet(&sheet)
            .await?;

        self.observer.notify(SyncEvent::CorporationUpdated {
            corporation_id: sheet.corporation_id,
        });

        Ok(corporation)
    }
}
