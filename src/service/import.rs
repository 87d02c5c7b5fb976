use sea_orm::DatabaseConnection;

use crate::client::ApiClient;
use crate::data::alliance::AllianceRepository;
use crate::data::corporation::CorporationRepository;
use crate::error::Error;
use crate::model::stats::ImportStats;
use crate::service::corporation::CorporationService;
use crate::service::progress::{SyncEvent, SyncObserver, DEFAULT_OBSERVER};

pub struct CorpImportService<'a> {
    db: &'a DatabaseConnection,
    api_client: &'a ApiClient,
    observer: &'a dyn SyncObserver,
}

impl<'a> CorpImportService<'a> {
    /// Creates a new instance of [`CorpImportService`] reporting progress
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

    /// Refreshes the corporation sheet of every member corporation of every
    /// stored alliance, sequentially.
    ///
    /// Membership is read from the database, so a full alliance sync must
    /// have completed beforehand or the member lists will be empty or stale.
    /// This walks the corporation sheet endpoint once per member and can take
    /// a long time; it should not be run often. Any fetch or parse failure
    /// aborts the whole import, and no resumption state is kept, so a rerun
    /// starts over from the first alliance.
    pub async fn import_alliance_corporations(&self) -> Result<ImportStats, Error> {
        let alliances = AllianceRepository::new(self.db).all().await?;
        let corporation_repo = CorporationRepository::new(self.db);
        let corporation_service =
            CorporationService::new(self.db, self.api_client).with_observer(self.observer);

        let total = alliances.len();
        let mut corporations = 0usize;

        for (index, alliance) in alliances.iter().enumerate() {
            self.observer.notify(SyncEvent::AllianceImportStarted {
                alliance_id: alliance.alliance_id,
                position: index + 1,
                total,
            });

            let members = corporation_repo.find_by_alliance(alliance.id).await?;
            for member in members {
                corporation_service
                    .update_corporation(member.corporation_id)
                    .await?;
                corporations += 1;
            }
        }

        Ok(ImportStats {
            alliances: total,
            corporations,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::data::corporation::CorporationRepository;
    use crate::error::Error;
    use crate::service::import::CorpImportService;
    use crate::service::progress::SyncEvent;
    use crate::service::sync::AllianceSyncService;
    use crate::util::test::fixture::{alliance_fixture, alliance_list_xml, corporation_sheet_xml};
    use crate::util::test::mock::{
        mock_alliance_list_endpoint, mock_corporation_sheet_endpoint,
        mock_corporation_sheet_failure, RecordingObserver,
    };
    use crate::util::test::setup::{test_setup, TestSetup};

    /// Seeds membership state by running a full alliance sync
    async fn seed_membership(test: &mut TestSetup, body: &str) {
        let endpoint = mock_alliance_list_endpoint(&mut test.server, body, 1);
        AllianceSyncService::new(&test.db, &test.api_client)
            .sync_alliances()
            .await
            .unwrap();
        endpoint.assert();
    }

    /// Expect every member of every alliance to get its sheet fetched
    #[tokio::test]
    async fn imports_all_member_corporations() {
        let mut test = test_setup().await.unwrap();

        let body = alliance_list_xml(&[
            alliance_fixture(1001, vec![101, 102]),
            alliance_fixture(1002, vec![103]),
        ]);
        seed_membership(&mut test, &body).await;

        let endpoints: Vec<_> = [101, 102, 103]
            .into_iter()
            .map(|corporation_id| {
                let sheet = corporation_sheet_xml(corporation_id, "Imported Corp");
                mock_corporation_sheet_endpoint(&mut test.server, corporation_id, &sheet, 1)
            })
            .collect();

        let import_service = CorpImportService::new(&test.db, &test.api_client);
        let stats = import_service.import_alliance_corporations().await.unwrap();

        assert_eq!(stats.alliances, 2);
        assert_eq!(stats.corporations, 3);

        for endpoint in endpoints {
            endpoint.assert();
        }

        let corporation = CorporationRepository::new(&test.db)
            .get_by_corporation_id(101)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(corporation.name.as_deref(), Some("Imported Corp"));
        assert!(corporation.alliance_id.is_some(), "membership kept");
    }

    /// Expect zero work when no sync has populated membership yet
    #[tokio::test]
    async fn empty_store_imports_nothing() {
        let test = test_setup().await.unwrap();

        let import_service = CorpImportService::new(&test.db, &test.api_client);
        let stats = import_service.import_alliance_corporations().await.unwrap();

        assert_eq!(stats.alliances, 0);
        assert_eq!(stats.corporations, 0);
    }

    /// Expect a per-corporation fetch failure to abort the whole import
    #[tokio::test]
    async fn aborts_on_first_failure() {
        let mut test = test_setup().await.unwrap();

        let body = alliance_list_xml(&[alliance_fixture(1001, vec![101, 102])]);
        seed_membership(&mut test, &body).await;

        let first_sheet = corporation_sheet_xml(101, "Imported Corp");
        let first = mock_corporation_sheet_endpoint(&mut test.server, 101, &first_sheet, 1);
        let second = mock_corporation_sheet_failure(&mut test.server, 102, 500);

        let import_service = CorpImportService::new(&test.db, &test.api_client);
        let result = import_service.import_alliance_corporations().await;

        assert!(matches!(result, Err(Error::FetchStatus { status: 500, .. })));

        first.assert();
        second.assert();
    }

    /// Expect incremental progress events per alliance and corporation
    #[tokio::test]
    async fn reports_import_progress() {
        let mut test = test_setup().await.unwrap();

        let body = alliance_list_xml(&[alliance_fixture(1001, vec![101])]);
        seed_membership(&mut test, &body).await;

        let sheet = corporation_sheet_xml(101, "Imported Corp");
        let endpoint = mock_corporation_sheet_endpoint(&mut test.server, 101, &sheet, 1);

        let observer = RecordingObserver::default();
        let import_service =
            CorpImportService::new(&test.db, &test.api_client).with_observer(&observer);
        import_service.import_alliance_corporations().await.unwrap();
        endpoint.assert();

        assert_eq!(
            observer.events(),
            vec![
                SyncEvent::AllianceImportStarted {
                    alliance_id: 1001,
                    position: 1,
                    total: 1,
                },
                SyncEvent::CorporationUpdated {
                    corporation_id: 101,
                },
            ]
        );
    }
}
