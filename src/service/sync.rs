use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::client::ApiClient;
use crate::data::alliance::AllianceRepository;
use crate::data::corporation::CorporationRepository;
use crate::error::Error;
use crate::model::stats::SyncStats;
use crate::parser::alliance::parse_alliance_list;
use crate::service::progress::{SyncEvent, SyncObserver, DEFAULT_OBSERVER};

pub static ALLIANCE_LIST_PATH: &str = "/eve/AllianceList.xml.aspx";

pub struct AllianceSyncService<'a> {
    db: &'a DatabaseConnection,
    api_client: &'a ApiClient,
    observer: &'a dyn SyncObserver,
}

impl<'a> AllianceSyncService<'a> {
    /// Creates a new instance of [`AllianceSyncService`] reporting progress
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

    /// Runs one full alliance sync: fetch the master alliance list, upsert
    /// every alliance and member corporation, then clear the alliance
    /// reference of every stored corporation not seen in this snapshot.
    ///
    /// Fetch and parse failures abort before any write, so a partial or
    /// failed document can never clear legitimate memberships. When the same
    /// corporation appears under several alliances the alliance later in the
    /// document wins. Assumes at most one sync runs at a time.
    pub async fn sync_alliances(&self) -> Result<SyncStats, Error> {
        let body = self.api_client.fetch(ALLIANCE_LIST_PATH, &[]).await?;
        let rows = parse_alliance_list(&body)?;

        self.observer.notify(SyncEvent::AllianceListParsed {
            alliances: rows.len(),
        });

        let alliance_repo = AllianceRepository::new(self.db);
        let corporation_repo = CorporationRepository::new(self.db);

        // Scoped to this invocation; accumulates across all alliance rows.
        let mut seen_corporations: HashSet<i64> = HashSet::new();
        let total = rows.len();
        let mut member_corporations = 0usize;

        for (index, row) in rows.iter().enumerate() {
            let alliance = alliance_repo.upsert(row).await?;

            for &corporation_id in &row.member_corporation_ids {
                corporation_repo
                    .upsert_membership(corporation_id, alliance.id, row.date_founded)
                    .await?;
                seen_corporations.insert(corporation_id);
            }
            member_corporations += row.member_corporation_ids.len();

            self.observer.notify(SyncEvent::AllianceSynced {
                alliance_id: row.alliance_id,
                position: index + 1,
                total,
                member_corporations: row.member_corporation_ids.len(),
            });
        }

        let seen: Vec<i64> = seen_corporations.into_iter().collect();
        let cleared_memberships = corporation_repo.clear_stale_memberships(&seen).await?;

        self.observer.notify(SyncEvent::StaleMembershipsCleared {
            corporations: cleared_memberships,
        });

        Ok(SyncStats {
            alliances: total,
            member_corporations,
            cleared_memberships,
        })
    }
}
