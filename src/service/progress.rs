/// Progress events emitted while a sync or bulk import runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// The alliance list document was fetched and parsed.
    AllianceListParsed { alliances: usize },
    /// One alliance row and its member corporations were written.
    AllianceSynced {
        alliance_id: i64,
        position: usize,
        total: usize,
        member_corporations: usize,
    },
    /// Corporations no longer present in any member rowset had their alliance
    /// reference cleared.
    StaleMembershipsCleared { corporations: u64 },
    /// The bulk importer moved on to the next alliance.
    AllianceImportStarted {
        alliance_id: i64,
        position: usize,
        total: usize,
    },
    /// A corporation sheet was fetched and stored.
    CorporationUpdated { corporation_id: i64 },
}

/// Receives progress notifications from the sync services.
///
/// The services default to [`TracingObserver`]; callers that need
/// machine-readable progress can supply their own implementation.
pub trait SyncObserver: Send + Sync {
    fn notify(&self, event: SyncEvent);
}

/// [`SyncObserver`] that reports progress through `tracing` logs.
pub struct TracingObserver;

impl SyncObserver for TracingObserver {
    fn notify(&self, event: SyncEvent) {
        match event {
            SyncEvent::AllianceListParsed { alliances } => {
                tracing::info!(alliances, "parsed alliance list");
            }
            SyncEvent::AllianceSynced {
                alliance_id,
                position,
                total,
                member_corporations,
            } => {
                tracing::info!(
                    alliance_id,
                    member_corporations,
                    "synced alliance {position} of {total}"
                );
            }
            SyncEvent::StaleMembershipsCleared { corporations } => {
                tracing::info!(corporations, "cleared stale alliance memberships");
            }
            SyncEvent::AllianceImportStarted {
                alliance_id,
                position,
                total,
            } => {
                tracing::info!(alliance_id, "importing corporations for alliance {position} of {total}");
            }
            SyncEvent::CorporationUpdated { corporation_id } => {
                tracing::info!(corporation_id, "updated corporation");
            }
        }
    }
}

pub(crate) static DEFAULT_OBSERVER: TracingObserver = TracingObserver;
