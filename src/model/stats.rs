/// Result of one full alliance sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncStats {
    /// Alliance rows written.
    pub alliances: usize,
    /// Membership rows written (one per corporation per alliance row).
    pub member_corporations: usize,
    /// Stored corporations whose alliance reference was cleared because they
    /// were not seen in any member rowset this sync.
    pub cleared_memberships: u64,
}

/// Result of one bulk corporation import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportStats {
    /// Alliances walked.
    pub alliances: usize,
    /// Corporation sheets fetched and stored.
    pub corporations: usize,
}
