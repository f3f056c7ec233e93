//! Store layer over the JSON snapshot files

pub mod catalog;
pub mod loans;
pub mod members;

pub use catalog::CatalogStore;
pub use loans::LoanLedger;
pub use members::MemberDirectory;

use crate::config::StorageConfig;
use crate::services::lending::LendingService;
use crate::storage::SnapshotFile;

/// A library session: the three stores loaded from their snapshot files.
pub struct Library {
    pub catalog: CatalogStore,
    pub members: MemberDirectory,
    pub loans: LoanLedger,
}

impl Library {
    /// Open a session over the snapshot files named by the configuration.
    ///
    /// Missing or unreadable snapshots open as empty collections.
    pub fn open(storage: &StorageConfig) -> Self {
        Self {
            catalog: CatalogStore::open(SnapshotFile::new(storage.catalog_path())),
            members: MemberDirectory::open(SnapshotFile::new(storage.members_path())),
            loans: LoanLedger::open(SnapshotFile::new(storage.loans_path())),
        }
    }

    /// Lending operations over this session's stores.
    pub fn lending(&mut self) -> LendingService<'_> {
        LendingService::new(&self.catalog, &mut self.members, &mut self.loans)
    }
}
