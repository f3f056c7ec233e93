//! Loan ledger over the loans snapshot.

use crate::{error::AppResult, models::Loan, storage::SnapshotFile};

/// Active loans, in the order they were granted.
///
/// The ledger itself enforces nothing. Callers check availability with
/// [`is_loaned`](Self::is_loaned) before recording, and call
/// [`persist`](Self::persist) after the member directory has been written.
pub struct LoanLedger {
    loans: Vec<Loan>,
    snapshot: SnapshotFile,
}

impl LoanLedger {
    /// Open the ledger, loading whatever the snapshot currently holds.
    pub fn open(snapshot: SnapshotFile) -> Self {
        let loans = snapshot.load();
        Self { loans, snapshot }
    }

    /// Whether any active loan covers this ISBN.
    pub fn is_loaned(&self, isbn: &str) -> bool {
        self.loans.iter().any(|loan| loan.book.isbn == isbn)
    }

    /// Append a loan to the ledger. Does not persist.
    pub fn record(&mut self, loan: Loan) {
        self.loans.push(loan);
    }

    /// Drop every loan matching this member and ISBN. Does not persist.
    ///
    /// Returns how many entries were dropped.
    pub fn remove_matching(&mut self, member_id: &str, isbn: &str) -> usize {
        let before = self.loans.len();
        self.loans
            .retain(|loan| !(loan.member_id == member_id && loan.book.isbn == isbn));
        before - self.loans.len()
    }

    /// All active loans in grant order.
    pub fn active(&self) -> &[Loan] {
        &self.loans
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    /// Rewrite the snapshot from the in-memory state.
    pub fn persist(&self) -> AppResult<()> {
        self.snapshot.save(&self.loans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, Category};

    use tempfile::TempDir;

    fn ledger(tmp: &TempDir) -> LoanLedger {
        LoanLedger::open(SnapshotFile::new(tmp.path().join("prestamos.json")))
    }

    fn loan(member_id: &str, isbn: &str) -> Loan {
        Loan {
            member_id: member_id.to_string(),
            book: Book {
                title: "T".to_string(),
                author: "A".to_string(),
                category: Category::General,
                isbn: isbn.to_string(),
            },
        }
    }

    #[test]
    fn test_is_loaned_scans_by_isbn() {
        let tmp = TempDir::new().unwrap();
        let mut loans = ledger(&tmp);

        loans.record(loan("U-001", "111"));

        assert!(loans.is_loaned("111"));
        assert!(!loans.is_loaned("222"));
    }

    #[test]
    fn test_remove_matching_requires_both_keys() {
        let tmp = TempDir::new().unwrap();
        let mut loans = ledger(&tmp);

        loans.record(loan("U-001", "111"));
        loans.record(loan("U-002", "222"));

        assert_eq!(loans.remove_matching("U-001", "222"), 0);
        assert_eq!(loans.remove_matching("U-001", "111"), 1);
        assert_eq!(loans.len(), 1);
        assert_eq!(loans.active()[0].member_id, "U-002");
    }

    #[test]
    fn test_persisted_ledger_survives_reload() {
        let tmp = TempDir::new().unwrap();
        {
            let mut loans = ledger(&tmp);
            loans.record(loan("U-001", "111"));
            loans.persist().unwrap();
        }

        let loans = ledger(&tmp);
        assert_eq!(loans.len(), 1);
        assert!(loans.is_loaned("111"));
    }
}
