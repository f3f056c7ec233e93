//! Lending service

use crate::{
    error::{AppError, AppResult},
    models::Loan,
    repository::{CatalogStore, LoanLedger, MemberDirectory},
};

/// Borrow and return operations spanning the three stores.
///
/// Built per call by [`Library::lending`](crate::repository::Library::lending)
/// so each operation runs against the session's current state. Both
/// operations keep the member borrow lists and the ledger in step, and write
/// the members snapshot before the loans snapshot.
pub struct LendingService<'a> {
    catalog: &'a CatalogStore,
    members: &'a mut MemberDirectory,
    loans: &'a mut LoanLedger,
}

impl<'a> LendingService<'a> {
    pub fn new(
        catalog: &'a CatalogStore,
        members: &'a mut MemberDirectory,
        loans: &'a mut LoanLedger,
    ) -> Self {
        Self {
            catalog,
            members,
            loans,
        }
    }

    /// Grant a loan of `isbn` to `member_id`.
    ///
    /// Checks run in a fixed order: member registration, then loan state,
    /// then catalog presence. The first failing check decides the error.
    pub fn borrow_book(&mut self, member_id: &str, isbn: &str) -> AppResult<()> {
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| AppError::UnknownMember(member_id.to_string()))?;
        if self.loans.is_loaned(isbn) {
            return Err(AppError::AlreadyLoaned(isbn.to_string()));
        }
        let book = self
            .catalog
            .get(isbn)
            .ok_or_else(|| AppError::UnknownBook(isbn.to_string()))?
            .clone();

        member.borrowed.push(book.clone());
        self.loans.record(Loan {
            member_id: member_id.to_string(),
            book,
        });

        self.members.persist()?;
        self.loans.persist()?;

        tracing::info!("Loaned {} to member {}", isbn, member_id);
        Ok(())
    }

    /// Take back the member's copy of `isbn` and clear the matching loans.
    ///
    /// The member's first borrowed copy with this ISBN is removed; the
    /// ledger drops every entry for the member and ISBN pair.
    pub fn return_book(&mut self, member_id: &str, isbn: &str) -> AppResult<()> {
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| AppError::UnknownMember(member_id.to_string()))?;
        let position = member
            .borrowed
            .iter()
            .position(|book| book.isbn == isbn)
            .ok_or_else(|| AppError::NotBorrowed {
                member_id: member_id.to_string(),
                isbn: isbn.to_string(),
            })?;

        member.borrowed.remove(position);
        self.loans.remove_matching(member_id, isbn);

        self.members.persist()?;
        self.loans.persist()?;

        tracing::info!("Returned {} from member {}", isbn, member_id);
        Ok(())
    }
}
