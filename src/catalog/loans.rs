//! Loan issuance, return and per-patron listing

use crate::{
    error::{AppError, AppResult},
    models::{BookKey, Loan, LoanId, PatronKey},
};

use super::Catalog;

impl Catalog {
    /// Lend a book to a patron.
    ///
    /// Fails with `Unavailable` when the book is already out. On success the
    /// book is flagged unavailable and the new loan is recorded after every
    /// loan already active. Dates are stored verbatim.
    pub fn issue_loan(
        &mut self,
        book: BookKey,
        patron: PatronKey,
        loan_date: impl Into<String>,
        due_date: impl Into<String>,
    ) -> AppResult<Loan> {
        if !self.patrons.contains_key(&patron) {
            tracing::warn!("Loan issue: {} is not registered", patron);
            return Err(AppError::NotFound(format!("Patron {} not found", patron)));
        }

        let record = self.books.get(&book).ok_or_else(|| {
            tracing::warn!("Loan issue: {} is not in the catalog", book);
            AppError::NotFound(format!("Book {} not found", book))
        })?;

        if !record.book.is_available() {
            tracing::warn!("Loan issue: isbn={} is already on loan", record.book.isbn());
            return Err(AppError::Unavailable(format!(
                "Book with ISBN {} is not available",
                record.book.isbn()
            )));
        }
        let revision = record.revision;

        let id = LoanId(self.mint());
        let loan = Loan::new(id, book, revision, patron, loan_date.into(), due_date.into());

        if let Some(record) = self.books.get_mut(&book) {
            record.book.set_available(false);
            tracing::info!(
                "Loan issue: {} isbn={} to {} ({} -> {})",
                id,
                record.book.isbn(),
                patron,
                loan.loan_date(),
                loan.due_date()
            );
        }
        self.loans.insert(id, loan.clone());
        Ok(loan)
    }

    /// Close a loan.
    ///
    /// The loan's book is always flagged available again, even when the loan
    /// is no longer (or never was) active. Returning an inactive loan is
    /// otherwise a no-op. A book replaced by `update_book` since the loan was
    /// issued is a different record and keeps its own flag.
    pub fn return_loan(&mut self, loan: &Loan) {
        match self.books.get_mut(&loan.book()) {
            Some(slot) if slot.revision == loan.book_revision() => slot.book.set_available(true),
            Some(_) => tracing::debug!(
                "Loan return: {} was replaced after {} was issued, flag left as is",
                loan.book(),
                loan.id()
            ),
            None => tracing::debug!("Loan return: {} no longer held, nothing to restore", loan.book()),
        }

        match self.loans.shift_remove(&loan.id()) {
            Some(_) => tracing::info!("Loan return: {} closed", loan.id()),
            None => tracing::debug!("Loan return: {} is not active", loan.id()),
        }
    }

    /// Active loans held by this patron, oldest first.
    ///
    /// Returned loans are discarded, so this is the patron's current
    /// borrowing rather than a full history.
    pub fn get_loan_history(&self, patron: PatronKey) -> Vec<&Loan> {
        let loans: Vec<&Loan> = self.loans.values().filter(|l| l.patron() == patron).collect();
        tracing::debug!("Loan history: {} has {} active loan(s)", patron, loans.len());
        loans
    }

    pub fn loan(&self, id: LoanId) -> Option<&Loan> {
        self.loans.get(&id)
    }

    /// Every active loan, in issue order
    pub fn active_loans(&self) -> impl Iterator<Item = &Loan> {
        self.loans.values()
    }

    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }
}
