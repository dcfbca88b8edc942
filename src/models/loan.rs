//! Loan (borrow) model and related types

use serde::{Deserialize, Serialize};

use super::book::BookKey;
use super::patron::PatronKey;

/// Identity of a loan record, unique within the catalog that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoanId(pub(crate) u64);

impl std::fmt::Display for LoanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "loan#{}", self.0)
    }
}

/// Active loan linking one book and one patron.
///
/// Dates are kept exactly as the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    id: LoanId,
    book: BookKey,
    book_revision: u32,
    patron: PatronKey,
    loan_date: String,
    due_date: String,
}

impl Loan {
    pub(crate) fn new(
        id: LoanId,
        book: BookKey,
        book_revision: u32,
        patron: PatronKey,
        loan_date: String,
        due_date: String,
    ) -> Self {
        Self {
            id,
            book,
            book_revision,
            patron,
            loan_date,
            due_date,
        }
    }

    pub fn id(&self) -> LoanId {
        self.id
    }

    pub fn book(&self) -> BookKey {
        self.book
    }

    /// Revision of the book record at the time of issue
    pub fn book_revision(&self) -> u32 {
        self.book_revision
    }

    pub fn patron(&self) -> PatronKey {
        self.patron
    }

    pub fn loan_date(&self) -> &str {
        &self.loan_date
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }
}
