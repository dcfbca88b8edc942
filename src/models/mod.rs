//! Data models for the library catalog

pub mod book;
pub mod loan;
pub mod patron;

// Re-export commonly used types
pub use book::{AcademicInfo, Book, BookKey};
pub use loan::{Loan, LoanId};
pub use patron::{Patron, PatronKey, PatronKind, PatronRole};
