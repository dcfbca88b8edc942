//! Book search and lookups

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::Catalog;

impl Catalog {
    /// Books whose title, author, ISBN or genre contains `criterion`.
    ///
    /// Matching is case-sensitive; an empty criterion returns the whole
    /// catalog. Results follow catalog order.
    pub fn search_books(&self, criterion: &str) -> Vec<&Book> {
        let results: Vec<&Book> = self
            .books
            .values()
            .map(|s| &s.book)
            .filter(|b| b.matches(criterion))
            .collect();
        tracing::debug!("Catalog search: {:?} matched {} book(s)", criterion, results.len());
        results
    }

    /// First book with this ISBN
    pub fn get_book_details(&self, isbn: &str) -> AppResult<&Book> {
        self.books
            .values()
            .map(|s| &s.book)
            .find(|b| b.isbn() == isbn)
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// Books currently on the shelf, in catalog order
    pub fn available_books(&self) -> Vec<&Book> {
        self.books
            .values()
            .map(|s| &s.book)
            .filter(|b| b.is_available())
            .collect()
    }
}
