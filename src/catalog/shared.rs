//! Lock-guarded catalog handle for callers running on several threads.
//!
//! Each forwarded operation runs entirely under one mutex, so the
//! availability check and the flag flip of `issue_loan` cannot interleave
//! with another caller. Results are cloned out of the guard.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::{Book, BookKey, Loan, Patron, PatronKey},
};

use super::Catalog;

#[derive(Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    pub fn with_config(config: &CatalogConfig) -> Self {
        Self::new(Catalog::with_config(config))
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Catalog>> {
        self.inner.lock().map_err(|_| {
            tracing::error!("Catalog lock poisoned");
            AppError::Internal("catalog lock poisoned".to_string())
        })
    }

    /// Run several operations under a single lock acquisition
    pub fn with<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> AppResult<R> {
        let mut catalog = self.lock()?;
        Ok(f(&mut catalog))
    }

    pub fn add_book(&self, book: Book) -> AppResult<BookKey> {
        self.lock()?.add_book(book)
    }

    pub fn update_book(&self, book: Book) -> AppResult<BookKey> {
        self.lock()?.update_book(book)
    }

    pub fn remove_book(&self, isbn: &str) -> AppResult<Book> {
        self.lock()?.remove_book(isbn)
    }

    pub fn register_patron(&self, patron: Patron) -> AppResult<PatronKey> {
        self.lock()?.register_patron(patron)
    }

    pub fn issue_loan(
        &self,
        book: BookKey,
        patron: PatronKey,
        loan_date: impl Into<String>,
        due_date: impl Into<String>,
    ) -> AppResult<Loan> {
        self.lock()?.issue_loan(book, patron, loan_date, due_date)
    }

    pub fn return_loan(&self, loan: &Loan) -> AppResult<()> {
        self.lock()?.return_loan(loan);
        Ok(())
    }

    pub fn search_books(&self, criterion: &str) -> AppResult<Vec<Book>> {
        Ok(self
            .lock()?
            .search_books(criterion)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn get_book_details(&self, isbn: &str) -> AppResult<Book> {
        self.lock()?.get_book_details(isbn).cloned()
    }

    pub fn get_loan_history(&self, patron: PatronKey) -> AppResult<Vec<Loan>> {
        Ok(self
            .lock()?
            .get_loan_history(patron)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Consume the handle and take the catalog back once no clone remains
    pub fn into_inner(self) -> AppResult<Catalog> {
        let mutex = Arc::try_unwrap(self.inner)
            .map_err(|_| AppError::Internal("catalog still shared".to_string()))?;
        mutex
            .into_inner()
            .map_err(|_| AppError::Internal("catalog lock poisoned".to_string()))
    }
}
