//! The catalog: sole owner of books, patrons and active loans.
//!
//! Records live in insertion-ordered arenas keyed by handles drawn from one
//! process-wide counter, so a handle never resolves in a catalog other than
//! the one that minted it. Loans refer to their book and patron by handle, so identity checks
//! are handle comparisons and removing a record never leaves a dangling
//! reference behind. Every invariant (a book on loan is unavailable, a loan
//! exists only while its book is out) is enforced here and nowhere else.
//!
//! Operations are split by concern:
//!   - this module: construction, book maintenance, patron registration
//!   - `loans`:     issuing and returning loans, per-patron loan listing
//!   - `search`:    substring search and lookups
//!   - `shared`:    a lock-guarded handle for multi-threaded callers

pub mod loans;
pub mod search;
pub mod shared;

use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::{Book, BookKey, Loan, LoanId, Patron, PatronKey},
};

pub use shared::SharedCatalog;

/// Handles are drawn process-wide so a key minted by one catalog never
/// resolves in another
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Book record plus the revision it is at; `update_book` bumps the revision
#[derive(Debug, Clone)]
struct Shelved {
    book: Book,
    revision: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: CatalogConfig,
    books: IndexMap<BookKey, Shelved>,
    patrons: IndexMap<PatronKey, Patron>,
    loans: IndexMap<LoanId, Loan>,
}

impl Catalog {
    /// Empty catalog with the permissive default policy (duplicates allowed)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &CatalogConfig) -> Self {
        Self {
            config: config.clone(),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn mint(&self) -> u64 {
        NEXT_HANDLE.fetch_add(1, Ordering::Relaxed)
    }

    // =========================================================================
    // BOOKS
    // =========================================================================

    /// Append a book to the catalog.
    ///
    /// Unless `allow_duplicate_isbn` is disabled, an ISBN already present is
    /// accepted and the new record simply sits after the existing one.
    pub fn add_book(&mut self, book: Book) -> AppResult<BookKey> {
        if !self.config.allow_duplicate_isbn {
            if let Some(existing) = self.book_key(book.isbn()) {
                tracing::warn!("Catalog add: ISBN {} already held by {}", book.isbn(), existing);
                return Err(AppError::Conflict(format!(
                    "A book with ISBN {} already exists",
                    book.isbn()
                )));
            }
        }

        let key = BookKey(self.mint());
        tracing::info!("Catalog add: {} isbn={} title={:?}", key, book.isbn(), book.title());
        self.books.insert(key, Shelved { book, revision: 0 });
        Ok(key)
    }

    /// Replace wholesale the first book sharing `book`'s ISBN.
    ///
    /// The replaced record keeps its handle and its position in catalog order.
    /// Availability comes from the replacement as given. Loans issued before
    /// the update belong to the previous revision and no longer free the book
    /// when returned.
    pub fn update_book(&mut self, book: Book) -> AppResult<BookKey> {
        let key = self.book_key(book.isbn()).ok_or_else(|| {
            tracing::warn!("Catalog update: ISBN {} not found", book.isbn());
            AppError::NotFound(format!("Book with ISBN {} not found", book.isbn()))
        })?;

        tracing::info!("Catalog update: {} isbn={}", key, book.isbn());
        if let Some(slot) = self.books.get_mut(&key) {
            slot.book = book;
            slot.revision += 1;
        }
        Ok(key)
    }

    /// Remove the first book with this ISBN and hand it back.
    ///
    /// Active loans on the book are left untouched.
    pub fn remove_book(&mut self, isbn: &str) -> AppResult<Book> {
        let index = self.books.values().position(|s| s.book.isbn() == isbn);
        let (key, slot) = index
            .and_then(|i| self.books.shift_remove_index(i))
            .ok_or_else(|| {
                tracing::warn!("Catalog remove: ISBN {} not found", isbn);
                AppError::NotFound(format!("Book with ISBN {} not found", isbn))
            })?;

        if self.loans.values().any(|l| l.book() == key) {
            tracing::warn!("Catalog remove: {} isbn={} is still on loan", key, isbn);
        }
        tracing::info!("Catalog remove: {} isbn={}", key, isbn);
        Ok(slot.book)
    }

    pub fn book(&self, key: BookKey) -> Option<&Book> {
        self.books.get(&key).map(|s| &s.book)
    }

    /// Handle of the first book with this ISBN
    pub fn book_key(&self, isbn: &str) -> Option<BookKey> {
        self.books
            .iter()
            .find(|(_, s)| s.book.isbn() == isbn)
            .map(|(key, _)| *key)
    }

    /// All books with their handles, in catalog order
    pub fn books(&self) -> impl Iterator<Item = (BookKey, &Book)> {
        self.books.iter().map(|(key, s)| (*key, &s.book))
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    // =========================================================================
    // PATRONS
    // =========================================================================

    /// Append a patron.
    ///
    /// Caller-assigned ids are only checked for uniqueness when
    /// `allow_duplicate_patron_id` is disabled.
    pub fn register_patron(&mut self, patron: Patron) -> AppResult<PatronKey> {
        if !self.config.allow_duplicate_patron_id {
            if let Some(existing) = self.patron_key(patron.id()) {
                tracing::warn!("Catalog register: patron id {} already held by {}", patron.id(), existing);
                return Err(AppError::Conflict(format!(
                    "A patron with id {} is already registered",
                    patron.id()
                )));
            }
        }

        let key = PatronKey(self.mint());
        tracing::info!(
            "Catalog register: {} id={} role={} name={:?}",
            key,
            patron.id(),
            patron.role(),
            patron.name()
        );
        self.patrons.insert(key, patron);
        Ok(key)
    }

    pub fn patron(&self, key: PatronKey) -> Option<&Patron> {
        self.patrons.get(&key)
    }

    /// Handle of the first patron registered with this id
    pub fn patron_key(&self, id: i32) -> Option<PatronKey> {
        self.patrons
            .iter()
            .find(|(_, p)| p.id() == id)
            .map(|(key, _)| *key)
    }

    pub fn patrons(&self) -> impl Iterator<Item = (PatronKey, &Patron)> {
        self.patrons.iter().map(|(key, patron)| (*key, patron))
    }

    pub fn patron_count(&self) -> usize {
        self.patrons.len()
    }
}
