//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};

/// Catalog-minted handle for a book record.
///
/// Stays valid for as long as the book is held by the catalog that issued it,
/// including across `update_book`. Never reused once the book is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookKey(pub(crate) u64);

impl std::fmt::Display for BookKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "book#{}", self.0)
    }
}

/// Extra bibliographic data carried by academic titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicInfo {
    pub publisher: String,
    pub edition: i32,
}

/// Book record held by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    genre: String,
    year: i32,
    available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    academic: Option<AcademicInfo>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        available: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            genre: genre.into(),
            year,
            available,
            academic: None,
        }
    }

    /// Academic title: a plain book plus publisher and edition number
    #[allow(clippy::too_many_arguments)]
    pub fn academic(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        available: bool,
        publisher: impl Into<String>,
        edition: i32,
    ) -> Self {
        Self::new(title, author, isbn, genre, year, available).with_academic(AcademicInfo {
            publisher: publisher.into(),
            edition,
        })
    }

    pub fn with_academic(mut self, info: AcademicInfo) -> Self {
        self.academic = Some(info);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn academic_info(&self) -> Option<&AcademicInfo> {
        self.academic.as_ref()
    }

    pub fn is_academic(&self) -> bool {
        self.academic.is_some()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.academic.as_ref().map(|a| a.publisher.as_str())
    }

    pub fn edition(&self) -> Option<i32> {
        self.academic.as_ref().map(|a| a.edition)
    }

    /// True when `criterion` is a case-sensitive substring of the title,
    /// author, ISBN or genre. The empty string matches every book.
    pub fn matches(&self, criterion: &str) -> bool {
        self.title.contains(criterion)
            || self.author.contains(criterion)
            || self.isbn.contains(criterion)
            || self.genre.contains(criterion)
    }
}
