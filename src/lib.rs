//! Library catalog
//!
//! An in-memory catalog of books, registered patrons and active loans,
//! with substring search, loan issuance and loan return. The `Catalog` owns
//! every record and is the only place the availability rules are enforced.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use catalog::{Catalog, SharedCatalog};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
