use std::{fmt::Debug, sync::Arc};

use crate::{error::CatalogResult, model::book::Book, options::DuplicatePolicy};

/// In-memory repository implementation.
pub mod memory;

/// Storage for books.
///
/// Besides the main list, kept in insertion order, a repository tracks the
/// set of books inserted as recipe-tagged.
pub trait BookRepository: Debug {
    /// Appends a book to the main list.
    fn insert(&self, book: Book, policy: DuplicatePolicy) -> CatalogResult<()>;

    /// Appends a book to the main list and adds it to the tagged set, atomically.
    fn insert_tagged(&self, book: Book, policy: DuplicatePolicy) -> CatalogResult<()>;

    /// Selects the first inserted book with the given title.
    fn select_by_title(&self, title: &str) -> CatalogResult<Option<Book>>;

    /// Selects every book in insertion order.
    fn select_all(&self) -> CatalogResult<Vec<Book>>;

    /// Selects the tagged set, ordered by id.
    fn select_tagged(&self) -> CatalogResult<Vec<Book>>;

    /// Selects books, in insertion order, carrying at least one of the labels.
    fn select_by_recipes(&self, recipes: &[String]) -> CatalogResult<Vec<Book>>;
}

pub type BookRepositoryArc = Arc<dyn BookRepository + Send + Sync>;
