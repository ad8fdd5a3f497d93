use std::{fmt::Debug, sync::Arc};

use crate::{error::CatalogResult, model::author::Author, options::DuplicatePolicy};

/// In-memory repository implementation.
pub mod memory;

/// Storage for authors.
///
/// Implementations keep authors in insertion order.
pub trait AuthorRepository: Debug {
    /// Appends an author.
    ///
    /// With [`DuplicatePolicy::Reject`] the name check and the insert must be
    /// atomic with respect to other inserts.
    fn insert(&self, author: Author, policy: DuplicatePolicy) -> CatalogResult<()>;

    /// Selects the first inserted author with the given name.
    fn select_by_name(&self, name: &str) -> CatalogResult<Option<Author>>;

    /// Selects every author in insertion order.
    fn select_all(&self) -> CatalogResult<Vec<Author>>;
}

pub type AuthorRepositoryArc = Arc<dyn AuthorRepository + Send + Sync>;
