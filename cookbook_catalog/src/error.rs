use thiserror::Error;

/// Catalog error types.
///
/// A lookup that finds nothing is not an error; it yields `Ok(None)`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An author with the same name already exists and duplicates are rejected.
    #[error("author named `{name}` already exists")]
    DuplicateAuthor { name: String },

    /// A book with the same title already exists and duplicates are rejected.
    #[error("book titled `{title}` already exists")]
    DuplicateBook { title: String },
}

/// Result type used by registries and repositories.
pub type CatalogResult<T> = Result<T, CatalogError>;
