use crate::{
    author::catalog::AuthorCatalog,
    store::{CatalogStore, CatalogStoreArc},
};

/// Registry of authors.
#[derive(Debug, Clone)]
pub struct AuthorRegistry {
    store: CatalogStoreArc,
}

impl AuthorRegistry {
    pub fn new(store: CatalogStoreArc) -> Self {
        Self { store }
    }
}

impl Default for AuthorRegistry {
    /// Creates a registry over the process-wide store.
    fn default() -> Self {
        Self::new(CatalogStore::shared())
    }
}

impl AuthorCatalog for AuthorRegistry {
    fn store(&self) -> &CatalogStore {
        &self.store
    }
}
