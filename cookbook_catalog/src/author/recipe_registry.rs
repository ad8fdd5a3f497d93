use std::collections::BTreeSet;

use tracing::trace;

use crate::{
    author::catalog::AuthorCatalog,
    book::recipe_registry::RecipeBookRegistry,
    error::CatalogResult,
    model::author::Author,
    store::{CatalogStore, CatalogStoreArc},
};

/// Registry of authors that can resolve authors through recipe-tagged books.
#[derive(Debug, Clone)]
pub struct RecipeAuthorRegistry {
    store: CatalogStoreArc,
}

impl RecipeAuthorRegistry {
    pub fn new(store: CatalogStoreArc) -> Self {
        Self { store }
    }

    /// Retrieves the distinct authors of books carrying any of the labels.
    ///
    /// Returns `None` when no book matches.
    pub fn retrieve_authors_by_recipes<I, S>(
        &self,
        books: &RecipeBookRegistry,
        recipes: I,
    ) -> CatalogResult<Option<BTreeSet<Author>>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(matched) = books.retrieve_books_by_recipes(recipes)? else {
            trace!("no books matched recipes");
            return Ok(None);
        };
        let authors: BTreeSet<_> = matched
            .into_iter()
            .map(|book| book.author().clone())
            .collect();
        trace!(matched = authors.len(), "retrieve authors by recipes");
        Ok(Some(authors))
    }
}

impl Default for RecipeAuthorRegistry {
    /// Creates a registry over the process-wide store.
    fn default() -> Self {
        Self::new(CatalogStore::shared())
    }
}

impl AuthorCatalog for RecipeAuthorRegistry {
    fn store(&self) -> &CatalogStore {
        &self.store
    }
}
