use tracing::trace;

use crate::{error::CatalogResult, model::book::Book, store::CatalogStore};

/// Read access shared by every book registry.
pub trait BookCatalog {
    /// The store the registry reads from and writes to.
    fn store(&self) -> &CatalogStore;

    /// Retrieves the first book created with the given title.
    fn retrieve_book(&self, title: &str) -> CatalogResult<Option<Book>> {
        let book = self.store().books().select_by_title(title)?;
        trace!(title, found = book.is_some(), "retrieve book");
        Ok(book)
    }

    /// Lists every book in creation order.
    fn books(&self) -> CatalogResult<Vec<Book>> {
        self.store().books().select_all()
    }
}
