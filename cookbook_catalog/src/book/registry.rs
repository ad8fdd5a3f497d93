use tracing::debug;

use crate::{
    book::catalog::BookCatalog,
    error::CatalogResult,
    model::{author::Author, book::Book},
    store::{CatalogStore, CatalogStoreArc},
};

/// Registry of plain, untagged books.
#[derive(Debug, Clone)]
pub struct BookRegistry {
    store: CatalogStoreArc,
}

impl BookRegistry {
    pub fn new(store: CatalogStoreArc) -> Self {
        Self { store }
    }

    /// Creates a book attached to `author`, with no recipe labels.
    pub fn create_book<T: Into<String>>(&self, title: T, author: &Author) -> CatalogResult<Book> {
        let book = Book::new(self.store.next_book_id(), title, author.clone(), Vec::new());
        self.store
            .books()
            .insert(book.clone(), self.store.options().duplicates)?;
        debug!(book_id = %book.id(), title = book.title(), "created book");
        Ok(book)
    }
}

impl Default for BookRegistry {
    /// Creates a registry over the process-wide store.
    fn default() -> Self {
        Self::new(CatalogStore::shared())
    }
}

impl BookCatalog for BookRegistry {
    fn store(&self) -> &CatalogStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        author::{catalog::AuthorCatalog, registry::AuthorRegistry},
        error::CatalogError,
        options::{CatalogOptions, DuplicatePolicy},
    };

    #[test]
    fn create_then_retrieve() {
        let store = CatalogStore::new(CatalogOptions::default());
        let authors = AuthorRegistry::new(store.clone());
        let books = BookRegistry::new(store);

        let alex = authors.create_author("Alex", "alex@gmail.com").unwrap();
        let created = books.create_book("How to cook Vol 1", &alex).unwrap();

        let book = books.retrieve_book("How to cook Vol 1").unwrap().unwrap();
        assert_eq!(book, created);
        assert_eq!(book.author(), &alex);
        assert!(book.recipes().is_empty());
        assert!(books.retrieve_book("How to cook Vol 9").unwrap().is_none());
    }

    #[test]
    fn duplicate_titles() {
        let store = CatalogStore::new(CatalogOptions::default());
        let authors = AuthorRegistry::new(store.clone());
        let books = BookRegistry::new(store);
        let alex = authors.create_author("Alex", "alex@gmail.com").unwrap();
        let sam = authors.create_author("Sam", "sam@example.com").unwrap();

        let first = books.create_book("Pasta", &alex).unwrap();
        books.create_book("Pasta", &sam).unwrap();
        assert_eq!(books.books().unwrap().len(), 2);
        assert_eq!(books.retrieve_book("Pasta").unwrap().unwrap(), first);

        let strict = BookRegistry::new(CatalogStore::new(CatalogOptions {
            duplicates: DuplicatePolicy::Reject,
            ..CatalogOptions::default()
        }));
        strict.create_book("Pasta", &alex).unwrap();
        assert!(matches!(
            strict.create_book("Pasta", &sam),
            Err(CatalogError::DuplicateBook { .. })
        ));
    }
}
