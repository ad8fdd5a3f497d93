use tracing::{debug, trace};

use crate::{
    book::catalog::BookCatalog,
    error::CatalogResult,
    model::{author::Author, book::Book},
    store::CatalogStore,
};

/// Operations shared by every author registry.
pub trait AuthorCatalog {
    /// The store the registry reads from and writes to.
    fn store(&self) -> &CatalogStore;

    /// Creates an author and appends it to the store.
    ///
    /// Under [`DuplicatePolicy::Allow`](crate::options::DuplicatePolicy::Allow)
    /// this never fails.
    fn create_author<N, E>(&self, name: N, email: E) -> CatalogResult<Author>
    where
        N: Into<String>,
        E: Into<String>,
        Self: Sized,
    {
        let store = self.store();
        let author = Author::new(store.next_author_id(), name, email);
        store
            .authors()
            .insert(author.clone(), store.options().duplicates)?;
        debug!(author_id = %author.id(), name = author.name(), "created author");
        Ok(author)
    }

    /// Retrieves the first author created with the given name.
    fn retrieve_author(&self, name: &str) -> CatalogResult<Option<Author>> {
        let author = self.store().authors().select_by_name(name)?;
        trace!(name, found = author.is_some(), "retrieve author");
        Ok(author)
    }

    /// Retrieves the books of `author` held by `books`, in creation order.
    ///
    /// Returns `None` only when `books` holds no books at all; an author
    /// without books in a non-empty registry yields an empty list.
    fn retrieve_books<C>(&self, author: &Author, books: &C) -> CatalogResult<Option<Vec<Book>>>
    where
        C: BookCatalog + ?Sized,
        Self: Sized,
    {
        Ok(self
            .retrieve_book_slots(author, books)?
            .map(|slots| slots.into_iter().flatten().collect()))
    }

    /// Retrieves one slot per book held by `books`, in creation order.
    ///
    /// A slot holds the book when it belongs to `author` and is `None`
    /// otherwise. Returns `None` when `books` holds no books at all.
    fn retrieve_book_slots<C>(
        &self,
        author: &Author,
        books: &C,
    ) -> CatalogResult<Option<Vec<Option<Book>>>>
    where
        C: BookCatalog + ?Sized,
        Self: Sized,
    {
        let all = books.books()?;
        if all.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            all.into_iter()
                .map(|book| (book.author() == author).then_some(book))
                .collect(),
        ))
    }

    /// Lists every author in creation order.
    fn authors(&self) -> CatalogResult<Vec<Author>> {
        self.store().authors().select_all()
    }
}
