use std::collections::BTreeSet;

use parking_lot::RwLock;

use crate::{
    book::repository::BookRepository,
    error::{CatalogError, CatalogResult},
    model::book::{Book, BookId},
    options::DuplicatePolicy,
};

/// In-memory implementation of the book repository.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    state: RwLock<MemoryBookState>,
}

#[derive(Debug, Default)]
struct MemoryBookState {
    books: Vec<Book>,
    tagged: BTreeSet<BookId>,
}

impl MemoryBookRepository {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new memory repository with initial, untagged data.
    ///
    /// # Arguments
    ///
    /// * `books` - Initial books, in insertion order
    pub fn with_data(books: Vec<Book>) -> Self {
        Self {
            state: RwLock::new(MemoryBookState {
                books,
                tagged: BTreeSet::new(),
            }),
        }
    }

    fn insert_inner(&self, book: Book, tagged: bool, policy: DuplicatePolicy) -> CatalogResult<()> {
        let mut state = self.state.write();
        if policy == DuplicatePolicy::Reject
            && state.books.iter().any(|existing| existing.title() == book.title())
        {
            return Err(CatalogError::DuplicateBook {
                title: book.title().to_string(),
            });
        }
        if tagged {
            state.tagged.insert(book.id());
        }
        state.books.push(book);
        Ok(())
    }
}

impl BookRepository for MemoryBookRepository {
    fn insert(&self, book: Book, policy: DuplicatePolicy) -> CatalogResult<()> {
        self.insert_inner(book, false, policy)
    }

    fn insert_tagged(&self, book: Book, policy: DuplicatePolicy) -> CatalogResult<()> {
        self.insert_inner(book, true, policy)
    }

    fn select_by_title(&self, title: &str) -> CatalogResult<Option<Book>> {
        let state = self.state.read();
        Ok(state.books.iter().find(|book| book.title() == title).cloned())
    }

    fn select_all(&self) -> CatalogResult<Vec<Book>> {
        Ok(self.state.read().books.clone())
    }

    fn select_tagged(&self) -> CatalogResult<Vec<Book>> {
        let state = self.state.read();
        let mut books: Vec<_> = state
            .books
            .iter()
            .filter(|book| state.tagged.contains(&book.id()))
            .cloned()
            .collect();
        books.sort();
        Ok(books)
    }

    fn select_by_recipes(&self, recipes: &[String]) -> CatalogResult<Vec<Book>> {
        let state = self.state.read();
        Ok(state
            .books
            .iter()
            .filter(|book| book.has_any_recipe(recipes))
            .cloned()
            .collect())
    }
}
