use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{
    book::catalog::BookCatalog,
    error::CatalogResult,
    model::{author::Author, book::Book},
    store::{CatalogStore, CatalogStoreArc},
};

/// Registry of books tagged with recipe labels.
///
/// Shares the main book list with any [`BookRegistry`](super::registry::BookRegistry)
/// over the same store, and additionally tracks the set of books it created.
#[derive(Debug, Clone)]
pub struct RecipeBookRegistry {
    store: CatalogStoreArc,
}

impl RecipeBookRegistry {
    pub fn new(store: CatalogStoreArc) -> Self {
        Self { store }
    }

    /// Creates a book attached to `author` with a fixed list of recipe labels.
    ///
    /// The labels may be empty; such a book never matches a recipe lookup.
    pub fn create_book<T, I, S>(&self, title: T, author: &Author, recipes: I) -> CatalogResult<Book>
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let recipes: Vec<String> = recipes.into_iter().map(Into::into).collect();
        let book = Book::new(self.store.next_book_id(), title, author.clone(), recipes);
        self.store
            .books()
            .insert_tagged(book.clone(), self.store.options().duplicates)?;
        debug!(
            book_id = %book.id(),
            title = book.title(),
            recipes = ?book.recipes(),
            "created recipe book"
        );
        Ok(book)
    }

    /// Retrieves every book carrying at least one of the given labels.
    ///
    /// Returns `None` when nothing matches, including for an empty query.
    pub fn retrieve_books_by_recipes<I, S>(&self, recipes: I) -> CatalogResult<Option<BTreeSet<Book>>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let recipes: Vec<String> = recipes.into_iter().map(Into::into).collect();
        let books: BTreeSet<_> = self
            .store
            .books()
            .select_by_recipes(&recipes)?
            .into_iter()
            .collect();
        trace!(?recipes, matched = books.len(), "retrieve books by recipes");
        Ok((!books.is_empty()).then_some(books))
    }

    /// Returns every book created through a recipe registry on this store.
    pub fn tagged_books(&self) -> CatalogResult<BTreeSet<Book>> {
        Ok(self.store.books().select_tagged()?.into_iter().collect())
    }
}

impl Default for RecipeBookRegistry {
    /// Creates a registry over the process-wide store.
    fn default() -> Self {
        Self::new(CatalogStore::shared())
    }
}

impl BookCatalog for RecipeBookRegistry {
    fn store(&self) -> &CatalogStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        author::{catalog::AuthorCatalog, registry::AuthorRegistry},
        book::registry::BookRegistry,
        options::CatalogOptions,
    };

    fn titles(books: &BTreeSet<Book>) -> Vec<&str> {
        books.iter().map(Book::title).collect()
    }

    #[test]
    fn or_semantics() {
        let store = CatalogStore::new(CatalogOptions::default());
        let alex = AuthorRegistry::new(store.clone())
            .create_author("Alex", "alex@gmail.com")
            .unwrap();
        let books = RecipeBookRegistry::new(store);

        books.create_book("Vol 1", &alex, ["Lasagna"]).unwrap();
        books.create_book("Vol 2", &alex, ["Cheese Lasagna"]).unwrap();

        let found = books
            .retrieve_books_by_recipes(["Lasagna", "Cheese Lasagna"])
            .unwrap()
            .unwrap();
        assert_eq!(titles(&found), ["Vol 1", "Vol 2"]);

        let found = books.retrieve_books_by_recipes(["Lasagna"]).unwrap().unwrap();
        assert_eq!(titles(&found), ["Vol 1"]);

        assert!(books.retrieve_books_by_recipes(["Pizza"]).unwrap().is_none());
        assert!(books
            .retrieve_books_by_recipes(Vec::<String>::new())
            .unwrap()
            .is_none());
    }

    #[test]
    fn empty_labels_never_match() {
        let store = CatalogStore::new(CatalogOptions::default());
        let alex = AuthorRegistry::new(store.clone())
            .create_author("Alex", "alex@gmail.com")
            .unwrap();
        let books = RecipeBookRegistry::new(store);

        let plain = books
            .create_book("Notes", &alex, Vec::<String>::new())
            .unwrap();
        assert!(books.retrieve_books_by_recipes([""]).unwrap().is_none());
        assert!(books.tagged_books().unwrap().contains(&plain));
        assert_eq!(books.retrieve_book("Notes").unwrap().unwrap(), plain);
    }

    #[test]
    fn shares_book_list_with_base_registry() {
        let store = CatalogStore::new(CatalogOptions::default());
        let alex = AuthorRegistry::new(store.clone())
            .create_author("Alex", "alex@gmail.com")
            .unwrap();
        let plain = BookRegistry::new(store.clone());
        let recipes = RecipeBookRegistry::new(store);

        let untagged = plain.create_book("Plain", &alex).unwrap();
        let tagged = recipes.create_book("Tagged", &alex, ["Soup"]).unwrap();

        assert_eq!(plain.books().unwrap(), [untagged.clone(), tagged.clone()]);
        assert_eq!(recipes.retrieve_book("Plain").unwrap(), Some(untagged));
        assert_eq!(
            recipes.tagged_books().unwrap().into_iter().collect::<Vec<_>>(),
            [tagged]
        );
    }
}
