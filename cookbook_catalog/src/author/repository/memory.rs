use parking_lot::RwLock;

use crate::{
    author::repository::AuthorRepository,
    error::{CatalogError, CatalogResult},
    model::author::Author,
    options::DuplicatePolicy,
};

/// In-memory implementation of the author repository.
#[derive(Debug, Default)]
pub struct MemoryAuthorRepository {
    authors: RwLock<Vec<Author>>,
}

impl MemoryAuthorRepository {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new memory repository with initial data.
    ///
    /// # Arguments
    ///
    /// * `authors` - Initial authors, in insertion order
    pub fn with_data(authors: Vec<Author>) -> Self {
        Self {
            authors: RwLock::new(authors),
        }
    }
}

impl AuthorRepository for MemoryAuthorRepository {
    fn insert(&self, author: Author, policy: DuplicatePolicy) -> CatalogResult<()> {
        let mut authors = self.authors.write();
        if policy == DuplicatePolicy::Reject
            && authors.iter().any(|existing| existing.name() == author.name())
        {
            return Err(CatalogError::DuplicateAuthor {
                name: author.name().to_string(),
            });
        }
        authors.push(author);
        Ok(())
    }

    fn select_by_name(&self, name: &str) -> CatalogResult<Option<Author>> {
        let authors = self.authors.read();
        Ok(authors.iter().find(|author| author.name() == name).cloned())
    }

    fn select_all(&self) -> CatalogResult<Vec<Author>> {
        Ok(self.authors.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::author::AuthorId;

    #[test]
    fn first_match() {
        let repository = MemoryAuthorRepository::with_data(vec![
            Author::new(AuthorId::new(1u128), "Alex", "first@example.com"),
            Author::new(AuthorId::new(2u128), "Alex", "second@example.com"),
        ]);

        let author = repository.select_by_name("Alex").unwrap().unwrap();
        assert_eq!(author.email(), "first@example.com");
        assert!(repository.select_by_name("Sam").unwrap().is_none());
        assert_eq!(repository.select_all().unwrap().len(), 2);
    }

    #[test]
    fn reject_duplicates() {
        let repository = MemoryAuthorRepository::new();
        repository
            .insert(
                Author::new(AuthorId::new(1u128), "Alex", "a@example.com"),
                DuplicatePolicy::Reject,
            )
            .unwrap();

        let err = repository
            .insert(
                Author::new(AuthorId::new(2u128), "Alex", "b@example.com"),
                DuplicatePolicy::Reject,
            )
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateAuthor { name } if name == "Alex"));

        repository
            .insert(
                Author::new(AuthorId::new(3u128), "Alex", "c@example.com"),
                DuplicatePolicy::Allow,
            )
            .unwrap();
        assert_eq!(repository.select_all().unwrap().len(), 2);
    }
}
