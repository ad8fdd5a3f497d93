use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

use cookbook_common::id::Id;
use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::author::Author;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct BookId(pub Id);

impl BookId {
    pub fn new<T: Into<Id>>(id: T) -> Self {
        Self(id.into())
    }

    pub fn to_name(&self) -> String {
        format!("books/{}", self.0)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.to_name().fmt(f)
    }
}

/// A catalog book.
///
/// Books created through the plain book registry carry no recipe labels.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Book {
    id: BookId,
    title: String,
    author: Author,
    recipes: Vec<String>,
}

impl Book {
    pub fn new<T: Into<String>>(id: BookId, title: T, author: Author, recipes: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author,
            recipes,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn recipes(&self) -> &[String] {
        &self.recipes
    }

    /// Checks whether the book carries exactly this recipe label.
    pub fn has_recipe(&self, recipe: &str) -> bool {
        self.recipes.iter().any(|label| label == recipe)
    }

    /// Checks whether the book carries at least one of the given labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use cookbook_catalog::model::{
    ///     author::{Author, AuthorId},
    ///     book::{Book, BookId},
    /// };
    ///
    /// let author = Author::new(AuthorId::new(1u128), "Alex", "alex@gmail.com");
    /// let book = Book::new(BookId::new(2u128), "Vol 1", author, vec!["Lasagna".into()]);
    /// assert!(book.has_any_recipe(&["Pizza", "Lasagna"]));
    /// assert!(!book.has_any_recipe(&["Cheese Lasagna"]));
    /// ```
    pub fn has_any_recipe<S: AsRef<str>>(&self, recipes: &[S]) -> bool {
        recipes.iter().any(|recipe| self.has_recipe(recipe.as_ref()))
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {}", self.title, self.author.name())?;
        if !self.recipes.is_empty() {
            write!(f, " [{}]", self.recipes.iter().join(", "))?;
        }
        Ok(())
    }
}
