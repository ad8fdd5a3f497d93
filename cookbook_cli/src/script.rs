use std::{fs, path::Path};

use cookbook_catalog::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// A single catalog call read from a script.
///
/// Books and author lookups name their author; the first author created
/// with that name is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    CreateAuthor {
        name: String,
        email: String,
    },
    CreateBook {
        title: String,
        author: String,
        #[serde(default)]
        recipes: Vec<String>,
    },
    RetrieveAuthor {
        name: String,
    },
    RetrieveBook {
        title: String,
    },
    RetrieveBooks {
        author: String,
    },
    RetrieveBooksByRecipes {
        recipes: Vec<String>,
    },
    RetrieveAuthorsByRecipes {
        recipes: Vec<String>,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateAuthor { .. } => "create_author",
            Self::CreateBook { .. } => "create_book",
            Self::RetrieveAuthor { .. } => "retrieve_author",
            Self::RetrieveBook { .. } => "retrieve_book",
            Self::RetrieveBooks { .. } => "retrieve_books",
            Self::RetrieveBooksByRecipes { .. } => "retrieve_books_by_recipes",
            Self::RetrieveAuthorsByRecipes { .. } => "retrieve_authors_by_recipes",
        }
    }
}

/// Result of one operation. `None` means absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Author(Option<Author>),
    Book(Option<Book>),
    Authors(Option<Vec<Author>>),
    Books(Option<Vec<Book>>),
}

/// Parses a JSON array of operations.
pub fn parse(source: &str) -> AppResult<Vec<Operation>> {
    Ok(serde_json::from_str(source)?)
}

/// Reads and parses a script file.
pub fn load(path: &Path) -> AppResult<Vec<Operation>> {
    let source = fs::read_to_string(path)?;
    let operations = parse(&source)?;
    debug!(path = %path.display(), count = operations.len(), "loaded script");
    Ok(operations)
}

/// The reference scenario: one author, three recipe books, four lookups.
pub fn demo_operations() -> Vec<Operation> {
    fn book(title: &str, recipes: &[&str]) -> Operation {
        Operation::CreateBook {
            title: title.into(),
            author: "Alex".into(),
            recipes: recipes.iter().map(ToString::to_string).collect(),
        }
    }

    vec![
        Operation::CreateAuthor {
            name: "Alex".into(),
            email: "alex@gmail.com".into(),
        },
        book("How to cook Vol 1", &["Lasagna"]),
        book("How to cook Vol 2", &["Cheese Lasagna"]),
        book("How to cook Vol 3", &["Cheese Lasagna", "Lasagna"]),
        Operation::RetrieveAuthor {
            name: "Alex".into(),
        },
        Operation::RetrieveBook {
            title: "How to cook Vol 1".into(),
        },
        Operation::RetrieveAuthorsByRecipes {
            recipes: vec!["Lasagna".into()],
        },
        Operation::RetrieveBooksByRecipes {
            recipes: vec!["Lasagna".into()],
        },
    ]
}

/// A recipe-aware author registry and a recipe book registry over one store.
#[derive(Debug, Clone)]
pub struct Session {
    authors: RecipeAuthorRegistry,
    books: RecipeBookRegistry,
}

impl Session {
    pub fn new(store: CatalogStoreArc) -> Self {
        Self {
            authors: RecipeAuthorRegistry::new(store.clone()),
            books: RecipeBookRegistry::new(store),
        }
    }

    pub fn execute(&self, operation: &Operation) -> AppResult<Outcome> {
        debug!(op = operation.name(), "executing");
        Ok(match operation {
            Operation::CreateAuthor { name, email } => {
                Outcome::Author(Some(self.authors.create_author(name.as_str(), email.as_str())?))
            }
            Operation::CreateBook {
                title,
                author,
                recipes,
            } => {
                let author = self.author_named(author)?;
                Outcome::Book(Some(self.books.create_book(
                    title.as_str(),
                    &author,
                    recipes.iter().cloned(),
                )?))
            }
            Operation::RetrieveAuthor { name } => {
                Outcome::Author(self.authors.retrieve_author(name)?)
            }
            Operation::RetrieveBook { title } => Outcome::Book(self.books.retrieve_book(title)?),
            Operation::RetrieveBooks { author } => {
                let author = self.author_named(author)?;
                Outcome::Books(self.authors.retrieve_books(&author, &self.books)?)
            }
            Operation::RetrieveBooksByRecipes { recipes } => Outcome::Books(
                self.books
                    .retrieve_books_by_recipes(recipes.iter().cloned())?
                    .map(|books| books.into_iter().collect()),
            ),
            Operation::RetrieveAuthorsByRecipes { recipes } => Outcome::Authors(
                self.authors
                    .retrieve_authors_by_recipes(&self.books, recipes.iter().cloned())?
                    .map(|authors| authors.into_iter().collect()),
            ),
        })
    }

    fn author_named(&self, name: &str) -> AppResult<Author> {
        self.authors
            .retrieve_author(name)?
            .ok_or_else(|| AppError::UnknownAuthor {
                name: name.to_string(),
            })
    }
}
