//! # Cookbook catalog
//!
//! In-memory registries of authors and books, with a variant that tags books
//! with recipe labels and resolves books and authors by those labels.
//!
//! Registries never own storage. They hold a handle to a
//! [`CatalogStore`](store::CatalogStore), and registries built over the same
//! store see each other's entities.
//!
//! ```
//! use cookbook_catalog::prelude::*;
//!
//! let store = CatalogStore::new(CatalogOptions::default());
//! let authors = RecipeAuthorRegistry::new(store.clone());
//! let books = RecipeBookRegistry::new(store);
//!
//! let alex = authors.create_author("Alex", "alex@gmail.com").unwrap();
//! books.create_book("How to cook Vol 1", &alex, ["Lasagna"]).unwrap();
//!
//! let found = authors
//!     .retrieve_authors_by_recipes(&books, ["Lasagna"])
//!     .unwrap()
//!     .unwrap();
//! assert!(found.contains(&alex));
//! ```

pub mod author;
pub mod book;
pub mod error;
pub mod model;
pub mod options;
pub mod store;

pub mod prelude {
    pub use crate::author::{
        catalog::AuthorCatalog, recipe_registry::RecipeAuthorRegistry, registry::AuthorRegistry,
    };
    pub use crate::book::{
        catalog::BookCatalog, recipe_registry::RecipeBookRegistry, registry::BookRegistry,
    };
    pub use crate::error::{CatalogError, CatalogResult};
    pub use crate::model::{
        author::{Author, AuthorId},
        book::{Book, BookId},
    };
    pub use crate::options::{CatalogOptions, DuplicatePolicy, StoreScope};
    pub use crate::store::{CatalogStore, CatalogStoreArc};
}
