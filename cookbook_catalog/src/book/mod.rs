//! Book registries.
//!
//! - [`registry::BookRegistry`] creates untagged books and looks them up by title
//! - [`recipe_registry::RecipeBookRegistry`] creates books with recipe labels
//!   and looks them up by label

/// Read access shared by book registries.
pub mod catalog;

/// Book registry with recipe labels.
pub mod recipe_registry;

/// Plain book registry.
pub mod registry;

/// Book repository abstraction and implementations.
pub mod repository;
