//! Author registries.
//!
//! - [`registry::AuthorRegistry`] creates and looks up authors by name
//! - [`recipe_registry::RecipeAuthorRegistry`] also resolves authors through
//!   recipe-tagged books

/// Operations shared by author registries.
pub mod catalog;

/// Author registry resolving authors by recipe label.
pub mod recipe_registry;

/// Plain author registry.
pub mod registry;

/// Author repository abstraction and implementations.
pub mod repository;
