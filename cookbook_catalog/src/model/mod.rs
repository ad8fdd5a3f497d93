//! Catalog entities.
//!
//! Entities are immutable once created. Equality, ordering and hashing go
//! through the generated id, so two entities with identical fields created
//! separately are still different entities.

pub mod author;
pub mod book;
