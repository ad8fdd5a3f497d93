#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Catalog behaviour settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogOptions {
    /// What happens when a name or title is created twice
    pub duplicates: DuplicatePolicy,
    /// Whether registries share the process-wide store
    pub scope: StoreScope,
    /// Worker number embedded in generated ids
    pub worker: u16,
}

/// Policy for creating an entity whose lookup key is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DuplicatePolicy {
    /// Insert anyway. Lookups keep returning the first inserted entity.
    #[default]
    Allow,
    /// Refuse the insert with a duplicate error.
    Reject,
}

/// Storage scope of a catalog store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StoreScope {
    /// Every open call gets its own store.
    #[default]
    Isolated,
    /// Every open call gets the one process-wide store.
    Shared,
}
