use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
};

use cookbook_common::id::{Id, worker::WorkerIdGenerator};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::{
    author::repository::{AuthorRepositoryArc, memory::MemoryAuthorRepository},
    book::repository::{BookRepositoryArc, memory::MemoryBookRepository},
    model::{author::AuthorId, book::BookId},
    options::{CatalogOptions, StoreScope},
};

/// Storage behind the registries.
///
/// Registries built over the same store observe each other's creates.
#[derive(Debug)]
pub struct CatalogStore {
    authors: AuthorRepositoryArc,
    books: BookRepositoryArc,
    options: CatalogOptions,
}

pub type CatalogStoreArc = Arc<CatalogStore>;

impl CatalogStore {
    /// Creates an isolated store backed by empty memory repositories.
    pub fn new(options: CatalogOptions) -> CatalogStoreArc {
        Self::with_repositories(
            Arc::new(MemoryAuthorRepository::new()),
            Arc::new(MemoryBookRepository::new()),
            options,
        )
    }

    /// Creates a store over the given repositories.
    pub fn with_repositories(
        authors: AuthorRepositoryArc,
        books: BookRepositoryArc,
        options: CatalogOptions,
    ) -> CatalogStoreArc {
        debug!(?options, "opening catalog store");
        Arc::new(Self {
            authors,
            books,
            options,
        })
    }

    /// Gets the process-wide store.
    ///
    /// Created on first use with default options and [`StoreScope::Shared`],
    /// unless [`CatalogStore::open`] created it first.
    pub fn shared() -> CatalogStoreArc {
        Self::shared_with(CatalogOptions {
            scope: StoreScope::Shared,
            ..CatalogOptions::default()
        })
    }

    /// Opens a store according to `options.scope`.
    ///
    /// For [`StoreScope::Shared`] the options only take effect if this call
    /// creates the process-wide store.
    pub fn open(options: CatalogOptions) -> CatalogStoreArc {
        match options.scope {
            StoreScope::Isolated => Self::new(options),
            StoreScope::Shared => {
                let store = Self::shared_with(options);
                if store.options != options {
                    warn!(
                        requested = ?options,
                        active = ?store.options,
                        "shared catalog store already open with different options"
                    );
                }
                store
            }
        }
    }

    fn shared_with(options: CatalogOptions) -> CatalogStoreArc {
        static INSTANCE: OnceLock<CatalogStoreArc> = OnceLock::new();
        Arc::clone(INSTANCE.get_or_init(|| Self::new(options)))
    }

    pub fn authors(&self) -> &AuthorRepositoryArc {
        &self.authors
    }

    pub fn books(&self) -> &BookRepositoryArc {
        &self.books
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    pub(crate) fn next_author_id(&self) -> AuthorId {
        AuthorId::new(generate_id(self.options.worker))
    }

    pub(crate) fn next_book_id(&self) -> BookId {
        BookId::new(generate_id(self.options.worker))
    }
}

/// Generates an id unique within the process.
///
/// Stores configured with the same worker number draw from one generator, so
/// entities from different stores never share an id.
fn generate_id(worker: u16) -> Id {
    static GENERATORS: OnceLock<Mutex<HashMap<u16, WorkerIdGenerator>>> = OnceLock::new();
    GENERATORS
        .get_or_init(Mutex::default)
        .lock()
        .entry(worker)
        .or_insert_with(|| WorkerIdGenerator::new(worker))
        .generate()
}
