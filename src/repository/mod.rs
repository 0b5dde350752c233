//! Repository layer: process-local record collections

pub mod collection;

pub use collection::CollectionRepository;

use crate::models::{Book, Person};

/// Main repository struct holding one collection per resource type
#[derive(Clone, Default)]
pub struct Repository {
    pub books: CollectionRepository<Book>,
    pub persons: CollectionRepository<Person>,
}

impl Repository {
    /// Create a repository with empty collections
    pub fn new() -> Self {
        Self::default()
    }
}
