//! Business logic services

pub mod records;

use crate::{
    models::{Book, Person},
    repository::Repository,
};

pub use records::RecordService;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: RecordService<Book>,
    pub persons: RecordService<Person>,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: RecordService::new(repository.books),
            persons: RecordService::new(repository.persons),
        }
    }
}
