//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Record;

/// Book record
///
/// Also used as the create and full-update payload: a caller-supplied `id`
/// is accepted by the decoder and then ignored by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Server-assigned identifier
    pub id: i64,
    /// Book title
    pub title: String,
}

/// Partial update of a book
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BookPatch {
    /// New title
    pub title: Option<String>,
}

impl Record for Book {
    type Patch = BookPatch;

    const KIND: &'static str = "Book";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn replace_fields(&mut self, other: Self) {
        self.title = other.title;
    }

    fn apply_patch(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}
