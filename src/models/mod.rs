//! Data models for Shelf

pub mod book;
pub mod person;

pub use book::{Book, BookPatch};
pub use person::{Person, PersonPatch};

/// A record kept in an in-memory collection.
///
/// The store owns `id`: it is assigned on insert and never changed by
/// [`Record::replace_fields`] or [`Record::apply_patch`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Sparse update payload
    type Patch: Send;

    /// Human-readable kind, used in diagnostics and logs
    const KIND: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Overwrite every caller-owned field with the values of `other`.
    fn replace_fields(&mut self, other: Self);

    /// Overwrite the fields present in `patch`.
    fn apply_patch(&mut self, patch: Self::Patch);
}
