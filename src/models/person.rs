//! Person model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Record;

/// Person record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Person {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Partial update of a person (absent or null fields are left unchanged)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl Record for Person {
    type Patch = PersonPatch;

    const KIND: &'static str = "Person";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn replace_fields(&mut self, other: Self) {
        self.name = other.name;
        self.age = other.age;
    }

    fn apply_patch(&mut self, patch: PersonPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}
