use serde::{Deserialize, Serialize};

/// Genre - a named category every movie belongs to
///
/// Genres are value objects: built from a store row, or by a caller before
/// insertion (in which case `id` is `None`). Two reads of the same row give
/// two equal, independent values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    /// Store-assigned identifier (`genre.idgenre`), `None` until persisted
    id: Option<i64>,

    /// Natural key (`genre.name`)
    name: String,
}

impl Genre {
    /// Create a genre that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Create a genre carrying its store identifier
    pub fn with_id(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this genre came from (or was written to) the store
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
