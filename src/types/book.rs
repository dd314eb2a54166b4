use serde::{Deserialize, Serialize};

use crate::types::cover::CoverRef;

/// Canonical book record, independent of which Open Library payload produced it.
///
/// Two books with the same `work_key` are the same work, whatever the other fields say.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub work_key:      String,
    pub title:         Option<String>,
    pub author:        Option<String>,
    pub year:          Option<i64>,
    pub cover:         Option<CoverRef>,
    pub edition_count: Option<i64>,
    pub subjects:      Vec<String>,
}

impl Book {
    /// Maximum number of subjects carried on a book.
    pub const SUBJECT_LIMIT: usize = 3;

    /// A book without a work key cannot be looked up or shelved.
    pub fn is_usable(&self) -> bool {
        !self.work_key.is_empty()
    }

    pub fn same_work(&self, other: &Book) -> bool {
        self.work_key == other.work_key
    }
}
