use serde::{Deserialize, Serialize};

use crate::types::{book::Book, cover::CoverRef};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkAuthor {
    pub author_ref: Option<String>,
    pub name:       Option<String>,
}

/// Work lookup flattened into plain fields. `subjects` is kept whole, views decide how many to
/// show.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDetail {
    pub key:         String,
    pub title:       Option<String>,
    pub description: String,
    pub authors:     Vec<WorkAuthor>,
    pub subjects:    Vec<String>,
    pub cover:       Option<CoverRef>,
}

impl WorkDetail {
    /// Work key without the `/works/` prefix.
    pub fn work_key(&self) -> &str {
        self.key.strip_prefix("/works/").unwrap_or(&self.key)
    }

    /// Keep the payload's key, or take `requested` when the payload carried none.
    pub fn or_requested_key(mut self, requested: &str) -> Self {
        if self.key.is_empty() {
            self.key = requested.to_string();
        }
        self
    }

    pub fn first_author_ref(&self) -> Option<&str> {
        self.authors.iter().find_map(|a| a.author_ref.as_deref())
    }

    /// Book record for this work, used when a work is shelved straight from its key.
    pub fn to_book(&self, author: Option<String>) -> Book {
        Book {
            work_key: self.work_key().to_string(),
            title: self.title.clone(),
            author: author.or_else(|| self.authors.iter().find_map(|a| a.name.clone())),
            year: None,
            cover: self.cover.clone(),
            edition_count: None,
            subjects: self.subjects.iter().take(Book::SUBJECT_LIMIT).cloned().collect(),
        }
    }
}

/// Author record from an Open Library author lookup.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub key:        Option<String>,
    pub name:       Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub bio:        String,
}
