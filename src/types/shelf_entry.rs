use serde::{Deserialize, Serialize};

use crate::types::{book::Book, cover::CoverRef};

/// The part of a [Book] that is kept on the shelf.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfEntry {
    #[serde(rename = "workKey")]
    pub work_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title:    Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author:   Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year:     Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover:    Option<CoverRef>,
}

impl From<&Book> for ShelfEntry {
    fn from(book: &Book) -> Self {
        Self {
            work_key: book.work_key.clone(),
            title:    book.title.clone(),
            author:   book.author.clone(),
            year:     book.year,
            cover:    book.cover.clone(),
        }
    }
}

impl From<&ShelfEntry> for Book {
    fn from(entry: &ShelfEntry) -> Self {
        Self {
            work_key: entry.work_key.clone(),
            title: entry.title.clone(),
            author: entry.author.clone(),
            year: entry.year,
            cover: entry.cover.clone(),
            ..Book::default()
        }
    }
}
