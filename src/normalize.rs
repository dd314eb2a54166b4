//! Mapping of raw API payloads into the canonical [Book], [WorkDetail], [AuthorRecord] and
//! [AuthorSummary] records. All functions here are pure and total.

use tracing::debug;

use crate::{
    openlib_schema::{
        AuthorDoc, Description, SearchDoc, SearchResponse, SubjectResponse, SubjectWork,
        WikiSummary, WorkDoc,
    },
    types::{AuthorRecord, AuthorSummary, Book, CoverRef, WorkAuthor, WorkDetail},
};

/// Field table of a raw payload that describes a book. Every raw shape that can produce a
/// [Book] implements this, and [to_book] is the only place that assembles one.
pub trait RawBook {
    fn key(&self) -> Option<&str>;
    fn title(&self) -> Option<&str>;
    fn author(&self) -> Option<&str>;
    fn first_publish_year(&self) -> Option<i64>;
    fn cover(&self) -> Option<&CoverRef>;
    fn edition_count(&self) -> Option<i64>;
    fn subjects(&self) -> &[String];
}

impl RawBook for SearchDoc {
    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn author(&self) -> Option<&str> {
        self.author_name.as_ref().and_then(|names| names.first())
    }

    fn first_publish_year(&self) -> Option<i64> {
        self.first_publish_year
    }

    fn cover(&self) -> Option<&CoverRef> {
        self.cover_i.as_ref()
    }

    fn edition_count(&self) -> Option<i64> {
        self.edition_count
    }

    fn subjects(&self) -> &[String] {
        &self.subject
    }
}

impl RawBook for SubjectWork {
    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn author(&self) -> Option<&str> {
        self.authors.first().and_then(|a| a.name.as_deref())
    }

    fn first_publish_year(&self) -> Option<i64> {
        self.first_publish_year
    }

    fn cover(&self) -> Option<&CoverRef> {
        self.cover_id.as_ref()
    }

    fn edition_count(&self) -> Option<i64> {
        self.edition_count
    }

    fn subjects(&self) -> &[String] {
        &self.subject
    }
}

/// Strip the `/works/` prefix from a work key.
pub fn work_key(key: &str) -> &str {
    key.strip_prefix("/works/").unwrap_or(key)
}

/// Assemble a [Book] from any raw shape. A missing key yields an empty `work_key`, which callers
/// must treat as unusable.
pub fn to_book<R: RawBook + ?Sized>(raw: &R) -> Book {
    Book {
        work_key:      raw.key().map(work_key).unwrap_or_default().to_string(),
        title:         raw.title().map(str::to_string),
        author:        raw.author().map(str::to_string),
        year:          raw.first_publish_year(),
        cover:         raw.cover().cloned(),
        edition_count: raw.edition_count(),
        subjects:      raw
            .subjects()
            .iter()
            .take(Book::SUBJECT_LIMIT)
            .cloned()
            .collect(),
    }
}

pub fn normalize_search_hit(raw: &SearchDoc) -> Book {
    to_book(raw)
}

pub fn normalize_work_hit(raw: &SubjectWork) -> Book {
    to_book(raw)
}

fn usable(books: impl Iterator<Item = Book>) -> Vec<Book> {
    books
        .filter(|book| {
            if !book.is_usable() {
                debug!("Dropping result without a work key: {:?}", book.title);
            }
            book.is_usable()
        })
        .collect()
}

/// Books of a search response, without the ones lacking a work key.
pub fn normalize_search_response(raw: &SearchResponse) -> Vec<Book> {
    usable(raw.docs.iter().map(normalize_search_hit))
}

/// Books of a subject listing, without the ones lacking a work key.
pub fn normalize_subject_response(raw: &SubjectResponse) -> Vec<Book> {
    usable(raw.works.iter().map(normalize_work_hit))
}

pub fn normalize_work_detail(raw: &WorkDoc) -> WorkDetail {
    WorkDetail {
        key:         raw.key.clone().unwrap_or_default(),
        title:       raw.title.clone(),
        description: Description::flatten(raw.description.as_ref()),
        authors:     raw
            .authors
            .iter()
            .map(|a| WorkAuthor {
                author_ref: a.author.as_ref().and_then(|k| k.key.clone()),
                name:       a.name.clone(),
            })
            .collect(),
        subjects:    raw.subjects.clone(),
        cover:       raw.covers.iter().find(|id| **id > 0).copied().map(CoverRef::Id),
    }
}

pub fn normalize_author(raw: &AuthorDoc) -> AuthorRecord {
    AuthorRecord {
        key:        raw.key.clone(),
        name:       raw.name.clone(),
        birth_date: raw.birth_date.clone(),
        death_date: raw.death_date.clone(),
        bio:        Description::flatten(raw.bio.as_ref()),
    }
}

/// Disambiguation pages say nothing about a particular author and are dropped.
pub fn normalize_wiki_summary(raw: &WikiSummary, name: &str) -> Option<AuthorSummary> {
    if raw.is_disambiguation() {
        return None;
    }
    Some(AuthorSummary {
        name:              raw.title.clone().unwrap_or_else(|| name.to_string()),
        short_description: raw.description.clone(),
        extract:           raw.extract.clone(),
        image_url:         raw.thumbnail.as_ref().and_then(|t| t.source.clone()),
        page_url:          raw
            .content_urls
            .as_ref()
            .and_then(|c| c.desktop.as_ref())
            .and_then(|d| d.page.clone()),
    })
}
