use anyhow::{anyhow, bail, Context, Result};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    config::{Config, OPEN_LIBRARY_URL},
    normalize,
    openlib_schema::{
        from_json, AuthorDoc, SearchResponse, SubjectResponse, WorkDoc, SEARCH_FIELDS,
    },
    types::{AuthorRecord, Book, WorkDetail},
};

pub const DEFAULT_SUBJECT_LIMIT: u32 = 12;
pub const MIN_QUERY_LEN: usize = 2;

/// Trimmed search query, or an error carrying the message to show instead of results.
pub fn prepare_query(query: &str) -> Result<&str> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        bail!("Type at least {MIN_QUERY_LEN} characters to search.");
    }
    Ok(query)
}

/// `/works/{key}` for keys given with or without the prefix.
pub fn work_path(work_key: &str) -> String {
    if work_key.starts_with("/works/") {
        work_key.to_string()
    } else {
        format!("/works/{work_key}")
    }
}

/// `/authors/{key}` for keys given with or without the prefix.
pub fn author_path(author_key: &str) -> String {
    if author_key.starts_with("/authors/") {
        author_key.to_string()
    } else {
        format!("/authors/{}", author_key.trim_start_matches('/'))
    }
}

/// Subject names are looked up lowercased with whitespace runs turned into underscores.
pub fn subject_slug(subject: &str) -> String {
    subject
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Page of a work on the Open Library website.
pub fn work_page_url(work_key: &str) -> String {
    format!("{OPEN_LIBRARY_URL}{}", work_path(work_key))
}

#[derive(Debug, Clone)]
pub struct OpenLibrary {
    client:   reqwest::Client,
    base_url: String,
}

impl Default for OpenLibrary {
    fn default() -> Self {
        Self::new(OPEN_LIBRARY_URL)
    }
}

impl OpenLibrary {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client:   reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.open_library_url.as_str())
    }

    pub fn search_url(&self, query: &str, limit: u32) -> Result<Url> {
        let limit = limit.to_string();
        let fields = SEARCH_FIELDS.join(",");
        Ok(Url::parse_with_params(
            &format!("{}/search.json", self.base_url),
            &[("q", query), ("limit", limit.as_str()), ("fields", fields.as_str())],
        )?)
    }

    pub fn work_url(&self, work_key: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}.json", self.base_url, work_path(work_key)))?)
    }

    pub fn author_url(&self, author_key: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}.json", self.base_url, author_path(author_key)))?)
    }

    pub fn subject_url(&self, subject: &str, limit: u32) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("{} cannot be used as a base url", self.base_url))?
            .pop_if_empty()
            .push("subjects")
            .push(&format!("{}.json", subject_slug(subject)));
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T> {
        debug!("GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Open Library {what} failed"))?;
        if !resp.status().is_success() {
            bail!("Open Library {what} failed ({})", resp.status());
        }
        let body = resp
            .text()
            .await
            .with_context(|| format!("Open Library {what} failed"))?;
        from_json(&body).with_context(|| format!("Open Library {what} failed"))
    }

    pub async fn search_books(&self, query: &str, limit: u32) -> Result<Vec<Book>> {
        let url = self.search_url(query, limit)?;
        let response: SearchResponse = self.fetch(url, "search").await?;
        let books = normalize::normalize_search_response(&response);
        info!("Search for {query:?} returned {} books", books.len());
        Ok(books)
    }

    pub async fn get_work(&self, work_key: &str) -> Result<WorkDetail> {
        let url = self.work_url(work_key)?;
        let work: WorkDoc = self.fetch(url, "work fetch").await?;
        Ok(normalize::normalize_work_detail(&work).or_requested_key(&work_path(work_key)))
    }

    pub async fn get_author(&self, author_key: &str) -> Result<AuthorRecord> {
        let url = self.author_url(author_key)?;
        let author: AuthorDoc = self.fetch(url, "author fetch").await?;
        Ok(normalize::normalize_author(&author))
    }

    pub async fn get_by_subject(&self, subject: &str, limit: u32) -> Result<Vec<Book>> {
        let url = self.subject_url(subject, limit)?;
        let response: SubjectResponse = self.fetch(url, "subject fetch").await?;
        let books = normalize::normalize_subject_response(&response);
        info!("Subject {subject:?} listed {} books", books.len());
        Ok(books)
    }
}
