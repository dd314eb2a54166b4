//! Raw response shapes of the Open Library and Wikipedia APIs. Every field is optional and read
//! leniently, see [lenient].

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;

pub mod author;
pub mod lenient;
pub mod search;
pub mod subject;
pub mod wiki;
pub mod work;

pub use author::AuthorDoc;
pub use search::{AuthorNames, SearchDoc, SearchResponse, SEARCH_FIELDS};
pub use subject::{SubjectAuthor, SubjectResponse, SubjectWork};
pub use wiki::WikiSummary;
pub use work::{Description, WorkAuthorDoc, WorkDoc};

/// Decode a response body, reporting the JSON path on failure.
pub fn from_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(de)
        .map_err(|e| anyhow!("Unexpected response at {}: {}", e.path(), e.inner()))
}
