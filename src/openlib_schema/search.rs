use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use crate::types::CoverRef;

/// Fields requested from `/search.json`.
pub const SEARCH_FIELDS: [&str; 7] = [
    "key",
    "title",
    "author_name",
    "first_publish_year",
    "cover_i",
    "edition_count",
    "subject",
];

/// `GET /search.json`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient::objects")]
    pub docs: Vec<SearchDoc>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDoc {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub key:                Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub title:              Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub author_name:        Option<AuthorNames>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub first_publish_year: Option<i64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub cover_i:            Option<CoverRef>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub edition_count:      Option<i64>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub subject:            Vec<String>,
}

/// `author_name` is normally a list, but a bare string shows up as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorNames {
    Many(Vec<Value>),
    One(String),
}

impl AuthorNames {
    pub fn first(&self) -> Option<&str> {
        match self {
            AuthorNames::Many(names) => names.first().and_then(Value::as_str),
            AuthorNames::One(name) => Some(name),
        }
    }
}
