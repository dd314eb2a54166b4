use serde::{Deserialize, Serialize};

use super::lenient;
use crate::types::CoverRef;

/// `GET /subjects/{slug}.json`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectResponse {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name:       Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub work_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub works:      Vec<SubjectWork>,
}

/// Work record as listed under a subject. Same information as a search doc under different
/// field names.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectWork {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub key:                Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub title:              Option<String>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub authors:            Vec<SubjectAuthor>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub first_publish_year: Option<i64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub cover_id:           Option<CoverRef>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub edition_count:      Option<i64>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub subject:            Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAuthor {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub key:  Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name: Option<String>,
}
