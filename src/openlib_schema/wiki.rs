use serde::{Deserialize, Serialize};

use super::lenient;

/// `GET /api/rest_v1/page/summary/{title}` on Wikipedia.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiSummary {
    #[serde(rename = "type", default, deserialize_with = "lenient::optional")]
    pub kind:         Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub title:        Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub description:  Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub extract:      Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub thumbnail:    Option<Thumbnail>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub content_urls: Option<ContentUrls>,
}

impl WikiSummary {
    pub fn is_disambiguation(&self) -> bool {
        self.kind.as_deref() == Some("disambiguation")
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub source: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentUrls {
    #[serde(default, deserialize_with = "lenient::object")]
    pub desktop: Option<PageUrls>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageUrls {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub page: Option<String>,
}
