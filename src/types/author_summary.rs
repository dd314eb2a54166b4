use serde::{Deserialize, Serialize};

/// Encyclopedia summary of an author. Passed through untouched; absent fields render as empty.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub name:              String,
    pub short_description: Option<String>,
    pub extract:           Option<String>,
    pub image_url:         Option<String>,
    pub page_url:          Option<String>,
}
