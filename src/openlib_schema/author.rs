use serde::{Deserialize, Serialize};

use super::{lenient, work::Description};

/// `GET /authors/{key}.json`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDoc {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub key:        Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name:       Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub death_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub bio:        Option<Description>,
}
