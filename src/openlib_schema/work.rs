use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;

/// `GET /works/{key}.json`
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkDoc {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub key:         Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub title:       Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub description: Option<Description>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub authors:     Vec<WorkAuthorDoc>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub subjects:    Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub covers:      Vec<i64>,
}

/// Descriptions and bios come either as a bare string or as a typed text object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Description {
    Simple(String),
    Complex(DescriptionComplex),
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Description::Simple(s)),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(Description::Complex)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected a string or a text object, found {other}"
            ))),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionComplex {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub value: Option<String>,
}

impl Description {
    pub fn flatten(description: Option<&Description>) -> String {
        match description {
            Some(Description::Simple(s)) => s.clone(),
            Some(Description::Complex(c)) => c.value.clone().unwrap_or_default(),
            None => String::new(),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkAuthorDoc {
    #[serde(default, deserialize_with = "lenient::object")]
    pub author: Option<AuthorKey>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name:   Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorKey {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub key: Option<String>,
}
