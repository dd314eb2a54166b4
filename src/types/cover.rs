use serde::{Deserialize, Serialize};
use std::fmt::Display;

const COVER_BASE: &str = "https://covers.openlibrary.org/b/id";
pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/256x384?text=No+Cover";

/// Opaque cover reference as handed out by Open Library, either a numeric cover id or a string
/// id. Serialized untagged so persisted shelves keep whatever shape the API returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoverRef {
    Id(i64),
    Key(String),
}

impl CoverRef {
    /// Zero and empty ids carry no cover.
    pub fn is_blank(&self) -> bool {
        match self {
            CoverRef::Id(id) => *id == 0,
            CoverRef::Key(key) => key.trim().is_empty(),
        }
    }
}

impl Display for CoverRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverRef::Id(id) => write!(f, "{id}"),
            CoverRef::Key(key) => write!(f, "{key}"),
        }
    }
}

impl From<i64> for CoverRef {
    fn from(id: i64) -> Self {
        CoverRef::Id(id)
    }
}

impl From<&str> for CoverRef {
    fn from(key: &str) -> Self {
        CoverRef::Key(key.to_string())
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverSize {
    S,
    #[default]
    M,
    L,
}

impl CoverSize {
    pub fn tag(&self) -> &'static str {
        match self {
            CoverSize::S => "S",
            CoverSize::M => "M",
            CoverSize::L => "L",
        }
    }
}

impl std::str::FromStr for CoverSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(CoverSize::S),
            "M" => Ok(CoverSize::M),
            "L" => Ok(CoverSize::L),
            other => anyhow::bail!("Unknown cover size {other}, expected one of S, M, L"),
        }
    }
}

/// Cover image url for `cover`, or the placeholder image when there is no usable cover.
pub fn build_cover_url(cover: Option<&CoverRef>, size: CoverSize) -> String {
    match cover.filter(|c| !c.is_blank()) {
        Some(cover) => format!("{COVER_BASE}/{cover}-{}.jpg", size.tag()),
        None => PLACEHOLDER_COVER.to_string(),
    }
}
