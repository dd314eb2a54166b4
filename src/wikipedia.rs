use anyhow::{anyhow, Result};
use reqwest::{header::ACCEPT, Url};
use tracing::{debug, warn};

use crate::{
    config::{Config, WIKIPEDIA_SUMMARY_URL},
    normalize::normalize_wiki_summary,
    openlib_schema::{from_json, WikiSummary},
    types::AuthorSummary,
};

/// Page title for a name: whitespace runs become underscores.
pub fn page_title(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

#[derive(Debug, Clone)]
pub struct Wikipedia {
    client:      reqwest::Client,
    summary_url: String,
}

impl Default for Wikipedia {
    fn default() -> Self {
        Self::new(WIKIPEDIA_SUMMARY_URL)
    }
}

impl Wikipedia {
    pub fn new(summary_url: impl Into<String>) -> Self {
        Self {
            client:      reqwest::Client::new(),
            summary_url: summary_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.wikipedia_url.as_str())
    }

    pub fn summary_url(&self, name: &str) -> Result<Url> {
        let mut url = Url::parse(&self.summary_url)?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("{} cannot be used as a base url", self.summary_url))?
            .push(&page_title(name));
        Ok(url)
    }

    /// Summary of the author's encyclopedia page. Any failure, including a disambiguation page,
    /// just means there is no summary.
    pub async fn get_author_summary(&self, name: &str) -> Option<AuthorSummary> {
        if name.trim().is_empty() {
            return None;
        }
        match self.fetch_summary(name).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Wikipedia fetch failed for {name:?}: {e:#}");
                None
            }
        }
    }

    async fn fetch_summary(&self, name: &str) -> Result<Option<AuthorSummary>> {
        let url = self.summary_url(name)?;
        debug!("GET {url}");
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        if !resp.status().is_success() {
            debug!("No Wikipedia page for {name:?} ({})", resp.status());
            return Ok(None);
        }
        let raw: WikiSummary = from_json(&resp.text().await?)?;
        Ok(normalize_wiki_summary(&raw, name))
    }
}
