//! Google search via the Serper API.
//!
//! The one backend here that talks JSON instead of scraping HTML. The API
//! key must come from configuration; there is deliberately no default.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::backend::{BackendConfig, SearchBackend};
use crate::query::SearchQuery;
use crate::record::ResultRecord;
use crate::{Result, SearchError};

const ENDPOINT: &str = "https://google.serper.dev/search";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<OrganicItem>,
}

#[derive(Debug, Deserialize)]
struct OrganicItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

/// Google search backend using the Serper API.
pub struct Serper {
    config: BackendConfig,
    client: Client,
    api_key: String,
}

impl Serper {
    /// Creates a Serper backend with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SearchError::Config("serper API key is empty".to_string()));
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            config: BackendConfig {
                name: "Serper".to_string(),
                shortcut: "serper".to_string(),
                timeout: 30,
            },
            client,
            api_key,
        })
    }

    async fn request(&self, keyword: &str, limit: usize) -> Result<SerperResponse> {
        let response = self
            .client
            .post(ENDPOINT)
            .header("X-API-KEY", &self.api_key)
            .json(&serde_json::json!({ "q": keyword, "num": limit }))
            .send()
            .await?
            .error_for_status()?
            .json::<SerperResponse>()
            .await?;
        Ok(response)
    }

    fn to_records(response: SerperResponse, limit: usize) -> Vec<ResultRecord> {
        response
            .organic
            .into_iter()
            .map(|item| ResultRecord::new(item.title, item.link, item.snippet))
            .filter(ResultRecord::is_valid)
            .take(limit)
            .collect()
    }
}

#[async_trait]
impl SearchBackend for Serper {
    fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Vec<ResultRecord> {
        let keyword = query.keyword.trim();
        if keyword.is_empty() || query.limit == 0 {
            return Vec::new();
        }

        match self.request(keyword, query.limit).await {
            Ok(response) => Self::to_records(response, query.limit),
            Err(e) => {
                warn!(engine = %self.config.name, error = %e, "API search failed, returning no results");
                Vec::new()
            }
        }
    }
}
