//! BookStack page API reference source

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{BookStackConfig, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::version::error::SourceError;
use crate::version::reference::ReferenceSource;

/// Response from the BookStack pages API
#[derive(Debug, Deserialize)]
struct PageResponse {
    #[serde(default)]
    html: Option<String>,
}

/// Reads the reference document from a BookStack page
pub struct BookStackSource {
    client: reqwest::Client,
    config: BookStackConfig,
}

impl BookStackSource {
    pub fn new(config: &BookStackConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ReferenceSource for BookStackSource {
    async fn fetch_document(&self) -> Result<String, SourceError> {
        let url = format!(
            "{}/api/pages/{}",
            self.config.base_url, self.config.page_id
        );
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(
                AUTHORIZATION,
                format!("Token {}:{}", self.config.token_id, self.config.token_secret),
            )
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let page: PageResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse BookStack page response: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        Ok(page.html.unwrap_or_default())
    }
}
