//! GitHub REST API registry implementation

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::version::error::RegistryError;
use crate::version::registry::{Registry, Release, Tag};
use crate::version::types::WatchedProject;

/// Registry implementation for the GitHub Releases and Tags APIs
pub struct GitHubRegistry {
    client: reqwest::Client,
    api_url: String,
    web_url: String,
    token: String,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry with custom base URLs
    pub fn new(api_url: &str, web_url: &str, token: &str) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            web_url: web_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        project: &WatchedProject,
    ) -> Result<T, RegistryError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(project.full_name()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::UnexpectedStatus(status.as_u16()));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub response from {}: {}", url, e);
            RegistryError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait::async_trait]
impl Registry for GitHubRegistry {
    async fn fetch_latest_release(
        &self,
        project: &WatchedProject,
    ) -> Result<Release, RegistryError> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, project.owner, project.name
        );
        self.get_json(&url, project).await
    }

    async fn fetch_latest_tag(
        &self,
        project: &WatchedProject,
    ) -> Result<Option<Tag>, RegistryError> {
        let url = format!(
            "{}/repos/{}/{}/tags",
            self.api_url, project.owner, project.name
        );
        let tags: Vec<Tag> = self.get_json(&url, project).await?;

        Ok(tags.into_iter().next())
    }

    fn tags_url(&self, project: &WatchedProject) -> String {
        format!("{}/{}/{}/tags", self.web_url, project.owner, project.name)
    }
}
