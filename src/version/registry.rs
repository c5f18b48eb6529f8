//! Registry trait for fetching release information from a release host

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;

use crate::version::error::RegistryError;
use crate::version::types::WatchedProject;

/// A formal release as returned by the release host.
/// Every field is optional; the lookup step substitutes placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// A single entry of a tag listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub name: Option<String>,
}

/// Trait for querying a release host
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the latest formal release of a project
    ///
    /// # Returns
    /// * `Ok(Release)` - The latest release
    /// * `Err(RegistryError::NotFound)` - The project has no formal release
    /// * `Err(RegistryError)` - Any other failure
    async fn fetch_latest_release(&self, project: &WatchedProject)
    -> Result<Release, RegistryError>;

    /// Fetches the first entry of the project's tag listing
    ///
    /// # Returns
    /// * `Ok(None)` - The listing is empty
    async fn fetch_latest_tag(&self, project: &WatchedProject)
    -> Result<Option<Tag>, RegistryError>;

    /// Returns the human-facing URL of the project's tag listing
    fn tags_url(&self, project: &WatchedProject) -> String;
}
