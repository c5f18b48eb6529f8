//! Latest release lookup with tag fallback
//!
//! Failures never escape this module: every outcome becomes a [`ReleaseInfo`],
//! using placeholder values when the release host had nothing usable.

use chrono::DateTime;
use tracing::{error, info, warn};

use crate::version::error::RegistryError;
use crate::version::registry::{Registry, Release};
use crate::version::types::{
    NOT_AVAILABLE, PLACEHOLDER_URL, ReleaseInfo, TAG_DATE_LABEL, WatchedProject,
};

/// Looks up the best known latest version of a project.
///
/// Tries the latest formal release first and falls back to the tag listing
/// when the project has none.
pub async fn lookup_release(registry: &dyn Registry, project: &WatchedProject) -> ReleaseInfo {
    match registry.fetch_latest_release(project).await {
        Ok(release) => release_info(release),
        Err(RegistryError::NotFound(_)) => {
            info!(
                "No formal release for {}, falling back to tags",
                project.full_name()
            );
            lookup_tag(registry, project).await
        }
        Err(e) => sentinel_for(project, e),
    }
}

async fn lookup_tag(registry: &dyn Registry, project: &WatchedProject) -> ReleaseInfo {
    match registry.fetch_latest_tag(project).await {
        Ok(Some(tag)) => ReleaseInfo {
            version: tag.name.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            date: TAG_DATE_LABEL.to_string(),
            url: registry.tags_url(project),
        },
        Ok(None) => {
            warn!("No releases or tags found for {}", project.full_name());
            ReleaseInfo::not_available()
        }
        Err(e) => sentinel_for(project, e),
    }
}

/// Maps a lookup failure onto a placeholder descriptor.
/// Transport and decoding failures are errors; status failures mean "no data".
fn sentinel_for(project: &WatchedProject, err: RegistryError) -> ReleaseInfo {
    match err {
        RegistryError::Network(_) | RegistryError::InvalidResponse(_) => {
            error!("Request error for {}: {}", project.name, err);
            ReleaseInfo::error()
        }
        RegistryError::NotFound(_)
        | RegistryError::RateLimited { .. }
        | RegistryError::UnexpectedStatus(_) => {
            warn!("No release data for {}: {}", project.name, err);
            ReleaseInfo::not_available()
        }
    }
}

fn release_info(release: Release) -> ReleaseInfo {
    ReleaseInfo {
        version: release
            .tag_name
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        date: release
            .published_at
            .as_deref()
            .map(release_date)
            .unwrap_or_default(),
        url: release
            .html_url
            .unwrap_or_else(|| PLACEHOLDER_URL.to_string()),
    }
}

/// Reduces an ISO-8601 timestamp to its date part
fn release_date(published_at: &str) -> String {
    match DateTime::parse_from_rfc3339(published_at) {
        Ok(timestamp) => timestamp.date_naive().to_string(),
        Err(_) => published_at.chars().take(10).collect(),
    }
}
