//! Deployed-version extraction from a free-form reference document
//!
//! The document marks deployed versions with `[name: version]` markers
//! anywhere in its text. Markup tags are replaced by spaces before scanning
//! so a marker split across inline tags is still found.

use std::sync::LazyLock;

#[cfg(test)]
use mockall::automock;
use regex::Regex;

use crate::version::error::SourceError;
use crate::version::types::ReferenceVersions;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("valid tag regex"));

static MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("valid marker regex"));

/// Trait for fetching the raw reference document
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Fetches the document body
    async fn fetch_document(&self) -> Result<String, SourceError>;
}

/// Extracts `[name: version]` markers from document content.
///
/// Keys are trimmed and lowercased, values trimmed. Markers without a colon
/// are ignored. When a name appears more than once the last marker wins.
pub fn extract_reference_versions(content: &str) -> ReferenceVersions {
    let text = TAG_REGEX.replace_all(content, " ");

    let mut versions = ReferenceVersions::new();
    for capture in MARKER_REGEX.captures_iter(&text) {
        let Some((name, version)) = capture[1].split_once(':') else {
            continue;
        };
        versions.insert(name.trim().to_lowercase(), version.trim().to_string());
    }

    versions
}
