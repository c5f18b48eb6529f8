//! Common types shared by the lookup, reconcile and report steps

use indexmap::IndexMap;

/// Version label used when the release host had nothing usable
pub const NOT_AVAILABLE: &str = "N/A";

/// Label used when a lookup failed at the transport level
pub const ERROR_LABEL: &str = "Error";

/// Date label for versions that come from the tag listing rather than a release
pub const TAG_DATE_LABEL: &str = "Tag (Recent)";

/// Reference version shown for projects missing from the reference document
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Link target used when no meaningful URL exists
pub const PLACEHOLDER_URL: &str = "#";

/// A project tracked by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WatchedProject {
    pub owner: String,
    pub name: String,
}

impl WatchedProject {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// Returns the key used to find this project in the reference document
    pub fn reference_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns "owner/name"
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Deployed versions keyed by lowercase application name
pub type ReferenceVersions = IndexMap<String, String>;

/// Best known latest release of a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub version: String,
    pub date: String,
    pub url: String,
}

impl ReleaseInfo {
    /// Descriptor for a project with neither a release nor a tag
    pub fn not_available() -> Self {
        Self {
            version: NOT_AVAILABLE.to_string(),
            date: NOT_AVAILABLE.to_string(),
            url: PLACEHOLDER_URL.to_string(),
        }
    }

    /// Descriptor for a project whose lookup failed
    pub fn error() -> Self {
        Self {
            version: ERROR_LABEL.to_string(),
            date: ERROR_LABEL.to_string(),
            url: PLACEHOLDER_URL.to_string(),
        }
    }
}
