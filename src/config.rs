use std::path::PathBuf;

use thiserror::Error;

use crate::version::types::WatchedProject;

// =============================================================================
// Network-related constants
// =============================================================================

/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent sent to both the release host and the document host
pub const USER_AGENT: &str = "VersionDashboard-App";

/// Default base URL for the GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default base URL for GitHub web pages (used for tag listing links)
pub const DEFAULT_GITHUB_WEB_URL: &str = "https://github.com";

/// Default location of the generated dashboard
pub const DEFAULT_OUTPUT_PATH: &str = "/var/www/html/index.html";

/// Version label shown in the dashboard title
pub const DASHBOARD_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Projects to watch, in report order
pub const WATCHED_PROJECTS: &[(&str, &str)] = &[
    ("home-assistant", "operating-system"),
    ("home-assistant", "core"),
    ("filebrowser", "filebrowser"),
    ("immich-app", "immich"),
    ("jellyfin", "jellyfin"),
    ("open-webui", "open-webui"),
    ("dani-garcia", "vaultwarden"),
    ("BookStackApp", "BookStack"),
    ("qdm12", "ddns-updater"),
    ("nginx", "nginx"),
    ("NginxProxyManager", "nginx-proxy-manager"),
    ("wizarrrr", "wizarr"),
    ("qbittorrent", "qBittorrent"),
    ("Prowlarr", "Prowlarr"),
    ("Sonarr", "Sonarr"),
    ("Radarr", "Radarr"),
    ("Lidarr", "Lidarr"),
    ("drakkan", "sftpgo"),
    ("tailscale", "tailscale"),
    ("darenbooth", "sc_commodity_manager"),
    ("darenbooth", "version_manager"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GITHUB_TOKEN not found")]
    MissingToken,
}

/// Credentials and location of the BookStack page holding deployed versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookStackConfig {
    pub base_url: String,
    pub token_id: String,
    pub token_secret: String,
    pub page_id: String,
}

/// Run configuration, built once at startup and passed down by reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub github_token: String,
    pub github_api_url: String,
    pub github_web_url: String,
    /// `None` when any of the four BookStack settings is missing
    pub bookstack: Option<BookStackConfig>,
    pub output_path: PathBuf,
    pub projects: Vec<WatchedProject>,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let github_token = get("GITHUB_TOKEN").ok_or(ConfigError::MissingToken)?;

        let bookstack = match (
            get("BOOKSTACK_URL"),
            get("BOOKSTACK_TOKEN_ID"),
            get("BOOKSTACK_TOKEN_SECRET"),
            get("BOOKSTACK_PAGE_ID"),
        ) {
            (Some(url), Some(token_id), Some(token_secret), Some(page_id)) => {
                let base_url = url.trim_end_matches('/').to_string();
                // A URL made only of slashes is as good as missing
                (!base_url.is_empty()).then_some(BookStackConfig {
                    base_url,
                    token_id,
                    token_secret,
                    page_id,
                })
            }
            _ => None,
        };

        Ok(Self {
            github_token,
            github_api_url: get("GITHUB_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            github_web_url: get("GITHUB_WEB_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GITHUB_WEB_URL.to_string()),
            bookstack,
            output_path: get("VERSION_MONITOR_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            projects: default_projects(),
        })
    }

    /// Replaces the output path, e.g. from a command-line flag.
    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }
}

/// Returns the built-in watch list.
pub fn default_projects() -> Vec<WatchedProject> {
    WATCHED_PROJECTS
        .iter()
        .map(|(owner, name)| WatchedProject::new(owner, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn from_lookup_fails_without_github_token() {
        let result = Config::from_lookup(lookup_from(&[("BOOKSTACK_URL", "http://wiki")]));

        assert_eq!(result, Err(ConfigError::MissingToken));
    }

    #[test]
    fn from_lookup_treats_empty_token_as_missing() {
        let result = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "")]));

        assert_eq!(result, Err(ConfigError::MissingToken));
    }

    #[test]
    fn from_lookup_uses_defaults_when_only_token_is_set() {
        let config = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "secret")])).unwrap();

        assert_eq!(config.github_token, "secret");
        assert_eq!(config.github_api_url, DEFAULT_GITHUB_API_URL);
        assert_eq!(config.github_web_url, DEFAULT_GITHUB_WEB_URL);
        assert_eq!(config.bookstack, None);
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.projects.len(), WATCHED_PROJECTS.len());
    }

    #[test]
    fn from_lookup_builds_bookstack_config_and_strips_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "secret"),
            ("BOOKSTACK_URL", "https://wiki.example.com/"),
            ("BOOKSTACK_TOKEN_ID", "id"),
            ("BOOKSTACK_TOKEN_SECRET", "shh"),
            ("BOOKSTACK_PAGE_ID", "42"),
        ]))
        .unwrap();

        assert_eq!(
            config.bookstack,
            Some(BookStackConfig {
                base_url: "https://wiki.example.com".to_string(),
                token_id: "id".to_string(),
                token_secret: "shh".to_string(),
                page_id: "42".to_string(),
            })
        );
    }

    #[test]
    fn from_lookup_skips_bookstack_when_any_setting_is_missing() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "secret"),
            ("BOOKSTACK_URL", "https://wiki.example.com"),
            ("BOOKSTACK_TOKEN_ID", "id"),
            ("BOOKSTACK_PAGE_ID", "42"),
        ]))
        .unwrap();

        assert_eq!(config.bookstack, None);
    }

    #[test]
    fn with_output_path_overrides_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "secret"),
            ("VERSION_MONITOR_OUTPUT", "/tmp/env.html"),
        ]))
        .unwrap()
        .with_output_path(PathBuf::from("/tmp/flag.html"));

        assert_eq!(config.output_path, PathBuf::from("/tmp/flag.html"));
    }

    #[test]
    fn default_projects_preserves_configured_order() {
        let projects = default_projects();

        assert_eq!(projects[0], WatchedProject::new("home-assistant", "operating-system"));
        assert_eq!(
            projects.last(),
            Some(&WatchedProject::new("darenbooth", "version_manager"))
        );
    }
}
