//! Shared setup for end-to-end dashboard tests

use std::collections::HashMap;

use tempfile::TempDir;
use version_monitor::config::Config;
use version_monitor::version::types::WatchedProject;

/// Builds a configuration pointing every client at local test servers
/// and the output at a fresh temporary directory.
pub fn test_config(
    github_url: &str,
    bookstack_url: Option<&str>,
    projects: &[(&str, &str)],
) -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("index.html");

    let mut vars: HashMap<&str, String> = HashMap::from([
        ("GITHUB_TOKEN", "test-token".to_string()),
        ("GITHUB_API_URL", github_url.to_string()),
        ("GITHUB_WEB_URL", "https://github.com".to_string()),
        ("VERSION_MONITOR_OUTPUT", output.display().to_string()),
    ]);
    if let Some(url) = bookstack_url {
        vars.insert("BOOKSTACK_URL", url.to_string());
        vars.insert("BOOKSTACK_TOKEN_ID", "id".to_string());
        vars.insert("BOOKSTACK_TOKEN_SECRET", "secret".to_string());
        vars.insert("BOOKSTACK_PAGE_ID", "1".to_string());
    }

    let mut config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
    config.projects = projects
        .iter()
        .map(|(owner, name)| WatchedProject::new(owner, name))
        .collect();

    (temp_dir, config)
}

pub fn read_output(config: &Config) -> String {
    std::fs::read_to_string(&config.output_path).unwrap()
}
