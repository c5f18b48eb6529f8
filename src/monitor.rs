//! One dashboard run: reference fetch, release lookups, reconcile, render

use tracing::{info, warn};

use crate::config::{Config, DASHBOARD_VERSION};
use crate::report::{ReportError, render_html, write_report};
use crate::version::bookstack::BookStackSource;
use crate::version::checker::{ReconciliationResult, reconcile};
use crate::version::error::RegistryError;
use crate::version::lookup::lookup_release;
use crate::version::reference::{ReferenceSource, extract_reference_versions};
use crate::version::registries::GitHubRegistry;
use crate::version::registry::Registry;
use crate::version::types::{ReferenceVersions, WatchedProject};

/// Loads deployed versions from the reference source.
/// Any failure yields an empty mapping so the run can continue.
pub async fn load_reference_versions(source: Option<&dyn ReferenceSource>) -> ReferenceVersions {
    let Some(source) = source else {
        warn!("BookStack configuration missing. Skipping current version check.");
        return ReferenceVersions::new();
    };

    match source.fetch_document().await {
        Ok(document) => {
            let versions = extract_reference_versions(&document);
            info!("Found {} documented versions", versions.len());
            versions
        }
        Err(e) => {
            warn!("Failed to load current versions from BookStack: {}", e);
            ReferenceVersions::new()
        }
    }
}

/// Looks up and classifies every project, one at a time, in the given order
pub async fn check_projects(
    registry: &dyn Registry,
    reference: &ReferenceVersions,
    projects: &[WatchedProject],
) -> Vec<ReconciliationResult> {
    let mut results = Vec::with_capacity(projects.len());
    for project in projects {
        let release = lookup_release(registry, project).await;
        let result = reconcile(project, reference, release);
        info!(
            "{}: current={} latest={} ({})",
            project.full_name(),
            result.current_version,
            result.release.version,
            result.status.label()
        );
        results.push(result);
    }
    results
}

/// Runs the whole pipeline against explicit sources and returns the rendered page
pub async fn build_dashboard(
    registry: &dyn Registry,
    reference_source: Option<&dyn ReferenceSource>,
    projects: &[WatchedProject],
) -> String {
    let reference = load_reference_versions(reference_source).await;
    let results = check_projects(registry, &reference, projects).await;
    render_html(&results, DASHBOARD_VERSION)
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Client(#[from] RegistryError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Runs the dashboard with the clients described by `config` and writes the page
pub async fn run(config: &Config) -> Result<(), RunError> {
    info!(
        "Fetching data from GitHub and BookStack for {}...",
        DASHBOARD_VERSION
    );

    let registry = GitHubRegistry::new(
        &config.github_api_url,
        &config.github_web_url,
        &config.github_token,
    )?;

    let bookstack = config
        .bookstack
        .as_ref()
        .and_then(|bookstack| {
            BookStackSource::new(bookstack)
                .inspect_err(|e| warn!("Failed to create BookStack client: {}", e))
                .ok()
        });

    let html = build_dashboard(
        &registry,
        bookstack.as_ref().map(|s| s as &dyn ReferenceSource),
        &config.projects,
    )
    .await;

    write_report(&config.output_path, &html)?;
    Ok(())
}
