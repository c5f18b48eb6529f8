//! Reconciliation of deployed versions against latest releases

use crate::version::types::{ReferenceVersions, ReleaseInfo, UNKNOWN_VERSION, WatchedProject};

/// Status of a watched project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    /// The reference document has no entry for the project
    NotDocumented,
    /// The deployed version equals the latest version
    UpToDate,
    /// The deployed version differs from the latest version
    UpdateAvailable,
}

impl VersionStatus {
    /// CSS class used by the report
    pub fn css_class(self) -> &'static str {
        match self {
            VersionStatus::NotDocumented => "status-unknown",
            VersionStatus::UpToDate => "status-ok",
            VersionStatus::UpdateAvailable => "status-update",
        }
    }

    /// Human-readable label used by the report
    pub fn label(self) -> &'static str {
        match self {
            VersionStatus::NotDocumented => "Not Documented",
            VersionStatus::UpToDate => "Up to Date",
            VersionStatus::UpdateAvailable => "Update Available",
        }
    }
}

/// One row of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationResult {
    pub project: WatchedProject,
    /// Deployed version, or "Unknown" when undocumented
    pub current_version: String,
    pub release: ReleaseInfo,
    pub status: VersionStatus,
}

/// Classifies a project by comparing its deployed version with its latest release.
///
/// The comparison is exact string equality. Placeholder release versions
/// ("N/A", "Error") are compared like any other label.
pub fn reconcile(
    project: &WatchedProject,
    reference: &ReferenceVersions,
    release: ReleaseInfo,
) -> ReconciliationResult {
    let current = reference.get(&project.reference_key());

    let status = match current {
        None => VersionStatus::NotDocumented,
        Some(version) if *version == release.version => VersionStatus::UpToDate,
        Some(_) => VersionStatus::UpdateAvailable,
    };

    ReconciliationResult {
        project: project.clone(),
        current_version: current
            .cloned()
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
        release,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::types::{ERROR_LABEL, NOT_AVAILABLE};
    use rstest::rstest;

    fn release(version: &str) -> ReleaseInfo {
        ReleaseInfo {
            version: version.to_string(),
            date: "2024-03-01".to_string(),
            url: "https://example/release".to_string(),
        }
    }

    fn reference(entries: &[(&str, &str)]) -> ReferenceVersions {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case(&[("sonarr", "v2.0")], "v2.0", VersionStatus::UpToDate)]
    #[case(&[("sonarr", "v1.9")], "v2.0", VersionStatus::UpdateAvailable)]
    #[case(&[("sonarr", "V2.0")], "v2.0", VersionStatus::UpdateAvailable)]
    #[case(&[("sonarr", "2.0")], "v2.0", VersionStatus::UpdateAvailable)]
    #[case(&[("sonarr", "v2.0")], NOT_AVAILABLE, VersionStatus::UpdateAvailable)]
    #[case(&[("sonarr", "v2.0")], ERROR_LABEL, VersionStatus::UpdateAvailable)]
    #[case(&[("radarr", "v2.0")], "v2.0", VersionStatus::NotDocumented)]
    #[case(&[], ERROR_LABEL, VersionStatus::NotDocumented)]
    fn reconcile_returns_expected_status(
        #[case] entries: &[(&str, &str)],
        #[case] latest: &str,
        #[case] expected: VersionStatus,
    ) {
        let project = WatchedProject::new("Sonarr", "Sonarr");

        let result = reconcile(&project, &reference(entries), release(latest));

        assert_eq!(result.status, expected);
    }

    #[test]
    fn reconcile_joins_on_lowercased_project_name_only() {
        let project = WatchedProject::new("BookStackApp", "BookStack");
        let reference = reference(&[("bookstackapp", "v1"), ("bookstack", "v24.02")]);

        let result = reconcile(&project, &reference, release("v24.02"));

        assert_eq!(result.current_version, "v24.02");
        assert_eq!(result.status, VersionStatus::UpToDate);
    }

    #[test]
    fn reconcile_reports_unknown_version_when_undocumented() {
        let project = WatchedProject::new("nginx", "nginx");

        let result = reconcile(&project, &ReferenceVersions::new(), release("1.25.4"));

        assert_eq!(
            result,
            ReconciliationResult {
                project,
                current_version: UNKNOWN_VERSION.to_string(),
                release: release("1.25.4"),
                status: VersionStatus::NotDocumented,
            }
        );
    }

    #[rstest]
    #[case(VersionStatus::NotDocumented, "status-unknown", "Not Documented")]
    #[case(VersionStatus::UpToDate, "status-ok", "Up to Date")]
    #[case(VersionStatus::UpdateAvailable, "status-update", "Update Available")]
    fn status_has_css_class_and_label(
        #[case] status: VersionStatus,
        #[case] class: &str,
        #[case] label: &str,
    ) {
        assert_eq!(status.css_class(), class);
        assert_eq!(status.label(), label);
    }
}
