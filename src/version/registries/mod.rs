//! Registry implementations for fetching release information

pub mod github;

pub use github::GitHubRegistry;
