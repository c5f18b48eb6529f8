//! Release tracking layer for the version dashboard
//!
//! This module fetches deployed versions from a reference document and latest
//! releases from a release host, then classifies each watched project.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Reference  │────▶│   Checker   │◀────│   Lookup    │
//! │ (BookStack) │     │ (reconcile) │     │ (fallback)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │  Registry   │
//!                                         │  (GitHub)   │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`reference`]: `[name: version]` marker extraction and the source trait
//! - [`bookstack`]: BookStack page API reference source
//! - [`registry`]: Registry trait for fetching releases and tags
//! - [`registries`]: Concrete registry implementations (GitHub)
//! - [`lookup`]: Latest-release lookup with tag fallback and placeholders
//! - [`checker`]: Exact-match reconciliation and status determination
//! - [`error`]: Error types for registry and reference source operations
//! - [`types`]: Common types like `WatchedProject` and `ReleaseInfo`

pub mod bookstack;
pub mod checker;
pub mod error;
pub mod lookup;
pub mod reference;
pub mod registries;
pub mod registry;
pub mod types;
