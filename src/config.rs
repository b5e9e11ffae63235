//! Application configuration
//!
//! Tunables for snapshot persistence and the initial home-screen filter.
//! Loaded through [`ConfigPort`](crate::app::ports::ConfigPort); a missing
//! config means defaults.

use serde::{Deserialize, Serialize};

use crate::nav::SnapshotFormat;
use crate::store::SpeciesFilter;

/// What to do when a stored navigation snapshot is present but unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RestorePolicy {
    /// Log a warning, emit `RestoreFailed`, start on `Home`.
    #[default]
    FailSoft,
    /// Refuse to start: `AppService::start` returns `MalformedState`.
    Strict,
}

/// Core application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    // --- Snapshot slot ---
    /// Storage namespace holding the navigation snapshot
    pub snapshot_namespace: String,
    /// Key of the navigation snapshot within the namespace
    pub snapshot_key: String,
    /// Wire encoding of the snapshot
    pub snapshot_format: SnapshotFormat,
    /// Behaviour on a malformed snapshot
    pub restore_policy: RestorePolicy,

    // --- Home screen ---
    /// Species selected when the home screen first appears
    pub default_filter: SpeciesFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            snapshot_namespace: "adoptme".to_owned(),
            snapshot_key: "nav".to_owned(),
            snapshot_format: SnapshotFormat::Postcard,
            restore_policy: RestorePolicy::FailSoft,
            default_filter: SpeciesFilter::all(),
        }
    }
}
