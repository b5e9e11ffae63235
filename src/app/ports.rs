//! Port traits: the boundary between the Adoptme core and its host shell.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (saved-state storage, config storage, event observers)
//! implement these traits.  [`AppService`](super::service::AppService)
//! consumes them via generics, so the core never knows which UI toolkit or
//! OS lifecycle sits on the other side.

use core::fmt;

use crate::config::AppConfig;

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → UI / logging)
// ───────────────────────────────────────────────────────────────

/// Observers receive every [`AppEvent`](super::events::AppEvent) after the
/// mutation it describes has completed, so a re-render triggered from
/// `emit` always reads post-mutation state.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Snapshot port (domain ↔ host saved-state bundle)
// ───────────────────────────────────────────────────────────────

/// Opaque byte slot written on suspend and read back after process
/// recreation.  Not durable storage.
pub trait SnapshotPort {
    /// Replace the stored snapshot.
    fn save(&mut self, bytes: &[u8]) -> Result<(), StorageError>;

    /// The stored snapshot, or `None` on a cold start.
    fn load(&self) -> Result<Option<Vec<u8>>, StorageError>;

    /// Forget the stored snapshot.  `Ok(())` if there was none.
    fn clear(&mut self) -> Result<(), StorageError>;
}

// ───────────────────────────────────────────────────────────────
// Storage port (namespaced key-value bytes)
// ───────────────────────────────────────────────────────────────

/// Namespaced key-value storage backing snapshots and config.
///
/// Keys are namespaced to prevent collisions between subsystems.  Writes
/// must be atomic: a reader sees either the old or the new value.
pub trait StoragePort {
    /// Read a value.
    fn read(&self, namespace: &str, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Write a value atomically.
    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Delete a key.  Returns `Ok(())` even if the key didn't exist.
    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError>;

    /// Check whether a key exists without reading it.
    fn exists(&self, namespace: &str, key: &str) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads and persists [`AppConfig`].
///
/// Implementations MUST validate before persisting and reject invalid
/// values with [`ConfigError::ValidationFailed`].
pub trait ConfigPort {
    /// Returns [`AppConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<AppConfig, ConfigError>;

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed validation.  Describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

/// Errors from [`StoragePort`] and [`SnapshotPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Requested key does not exist.
    NotFound,
    /// Backend refused the write (quota, bundle size limit).
    Full,
    /// Generic I/O error.
    IoError,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "key not found"),
            Self::Full => write!(f, "storage full"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl std::error::Error for StorageError {}
