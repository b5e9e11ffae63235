//! Unified error type for the Adoptme core.
//!
//! Every fallible operation in the crate funnels into [`Error`], keeping
//! the shell's handling uniform.  Port errors from [`crate::app::ports`]
//! convert in via `From`, so adapters can be called with `?`.

use core::fmt;

use crate::app::ports::{ConfigError, StorageError};

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `toggle_liked` was handed a pet with no structurally equal entry in
    /// the store.  Carries the pet's name.
    NotFound(String),
    /// A persisted navigation record was present but could not be turned
    /// back into a [`Screen`](crate::nav::Screen).
    MalformedState(&'static str),
    /// A snapshot could not be encoded.
    Codec(&'static str),
    /// The snapshot / key-value backend failed.
    Storage(StorageError),
    /// Configuration could not be loaded or failed validation.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "pet not found: {name}"),
            Self::MalformedState(why) => write!(f, "malformed navigation state: {why}"),
            Self::Codec(why) => write!(f, "codec: {why}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
