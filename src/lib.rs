//! Adoptme app core.
//!
//! Pet catalogue state, single-level screen navigation and saved-state
//! snapshots for the Adoptme adoption app.  Rendering lives in the host UI;
//! this crate only owns state and the rules for changing it.

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod nav;
pub mod pet;
pub mod seed;
pub mod store;

pub use error::{Error, Result};
