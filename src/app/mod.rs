//! Application core: pure domain logic, zero I/O.
//!
//! Composes the pet store and navigation controller into one service.
//! All interaction with the host (saved-state storage, UI observers) goes
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without a UI toolkit.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
