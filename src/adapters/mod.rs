//! Adapters implementing the port traits in [`crate::app::ports`].

pub mod log_sink;
pub mod memory;

pub use log_sink::LogEventSink;
pub use memory::{MemoryStorage, StorageSnapshotStore};
