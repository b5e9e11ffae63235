//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events
//! through the `log` facade.  A UI binding would implement the same trait
//! and schedule a re-render instead.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(screen) => {
                info!("START | initial_screen={}", screen);
            }
            AppEvent::ScreenChanged { from, to } => {
                info!("NAV   | {} -> {}", from, to);
            }
            AppEvent::LikeToggled { name, liked } => {
                info!("LIKE  | {} liked={}", name, liked);
            }
            AppEvent::SnapshotSaved { bytes } => {
                info!("SAVE  | snapshot {} bytes", bytes);
            }
            AppEvent::SnapshotRestored(screen) => {
                info!("LOAD  | restored {}", screen);
            }
            AppEvent::RestoreFailed(why) => {
                warn!("LOAD  | discarded snapshot: {}", why);
            }
        }
    }
}
