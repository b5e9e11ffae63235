//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  The UI re-renders on them;
//! the log adapter writes them out.

use crate::nav::ScreenName;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries the initial, possibly restored,
    /// screen).
    Started(ScreenName),

    /// The current screen was replaced.  `from == to` is possible when a
    /// Detail payload is swapped for another.
    ScreenChanged { from: ScreenName, to: ScreenName },

    /// A pet's liked flag flipped.
    LikeToggled { name: String, liked: bool },

    /// The navigation snapshot was written on suspend.
    SnapshotSaved { bytes: usize },

    /// A prior snapshot was restored on start.
    SnapshotRestored(ScreenName),

    /// A prior snapshot existed but was unusable; the service fell back
    /// to `Home`.
    RestoreFailed(&'static str),
}
