//! Inbound commands to the application service.
//!
//! These represent user intents captured by the UI layer (taps, the system
//! back gesture) that the [`AppService`](super::service::AppService)
//! interprets and acts upon.

use crate::nav::Screen;
use crate::pet::Pet;

/// Commands that the UI can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Show `screen` (pet card tap, account header tap).
    NavigateTo(Screen),

    /// Up button or system back.
    Back,

    /// Heart tap on a card or on the detail screen.  The pet must be a
    /// value previously obtained from the service.
    ToggleLiked(Pet),
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Navigated,
    /// `false` when back was pressed on `Home` and the shell should let
    /// the OS handle it (e.g. close the app).
    Back { handled: bool },
    /// The replacement value now stored for the pet.
    Toggled(Pet),
}
