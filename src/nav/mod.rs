//! Single-level navigation state machine.
//!
//! ```text
//!            navigate_to(Detail(p))          navigate_to(Account)
//!   ┌──────┐ ─────────────────────▶ ┌────────┐      ┌─────────┐
//!   │ Home │                        │ Detail │      │ Account │
//!   └──────┘ ◀───────────────────── └────────┘      └─────────┘
//!      ▲            go_back()                            │
//!      └─────────────────────────────────────────────────┘
//!                           go_back()
//! ```
//!
//! There is no back stack.  Leaving `Home` creates an implicit stack of
//! depth one (`Home -> X`), and [`NavigationController::go_back`] from any
//! other screen lands on `Home`.  `navigate_to` itself is unconditional:
//! moving Detail -> Account without passing Home is a convention callers
//! follow, not something the controller enforces.

pub mod snapshot;

use core::fmt;
use core::str::FromStr;

use log::info;

use crate::error::{Error, Result};
use crate::pet::Pet;

pub use snapshot::{NavSnapshot, SnapshotFormat};

// ---------------------------------------------------------------------------
// Screen identity
// ---------------------------------------------------------------------------

/// Payload-free discriminant of a [`Screen`].  Its string form is the
/// `screenName` field of a persisted [`NavSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenName {
    Home,
    Detail,
    Account,
}

impl ScreenName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Detail => "DETAIL",
            Self::Account => "ACCOUNT",
        }
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HOME" => Ok(Self::Home),
            "DETAIL" => Ok(Self::Detail),
            "ACCOUNT" => Ok(Self::Account),
            _ => Err(Error::MalformedState("unknown screen name")),
        }
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A navigation destination.
///
/// `Detail` carries a full [`Pet`] snapshot by value; a later toggle in the
/// store is not reflected here unless the caller re-reads and navigates
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Detail {
        pet: Pet,
    },
    Account,
}

impl Screen {
    pub fn detail(pet: Pet) -> Self {
        Self::Detail { pet }
    }

    pub fn name(&self) -> ScreenName {
        match self {
            Self::Home => ScreenName::Home,
            Self::Detail { .. } => ScreenName::Detail,
            Self::Account => ScreenName::Account,
        }
    }

    /// The pet shown on a `Detail` screen.
    pub fn pet(&self) -> Option<&Pet> {
        match self {
            Self::Detail { pet } => Some(pet),
            Self::Home | Self::Account => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detail { pet } => write!(f, "DETAIL({})", pet.name()),
            other => f.write_str(other.name().as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Single source of truth for the visible screen.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    current: Screen,
}

impl NavigationController {
    /// Fresh controller on `Home`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller restored from a persisted record; `None` means no prior
    /// process state and yields `Home`.
    pub fn from_snapshot(record: Option<&NavSnapshot>) -> Result<Self> {
        Self::deserialize(record).map(Self::starting_at)
    }

    /// Controller whose initial screen is `screen`, without logging a
    /// transition.
    pub fn starting_at(screen: Screen) -> Self {
        Self { current: screen }
    }

    /// Replace the current screen.  Always legal, including
    /// Detail(p) -> Detail(q).
    pub fn navigate_to(&mut self, screen: Screen) {
        info!("NAV transition: {} -> {}", self.current, screen);
        self.current = screen;
    }

    /// Go back to `Home`.  Returns `true` if this caused a user-visible
    /// change; repeated calls on `Home` return `false`.
    pub fn go_back(&mut self) -> bool {
        if self.is_home() {
            return false;
        }
        info!("NAV back: {} -> {}", self.current, Screen::Home);
        self.current = Screen::Home;
        true
    }

    pub fn current(&self) -> &Screen {
        &self.current
    }

    pub fn is_home(&self) -> bool {
        self.current == Screen::Home
    }

    /// Persistable record of the current screen.
    pub fn serialize(&self) -> NavSnapshot {
        NavSnapshot::from_screen(&self.current)
    }

    /// Turn a persisted record back into a [`Screen`]; `None` is `Home`.
    pub fn deserialize(record: Option<&NavSnapshot>) -> Result<Screen> {
        record.map_or(Ok(Screen::Home), NavSnapshot::to_screen)
    }
}
