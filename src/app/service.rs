//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the [`PetStore`] and the [`NavigationController`]
//! and exposes a UI-agnostic API.  Snapshot storage and observers are port
//! traits passed in at call sites, making the whole service testable with
//! in-memory fakes.
//!
//! ```text
//!  SnapshotPort ◀─▶ ┌──────────────────────────┐ ──▶ EventSink
//!                   │        AppService         │
//!   AppCommand ───▶ │  PetStore · Navigation    │
//!                   └──────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::{AppConfig, RestorePolicy};
use crate::error::{Error, Result};
use crate::nav::{NavSnapshot, NavigationController, Screen, ScreenName};
use crate::pet::Pet;
use crate::store::{PetStore, SpeciesFilter};

use super::commands::{AppCommand, CommandOutcome};
use super::events::AppEvent;
use super::ports::{EventSink, SnapshotPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
#[derive(Debug)]
pub struct AppService {
    store: PetStore,
    nav: NavigationController,
    config: AppConfig,
}

impl AppService {
    /// Construct the service with the seed list.
    ///
    /// Starts on `Home`; call [`start`](Self::start) to restore a prior
    /// snapshot.
    pub fn new(pets: Vec<Pet>, config: AppConfig) -> Self {
        Self {
            store: PetStore::new(pets),
            nav: NavigationController::new(),
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Restore the navigation state left by a previous process instance,
    /// if any, and announce the initial screen.
    pub fn start(
        &mut self,
        snapshots: &impl SnapshotPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        let screen = self.restore(snapshots, sink)?;
        let name = screen.name();
        self.nav = NavigationController::starting_at(screen);
        sink.emit(&AppEvent::Started(name));
        info!("AppService started on {}", self.nav.current());
        Ok(())
    }

    /// Persist the current screen.  Called by the shell when the host is
    /// about to reclaim the process.  Returns the snapshot size.
    pub fn suspend(
        &self,
        snapshots: &mut impl SnapshotPort,
        sink: &mut impl EventSink,
    ) -> Result<usize> {
        let bytes = self.nav.serialize().encode(self.config.snapshot_format)?;
        snapshots.save(&bytes)?;
        sink.emit(&AppEvent::SnapshotSaved { bytes: bytes.len() });
        info!(
            "AppService suspended on {} ({} bytes)",
            self.nav.current(),
            bytes.len()
        );
        Ok(bytes.len())
    }

    // ── Command handling ──────────────────────────────────────

    /// Process a UI command.  Events are emitted only after the state
    /// change is complete.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        sink: &mut impl EventSink,
    ) -> Result<CommandOutcome> {
        match cmd {
            AppCommand::NavigateTo(screen) => {
                let from = self.nav.current().name();
                let to = screen.name();
                self.nav.navigate_to(screen);
                sink.emit(&AppEvent::ScreenChanged { from, to });
                Ok(CommandOutcome::Navigated)
            }
            AppCommand::Back => {
                let from = self.nav.current().name();
                let handled = self.nav.go_back();
                if handled {
                    sink.emit(&AppEvent::ScreenChanged {
                        from,
                        to: ScreenName::Home,
                    });
                }
                Ok(CommandOutcome::Back { handled })
            }
            AppCommand::ToggleLiked(pet) => {
                let toggled = self.store.toggle_liked(&pet)?;

                // The detail screen shows a snapshot; swap in the new value
                // so a second tap on the same screen still finds the pet.
                if self.nav.current().pet() == Some(&pet) {
                    self.nav.navigate_to(Screen::detail(toggled.clone()));
                    sink.emit(&AppEvent::ScreenChanged {
                        from: ScreenName::Detail,
                        to: ScreenName::Detail,
                    });
                }

                sink.emit(&AppEvent::LikeToggled {
                    name: toggled.name().to_owned(),
                    liked: toggled.is_liked(),
                });
                Ok(CommandOutcome::Toggled(toggled))
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Pets for the home list under `filter`.
    pub fn pets(&self, filter: SpeciesFilter) -> Vec<Pet> {
        self.store.list(filter)
    }

    pub fn current_screen(&self) -> &Screen {
        self.nav.current()
    }

    pub fn store(&self) -> &PetStore {
        &self.store
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn restore(
        &self,
        snapshots: &impl SnapshotPort,
        sink: &mut impl EventSink,
    ) -> Result<Screen> {
        let restored = match snapshots.load() {
            Ok(None) => {
                info!("AppService: no prior snapshot, starting on HOME");
                return Ok(Screen::Home);
            }
            Ok(Some(bytes)) => NavSnapshot::decode(&bytes, self.config.snapshot_format)
                .and_then(|record| NavigationController::deserialize(Some(&record))),
            Err(e) => {
                warn!("AppService: snapshot store unreadable: {}", e);
                if self.config.restore_policy == RestorePolicy::Strict {
                    return Err(e.into());
                }
                Err(Error::MalformedState("snapshot store unreadable"))
            }
        };

        match restored {
            Ok(screen) => {
                sink.emit(&AppEvent::SnapshotRestored(screen.name()));
                info!("AppService: restored {}", screen);
                Ok(screen)
            }
            Err(Error::MalformedState(why)) if self.config.restore_policy == RestorePolicy::FailSoft => {
                warn!("AppService: discarding snapshot ({}), starting on HOME", why);
                sink.emit(&AppEvent::RestoreFailed(why));
                Ok(Screen::Home)
            }
            Err(e) => Err(e),
        }
    }
}
