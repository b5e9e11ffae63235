//! Adoptme demo shell.
//!
//! Stands in for the mobile host: it owns the saved-state storage, drives
//! the core with the commands a user's taps would produce, then simulates
//! the OS reclaiming and recreating the process.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Shell (this binary)                                         │
//! │    MemoryStorage (Config + saved-state)   LogEventSink       │
//! │  ─────────────── Port Trait Boundary ──────────────────      │
//! │    AppService  ·  PetStore  ·  NavigationController          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RUST_LOG=debug cargo run` shows store and snapshot internals.

use anyhow::{Context, Result};
use log::info;
use tracing_subscriber::EnvFilter;

use adoptme::adapters::{LogEventSink, MemoryStorage, StorageSnapshotStore};
use adoptme::app::commands::{AppCommand, CommandOutcome};
use adoptme::app::ports::ConfigPort;
use adoptme::app::service::AppService;
use adoptme::nav::Screen;
use adoptme::pet::Species;
use adoptme::seed::seed_pets;

fn main() -> Result<()> {
    // `log` records are forwarded through tracing-log by `init()`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let storage = MemoryStorage::new();
    let config = storage.load().context("loading config")?;
    let mut sink = LogEventSink::new();

    // ── First process instance ────────────────────────────────
    let mut snapshots = StorageSnapshotStore::for_config(storage.clone(), &config);
    let mut app = AppService::new(seed_pets(), config.clone());
    app.start(&snapshots, &mut sink)?;

    let mut filter = config.default_filter;
    filter.toggle(Species::Chameleon);
    let visible = app.pets(filter);
    info!("home list {:?}: {} pets", filter, visible.len());
    for pet in &visible {
        info!("  {} ({}) {}", pet.name(), pet.species(), pet.location());
    }

    let dog = visible
        .iter()
        .find(|p| p.species() == Species::Dog)
        .cloned()
        .context("seed list has no dog")?;
    app.handle_command(AppCommand::NavigateTo(Screen::detail(dog.clone())), &mut sink)?;
    app.handle_command(AppCommand::ToggleLiked(dog), &mut sink)?;
    info!("liked so far: {}", app.store().liked().len());

    app.suspend(&mut snapshots, &mut sink)?;
    drop(app);

    // ── Process recreated by the host ─────────────────────────
    let snapshots = StorageSnapshotStore::for_config(storage, &config);
    let mut app = AppService::new(seed_pets(), config);
    app.start(&snapshots, &mut sink)?;
    info!("resumed on {}", app.current_screen());

    if let CommandOutcome::Back { handled } = app.handle_command(AppCommand::Back, &mut sink)? {
        info!("back handled={}", handled);
    }
    if let CommandOutcome::Back { handled } = app.handle_command(AppCommand::Back, &mut sink)? {
        info!("back handled={} (host would close the app)", handled);
    }

    Ok(())
}
