//! Fuzz target: command sequences against `AppService`
//!
//! Each input byte selects one command (navigate home/detail/account,
//! back, toggle a listed pet, suspend + recreate) and verifies:
//! - No panics
//! - One `Back` from any state lands on Home; a second is unhandled
//! - The store never changes length
//!
//! cargo fuzz run fuzz_nav_ops

#![no_main]

use adoptme::app::commands::{AppCommand, CommandOutcome};
use adoptme::app::events::AppEvent;
use adoptme::app::ports::{EventSink, SnapshotPort, StorageError};
use adoptme::app::service::AppService;
use adoptme::config::AppConfig;
use adoptme::nav::Screen;
use adoptme::seed::seed_pets;
use adoptme::store::SpeciesFilter;
use libfuzzer_sys::fuzz_target;

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

#[derive(Default)]
struct Slot(Option<Vec<u8>>);

impl SnapshotPort for Slot {
    fn save(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        self.0 = Some(bytes.to_vec());
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.0.clone())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.0 = None;
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    let mut sink = NullSink;
    let mut slot = Slot::default();
    let mut app = AppService::new(seed_pets(), AppConfig::default());
    app.start(&slot, &mut sink).expect("cold start");
    let count = app.store().len();

    for byte in data {
        let pets = app.pets(SpeciesFilter::all());
        let pick = pets[usize::from(byte >> 3) % pets.len()].clone();
        match byte & 0x07 {
            0 => {
                let _ = app.handle_command(AppCommand::NavigateTo(Screen::Home), &mut sink);
            }
            1 | 2 => {
                let _ = app.handle_command(AppCommand::NavigateTo(Screen::detail(pick)), &mut sink);
            }
            3 => {
                let _ = app.handle_command(AppCommand::NavigateTo(Screen::Account), &mut sink);
            }
            4 | 5 => {
                let _ = app.handle_command(AppCommand::Back, &mut sink);
            }
            6 => {
                app.handle_command(AppCommand::ToggleLiked(pick), &mut sink)
                    .expect("listed pet must be found");
            }
            _ => {
                app.suspend(&mut slot, &mut sink).expect("suspend");
                let mut next = AppService::new(seed_pets(), AppConfig::default());
                next.start(&slot, &mut sink).expect("restore");
                assert_eq!(next.current_screen().name(), app.current_screen().name());
                app = next;
            }
        }
        assert_eq!(app.store().len(), count);
    }

    let was_home = app.current_screen() == &Screen::Home;
    let first = app.handle_command(AppCommand::Back, &mut sink).expect("back");
    assert_eq!(first, CommandOutcome::Back { handled: !was_home });
    let second = app.handle_command(AppCommand::Back, &mut sink).expect("back");
    assert_eq!(second, CommandOutcome::Back { handled: false });
});
