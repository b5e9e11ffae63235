//! Mock port adapters for integration tests.
//!
//! `RecordingSink` keeps every emitted event so tests can assert on the
//! full history; `MockSnapshots` is a byte slot that can be told to fail.

use adoptme::app::events::AppEvent;
use adoptme::app::ports::{EventSink, SnapshotPort, StorageError};
use adoptme::pet::{Pet, Sex, Size, Species};

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&AppEvent> {
        self.events.last()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── MockSnapshots ─────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockSnapshots {
    pub bytes: Option<Vec<u8>>,
    pub fail_reads: bool,
    pub saves: usize,
}

#[allow(dead_code)]
impl MockSnapshots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Some(bytes.into()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }
}

impl SnapshotPort for MockSnapshots {
    fn save(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        self.saves += 1;
        self.bytes = Some(bytes.to_vec());
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::IoError);
        }
        Ok(self.bytes.clone())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.bytes = None;
        Ok(())
    }
}

// ── Fixtures ──────────────────────────────────────────────────

pub fn cat_a() -> Pet {
    Pet::new("Luna", Species::Cat, Size::Small, Sex::Female)
        .with_location("Lisbon, PT")
        .with_description("Sleeps on warm keyboards.")
        .with_assets("luna", "ic_cat")
}

pub fn dog_b() -> Pet {
    Pet::new("Milo", Species::Dog, Size::Large, Sex::Male)
        .with_location("Porto, PT")
        .with_description("Loves long walks.")
        .with_assets("milo", "ic_dog")
}
