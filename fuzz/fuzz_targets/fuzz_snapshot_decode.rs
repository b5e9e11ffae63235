//! Fuzz target: navigation snapshot decoder
//!
//! Feeds arbitrary bytes to `NavSnapshot::decode` in both formats and
//! verifies:
//! - No panics under arbitrary input
//! - Anything that decodes and validates re-encodes to an equal screen
//!
//! cargo fuzz run fuzz_snapshot_decode

#![no_main]

use adoptme::nav::{NavSnapshot, SnapshotFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for format in [SnapshotFormat::Postcard, SnapshotFormat::Json] {
        let Ok(record) = NavSnapshot::decode(data, format) else {
            continue;
        };
        let Ok(screen) = record.to_screen() else {
            continue;
        };

        let bytes = NavSnapshot::from_screen(&screen)
            .encode(format)
            .expect("valid screen must encode");
        let again = NavSnapshot::decode(&bytes, format)
            .and_then(|r| r.to_screen())
            .expect("re-encoded snapshot must decode");
        assert_eq!(again, screen);
    }
});
