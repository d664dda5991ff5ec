#![no_main]

use bu8_decoder::{PaddedBuf, WINDOW};
use libfuzzer_sys::fuzz_target;

// Fuzz target: scan arbitrary bytes with PaddedBuf::decode_at.
//
// Catches bugs in:
// - Table indexing for every lead byte
// - Reads past the padding near the end of the text
// - Loops that fail to advance on malformed input
fuzz_target!(|data: &[u8]| {
    let buf = PaddedBuf::from(data);
    let mut offset = 0;
    while let Some(d) = buf.decode_at(offset) {
        assert!((1..=WINDOW).contains(&d.consumed));
        offset += d.consumed;
    }
    assert!(offset >= data.len());
});
