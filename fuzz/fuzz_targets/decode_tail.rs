#![no_main]

use bu8_decoder::{decode_at, decode_tail, DecodeError};
use libfuzzer_sys::fuzz_target;

// Fuzz target: scan an unpadded buffer, switching to decode_tail for the
// last bytes.
//
// Catches bugs in:
// - decode_at bounds checking
// - decode_tail stepping past the end of its input
// - TRUNCATED disagreeing with the declared length
fuzz_target!(|data: &[u8]| {
    let mut offset = 0;
    while offset < data.len() {
        let d = match decode_at(data, offset) {
            Ok(d) => d,
            Err(DecodeError::InsufficientPadding { .. }) => decode_tail(&data[offset..]).unwrap(),
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(d.consumed >= 1);
        offset += d.consumed;
    }
    assert_eq!(offset, data.len());
});
