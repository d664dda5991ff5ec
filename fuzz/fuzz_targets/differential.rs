#![no_main]

use arbitrary::Arbitrary;
use bu8_decoder::{decode, declared_len};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    window: [u8; 4],
}

// Fuzz target: branchless decode vs core::str::from_utf8.
//
// Takes one four-byte window, decodes it, and asserts that the decoder
// accepts exactly the sequences std accepts and yields the same value.
fuzz_target!(|input: Input| {
    let d = decode(&input.window);
    assert_eq!(d.consumed, declared_len(input.window[0]).max(1));

    match core::str::from_utf8(&input.window[..d.consumed]) {
        Ok(s) => {
            assert!(d.is_valid(), "{:02X?} rejected: {}", input.window, d.flags);
            assert_eq!(s.chars().next().map(u32::from), Some(d.ch));
        }
        Err(_) => assert!(!d.is_valid(), "{:02X?} accepted", input.window),
    }
});
