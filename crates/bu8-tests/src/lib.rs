//! Shared helpers for the BU8 integration tests, benches, and the golden
//! fixture generator.
//!
//! - [`encode_raw`] is a reference encoder that, unlike `char::encode_utf8`,
//!   will happily build over-long forms, surrogate halves, and values above
//!   `0x10FFFF`, so tests can feed the decoder every class of defect.
//! - [`FIXTURES`] is the list of golden inputs written to `tests/golden/`.
//! - [`render_trace`] turns a padded buffer into the line-per-character text
//!   that the conformance snapshots store.

use std::fmt::Write as _;

use bu8_decoder::PaddedBuf;

/// Payload bits available at each width (index 0 unused).
const PAYLOAD_BITS: [u32; 5] = [0, 7, 11, 16, 21];

/// Lead byte prefix at each width (index 0 unused).
const LEAD_PREFIX: [u8; 5] = [0x00, 0x00, 0xC0, 0xE0, 0xF0];

/// Encode `value` as a UTF-8 shaped sequence of exactly `width` bytes,
/// zero-filled to four bytes.
///
/// | Call                      | Result                    |
/// |---------------------------|---------------------------|
/// | `encode_raw(0x41, 1)`     | `[0x41, 0, 0, 0]`         |
/// | `encode_raw(0x41, 2)`     | `[0xC1, 0x81, 0, 0]`      |
/// | `encode_raw(0xD800, 3)`   | `[0xED, 0xA0, 0x80, 0]`   |
/// | `encode_raw(0x110000, 4)` | `[0xF4, 0x90, 0x80, 0x80]`|
///
/// # Panics
///
/// Panics if `width` is not in `1..=4` or `value` needs more payload bits
/// than `width` provides.
#[must_use]
pub fn encode_raw(mut value: u32, width: usize) -> [u8; 4] {
    assert!((1..=4).contains(&width), "width {width} out of range");
    assert!(
        value >> PAYLOAD_BITS[width] == 0,
        "{value:#X} does not fit in {width} byte(s)"
    );

    let mut out = [0u8; 4];
    for slot in out[1..width].iter_mut().rev() {
        #[allow(clippy::cast_possible_truncation)]
        let low = (value & 0x3F) as u8;
        *slot = 0x80 | low;
        value >>= 6;
    }
    #[allow(clippy::cast_possible_truncation)]
    let lead = value as u8;
    out[0] = LEAD_PREFIX[width] | lead;
    out
}

/// Shortest width that can hold `value`.
#[must_use]
pub fn canonical_width(value: u32) -> usize {
    match value {
        0..0x80 => 1,
        0x80..0x800 => 2,
        0x800..0x1_0000 => 3,
        _ => 4,
    }
}

/// A golden input: raw bytes plus a one-line description for the manifest.
pub struct Fixture {
    pub name: &'static str,
    pub description: &'static str,
    pub bytes: &'static [u8],
}

/// Every fixture under `tests/golden/<name>/input.bin`.
pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "ascii",
        description: "Plain ASCII text, one byte per character.",
        bytes: b"Hello, world!\n",
    },
    Fixture {
        name: "multilingual",
        description: "Valid text mixing 1, 2, 3 and 4 byte characters.",
        bytes: "h\u{e9}llo \u{20ac} \u{10348} \u{d55c} \u{1f600}".as_bytes(),
    },
    Fixture {
        name: "overlong",
        description: "Over-long encodings of NUL, U+007F, '/' and U+07FF, then 'A'.",
        bytes: &[
            0xC0, 0x80, 0xC1, 0xBF, 0xE0, 0x80, 0xAF, 0xF0, 0x80, 0x80, 0xAF, 0xE0, 0x9F, 0xBF,
            0x41,
        ],
    },
    Fixture {
        name: "surrogates",
        description: "Both ends of the surrogate range, then U+D7FF and 'x'.",
        bytes: &[
            0xED, 0xA0, 0x80, 0xED, 0xBF, 0xBF, 0xED, 0x9F, 0xBF, 0x78,
        ],
    },
    Fixture {
        name: "out_of_range",
        description: "U+10FFFF followed by three 4-byte values above it.",
        bytes: &[
            0xF4, 0x8F, 0xBF, 0xBF, 0xF4, 0x90, 0x80, 0x80, 0xF5, 0x80, 0x80, 0x80, 0xF7, 0xBF,
            0xBF, 0xBF,
        ],
    },
    Fixture {
        name: "bad_continuation",
        description: "Multi-byte leads followed by ASCII where continuation bytes belong.",
        bytes: &[
            0xC3, 0x28, 0xE2, 0x28, 0xA1, 0xE2, 0x82, 0x28, 0xF0, 0x90, 0x28, 0xBC, 0xF0, 0x28,
            0x8C, 0x28, 0x21,
        ],
    },
    Fixture {
        name: "invalid_lead",
        description: "Stray continuation bytes and 0xF8..=0xFF leads, then \"ok\".",
        bytes: &[
            0x80, 0xBF, 0xF8, 0x88, 0x80, 0x80, 0x80, 0xFE, 0xFF, 0x6F, 0x6B,
        ],
    },
    Fixture {
        name: "truncated_end",
        description: "A 3-byte character cut off by the end of the text.",
        bytes: &[0x61, 0x62, 0xE2, 0x82],
    },
];

/// Decode `text` from start to end and describe every step, one line each:
///
/// ```text
/// 0001  c3a9      len=2  U+00E9  flags=000  valid
/// ^off  ^bytes    ^step  ^value  ^raw bits  ^flag names
/// ```
///
/// `bytes` shows only the part of the character inside the text; a
/// character cut off at the end shows fewer bytes than its `len`.
#[must_use]
pub fn render_trace(text: &PaddedBuf) -> String {
    let mut out = String::new();
    let mut offset = 0;

    while let Some(decoded) = text.decode_at(offset) {
        let end = (offset + decoded.consumed).min(text.len());
        let bytes = hex::encode(&text.as_bytes()[offset..end]);
        let _ = writeln!(
            out,
            "{offset:04x}  {bytes:<8}  len={}  U+{:04X}  flags={:03x}  {}",
            decoded.consumed,
            decoded.ch,
            decoded.flags.raw(),
            decoded.flags
        );
        offset += decoded.consumed;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_raw_matches_std_for_canonical_widths() {
        for ch in ['\0', 'A', '\u{7f}', '\u{80}', '\u{7ff}', '\u{800}', '\u{ffff}', '\u{10000}', '\u{10ffff}'] {
            let value = u32::from(ch);
            let width = canonical_width(value);
            let mut expected = [0u8; 4];
            ch.encode_utf8(&mut expected);
            assert_eq!(encode_raw(value, width), expected, "{value:#X}");
        }
    }

    #[test]
    fn encode_raw_builds_overlong_forms() {
        assert_eq!(encode_raw(0x41, 2), [0xC1, 0x81, 0, 0]);
        assert_eq!(encode_raw(0, 3), [0xE0, 0x80, 0x80, 0]);
        assert_eq!(encode_raw(0x7FF, 4), [0xF0, 0x80, 0x9F, 0xBF]);
    }

    #[test]
    fn encode_raw_builds_invalid_values() {
        assert_eq!(encode_raw(0xD800, 3), [0xED, 0xA0, 0x80, 0]);
        assert_eq!(encode_raw(0x11_0000, 4), [0xF4, 0x90, 0x80, 0x80]);
        assert_eq!(encode_raw(0x1F_FFFF, 4), [0xF7, 0xBF, 0xBF, 0xBF]);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn encode_raw_rejects_oversized_value() {
        let _ = encode_raw(0x800, 2);
    }

    #[test]
    fn fixture_names_are_unique() {
        for (i, a) in FIXTURES.iter().enumerate() {
            for b in &FIXTURES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn trace_of_short_text() {
        let trace = render_trace(&PaddedBuf::from("a\u{e9}"));
        assert_eq!(
            trace,
            "0000  61        len=1  U+0061  flags=000  valid\n\
             0001  c3a9      len=2  U+00E9  flags=000  valid\n"
        );
    }
}
