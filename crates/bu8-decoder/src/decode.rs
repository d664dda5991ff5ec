use crate::error::DecodeError;
use crate::flags::Utf8Flags;
use crate::tables::{FLAG_SHIFTS, LEAD_MASKS, LENGTHS, MIN_VALUES, PAYLOAD_SHIFTS};

/// Number of bytes [`decode`] reads on every call.
pub const WINDOW: usize = 4;

/// Result of decoding one character.
///
/// ```text
/// ┌──────────┬──────────────────────────────────────────────────────────┐
/// │ Field    │ Meaning                                                  │
/// ├──────────┼──────────────────────────────────────────────────────────┤
/// │ ch       │ Decoded value. Best effort when flags are set; may lie   │
/// │          │ outside the Unicode range or be a surrogate.             │
/// │ consumed │ Bytes to advance, 1..=4. Taken from the lead byte alone, │
/// │          │ so a malformed tail still moves the cursor forward.      │
/// │ flags    │ Defects found. Empty means `ch` is a valid scalar value. │
/// └──────────┴──────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub ch: u32,
    pub consumed: usize,
    pub flags: Utf8Flags,
}

impl Decoded {
    /// True when no defect was detected.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.flags.is_empty()
    }

    /// Convert to a `char`, refusing anything that carried flags.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidSequence`] when the decode reported any
    /// defect.
    pub fn to_char(self) -> Result<char, DecodeError> {
        char::from_u32(self.ch)
            .filter(|_| self.is_valid())
            .ok_or(DecodeError::InvalidSequence {
                consumed: self.consumed,
                flags: self.flags,
            })
    }
}

/// Declared length of the character starting with `lead`.
///
/// Returns 0 for bytes that can never start a character: continuation bytes
/// (`0x80..=0xBF`) and `0xF8..=0xFF`. `0xC0`, `0xC1` and `0xF5..=0xF7` do
/// get a length; the value they produce is rejected later.
#[must_use]
#[inline]
pub fn declared_len(lead: u8) -> usize {
    usize::from(LENGTHS[usize::from(lead >> 3)])
}

/// Decode the character at the start of `window`.
///
/// All four bytes are read and every check runs, whatever the declared
/// length is. Bytes past the end of the character only contribute bits that
/// are shifted out again, so their content does not matter. The caller owns
/// the over-read: when decoding near the end of a text, the window must be
/// taken from padded storage (see [`PaddedBuf`](crate::PaddedBuf)) or built
/// with [`decode_tail`].
///
/// # Wire format examples
///
/// | Window                   | `ch`      | `consumed` | `flags`                          |
/// |--------------------------|-----------|------------|----------------------------------|
/// | `41 __ __ __`            | `0x41`    | 1          | empty                            |
/// | `E2 82 AC __`            | `0x20AC`  | 3          | empty                            |
/// | `F0 90 8D 88`            | `0x10348` | 4          | empty                            |
/// | `C1 81 __ __`            | `0x41`    | 2          | `NON_CANONICAL`                  |
/// | `ED A0 80 __`            | `0xD800`  | 3          | `SURROGATE`                      |
/// | `F4 90 80 80`            | `0x110000`| 4          | `OUT_OF_RANGE`                   |
/// | `80 80 80 80`            | `0`       | 1          | `NON_CANONICAL \| INVALID_LEAD`  |
#[must_use]
#[inline]
pub fn decode(window: &[u8; WINDOW]) -> Decoded {
    let [b0, b1, b2, b3] = *window;
    let len = declared_len(b0);

    // Assume four bytes; the shift drops the payload of unused ones.
    let mut ch = u32::from(b0 & LEAD_MASKS[len]) << 18;
    ch |= u32::from(b1 & 0x3F) << 12;
    ch |= u32::from(b2 & 0x3F) << 6;
    ch |= u32::from(b3 & 0x3F);
    ch >>= PAYLOAD_SHIFTS[len];

    let mut e = u16::from(ch < MIN_VALUES[len]) << 6;
    e |= u16::from((ch >> 11) == 0x1B) << 7;
    e |= u16::from(ch > 0x10_FFFF) << 8;

    // Top two bits of bytes 1..=3 land in bits 5..=0. A correct tail reads
    // 0b10_10_10, which the XOR turns into zero.
    e |= u16::from(b1 & 0xC0) >> 2;
    e |= u16::from(b2 & 0xC0) >> 4;
    e |= u16::from(b3) >> 6;
    e ^= 0x2A;

    // Discard checks for bytes past the declared length, keeping the rest
    // at fixed positions.
    e = (e >> FLAG_SHIFTS[len]) << FLAG_SHIFTS[len];
    e |= u16::from(len == 0) << 9;

    Decoded {
        ch,
        consumed: len + usize::from(len == 0),
        flags: Utf8Flags::from_raw(e),
    }
}

/// Decode the character at `buf[offset..]`, checking that a full window is
/// readable there.
///
/// # Errors
///
/// Returns [`DecodeError::InsufficientPadding`] when fewer than [`WINDOW`]
/// bytes remain at `offset`.
pub fn decode_at(buf: &[u8], offset: usize) -> Result<Decoded, DecodeError> {
    buf.get(offset..)
        .and_then(|rest| rest.first_chunk::<WINDOW>())
        .map(decode)
        .ok_or(DecodeError::InsufficientPadding {
            offset,
            available: buf.len().saturating_sub(offset),
        })
}

/// Decode the first character of an unpadded slice.
///
/// Copies up to four bytes into a zero-filled window, so it is safe on the
/// last character of a buffer. When the declared length runs past the input,
/// [`Utf8Flags::TRUNCATED`] is set and `consumed` is clamped to
/// `bytes.len()`.
///
/// Returns `None` only for an empty slice.
#[must_use]
pub fn decode_tail(bytes: &[u8]) -> Option<Decoded> {
    let available = bytes.len().min(WINDOW);
    if available == 0 {
        return None;
    }

    let mut window = [0u8; WINDOW];
    window[..available].copy_from_slice(&bytes[..available]);

    let mut decoded = decode(&window);
    if decoded.consumed > bytes.len() {
        decoded.flags |= Utf8Flags::TRUNCATED;
        decoded.consumed = bytes.len();
    }
    Some(decoded)
}
