// The five lookup tables that drive the decoder. All except LENGTHS are
// indexed by the declared length (0..=4), where 0 means "not a lead byte".

/// Declared length, indexed by the top five bits of the lead byte.
///
/// ```text
///   lead >> 3   lead range    length
///   0x00-0x0F   0x00..=0x7F   1       ASCII
///   0x10-0x17   0x80..=0xBF   0       continuation byte used as lead
///   0x18-0x1B   0xC0..=0xDF   2
///   0x1C-0x1D   0xE0..=0xEF   3
///   0x1E        0xF0..=0xF7   4
///   0x1F        0xF8..=0xFF   0       no such length in UTF-8
/// ```
pub(crate) const LENGTHS: [u8; 32] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
    0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 3, 3, 4, 0,
];

/// Payload bits of the lead byte.
pub(crate) const LEAD_MASKS: [u8; 5] = [0x00, 0x7F, 0x1F, 0x0F, 0x07];

/// Smallest value that needs the given length. Entry 0 is larger than any
/// 21-bit value, so a length-0 lead always reports as non-canonical.
pub(crate) const MIN_VALUES: [u32; 5] = [0x40_0000, 0, 0x80, 0x800, 0x1_0000];

/// Right shift that drops the payload bits of bytes past the declared length.
pub(crate) const PAYLOAD_SHIFTS: [u32; 5] = [0, 18, 12, 6, 0];

/// Right shift that drops continuation checks for bytes past the declared
/// length.
pub(crate) const FLAG_SHIFTS: [u32; 5] = [0, 6, 4, 2, 0];
