use crate::flags::Utf8Flags;

/// Errors surfaced by the checked entry points.
///
/// Malformed UTF-8 is *not* an error here: [`decode`](crate::decode) always
/// succeeds and reports defects through [`Utf8Flags`]. These variants cover
/// misuse of the buffer contract, plus the explicit conversion of a decode
/// result into a `char`.
///
/// ```text
/// ┌─────────────────────┬─────────────────────────────────────────────────┐
/// │ Variant             │ Cause                                           │
/// ├─────────────────────┼─────────────────────────────────────────────────┤
/// │ InsufficientPadding │ fewer than 4 readable bytes at the decode offset│
/// │ PaddingTooShort     │ buffer cannot hold the text plus 3 pad bytes    │
/// │ InvalidSequence     │ to_char() on a decode that carried flags        │
/// └─────────────────────┴─────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A four-byte window could not be taken at `offset`.
    #[error("need 4 readable bytes at offset {offset}, only {available} available")]
    InsufficientPadding { offset: usize, available: usize },

    /// A [`PaddedSlice`](crate::PaddedSlice) was requested over a buffer
    /// without room for the trailing padding.
    #[error("buffer of {actual} bytes cannot hold {len} bytes of text plus 3 bytes of padding")]
    PaddingTooShort { len: usize, actual: usize },

    /// The decoded sequence was not a valid character.
    #[error("invalid UTF-8 sequence of {consumed} byte(s): {flags}")]
    InvalidSequence { consumed: usize, flags: Utf8Flags },
}
