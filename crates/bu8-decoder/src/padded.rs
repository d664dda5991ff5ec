use crate::decode::{Decoded, WINDOW, decode};
use crate::error::DecodeError;

/// Readable bytes required after the logical end of the text.
///
/// A decode started on the last byte still reads [`WINDOW`] bytes, so three
/// more must exist behind it.
pub const PADDING: usize = WINDOW - 1;

/// Borrowed text with guaranteed trailing padding.
///
/// The first `len` bytes are the text; at least [`PADDING`] more bytes follow
/// and may hold anything. Every offset below `len` can be decoded without a
/// bounds failure.
///
/// ```text
///   bytes: │ t │ e │ x │ t │ ? │ ? │ ? │ ...
///          └──── len ─────┘└ PADDING ┘
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PaddedSlice<'a> {
    bytes: &'a [u8],
    len: usize,
}

impl<'a> PaddedSlice<'a> {
    /// View the first `len` bytes of `bytes` as text, using the rest as
    /// padding.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::PaddingTooShort`] if `bytes` is shorter than
    /// `len + PADDING`.
    pub fn new(bytes: &'a [u8], len: usize) -> Result<Self, DecodeError> {
        match len.checked_add(PADDING) {
            Some(required) if bytes.len() >= required => Ok(Self { bytes, len }),
            _ => Err(DecodeError::PaddingTooShort {
                len,
                actual: bytes.len(),
            }),
        }
    }

    /// Length of the text, excluding padding.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The text, excluding padding.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[..self.len]
    }

    /// Decode the character starting at `offset`.
    ///
    /// Returns `None` once `offset` reaches the end of the text. A character
    /// whose declared length runs past the end still decodes: its missing
    /// bytes come from the padding and `consumed` may step beyond `len`.
    #[must_use]
    #[inline]
    pub fn decode_at(&self, offset: usize) -> Option<Decoded> {
        if offset >= self.len {
            return None;
        }
        self.bytes[offset..].first_chunk::<WINDOW>().map(decode)
    }
}

/// Owned text followed by [`PADDING`] zero bytes.
///
/// Zero padding makes a character cut off by the end of the text report a
/// malformed continuation, since `0x00` is never a continuation byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedBuf {
    bytes: Vec<u8>,
    len: usize,
}

impl PaddedBuf {
    /// Take ownership of `bytes` and append the padding.
    #[must_use]
    pub fn new(mut bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        bytes.resize(len + PADDING, 0);
        Self { bytes, len }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The text, excluding padding.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Borrow as a [`PaddedSlice`].
    #[must_use]
    pub fn as_slice(&self) -> PaddedSlice<'_> {
        PaddedSlice {
            bytes: &self.bytes,
            len: self.len,
        }
    }

    /// Decode the character starting at `offset`. See
    /// [`PaddedSlice::decode_at`].
    #[must_use]
    #[inline]
    pub fn decode_at(&self, offset: usize) -> Option<Decoded> {
        self.as_slice().decode_at(offset)
    }
}

impl From<Vec<u8>> for PaddedBuf {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for PaddedBuf {
    fn from(bytes: &[u8]) -> Self {
        let mut owned = Vec::with_capacity(bytes.len() + PADDING);
        owned.extend_from_slice(bytes);
        Self::new(owned)
    }
}

impl From<&str> for PaddedBuf {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}
