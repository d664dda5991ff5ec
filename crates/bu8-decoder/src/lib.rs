//! Branchless single-character UTF-8 decoding.
//!
//! The whole crate is built around one primitive, [`decode`], which turns a
//! four-byte window into a code point, a set of defect flags, and the number
//! of bytes to advance. Every call reads all four bytes and executes the same
//! instruction sequence regardless of the input, so mixed or adversarial text
//! costs the same as plain ASCII.
//!
//! ```text
//!   window: [u8; 4] ──► decode ──► Decoded { ch, consumed, flags }
//!                                        │        │         │
//!                                        │        │         └─ Utf8Flags (empty = valid)
//!                                        │        └─ 1..=4, always advances
//!                                        └─ best-effort code point
//! ```
//!
//! Because four bytes are always read, the text must be followed by at least
//! [`PADDING`] readable bytes. [`PaddedBuf`] and [`PaddedSlice`] carry that
//! guarantee in their types. [`decode_tail`] is the slower, safe variant for
//! the last character of an unpadded buffer.
#![warn(clippy::pedantic)]

pub mod decode;
pub mod error;
pub mod flags;
pub mod padded;

mod tables;

pub use decode::{Decoded, WINDOW, declared_len, decode, decode_at, decode_tail};
pub use error::DecodeError;
pub use flags::Utf8Flags;
pub use padded::{PADDING, PaddedBuf, PaddedSlice};
