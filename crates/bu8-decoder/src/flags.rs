use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Defects detected while decoding one character.
///
/// An empty set means the sequence was valid. Several bits may be set at
/// once; the decoder accumulates every check instead of stopping at the
/// first failure.
///
/// Bit layout:
///
/// ```text
/// ┌────────┬────────────────────────┬──────────────────────────────────────┐
/// │ Bit(s) │ Constant               │ Set when                             │
/// ├────────┼────────────────────────┼──────────────────────────────────────┤
/// │ 0-1    │ CONTINUATION_3         │ byte 3 is not 0b10xx_xxxx            │
/// │ 2-3    │ CONTINUATION_2         │ byte 2 is not 0b10xx_xxxx            │
/// │ 4-5    │ CONTINUATION_1         │ byte 1 is not 0b10xx_xxxx            │
/// │ 6      │ NON_CANONICAL          │ value fits in fewer bytes            │
/// │ 7      │ SURROGATE              │ value in 0xD800..=0xDFFF             │
/// │ 8      │ OUT_OF_RANGE           │ value above 0x10FFFF                 │
/// │ 9      │ INVALID_LEAD           │ first byte cannot start a character  │
/// │ 10     │ TRUNCATED              │ input ended early (decode_tail only) │
/// └────────┴────────────────────────┴──────────────────────────────────────┘
/// ```
///
/// Continuation checks only survive for bytes inside the declared length,
/// so the positions above are the same for every length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf8Flags(u16);

impl Utf8Flags {
    /// No defects.
    pub const NONE: Self = Self(0);

    pub const CONTINUATION_3: Self = Self(0b0000_0000_0011);
    pub const CONTINUATION_2: Self = Self(0b0000_0000_1100);
    pub const CONTINUATION_1: Self = Self(0b0000_0011_0000);

    /// Any continuation byte inside the declared length is malformed.
    pub const MALFORMED_CONTINUATION: Self = Self(0b0000_0011_1111);

    /// Over-long encoding: more bytes than the value requires.
    pub const NON_CANONICAL: Self = Self(1 << 6);

    /// A UTF-16 surrogate half encoded directly.
    pub const SURROGATE: Self = Self(1 << 7);

    /// Value above the last Unicode code point.
    pub const OUT_OF_RANGE: Self = Self(1 << 8);

    /// Lead byte is a continuation byte or declares a length above 4.
    pub const INVALID_LEAD: Self = Self(1 << 9);

    /// The declared length ran past the end of the input.
    pub const TRUNCATED: Self = Self(1 << 10);

    const NAMES: [(Self, &'static str); 6] = [
        (Self::MALFORMED_CONTINUATION, "malformed continuation"),
        (Self::NON_CANONICAL, "non-canonical encoding"),
        (Self::SURROGATE, "surrogate half"),
        (Self::OUT_OF_RANGE, "out of range"),
        (Self::INVALID_LEAD, "invalid lead byte"),
        (Self::TRUNCATED, "truncated"),
    ];

    /// Create flags from a raw bit pattern.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the underlying bit pattern. Zero means valid.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if any bit of `other` is also set in `self`.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every bit of `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn has_malformed_continuation(self) -> bool {
        self.intersects(Self::MALFORMED_CONTINUATION)
    }

    #[must_use]
    pub const fn is_non_canonical(self) -> bool {
        self.intersects(Self::NON_CANONICAL)
    }

    #[must_use]
    pub const fn is_surrogate(self) -> bool {
        self.intersects(Self::SURROGATE)
    }

    #[must_use]
    pub const fn is_out_of_range(self) -> bool {
        self.intersects(Self::OUT_OF_RANGE)
    }

    #[must_use]
    pub const fn has_invalid_lead(self) -> bool {
        self.intersects(Self::INVALID_LEAD)
    }

    #[must_use]
    pub const fn is_truncated(self) -> bool {
        self.intersects(Self::TRUNCATED)
    }
}

impl BitOr for Utf8Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Utf8Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Comma-separated defect names, or `valid` for an empty set.
impl fmt::Display for Utf8Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("valid");
        }

        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.intersects(flag) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        let flags = Utf8Flags::default();
        assert!(flags.is_empty());
        assert_eq!(flags, Utf8Flags::NONE);
        assert_eq!(flags.raw(), 0);
    }

    #[test]
    fn continuation_union_covers_each_byte() {
        let union =
            Utf8Flags::CONTINUATION_1 | Utf8Flags::CONTINUATION_2 | Utf8Flags::CONTINUATION_3;
        assert_eq!(union, Utf8Flags::MALFORMED_CONTINUATION);
        assert!(Utf8Flags::CONTINUATION_2.has_malformed_continuation());
    }

    #[test]
    fn named_bits_do_not_overlap() {
        let mut seen = 0u16;
        for (flag, _) in Utf8Flags::NAMES {
            assert_eq!(seen & flag.raw(), 0, "{flag:?} overlaps");
            seen |= flag.raw();
        }
    }

    #[test]
    fn predicates_follow_bits() {
        let flags = Utf8Flags::from_raw(0b0010_1100_0000);
        assert!(flags.is_non_canonical());
        assert!(flags.is_surrogate());
        assert!(flags.has_invalid_lead());
        assert!(!flags.is_out_of_range());
        assert!(!flags.has_malformed_continuation());
        assert!(!flags.is_truncated());
    }

    #[test]
    fn contains_requires_every_bit() {
        let flags = Utf8Flags::CONTINUATION_1 | Utf8Flags::SURROGATE;
        assert!(flags.contains(Utf8Flags::SURROGATE));
        assert!(!flags.contains(Utf8Flags::MALFORMED_CONTINUATION));
        assert!(flags.intersects(Utf8Flags::MALFORMED_CONTINUATION));
    }

    #[test]
    fn bitor_assign_accumulates() {
        let mut flags = Utf8Flags::NONE;
        flags |= Utf8Flags::TRUNCATED;
        flags |= Utf8Flags::OUT_OF_RANGE;
        assert_eq!(flags.raw(), (1 << 10) | (1 << 8));
    }

    #[test]
    fn display_valid() {
        assert_eq!(Utf8Flags::NONE.to_string(), "valid");
    }

    #[test]
    fn display_lists_names_in_bit_order() {
        let flags = Utf8Flags::OUT_OF_RANGE | Utf8Flags::CONTINUATION_3 | Utf8Flags::NON_CANONICAL;
        assert_eq!(
            flags.to_string(),
            "malformed continuation, non-canonical encoding, out of range"
        );
    }
}
