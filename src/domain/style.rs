// ============================================================================
// Number Styles
// Flag set describing which textual elements a parse accepts
// ============================================================================

use crate::codec::{ArgumentError, CodecResult};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Set of permitted textual elements for parsing.
///
/// Individual flags combine with `|`. A combination is only checked when it
/// reaches the parser (or [`NumberStyles::validate`]), so composing flags
/// never fails on its own.
///
/// # Example
/// ```
/// use uint_text_codec::domain::NumberStyles;
///
/// let style = NumberStyles::INTEGER | NumberStyles::ALLOW_THOUSANDS;
/// assert!(style.contains(NumberStyles::ALLOW_LEADING_SIGN));
/// assert!(style.validate().is_ok());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
#[repr(transparent)]
pub struct NumberStyles(u32);

impl NumberStyles {
    /// No optional elements: digits only
    pub const NONE: Self = Self(0);

    /// Whitespace before the number
    pub const ALLOW_LEADING_WHITE: Self = Self(0x0001);

    /// Whitespace after the number
    pub const ALLOW_TRAILING_WHITE: Self = Self(0x0002);

    /// Positive or negative sign before the digits
    pub const ALLOW_LEADING_SIGN: Self = Self(0x0004);

    /// Positive or negative sign after the digits
    pub const ALLOW_TRAILING_SIGN: Self = Self(0x0008);

    /// Parentheses around the number, meaning negative
    pub const ALLOW_PARENTHESES: Self = Self(0x0010);

    /// Decimal separator followed by zero-only fraction digits
    pub const ALLOW_DECIMAL_POINT: Self = Self(0x0020);

    /// Group separators between integer digits
    pub const ALLOW_THOUSANDS: Self = Self(0x0040);

    /// Locale currency symbol before or after the number
    pub const ALLOW_CURRENCY_SYMBOL: Self = Self(0x0100);

    /// Hexadecimal digits instead of decimal
    pub const ALLOW_HEX_SPECIFIER: Self = Self(0x0200);

    /// Leading/trailing whitespace and a leading sign
    pub const INTEGER: Self =
        Self(Self::ALLOW_LEADING_WHITE.0 | Self::ALLOW_TRAILING_WHITE.0 | Self::ALLOW_LEADING_SIGN.0);

    /// Leading/trailing whitespace and hex digits
    pub const HEX_NUMBER: Self =
        Self(Self::ALLOW_LEADING_WHITE.0 | Self::ALLOW_TRAILING_WHITE.0 | Self::ALLOW_HEX_SPECIFIER.0);

    /// `INTEGER` plus trailing sign, decimal point and group separators
    pub const NUMBER: Self = Self(
        Self::INTEGER.0
            | Self::ALLOW_TRAILING_SIGN.0
            | Self::ALLOW_DECIMAL_POINT.0
            | Self::ALLOW_THOUSANDS.0,
    );

    /// `NUMBER` plus parentheses and the currency symbol
    pub const CURRENCY: Self =
        Self(Self::NUMBER.0 | Self::ALLOW_PARENTHESES.0 | Self::ALLOW_CURRENCY_SYMBOL.0);

    /// Every decimal-mode element
    pub const ANY: Self = Self::CURRENCY;

    const WHITESPACE: u32 = Self::ALLOW_LEADING_WHITE.0 | Self::ALLOW_TRAILING_WHITE.0;

    const KNOWN_BITS: u32 = Self::CURRENCY.0 | Self::ALLOW_HEX_SPECIFIER.0;

    /// Build a style from raw bits, rejecting bits that name no flag.
    ///
    /// # Errors
    /// Returns `Argument(UnknownStyleBits)` for unassigned bits.
    pub fn from_bits(bits: u32) -> CodecResult<Self> {
        let unknown = bits & !Self::KNOWN_BITS;
        if unknown != 0 {
            return Err(ArgumentError::UnknownStyleBits(unknown).into());
        }
        Ok(Self(bits))
    }

    /// Raw bit representation.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if every flag in `other` is also set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if the hex specifier is set.
    #[inline]
    pub const fn is_hex(self) -> bool {
        self.contains(Self::ALLOW_HEX_SPECIFIER)
    }

    /// Check that the flags form a legal combination.
    ///
    /// # Errors
    /// - `Argument(UnknownStyleBits)` for unassigned bits
    /// - `Argument(HexStyleConflict)` if hex mode is mixed with anything
    ///   other than the whitespace flags
    pub fn validate(self) -> CodecResult<()> {
        Self::from_bits(self.0)?;

        if self.is_hex() && self.0 & !(Self::ALLOW_HEX_SPECIFIER.0 | Self::WHITESPACE) != 0 {
            return Err(ArgumentError::HexStyleConflict.into());
        }

        Ok(())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl BitOr for NumberStyles {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for NumberStyles {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl TryFrom<u32> for NumberStyles {
    type Error = crate::codec::CodecError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<NumberStyles> for u32 {
    #[inline]
    fn from(style: NumberStyles) -> Self {
        style.0
    }
}

impl fmt::Debug for NumberStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(NumberStyles, &str); 9] = [
            (NumberStyles::ALLOW_LEADING_WHITE, "AllowLeadingWhite"),
            (NumberStyles::ALLOW_TRAILING_WHITE, "AllowTrailingWhite"),
            (NumberStyles::ALLOW_LEADING_SIGN, "AllowLeadingSign"),
            (NumberStyles::ALLOW_TRAILING_SIGN, "AllowTrailingSign"),
            (NumberStyles::ALLOW_PARENTHESES, "AllowParentheses"),
            (NumberStyles::ALLOW_DECIMAL_POINT, "AllowDecimalPoint"),
            (NumberStyles::ALLOW_THOUSANDS, "AllowThousands"),
            (NumberStyles::ALLOW_CURRENCY_SYMBOL, "AllowCurrencySymbol"),
            (NumberStyles::ALLOW_HEX_SPECIFIER, "AllowHexSpecifier"),
        ];

        if self.0 == 0 {
            return write!(f, "NumberStyles(None)");
        }

        write!(f, "NumberStyles(")?;
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        let unknown = self.0 & !Self::KNOWN_BITS;
        if unknown != 0 {
            if !first {
                write!(f, " | ")?;
            }
            write!(f, "{:#x}", unknown)?;
        }
        write!(f, ")")
    }
}
