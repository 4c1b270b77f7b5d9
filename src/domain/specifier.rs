// ============================================================================
// Format Specifier
// Requested output rendering: kind letter plus optional precision
// ============================================================================

use crate::codec::{ArgumentError, CodecResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest precision a specifier may carry.
pub const MAX_PRECISION: u32 = 999_999_999;

/// Rendering selected by the specifier letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatKind {
    /// `G`: shortest decimal, scientific when precision is below the digit count
    General,
    /// `D`: decimal digits, zero-padded to precision
    Decimal,
    /// `X`: hexadecimal digits, zero-padded to precision
    Hex,
    /// `N`: grouped decimal with a zero fraction
    Number,
    /// `F`: ungrouped decimal with a zero fraction
    FixedPoint,
    /// `E`: scientific notation with a fixed number of fraction digits
    Exponential,
}

impl FormatKind {
    fn from_letter(letter: char) -> Option<(Self, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            'G' => FormatKind::General,
            'D' => FormatKind::Decimal,
            'X' => FormatKind::Hex,
            'N' => FormatKind::Number,
            'F' => FormatKind::FixedPoint,
            'E' => FormatKind::Exponential,
            _ => return None,
        };
        Some((kind, letter.is_ascii_uppercase()))
    }

    /// Canonical uppercase letter for this kind.
    pub const fn letter(self) -> char {
        match self {
            FormatKind::General => 'G',
            FormatKind::Decimal => 'D',
            FormatKind::Hex => 'X',
            FormatKind::Number => 'N',
            FormatKind::FixedPoint => 'F',
            FormatKind::Exponential => 'E',
        }
    }
}

/// A validated output rendering request.
///
/// The letter's case is kept because it selects the case of hex digits and
/// of the exponent character; for the purely numeric kinds it has no effect.
///
/// # Example
/// ```
/// use uint_text_codec::domain::{FormatKind, FormatSpecifier};
///
/// let spec: FormatSpecifier = "x8".parse().unwrap();
/// assert_eq!(spec.kind(), FormatKind::Hex);
/// assert!(!spec.is_uppercase());
/// assert_eq!(spec.precision(), Some(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatSpecifier {
    kind: FormatKind,
    uppercase: bool,
    precision: Option<u32>,
}

impl FormatSpecifier {
    /// Default rendering: `G` with no precision.
    pub const GENERAL: Self = Self {
        kind: FormatKind::General,
        uppercase: true,
        precision: None,
    };

    /// Create a specifier without precision.
    #[inline]
    pub const fn new(kind: FormatKind, uppercase: bool) -> Self {
        Self {
            kind,
            uppercase,
            precision: None,
        }
    }

    /// Uppercase decimal (`D`).
    #[inline]
    pub const fn decimal() -> Self {
        Self::new(FormatKind::Decimal, true)
    }

    /// Hexadecimal in the requested case (`X` or `x`).
    #[inline]
    pub const fn hex(uppercase: bool) -> Self {
        Self::new(FormatKind::Hex, uppercase)
    }

    /// Grouped number (`N`).
    #[inline]
    pub const fn number() -> Self {
        Self::new(FormatKind::Number, true)
    }

    /// Builder method: set the precision.
    ///
    /// # Errors
    /// Returns `Argument(InvalidPrecision)` above [`MAX_PRECISION`].
    pub fn with_precision(mut self, precision: u32) -> CodecResult<Self> {
        if precision > MAX_PRECISION {
            return Err(ArgumentError::InvalidPrecision.into());
        }
        self.precision = Some(precision);
        Ok(self)
    }

    /// Parse a standard specifier such as `"D"`, `"x4"` or `"N0"`.
    ///
    /// An empty string yields [`FormatSpecifier::GENERAL`].
    ///
    /// # Errors
    /// - `Argument(UnknownFormatKind)` for an unsupported letter
    /// - `Argument(InvalidPrecision)` for non-digit or out-of-range precision
    pub fn parse(text: &str) -> CodecResult<Self> {
        let mut chars = text.chars();
        let Some(letter) = chars.next() else {
            return Ok(Self::GENERAL);
        };

        let (kind, uppercase) = FormatKind::from_letter(letter).ok_or_else(|| {
            tracing::debug!(specifier = text, "rejected format specifier");
            ArgumentError::UnknownFormatKind(letter)
        })?;

        let digits = chars.as_str();
        let spec = Self::new(kind, uppercase);
        if digits.is_empty() {
            return Ok(spec);
        }

        let mut precision: u64 = 0;
        for b in digits.bytes() {
            if !b.is_ascii_digit() {
                return Err(ArgumentError::InvalidPrecision.into());
            }
            precision = precision * 10 + u64::from(b - b'0');
            if precision > u64::from(MAX_PRECISION) {
                return Err(ArgumentError::InvalidPrecision.into());
            }
        }

        // Bounded by MAX_PRECISION above
        spec.with_precision(precision as u32)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn kind(self) -> FormatKind {
        self.kind
    }

    #[inline]
    pub const fn is_uppercase(self) -> bool {
        self.uppercase
    }

    #[inline]
    pub const fn precision(self) -> Option<u32> {
        self.precision
    }
}

impl Default for FormatSpecifier {
    #[inline]
    fn default() -> Self {
        Self::GENERAL
    }
}

impl FromStr for FormatSpecifier {
    type Err = crate::codec::CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = if self.uppercase {
            self.kind.letter()
        } else {
            self.kind.letter().to_ascii_lowercase()
        };
        write!(f, "{}", letter)?;
        if let Some(precision) = self.precision {
            write!(f, "{}", precision)?;
        }
        Ok(())
    }
}
