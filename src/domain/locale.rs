// ============================================================================
// Locale Symbols
// Culture-specific separators, signs and digit grouping
// ============================================================================

use crate::codec::{ArgumentError, CodecResult};
use crate::interfaces::{NumberFormatProvider, ASCII_DIGITS};
use smallvec::{smallvec, SmallVec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Group sizes, least significant group first.
pub type GroupSizes = SmallVec<[u8; 4]>;

/// Explicit set of culture symbols used by parse and format.
///
/// Construct one of the presets and adjust it with the `with_*` builder
/// methods, or (with the `serde` feature) load it from JSON.
///
/// # Example
/// ```
/// use uint_text_codec::domain::LocaleSymbols;
///
/// let swiss = LocaleSymbols::invariant()
///     .with_name("de-CH")
///     .with_group_separator("'");
/// assert!(swiss.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocaleSymbols {
    /// Culture tag, informational only (e.g. "en-US")
    pub name: String,

    /// Separator between integer and fraction digits
    pub decimal_separator: String,

    /// Separator between digit groups
    pub group_separator: String,

    /// Group sizes from the right; the last one repeats, a final 0 stops grouping
    pub group_sizes: GroupSizes,

    /// Positive sign string
    pub positive_sign: String,

    /// Negative sign string
    pub negative_sign: String,

    /// Currency symbol
    pub currency_symbol: String,

    /// Default fraction digits for `N` and `F`
    pub number_decimal_digits: u32,

    /// Digits 0 through 9 of the native numbering system
    pub native_digits: [char; 10],
}

impl LocaleSymbols {
    /// Culture-independent symbols: `.` decimal, `,` groups of three.
    pub fn invariant() -> Self {
        Self {
            name: String::new(),
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            group_sizes: smallvec![3],
            positive_sign: "+".to_string(),
            negative_sign: "-".to_string(),
            currency_symbol: "\u{a4}".to_string(),
            number_decimal_digits: 2,
            native_digits: ASCII_DIGITS,
        }
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// English (United States)
    pub fn en_us() -> Self {
        Self::invariant().with_name("en-US").with_currency_symbol("$")
    }

    /// German (Germany): `.` groups, `,` decimal
    pub fn de_de() -> Self {
        Self::invariant()
            .with_name("de-DE")
            .with_decimal_separator(",")
            .with_group_separator(".")
            .with_currency_symbol("\u{20ac}")
    }

    /// French (France): narrow no-break space groups, `,` decimal
    pub fn fr_fr() -> Self {
        Self::invariant()
            .with_name("fr-FR")
            .with_decimal_separator(",")
            .with_group_separator("\u{202f}")
            .with_currency_symbol("\u{20ac}")
    }

    /// English (India): lakh/crore grouping `3, 2`
    pub fn en_in() -> Self {
        Self::invariant()
            .with_name("en-IN")
            .with_group_sizes(&[3, 2])
            .with_currency_symbol("\u{20b9}")
    }

    /// Arabic (Egypt): Arabic-Indic native digits and separators
    pub fn ar_eg() -> Self {
        let mut symbols = Self::invariant()
            .with_name("ar-EG")
            .with_decimal_separator("\u{066b}")
            .with_group_separator("\u{066c}")
            .with_currency_symbol("\u{62c}.\u{645}.\u{200f}")
            .with_negative_sign("\u{61c}-");
        symbols.native_digits = [
            '\u{0660}', '\u{0661}', '\u{0662}', '\u{0663}', '\u{0664}', '\u{0665}', '\u{0666}',
            '\u{0667}', '\u{0668}', '\u{0669}',
        ];
        symbols
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Builder method: set the culture tag
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method: set the decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Builder method: set the group separator
    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Builder method: set the group sizes
    pub fn with_group_sizes(mut self, sizes: &[u8]) -> Self {
        self.group_sizes = SmallVec::from_slice(sizes);
        self
    }

    /// Builder method: set the positive sign
    pub fn with_positive_sign(mut self, sign: impl Into<String>) -> Self {
        self.positive_sign = sign.into();
        self
    }

    /// Builder method: set the negative sign
    pub fn with_negative_sign(mut self, sign: impl Into<String>) -> Self {
        self.negative_sign = sign.into();
        self
    }

    /// Builder method: set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Builder method: set the default `N`/`F` fraction digits
    pub fn with_number_decimal_digits(mut self, digits: u32) -> Self {
        self.number_decimal_digits = digits;
        self
    }

    /// Validate the symbols.
    ///
    /// # Errors
    /// Returns `Argument(InvalidSymbols)` when a required symbol is empty,
    /// a group size is zero anywhere but last, or a group size exceeds 9.
    pub fn validate(&self) -> CodecResult<()> {
        if self.decimal_separator.is_empty() {
            return Err(ArgumentError::InvalidSymbols("decimal separator cannot be empty").into());
        }

        if self.negative_sign.is_empty() {
            return Err(ArgumentError::InvalidSymbols("negative sign cannot be empty").into());
        }

        if let Some((_, init)) = self.group_sizes.split_last() {
            if init.contains(&0) {
                return Err(ArgumentError::InvalidSymbols(
                    "only the last group size may be zero",
                )
                .into());
            }
        }

        if self.group_sizes.iter().any(|&size| size > 9) {
            return Err(ArgumentError::InvalidSymbols("group sizes cannot exceed 9").into());
        }

        if !self.group_sizes.is_empty() && self.group_separator.is_empty() {
            return Err(ArgumentError::InvalidSymbols(
                "group separator cannot be empty when grouping",
            )
            .into());
        }

        Ok(())
    }
}

// ============================================================================
// Configuration Loading
// ============================================================================

#[cfg(feature = "serde")]
impl LocaleSymbols {
    /// Load symbols from a JSON object; missing fields fall back to the
    /// invariant culture.
    ///
    /// # Errors
    /// Returns `Argument(InvalidSymbols)` for malformed JSON or symbols that
    /// fail [`LocaleSymbols::validate`].
    pub fn from_json(json: &str) -> CodecResult<Self> {
        let symbols: Self = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "failed to load locale symbols");
            ArgumentError::InvalidSymbols("malformed locale JSON")
        })?;
        symbols.validate()?;
        Ok(symbols)
    }
}

impl Default for LocaleSymbols {
    fn default() -> Self {
        Self::invariant()
    }
}

impl NumberFormatProvider for LocaleSymbols {
    #[inline]
    fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    #[inline]
    fn group_separator(&self) -> &str {
        &self.group_separator
    }

    #[inline]
    fn group_sizes(&self) -> &[u8] {
        &self.group_sizes
    }

    #[inline]
    fn positive_sign(&self) -> &str {
        &self.positive_sign
    }

    #[inline]
    fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    #[inline]
    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    #[inline]
    fn number_decimal_digits(&self) -> u32 {
        self.number_decimal_digits
    }

    #[inline]
    fn native_digits(&self) -> &[char; 10] {
        &self.native_digits
    }
}
