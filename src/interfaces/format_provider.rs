// ============================================================================
// Format Provider Interface
// Culture-specific symbols consumed by the parser and formatter
// ============================================================================

/// ASCII digits `'0'..='9'`, the digit set of the invariant culture.
pub const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Supplies the symbols needed to read and write numbers for one culture.
///
/// Symbols are passed explicitly on every call rather than read from ambient
/// state, so different cultures can be used side by side from any thread.
///
/// Implementations: [`LocaleSymbols`](crate::domain::LocaleSymbols).
pub trait NumberFormatProvider: Send + Sync {
    /// Separator between integer and fraction digits (e.g. `"."`)
    fn decimal_separator(&self) -> &str;

    /// Separator between digit groups (e.g. `","`)
    fn group_separator(&self) -> &str;

    /// Group sizes counted from the least significant digit.
    ///
    /// The last size repeats; a final `0` means no further grouping.
    fn group_sizes(&self) -> &[u8];

    /// Positive sign string (e.g. `"+"`)
    fn positive_sign(&self) -> &str;

    /// Negative sign string (e.g. `"-"`)
    fn negative_sign(&self) -> &str;

    /// Currency symbol accepted by `ALLOW_CURRENCY_SYMBOL`
    fn currency_symbol(&self) -> &str;

    /// Fraction digits rendered by `N` and `F` when no precision is given.
    fn number_decimal_digits(&self) -> u32 {
        2
    }

    /// Native digit characters for 0 through 9.
    fn native_digits(&self) -> &[char; 10] {
        &ASCII_DIGITS
    }

    /// Decimal value of `c`, accepting ASCII digits and the native digit set.
    fn digit_value(&self, c: char) -> Option<u8> {
        if c.is_ascii_digit() {
            return Some(c as u8 - b'0');
        }
        self.native_digits()
            .iter()
            .position(|&d| d == c)
            .map(|i| i as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal provider relying on every default
    struct Invariant;

    impl NumberFormatProvider for Invariant {
        fn decimal_separator(&self) -> &str {
            "."
        }
        fn group_separator(&self) -> &str {
            ","
        }
        fn group_sizes(&self) -> &[u8] {
            &[3]
        }
        fn positive_sign(&self) -> &str {
            "+"
        }
        fn negative_sign(&self) -> &str {
            "-"
        }
        fn currency_symbol(&self) -> &str {
            "\u{a4}"
        }
    }

    #[test]
    fn test_default_digit_value() {
        let provider = Invariant;
        assert_eq!(provider.digit_value('0'), Some(0));
        assert_eq!(provider.digit_value('7'), Some(7));
        assert_eq!(provider.digit_value('a'), None);
        assert_eq!(provider.digit_value('\u{0663}'), None);
        assert_eq!(provider.number_decimal_digits(), 2);
    }

    #[test]
    fn test_trait_object() {
        let provider: &dyn NumberFormatProvider = &Invariant;
        assert_eq!(provider.group_sizes(), &[3]);
    }
}
