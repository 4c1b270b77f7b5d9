// ============================================================================
// Parser
// Text -> u64 under a number style and a set of locale symbols
// ============================================================================

use super::digits::{group_size_at, is_white};
use super::errors::{CodecError, CodecResult};
use crate::domain::{LocaleSymbols, NumberStyles};
use crate::interfaces::NumberFormatProvider;

/// Parse `text` as a `u64`, signalling every failure.
///
/// # Errors
/// - `Argument` if `style` is not a legal combination (checked before the
///   text is inspected)
/// - `Format` if the text does not match the grammar `style` permits
/// - `Overflow` if the value is outside the `u64` range, including any
///   non-zero negative value
///
/// # Example
/// ```
/// use uint_text_codec::codec::parse;
/// use uint_text_codec::domain::{LocaleSymbols, NumberStyles};
///
/// let symbols = LocaleSymbols::de_de();
/// assert_eq!(parse(" 1.234.567 ", NumberStyles::NUMBER, &symbols), Ok(1_234_567));
/// ```
pub fn parse<P>(text: &str, style: NumberStyles, provider: &P) -> CodecResult<u64>
where
    P: NumberFormatProvider + ?Sized,
{
    parse_core(text, style, provider).inspect_err(|error| match error {
        CodecError::Argument(reason) => {
            tracing::debug!(?style, %reason, "rejected number style");
        },
        _ => {
            tracing::trace!(%error, len = text.len(), "parse failed");
        },
    })
}

/// Parse `text` as a `u64`, folding data errors into `None`.
///
/// `Format` and `Overflow` become `Ok(None)`; callers that need the zero
/// result of a failed parse use `unwrap_or_default()`. An illegal `style` is
/// still reported as `Err(Argument)`.
pub fn try_parse<P>(text: &str, style: NumberStyles, provider: &P) -> CodecResult<Option<u64>>
where
    P: NumberFormatProvider + ?Sized,
{
    match parse(text, style, provider) {
        Ok(value) => Ok(Some(value)),
        Err(error) if error.is_data_error() => Ok(None),
        Err(error) => Err(error),
    }
}

/// Parse with `NumberStyles::INTEGER` and invariant symbols.
pub fn parse_invariant(text: &str) -> CodecResult<u64> {
    parse(text, NumberStyles::INTEGER, &LocaleSymbols::invariant())
}

// ============================================================================
// Scanning
// ============================================================================

/// Widening accumulator that saturates instead of wrapping.
struct Accumulator {
    radix: u128,
    value: u128,
    overflow: bool,
}

impl Accumulator {
    fn new(radix: u32) -> Self {
        Self {
            radix: u128::from(radix),
            value: 0,
            overflow: false,
        }
    }

    #[inline]
    fn push(&mut self, digit: u8) {
        if self.overflow {
            return;
        }
        self.value = self.value * self.radix + u128::from(digit);
        if self.value > u128::from(u64::MAX) {
            self.overflow = true;
        }
    }

    fn finish(self, negative: bool) -> CodecResult<u64> {
        if self.overflow || (negative && self.value != 0) {
            return Err(CodecError::Overflow);
        }
        // Bounded by u64::MAX above
        Ok(self.value as u64)
    }
}

/// Strip a non-empty symbol from the front of `s`.
#[inline]
fn strip_symbol<'a>(s: &'a str, symbol: &str) -> Option<&'a str> {
    if symbol.is_empty() {
        None
    } else {
        s.strip_prefix(symbol)
    }
}

/// Match a sign at the front of `s`, returning `(negative, rest)`.
///
/// Longer symbols are tried first so that a sign that is a prefix of the
/// other does not shadow it. An ASCII hyphen is accepted as negative for
/// cultures whose negative sign is something else.
fn strip_sign<'a, P>(s: &'a str, provider: &P) -> Option<(bool, &'a str)>
where
    P: NumberFormatProvider + ?Sized,
{
    let negative = provider.negative_sign();
    let positive = provider.positive_sign();

    let mut candidates = [(true, negative), (false, positive)];
    if positive.len() > negative.len() {
        candidates.swap(0, 1);
    }

    for (is_negative, symbol) in candidates {
        if let Some(rest) = strip_symbol(s, symbol) {
            return Some((is_negative, rest));
        }
    }

    if negative != "-" && positive != "-" {
        if let Some(rest) = s.strip_prefix('-') {
            return Some((true, rest));
        }
    }

    None
}

/// Value of the digit at the front of `s`, if any.
#[inline]
fn leading_digit<P>(s: &str, provider: &P) -> Option<(u8, usize)>
where
    P: NumberFormatProvider + ?Sized,
{
    let c = s.chars().next()?;
    provider.digit_value(c).map(|d| (d, c.len_utf8()))
}

#[inline]
fn skip_white(s: &str) -> &str {
    s.trim_start_matches(is_white)
}

/// One parse shared by every public entry point.
fn parse_core<P>(text: &str, style: NumberStyles, provider: &P) -> CodecResult<u64>
where
    P: NumberFormatProvider + ?Sized,
{
    style.validate()?;

    if style.is_hex() {
        return parse_hex(text, style);
    }

    let mut rest = text;

    // Leading tokens
    let mut negative = false;
    let mut seen_sign = false;
    let mut seen_paren = false;
    let mut seen_currency = false;

    loop {
        if style.contains(NumberStyles::ALLOW_LEADING_WHITE) && (!seen_sign || seen_currency) {
            rest = skip_white(rest);
        }

        if style.contains(NumberStyles::ALLOW_PARENTHESES) && !seen_paren && !seen_sign {
            if let Some(r) = rest.strip_prefix('(') {
                rest = r;
                seen_paren = true;
                negative = true;
                continue;
            }
        }

        if style.contains(NumberStyles::ALLOW_LEADING_SIGN) && !seen_sign && !seen_paren {
            if let Some((is_negative, r)) = strip_sign(rest, provider) {
                rest = r;
                seen_sign = true;
                negative = is_negative;
                continue;
            }
        }

        if style.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL) && !seen_currency {
            if let Some(r) = strip_symbol(rest, provider.currency_symbol()) {
                rest = r;
                seen_currency = true;
                continue;
            }
        }

        break;
    }

    // Integer digits with optional group separators
    let allow_thousands = style.contains(NumberStyles::ALLOW_THOUSANDS);
    let allow_decimal = style.contains(NumberStyles::ALLOW_DECIMAL_POINT);
    let group_separator = provider.group_separator();
    let decimal_separator = provider.decimal_separator();

    let mut acc = Accumulator::new(10);
    let mut digit_count = 0usize;
    let mut grouped = false;
    let run_start = rest;

    loop {
        if let Some((digit, len)) = leading_digit(rest, provider) {
            acc.push(digit);
            digit_count += 1;
            rest = &rest[len..];
            continue;
        }

        if allow_thousands && !(allow_decimal && strip_symbol(rest, decimal_separator).is_some()) {
            if let Some(r) = strip_symbol(rest, group_separator) {
                // Only a separator followed by a digit belongs to the number
                if leading_digit(r, provider).is_some() {
                    rest = r;
                    grouped = true;
                    continue;
                }
            }
        }

        break;
    }

    if grouped {
        let run = &run_start[..run_start.len() - rest.len()];
        check_grouping(run, group_separator, provider)?;
    }

    // Zero-only fraction
    if allow_decimal {
        if let Some(r) = strip_symbol(rest, decimal_separator) {
            rest = r;
            while let Some((digit, len)) = leading_digit(rest, provider) {
                if digit != 0 {
                    return Err(CodecError::Format);
                }
                digit_count += 1;
                rest = &rest[len..];
            }
        }
    }

    if digit_count == 0 {
        return Err(CodecError::Format);
    }

    // Trailing tokens
    let mut closed_paren = false;

    loop {
        if style.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
            rest = skip_white(rest);
        }

        if style.contains(NumberStyles::ALLOW_TRAILING_SIGN) && !seen_sign && !seen_paren {
            if let Some((is_negative, r)) = strip_sign(rest, provider) {
                rest = r;
                seen_sign = true;
                negative = is_negative;
                continue;
            }
        }

        if style.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL) && !seen_currency {
            if let Some(r) = strip_symbol(rest, provider.currency_symbol()) {
                rest = r;
                seen_currency = true;
                continue;
            }
        }

        if seen_paren && !closed_paren {
            if let Some(r) = rest.strip_prefix(')') {
                rest = r;
                closed_paren = true;
                continue;
            }
        }

        break;
    }

    if seen_paren && !closed_paren {
        return Err(CodecError::Format);
    }

    if !rest.trim_start_matches('\0').is_empty() {
        return Err(CodecError::Format);
    }

    acc.finish(negative)
}

/// Verify separator placement against the locale group sizes.
///
/// `run` holds digits and separators only, and every separator is followed
/// by a digit. Groups are checked from the right: each complete group must
/// have the configured size and the leftmost group may be shorter but never
/// longer.
fn check_grouping<P>(run: &str, separator: &str, provider: &P) -> CodecResult<()>
where
    P: NumberFormatProvider + ?Sized,
{
    let sizes = provider.group_sizes();
    let mut rest = run;
    let mut group = 0usize;
    let mut count = 0usize;

    while !rest.is_empty() {
        if let Some(r) = rest.strip_suffix(separator) {
            match group_size_at(sizes, group) {
                Some(size) if size == count => {},
                _ => return Err(CodecError::Format),
            }
            group += 1;
            count = 0;
            rest = r;
        } else if let Some(c) = rest.chars().next_back() {
            count += 1;
            rest = &rest[..rest.len() - c.len_utf8()];
        }
    }

    match group_size_at(sizes, group) {
        Some(size) if count == 0 || count > size => Err(CodecError::Format),
        _ if count == 0 => Err(CodecError::Format),
        _ => Ok(()),
    }
}

fn parse_hex(text: &str, style: NumberStyles) -> CodecResult<u64> {
    let mut rest = text;
    if style.contains(NumberStyles::ALLOW_LEADING_WHITE) {
        rest = skip_white(rest);
    }

    let mut acc = Accumulator::new(16);
    let mut digit_count = 0usize;
    while let Some(digit) = rest.chars().next().and_then(|c| c.to_digit(16)) {
        acc.push(digit as u8);
        digit_count += 1;
        rest = &rest[1..];
    }

    if digit_count == 0 {
        return Err(CodecError::Format);
    }

    if style.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
        rest = skip_white(rest);
    }

    if !rest.trim_start_matches('\0').is_empty() {
        return Err(CodecError::Format);
    }

    acc.finish(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ArgumentError;
    use proptest::prelude::*;

    fn invariant() -> LocaleSymbols {
        LocaleSymbols::invariant()
    }

    #[test]
    fn test_parse_plain() {
        let s = invariant();
        assert_eq!(parse("0", NumberStyles::NONE, &s), Ok(0));
        assert_eq!(parse("123", NumberStyles::NONE, &s), Ok(123));
        assert_eq!(parse("0000000000000000000000000042", NumberStyles::NONE, &s), Ok(42));
        assert_eq!(parse_invariant("  42\t"), Ok(42));
        assert_eq!(parse_invariant("+42"), Ok(42));
    }

    #[test]
    fn test_parse_boundaries() {
        let s = invariant();
        assert_eq!(
            parse("18446744073709551615", NumberStyles::INTEGER, &s),
            Ok(u64::MAX)
        );
        assert_eq!(
            parse("184467440737095516150", NumberStyles::INTEGER, &s),
            Err(CodecError::Overflow)
        );
        assert_eq!(
            parse("18446744073709551616", NumberStyles::INTEGER, &s),
            Err(CodecError::Overflow)
        );
    }

    #[test]
    fn test_grammar_errors_win_over_overflow() {
        let s = invariant();
        assert_eq!(
            parse("99999999999999999999x", NumberStyles::INTEGER, &s),
            Err(CodecError::Format)
        );
    }

    #[test]
    fn test_parse_empty_and_whitespace() {
        let s = invariant();
        assert_eq!(parse("", NumberStyles::INTEGER, &s), Err(CodecError::Format));
        assert_eq!(parse("   ", NumberStyles::INTEGER, &s), Err(CodecError::Format));
        assert_eq!(parse("   ", NumberStyles::NONE, &s), Err(CodecError::Format));
        assert_eq!(parse(" 1", NumberStyles::NONE, &s), Err(CodecError::Format));
        assert_eq!(
            parse(" 1", NumberStyles::ALLOW_TRAILING_WHITE, &s),
            Err(CodecError::Format)
        );
        assert_eq!(
            parse("1 ", NumberStyles::ALLOW_TRAILING_WHITE, &s),
            Ok(1)
        );
    }

    #[test]
    fn test_parse_signs() {
        let s = invariant();
        assert_eq!(parse("-0", NumberStyles::INTEGER, &s), Ok(0));
        assert_eq!(parse("-1", NumberStyles::INTEGER, &s), Err(CodecError::Overflow));
        assert_eq!(parse("+1", NumberStyles::NONE, &s), Err(CodecError::Format));
        assert_eq!(parse("1-", NumberStyles::INTEGER, &s), Err(CodecError::Format));
        assert_eq!(parse("0-", NumberStyles::NUMBER, &s), Ok(0));
        assert_eq!(parse("5+", NumberStyles::NUMBER, &s), Ok(5));
        assert_eq!(parse("+5+", NumberStyles::NUMBER, &s), Err(CodecError::Format));
        assert_eq!(parse("--5", NumberStyles::INTEGER, &s), Err(CodecError::Format));
        assert_eq!(parse("- 5", NumberStyles::INTEGER, &s), Err(CodecError::Format));
    }

    #[test]
    fn test_parse_custom_signs() {
        let s = invariant()
            .with_positive_sign("pos")
            .with_negative_sign("neg");
        assert_eq!(parse("pos7", NumberStyles::INTEGER, &s), Ok(7));
        assert_eq!(parse("neg0", NumberStyles::INTEGER, &s), Ok(0));
        assert_eq!(parse("neg7", NumberStyles::INTEGER, &s), Err(CodecError::Overflow));
        assert_eq!(parse("-7", NumberStyles::INTEGER, &s), Err(CodecError::Overflow));
        assert_eq!(parse("+7", NumberStyles::INTEGER, &s), Err(CodecError::Format));
    }

    #[test]
    fn test_parse_parentheses() {
        let s = invariant();
        assert_eq!(parse("(0)", NumberStyles::ALLOW_PARENTHESES, &s), Ok(0));
        assert_eq!(
            parse("(1)", NumberStyles::ALLOW_PARENTHESES, &s),
            Err(CodecError::Overflow)
        );
        assert_eq!(
            parse("(0", NumberStyles::ALLOW_PARENTHESES, &s),
            Err(CodecError::Format)
        );
        assert_eq!(parse("(0)", NumberStyles::INTEGER, &s), Err(CodecError::Format));
        assert_eq!(parse("(-0)", NumberStyles::CURRENCY, &s), Err(CodecError::Format));
    }

    #[test]
    fn test_parse_currency() {
        let s = LocaleSymbols::en_us();
        assert_eq!(parse("$100", NumberStyles::CURRENCY, &s), Ok(100));
        assert_eq!(parse("100$", NumberStyles::CURRENCY, &s), Ok(100));
        assert_eq!(parse("$ 100", NumberStyles::CURRENCY, &s), Ok(100));
        assert_eq!(parse("($1,000.00)", NumberStyles::CURRENCY, &s), Err(CodecError::Overflow));
        assert_eq!(parse("$100", NumberStyles::NUMBER, &s), Err(CodecError::Format));
        assert_eq!(parse("$$100", NumberStyles::CURRENCY, &s), Err(CodecError::Format));
    }

    #[test]
    fn test_parse_decimal_point() {
        let s = invariant();
        let style = NumberStyles::ALLOW_DECIMAL_POINT;
        assert_eq!(parse("1.000", style, &s), Ok(1));
        assert_eq!(parse("1.", style, &s), Ok(1));
        assert_eq!(parse(".0", style, &s), Ok(0));
        assert_eq!(parse("1.5", style, &s), Err(CodecError::Format));
        assert_eq!(parse("1.0001", style, &s), Err(CodecError::Format));
        assert_eq!(parse(".", style, &s), Err(CodecError::Format));
        assert_eq!(parse("1.0", NumberStyles::INTEGER, &s), Err(CodecError::Format));
        assert_eq!(parse("1,5", style, &LocaleSymbols::de_de()), Err(CodecError::Format));
        assert_eq!(parse("1,00", style, &LocaleSymbols::de_de()), Ok(1));
    }

    #[test]
    fn test_parse_grouping() {
        let s = invariant();
        assert_eq!(parse("1,234,567", NumberStyles::NUMBER, &s), Ok(1_234_567));
        assert_eq!(parse("123,456", NumberStyles::NUMBER, &s), Ok(123_456));
        assert_eq!(
            parse("1,234,567", NumberStyles::INTEGER, &s),
            Err(CodecError::Format)
        );
        assert_eq!(parse("12,34", NumberStyles::NUMBER, &s), Err(CodecError::Format));
        assert_eq!(parse("1234,567", NumberStyles::NUMBER, &s), Err(CodecError::Format));
        assert_eq!(parse("1,,234", NumberStyles::NUMBER, &s), Err(CodecError::Format));
        assert_eq!(parse("1,234,", NumberStyles::NUMBER, &s), Err(CodecError::Format));
        assert_eq!(parse(",123", NumberStyles::NUMBER, &s), Err(CodecError::Format));
        assert_eq!(parse("1,234.00", NumberStyles::NUMBER, &s), Ok(1234));
    }

    #[test]
    fn test_parse_grouping_locales() {
        assert_eq!(
            parse("12,34,567", NumberStyles::NUMBER, &LocaleSymbols::en_in()),
            Ok(1_234_567)
        );
        assert_eq!(
            parse("1,234,567", NumberStyles::NUMBER, &LocaleSymbols::en_in()),
            Err(CodecError::Format)
        );
        assert_eq!(
            parse("1\u{202f}234,00", NumberStyles::NUMBER, &LocaleSymbols::fr_fr()),
            Ok(1234)
        );

        let stop = invariant().with_group_sizes(&[3, 0]);
        assert_eq!(parse("1234,567", NumberStyles::NUMBER, &stop), Ok(1_234_567));
        assert_eq!(parse("1,234,567", NumberStyles::NUMBER, &stop), Err(CodecError::Format));
    }

    #[test]
    fn test_parse_native_digits() {
        let s = LocaleSymbols::ar_eg();
        assert_eq!(
            parse("\u{0661}\u{0662}\u{0663}", NumberStyles::INTEGER, &s),
            Ok(123)
        );
        assert_eq!(
            parse("\u{0661}\u{066c}\u{0662}\u{0663}\u{0664}", NumberStyles::NUMBER, &s),
            Ok(1234)
        );
        assert_eq!(parse("\u{61c}-\u{0660}", NumberStyles::INTEGER, &s), Ok(0));
        assert_eq!(
            parse("\u{0661}", NumberStyles::INTEGER, &invariant()),
            Err(CodecError::Format)
        );
    }

    #[test]
    fn test_parse_trailing_nulls() {
        let s = invariant();
        assert_eq!(parse("42\0\0", NumberStyles::NONE, &s), Ok(42));
        assert_eq!(parse("42 \0", NumberStyles::INTEGER, &s), Ok(42));
        assert_eq!(parse("42\0x", NumberStyles::NONE, &s), Err(CodecError::Format));
        assert_eq!(parse("\0", NumberStyles::NONE, &s), Err(CodecError::Format));
    }

    #[test]
    fn test_parse_hex() {
        let s = invariant();
        assert_eq!(parse("FF", NumberStyles::HEX_NUMBER, &s), Ok(255));
        assert_eq!(parse(" ff ", NumberStyles::HEX_NUMBER, &s), Ok(255));
        assert_eq!(parse("aBc", NumberStyles::ALLOW_HEX_SPECIFIER, &s), Ok(0xabc));
        assert_eq!(
            parse("FFFFFFFFFFFFFFFF", NumberStyles::HEX_NUMBER, &s),
            Ok(u64::MAX)
        );
        assert_eq!(
            parse("0000000000000000FFFFFFFFFFFFFFFF", NumberStyles::HEX_NUMBER, &s),
            Ok(u64::MAX)
        );
        assert_eq!(
            parse("10000000000000000", NumberStyles::HEX_NUMBER, &s),
            Err(CodecError::Overflow)
        );
        assert_eq!(parse("0xFF", NumberStyles::HEX_NUMBER, &s), Err(CodecError::Format));
        assert_eq!(parse("G", NumberStyles::HEX_NUMBER, &s), Err(CodecError::Format));
        assert_eq!(parse("", NumberStyles::HEX_NUMBER, &s), Err(CodecError::Format));
        assert_eq!(parse("-1", NumberStyles::HEX_NUMBER, &s), Err(CodecError::Format));
    }

    #[test]
    fn test_parse_invalid_style() {
        let s = invariant();
        let bad = NumberStyles::HEX_NUMBER | NumberStyles::ALLOW_LEADING_SIGN;
        let expected = Err(CodecError::Argument(ArgumentError::HexStyleConflict));

        assert_eq!(parse("1", bad, &s), expected);
        assert_eq!(try_parse("1", bad, &s), expected.map(Some));
        // Argument wins even when the text is itself malformed
        assert_eq!(try_parse("", bad, &s), Err(CodecError::Argument(ArgumentError::HexStyleConflict)));
    }

    #[test]
    fn test_try_parse() {
        let s = invariant();
        assert_eq!(try_parse("42", NumberStyles::INTEGER, &s), Ok(Some(42)));
        assert_eq!(try_parse("abc", NumberStyles::INTEGER, &s), Ok(None));
        assert_eq!(
            try_parse("99999999999999999999", NumberStyles::INTEGER, &s),
            Ok(None)
        );
        assert_eq!(
            try_parse("-5", NumberStyles::INTEGER, &s)
                .unwrap()
                .unwrap_or_default(),
            0
        );
    }

    #[test]
    fn test_dyn_provider() {
        let provider: &dyn NumberFormatProvider = &LocaleSymbols::de_de();
        assert_eq!(parse("1.000", NumberStyles::NUMBER, provider), Ok(1000));
    }

    proptest! {
        #[test]
        fn parse_decimal_matches_std(value in any::<u64>()) {
            prop_assert_eq!(parse_invariant(&value.to_string()), Ok(value));
        }

        #[test]
        fn parse_hex_matches_std(value in any::<u64>()) {
            let text = format!("{:x}", value);
            prop_assert_eq!(parse(&text, NumberStyles::HEX_NUMBER, &invariant()), Ok(value));
        }

        #[test]
        fn parse_never_panics(text in "\\PC{0,24}") {
            let _ = parse(&text, NumberStyles::ANY, &invariant());
            let _ = parse(&text, NumberStyles::HEX_NUMBER, &invariant());
        }
    }
}
