// ============================================================================
// Formatter
// u64 -> text into caller-owned buffers, sized exactly before writing
// ============================================================================

use super::digits::{
    decimal_digits, group_boundaries, hex_digits, round_significant, DecimalDigits,
};
use crate::domain::{FormatKind, FormatSpecifier};
use crate::interfaces::NumberFormatProvider;
use std::iter;

/// Default fraction digits of the `E` kind.
const DEFAULT_EXPONENTIAL_PRECISION: usize = 6;

/// Format `value` into `destination`.
///
/// Returns `Some(written)` when the rendering fits, with the text occupying
/// `destination[..written]`; bytes past `written` are left as they were.
/// Returns `None` when `destination` is shorter than the rendering, in which
/// case nothing is written.
///
/// Lengths are UTF-8 byte counts; digits are always ASCII but locale
/// separators may take several bytes.
///
/// # Example
/// ```
/// use uint_text_codec::codec::try_format;
/// use uint_text_codec::domain::{FormatSpecifier, LocaleSymbols};
///
/// let mut buf = [0u8; 2];
/// let spec = FormatSpecifier::decimal();
/// assert_eq!(try_format(42, &mut buf, spec, &LocaleSymbols::invariant()), Some(2));
/// assert_eq!(&buf, b"42");
/// assert_eq!(try_format(420, &mut buf, spec, &LocaleSymbols::invariant()), None);
/// ```
pub fn try_format<P>(
    value: u64,
    destination: &mut [u8],
    spec: FormatSpecifier,
    provider: &P,
) -> Option<usize>
where
    P: NumberFormatProvider + ?Sized,
{
    let required = required_len(value, spec, provider);
    if destination.len() < required {
        tracing::trace!(
            required,
            capacity = destination.len(),
            %spec,
            "destination buffer too small"
        );
        return None;
    }

    let mut sink = SliceSink {
        buf: &mut destination[..required],
        pos: 0,
    };
    render(value, spec, provider, &mut sink);
    debug_assert_eq!(sink.pos, required);
    Some(required)
}

/// Format `value` into a new `String`.
pub fn to_string<P>(value: u64, spec: FormatSpecifier, provider: &P) -> String
where
    P: NumberFormatProvider + ?Sized,
{
    let mut out = String::with_capacity(required_len(value, spec, provider));
    render(value, spec, provider, &mut out);
    out
}

/// Exact byte length of the rendering of `value`.
pub fn required_len<P>(value: u64, spec: FormatSpecifier, provider: &P) -> usize
where
    P: NumberFormatProvider + ?Sized,
{
    let mut counter = Counter(0);
    render(value, spec, provider, &mut counter);
    counter.0
}

// ============================================================================
// Sinks
// ============================================================================

/// Destination of rendered text.
///
/// Rendering runs once against [`Counter`] to size the output and once
/// against the real destination, so both always agree.
trait Sink {
    fn put_str(&mut self, s: &str);

    /// `bytes` must be ASCII.
    fn put_ascii(&mut self, bytes: &[u8]);

    fn put_zeros(&mut self, count: usize);
}

struct Counter(usize);

impl Sink for Counter {
    #[inline]
    fn put_str(&mut self, s: &str) {
        self.0 += s.len();
    }

    #[inline]
    fn put_ascii(&mut self, bytes: &[u8]) {
        self.0 += bytes.len();
    }

    #[inline]
    fn put_zeros(&mut self, count: usize) {
        self.0 += count;
    }
}

/// Writes into a slice already trimmed to the required length.
struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl SliceSink<'_> {
    #[inline]
    fn put_bytes(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }
}

impl Sink for SliceSink<'_> {
    #[inline]
    fn put_str(&mut self, s: &str) {
        self.put_bytes(s.as_bytes());
    }

    #[inline]
    fn put_ascii(&mut self, bytes: &[u8]) {
        self.put_bytes(bytes);
    }

    #[inline]
    fn put_zeros(&mut self, count: usize) {
        let end = self.pos + count;
        self.buf[self.pos..end].fill(b'0');
        self.pos = end;
    }
}

impl Sink for String {
    #[inline]
    fn put_str(&mut self, s: &str) {
        self.push_str(s);
    }

    #[inline]
    fn put_ascii(&mut self, bytes: &[u8]) {
        self.extend(bytes.iter().copied().map(char::from));
    }

    #[inline]
    fn put_zeros(&mut self, count: usize) {
        self.extend(iter::repeat_n('0', count));
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn render<P, S>(value: u64, spec: FormatSpecifier, provider: &P, out: &mut S)
where
    P: NumberFormatProvider + ?Sized,
    S: Sink,
{
    let precision = spec.precision().map(|p| p as usize);

    match spec.kind() {
        FormatKind::Decimal => {
            let digits = decimal_digits(value);
            out.put_zeros(precision.unwrap_or(0).saturating_sub(digits.len()));
            out.put_ascii(&digits);
        },
        FormatKind::Hex => {
            let digits = hex_digits(value, spec.is_uppercase());
            out.put_zeros(precision.unwrap_or(0).saturating_sub(digits.len()));
            out.put_ascii(&digits);
        },
        FormatKind::General => {
            let digits = decimal_digits(value);
            match precision {
                Some(p) if p > 0 && p < digits.len() => {
                    let scientific = Scientific {
                        significant: p,
                        pad_fraction: false,
                        min_exponent_digits: 2,
                        uppercase: spec.is_uppercase(),
                    };
                    scientific.render(&digits, provider, out);
                },
                _ => out.put_ascii(&digits),
            }
        },
        FormatKind::Exponential => {
            let digits = decimal_digits(value);
            let scientific = Scientific {
                significant: precision.unwrap_or(DEFAULT_EXPONENTIAL_PRECISION) + 1,
                pad_fraction: true,
                min_exponent_digits: 3,
                uppercase: spec.is_uppercase(),
            };
            scientific.render(&digits, provider, out);
        },
        FormatKind::Number => {
            let digits = decimal_digits(value);
            let separator = provider.group_separator();
            let mut start = 0;
            for boundary in group_boundaries(digits.len(), provider.group_sizes()) {
                out.put_ascii(&digits[start..boundary]);
                out.put_str(separator);
                start = boundary;
            }
            out.put_ascii(&digits[start..]);
            render_zero_fraction(precision, provider, out);
        },
        FormatKind::FixedPoint => {
            out.put_ascii(&decimal_digits(value));
            render_zero_fraction(precision, provider, out);
        },
    }
}

fn render_zero_fraction<P, S>(precision: Option<usize>, provider: &P, out: &mut S)
where
    P: NumberFormatProvider + ?Sized,
    S: Sink,
{
    let places = precision.unwrap_or(provider.number_decimal_digits() as usize);
    if places > 0 {
        out.put_str(provider.decimal_separator());
        out.put_zeros(places);
    }
}

/// Layout of `d.dddE+xx` renderings.
struct Scientific {
    /// Significant digits to keep, at least 1
    significant: usize,
    /// Pad the fraction with zeros up to `significant - 1` digits (`E`);
    /// otherwise trailing zeros are dropped (`G`)
    pad_fraction: bool,
    min_exponent_digits: usize,
    uppercase: bool,
}

impl Scientific {
    fn render<P, S>(&self, digits: &DecimalDigits, provider: &P, out: &mut S)
    where
        P: NumberFormatProvider + ?Sized,
        S: Sink,
    {
        let (mut mantissa, carried) = round_significant(digits, self.significant);
        let exponent = digits.len() - 1 + usize::from(carried);

        let zero_pad = if self.pad_fraction {
            self.significant.max(1) - mantissa.len()
        } else {
            while mantissa.len() > 1 && mantissa.last() == Some(&b'0') {
                mantissa.pop();
            }
            0
        };

        out.put_ascii(&mantissa[..1]);
        if mantissa.len() > 1 || zero_pad > 0 {
            out.put_str(provider.decimal_separator());
            out.put_ascii(&mantissa[1..]);
            out.put_zeros(zero_pad);
        }

        out.put_ascii(if self.uppercase { b"E" } else { b"e" });
        out.put_str(provider.positive_sign());

        let exponent_digits = decimal_digits(exponent as u64);
        out.put_zeros(
            self.min_exponent_digits
                .saturating_sub(exponent_digits.len()),
        );
        out.put_ascii(&exponent_digits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocaleSymbols;
    use proptest::prelude::*;

    fn fmt(value: u64, spec: &str, symbols: &LocaleSymbols) -> String {
        to_string(value, FormatSpecifier::parse(spec).unwrap(), symbols)
    }

    fn inv(value: u64, spec: &str) -> String {
        fmt(value, spec, &LocaleSymbols::invariant())
    }

    #[test]
    fn test_general() {
        assert_eq!(inv(0, ""), "0");
        assert_eq!(inv(42, "G"), "42");
        assert_eq!(inv(u64::MAX, "G"), "18446744073709551615");
        assert_eq!(inv(12345, "G5"), "12345");
        assert_eq!(inv(12345, "G10"), "12345");
        assert_eq!(inv(12345, "G0"), "12345");
    }

    #[test]
    fn test_general_scientific() {
        assert_eq!(inv(12345, "G2"), "1.2E+04");
        assert_eq!(inv(12345, "g2"), "1.2e+04");
        assert_eq!(inv(12500, "G2"), "1.3E+04");
        assert_eq!(inv(10000, "G3"), "1E+04");
        assert_eq!(inv(99999, "G3"), "1E+05");
        assert_eq!(
            inv(u64::MAX, "G1"),
            "2E+19"
        );
    }

    #[test]
    fn test_decimal() {
        assert_eq!(inv(0, "D"), "0");
        assert_eq!(inv(42, "D"), "42");
        assert_eq!(inv(42, "D5"), "00042");
        assert_eq!(inv(12345, "d3"), "12345");
        assert_eq!(inv(u64::MAX, "D20"), "18446744073709551615");
        assert_eq!(inv(1, "D22"), "0000000000000000000001");
    }

    #[test]
    fn test_hex() {
        assert_eq!(inv(255, "X4"), "00FF");
        assert_eq!(inv(255, "x4"), "00ff");
        assert_eq!(inv(0, "x"), "0");
        assert_eq!(inv(0xbeef, "X"), "BEEF");
        assert_eq!(inv(u64::MAX, "x"), "ffffffffffffffff");
        assert_eq!(inv(u64::MAX, "X20"), "0000FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn test_number() {
        assert_eq!(inv(1_234_567, "N0"), "1,234,567");
        assert_eq!(inv(1_234_567, "N"), "1,234,567.00");
        assert_eq!(inv(123, "N1"), "123.0");
        assert_eq!(inv(0, "N"), "0.00");
        assert_eq!(inv(u64::MAX, "N0"), "18,446,744,073,709,551,615");

        assert_eq!(fmt(1_234_567, "N", &LocaleSymbols::de_de()), "1.234.567,00");
        assert_eq!(fmt(1_234_567, "N", &LocaleSymbols::en_in()), "12,34,567.00");
        assert_eq!(
            fmt(1_234_567, "N0", &LocaleSymbols::fr_fr()),
            "1\u{202f}234\u{202f}567"
        );

        let ungrouped = LocaleSymbols::invariant().with_group_sizes(&[]);
        assert_eq!(fmt(1_234_567, "N0", &ungrouped), "1234567");
    }

    #[test]
    fn test_fixed_point() {
        assert_eq!(inv(1_234_567, "F"), "1234567.00");
        assert_eq!(inv(7, "F0"), "7");
        assert_eq!(inv(7, "F3"), "7.000");
        assert_eq!(fmt(7, "F1", &LocaleSymbols::de_de()), "7,0");

        let no_fraction = LocaleSymbols::invariant().with_number_decimal_digits(0);
        assert_eq!(fmt(7, "F", &no_fraction), "7");
    }

    #[test]
    fn test_exponential() {
        assert_eq!(inv(12345, "E"), "1.234500E+004");
        assert_eq!(inv(12345, "E2"), "1.23E+004");
        assert_eq!(inv(12345, "e0"), "1e+004");
        assert_eq!(inv(0, "E"), "0.000000E+000");
        assert_eq!(inv(99999, "E1"), "1.0E+005");
        assert_eq!(
            inv(u64::MAX, "E25"),
            "1.8446744073709551615000000E+019"
        );
    }

    #[test]
    fn test_buffer_contract() {
        let symbols = LocaleSymbols::invariant();
        let spec = FormatSpecifier::decimal();

        let mut exact = [0u8; 2];
        assert_eq!(try_format(42, &mut exact, spec, &symbols), Some(2));
        assert_eq!(&exact, b"42");

        let mut short = [b'#'; 1];
        assert_eq!(try_format(42, &mut short, spec, &symbols), None);
        assert_eq!(&short, b"#");

        let mut long = [b'#'; 5];
        assert_eq!(try_format(42, &mut long, spec, &symbols), Some(2));
        assert_eq!(&long, b"42###");

        let mut empty: [u8; 0] = [];
        assert_eq!(try_format(0, &mut empty, spec, &symbols), None);
    }

    #[test]
    fn test_multibyte_separator_length() {
        let symbols = LocaleSymbols::fr_fr();
        let spec = FormatSpecifier::number().with_precision(0).unwrap();
        // 7 digits + two 3-byte separators
        assert_eq!(required_len(1_234_567, spec, &symbols), 13);

        let mut buf = [0u8; 13];
        assert_eq!(try_format(1_234_567, &mut buf, spec, &symbols), Some(13));
        assert_eq!(std::str::from_utf8(&buf), Ok("1\u{202f}234\u{202f}567"));

        let mut short = [0u8; 12];
        assert_eq!(try_format(1_234_567, &mut short, spec, &symbols), None);
    }

    #[test]
    fn test_large_precision_sizing() {
        let symbols = LocaleSymbols::invariant();
        let spec = FormatSpecifier::decimal().with_precision(1_000).unwrap();
        assert_eq!(required_len(5, spec, &symbols), 1_000);

        let mut buf = vec![0u8; 999];
        assert_eq!(try_format(5, &mut buf, spec, &symbols), None);
    }

    proptest! {
        #[test]
        fn decimal_matches_std(value in any::<u64>()) {
            prop_assert_eq!(inv(value, "D"), value.to_string());
            prop_assert_eq!(inv(value, ""), value.to_string());
        }

        #[test]
        fn hex_matches_std(value in any::<u64>(), width in 0u32..24) {
            let spec = format!("x{}", width);
            prop_assert_eq!(inv(value, &spec), format!("{:0w$x}", value, w = width as usize));
            let spec = format!("X{}", width);
            prop_assert_eq!(inv(value, &spec), format!("{:0w$X}", value, w = width as usize));
        }

        #[test]
        fn required_len_matches_output(value in any::<u64>(), letter in "[GgDdXxNnFfEe]", precision in proptest::option::of(0u32..30)) {
            let mut text = letter.clone();
            if let Some(p) = precision {
                text.push_str(&p.to_string());
            }
            let spec = FormatSpecifier::parse(&text).unwrap();
            let symbols = LocaleSymbols::fr_fr();
            let rendered = to_string(value, spec, &symbols);
            prop_assert_eq!(required_len(value, spec, &symbols), rendered.len());

            let mut buf = vec![0u8; rendered.len()];
            prop_assert_eq!(try_format(value, &mut buf, spec, &symbols), Some(rendered.len()));
            prop_assert_eq!(buf, rendered.into_bytes());
        }
    }
}
