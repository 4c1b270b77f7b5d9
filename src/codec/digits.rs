// ============================================================================
// Digit Helpers
// Stack-only digit buffers, grouping layout and significant-digit rounding
// ============================================================================

use arrayvec::ArrayVec;

/// Decimal digits of `u64::MAX`
pub const MAX_DECIMAL_DIGITS: usize = 20;

/// Hex digits of `u64::MAX`
pub const MAX_HEX_DIGITS: usize = 16;

/// ASCII decimal digits, most significant first.
pub type DecimalDigits = ArrayVec<u8, MAX_DECIMAL_DIGITS>;

/// ASCII hex digits, most significant first.
pub type HexDigits = ArrayVec<u8, MAX_HEX_DIGITS>;

/// Separator positions within a digit run (a separator precedes each index).
pub type GroupBoundaries = ArrayVec<usize, MAX_DECIMAL_DIGITS>;

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Whitespace accepted around a number: U+0009..=U+000D and U+0020.
#[inline]
pub const fn is_white(c: char) -> bool {
    matches!(c, '\u{09}'..='\u{0d}' | ' ')
}

/// Base-10 digits of `value`; zero renders as a single `'0'`.
pub fn decimal_digits(mut value: u64) -> DecimalDigits {
    let mut digits = DecimalDigits::new();
    loop {
        digits.push(b'0' + (value % 10) as u8);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Base-16 digits of `value` in the requested case.
pub fn hex_digits(mut value: u64, uppercase: bool) -> HexDigits {
    let table = if uppercase { HEX_UPPER } else { HEX_LOWER };
    let mut digits = HexDigits::new();
    loop {
        digits.push(table[(value & 0xF) as usize]);
        value >>= 4;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Size of the group at `index` (counted from the right).
///
/// The last configured size repeats. `None` means grouping stops.
#[inline]
pub fn group_size_at(sizes: &[u8], index: usize) -> Option<usize> {
    let size = *sizes.get(index).or_else(|| sizes.last())?;
    if size == 0 {
        None
    } else {
        Some(size as usize)
    }
}

/// Indices in a run of `len` digits that are preceded by a group separator,
/// in ascending order.
pub fn group_boundaries(len: usize, sizes: &[u8]) -> GroupBoundaries {
    let mut boundaries = GroupBoundaries::new();
    let mut remaining = len.min(MAX_DECIMAL_DIGITS);
    let mut index = 0;

    while let Some(size) = group_size_at(sizes, index) {
        if remaining <= size {
            break;
        }
        remaining -= size;
        boundaries.push(remaining);
        index += 1;
    }

    boundaries.reverse();
    boundaries
}

/// Round `digits` to `keep` significant digits, half away from zero.
///
/// Returns the kept digits and whether rounding carried into a new leading
/// digit (in which case the decimal exponent grows by one and the digits read
/// `1000...`).
pub fn round_significant(digits: &[u8], keep: usize) -> (DecimalDigits, bool) {
    let keep = keep.clamp(1, digits.len());
    let mut kept: DecimalDigits = digits[..keep].iter().copied().collect();

    if keep == digits.len() || digits[keep] < b'5' {
        return (kept, false);
    }

    for d in kept.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return (kept, false);
        }
    }

    // Every kept digit was 9
    kept[0] = b'1';
    (kept, true)
}
