// ============================================================================
// Unsigned Integer Text Codec
// Culture-aware parsing and allocation-free formatting of u64 values
// ============================================================================

//! # uint-text-codec
//!
//! A bidirectional converter between `u64` values and text.
//!
//! ## Features
//!
//! - **Style-driven parsing** with whitespace, signs, parentheses, currency,
//!   group separators and zero-only fractions (`NumberStyles`)
//! - **Standard format kinds** `G`, `D`, `X`, `N`, `F`, `E` with precision
//! - **Explicit locale symbols** passed per call, never read from global state
//! - **Caller-owned buffers**: `try_format` sizes the output exactly and never
//!   allocates
//! - **Typed failures**: `Format`, `Overflow` and `Argument`
//!
//! ## Example
//!
//! ```rust
//! use uint_text_codec::prelude::*;
//!
//! let symbols = LocaleSymbols::en_us();
//!
//! // Parse grouped input
//! let value = parse("1,234,567", NumberStyles::NUMBER, &symbols).unwrap();
//! assert_eq!(value, 1_234_567);
//!
//! // Format into a fixed buffer
//! let spec: FormatSpecifier = "N0".parse().unwrap();
//! let mut buf = [0u8; 16];
//! let written = try_format(value, &mut buf, spec, &symbols).unwrap();
//! assert_eq!(&buf[..written], b"1,234,567");
//!
//! // Data errors fold into None, style errors do not
//! assert_eq!(try_parse("12,34", NumberStyles::NUMBER, &symbols), Ok(None));
//! ```

pub mod codec;
pub mod domain;
pub mod interfaces;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        parse, parse_invariant, required_len, to_string, try_format, try_parse, ArgumentError,
        CodecError, CodecResult,
    };
    pub use crate::domain::{FormatKind, FormatSpecifier, LocaleSymbols, NumberStyles};
    pub use crate::interfaces::NumberFormatProvider;
}
