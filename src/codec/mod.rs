// ============================================================================
// Codec Module
// Parsing and formatting of u64 values as culture-aware text
// ============================================================================
//
// This module provides:
// - parse / try_parse: text -> u64 under a NumberStyles flag set
// - try_format / to_string: u64 -> text under a FormatSpecifier
// - CodecError: Format / Overflow / Argument failure taxonomy
//
// Design principles:
// - Pure functions; symbols come from an explicit NumberFormatProvider
// - One parse routine behind both the signalling and the try variant
// - Formatting sizes its output exactly before touching the destination
// - No allocation on the try_format path (stack digit buffers)

pub mod digits;
mod errors;
mod formatter;
mod parser;

pub use errors::{ArgumentError, CodecError, CodecResult};
pub use formatter::{required_len, to_string, try_format};
pub use parser::{parse, parse_invariant, try_parse};
