// ============================================================================
// Codec Errors
// Failure taxonomy shared by the parser and the descriptor constructors
// ============================================================================

use std::fmt;

/// Reasons a style, specifier or set of locale symbols is rejected.
///
/// These are caller programming errors, so they are surfaced by every
/// entry point, including the `try_*` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentError {
    /// Style contains bits that name no known flag
    UnknownStyleBits(u32),
    /// Hex specifier combined with sign, separator, decimal or currency flags
    HexStyleConflict,
    /// Format letter is not one of G, D, X, N, F, E
    UnknownFormatKind(char),
    /// Precision is not a decimal number in range
    InvalidPrecision,
    /// Locale symbols are internally inconsistent
    InvalidSymbols(&'static str),
}

/// Errors produced by the integer text codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecError {
    /// Text does not match the grammar permitted by the style
    Format,
    /// Value lies outside the u64 range
    Overflow,
    /// Invalid style, specifier or symbols
    Argument(ArgumentError),
}

impl CodecError {
    /// True for failures caused by the input text rather than by the caller.
    #[inline]
    pub const fn is_data_error(&self) -> bool {
        matches!(self, CodecError::Format | CodecError::Overflow)
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::UnknownStyleBits(bits) => {
                write!(f, "unknown number style bits: {:#x}", bits)
            },
            ArgumentError::HexStyleConflict => write!(
                f,
                "hex specifier can only be combined with whitespace flags"
            ),
            ArgumentError::UnknownFormatKind(c) => write!(f, "unknown format specifier '{}'", c),
            ArgumentError::InvalidPrecision => write!(f, "format precision is out of range"),
            ArgumentError::InvalidSymbols(reason) => write!(f, "invalid locale symbols: {}", reason),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Format => write!(f, "input string was not in a correct format"),
            CodecError::Overflow => {
                write!(f, "value was either too large or too small for a u64")
            },
            CodecError::Argument(reason) => write!(f, "invalid argument: {}", reason),
        }
    }
}

impl std::error::Error for ArgumentError {}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Argument(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<ArgumentError> for CodecError {
    #[inline]
    fn from(reason: ArgumentError) -> Self {
        CodecError::Argument(reason)
    }
}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
