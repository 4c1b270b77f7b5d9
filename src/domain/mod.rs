// ============================================================================
// Domain Models Module
// Immutable descriptors shared by the parser and formatter
// ============================================================================

pub mod locale;
pub mod specifier;
pub mod style;

pub use locale::{GroupSizes, LocaleSymbols};
pub use specifier::{FormatKind, FormatSpecifier, MAX_PRECISION};
pub use style::NumberStyles;
