// ============================================================================
// Interfaces Module
// Contains the trait seams between the codec and its callers
// ============================================================================

mod format_provider;

pub use format_provider::{NumberFormatProvider, ASCII_DIGITS};
