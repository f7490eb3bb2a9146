// SPDX-License-Identifier: MIT
//
// Error types for hex color parsing.

use thiserror::Error;

/// Errors produced while decoding a hex color string.
///
/// Both variants mean the caller passed something that is not a 6-digit
/// hex color. Nothing in the transform itself can fail once the input has
/// been decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Wrong number of digits after the optional `#`.
    #[error("invalid hex color '{input}': expected 6 hex digits, found {len}")]
    InvalidLength {
        /// The string as given by the caller
        input: String,
        /// Number of characters after stripping `#`
        len: usize,
    },

    /// A character that is not `0-9`, `a-f` or `A-F`.
    #[error("invalid hex color '{input}': '{digit}' is not a hex digit")]
    InvalidDigit {
        /// The string as given by the caller
        input: String,
        /// The offending character
        digit: char,
    },
}
