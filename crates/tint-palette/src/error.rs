//! Error types for palette generation.

use thiserror::Error;
use tint_color::ColorError;

/// Errors that can occur while generating a full palette.
///
/// Generation is all-or-nothing: when any of these is returned, no tokens
/// were produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// A lightness ramp needs two end points; fewer shades leave the step
    /// size undefined.
    #[error("invalid configuration: a lightness ramp needs at least 2 shades, got {shades}")]
    TooFewShades {
        /// The rejected shade count
        shades: usize,
    },

    /// The seed color could not be decoded.
    #[error(transparent)]
    Color(#[from] ColorError),
}
