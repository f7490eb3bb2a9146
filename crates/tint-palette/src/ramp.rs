//! Lightness ramps: evenly spaced lightness targets from one extreme to
//! the other.

use crate::error::PaletteError;

/// A validated ramp of `shades` lightness targets.
///
/// Shade 0 is black and the last shade is white, or the reverse when
/// inverted. Both end points are hit exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightnessRamp {
    shades: usize,
    invert: bool,
}

impl LightnessRamp {
    /// Build a ramp of `shades` steps.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::TooFewShades`] when `shades < 2`.
    pub fn new(shades: usize, invert: bool) -> Result<Self, PaletteError> {
        if shades < 2 {
            return Err(PaletteError::TooFewShades { shades });
        }
        Ok(Self { shades, invert })
    }

    #[must_use]
    pub const fn shades(&self) -> usize {
        self.shades
    }

    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.invert
    }

    /// Lightness target for `shade`: `shade / (shades - 1)`, or one minus
    /// that when inverted.
    #[must_use]
    pub fn lightness(&self, shade: usize) -> f64 {
        let t = shade as f64 / (self.shades - 1) as f64;
        if self.invert { 1.0 - t } else { t }
    }

    /// All lightness targets in shade order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.shades).map(|shade| self.lightness(shade))
    }
}
