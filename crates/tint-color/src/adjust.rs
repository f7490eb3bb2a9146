// SPDX-License-Identifier: MIT
//
// HSL adjustments: hue rotation, cyclical lightness/saturation deltas,
// and absolute lightness targets.
//
// Hue is a true cycle, so it is reduced with a full modulo. Lightness and
// saturation deltas are expressed in percentage points and corrected with
// a single wrap (see `wrap_unit`), which only lands back in [0, 1] when
// the delta is at most one full range. Larger deltas are passed through
// as-is and the resulting channels saturate during 8-bit scaling.

use serde::{Deserialize, Serialize};

use crate::color::{Hsl, Rgb8};
use crate::error::ColorError;

// ─── Parameters ──────────────────────────────────────────────────────────────

/// How to move a color around the HSL cylinder.
///
/// All fields default to "no change". Loadable from JSON with any subset
/// of fields present.
///
/// ```
/// use tint_color::AdjustParams;
///
/// let p = AdjustParams::default().with_hue_shift(180.0);
/// assert_eq!(p.hue_shift, 180.0);
/// assert_eq!(p.target_lightness, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustParams {
    /// Absolute lightness in [0, 1]. When set, `lightness_change` is
    /// ignored. Not wrapped or clamped: values outside [0, 1] produce
    /// saturated channels.
    pub target_lightness: Option<f64>,

    /// Lightness delta in percentage points (100 = full range), wrapped once.
    pub lightness_change: f64,

    /// Hue rotation in degrees. Any value, positive or negative.
    pub hue_shift: f64,

    /// Saturation delta in percentage points, wrapped once.
    pub saturation_change: f64,
}

impl AdjustParams {
    #[must_use]
    pub const fn with_target_lightness(mut self, lightness: f64) -> Self {
        self.target_lightness = Some(lightness);
        self
    }

    #[must_use]
    pub const fn with_lightness_change(mut self, points: f64) -> Self {
        self.lightness_change = points;
        self
    }

    #[must_use]
    pub const fn with_hue_shift(mut self, degrees: f64) -> Self {
        self.hue_shift = degrees;
        self
    }

    #[must_use]
    pub const fn with_saturation_change(mut self, points: f64) -> Self {
        self.saturation_change = points;
        self
    }

    /// Apply these parameters to an HSL triple.
    #[must_use]
    pub fn apply(&self, hsl: Hsl) -> Hsl {
        let h = (hsl.h + self.hue_shift / 360.0).rem_euclid(1.0);
        let s = wrap_unit(hsl.s + self.saturation_change / 100.0);
        let l = self
            .target_lightness
            .unwrap_or_else(|| wrap_unit(hsl.l + self.lightness_change / 100.0));
        Hsl::new(h, l, s)
    }
}

/// Single-wrap cyclical correction: subtract 1 above 1, add 1 below 0.
///
/// This is deliberately not a modulo. `wrap_unit(2.5)` is `1.5`.
///
/// ```
/// use tint_color::wrap_unit;
///
/// assert_eq!(wrap_unit(0.25), 0.25);
/// assert_eq!(wrap_unit(1.0), 1.0);
/// assert_eq!(wrap_unit(-0.5), 0.5);
/// ```
#[inline]
#[must_use]
pub fn wrap_unit(x: f64) -> f64 {
    if x > 1.0 {
        x - 1.0
    } else if x < 0.0 {
        x + 1.0
    } else {
        x
    }
}

// ─── Transform ───────────────────────────────────────────────────────────────

impl Rgb8 {
    /// Move this color through HSL space and back.
    #[must_use]
    pub fn adjust(self, params: &AdjustParams) -> Self {
        params.apply(self.to_hsl()).to_rgb8()
    }
}

/// Adjust a hex color and return the result as lowercase `#rrggbb`.
///
/// ```
/// use tint_color::{adjust_color, AdjustParams};
///
/// let teal = adjust_color("#ff0000", &AdjustParams::default().with_hue_shift(180.0)).unwrap();
/// assert_eq!(teal, "#00feff");
/// ```
///
/// # Errors
///
/// Returns a [`ColorError`] if `hex` is not a 6-digit hex color.
pub fn adjust_color(hex: &str, params: &AdjustParams) -> Result<String, ColorError> {
    adjust_hex(hex, params).map(|c| c.to_string())
}

/// Adjust a hex color and return the result as `r,g,b` decimal.
///
/// # Errors
///
/// Returns a [`ColorError`] if `hex` is not a 6-digit hex color.
pub fn adjust_color_rgb(hex: &str, params: &AdjustParams) -> Result<String, ColorError> {
    adjust_hex(hex, params).map(Rgb8::to_rgb_string)
}

/// Parse and adjust, keeping the typed result. Both string renderings go
/// through here, so the hex and `r,g,b` forms always agree.
///
/// # Errors
///
/// Returns a [`ColorError`] if `hex` is not a 6-digit hex color.
pub fn adjust_hex(hex: &str, params: &AdjustParams) -> Result<Rgb8, ColorError> {
    let adjusted = Rgb8::from_hex(hex)?.adjust(params);
    log::trace!("adjust {hex} {params:?} -> {adjusted}");
    Ok(adjusted)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
