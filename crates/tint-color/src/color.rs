// SPDX-License-Identifier: MIT
//
// tint color primitives: 8-bit sRGB and the HSL cylinder around it.
//
// Single-character variable names (r, g, b, h, l, s) are the standard
// mathematical convention in color science. Renaming them would make the
// code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   "#rrggbb" ↔ Rgb8 ↔ unit RGB (0.0–1.0) ↔ Hsl
//
// The HSL math below evaluates every expression in a fixed order. Changing
// `a + (b - a) * t * 6.0` into a fused multiply-add, or reassociating it,
// shifts some channels by one step after truncation, and generated token
// files stop being reproducible across versions.
#![allow(clippy::suboptimal_flops)]

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

// ─── Rgb8 ────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color, the hex form of a palette entry.
///
/// # Examples
///
/// ```
/// use tint_color::Rgb8;
///
/// let red: Rgb8 = "#ff0000".parse().unwrap();
/// assert_eq!(red, Rgb8::new(255, 0, 0));
/// assert_eq!(red.to_string(), "#ff0000");
/// assert_eq!(red.to_rgb_string(), "255,0,0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidLength`] when the digits (after the
    /// optional `#`) are not exactly six, and [`ColorError::InvalidDigit`]
    /// when any of them is not a hex digit.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s)
    }

    /// Render as `r,g,b` in decimal, no spaces or leading zeros.
    #[must_use]
    pub fn to_rgb_string(self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }

    /// Channels normalized to the unit interval.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Build from unit-interval channels by truncation (not rounding).
    ///
    /// Out-of-range inputs saturate to 0 or 255.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(truncate_u8(r), truncate_u8(g), truncate_u8(b))
    }

    /// Convert to the HSL cylinder.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_unit();
        Hsl::from_rgb(r, g, b)
    }
}

impl FromStr for Rgb8 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Display for Rgb8 {
    /// Lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// A color in hue/lightness/saturation form.
///
/// Every component is a fraction in [0, 1]: hue is a fraction of a full
/// turn, lightness and saturation are fractions of their full range.
/// Only lives for the duration of a single transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue as a fraction of a turn, [0, 1).
    pub h: f64,
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,
    /// Saturation: 0.0 (gray) to 1.0 (fully saturated).
    pub s: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, l: f64, s: f64) -> Self {
        Self { h, l, s }
    }

    /// Convert unit-interval RGB to HSL.
    ///
    /// Achromatic inputs (all channels equal) get hue 0 and saturation 0.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let range = max - min;
        let l = sum / 2.0;

        if min == max {
            return Self::new(0.0, l, 0.0);
        }

        let s = if l <= 0.5 {
            range / sum
        } else {
            range / (2.0 - max - min)
        };

        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;

        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self::new((h / 6.0).rem_euclid(1.0), l, s)
    }

    /// Convert back to unit-interval RGB.
    ///
    /// Components outside [0, 1] are not clamped here; the caller decides
    /// what to do with out-of-range channels.
    #[must_use]
    pub fn to_rgb(self) -> (f64, f64, f64) {
        let Self { h, l, s } = self;

        if s == 0.0 {
            return (l, l, l);
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
        let m1 = 2.0 * l - m2;

        (
            hue_channel(m1, m2, h + ONE_THIRD),
            hue_channel(m1, m2, h),
            hue_channel(m1, m2, h - ONE_THIRD),
        )
    }

    /// Convert straight to 8-bit sRGB (truncating).
    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        let (r, g, b) = self.to_rgb();
        Rgb8::from_unit(r, g, b)
    }
}

/// One channel of the HSL → RGB inverse: a piecewise-linear ramp between
/// `m1` and `m2` with breakpoints at 1/6, 1/2 and 2/3 of a turn.
fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        return m1 + (m2 - m1) * hue * 6.0;
    }
    if hue < 0.5 {
        return m2;
    }
    if hue < TWO_THIRDS {
        return m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0;
    }
    m1
}

// ─── Parsing & scaling helpers ───────────────────────────────────────────────

fn parse_hex(input: &str) -> Result<Rgb8, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    let len = digits.chars().count();
    if len != 6 {
        return Err(ColorError::InvalidLength {
            input: input.to_string(),
            len,
        });
    }
    // Past this point every char is one byte.
    if let Some(digit) = digits.chars().find(|c| !c.is_ascii()) {
        return Err(ColorError::InvalidDigit {
            input: input.to_string(),
            digit,
        });
    }

    let bytes = digits.as_bytes();
    let byte = |i: usize| parse_hex_byte(input, &bytes[i..i + 2]);
    Ok(Rgb8::new(byte(0)?, byte(2)?, byte(4)?))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_hex_byte(input: &str, bytes: &[u8]) -> Result<u8, ColorError> {
    let digit = |c: u8| {
        parse_hex_digit(c).ok_or_else(|| ColorError::InvalidDigit {
            input: input.to_string(),
            digit: char::from(c),
        })
    };
    Ok(digit(bytes[0])? << 4 | digit(bytes[1])?)
}

/// Scale a unit value to 0–255 by truncation toward zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_u8(v: f64) -> u8 {
    // `as` saturates: negatives and NaN become 0, anything past 255 becomes 255.
    (v * 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
