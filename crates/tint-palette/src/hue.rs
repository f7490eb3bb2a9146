//! Hue rotation: the base colors of a palette.
//!
//! A seed color is rotated in equal steps around the color wheel. The first
//! color is always the seed itself (re-encoded through HSL, so it can differ
//! from the input by one step per channel).

use tint_color::{AdjustParams, ColorError, Rgb8};

/// Hue shifts, in degrees, for `count` evenly spaced colors.
///
/// Step `i` is `(360 / count) * i`, so the first shift is always 0.
pub fn hue_steps(count: usize) -> impl Iterator<Item = f64> {
    let step = 360.0 / count as f64;
    (0..count).map(move |i| step * i as f64)
}

/// Rotate `seed` into `count` evenly spaced base colors.
#[must_use]
pub fn hue_rotations(seed: Rgb8, count: usize) -> Vec<Rgb8> {
    hue_steps(count)
        .map(|shift| seed.adjust(&AdjustParams::default().with_hue_shift(shift)))
        .collect()
}

/// Generate `count` hex colors by rotating `base` around the color wheel.
///
/// ```
/// use tint_palette::generate_hex_palette;
///
/// let rgb = generate_hex_palette("#ff0000", 3).unwrap();
/// assert_eq!(rgb, ["#ff0000", "#00ff00", "#0000ff"]);
/// ```
///
/// # Errors
///
/// Returns a [`ColorError`] if `base` is not a 6-digit hex color.
pub fn generate_hex_palette(base: &str, count: usize) -> Result<Vec<String>, ColorError> {
    let seed = Rgb8::from_hex(base)?;
    log::debug!("hex palette: {count} colors from {seed}");
    Ok(hue_rotations(seed, count)
        .into_iter()
        .map(|c| c.to_string())
        .collect())
}
