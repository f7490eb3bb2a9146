//! Full palette generation: hue-rotated base colors, each expanded into a
//! lightness ramp and rendered as design tokens.
//!
//! For every base color and every shade, two tokens are emitted in this
//! order: the hex form (`--color-BB-SS`) and the `r,g,b` form
//! (`--color-rgb-BB-SS`). Iteration order is base-color-major, then
//! shade, then hex before rgb.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tint_color::{AdjustParams, Rgb8};

use crate::error::PaletteError;
use crate::hue::hue_rotations;
use crate::ramp::LightnessRamp;
use crate::token::{TokenKind, fits_fixed_width, token_name};

// ---------------------------------------------------------------------------
// PaletteOptions
// ---------------------------------------------------------------------------

/// Default number of base colors.
pub const DEFAULT_COUNT: usize = 7;

/// Default number of shades per base color.
pub const DEFAULT_SHADES: usize = 100;

/// Everything that shapes a full palette besides the seed color.
///
/// Loadable from JSON with any subset of fields present; missing fields
/// take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    /// Number of hue-rotated base colors.
    pub count: usize,

    /// Lightness steps per base color. Must be at least 2.
    pub shades: usize,

    /// Run each ramp from white to black instead of black to white.
    pub invert_lightness: bool,

    /// Accepted for symmetry with [`AdjustParams`]. Every shade sets an
    /// absolute lightness target, so this never changes the output.
    pub lightness_change: f64,

    /// Extra hue rotation in degrees, applied to every shade.
    pub hue_shift: f64,

    /// Saturation delta in percentage points, applied to every shade.
    pub saturation_change: f64,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            shades: DEFAULT_SHADES,
            invert_lightness: false,
            lightness_change: 0.0,
            hue_shift: 0.0,
            saturation_change: 0.0,
        }
    }
}

impl PaletteOptions {
    /// Adjustment for one shade with the given lightness target.
    #[must_use]
    pub const fn shade_params(&self, target_lightness: f64) -> AdjustParams {
        AdjustParams {
            target_lightness: Some(target_lightness),
            lightness_change: self.lightness_change,
            hue_shift: self.hue_shift,
            saturation_change: self.saturation_change,
        }
    }

    /// Number of tokens a palette with these options holds.
    #[must_use]
    pub const fn token_count(&self) -> usize {
        self.count * self.shades * 2
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// One named palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub name: String,
    pub value: String,
}

/// An insertion-ordered mapping from token name to color value.
///
/// Built once by [`generate_full_palette`] and never modified afterwards.
/// Serializes as a map whose key order is the generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    tokens: Vec<Token>,
}

impl Palette {
    fn with_capacity(capacity: usize) -> Self {
        Self { tokens: Vec::with_capacity(capacity) }
    }

    fn push(&mut self, name: String, value: String) {
        self.tokens.push(Token { name, value });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in generation order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Look up a value by token name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.value.as_str())
    }

    #[must_use]
    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for Palette {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tokens.len()))?;
        for token in &self.tokens {
            map.serialize_entry(&token.name, &token.value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the full token palette for a seed color.
///
/// ```
/// use tint_palette::{generate_full_palette, PaletteOptions};
///
/// let opts = PaletteOptions { count: 3, shades: 10, ..PaletteOptions::default() };
/// let palette = generate_full_palette("#ff0000", &opts).unwrap();
/// assert_eq!(palette.len(), 60);
/// assert_eq!(palette.first().unwrap().name, "--color-01-00");
/// assert_eq!(palette.last().unwrap().name, "--color-rgb-03-09");
/// ```
///
/// # Errors
///
/// - [`PaletteError::TooFewShades`] if `options.shades < 2`
/// - [`PaletteError::Color`] if `base` is not a 6-digit hex color
pub fn generate_full_palette(base: &str, options: &PaletteOptions) -> Result<Palette, PaletteError> {
    let ramp = LightnessRamp::new(options.shades, options.invert_lightness)?;
    let seed = Rgb8::from_hex(base)?;

    log::debug!(
        "full palette: seed {seed}, {} colors x {} shades (inverted: {})",
        options.count,
        options.shades,
        options.invert_lightness,
    );
    if !fits_fixed_width(options.count, options.shades) {
        log::warn!(
            "{} colors x {} shades exceeds two-digit token indices; names will widen",
            options.count,
            options.shades,
        );
    }

    let mut palette = Palette::with_capacity(options.token_count());
    for (color_index, color) in hue_rotations(seed, options.count).into_iter().enumerate() {
        log::trace!("base color {}: {color}", color_index + 1);
        for (shade, target) in ramp.iter().enumerate() {
            let shaded = color.adjust(&options.shade_params(target));
            palette.push(token_name(TokenKind::Hex, color_index, shade), shaded.to_string());
            palette.push(token_name(TokenKind::Rgb, color_index, shade), shaded.to_rgb_string());
        }
    }

    Ok(palette)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use tint_color::{ColorError, adjust_color, adjust_color_rgb};

    use crate::hue::generate_hex_palette;

    fn opts(count: usize, shades: usize) -> PaletteOptions {
        PaletteOptions { count, shades, ..PaletteOptions::default() }
    }

    fn names(p: &Palette) -> Vec<&str> {
        p.iter().map(|t| t.name.as_str()).collect()
    }

    // ── Options ───────────────────────────────────────────────────────

    #[test]
    fn default_options() {
        let o = PaletteOptions::default();
        assert_eq!(o.count, 7);
        assert_eq!(o.shades, 100);
        assert!(!o.invert_lightness);
        assert_eq!(o.token_count(), 1400);
    }

    #[test]
    fn options_load_from_partial_json() {
        let o: PaletteOptions =
            serde_json::from_str(r#"{ "shades": 12, "invert_lightness": true }"#).unwrap();
        assert_eq!(
            o,
            PaletteOptions { shades: 12, invert_lightness: true, ..PaletteOptions::default() }
        );
    }

    #[test]
    fn shade_params_carry_adjustments() {
        let o = PaletteOptions {
            lightness_change: 5.0,
            hue_shift: 30.0,
            saturation_change: -10.0,
            ..PaletteOptions::default()
        };
        assert_eq!(
            o.shade_params(0.4),
            AdjustParams {
                target_lightness: Some(0.4),
                lightness_change: 5.0,
                hue_shift: 30.0,
                saturation_change: -10.0,
            }
        );
    }

    // ── Size & order ──────────────────────────────────────────────────

    #[test]
    fn size_is_count_times_shades_times_two() {
        for count in 1..=5 {
            for shades in 2..=8 {
                let p = generate_full_palette("#3a7bd5", &opts(count, shades)).unwrap();
                assert_eq!(p.len(), count * shades * 2, "count {count}, shades {shades}");
            }
        }
    }

    #[test]
    fn default_palette_size_and_last_key() {
        let p = generate_full_palette("#3a7bd5", &PaletteOptions::default()).unwrap();
        assert_eq!(p.len(), 1400);
        assert_eq!(p.last().unwrap().name, "--color-rgb-07-99");
    }

    #[test]
    fn first_and_last_keys() {
        let p = generate_full_palette("#ff0000", &opts(3, 10)).unwrap();
        assert_eq!(p.first().unwrap().name, "--color-01-00");
        assert_eq!(p.last().unwrap().name, "--color-rgb-03-09");
    }

    #[test]
    fn insertion_order() {
        let p = generate_full_palette("#ff0000", &opts(2, 2)).unwrap();
        assert_eq!(
            names(&p),
            [
                "--color-01-00",
                "--color-rgb-01-00",
                "--color-01-01",
                "--color-rgb-01-01",
                "--color-02-00",
                "--color-rgb-02-00",
                "--color-02-01",
                "--color-rgb-02-01",
            ]
        );
    }

    #[test]
    fn keys_are_unique() {
        let p = generate_full_palette("#3a7bd5", &opts(12, 30)).unwrap();
        let mut keys = names(&p);
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), p.len());
    }

    #[test]
    fn zero_count_is_empty() {
        let p = generate_full_palette("#ff0000", &opts(0, 10)).unwrap();
        assert!(p.is_empty());
    }

    // ── Values ────────────────────────────────────────────────────────

    #[test]
    fn smallest_palette() {
        let p = generate_full_palette("#ff0000", &opts(1, 2)).unwrap();
        let pairs: Vec<(&str, &str)> =
            p.iter().map(|t| (t.name.as_str(), t.value.as_str())).collect();
        assert_eq!(
            pairs,
            [
                ("--color-01-00", "#000000"),
                ("--color-rgb-01-00", "0,0,0"),
                ("--color-01-01", "#ffffff"),
                ("--color-rgb-01-01", "255,255,255"),
            ]
        );
    }

    #[test]
    fn lightness_runs_black_to_white() {
        let p = generate_full_palette("#ff0000", &opts(3, 10)).unwrap();
        for bb in ["01", "02", "03"] {
            assert_eq!(p.get(&format!("--color-{bb}-00")), Some("#000000"));
            assert_eq!(p.get(&format!("--color-{bb}-09")), Some("#ffffff"));
            assert_eq!(p.get(&format!("--color-rgb-{bb}-09")), Some("255,255,255"));
        }
    }

    #[test]
    fn inverted_runs_white_to_black() {
        let o = PaletteOptions { invert_lightness: true, ..opts(3, 10) };
        let p = generate_full_palette("#ff0000", &o).unwrap();
        assert_eq!(p.get("--color-01-00"), Some("#ffffff"));
        assert_eq!(p.get("--color-01-09"), Some("#000000"));
        assert_eq!(p.get("--color-03-09"), Some("#000000"));
        assert_eq!(p.get("--color-rgb-03-00"), Some("255,255,255"));
    }

    #[test]
    fn mid_shades() {
        let p = generate_full_palette("#ff0000", &opts(3, 10)).unwrap();
        assert_eq!(p.get("--color-01-05"), Some("#ff1c1c"));
        assert_eq!(p.get("--color-rgb-02-04"), Some("0,226,0"));
    }

    #[test]
    fn shifted_and_desaturated() {
        let o = PaletteOptions { hue_shift: 180.0, saturation_change: -20.0, ..opts(2, 5) };
        let p = generate_full_palette("#3a7bd5", &o).unwrap();
        let values: Vec<&str> = p.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(
            values,
            [
                "#000000", "0,0,0",
                "#5b4423", "91,68,35",
                "#b78847", "183,136,71",
                "#dbc3a3", "219,195,163",
                "#ffffff", "255,255,255",
                "#000000", "0,0,0",
                "#233b5b", "35,59,91",
                "#4776b7", "71,118,183",
                "#a3badb", "163,186,219",
                "#ffffff", "255,255,255",
            ]
        );
    }

    #[test]
    fn every_token_matches_the_transform() {
        let o = PaletteOptions {
            invert_lightness: true,
            hue_shift: -40.0,
            saturation_change: 15.0,
            ..opts(4, 6)
        };
        let p = generate_full_palette("#c0ffee", &o).unwrap();
        let bases = generate_hex_palette("#c0ffee", 4).unwrap();
        let ramp = LightnessRamp::new(6, true).unwrap();

        for (ci, base) in bases.iter().enumerate() {
            for (shade, target) in ramp.iter().enumerate() {
                let params = o.shade_params(target);
                let hex = token_name(TokenKind::Hex, ci, shade);
                let rgb = token_name(TokenKind::Rgb, ci, shade);
                assert_eq!(p.get(&hex).unwrap(), adjust_color(base, &params).unwrap());
                assert_eq!(p.get(&rgb).unwrap(), adjust_color_rgb(base, &params).unwrap());
            }
        }
    }

    #[test]
    fn lightness_change_has_no_effect() {
        let plain = generate_full_palette("#3a7bd5", &opts(2, 5)).unwrap();
        let changed = PaletteOptions { lightness_change: 40.0, ..opts(2, 5) };
        assert_eq!(generate_full_palette("#3a7bd5", &changed).unwrap(), plain);
    }

    #[test]
    fn value_formats() {
        let hex = Regex::new(r"^#[0-9a-f]{6}$").unwrap();
        let rgb = Regex::new(r"^\d{1,3},\d{1,3},\d{1,3}$").unwrap();
        let p = generate_full_palette("#3a7bd5", &opts(7, 20)).unwrap();
        for t in &p {
            if t.name.starts_with("--color-rgb-") {
                assert!(rgb.is_match(&t.value), "{}: {}", t.name, t.value);
            } else {
                assert!(hex.is_match(&t.value), "{}: {}", t.name, t.value);
            }
        }
    }

    #[test]
    fn wide_indices_still_generate() {
        let p = generate_full_palette("#3a7bd5", &opts(1, 101)).unwrap();
        assert_eq!(p.last().unwrap().name, "--color-rgb-01-100");
    }

    #[test]
    fn deterministic() {
        let o = PaletteOptions { hue_shift: 12.5, saturation_change: 7.0, ..opts(5, 16) };
        assert_eq!(
            generate_full_palette("#3a7bd5", &o).unwrap(),
            generate_full_palette("#3a7bd5", &o).unwrap()
        );
    }

    // ── Errors ────────────────────────────────────────────────────────

    #[test]
    fn single_shade_rejected() {
        assert_eq!(
            generate_full_palette("#ff0000", &opts(7, 1)),
            Err(PaletteError::TooFewShades { shades: 1 })
        );
    }

    #[test]
    fn zero_shades_rejected() {
        assert_eq!(
            generate_full_palette("#ff0000", &opts(7, 0)),
            Err(PaletteError::TooFewShades { shades: 0 })
        );
    }

    #[test]
    fn bad_seed_rejected() {
        assert_eq!(
            generate_full_palette("#ff00", &opts(7, 10)),
            Err(PaletteError::Color(ColorError::InvalidLength {
                input: "#ff00".into(),
                len: 4,
            }))
        );
    }

    #[test]
    fn shade_validation_comes_first() {
        assert!(matches!(
            generate_full_palette("garbage", &opts(7, 1)),
            Err(PaletteError::TooFewShades { .. })
        ));
    }

    // ── Accessors & serialization ─────────────────────────────────────

    #[test]
    fn get_missing_token() {
        let p = generate_full_palette("#ff0000", &opts(1, 2)).unwrap();
        assert_eq!(p.get("--color-02-00"), None);
    }

    #[test]
    fn json_keeps_insertion_order() {
        let p = generate_full_palette("#ff0000", &opts(1, 2)).unwrap();
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r##"{"--color-01-00":"#000000","--color-rgb-01-00":"0,0,0","--color-01-01":"#ffffff","--color-rgb-01-01":"255,255,255"}"##
        );
    }

    #[test]
    fn owned_iteration() {
        let p = generate_full_palette("#ff0000", &opts(1, 2)).unwrap();
        let tokens: Vec<Token> = p.clone().into_iter().collect();
        assert_eq!(tokens.as_slice(), p.tokens());
    }
}
