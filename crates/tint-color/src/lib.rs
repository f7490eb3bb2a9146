// SPDX-License-Identifier: MIT
//
// tint-color: the color transform underneath tint's palettes.
//
// Decodes `#rrggbb` strings, moves them around the HSL cylinder (hue
// rotation, cyclical lightness/saturation deltas, absolute lightness
// targets), and encodes the result back to hex or to an `r,g,b` string.
// Everything here is a pure function of its inputs: no state, no I/O, safe
// to call from any number of threads at once.

pub mod adjust;
pub mod color;
pub mod error;

pub use adjust::{AdjustParams, adjust_color, adjust_color_rgb, adjust_hex, wrap_unit};
pub use color::{Hsl, Rgb8};
pub use error::ColorError;
