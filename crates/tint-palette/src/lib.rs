//! # tint-palette: design-token palettes from a single seed color
//!
//! Turns one hex color into a deterministic set of related colors: first a
//! ring of evenly hue-rotated base colors, then a full lightness ramp for
//! each of them, named as CSS custom properties.
//!
//! # Architecture
//!
//! ```text
//! seed "#rrggbb" + PaletteOptions
//!     │
//!     ▼
//! hue.rs:     rotate the seed into `count` base colors
//!     │
//!     ▼
//! ramp.rs:    `shades` lightness targets per base (optionally inverted)
//!     │
//!     ▼
//! palette.rs: adjust each base to each target (tint-color), emit
//!             hex + rgb tokens in order
//!     │
//!     ▼
//! render.rs:  CSS rule or JSON object
//! ```
//!
//! Nothing is cached or shared between calls. Every function is pure and
//! safe to call concurrently.

// Loop indices and counts become hue angles and lightness fractions.
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod hue;
pub mod palette;
pub mod ramp;
pub mod render;
pub mod token;

pub use error::PaletteError;
pub use hue::generate_hex_palette;
pub use palette::{Palette, PaletteOptions, Token, generate_full_palette};
pub use ramp::LightnessRamp;
pub use render::DEFAULT_SELECTOR;
pub use token::TokenKind;
