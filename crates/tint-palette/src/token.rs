//! Token names: the keys of a full palette.
//!
//! | Kind  | Format               | Example             |
//! |-------|----------------------|---------------------|
//! | `Hex` | `--color-BB-SS`      | `--color-01-00`     |
//! | `Rgb` | `--color-rgb-BB-SS`  | `--color-rgb-07-99` |
//!
//! `BB` is the 1-based base color index and `SS` the 0-based shade index,
//! both zero-padded to two digits.

/// Widest index that still fits the two-digit field.
///
/// Past this, the field widens (`--color-100-05`). Keys stay unique but no
/// longer sort lexically.
pub const MAX_FIXED_INDEX: usize = 99;

/// Which rendering of a color a token holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `#rrggbb`
    Hex,
    /// `r,g,b`
    Rgb,
}

impl TokenKind {
    /// Name prefix, including the trailing dash.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Hex => "--color-",
            Self::Rgb => "--color-rgb-",
        }
    }
}

/// Build the token name for a 0-based `color_index` and `shade`.
///
/// ```
/// use tint_palette::token::{token_name, TokenKind};
///
/// assert_eq!(token_name(TokenKind::Hex, 0, 0), "--color-01-00");
/// assert_eq!(token_name(TokenKind::Rgb, 2, 9), "--color-rgb-03-09");
/// ```
#[must_use]
pub fn token_name(kind: TokenKind, color_index: usize, shade: usize) -> String {
    format!("{}{:02}-{:02}", kind.prefix(), color_index + 1, shade)
}

/// Whether a palette of this size keeps every index within two digits.
#[must_use]
pub const fn fits_fixed_width(count: usize, shades: usize) -> bool {
    count <= MAX_FIXED_INDEX && shades <= MAX_FIXED_INDEX + 1
}
