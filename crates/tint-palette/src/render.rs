//! Output renderings of a [`Palette`] for styling systems.

use std::fmt;

use crate::palette::Palette;

/// Default CSS selector for custom properties.
pub const DEFAULT_SELECTOR: &str = ":root";

/// A palette rendered as a CSS rule of custom properties.
///
/// ```text
/// :root {
///   --color-01-00: #000000;
///   --color-rgb-01-00: 0,0,0;
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Css<'a> {
    palette: &'a Palette,
    selector: &'a str,
}

impl fmt::Display for Css<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for token in self.palette {
            writeln!(f, "  {}: {};", token.name, token.value)?;
        }
        writeln!(f, "}}")
    }
}

impl Palette {
    /// Borrowing CSS view, for writing straight into a formatter.
    #[must_use]
    pub const fn css<'a>(&'a self, selector: &'a str) -> Css<'a> {
        Css { palette: self, selector }
    }

    /// Render as a CSS rule under `selector`.
    #[must_use]
    pub fn to_css(&self, selector: &str) -> String {
        self.css(selector).to_string()
    }

    /// Render as a pretty-printed JSON object, keys in generation order.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures from `serde_json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
