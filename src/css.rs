//! Text readouts of a color, as shown next to the preview.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::{color::Component, Rgb8};

/// One text representation of a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// `#rrggbb`
    Hex,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 3] = [Field::Hex, Field::Rgba, Field::Hsl];

    /// Label printed in front of the readout.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Hex => "HEX",
            Field::Rgba => "RGBA",
            Field::Hsl => "HSL",
        }
    }

    /// The flag selecting this field.
    pub fn format(&self) -> Formats {
        match self {
            Field::Hex => Formats::HEX,
            Field::Rgba => Formats::RGBA,
            Field::Hsl => Formats::HSL,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown field {s:?}, expected hex, rgba or hsl"))
    }
}

bitflags! {
    /// Selects which readouts are rendered.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Formats : u8 {
        /// Render the hex readout.
        const HEX = 1 << 0;
        /// Render the rgba readout.
        const RGBA = 1 << 1;
        /// Render the hsl readout.
        const HSL = 1 << 2;
    }
}

impl Formats {
    /// The selected fields, in display order.
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL
            .into_iter()
            .filter(move |field| self.contains(field.format()))
    }
}

impl Default for Formats {
    fn default() -> Self {
        Formats::all()
    }
}

/// Parses a comma separated list such as `hex,hsl`, or `all`.
impl FromStr for Formats {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Formats::all());
        }

        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.parse::<Field>().map(|field| field.format()))
            .collect::<Result<Vec<_>, _>>()
            .map(|formats| formats.into_iter().fold(Formats::empty(), |acc, f| acc | f))
    }
}

/// Format a color and opacity as a CSS `rgba()` string. Alpha uses its
/// shortest decimal form, so `1.0` renders as `1`.
///
/// ```rust
/// use swatch::{rgba_string, Rgb8};
/// assert_eq!(rgba_string(Rgb8::new(52, 152, 219), 0.5), "rgba(52, 152, 219, 0.5)");
/// ```
pub fn rgba_string(color: Rgb8, alpha: Component) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.red, color.green, color.blue, alpha
    )
}
