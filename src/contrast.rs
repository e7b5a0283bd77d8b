//! Pick a readable text color for a preview background.
//!
//! The heuristic scales luma by alpha as if the translucent color were laid
//! over black, while the preview usually sits on a light backdrop. Output
//! for translucent colors therefore leans towards white text.

use std::fmt;

use crate::{
    color::{Component, Components},
    math::weighted_sum,
};

/// Per mille weights of the red, green and blue channels in the luma term.
const LUMA_WEIGHTS: Components = Components(299.0, 587.0, 114.0);

/// Brightness above which dark text is used.
pub const CONTRAST_THRESHOLD: Component = 128.0;

/// Text color to draw on top of a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContrastText {
    /// Dark text, for bright backgrounds.
    Black,
    /// Light text, for dark or transparent backgrounds.
    White,
}

impl ContrastText {
    /// The CSS color keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContrastText::Black => "black",
            ContrastText::White => "white",
        }
    }
}

impl fmt::Display for ContrastText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Perceptual brightness of 8-bit channels, in [0, 255].
pub fn luma(red: u8, green: u8, blue: u8) -> Component {
    let channels = Components(red as Component, green as Component, blue as Component);
    weighted_sum(channels, LUMA_WEIGHTS) / 1000.0
}

/// Choose black or white text for the given color and opacity.
///
/// ```rust
/// use swatch::{contrast_text, ContrastText};
/// assert_eq!(contrast_text(255, 255, 255, 1.0), ContrastText::Black);
/// assert_eq!(contrast_text(255, 255, 255, 0.0), ContrastText::White);
/// ```
pub fn contrast_text(red: u8, green: u8, blue: u8, alpha: Component) -> ContrastText {
    let brightness = luma(red, green, blue) * alpha;
    if brightness > CONTRAST_THRESHOLD {
        ContrastText::Black
    } else {
        ContrastText::White
    }
}
