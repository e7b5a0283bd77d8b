//! Model a color in the sRGB color space.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{
    color::{Component, Components},
    hex::hex_to_rgb,
    Error,
};

/// A color as three 8-bit channels, the form a `#RRGGBB` string encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Rgb8 {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb8 {
    /// Create a color from its red, green and blue channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Normalize the channels into the [0, 1] range.
    pub fn to_srgb(&self) -> Srgb {
        Srgb::from(*self)
    }
}

/// Formats as lowercase `#rrggbb`.
impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb8 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_string()
    }
}

swatch_macros::gen_model! {
    /// A color specified in the sRGB color space with components in the
    /// [0, 1] range.
    pub struct Srgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl From<Rgb8> for Srgb {
    fn from(value: Rgb8) -> Self {
        Components(
            value.red as Component,
            value.green as Component,
            value.blue as Component,
        )
        .map(|c| c / 255.0)
        .into()
    }
}
