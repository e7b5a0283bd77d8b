//! Model a color with the HSL notation in the sRGB color space.

use std::fmt;

use crate::{
    color::{Component, Components},
    math::{max3, min3},
    Rgb8, Srgb,
};

swatch_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, as a fraction of a full turn.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Srgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(red, green, blue) = self.to_components();

        let max = max3(red, green, blue);
        let min = min3(red, green, blue);
        let lightness = (max + min) / 2.0;

        // Achromatic, hue and saturation are both zero.
        if max == min {
            return Hsl::new(0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Ties resolve in red, green, blue order.
        let hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Hsl::new(hue / 6.0, saturation, lightness)
    }
}

/// Formats as `hsl(H, S%, L%)`, each part rounded on its own.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            (self.hue * 360.0).round() as i64,
            (self.saturation * 100.0).round() as i64,
            (self.lightness * 100.0).round() as i64,
        )
    }
}

/// Convert 8-bit channels to a CSS `hsl()` string.
///
/// ```rust
/// assert_eq!(swatch::rgb_to_hsl(52, 152, 219), "hsl(204, 70%, 53%)");
/// ```
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> String {
    Rgb8::new(red, green, blue).to_srgb().to_hsl().to_string()
}
