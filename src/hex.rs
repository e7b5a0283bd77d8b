//! Parse `#RRGGBB` strings into 8-bit channels.

use crate::{Error, Rgb8};

/// Parse six hex digits, optionally prefixed with `#`, into red, green and
/// blue channels. Digits are case-insensitive.
///
/// ```rust
/// use swatch::{hex_to_rgb, Rgb8};
/// assert_eq!(hex_to_rgb("#3498db"), Ok(Rgb8::new(52, 152, 219)));
/// assert!(hex_to_rgb("#3498d").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb8, Error> {
    let invalid = || Error::InvalidColorFormat {
        input: hex.to_owned(),
    };

    let digits = hex.strip_prefix('#').unwrap_or(hex);

    // `from_str_radix` accepts a leading sign, so check the digits first.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

    Ok(Rgb8::new(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_channels_from_bit_ranges() {
        assert_eq!(hex_to_rgb("#3498db"), Ok(Rgb8::new(0x34, 0x98, 0xdb)));
        assert_eq!(hex_to_rgb("#ff0000"), Ok(Rgb8::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("#00ff00"), Ok(Rgb8::new(0, 255, 0)));
        assert_eq!(hex_to_rgb("#0000ff"), Ok(Rgb8::new(0, 0, 255)));
        assert_eq!(hex_to_rgb("#000000"), Ok(Rgb8::new(0, 0, 0)));
        assert_eq!(hex_to_rgb("#ffffff"), Ok(Rgb8::new(255, 255, 255)));
    }

    #[test]
    fn prefix_is_optional_and_case_is_ignored() {
        assert_eq!(hex_to_rgb("3498db"), hex_to_rgb("#3498db"));
        assert_eq!(hex_to_rgb("#3498DB"), hex_to_rgb("#3498db"));
        assert_eq!(hex_to_rgb("AbCdEf"), Ok(Rgb8::new(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in [
            "", "#", "#fff", "#3498d", "#3498dbb", "##3498db", "#3498dg", "+3498db", "#+3498d",
            "#-3498d", " 3498db", "#3498db ", "#34 98db", "#ééé",
        ] {
            assert_eq!(
                hex_to_rgb(input),
                Err(Error::InvalidColorFormat {
                    input: input.to_owned()
                }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn round_trips_through_display() {
        // An odd stride spreads the samples over every channel.
        for value in (0u32..=0xffffff).step_by(257).chain([0xffffff]) {
            let hex = format!("#{value:06X}");
            let rgb = hex_to_rgb(&hex).unwrap();
            assert!(rgb.to_string().eq_ignore_ascii_case(&hex));
            assert_eq!(rgb.to_string(), hex.to_lowercase());
        }
    }
}
