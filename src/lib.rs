//! swatch provides the color math and state behind a small color picker:
//! parsing `#RRGGBB` strings, rendering `rgba()` and `hsl()` readouts and
//! choosing readable preview text.

#![deny(missing_docs)]

mod clipboard;
mod color;
mod contrast;
mod css;
mod error;
mod favorites;
mod hex;
mod hsl;
mod math;
mod picker;
mod rgb;
mod storage;
mod theme;

#[cfg(test)]
mod test;

pub use clipboard::{Clipboard, ClipboardError, DisplayServer, NoClipboard, SystemClipboard};
pub use color::{Component, Components};
pub use contrast::{contrast_text, luma, ContrastText, CONTRAST_THRESHOLD};
pub use css::{rgba_string, Field, Formats};
pub use error::Error;
pub use favorites::{Favorite, Favorites};
pub use hex::hex_to_rgb;
pub use hsl::{rgb_to_hsl, Hsl};
pub use picker::{Picker, Preview, DEFAULT_COLOR};
pub use rgb::{Rgb8, Srgb};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use theme::{Theme, THEME_KEY};
