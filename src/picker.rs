//! The picker state: current color, opacity, favorites and theme.
//!
//! [`Picker`] owns its storage and clipboard so front ends and tests can
//! inject their own. Failures of either capability are logged and ignored.

use crate::{
    clipboard::Clipboard,
    color::Component,
    contrast::{contrast_text, ContrastText},
    css::{rgba_string, Field, Formats},
    favorites::{Favorite, Favorites},
    storage::Storage,
    theme::{Theme, THEME_KEY},
    Error, Rgb8,
};

/// The color a new picker starts with, `#3498db`.
pub const DEFAULT_COLOR: Rgb8 = Rgb8::new(0x34, 0x98, 0xdb);

/// How the preview area is painted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    /// Background as an `rgba()` string.
    pub background: String,
    /// Color of the text drawn on the background.
    pub text: ContrastText,
}

/// State behind a color picker.
pub struct Picker<S: Storage, C: Clipboard> {
    color: Rgb8,
    alpha: Component,
    favorites: Favorites,
    theme: Theme,
    storage: S,
    clipboard: C,
}

impl<S: Storage, C: Clipboard> Picker<S, C> {
    /// Create a picker with the default color, full opacity and the theme
    /// read from `storage`.
    pub fn new(storage: S, clipboard: C) -> Self {
        let theme = match storage.get(THEME_KEY) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(err) => {
                log::warn!("Could not read theme, using light: {err}");
                Theme::Light
            }
        };

        let mut picker = Self {
            color: DEFAULT_COLOR,
            alpha: 1.0,
            favorites: Favorites::new(),
            theme,
            storage,
            clipboard,
        };
        picker.persist_theme();
        picker
    }

    /// The current color.
    pub fn color(&self) -> Rgb8 {
        self.color
    }

    /// Replace the current color.
    pub fn set_color(&mut self, color: Rgb8) {
        log::debug!("Color set to {color}");
        self.color = color;
    }

    /// Replace the current color with a parsed `#RRGGBB` string. The color is
    /// left unchanged on error.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), Error> {
        let color = hex.parse()?;
        self.set_color(color);
        Ok(())
    }

    /// The current opacity.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// Replace the current opacity, clamped to [0, 1]. NaN is ignored.
    pub fn set_alpha(&mut self, alpha: Component) {
        if alpha.is_nan() {
            log::debug!("Ignoring NaN opacity");
            return;
        }
        // Adding zero turns -0 into 0, which would otherwise print as "-0".
        self.alpha = alpha.clamp(0.0, 1.0) + 0.0;
        log::debug!("Opacity set to {}", self.alpha);
    }

    /// Text form of the current color for one field.
    pub fn readout(&self, field: Field) -> String {
        match field {
            Field::Hex => self.color.to_string(),
            Field::Rgba => rgba_string(self.color, self.alpha),
            Field::Hsl => self.color.to_srgb().to_hsl().to_string(),
        }
    }

    /// The selected readouts, in display order.
    pub fn readouts(&self, formats: Formats) -> Vec<(Field, String)> {
        formats
            .fields()
            .map(|field| (field, self.readout(field)))
            .collect()
    }

    /// How the preview of the current color is painted.
    pub fn preview(&self) -> Preview {
        let Rgb8 { red, green, blue } = self.color;
        Preview {
            background: rgba_string(self.color, self.alpha),
            text: contrast_text(red, green, blue, self.alpha),
        }
    }

    /// Copy a readout to the clipboard and return it. The value is returned
    /// even when the clipboard write fails.
    pub fn copy(&mut self, field: Field) -> String {
        let value = self.readout(field);
        match self.clipboard.write_text(&value) {
            Ok(()) => log::info!("Copied: {value}"),
            Err(err) => log::warn!("Could not copy {value}: {err}"),
        }
        value
    }

    /// Save the current color and opacity. Returns `false` when the pair is
    /// already a favorite.
    pub fn save_favorite(&mut self) -> bool {
        let favorite = Favorite::new(self.color, self.alpha);
        let added = self.favorites.insert(favorite);
        if added {
            log::debug!("Saved favorite {}", favorite.title());
        }
        added
    }

    /// The saved favorites.
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// The current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to `theme` and persist it.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        log::info!("Theme set to {theme}");
        self.persist_theme();
    }

    /// Switch between light and dark, returning the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// The storage the theme is kept in.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The clipboard readouts are copied to.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    fn persist_theme(&mut self) {
        if let Err(err) = self.storage.set(THEME_KEY, self.theme.as_str()) {
            log::warn!("Could not persist theme: {err}");
        }
    }
}
