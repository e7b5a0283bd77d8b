//! Saved color and opacity pairs. Kept in memory only.

use serde::Serialize;

use crate::{color::Component, css::rgba_string, Rgb8};

/// A saved color with its opacity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Favorite {
    /// The saved color.
    pub color: Rgb8,
    /// The saved opacity.
    pub alpha: Component,
}

impl Favorite {
    /// Create a new favorite.
    pub fn new(color: Rgb8, alpha: Component) -> Self {
        Self { color, alpha }
    }

    /// The `rgba()` string used to paint the favorite's swatch.
    pub fn swatch(&self) -> String {
        rgba_string(self.color, self.alpha)
    }

    /// Tooltip text describing the favorite.
    pub fn title(&self) -> String {
        format!("HEX: {} | Alpha: {}", self.color, self.alpha)
    }
}

/// An ordered list of favorites where no two entries share both color and
/// alpha.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Favorites {
    entries: Vec<Favorite>,
}

impl Favorites {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `favorite` unless an identical entry is already saved. Returns
    /// whether it was added.
    pub fn insert(&mut self, favorite: Favorite) -> bool {
        if self.contains(&favorite) {
            return false;
        }
        self.entries.push(favorite);
        true
    }

    /// Whether an entry with the same color and alpha is saved.
    pub fn contains(&self, favorite: &Favorite) -> bool {
        self.entries.iter().any(|f| f == favorite)
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries in the order they were saved.
    pub fn iter(&self) -> std::slice::Iter<'_, Favorite> {
        self.entries.iter()
    }

    /// The entries in the order they were saved.
    pub fn as_slice(&self) -> &[Favorite] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Favorites {
    type Item = &'a Favorite;
    type IntoIter = std::slice::Iter<'a, Favorite>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgb8 = Rgb8::new(52, 152, 219);

    #[test]
    fn same_pair_is_saved_once() {
        let mut favorites = Favorites::new();
        assert!(favorites.insert(Favorite::new(BLUE, 1.0)));
        assert!(!favorites.insert(Favorite::new(BLUE, 1.0)));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn differing_alpha_adds_an_entry() {
        let mut favorites = Favorites::new();
        favorites.insert(Favorite::new(BLUE, 1.0));
        assert!(favorites.insert(Favorite::new(BLUE, 0.5)));
        assert!(favorites.insert(Favorite::new(Rgb8::new(0, 0, 0), 0.5)));
        assert_eq!(
            favorites.as_slice(),
            &[
                Favorite::new(BLUE, 1.0),
                Favorite::new(BLUE, 0.5),
                Favorite::new(Rgb8::new(0, 0, 0), 0.5),
            ]
        );
    }

    #[test]
    fn swatch_and_title() {
        let favorite = Favorite::new(BLUE, 0.75);
        assert_eq!(favorite.swatch(), "rgba(52, 152, 219, 0.75)");
        assert_eq!(favorite.title(), "HEX: #3498db | Alpha: 0.75");
    }

    #[test]
    fn serializes_as_a_list() {
        let mut favorites = Favorites::new();
        assert_eq!(serde_json::to_string(&favorites).unwrap(), "[]");
        favorites.insert(Favorite::new(BLUE, 1.0));
        assert_eq!(
            serde_json::to_string(&favorites).unwrap(),
            r##"[{"color":"#3498db","alpha":1.0}]"##
        );
    }
}
