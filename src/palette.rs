use crate::color::Color;
use serde::{Deserialize, Serialize};

/// The built-in colors every palette starts with.
pub const DEFAULT_COLORS: [&str; 15] = [
    "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF",
    "#808080", "#800000", "#808000", "#008000", "#800080", "#008080", "#000080",
];

/// A color palette: the fixed defaults plus user-added custom colors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Palette {
    custom: Vec<Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// All selectable colors, defaults first, custom colors after.
    pub fn colors(&self) -> Vec<Color> {
        DEFAULT_COLORS
            .iter()
            .map(|&token| Color::new(token))
            .chain(self.custom.iter().cloned())
            .collect()
    }

    pub fn custom_colors(&self) -> &[Color] {
        &self.custom
    }

    /// Add a custom color. Returns `false` if the color is already present
    /// (as a default or a previous custom entry).
    pub fn add_custom(&mut self, color: Color) -> bool {
        let is_default = DEFAULT_COLORS.iter().any(|&token| token == color.as_str());
        if is_default || self.custom.contains(&color) {
            return false;
        }
        self.custom.push(color);
        true
    }

    /// Remove a custom color. Defaults cannot be removed.
    pub fn remove_custom(&mut self, color: &Color) -> bool {
        let before = self.custom.len();
        self.custom.retain(|c| c != color);
        self.custom.len() != before
    }
}
