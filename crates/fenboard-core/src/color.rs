//! CSS colors for squares, pieces and annotations.
//!
//! [`Color`] wraps [`DynamicColor`] from the `color` crate, so any CSS color
//! syntax is accepted in configuration (`#b58862`, `rgb(181 136 98)`,
//! `saddlebrown`), and converts straight into SVG attribute values.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Parses a CSS color string.
    ///
    /// ```
    /// use fenboard_core::color::Color;
    ///
    /// assert!(Color::new("#e67768").is_ok());
    /// assert!(Color::new("saddlebrown").is_ok());
    /// assert!(Color::new("#e6776").is_err());
    /// ```
    pub fn new(css: &str) -> Result<Self, String> {
        DynamicColor::from_str(css)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }

    /// Opacity between 0.0 and 1.0; 1.0 unless the CSS string set one.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Default for Color {
    /// Black.
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(&color)
    }
}
