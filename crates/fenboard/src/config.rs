//! Configuration types for board rendering.
//!
//! All types implement [`serde::Deserialize`] so that hosts can load them
//! from TOML or any other serde format. Missing keys fall back to defaults.
//!
//! - [`AppConfig`] - Top-level configuration combining board and style settings.
//! - [`BoardConfig`] - Output size, coordinate labels and last-move display.
//! - [`StyleConfig`] - Square, piece and annotation colors.
//!
//! Orientation is not part of the configuration. It is read from every block.
//!
//! # Example
//!
//! ```
//! # use fenboard::config::{AppConfig, ShowMove};
//! let config = AppConfig::default();
//! assert_eq!(config.board().width(), 320);
//! assert_eq!(config.board().show_move(), ShowMove::None);
//! assert!(config.style().light_square_color().is_ok());
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;

use fenboard_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    board: BoardConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(board: BoardConfig, style: StyleConfig) -> Self {
        Self { board, style }
    }

    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// How the last move of a PGN position is marked on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowMove {
    #[default]
    None,
    /// Highlight the source and destination squares.
    Highlight,
    /// Highlight both squares and draw an arrow between them.
    Arrow,
}

impl fmt::Display for ShowMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Highlight => "highlight",
            Self::Arrow => "arrow",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ShowMove {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "highlight" => Ok(Self::Highlight),
            "arrow" => Ok(Self::Arrow),
            _ => Err(format!(
                "unknown show_move value `{s}` (expected none, highlight or arrow)"
            )),
        }
    }
}

/// Board-level settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Pixel width (and height) of the emitted `<svg>` element.
    width: u32,
    draw_coordinates: bool,
    show_move: ShowMove,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 320,
            draw_coordinates: true,
            show_move: ShowMove::None,
        }
    }
}

impl BoardConfig {
    pub fn new(width: u32, draw_coordinates: bool, show_move: ShowMove) -> Self {
        Self {
            width,
            draw_coordinates,
            show_move,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn draw_coordinates(&self) -> bool {
        self.draw_coordinates
    }

    pub fn show_move(&self) -> ShowMove {
        self.show_move
    }

    pub fn set_show_move(&mut self, show_move: ShowMove) {
        self.show_move = show_move;
    }
}

/// Colors of the board, the pieces and the default annotations.
///
/// Colors are kept as strings and parsed on access, so a bad value is only
/// reported when the renderer is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    light_square_color: String,
    dark_square_color: String,
    white_piece_color: String,
    black_piece_color: String,
    /// Defaults to the black piece fill.
    white_piece_outline: Option<String>,
    /// Defaults to the white piece fill.
    black_piece_outline: Option<String>,
    highlight_color: String,
    arrow_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            light_square_color: "#f0d9b5".to_string(),
            dark_square_color: "#b58862".to_string(),
            white_piece_color: "#ffffff".to_string(),
            black_piece_color: "#000000".to_string(),
            white_piece_outline: None,
            black_piece_outline: None,
            highlight_color: "#b0ffb0".to_string(),
            arrow_color: "#ff6060".to_string(),
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {key} in config: {err}"))
}

impl StyleConfig {
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn light_square_color(&self) -> Result<Color, String> {
        parse_color("light_square_color", &self.light_square_color)
    }

    pub fn dark_square_color(&self) -> Result<Color, String> {
        parse_color("dark_square_color", &self.dark_square_color)
    }

    pub fn white_piece_color(&self) -> Result<Color, String> {
        parse_color("white_piece_color", &self.white_piece_color)
    }

    pub fn black_piece_color(&self) -> Result<Color, String> {
        parse_color("black_piece_color", &self.black_piece_color)
    }

    /// The outline of white pieces, falling back to the black piece fill.
    pub fn white_piece_outline(&self) -> Result<Color, String> {
        match &self.white_piece_outline {
            Some(color) => parse_color("white_piece_outline", color),
            None => self.black_piece_color(),
        }
    }

    /// The outline of black pieces, falling back to the white piece fill.
    pub fn black_piece_outline(&self) -> Result<Color, String> {
        match &self.black_piece_outline {
            Some(color) => parse_color("black_piece_outline", color),
            None => self.white_piece_color(),
        }
    }

    pub fn highlight_color(&self) -> Result<Color, String> {
        parse_color("highlight_color", &self.highlight_color)
    }

    pub fn arrow_color(&self) -> Result<Color, String> {
        parse_color("arrow_color", &self.arrow_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.board().width(), 320);
        assert!(config.board().draw_coordinates());

        let style = config.style();
        assert_eq!(
            style.light_square_color().unwrap(),
            Color::new("#f0d9b5").unwrap()
        );
        assert_eq!(
            style.dark_square_color().unwrap(),
            Color::new("#b58862").unwrap()
        );
        assert_eq!(style.highlight_color().unwrap(), Color::new("#b0ffb0").unwrap());
        assert_eq!(style.arrow_color().unwrap(), Color::new("#ff6060").unwrap());
    }

    #[test]
    fn test_outline_defaults_to_opposite_fill() {
        let style = StyleConfig::default();
        assert_eq!(style.white_piece_outline().unwrap(), style.black_piece_color().unwrap());
        assert_eq!(style.black_piece_outline().unwrap(), style.white_piece_color().unwrap());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r##"
            [board]
            width = 480
            show_move = "arrow"

            [style]
            dark_square_color = "#769656"
            white_piece_outline = "gray"
            "##,
        )
        .unwrap();

        assert_eq!(config.board().width(), 480);
        assert!(config.board().draw_coordinates());
        assert_eq!(config.board().show_move(), ShowMove::Arrow);
        assert_eq!(
            config.style().dark_square_color().unwrap(),
            Color::new("#769656").unwrap()
        );
        assert_eq!(
            config.style().light_square_color().unwrap(),
            Color::new("#f0d9b5").unwrap()
        );
        assert_eq!(
            config.style().white_piece_outline().unwrap(),
            Color::new("gray").unwrap()
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_show_move() {
        let result: Result<AppConfig, _> = toml::from_str("[board]\nshow_move = \"circle\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_color_is_reported_on_access() {
        let config: AppConfig =
            toml::from_str("[style]\nlight_square_color = \"not-a-color\"").unwrap();
        let err = config.style().light_square_color().unwrap_err();
        assert!(err.contains("light_square_color"));
    }

    #[test]
    fn test_show_move_from_str() {
        assert_eq!("highlight".parse::<ShowMove>(), Ok(ShowMove::Highlight));
        assert!("Arrow".parse::<ShowMove>().is_err());
        assert_eq!(ShowMove::Arrow.to_string(), "arrow");
    }
}
