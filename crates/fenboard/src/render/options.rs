//! Immutable per-render options.

use fenboard_core::{color::Color, orientation::Orientation, piece::Side};

use crate::{config::AppConfig, error::FenboardError};

/// Resolved rendering options: every configured color parsed, plus the
/// orientation read from the block.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    orientation: Orientation,
    draw_coordinates: bool,
    light_square: Color,
    dark_square: Color,
    white_fill: Color,
    black_fill: Color,
    white_outline: Color,
    black_outline: Color,
    highlight_color: Color,
    arrow_color: Color,
}

impl RenderOptions {
    /// Builds options from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FenboardError::Config`] if any configured color cannot be
    /// parsed.
    pub fn from_config(config: &AppConfig, orientation: Orientation) -> Result<Self, FenboardError> {
        let style = config.style();
        Ok(Self {
            orientation,
            draw_coordinates: config.board().draw_coordinates(),
            light_square: style.light_square_color().map_err(FenboardError::Config)?,
            dark_square: style.dark_square_color().map_err(FenboardError::Config)?,
            white_fill: style.white_piece_color().map_err(FenboardError::Config)?,
            black_fill: style.black_piece_color().map_err(FenboardError::Config)?,
            white_outline: style.white_piece_outline().map_err(FenboardError::Config)?,
            black_outline: style.black_piece_outline().map_err(FenboardError::Config)?,
            highlight_color: style.highlight_color().map_err(FenboardError::Config)?,
            arrow_color: style.arrow_color().map_err(FenboardError::Config)?,
        })
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_draw_coordinates(mut self, draw_coordinates: bool) -> Self {
        self.draw_coordinates = draw_coordinates;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub(crate) fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn draw_coordinates(&self) -> bool {
        self.draw_coordinates
    }

    /// The fill of a square given its light/dark parity.
    pub fn square_color(&self, light: bool) -> Color {
        if light {
            self.light_square
        } else {
            self.dark_square
        }
    }

    pub fn piece_fill(&self, side: Side) -> Color {
        match side {
            Side::White => self.white_fill,
            Side::Black => self.black_fill,
        }
    }

    pub fn piece_outline(&self, side: Side) -> Color {
        match side {
            Side::White => self.white_outline,
            Side::Black => self.black_outline,
        }
    }

    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    pub fn arrow_color(&self) -> Color {
        self.arrow_color
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default(), Orientation::default())
            .expect("default style colors are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.orientation(), Orientation::White);
        assert!(options.draw_coordinates());
        assert_eq!(options.square_color(true), Color::new("#f0d9b5").unwrap());
        assert_eq!(options.square_color(false), Color::new("#b58862").unwrap());
        assert_eq!(options.piece_outline(Side::White), options.piece_fill(Side::Black));
        assert_eq!(options.piece_outline(Side::Black), options.piece_fill(Side::White));
    }

    #[test]
    fn test_bad_color_is_config_error() {
        let config: AppConfig = toml::from_str("[style]\narrow_color = \"#zzzzzz\"").unwrap();
        let err = RenderOptions::from_config(&config, Orientation::Black).unwrap_err();
        assert!(matches!(err, FenboardError::Config(_)));
        assert!(err.to_string().contains("arrow_color"));
    }
}
