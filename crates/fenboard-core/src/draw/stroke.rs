//! Outline strokes.
//!
//! Markers and piece figurines are outlined; a [`StrokeDefinition`] holds the
//! color, width and corner join of that outline and
//! [`apply_stroke!`](crate::apply_stroke!) copies it onto an SVG element:
//!
//! ```
//! use fenboard_core::{color::Color, draw::StrokeDefinition};
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("#f1ad24").unwrap(), 3.0);
//! let circle = fenboard_core::apply_stroke!(svg_element::Circle::new().set("r", 14), &stroke);
//! assert!(circle.to_string().contains("stroke-width=\"3\""));
//! ```

use crate::color::Color;

/// Corner style of an outline (`stroke-linejoin`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl StrokeJoin {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Outline of a marker or piece.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// A stroke with miter joins.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            join: StrokeJoin::default(),
        }
    }

    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn join(&self) -> StrokeJoin {
        self.join
    }
}

/// Sets `stroke`, `stroke-opacity`, `stroke-width` and `stroke-linejoin` on
/// an SVG element from a [`StrokeDefinition`].
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke: &$crate::draw::StrokeDefinition = $stroke;
        $element
            .set("stroke", stroke.color())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width())
            .set("stroke-linejoin", stroke.join().to_svg_value())
    }};
}
