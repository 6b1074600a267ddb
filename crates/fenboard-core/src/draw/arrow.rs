//! Board arrows.
//!
//! An arrow is a filled 7-point polygon: a straight shaft ending in a
//! triangular head. The polygon is laid out pointing right from the start
//! point, with total length equal to the distance between the endpoints, and
//! then rotated about the start point by `atan2(dy, dx)` so the tip lands on
//! the end point.
//!
//! ```text
//!                     2
//!                     |\
//!   0-----------------1 \
//!   |                    3   <- tip
//!   6-----------------5 /
//!                     |/
//!                     4
//! ```

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{ANNOTATION_OPACITY, Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Visual parameters of an arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowDefinition {
    color: Color,
    half_width: f32,
    head_length: f32,
    head_half_height: f32,
    opacity: f32,
}

impl ArrowDefinition {
    /// Creates an arrow definition with the default proportions: shaft
    /// half-width 5, head length 20, head half-height 10, opacity 0.8.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            half_width: 5.0,
            head_length: 20.0,
            head_half_height: 10.0,
            opacity: ANNOTATION_OPACITY,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn head_length(&self) -> f32 {
        self.head_length
    }

    pub fn head_half_height(&self) -> f32 {
        self.head_half_height
    }

    /// Sets the opacity, clamped to `0.0..=1.0`.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_shaft_half_width(mut self, half_width: f32) -> Self {
        self.half_width = half_width;
        self
    }

    pub fn with_head(mut self, length: f32, half_height: f32) -> Self {
        self.head_length = length;
        self.head_half_height = half_height;
        self
    }
}

/// The computed outline of an arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    points: [Point; 7],
    angle: f32,
}

impl ArrowGeometry {
    /// Computes the polygon for an arrow from `start` to `end`.
    ///
    /// When the endpoints are closer than the head length the shaft length
    /// clamps to zero and only the head is visible.
    pub fn new(start: Point, end: Point, definition: &ArrowDefinition) -> Self {
        let length = start.distance(end);
        let delta = end.sub_point(start);
        let angle = delta.y().atan2(delta.x());

        let shaft = (length - definition.head_length).max(0.0);
        let hw = definition.half_width;
        let hh = definition.head_half_height;

        let unrotated = [
            Point::new(0.0, -hw),
            Point::new(shaft, -hw),
            Point::new(shaft, -hh),
            Point::new(length, 0.0),
            Point::new(shaft, hh),
            Point::new(shaft, hw),
            Point::new(0.0, hw),
        ];

        let points = unrotated.map(|p| start.add_point(p).rotate_around(start, angle));

        Self { points, angle }
    }

    pub fn points(&self) -> &[Point; 7] {
        &self.points
    }

    /// The arrow tip, equal to the end point.
    pub fn tip(&self) -> Point {
        self.points[3]
    }

    /// Rotation applied to the right-pointing layout, in degrees.
    pub fn rotation_degrees(&self) -> f32 {
        self.angle.to_degrees()
    }

    /// Formats the points for an SVG `points` attribute.
    pub fn to_svg_points(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An arrow between two points, in board pixel space.
#[derive(Debug, Clone)]
pub struct Arrow {
    definition: ArrowDefinition,
    start: Point,
    end: Point,
}

impl Arrow {
    pub fn new(definition: ArrowDefinition, start: Point, end: Point) -> Self {
        Self {
            definition,
            start,
            end,
        }
    }

    pub fn geometry(&self) -> ArrowGeometry {
        ArrowGeometry::new(self.start, self.end, &self.definition)
    }
}

impl Drawable for Arrow {
    /// Renders the arrow with both endpoints offset by `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let geometry = ArrowGeometry::new(
            self.start.add_point(position),
            self.end.add_point(position),
            &self.definition,
        );

        let polygon = svg_element::Polygon::new()
            .set("points", geometry.to_svg_points())
            .set("fill", self.definition.color())
            .set("opacity", self.definition.opacity());

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Arrows, Box::new(polygon));
        output
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn tip_lands_on_end_point(
            x0 in 0f32..320.0, y0 in 0f32..320.0,
            x1 in 0f32..320.0, y1 in 0f32..320.0,
        ) {
            let def = ArrowDefinition::new(Color::default());
            let geometry = ArrowGeometry::new(Point::new(x0, y0), Point::new(x1, y1), &def);
            prop_assert!((geometry.tip().x() - x1).abs() < 1e-2);
            prop_assert!((geometry.tip().y() - y1).abs() < 1e-2);
        }

        #[test]
        fn rotation_preserves_distance_from_start(
            x1 in 0f32..320.0, y1 in 0f32..320.0,
        ) {
            let start = Point::new(160.0, 160.0);
            let def = ArrowDefinition::new(Color::default());
            let geometry = ArrowGeometry::new(start, Point::new(x1, y1), &def);
            let half_width = geometry.points()[0].distance(start);
            prop_assert!((half_width - 5.0).abs() < 1e-3);
        }
    }
}
