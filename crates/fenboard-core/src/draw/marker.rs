//! Square outline markers: circle, square and squircle.
//!
//! Shapes are computed relative to the top-left corner of a cell and its side
//! length. The circle has a radius of 35% of the side; the square and squircle
//! occupy 70% of the cell with 15% padding on each side, and the squircle
//! rounds its corners with a radius of 25% of its own side.

use svg::node::element as svg_element;

use crate::{
    annotation::MarkerShape,
    color::Color,
    draw::{ANNOTATION_OPACITY, Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

const CIRCLE_RADIUS_RATIO: f32 = 0.35;
const BOX_RATIO: f32 = 0.7;
const BOX_PADDING_RATIO: f32 = 0.15;
const SQUIRCLE_CORNER_RATIO: f32 = 0.25;
const MARKER_STROKE_WIDTH: f32 = 3.0;

/// An outline marker sized to one board cell.
#[derive(Debug, Clone)]
pub struct Marker {
    shape: MarkerShape,
    stroke: StrokeDefinition,
    cell_size: f32,
    opacity: f32,
}

impl Marker {
    pub fn new(shape: MarkerShape, color: Color, cell_size: f32) -> Self {
        Self {
            shape,
            stroke: StrokeDefinition::new(color, MARKER_STROKE_WIDTH),
            cell_size,
            opacity: ANNOTATION_OPACITY,
        }
    }

    pub fn shape(&self) -> MarkerShape {
        self.shape
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    fn circle(&self, position: Point) -> svg_element::Circle {
        let center = position.add_point(Point::new(self.cell_size / 2.0, self.cell_size / 2.0));
        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", self.cell_size * CIRCLE_RADIUS_RATIO)
            .set("fill", "none")
            .set("opacity", self.opacity);
        crate::apply_stroke!(circle, &self.stroke)
    }

    fn square(&self, position: Point) -> svg_element::Rectangle {
        let padding = self.cell_size * BOX_PADDING_RATIO;
        let side = self.cell_size * BOX_RATIO;
        let rect = svg_element::Rectangle::new()
            .set("x", position.x() + padding)
            .set("y", position.y() + padding)
            .set("width", side)
            .set("height", side)
            .set("fill", "none")
            .set("opacity", self.opacity);
        crate::apply_stroke!(rect, &self.stroke)
    }

    /// Four straight edges joined by quadratic corners.
    fn squircle(&self, position: Point) -> svg_element::Path {
        let padding = self.cell_size * BOX_PADDING_RATIO;
        let side = self.cell_size * BOX_RATIO;
        let r = side * SQUIRCLE_CORNER_RATIO;
        let (x, y) = (position.x() + padding, position.y() + padding);
        let (right, bottom) = (x + side, y + side);

        let path_data = format!(
            "M {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} Z",
            x + r,
            y, // Top edge
            right - r,
            y,
            right,
            y,
            right,
            y + r, // Top-right corner
            right,
            bottom - r,
            right,
            bottom,
            right - r,
            bottom, // Bottom-right corner
            x + r,
            bottom,
            x,
            bottom,
            x,
            bottom - r, // Bottom-left corner
            x,
            y + r,
            x,
            y,
            x + r,
            y // Top-left corner
        );

        let path = svg_element::Path::new()
            .set("d", path_data)
            .set("fill", "none")
            .set("opacity", self.opacity);
        crate::apply_stroke!(path, &self.stroke)
    }
}

impl Drawable for Marker {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let node: Box<dyn svg::Node> = match self.shape {
            MarkerShape::Circle => Box::new(self.circle(position)),
            MarkerShape::Square => Box::new(self.square(position)),
            MarkerShape::Squircle => Box::new(self.squircle(position)),
        };
        output.add_to_layer(RenderLayer::Markers, node);
        output
    }
}
