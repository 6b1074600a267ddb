//! Move-quality badges.
//!
//! Each [`IconKind`] maps through [`IconStyle::for_kind`] to a round badge
//! with a fill color and a short glyph. Badges sit in the top-right corner of
//! their square on the [`Icons`](RenderLayer::Icons) layer, above pieces.

use svg::node::element as svg_element;

use crate::{
    annotation::IconKind,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

const BADGE_RADIUS_RATIO: f32 = 0.22;
const GLYPH_SIZE_RATIO: f32 = 1.1;

/// Fill color and glyph of one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    fill: &'static str,
    glyph: &'static str,
}

impl IconStyle {
    /// Total mapping from icon kind to badge style.
    pub fn for_kind(kind: IconKind) -> Self {
        let (fill, glyph) = match kind {
            IconKind::Brilliant => ("#26c2a3", "!!"),
            IconKind::Good => ("#749bbf", "!?"),
            IconKind::Excellent => ("#96bc4b", "!"),
            IconKind::Best => ("#81b64c", "\u{2605}"),
            IconKind::Inaccuracy => ("#f7c631", "?!"),
            IconKind::Mistake => ("#ffa459", "?"),
            IconKind::Blunder => ("#fa412d", "??"),
            IconKind::Incorrect => ("#ff0000", "\u{2717}"),
            IconKind::Forced => ("#96af8b", "\u{25A1}"),
        };
        Self { fill, glyph }
    }

    pub fn fill(&self) -> &'static str {
        self.fill
    }

    pub fn glyph(&self) -> &'static str {
        self.glyph
    }
}

/// A badge for one square.
#[derive(Debug, Clone)]
pub struct IconBadge {
    kind: IconKind,
    cell_size: f32,
}

impl IconBadge {
    pub fn new(kind: IconKind, cell_size: f32) -> Self {
        Self { kind, cell_size }
    }

    pub fn kind(&self) -> IconKind {
        self.kind
    }

    fn radius(&self) -> f32 {
        self.cell_size * BADGE_RADIUS_RATIO
    }

    /// Center of the badge for a cell whose top-left corner is `position`.
    pub fn center(&self, position: Point) -> Point {
        let r = self.radius();
        position.add_point(Point::new(self.cell_size - r, r))
    }
}

impl Drawable for IconBadge {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let style = IconStyle::for_kind(self.kind);
        let center = self.center(position);
        let r = self.radius();

        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", r)
            .set("fill", style.fill())
            .set("stroke", "#ffffff")
            .set("stroke-width", 1);

        let glyph = svg_element::Text::new(style.glyph())
            .set("x", center.x())
            .set("y", center.y())
            .set("fill", "#ffffff")
            .set("font-family", "sans-serif")
            .set("font-weight", "bold")
            .set("font-size", r * GLYPH_SIZE_RATIO)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central");

        let group = svg_element::Group::new()
            .set("data-icon", self.kind.name())
            .add(circle)
            .add(glyph);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Icons, Box::new(group));
        output
    }
}
