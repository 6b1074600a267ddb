//! Drawable primitives for board diagrams.
//!
//! Every primitive implements [`Drawable`]: given the top-left corner of the
//! cell (or of the whole board, for arrows) it emits SVG nodes into a
//! [`LayeredOutput`], choosing its own [`RenderLayer`].

mod arrow;
mod icon;
mod layer;
mod marker;
mod piece;
mod stroke;

pub use arrow::{Arrow, ArrowDefinition, ArrowGeometry};
pub use icon::{IconBadge, IconStyle};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use marker::Marker;
pub use piece::PieceGlyph;
pub use stroke::{StrokeDefinition, StrokeJoin};

use crate::geometry::Point;

/// Default opacity of annotation primitives.
pub const ANNOTATION_OPACITY: f32 = 0.8;

pub trait Drawable: std::fmt::Debug {
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
