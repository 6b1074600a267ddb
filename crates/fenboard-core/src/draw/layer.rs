//! Layer-based z-ordering for SVG output.
//!
//! Drawables push nodes tagged with a [`RenderLayer`] into a
//! [`LayeredOutput`]. Rendering sorts the nodes by layer (stable, so insertion
//! order is kept within a layer) and wraps each layer in its own group.
//!
//! ```
//! # use fenboard_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Pieces, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Squares, Box::new(Rectangle::new()));
//!
//! // Squares render first even though they were added last.
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers of a board diagram, bottom to top.
///
/// The `Ord` derive follows declaration order, so the first variant is drawn
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// The 64 board cells
    Squares,
    /// Rank numbers and file letters
    Coordinates,
    /// Tinted squares, under the pieces
    Highlights,
    /// Arrows, under the pieces
    Arrows,
    Pieces,
    /// Square outlines (circle, square, squircle)
    Markers,
    /// Move-quality badges, always on top
    Icons,
}

impl RenderLayer {
    /// Returns the name emitted in the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Squares => "squares",
            Self::Coordinates => "coordinates",
            Self::Highlights => "highlights",
            Self::Arrows => "arrows",
            Self::Pieces => "pieces",
            Self::Markers => "markers",
            Self::Icons => "icons",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to `layer`.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Moves every node of `other` into this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes collected for `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. Layers
    /// are emitted bottom to top; empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::Rectangle;

    use super::*;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Squares, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Icons, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.layer_len(RenderLayer::Squares), 1);
        assert_eq!(output1.layer_len(RenderLayer::Icons), 1);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_layered_output_same_layer_single_group() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Pieces, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Pieces, Box::new(Rectangle::new()));

        assert_eq!(output.render().len(), 1);
    }

    #[test]
    fn test_layered_output_render_order() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Icons, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Pieces, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Highlights, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Squares, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();
        let order: Vec<&str> = ["squares", "highlights", "pieces", "icons"].to_vec();
        for (node, name) in rendered.iter().zip(order) {
            assert!(
                node.contains(&format!("data-layer=\"{name}\"")),
                "expected layer {name} in {node}"
            );
        }
    }

    #[test]
    fn test_render_layer_order() {
        assert!(RenderLayer::Highlights < RenderLayer::Pieces);
        assert!(RenderLayer::Arrows < RenderLayer::Pieces);
        assert!(RenderLayer::Pieces < RenderLayer::Markers);
        assert!(RenderLayer::Markers < RenderLayer::Icons);
    }
}
