//! Piece figurines.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, StrokeJoin},
    geometry::Point,
    piece::Piece,
};

/// Font size of a figurine relative to the cell.
pub const PIECE_SCALE: f32 = 0.85;

const FIGURINE_FONTS: &str = "'DejaVu Sans', 'Segoe UI Symbol', 'Noto Sans Symbols2', serif";

/// A piece rendered as a Unicode figurine, centered in its cell.
///
/// The side color is the fill and the outline color is the stroke, so white
/// pieces stay readable on light squares.
#[derive(Debug, Clone)]
pub struct PieceGlyph {
    piece: Piece,
    fill: Color,
    outline: StrokeDefinition,
    cell_size: f32,
}

impl PieceGlyph {
    pub fn new(piece: Piece, fill: Color, outline: Color, cell_size: f32) -> Self {
        Self {
            piece,
            fill,
            outline: StrokeDefinition::new(outline, 1.0).with_join(StrokeJoin::Round),
            cell_size,
        }
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }
}

impl Drawable for PieceGlyph {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let center = position.add_point(Point::new(self.cell_size / 2.0, self.cell_size / 2.0));

        let text = svg_element::Text::new(self.piece.kind().glyph().to_string())
            .set("x", center.x())
            .set("y", center.y())
            .set("data-piece", self.piece.to_fen_char().to_string())
            .set("font-family", FIGURINE_FONTS)
            .set("font-size", self.cell_size * PIECE_SCALE)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("fill", self.fill);
        let text = crate::apply_stroke!(text, &self.outline);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Pieces, Box::new(text));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{PieceKind, Side};

    #[test]
    fn test_piece_glyph_is_centered() {
        let knight = Piece::new(Side::White, PieceKind::Knight);
        let glyph = PieceGlyph::new(
            knight,
            Color::new("#ffffff").unwrap(),
            Color::new("#000000").unwrap(),
            40.0,
        );
        let output = glyph.render_to_layers(Point::new(40.0, 280.0));
        assert_eq!(output.layer_len(RenderLayer::Pieces), 1);

        let rendered = output.render()[0].to_string();
        assert!(rendered.contains("x=\"60\""));
        assert!(rendered.contains("y=\"300\""));
        assert!(rendered.contains("data-piece=\"N\""));
        assert!(rendered.contains('\u{265E}'));
        assert!(rendered.contains("font-size=\"34\""));
    }

    #[test]
    fn test_piece_glyph_keeps_piece() {
        let pawn = Piece::new(Side::Black, PieceKind::Pawn);
        let glyph = PieceGlyph::new(pawn, Color::default(), Color::default(), 40.0);
        assert_eq!(glyph.piece(), pawn);
    }
}
