//! The board renderer.
//!
//! [`BoardRenderer`] composes a [`Chessboard`], [`RenderOptions`] and its own
//! annotation lists into one layered SVG scene. All geometry goes through
//! [`BoardRenderer::to_pixel`], so flipping the orientation flips every layer
//! at once.

mod options;

pub use options::RenderOptions;

use log::{debug, info, trace};
use svg::{Document, node::element as svg_element};

use fenboard_core::{
    annotation::{Annotation, IconKind, MarkerShape},
    color::Color,
    draw::{
        ANNOTATION_OPACITY, Arrow, ArrowDefinition, Drawable, IconBadge, LayeredOutput, Marker,
        PieceGlyph, RenderLayer,
    },
    geometry::Point,
    orientation::Orientation,
    square::{BOARD_SIZE, Square},
};

use crate::{board::Chessboard, config::ShowMove, error::FenboardError, rules::VerboseMove};

/// Side of one board cell in scene units.
pub const CELL_SIZE: f32 = 40.0;

/// Side of the whole scene in scene units.
pub const BOARD_PIXELS: f32 = CELL_SIZE * BOARD_SIZE as f32;

const LABEL_FONT_SIZE: f32 = 10.0;

/// Renders one board diagram.
///
/// Annotation mutators take algebraic squares and fail with
/// [`FenboardError::InvalidCoordinate`]. They only affect the next
/// [`draw`](Self::draw).
///
/// ```
/// # use fenboard::{board::Chessboard, render::{BoardRenderer, RenderOptions}};
/// let board = Chessboard::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", false).unwrap();
/// let mut renderer = BoardRenderer::new(board, RenderOptions::default());
/// renderer.highlight("e4", None).unwrap();
/// renderer.add_arrow("e2", "e4", None).unwrap();
/// assert!(renderer.highlight("e9", None).is_err());
///
/// let svg = renderer.to_document(320).to_string();
/// assert!(svg.contains("viewBox=\"0 0 320 320\""));
/// ```
#[derive(Debug, Clone)]
pub struct BoardRenderer {
    board: Chessboard,
    options: RenderOptions,
    highlights: Vec<(Square, Color)>,
    arrows: Vec<(Square, Square, Color)>,
    markers: Vec<(Square, MarkerShape, Color)>,
    icons: Vec<(Square, IconKind)>,
    title: Option<String>,
}

impl BoardRenderer {
    pub fn new(board: Chessboard, options: RenderOptions) -> Self {
        Self {
            board,
            options,
            highlights: Vec::new(),
            arrows: Vec::new(),
            markers: Vec::new(),
            icons: Vec::new(),
            title: None,
        }
    }

    pub fn board(&self) -> &Chessboard {
        &self.board
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.options.set_orientation(orientation);
    }

    /// Sets the `<title>` of the emitted document.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Tints `square`. Without a color the configured highlight color is used.
    pub fn highlight(&mut self, square: &str, color: Option<Color>) -> Result<(), FenboardError> {
        let square: Square = square.parse()?;
        let color = color.unwrap_or_else(|| self.options.highlight_color());
        self.highlights.push((square, color));
        Ok(())
    }

    /// Removes every highlight on `square`.
    pub fn remove_highlight(&mut self, square: &str) -> Result<(), FenboardError> {
        let square: Square = square.parse()?;
        self.highlights.retain(|(s, _)| *s != square);
        Ok(())
    }

    /// Adds an arrow between two square centers. Without a color the
    /// configured arrow color is used.
    pub fn add_arrow(
        &mut self,
        from: &str,
        to: &str,
        color: Option<Color>,
    ) -> Result<(), FenboardError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        let color = color.unwrap_or_else(|| self.options.arrow_color());
        self.arrows.push((from, to, color));
        Ok(())
    }

    pub fn add_icon(&mut self, square: &str, kind: IconKind) -> Result<(), FenboardError> {
        let square: Square = square.parse()?;
        self.icons.push((square, kind));
        Ok(())
    }

    /// Outlines `square` with a marker shape. Without a color the configured
    /// arrow color is used.
    pub fn add_marker(
        &mut self,
        square: &str,
        shape: MarkerShape,
        color: Option<Color>,
    ) -> Result<(), FenboardError> {
        let square: Square = square.parse()?;
        let color = color.unwrap_or_else(|| self.options.arrow_color());
        self.markers.push((square, shape, color));
        Ok(())
    }

    /// Appends one parsed annotation.
    pub fn add_annotation(&mut self, annotation: &Annotation) {
        match annotation {
            Annotation::Highlight { square, color } => self.highlights.push((*square, *color)),
            Annotation::Arrow { from, to, color } => self.arrows.push((*from, *to, *color)),
            Annotation::Icon { square, kind } => self.icons.push((*square, *kind)),
        }
    }

    pub fn add_annotations<'a>(&mut self, annotations: impl IntoIterator<Item = &'a Annotation>) {
        for annotation in annotations {
            self.add_annotation(annotation);
        }
    }

    /// Marks a move according to `show`, using the configured default colors.
    pub fn show_move(&mut self, mv: &VerboseMove, show: ShowMove) {
        if show == ShowMove::None {
            return;
        }
        let color = self.options.highlight_color();
        self.highlights.push((mv.from, color));
        self.highlights.push((mv.to, color));
        if show == ShowMove::Arrow {
            self.arrows.push((mv.from, mv.to, self.options.arrow_color()));
        }
    }

    /// Top-left corner of `square`'s cell under the current orientation.
    ///
    /// ```
    /// # use fenboard::{board::Chessboard, render::{BoardRenderer, RenderOptions}};
    /// # use fenboard_core::{geometry::Point, orientation::Orientation};
    /// let mut renderer = BoardRenderer::new(Chessboard::default(), RenderOptions::default());
    /// let a8 = "a8".parse().unwrap();
    /// assert_eq!(renderer.to_pixel(a8), Point::new(0.0, 0.0));
    ///
    /// renderer.set_orientation(Orientation::Black);
    /// assert_eq!(renderer.to_pixel(a8), Point::new(280.0, 280.0));
    /// ```
    pub fn to_pixel(&self, square: Square) -> Point {
        let (column, row) = self.orientation().cell(square);
        Point::new(column as f32 * CELL_SIZE, row as f32 * CELL_SIZE)
    }

    fn center(&self, square: Square) -> Point {
        self.to_pixel(square)
            .add_point(Point::new(CELL_SIZE / 2.0, CELL_SIZE / 2.0))
    }

    fn draw_squares(&self, output: &mut LayeredOutput) {
        for square in Square::all() {
            let corner = self.to_pixel(square);
            let rect = svg_element::Rectangle::new()
                .set("x", corner.x())
                .set("y", corner.y())
                .set("width", CELL_SIZE)
                .set("height", CELL_SIZE)
                .set("data-square", square.to_string())
                .set("fill", self.options.square_color(square.is_light()));
            output.add_to_layer(RenderLayer::Squares, Box::new(rect));
        }
    }

    /// Rank numbers along the visual left edge, file letters along the
    /// visual bottom edge. Each label takes the color of the other square
    /// parity so it contrasts with the cell it sits on.
    fn draw_coordinates(&self, output: &mut LayeredOutput) {
        let last = BOARD_SIZE - 1;
        for square in Square::all() {
            let (column, row) = self.orientation().cell(square);
            let corner = self.to_pixel(square);
            let color = self.options.square_color(!square.is_light());

            if column == 0 {
                let label = svg_element::Text::new(square.rank_char().to_string())
                    .set("x", corner.x() + 1.0)
                    .set("y", corner.y() + LABEL_FONT_SIZE)
                    .set("font-family", "sans-serif")
                    .set("font-size", LABEL_FONT_SIZE)
                    .set("fill", color);
                output.add_to_layer(RenderLayer::Coordinates, Box::new(label));
            }
            if row == last {
                let label = svg_element::Text::new(square.file_char().to_string())
                    .set("x", corner.x() + CELL_SIZE - 7.0)
                    .set("y", corner.y() + CELL_SIZE - 2.0)
                    .set("font-family", "sans-serif")
                    .set("font-size", LABEL_FONT_SIZE)
                    .set("fill", color);
                output.add_to_layer(RenderLayer::Coordinates, Box::new(label));
            }
        }
    }

    fn draw_highlights(&self, output: &mut LayeredOutput) {
        for (square, color) in &self.highlights {
            let corner = self.to_pixel(*square);
            let rect = svg_element::Rectangle::new()
                .set("x", corner.x())
                .set("y", corner.y())
                .set("width", CELL_SIZE)
                .set("height", CELL_SIZE)
                .set("fill", *color)
                .set("opacity", ANNOTATION_OPACITY);
            output.add_to_layer(RenderLayer::Highlights, Box::new(rect));
        }
    }

    /// Builds the layered scene, bottom to top: squares, coordinates,
    /// highlights, arrows, pieces, markers, icons.
    pub fn draw(&self) -> svg_element::Group {
        info!(
            orientation:% = self.orientation(),
            highlights = self.highlights.len(),
            arrows = self.arrows.len(),
            icons = self.icons.len();
            "Drawing board"
        );

        let mut output = LayeredOutput::new();
        self.draw_squares(&mut output);
        if self.options.draw_coordinates() {
            self.draw_coordinates(&mut output);
        }
        self.draw_highlights(&mut output);

        for (from, to, color) in &self.arrows {
            let arrow = Arrow::new(
                ArrowDefinition::new(*color),
                self.center(*from),
                self.center(*to),
            );
            output.merge(arrow.render_to_layers(Point::default()));
        }

        for (square, piece) in self.board.pieces() {
            let glyph = PieceGlyph::new(
                piece,
                self.options.piece_fill(piece.side()),
                self.options.piece_outline(piece.side()),
                CELL_SIZE,
            );
            output.merge(glyph.render_to_layers(self.to_pixel(square)));
        }

        for (square, shape, color) in &self.markers {
            let marker = Marker::new(*shape, *color, CELL_SIZE);
            output.merge(marker.render_to_layers(self.to_pixel(*square)));
        }

        for (square, kind) in &self.icons {
            let badge = IconBadge::new(*kind, CELL_SIZE);
            output.merge(badge.render_to_layers(self.to_pixel(*square)));
        }

        debug!(
            squares = output.layer_len(RenderLayer::Squares),
            pieces = output.layer_len(RenderLayer::Pieces);
            "Board layers built"
        );

        let mut group = svg_element::Group::new()
            .set("class", "fenboard")
            .set("data-orientation", self.orientation().name());
        for node in output.render() {
            group = group.add(node);
        }
        trace!(placement = self.board.to_placement(); "Board drawn");
        group
    }

    /// Wraps [`draw`](Self::draw) in an SVG document with a fixed
    /// `0 0 320 320` viewBox, scaled to `width` pixels.
    pub fn to_document(&self, width: u32) -> Document {
        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {BOARD_PIXELS} {BOARD_PIXELS}"))
            .set("width", width)
            .set("height", width);
        if let Some(title) = &self.title {
            doc = doc.add(svg_element::Title::new(title.as_str()));
        }
        doc.add(self.draw())
    }
}
