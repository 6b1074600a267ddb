//! The chess-rules capability behind the position model.
//!
//! Move legality, FEN validation and SAN resolution are delegated to an
//! implementation of [`ChessRules`]. [`ShakmatyRules`] is the default,
//! backed by the `shakmaty` crate.

use std::fmt;

use log::{debug, trace};
use shakmaty::{
    CastlingMode, Chess, File, Move, Position, PositionError, PositionErrorKinds, Role, Setup,
    Square as EngineSquare, fen::Fen, san::SanPlus,
};

use fenboard_core::{
    piece::{Piece, PieceKind, Side},
    square::Square,
};

use crate::{error::FenboardError, pgn::PgnGame};

/// One half-move with the detail needed for captions and last-move display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerboseMove {
    /// The side that made the move.
    pub side: Side,
    pub from: Square,
    /// Destination; for castling this is the king's destination square.
    pub to: Square,
    /// Standard algebraic notation, including check markers.
    pub san: String,
}

impl fmt::Display for VerboseMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.san, self.from, self.to)
    }
}

/// Narrow interface to a chess-rules engine.
///
/// The engine keeps a *base* position (the standard start, a loaded FEN or a
/// PGN `SetUp` position) and a stack of moves played on top of it.
pub trait ChessRules {
    /// Replaces the base position with a FEN and clears all moves and headers.
    fn load_fen(&mut self, fen: &str) -> Result<(), FenboardError>;

    /// Loads a PGN game: the base becomes the `SetUp` position (or the
    /// standard start), every mainline move is played and recorded in
    /// [`history`](Self::history).
    fn load_pgn(&mut self, pgn: &str) -> Result<(), FenboardError>;

    /// Header tags of the last loaded PGN.
    fn headers(&self) -> &[(String, String)];

    /// The full mainline of the last loaded PGN.
    fn history(&self) -> &[VerboseMove];

    /// The piece on `square` in the current position.
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// The side to move in the current position.
    fn turn(&self) -> Side;

    /// Plays a SAN move on the current position.
    fn play_san(&mut self, san: &str) -> Result<VerboseMove, FenboardError>;

    /// Takes back the last played move, if any.
    fn undo(&mut self) -> Option<VerboseMove>;

    /// Drops every played move, returning to the base position.
    fn reset_to_base(&mut self);

    /// Number of moves currently played on top of the base position.
    fn played(&self) -> usize;
}

/// [`ChessRules`] backed by `shakmaty`.
#[derive(Debug, Clone, Default)]
pub struct ShakmatyRules {
    base: Chess,
    /// Positions after each played move, paired with the move.
    stack: Vec<(Chess, VerboseMove)>,
    headers: Vec<(String, String)>,
    history: Vec<VerboseMove>,
}

impl ShakmatyRules {
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self) -> &Chess {
        self.stack.last().map_or(&self.base, |(pos, _)| pos)
    }

    fn position_from_fen(fen: &str) -> Result<Chess, FenboardError> {
        parse_fen(fen)?
            .into_position::<Chess>(CastlingMode::Standard)
            .or_else(tolerate_stale_fields)
            .map_err(|err| FenboardError::InvalidPosition(format!("`{fen}`: {err}")))
    }
}

/// Placement and side to move of a FEN that passed validation.
///
/// Unlike a loaded [`ShakmatyRules`] base, this may describe a position
/// where the side not to move is in check: it is only ever drawn, never
/// played from.
#[derive(Debug, Clone)]
pub struct FenPosition {
    setup: Setup,
}

impl FenPosition {
    /// Validates `fen` without replaying any history.
    ///
    /// Syntax errors and impossible material (missing or extra kings, pawns
    /// on the back rank, ...) are rejected. Castling rights, the en passant
    /// square and check status are taken as written.
    ///
    /// # Errors
    ///
    /// Returns [`FenboardError::InvalidPosition`] naming the FEN.
    pub fn validate(fen: &str) -> Result<Self, FenboardError> {
        let parsed = parse_fen(fen)?;
        let setup = parsed.as_setup().clone();

        match parsed
            .into_position::<Chess>(CastlingMode::Standard)
            .or_else(tolerate_stale_fields)
        {
            Ok(_) => {}
            Err(err) if err.kinds() == PositionErrorKinds::OPPOSITE_CHECK => {
                debug!(fen; "Accepted FEN with side not to move in check");
            }
            Err(err) => {
                return Err(FenboardError::InvalidPosition(format!("`{fen}`: {err}")));
            }
        }

        Ok(Self { setup })
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let engine_square = to_engine_square(square)?;
        self.setup
            .board
            .piece_at(engine_square)
            .map(|piece| Piece::new(side_of(piece.color), kind_of(piece.role)))
    }

    pub fn turn(&self) -> Side {
        side_of(self.setup.turn)
    }
}

fn parse_fen(fen: &str) -> Result<Fen, FenboardError> {
    fen.trim()
        .parse()
        .map_err(|err| FenboardError::InvalidPosition(format!("`{fen}`: {err}")))
}

/// Drops the position errors a diagram does not care about.
fn tolerate_stale_fields(err: PositionError<Chess>) -> Result<Chess, PositionError<Chess>> {
    err.ignore_invalid_castling_rights()
        .or_else(PositionError::ignore_invalid_ep_square)
        .or_else(PositionError::ignore_impossible_check)
}

impl ChessRules for ShakmatyRules {
    fn load_fen(&mut self, fen: &str) -> Result<(), FenboardError> {
        self.base = Self::position_from_fen(fen)?;
        self.stack.clear();
        self.headers.clear();
        self.history.clear();
        debug!(fen; "Loaded FEN");
        Ok(())
    }

    fn load_pgn(&mut self, pgn: &str) -> Result<(), FenboardError> {
        let game = PgnGame::scan(pgn);
        let base = match game.setup_fen() {
            Some(fen) => Self::position_from_fen(fen)?,
            None => Chess::default(),
        };

        self.base = base;
        self.stack.clear();
        self.history.clear();
        self.headers = game.headers().to_vec();

        for san in game.sans() {
            let mv = self.play_san(san)?;
            self.history.push(mv);
        }

        debug!(
            headers = self.headers.len(),
            plies = self.history.len(),
            custom_start = game.setup_fen().is_some();
            "Loaded PGN"
        );
        Ok(())
    }

    fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    fn history(&self) -> &[VerboseMove] {
        &self.history
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        let engine_square = to_engine_square(square)?;
        self.current()
            .board()
            .piece_at(engine_square)
            .map(|piece| Piece::new(side_of(piece.color), kind_of(piece.role)))
    }

    fn turn(&self) -> Side {
        side_of(self.current().turn())
    }

    fn play_san(&mut self, san: &str) -> Result<VerboseMove, FenboardError> {
        let ply = self.stack.len() + 1;
        let illegal =
            |reason: String| FenboardError::InvalidPosition(format!("move {ply} `{san}`: {reason}"));

        let san_plus: SanPlus = san.parse().map_err(|err| illegal(format!("{err}")))?;
        let position = self.current().clone();
        let mv = san_plus
            .san
            .to_move(&position)
            .map_err(|err| illegal(format!("{err}")))?;

        let side = side_of(position.turn());
        let (from, to) = move_squares(&mv)
            .ok_or_else(|| illegal("move has no source square".to_string()))?;
        let next = position
            .play(mv)
            .map_err(|err| illegal(format!("{err}")))?;

        let verbose = VerboseMove {
            side,
            from,
            to,
            san: san_plus.to_string(),
        };
        trace!(ply, verbose:% = verbose; "Played move");
        self.stack.push((next, verbose.clone()));
        Ok(verbose)
    }

    fn undo(&mut self) -> Option<VerboseMove> {
        self.stack.pop().map(|(_, mv)| mv)
    }

    fn reset_to_base(&mut self) {
        self.stack.clear();
    }

    fn played(&self) -> usize {
        self.stack.len()
    }
}

fn side_of(color: shakmaty::Color) -> Side {
    match color {
        shakmaty::Color::White => Side::White,
        shakmaty::Color::Black => Side::Black,
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::King => PieceKind::King,
        Role::Queen => PieceKind::Queen,
        Role::Rook => PieceKind::Rook,
        Role::Bishop => PieceKind::Bishop,
        Role::Knight => PieceKind::Knight,
        Role::Pawn => PieceKind::Pawn,
    }
}

fn to_engine_square(square: Square) -> Option<EngineSquare> {
    square.to_string().parse().ok()
}

fn from_engine_square(square: EngineSquare) -> Option<Square> {
    square.to_string().parse().ok()
}

/// Source and destination of a move. Castling reports the king's
/// destination (g- or c-file) rather than the rook square.
fn move_squares(mv: &Move) -> Option<(Square, Square)> {
    let (from, to) = match *mv {
        Move::Normal { from, to, .. } | Move::EnPassant { from, to } => (from, to),
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            (king, EngineSquare::from_coords(file, king.rank()))
        }
        Move::Put { .. } => return None,
    };
    Some((from_engine_square(from)?, from_engine_square(to)?))
}
