//! The position model.
//!
//! A [`Chessboard`] is a plain 8x8 grid of optional pieces, addressed by
//! zero-based `(file, rank)` coordinates with `(0, 0)` at `a8`, or by
//! algebraic notation. It is filled from a FEN or a PGN through a
//! [`ChessRules`] engine and is only mutated by explicit [`set`](Chessboard::set)
//! calls or a full reload.

use std::fmt;

use log::debug;

use fenboard_core::{
    piece::{Piece, Side},
    square::{BOARD_SIZE, CoordinateError, Square, algebraic_to_coord},
};

use crate::{
    error::FenboardError,
    rules::{ChessRules, FenPosition, ShakmatyRules, VerboseMove},
};

/// An 8x8 board of pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chessboard {
    squares: [Option<Piece>; BOARD_SIZE * BOARD_SIZE],
    turn: Side,
    last_move: Option<VerboseMove>,
}

impl Default for Chessboard {
    /// An empty board, white to move.
    fn default() -> Self {
        Self {
            squares: [None; BOARD_SIZE * BOARD_SIZE],
            turn: Side::White,
            last_move: None,
        }
    }
}

impl Chessboard {
    /// Loads a position from a FEN string with 1 to 6 fields.
    ///
    /// A placement-only FEN gets ` w` appended before validation. Validation
    /// rejects impossible material but takes castling rights, the en passant
    /// square and check status as written.
    /// With `skip_validation`, only the placement field is read and the
    /// board may hold positions the rules engine would reject (no kings,
    /// pawns on the back rank, ...).
    ///
    /// # Errors
    ///
    /// Returns [`FenboardError::InvalidPosition`] when the FEN is malformed
    /// or, unless validation is skipped, describes an illegal position.
    ///
    /// ```
    /// # use fenboard::board::Chessboard;
    /// let board = Chessboard::from_fen("8/8/8/8/4P3/8/8/4K2k", true).unwrap();
    /// assert_eq!(board.get_algebraic("e4").unwrap().unwrap().to_fen_char(), 'P');
    /// ```
    pub fn from_fen(fen: &str, skip_validation: bool) -> Result<Self, FenboardError> {
        let fen = fen.trim();
        if skip_validation {
            return Self::from_placement(fen.split(' ').next().unwrap_or_default());
        }

        let fen = if fen.contains(' ') {
            fen.to_string()
        } else {
            format!("{fen} w")
        };

        let position = FenPosition::validate(&fen)?;
        let mut board = Self {
            turn: position.turn(),
            ..Self::default()
        };
        for square in Square::all() {
            board.squares[index(square)] = position.piece_at(square);
        }
        Ok(board)
    }

    /// Loads a PGN game and replays it to `ply`, or to the end when `ply`
    /// is `None`. A `ply` past the end clamps to the final position.
    ///
    /// The base position is the `SetUp`/`FEN` header position when present,
    /// the standard start otherwise.
    pub fn from_pgn(pgn: &str, ply: Option<usize>) -> Result<Self, FenboardError> {
        let mut rules = ShakmatyRules::new();
        Self::from_pgn_with(&mut rules, pgn, ply)
    }

    /// Like [`from_pgn`](Self::from_pgn), using the given rules engine.
    pub fn from_pgn_with<R: ChessRules>(
        rules: &mut R,
        pgn: &str,
        ply: Option<usize>,
    ) -> Result<Self, FenboardError> {
        rules.load_pgn(pgn)?;
        let total = rules.history().len();

        if let Some(ply) = ply {
            let target = ply.min(total);
            let moves: Vec<String> = rules.history()[..target]
                .iter()
                .map(|mv| mv.san.clone())
                .collect();
            rules.reset_to_base();
            for san in &moves {
                rules.play_san(san)?;
            }
            debug!(ply = target, total; "Replayed PGN to ply");
        }

        Ok(Self::from_rules(rules))
    }

    /// Copies the current position of a rules engine.
    pub fn from_rules<R: ChessRules + ?Sized>(rules: &R) -> Self {
        let mut board = Self {
            turn: rules.turn(),
            ..Self::default()
        };
        for square in Square::all() {
            board.squares[index(square)] = rules.piece_at(square);
        }
        let played = rules.played();
        if played > 0 {
            board.last_move = rules.history().get(played - 1).cloned();
        }
        board
    }

    /// Reads only the placement field: digits skip files, letters place a
    /// piece whose side follows the letter case.
    fn from_placement(placement: &str) -> Result<Self, FenboardError> {
        let invalid = |reason: &str| {
            FenboardError::InvalidPosition(format!("placement `{placement}`: {reason}"))
        };

        let mut board = Self::default();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(invalid("expected 8 ranks"));
        }

        for (rank, row) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or_else(|| invalid(&format!("unknown piece `{c}`")))?;
                    if file >= BOARD_SIZE {
                        return Err(invalid("rank is longer than 8 files"));
                    }
                    board.squares[rank * BOARD_SIZE + file] = Some(piece);
                    file += 1;
                }
            }
            if file > BOARD_SIZE {
                return Err(invalid("rank is longer than 8 files"));
            }
        }

        Ok(board)
    }

    /// The piece at `(file, rank)`.
    pub fn get(&self, file: usize, rank: usize) -> Result<Option<Piece>, CoordinateError> {
        let square = Square::new(file, rank)?;
        Ok(self.squares[index(square)])
    }

    /// Places or clears a piece at `(file, rank)`.
    pub fn set(
        &mut self,
        file: usize,
        rank: usize,
        piece: Option<Piece>,
    ) -> Result<(), CoordinateError> {
        let square = Square::new(file, rank)?;
        self.squares[index(square)] = piece;
        Ok(())
    }

    pub fn get_algebraic(&self, algebraic: &str) -> Result<Option<Piece>, CoordinateError> {
        let (file, rank) = algebraic_to_coord(algebraic)?;
        self.get(file, rank)
    }

    pub fn set_algebraic(
        &mut self,
        algebraic: &str,
        piece: Option<Piece>,
    ) -> Result<(), CoordinateError> {
        let (file, rank) = algebraic_to_coord(algebraic)?;
        self.set(file, rank, piece)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[index(square)]
    }

    /// Occupied squares with their pieces, row by row from `a8`.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Side to move. Placement-only loads default to white.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The move that led to this position, when loaded from a PGN.
    pub fn last_move(&self) -> Option<&VerboseMove> {
        self.last_move.as_ref()
    }

    /// Renders the piece-placement field of a FEN.
    ///
    /// ```
    /// # use fenboard::board::Chessboard;
    /// let placement = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR";
    /// let board = Chessboard::from_fen(placement, true).unwrap();
    /// assert_eq!(board.to_placement(), placement);
    /// ```
    pub fn to_placement(&self) -> String {
        let mut placement = String::new();
        for rank in 0..BOARD_SIZE {
            if rank > 0 {
                placement.push('/');
            }
            let mut empty = 0;
            for file in 0..BOARD_SIZE {
                match self.squares[rank * BOARD_SIZE + file] {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
        }
        placement
    }
}

fn index(square: Square) -> usize {
    square.rank() * BOARD_SIZE + square.file()
}

impl fmt::Display for Chessboard {
    /// Prints the board with file letters and rank numbers on all four sides.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for rank in 0..BOARD_SIZE {
            let label = BOARD_SIZE - rank;
            write!(f, "{label} ")?;
            for file in 0..BOARD_SIZE {
                let c = self.squares[rank * BOARD_SIZE + file].map_or('.', Piece::to_fen_char);
                write!(f, "{c} ")?;
            }
            writeln!(f, "{label}")?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use fenboard_core::piece::PieceKind;

    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_from_fen_placement_only_is_validated_as_white_to_move() {
        let board = Chessboard::from_fen(START, false).unwrap();
        assert_eq!(board.to_placement(), START);
        assert_eq!(board.turn(), Side::White);
    }

    #[test]
    fn test_from_fen_full() {
        let board = Chessboard::from_fen(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            false,
        )
        .unwrap();
        assert_eq!(board.turn(), Side::Black);
        assert_eq!(
            board.get_algebraic("e4").unwrap(),
            Some(Piece::new(Side::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn test_from_fen_keeps_stale_castling_and_en_passant_fields() {
        let board = Chessboard::from_fen("4k3/8/8/8/8/8/8/4K3 w KQkq e6 0 1", false).unwrap();
        assert_eq!(board.pieces().count(), 2);
        assert_eq!(board.turn(), Side::White);
    }

    #[test]
    fn test_from_fen_placement_only_with_black_in_check() {
        let board = Chessboard::from_fen("4k3/8/8/8/8/8/8/4R1K1", false).unwrap();
        assert_eq!(board.turn(), Side::White);
        assert_eq!(
            board.get_algebraic("e1").unwrap(),
            Some(Piece::new(Side::White, PieceKind::Rook))
        );
        assert_eq!(board.last_move(), None);
    }

    #[test]
    fn test_from_fen_strict_rejects_illegal_position() {
        // No kings.
        let err = Chessboard::from_fen("8/8/8/8/8/8/8/8", false).unwrap_err();
        assert!(matches!(err, FenboardError::InvalidPosition(_)));
    }

    #[test]
    fn test_from_fen_skip_validation_accepts_illegal_position() {
        let board = Chessboard::from_fen("P7/8/8/8/8/8/8/8 w - - 0 1", true).unwrap();
        assert_eq!(
            board.get(0, 0).unwrap(),
            Some(Piece::new(Side::White, PieceKind::Pawn))
        );
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn test_from_fen_skip_validation_rejects_malformed_placement() {
        assert!(Chessboard::from_fen("8/8/8", true).is_err());
        assert!(Chessboard::from_fen("9/8/8/8/8/8/8/8", true).is_err());
        assert!(Chessboard::from_fen("8/8/8/8/8/8/8/7x", true).is_err());
        assert!(Chessboard::from_fen("8/8/8/8/8/8/8/8K", true).is_err());
    }

    #[test]
    fn test_get_set() {
        let mut board = Chessboard::default();
        let queen = Piece::new(Side::Black, PieceKind::Queen);

        board.set(3, 0, Some(queen)).unwrap();
        assert_eq!(board.get_algebraic("d8").unwrap(), Some(queen));

        board.set_algebraic("d8", None).unwrap();
        assert_eq!(board.get(3, 0).unwrap(), None);
    }

    #[test]
    fn test_get_set_out_of_range() {
        let mut board = Chessboard::default();
        assert!(board.get(8, 0).is_err());
        assert!(board.set(0, 8, None).is_err());
        assert!(board.get_algebraic("i1").is_err());
        assert!(board.set_algebraic("a", None).is_err());
    }

    #[test]
    fn test_from_pgn_plies() {
        let pgn = "1. e4 e5 2. Nf3 Nc6 3. Bb5";

        let start = Chessboard::from_pgn(pgn, Some(0)).unwrap();
        assert_eq!(start.to_placement(), START);
        assert!(start.last_move().is_none());

        let after_two = Chessboard::from_pgn(pgn, Some(2)).unwrap();
        assert_eq!(after_two.last_move().map(|m| m.san.as_str()), Some("e5"));
        assert_eq!(after_two.turn(), Side::White);

        let end = Chessboard::from_pgn(pgn, None).unwrap();
        let clamped = Chessboard::from_pgn(pgn, Some(99)).unwrap();
        assert_eq!(end, clamped);
        assert_eq!(end.last_move().map(|m| m.san.as_str()), Some("Bb5"));
    }

    #[test]
    fn test_display_has_labels() {
        let board = Chessboard::from_fen(START, true).unwrap();
        let printed = board.to_string();
        let lines: Vec<&str> = printed.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[5], "4 . . . . . . . . 4");
        assert_eq!(lines[9], "  a b c d e f g h");
    }
}
