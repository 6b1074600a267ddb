//! Ply-by-ply navigation over a PGN game.
//!
//! [`PgnNavigator`] is a cursor over the mainline of a game. Every transition
//! replays only the difference between the old and the new ply on the rules
//! engine, so the live position always equals the base position plus
//! `current_ply` half-moves.

use log::{debug, info};

use fenboard_core::piece::Side;

use crate::{
    board::Chessboard,
    error::FenboardError,
    rules::{ChessRules, ShakmatyRules, VerboseMove},
};

/// A cursor over the mainline of one PGN game.
///
/// ```
/// # use fenboard::navigation::PgnNavigator;
/// let mut nav = PgnNavigator::new("1. e4 e5 2. Nf3", None).unwrap();
/// assert_eq!(nav.current_ply(), 0);
/// assert_eq!(nav.caption(), "Starting position (0/3)");
///
/// nav.end().unwrap();
/// assert_eq!(nav.caption(), "Move 2: Nf3 (3/3)");
///
/// nav.previous().unwrap();
/// assert_eq!(nav.caption(), "Move 1: ...e5 (2/3)");
/// ```
#[derive(Debug)]
pub struct PgnNavigator<R: ChessRules = ShakmatyRules> {
    rules: R,
    moves: Vec<VerboseMove>,
    current_ply: usize,
}

impl PgnNavigator<ShakmatyRules> {
    /// Loads `pgn` and moves to `initial_ply` (clamped), or to the start when
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`FenboardError::InvalidPosition`] if the PGN holds an illegal
    /// move or an invalid `SetUp` position.
    pub fn new(pgn: &str, initial_ply: Option<usize>) -> Result<Self, FenboardError> {
        Self::with_rules(ShakmatyRules::new(), pgn, initial_ply)
    }
}

impl<R: ChessRules> PgnNavigator<R> {
    /// Like [`new`](PgnNavigator::new), with a caller-supplied rules engine.
    pub fn with_rules(
        mut rules: R,
        pgn: &str,
        initial_ply: Option<usize>,
    ) -> Result<Self, FenboardError> {
        rules.load_pgn(pgn)?;
        let moves = rules.history().to_vec();
        rules.reset_to_base();
        info!(plies = moves.len(); "PGN navigator ready");

        let mut navigator = Self {
            rules,
            moves,
            current_ply: 0,
        };
        if let Some(ply) = initial_ply {
            navigator.go_to_ply(ply)?;
        }
        Ok(navigator)
    }

    pub fn current_ply(&self) -> usize {
        self.current_ply
    }

    pub fn total_plies(&self) -> usize {
        self.moves.len()
    }

    pub fn moves(&self) -> &[VerboseMove] {
        &self.moves
    }

    pub fn headers(&self) -> &[(String, String)] {
        self.rules.headers()
    }

    /// The half-move that led to the current ply; `None` at ply 0.
    pub fn last_move(&self) -> Option<&VerboseMove> {
        self.current_ply
            .checked_sub(1)
            .and_then(|index| self.moves.get(index))
    }

    pub fn can_go_back(&self) -> bool {
        self.current_ply > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_ply < self.total_plies()
    }

    pub fn start(&mut self) -> Result<(), FenboardError> {
        self.go_to_ply(0)
    }

    /// Steps back one ply. A no-op at the start.
    pub fn previous(&mut self) -> Result<(), FenboardError> {
        self.go_to_ply(self.current_ply.saturating_sub(1))
    }

    /// Steps forward one ply. A no-op at the end.
    pub fn next(&mut self) -> Result<(), FenboardError> {
        self.go_to_ply(self.current_ply + 1)
    }

    pub fn end(&mut self) -> Result<(), FenboardError> {
        self.go_to_ply(self.total_plies())
    }

    /// Moves to `ply`, clamped to `0..=total_plies`.
    ///
    /// Going backwards undoes moves one by one; if the engine runs out of
    /// moves to undo it is reset to the base position and replayed forward.
    pub fn go_to_ply(&mut self, ply: usize) -> Result<(), FenboardError> {
        let target = ply.min(self.total_plies());

        if target == 0 {
            self.rules.reset_to_base();
        }
        while self.rules.played() > target {
            if self.rules.undo().is_none() {
                self.rules.reset_to_base();
                break;
            }
        }
        while self.rules.played() < target {
            let san = &self.moves[self.rules.played()].san;
            self.rules.play_san(san)?;
        }

        debug!(from = self.current_ply, to = target; "Moved to ply");
        self.current_ply = target;
        Ok(())
    }

    /// A snapshot of the position at the current ply.
    pub fn board(&self) -> Chessboard {
        Chessboard::from_rules(&self.rules)
    }

    /// The move caption followed by a `(ply/total)` progress suffix.
    pub fn caption(&self) -> String {
        format!(
            "{} ({}/{})",
            format_move_display(self.last_move(), self.current_ply),
            self.current_ply,
            self.total_plies()
        )
    }
}

/// Formats the move that produced `ply`.
///
/// Ply `p` belongs to move `(p - 1) / 2 + 1`. Black moves are prefixed with
/// `...`. Ply 0, or a missing move, is the starting position.
///
/// ```
/// # use fenboard::navigation::format_move_display;
/// assert_eq!(format_move_display(None, 0), "Starting position");
/// ```
pub fn format_move_display(last_move: Option<&VerboseMove>, ply: usize) -> String {
    match last_move {
        Some(mv) if ply > 0 => {
            let number = (ply - 1) / 2 + 1;
            match mv.side {
                Side::White => format!("Move {number}: {}", mv.san),
                Side::Black => format!("Move {number}: ...{}", mv.san),
            }
        }
        _ => "Starting position".to_string(),
    }
}
