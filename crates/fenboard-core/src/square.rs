//! Board squares and coordinate conversion.
//!
//! A square is addressed either by zero-based `(file, rank)` grid coordinates,
//! where `(0, 0)` is the top-left cell of an unrotated board (`a8`), or by
//! algebraic notation (`a1`..`h8`). Rank 8 is grid row 0.
//!
//! ```
//! # use fenboard_core::square::{Square, algebraic_to_coord};
//! assert_eq!(algebraic_to_coord("e4").unwrap(), (4, 4));
//!
//! let square: Square = "a8".parse().unwrap();
//! assert_eq!((square.file(), square.rank()), (0, 0));
//! assert_eq!(square.to_string(), "a8");
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 8;

/// Error raised when a square or coordinate pair is outside the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("`{0}` does not look like algebraic notation, expected a square such as `e4`")]
    Length(String),

    #[error("file `{file}` of `{input}` is outside a-h")]
    File { input: String, file: char },

    #[error("rank `{rank}` of `{input}` is outside 1-8")]
    Rank { input: String, rank: char },

    #[error("coordinate ({file}, {rank}) is outside the 8x8 board")]
    OutOfBoard { file: usize, rank: usize },
}

/// A single board square in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Creates a square from zero-based grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::OutOfBoard`] when either coordinate is not in `0..8`.
    pub fn new(file: usize, rank: usize) -> Result<Self, CoordinateError> {
        if file >= BOARD_SIZE || rank >= BOARD_SIZE {
            return Err(CoordinateError::OutOfBoard { file, rank });
        }
        Ok(Self {
            file: file as u8,
            rank: rank as u8,
        })
    }

    /// Zero-based file index, `a` = 0.
    pub fn file(self) -> usize {
        self.file as usize
    }

    /// Zero-based grid row, rank 8 = 0.
    pub fn rank(self) -> usize {
        self.rank as usize
    }

    /// Returns true for the light-colored squares (`(file + rank)` even).
    pub fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 0
    }

    /// Iterates over all 64 squares, row by row starting at `a8`.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|rank| (0..BOARD_SIZE as u8).map(move |file| Square { file, rank }))
    }

    /// The file letter of this square (`a`..`h`).
    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    /// The rank digit of this square (`1`..`8`).
    pub fn rank_char(self) -> char {
        (b'8' - self.rank) as char
    }
}

impl FromStr for Square {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (file, rank) = algebraic_to_coord(s)?;
        Square::new(file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Converts algebraic notation into `(file, rank)` grid coordinates.
///
/// The input is lower-cased first, so `E4` is accepted.
///
/// # Errors
///
/// Fails with [`CoordinateError`] unless the input is exactly two characters
/// matching `[a-h][1-8]`.
pub fn algebraic_to_coord(algebraic: &str) -> Result<(usize, usize), CoordinateError> {
    let lowered = algebraic.to_lowercase();
    let mut chars = lowered.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CoordinateError::Length(algebraic.to_string()));
    };

    if !('a'..='h').contains(&file) {
        return Err(CoordinateError::File {
            input: algebraic.to_string(),
            file,
        });
    }
    if !('1'..='8').contains(&rank) {
        return Err(CoordinateError::Rank {
            input: algebraic.to_string(),
            rank,
        });
    }

    let file_index = file as usize - 'a' as usize;
    let rank_index = BOARD_SIZE - (rank as usize - '0' as usize);
    Ok((file_index, rank_index))
}

/// Converts `(file, rank)` grid coordinates back into algebraic notation.
///
/// # Errors
///
/// Returns [`CoordinateError::OutOfBoard`] when either coordinate is not in `0..8`.
pub fn coord_to_algebraic(file: usize, rank: usize) -> Result<String, CoordinateError> {
    Square::new(file, rank).map(|square| square.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_to_coord_corners() {
        assert_eq!(algebraic_to_coord("a8").unwrap(), (0, 0));
        assert_eq!(algebraic_to_coord("h8").unwrap(), (7, 0));
        assert_eq!(algebraic_to_coord("a1").unwrap(), (0, 7));
        assert_eq!(algebraic_to_coord("h1").unwrap(), (7, 7));
        assert_eq!(algebraic_to_coord("e4").unwrap(), (4, 4));
    }

    #[test]
    fn test_algebraic_to_coord_is_case_insensitive() {
        assert_eq!(algebraic_to_coord("E4").unwrap(), (4, 4));
    }

    #[test]
    fn test_algebraic_to_coord_rejects_bad_length() {
        assert!(matches!(
            algebraic_to_coord("e"),
            Err(CoordinateError::Length(_))
        ));
        assert!(matches!(
            algebraic_to_coord("e44"),
            Err(CoordinateError::Length(_))
        ));
        assert!(matches!(
            algebraic_to_coord(""),
            Err(CoordinateError::Length(_))
        ));
    }

    #[test]
    fn test_algebraic_to_coord_rejects_out_of_range() {
        assert!(matches!(
            algebraic_to_coord("i4"),
            Err(CoordinateError::File { file: 'i', .. })
        ));
        assert!(matches!(
            algebraic_to_coord("e9"),
            Err(CoordinateError::Rank { rank: '9', .. })
        ));
        assert!(matches!(
            algebraic_to_coord("e0"),
            Err(CoordinateError::Rank { rank: '0', .. })
        ));
        assert!(algebraic_to_coord("4e").is_err());
    }

    #[test]
    fn test_coord_to_algebraic() {
        assert_eq!(coord_to_algebraic(4, 4).unwrap(), "e4");
        assert_eq!(coord_to_algebraic(0, 0).unwrap(), "a8");
        assert_eq!(
            coord_to_algebraic(8, 0),
            Err(CoordinateError::OutOfBoard { file: 8, rank: 0 })
        );
    }

    #[test]
    fn test_square_colors() {
        assert!("a8".parse::<Square>().unwrap().is_light());
        assert!(!"a1".parse::<Square>().unwrap().is_light());
        assert!("h1".parse::<Square>().unwrap().is_light());
    }

    #[test]
    fn test_square_all_covers_board() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a8");
        assert_eq!(squares[63].to_string(), "h1");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn algebraic_round_trip(s in "[a-h][1-8]") {
            let (file, rank) = algebraic_to_coord(&s).unwrap();
            prop_assert_eq!(coord_to_algebraic(file, rank).unwrap(), s);
        }

        #[test]
        fn coordinate_round_trip(file in 0usize..8, rank in 0usize..8) {
            let algebraic = coord_to_algebraic(file, rank).unwrap();
            prop_assert_eq!(algebraic_to_coord(&algebraic).unwrap(), (file, rank));
        }

        #[test]
        fn out_of_board_coordinates_fail(file in 8usize..64, rank in 0usize..64) {
            prop_assert!(coord_to_algebraic(file, rank).is_err());
            prop_assert!(coord_to_algebraic(rank, file).is_err());
        }
    }
}
