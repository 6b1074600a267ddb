//! Board orientation.

use std::{fmt, str::FromStr};

use crate::square::{BOARD_SIZE, Square};

/// Which side is drawn at the bottom of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// White at the bottom, `a8` in the top-left cell.
    #[default]
    White,
    /// Black at the bottom, `a8` in the bottom-right cell.
    Black,
}

impl Orientation {
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Maps a square to its visual `(column, row)` cell under this orientation.
    ///
    /// ```
    /// # use fenboard_core::{orientation::Orientation, square::Square};
    /// let a8: Square = "a8".parse().unwrap();
    /// assert_eq!(Orientation::White.cell(a8), (0, 0));
    /// assert_eq!(Orientation::Black.cell(a8), (7, 7));
    /// ```
    pub fn cell(self, square: Square) -> (usize, usize) {
        match self {
            Self::White => (square.file(), square.rank()),
            Self::Black => (
                BOARD_SIZE - 1 - square.file(),
                BOARD_SIZE - 1 - square.rank(),
            ),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            _ => Err(format!("unknown orientation `{s}`")),
        }
    }
}
