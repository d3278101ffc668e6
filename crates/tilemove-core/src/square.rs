//! Board squares addressed by (row, column).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::square_set::SquareSet;

/// A square on the 8x8 board, encoded as a `u8` in row-major order.
///
/// Index = row * 8 + column. Row 0 is the top edge of the board (Black's
/// back rank, algebraic rank 8) and row 7 the bottom edge (White's back rank,
/// rank 1). Column 0 is file a.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Number of rows (and columns) on the board.
    pub const SIDE: i8 = 8;

    /// Create a square from a row and column, returning `None` if either is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Return `true` if both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_valid(row: i8, col: i8) -> bool {
        row >= 0 && row < Self::SIDE && col >= 0 && col < Self::SIDE
    }

    /// Create a square from signed coordinates, filtering anything off the board.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Square> {
        if Self::is_valid(row, col) {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square from a zero-based index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse algebraic notation (e.g. "e2") into a square.
    ///
    /// Rank 8 maps to row 0 and rank 1 to row 7, so "e2" is (6, 4).
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Square::new(b'8' - rank_byte, file_byte - b'a')
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Return the column (0..7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Return the square displaced by `(d_row, d_col)`, or `None` if it falls off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        match (
            (self.row() as i8).checked_add(d_row),
            (self.col() as i8).checked_add(d_col),
        ) {
            (Some(row), Some(col)) => Square::from_coords(row, col),
            _ => None,
        }
    }

    /// Return a set containing only this square.
    #[inline]
    pub const fn set(self) -> SquareSet {
        SquareSet::new(1u64 << self.0)
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    /// Accepts algebraic notation (`e2`) or a `row,col` pair (`6,4`).
    fn from_str(s: &str) -> Result<Square, ParseError> {
        let s = s.trim();
        let parsed = match s.split_once(',') {
            Some((row, col)) => match (row.trim().parse::<u8>(), col.trim().parse::<u8>()) {
                (Ok(row), Ok(col)) => Square::new(row, col),
                _ => None,
            },
            None => Square::from_algebraic(s),
        };
        parsed.ok_or_else(|| ParseError::InvalidSquare {
            found: s.to_string(),
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = 8 - self.row();
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}
