//! The two sides of the board.

use std::fmt;
use std::ops::Not;

/// Which army a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// Both sides in index order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a single pawn step: White walks up the board toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row on which this side's pawns start and may make a double step.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Tag prefix used by scene-style piece names ("White", "Black").
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
