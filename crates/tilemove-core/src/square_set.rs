//! Sets of squares packed into a 64-bit word.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};

use crate::square::Square;

/// A set of squares where bit `row * 8 + col` marks membership.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// The empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Every square on the board.
    pub const FULL: SquareSet = SquareSet(!0);

    const ROW_0: u64 = 0x0000_0000_0000_00FF;
    const COL_0: u64 = 0x0101_0101_0101_0101;

    /// Create a set from a raw `u64`.
    #[inline]
    pub const fn new(bits: u64) -> SquareSet {
        SquareSet(bits)
    }

    /// Return the underlying `u64`.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// All eight squares of the given row. Rows past 7 yield the empty set.
    #[inline]
    pub const fn row(row: u8) -> SquareSet {
        if row < 8 {
            SquareSet(Self::ROW_0 << (row * 8))
        } else {
            SquareSet::EMPTY
        }
    }

    /// All eight squares of the given column. Columns past 7 yield the empty set.
    #[inline]
    pub const fn col(col: u8) -> SquareSet {
        if col < 8 {
            SquareSet(Self::COL_0 << col)
        } else {
            SquareSet::EMPTY
        }
    }

    /// Return `true` if no squares are in the set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if the square is a member.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Return a new set with the square added.
    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | (1u64 << sq.index()))
    }

    /// Return a new set with the square removed.
    #[inline]
    pub const fn without(self, sq: Square) -> SquareSet {
        SquareSet(self.0 & !(1u64 << sq.index()))
    }

    /// Add a square in place. Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, sq: Square) -> bool {
        let fresh = !self.contains(sq);
        self.0 |= 1u64 << sq.index();
        fresh
    }

    /// Remove a square in place. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> bool {
        let present = self.contains(sq);
        self.0 &= !(1u64 << sq.index());
        present
    }

    /// Return `true` if the two sets share no square.
    #[inline]
    pub const fn is_disjoint(self, other: SquareSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Return the lowest-indexed member, or `None` if empty.
    #[inline]
    pub const fn first(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for SquareSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: SquareSet) {
        self.0 &= rhs.0;
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl Sub for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn sub(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & !rhs.0)
    }
}

impl Not for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn not(self) -> SquareSet {
        SquareSet(!self.0)
    }
}

impl Iterator for SquareSet {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let sq = self.first()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSet {}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        iter.into_iter().fold(SquareSet::EMPTY, SquareSet::with)
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}
