//! Per-query occupancy snapshot: which square holds which piece.

use std::fmt;

use crate::occupant::Occupant;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

/// A piece reported by the outside world, together with where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedPiece {
    pub square: Square,
    pub side: Side,
    pub kind: PieceKind,
}

impl PlacedPiece {
    /// Create a placed piece.
    #[inline]
    pub const fn new(square: Square, side: Side, kind: PieceKind) -> PlacedPiece {
        PlacedPiece { square, side, kind }
    }

    /// Return the side/kind pair.
    #[inline]
    pub const fn occupant(self) -> Occupant {
        Occupant::new(self.side, self.kind)
    }
}

/// Mapping from square to occupant with unique keys.
///
/// Snapshots are cheap `Copy` values. They are rebuilt from the outside
/// world before each query and never updated incrementally.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    squares: [Option<Occupant>; Square::COUNT],
    /// Union of both sides, kept in step with `squares`.
    occupied: SquareSet,
    sides: [SquareSet; Side::COUNT],
}

impl Occupancy {
    /// An empty board.
    pub const fn empty() -> Occupancy {
        Occupancy {
            squares: [None; Square::COUNT],
            occupied: SquareSet::EMPTY,
            sides: [SquareSet::EMPTY; Side::COUNT],
        }
    }

    /// Build a snapshot from a full scan of the board's pieces.
    ///
    /// When two pieces report the same square the later one wins.
    pub fn from_pieces<I>(pieces: I) -> Occupancy
    where
        I: IntoIterator<Item = PlacedPiece>,
    {
        let mut occupancy = Occupancy::empty();
        for piece in pieces {
            occupancy.insert(piece.square, piece.occupant());
        }
        occupancy
    }

    /// Return the occupant of `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Occupant> {
        self.squares[sq.index()]
    }

    /// Return `true` if something stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied.contains(sq)
    }

    /// Put `occupant` on `sq`, returning whatever was there before.
    pub fn insert(&mut self, sq: Square, occupant: Occupant) -> Option<Occupant> {
        let previous = self.remove(sq);
        self.squares[sq.index()] = Some(occupant);
        self.occupied.insert(sq);
        self.sides[occupant.side().index()].insert(sq);
        previous
    }

    /// Clear `sq`, returning its former occupant.
    pub fn remove(&mut self, sq: Square) -> Option<Occupant> {
        let previous = self.squares[sq.index()].take()?;
        self.occupied.remove(sq);
        self.sides[previous.side().index()].remove(sq);
        Some(previous)
    }

    /// Return a copy of this snapshot with `sq` cleared.
    #[inline]
    pub fn without(&self, sq: Square) -> Occupancy {
        let mut copy = *self;
        copy.remove(sq);
        copy
    }

    /// Every occupied square.
    #[inline]
    pub fn occupied(&self) -> SquareSet {
        self.occupied
    }

    /// Squares occupied by the given side.
    #[inline]
    pub fn side(&self, side: Side) -> SquareSet {
        self.sides[side.index()]
    }

    /// Number of pieces on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied.count() as usize
    }

    /// Return `true` if the board holds no pieces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Iterate over the pieces in row-major square order.
    pub fn pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.occupied.filter_map(move |sq| {
            self.get(sq)
                .map(|occ| PlacedPiece::new(sq, occ.side(), occ.kind()))
        })
    }

    /// Return a pretty-printable wrapper for this snapshot.
    pub fn pretty(&self) -> PrettyOccupancy<'_> {
        PrettyOccupancy(self)
    }
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<PlacedPiece> for Occupancy {
    fn from_iter<I: IntoIterator<Item = PlacedPiece>>(iter: I) -> Occupancy {
        Occupancy::from_pieces(iter)
    }
}

impl fmt::Debug for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Occupancy(\"{}\")", self)
    }
}

/// Wrapper for printing a snapshot as an 8x8 grid with coordinates.
pub struct PrettyOccupancy<'a>(&'a Occupancy);

impl fmt::Display for PrettyOccupancy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = Square::new(row, col)
                    .and_then(|sq| self.0.get(sq))
                    .map_or('.', Occupant::fen_char);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
