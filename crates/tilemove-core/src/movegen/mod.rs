//! Candidate move generation for a single piece.
//!
//! Rules are pseudo-legal: no check detection, pins, castling, en passant or
//! promotion. A king may step into check.

mod leapers;
mod pawns;
mod sliders;

use tracing::trace;

use crate::occupancy::{Occupancy, PlacedPiece};
use crate::occupant::Occupant;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::leapers::{KING_OFFSETS, KNIGHT_OFFSETS, gen_leaper};
use self::pawns::gen_pawn;
use self::sliders::{DIAGONALS, ORTHOGONALS, gen_slider};

/// How a destination square is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveClass {
    /// The destination is empty.
    Quiet,
    /// The destination holds an opposing piece.
    Capture,
}

/// Result of a query: two disjoint sets of destination squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveSet {
    quiet: SquareSet,
    capture: SquareSet,
}

impl MoveSet {
    /// An empty move set.
    pub const fn new() -> MoveSet {
        MoveSet {
            quiet: SquareSet::EMPTY,
            capture: SquareSet::EMPTY,
        }
    }

    /// Empty destinations the piece may move to.
    #[inline]
    pub fn quiet(&self) -> SquareSet {
        self.quiet
    }

    /// Destinations holding an opposing piece.
    #[inline]
    pub fn capture(&self) -> SquareSet {
        self.capture
    }

    /// Every destination, quiet or capture.
    #[inline]
    pub fn destinations(&self) -> SquareSet {
        self.quiet | self.capture
    }

    /// Return `true` if `sq` is a destination of either class.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.destinations().contains(sq)
    }

    /// Return how `sq` would be reached, or `None` if it is not a destination.
    pub fn class_of(&self, sq: Square) -> Option<MoveClass> {
        if self.quiet.contains(sq) {
            Some(MoveClass::Quiet)
        } else if self.capture.contains(sq) {
            Some(MoveClass::Capture)
        } else {
            None
        }
    }

    /// Total number of destinations.
    #[inline]
    pub fn len(&self) -> usize {
        (self.quiet.count() + self.capture.count()) as usize
    }

    /// Return `true` if the piece has nowhere to go.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.capture.is_empty()
    }

    /// Iterate over quiet destinations, then captures.
    pub fn iter(&self) -> impl Iterator<Item = (Square, MoveClass)> {
        self.quiet
            .map(|sq| (sq, MoveClass::Quiet))
            .chain(self.capture.map(|sq| (sq, MoveClass::Capture)))
    }

    #[inline]
    fn push_quiet(&mut self, sq: Square) {
        debug_assert!(!self.capture.contains(sq));
        self.quiet.insert(sq);
    }

    #[inline]
    fn push_capture(&mut self, sq: Square) {
        debug_assert!(!self.quiet.contains(sq));
        self.capture.insert(sq);
    }
}

/// What a moving piece finds on a square it reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Landing {
    Empty,
    Enemy,
    Friend,
}

#[inline]
fn landing(board: &Occupancy, sq: Square, mover: Occupant) -> Landing {
    match board.get(sq) {
        None => Landing::Empty,
        Some(found) if mover.is_ally(Some(found)) => Landing::Friend,
        Some(_) => Landing::Enemy,
    }
}

/// Compute the destinations of a `side` `kind` standing on `origin`.
///
/// `kind` and `side` are taken from the caller, not from the snapshot's
/// record for `origin`. Rules run against a private copy of `snapshot` with
/// `origin` cleared, so the piece never blocks itself and the caller's
/// snapshot is left untouched.
pub fn generate(snapshot: &Occupancy, origin: Square, kind: PieceKind, side: Side) -> MoveSet {
    let board = snapshot.without(origin);
    let mover = Occupant::new(side, kind);
    let mut moves = MoveSet::new();

    match kind {
        PieceKind::Pawn => gen_pawn(&board, origin, mover, &mut moves),
        PieceKind::Knight => gen_leaper(&board, origin, mover, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => gen_slider(&board, origin, mover, &DIAGONALS, &mut moves),
        PieceKind::Rook => gen_slider(&board, origin, mover, &ORTHOGONALS, &mut moves),
        PieceKind::Queen => {
            gen_slider(&board, origin, mover, &ORTHOGONALS, &mut moves);
            gen_slider(&board, origin, mover, &DIAGONALS, &mut moves);
        }
        PieceKind::King => gen_leaper(&board, origin, mover, &KING_OFFSETS, &mut moves),
    }

    trace!(
        origin = %origin,
        kind = %kind,
        side = %side,
        quiet = moves.quiet.count(),
        capture = moves.capture.count(),
        "generated moves"
    );
    moves
}

/// Generate move sets for every piece `side` has in `snapshot`, in square order.
pub fn generate_for_side(snapshot: &Occupancy, side: Side) -> Vec<(PlacedPiece, MoveSet)> {
    snapshot
        .pieces()
        .filter(|piece| piece.side == side)
        .map(|piece| (piece, generate(snapshot, piece.square, piece.kind, piece.side)))
        .collect()
}
