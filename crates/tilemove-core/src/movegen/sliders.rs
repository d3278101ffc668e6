//! Sliding piece (bishop, rook, queen) rays.

use crate::occupancy::Occupancy;
use crate::occupant::Occupant;
use crate::square::Square;

use super::{Landing, MoveSet, landing};

/// Rook directions as (row, col) steps.
pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop directions as (row, col) steps.
pub(super) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Longest possible ray on an 8x8 board.
const MAX_RAY: i8 = 7;

/// Cast one ray per direction, stopping at the edge or the first piece.
///
/// An enemy blocker is recorded as a capture; a friendly blocker is not
/// recorded. Nothing beyond a blocker is ever visited.
pub(super) fn gen_slider(
    board: &Occupancy,
    origin: Square,
    mover: Occupant,
    directions: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_col) in directions {
        for step in 1..=MAX_RAY {
            let Some(target) = origin.offset(d_row * step, d_col * step) else {
                break;
            };
            match landing(board, target, mover) {
                Landing::Empty => moves.push_quiet(target),
                Landing::Enemy => {
                    moves.push_capture(target);
                    break;
                }
                Landing::Friend => break,
            }
        }
    }
}
