//! Pawn moves: forward steps onto empty squares, diagonal steps only to capture.

use crate::occupancy::Occupancy;
use crate::occupant::Occupant;
use crate::square::Square;

use super::{Landing, MoveSet, landing};

/// Generate pawn destinations for `mover` on `origin`.
pub(super) fn gen_pawn(board: &Occupancy, origin: Square, mover: Occupant, moves: &mut MoveSet) {
    let side = mover.side();
    let dir = side.pawn_direction();

    // --- Forward steps ---
    if let Some(single) = origin.offset(dir, 0) {
        if !board.is_occupied(single) {
            moves.push_quiet(single);

            // The double step needs the single-step square empty as well.
            if origin.row() == side.pawn_start_row() {
                if let Some(double) = origin.offset(2 * dir, 0) {
                    if !board.is_occupied(double) {
                        moves.push_quiet(double);
                    }
                }
            }
        }
    }

    // --- Diagonal captures ---
    for d_col in [-1, 1] {
        let Some(target) = origin.offset(dir, d_col) else {
            continue;
        };
        if landing(board, target, mover) == Landing::Enemy {
            moves.push_capture(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::movegen::generate;
    use crate::occupancy::Occupancy;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;
    use crate::square::Square;
    use crate::square_set::SquareSet;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn set(squares: &[(u8, u8)]) -> SquareSet {
        squares.iter().map(|&(r, c)| sq(r, c)).collect()
    }

    fn pawn(placement: &str, origin: Square, side: Side) -> crate::movegen::MoveSet {
        let snapshot: Occupancy = placement.parse().unwrap();
        generate(&snapshot, origin, PieceKind::Pawn, side)
    }

    #[test]
    fn white_double_step_from_start_row() {
        let moves = pawn("8/8/8/8/8/8/8/8", sq(6, 3), Side::White);
        assert_eq!(moves.quiet(), set(&[(5, 3), (4, 3)]));
        assert!(moves.capture().is_empty());
    }

    #[test]
    fn black_double_step_from_start_row() {
        let moves = pawn("8/8/8/8/8/8/8/8", sq(1, 3), Side::Black);
        assert_eq!(moves.quiet(), set(&[(2, 3), (3, 3)]));
    }

    #[test]
    fn single_step_off_start_row() {
        let moves = pawn("8/8/8/8/8/8/8/8", sq(5, 3), Side::White);
        assert_eq!(moves.quiet(), set(&[(4, 3)]));
        let moves = pawn("8/8/8/8/8/8/8/8", sq(2, 3), Side::Black);
        assert_eq!(moves.quiet(), set(&[(3, 3)]));
    }

    #[test]
    fn blocked_single_step_blocks_double() {
        let moves = pawn("8/8/8/8/8/3n4/8/8", sq(6, 3), Side::White);
        assert!(moves.is_empty());
    }

    #[test]
    fn blocked_double_square_keeps_single() {
        let moves = pawn("8/8/8/8/3N4/8/8/8", sq(6, 3), Side::White);
        assert_eq!(moves.quiet(), set(&[(5, 3)]));
    }

    #[test]
    fn forward_square_is_never_captured() {
        // An enemy straight ahead blocks rather than being captured.
        let moves = pawn("8/8/8/8/8/8/3p4/8", sq(7, 3), Side::White);
        assert!(moves.is_empty());
    }

    #[test]
    fn diagonal_capture_is_independent_of_pushes() {
        let moves = pawn("8/8/8/8/8/4p3/8/8", sq(6, 3), Side::White);
        assert_eq!(moves.capture(), set(&[(5, 4)]));
        assert_eq!(moves.quiet(), set(&[(5, 3), (4, 3)]));
    }

    #[test]
    fn diagonal_friend_or_empty_not_added() {
        let moves = pawn("8/8/8/8/8/2P5/8/8", sq(6, 3), Side::White);
        assert!(moves.capture().is_empty());
        assert!(!moves.contains(sq(5, 2)));
        assert!(!moves.contains(sq(5, 4)));
    }

    #[test]
    fn black_captures_downward() {
        let moves = pawn("8/8/8/8/8/8/8/8", sq(3, 0), Side::Black);
        assert_eq!(moves.quiet(), set(&[(4, 0)]));
        let moves = pawn("8/8/8/8/1R6/8/8/8", sq(3, 0), Side::Black);
        assert_eq!(moves.capture(), set(&[(4, 1)]));
    }

    #[test]
    fn pawn_on_far_edge_has_no_moves() {
        let moves = pawn("8/8/8/8/8/8/8/8", sq(0, 4), Side::White);
        assert!(moves.is_empty());
        let moves = pawn("8/8/8/8/8/8/8/8", sq(7, 4), Side::Black);
        assert!(moves.is_empty());
    }
}
