//! Knight and king moves: fixed offsets, intervening squares ignored.

use crate::occupancy::Occupancy;
use crate::occupant::Occupant;
use crate::square::Square;

use super::{Landing, MoveSet, landing};

/// Knight jumps as (row, col) deltas.
#[rustfmt::skip]
pub(super) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1), (-1, 2), (1, 2), (2, 1),
    (2, -1), (1, -2), (-1, -2), (-2, -1),
];

/// King steps in all eight compass directions.
#[rustfmt::skip]
pub(super) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Generate leaper destinations from a fixed offset table.
pub(super) fn gen_leaper(
    board: &Occupancy,
    origin: Square,
    mover: Occupant,
    offsets: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_col) in offsets {
        let Some(target) = origin.offset(d_row, d_col) else {
            continue;
        };
        match landing(board, target, mover) {
            Landing::Empty => moves.push_quiet(target),
            Landing::Enemy => moves.push_capture(target),
            Landing::Friend => {}
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

    #[test]
    fn knight_in_centre_has_eight_jumps() {
        let moves = generate(&Occupancy::empty(), sq(4, 4), PieceKind::Knight, Side::White);
        assert_eq!(
            moves.quiet(),
            set(&[(2, 3), (2, 5), (3, 2), (3, 6), (5, 2), (5, 6), (6, 3), (6, 5)])
        );
        assert!(moves.capture().is_empty());
    }

    #[test]
    fn knight_in_corner_has_two_jumps() {
        let moves = generate(&Occupancy::empty(), sq(0, 0), PieceKind::Knight, Side::Black);
        assert_eq!(moves.quiet(), set(&[(1, 2), (2, 1)]));
    }

    #[test]
    fn knight_jumps_over_pieces() {
        // Fully surrounded by friends, the knight still reaches every jump square.
        let snapshot: Occupancy = "8/8/8/3PPP2/3P1P2/3PPP2/8/8".parse().unwrap();
        let moves = generate(&snapshot, sq(4, 4), PieceKind::Knight, Side::White);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn knight_captures_enemy_skips_friend() {
        let snapshot: Occupancy = "8/8/3p1P2/8/8/8/8/8".parse().unwrap();
        let moves = generate(&snapshot, sq(4, 4), PieceKind::Knight, Side::White);
        assert_eq!(moves.capture(), set(&[(2, 3)]));
        assert!(!moves.contains(sq(2, 5)));
        assert_eq!(moves.quiet().count(), 6);
    }

    #[test]
    fn king_in_corner_has_three_steps() {
        let moves = generate(&Occupancy::empty(), sq(0, 0), PieceKind::King, Side::White);
        assert_eq!(moves.quiet(), set(&[(0, 1), (1, 0), (1, 1)]));
    }

    #[test]
    fn king_mixed_neighbourhood() {
        let snapshot: Occupancy = "8/8/8/3pP3/8/8/8/8".parse().unwrap();
        let moves = generate(&snapshot, sq(4, 4), PieceKind::King, Side::White);
        assert_eq!(moves.capture(), set(&[(3, 3)]));
        assert!(!moves.contains(sq(3, 4)));
        assert_eq!(moves.quiet().count(), 6);
    }

    #[test]
    fn king_may_step_next_to_enemy_king() {
        let snapshot: Occupancy = "8/8/8/8/8/8/8/k7".parse().unwrap();
        let moves = generate(&snapshot, sq(5, 1), PieceKind::King, Side::White);
        assert!(moves.quiet().contains(sq(6, 1)));
    }
}
