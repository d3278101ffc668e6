//! Text form of an [`Occupancy`]: the piece-placement field of FEN.
//!
//! Rows are listed from row 0 (rank 8) down to row 7 (rank 1), separated by
//! `/`. Digits count empty squares, uppercase letters are White pieces.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::occupancy::Occupancy;
use crate::occupant::Occupant;
use crate::square::Square;

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Occupancy {
    /// The standard starting position.
    pub fn starting_position() -> Occupancy {
        // The constant is well-formed, so parsing cannot fail.
        STARTING_PLACEMENT.parse().unwrap_or_default()
    }
}

impl FromStr for Occupancy {
    type Err = ParseError;

    /// Parse a placement. A full FEN record is accepted too; only its first field is read.
    fn from_str(text: &str) -> Result<Occupancy, ParseError> {
        let placement = text.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(ParseError::WrongRowCount { found: rows.len() });
        }

        let mut occupancy = Occupancy::empty();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(ParseError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let occupant = Occupant::from_fen_char(c)
                    .ok_or(ParseError::InvalidPieceChar { character: c })?;
                let sq = Square::new(row as u8, col as u8).ok_or(ParseError::BadRowLength {
                    row,
                    length: col + 1,
                })?;
                occupancy.insert(sq, occupant);
                col += 1;
            }

            if col != 8 {
                return Err(ParseError::BadRowLength { row, length: col });
            }
        }

        Ok(occupancy)
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_run = 0u8;
            for col in 0u8..8 {
                match Square::new(row, col).and_then(|sq| self.get(sq)) {
                    Some(occ) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", occ.fen_char())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::error::ParseError;
    use crate::occupancy::Occupancy;
    use crate::occupant::Occupant;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let occ = Occupancy::starting_position();
        assert_eq!(occ.len(), 32);
        assert_eq!(occ.side(Side::White).count(), 16);
        assert_eq!(occ.get(sq(6, 3)), Some(Occupant::new(Side::White, PieceKind::Pawn)));
        assert_eq!(occ.get(sq(1, 3)), Some(Occupant::new(Side::Black, PieceKind::Pawn)));
        assert_eq!(occ.get(sq(7, 4)), Some(Occupant::new(Side::White, PieceKind::King)));
        assert_eq!(occ.get(sq(0, 3)), Some(Occupant::new(Side::Black, PieceKind::Queen)));
    }

    #[test]
    fn display_roundtrip() {
        for text in [
            STARTING_PLACEMENT,
            "8/8/8/8/8/8/8/8",
            "r3k2r/8/8/3Qq3/8/8/8/R3K2R",
            "7k/8/8/8/8/8/8/K7",
        ] {
            let occ: Occupancy = text.parse().unwrap();
            assert_eq!(occ.to_string(), text);
        }
    }

    #[test]
    fn full_fen_record_accepted() {
        let occ: Occupancy = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(occ.len(), 3);
        assert!(occ.is_occupied(sq(6, 4)));
    }

    #[test]
    fn wrong_row_count() {
        assert_eq!(
            "8/8/8".parse::<Occupancy>(),
            Err(ParseError::WrongRowCount { found: 3 })
        );
        assert!(matches!("".parse::<Occupancy>(), Err(ParseError::WrongRowCount { .. })));
    }

    #[test]
    fn bad_row_length() {
        assert_eq!(
            "7/8/8/8/8/8/8/8".parse::<Occupancy>(),
            Err(ParseError::BadRowLength { row: 0, length: 7 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/ppppppppp".parse::<Occupancy>(),
            Err(ParseError::BadRowLength { row: 7, length: 9 })
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            "8/8/8/8/8/8/8/7x".parse::<Occupancy>(),
            Err(ParseError::InvalidPieceChar { character: 'x' })
        );
        assert_eq!(
            "9/8/8/8/8/8/8/8".parse::<Occupancy>(),
            Err(ParseError::InvalidPieceChar { character: '9' })
        );
    }
}
