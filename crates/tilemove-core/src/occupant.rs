//! What stands on an occupied square: a side and a piece kind.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::piece_kind::PieceKind;
use crate::side::Side;

/// A side-tagged piece, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Side`] (0 = White, 1 = Black)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant(u8);

impl Occupant {
    /// Create an occupant from a side and a kind.
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Occupant {
        Occupant((side as u8) << 3 | (kind as u8))
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Return the side.
    #[inline]
    pub const fn side(self) -> Side {
        match self.0 >> 3 {
            0 => Side::White,
            _ => Side::Black,
        }
    }

    /// Return `true` if `other` is present and fights for the same side.
    #[inline]
    pub fn is_ally(self, other: Option<Occupant>) -> bool {
        same_team(Some(self), other)
    }

    /// Parse a FEN letter: uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Occupant> {
        let kind = PieceKind::from_fen_char(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Occupant::new(side, kind))
    }

    /// Return the FEN letter for this occupant.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind().fen_char();
        match self.side() {
            Side::White => base.to_ascii_uppercase(),
            Side::Black => base,
        }
    }

    /// Parse a scene tag such as `"WhitePawn"` or `"BlackKnight"`.
    pub fn from_tag(tag: &str) -> Result<Occupant, ParseError> {
        let invalid = || ParseError::InvalidTag {
            found: tag.to_string(),
        };
        let side = Side::ALL
            .into_iter()
            .find(|side| tag.starts_with(side.name()))
            .ok_or_else(invalid)?;
        let kind = PieceKind::from_name(&tag[side.name().len()..]).ok_or_else(invalid)?;
        Ok(Occupant::new(side, kind))
    }

    /// Return the scene tag for this occupant, e.g. `"BlackQueen"`.
    pub fn tag(self) -> String {
        format!("{}{}", self.side().name(), self.kind().name())
    }
}

/// Team affiliation check gating every capture decision.
///
/// Two occupants are on the same team iff their sides are equal; an empty
/// square is never on anyone's team.
#[inline]
pub fn same_team(a: Option<Occupant>, b: Option<Occupant>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.side() == b.side(),
        _ => false,
    }
}

impl FromStr for Occupant {
    type Err = ParseError;

    /// Accepts a single FEN letter or a full scene tag.
    fn from_str(s: &str) -> Result<Occupant, ParseError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Occupant::from_fen_char(c).ok_or(ParseError::InvalidPieceChar { character: c })
            }
            _ => Occupant::from_tag(s),
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_prefix = match self.side() {
            Side::White => 'W',
            Side::Black => 'B',
        };
        let kind_char = self.kind().fen_char().to_ascii_uppercase();
        write!(f, "{side_prefix}{kind_char}")
    }
}
