//! Error types for parsing squares, pieces and board placements.

/// Errors from the text forms accepted at the crate boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The placement does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows in placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A placement row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in a placement row.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// Text that is neither algebraic notation nor an in-range `row,col` pair.
    #[error("invalid square: \"{found}\"")]
    InvalidSquare {
        /// The rejected text.
        found: String,
    },
    /// A piece tag that is not a side name followed by a kind name.
    #[error("invalid piece tag: \"{found}\"")]
    InvalidTag {
        /// The rejected tag.
        found: String,
    },
}
