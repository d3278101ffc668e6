//! Core board types and candidate move generation for a single selected piece.

mod error;
mod movegen;
mod occupancy;
mod occupant;
mod piece_kind;
mod placement;
mod side;
mod square;
mod square_set;

pub use error::ParseError;
pub use movegen::{MoveClass, MoveSet, generate, generate_for_side};
pub use occupancy::{Occupancy, PlacedPiece, PrettyOccupancy};
pub use occupant::{Occupant, same_team};
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use side::Side;
pub use square::Square;
pub use square_set::SquareSet;
