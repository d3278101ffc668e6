//! Collaborator interfaces consumed and fed by the selection flow.

use tilemove_core::{PlacedPiece, Square};

/// Where the current board comes from.
///
/// Called once per selection event; the answer must reflect the true board
/// at that moment and is never cached between events.
pub trait BoardSource {
    /// Every piece currently on the board.
    fn list_pieces(&self) -> Vec<PlacedPiece>;
}

/// Turns a raw input event into the board square it hit.
pub trait SelectionSource {
    /// The raw event type (pointer position, typed text, ...).
    type Input: ?Sized;

    /// Return the square under `input`, or `None` if it hit no tile.
    fn pick_square(&self, input: &Self::Input) -> Option<Square>;
}

/// Receives the result of a selection, one call per destination square.
pub trait HighlightSink {
    /// Remove every highlight left by the previous selection.
    fn clear_highlights(&mut self) {}

    /// Mark an empty destination.
    fn highlight_quiet(&mut self, sq: Square);

    /// Mark a destination holding an opposing piece.
    fn highlight_capture(&mut self, sq: Square);
}

impl<T: BoardSource + ?Sized> BoardSource for &T {
    fn list_pieces(&self) -> Vec<PlacedPiece> {
        (**self).list_pieces()
    }
}

impl<T: SelectionSource + ?Sized> SelectionSource for &T {
    type Input = T::Input;

    fn pick_square(&self, input: &Self::Input) -> Option<Square> {
        (**self).pick_square(input)
    }
}

impl<T: HighlightSink + ?Sized> HighlightSink for &mut T {
    fn clear_highlights(&mut self) {
        (**self).clear_highlights();
    }

    fn highlight_quiet(&mut self, sq: Square) {
        (**self).highlight_quiet(sq);
    }

    fn highlight_capture(&mut self, sq: Square) {
        (**self).highlight_capture(sq);
    }
}
