//! One selection event, end to end: pick, rescan, generate, highlight.

use tracing::{debug, warn};

use tilemove_core::{MoveSet, Occupancy, Occupant, Square, generate};

use crate::error::SelectError;
use crate::source::{BoardSource, HighlightSink, SelectionSource};

/// Knobs for [`Selector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Treat two pieces reported on one square as an error instead of letting the later one win.
    pub strict_squares: bool,
    /// Clear the previous highlights before handling a hit.
    pub clear_before_select: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            strict_squares: false,
            clear_before_select: true,
        }
    }
}

/// The outcome of selecting a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The square that was picked.
    pub origin: Square,
    /// The piece found on `origin` by the rescan.
    pub occupant: Occupant,
    /// Its destinations, split into quiet and capture.
    pub moves: MoveSet,
}

/// Drives the move generator from injected collaborators.
///
/// Holds no board state of its own: every selection rescans the board source.
pub struct Selector<B, H> {
    board: B,
    sink: H,
    config: SelectorConfig,
    current: Option<Selection>,
}

impl<B: BoardSource, H: HighlightSink> Selector<B, H> {
    /// Create a selector with the default configuration.
    pub fn new(board: B, sink: H) -> Self {
        Self::with_config(board, sink, SelectorConfig::default())
    }

    /// Create a selector with an explicit configuration.
    pub fn with_config(board: B, sink: H, config: SelectorConfig) -> Self {
        Self {
            board,
            sink,
            config,
            current: None,
        }
    }

    /// The injected board source.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Mutable access to the board source, e.g. to move pieces between events.
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// The injected highlight sink.
    pub fn sink(&self) -> &H {
        &self.sink
    }

    /// The active configuration.
    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    /// The most recent successful selection, if it has not been cleared since.
    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Give back the collaborators.
    pub fn into_parts(self) -> (B, H) {
        (self.board, self.sink)
    }

    /// Rebuild the occupancy snapshot from a full scan of the board source.
    pub fn snapshot(&self) -> Result<Occupancy, SelectError> {
        let mut snapshot = Occupancy::empty();
        for piece in self.board.list_pieces() {
            if let Some(replaced) = snapshot.insert(piece.square, piece.occupant()) {
                if self.config.strict_squares {
                    return Err(SelectError::DuplicateSquare {
                        square: piece.square,
                    });
                }
                warn!(
                    square = %piece.square,
                    replaced = ?replaced,
                    kept = ?piece.occupant(),
                    "board source reported two pieces on one square"
                );
            }
        }
        Ok(snapshot)
    }

    /// Handle a raw input event through `source`.
    pub fn handle<S>(
        &mut self,
        source: &S,
        input: &S::Input,
    ) -> Result<Option<Selection>, SelectError>
    where
        S: SelectionSource + ?Sized,
    {
        self.select(source.pick_square(input))
    }

    /// Handle one selection event.
    ///
    /// A miss (`None`) changes nothing. A hit clears the old highlights, and
    /// if a piece stands on the square its destinations are highlighted and
    /// returned.
    pub fn select(&mut self, picked: Option<Square>) -> Result<Option<Selection>, SelectError> {
        let Some(origin) = picked else {
            debug!("input hit no square");
            return Ok(None);
        };

        let snapshot = self.snapshot()?;

        if self.config.clear_before_select {
            self.sink.clear_highlights();
        }
        self.current = None;

        let Some(occupant) = snapshot.get(origin) else {
            debug!(square = %origin, "no piece on selected square");
            return Ok(None);
        };

        let moves = generate(&snapshot, origin, occupant.kind(), occupant.side());
        for sq in moves.quiet() {
            self.sink.highlight_quiet(sq);
        }
        for sq in moves.capture() {
            self.sink.highlight_capture(sq);
        }

        debug!(
            square = %origin,
            piece = %occupant.tag(),
            quiet = moves.quiet().count(),
            capture = moves.capture().count(),
            "piece selected"
        );

        let selection = Selection {
            origin,
            occupant,
            moves,
        };
        self.current = Some(selection);
        Ok(Some(selection))
    }

    /// Drop the current selection and its highlights.
    pub fn deselect(&mut self) {
        self.current = None;
        self.sink.clear_highlights();
    }
}
