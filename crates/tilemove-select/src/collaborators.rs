//! In-memory implementations of the collaborator traits.

use std::fmt;

use tilemove_core::{MoveClass, Occupancy, Occupant, PlacedPiece, Square};

use crate::source::{BoardSource, HighlightSink, SelectionSource};

/// A board held in memory, standing in for a scene of piece objects.
#[derive(Debug, Clone, Default)]
pub struct StaticBoard {
    occupancy: Occupancy,
}

impl StaticBoard {
    /// Wrap an existing occupancy.
    pub fn new(occupancy: Occupancy) -> StaticBoard {
        StaticBoard { occupancy }
    }

    /// The board as it currently stands.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Replace the whole board.
    pub fn load(&mut self, occupancy: Occupancy) {
        self.occupancy = occupancy;
    }

    /// Put a piece on `sq`, returning whatever stood there.
    pub fn place(&mut self, sq: Square, occupant: Occupant) -> Option<Occupant> {
        self.occupancy.insert(sq, occupant)
    }

    /// Take the piece off `sq`.
    pub fn lift(&mut self, sq: Square) -> Option<Occupant> {
        self.occupancy.remove(sq)
    }
}

impl BoardSource for StaticBoard {
    fn list_pieces(&self) -> Vec<PlacedPiece> {
        self.occupancy.pieces().collect()
    }
}

/// Picks squares from typed text: `e2` or `6,4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPicker;

impl SelectionSource for TextPicker {
    type Input = str;

    fn pick_square(&self, input: &str) -> Option<Square> {
        input.parse().ok()
    }
}

/// Picks squares from pointer coordinates over a square grid of tiles.
///
/// `origin` is the pointer position of the top-left corner of tile (0, 0);
/// rows grow with `y`, columns with `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPicker {
    pub origin: (f32, f32),
    pub tile_size: f32,
}

impl GridPicker {
    /// Create a picker for a board whose top-left corner sits at `origin`.
    pub fn new(origin: (f32, f32), tile_size: f32) -> GridPicker {
        GridPicker { origin, tile_size }
    }
}

impl SelectionSource for GridPicker {
    type Input = (f32, f32);

    fn pick_square(&self, &(x, y): &(f32, f32)) -> Option<Square> {
        if self.tile_size.is_nan() || self.tile_size <= 0.0 {
            return None;
        }
        let col = ((x - self.origin.0) / self.tile_size).floor();
        let row = ((y - self.origin.1) / self.tile_size).floor();
        if !(0.0..8.0).contains(&row) || !(0.0..8.0).contains(&col) {
            return None;
        }
        Square::new(row as u8, col as u8)
    }
}

/// A single call received by a [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightEvent {
    Cleared,
    Quiet(Square),
    Capture(Square),
}

/// Records every highlight call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<HighlightEvent>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }

    /// Calls received so far.
    pub fn events(&self) -> &[HighlightEvent] {
        &self.events
    }

    /// Forget the recorded calls.
    pub fn reset(&mut self) {
        self.events.clear();
    }
}

impl HighlightSink for RecordingSink {
    fn clear_highlights(&mut self) {
        self.events.push(HighlightEvent::Cleared);
    }

    fn highlight_quiet(&mut self, sq: Square) {
        self.events.push(HighlightEvent::Quiet(sq));
    }

    fn highlight_capture(&mut self, sq: Square) {
        self.events.push(HighlightEvent::Capture(sq));
    }
}

/// Keeps the current highlight of every tile for text rendering.
#[derive(Debug, Clone)]
pub struct TextBoardSink {
    marks: [Option<MoveClass>; Square::COUNT],
}

impl TextBoardSink {
    /// Create a sink with no highlighted tiles.
    pub fn new() -> TextBoardSink {
        TextBoardSink {
            marks: [None; Square::COUNT],
        }
    }

    /// The highlight on `sq`, if any.
    pub fn mark(&self, sq: Square) -> Option<MoveClass> {
        self.marks[sq.index()]
    }

    /// Render `board` as a grid with highlights overlaid.
    pub fn render<'a>(&'a self, board: &'a Occupancy) -> HighlightedBoard<'a> {
        HighlightedBoard { sink: self, board }
    }
}

impl Default for TextBoardSink {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightSink for TextBoardSink {
    fn clear_highlights(&mut self) {
        self.marks = [None; Square::COUNT];
    }

    fn highlight_quiet(&mut self, sq: Square) {
        self.marks[sq.index()] = Some(MoveClass::Quiet);
    }

    fn highlight_capture(&mut self, sq: Square) {
        self.marks[sq.index()] = Some(MoveClass::Capture);
    }
}

/// Grid view produced by [`TextBoardSink::render`].
///
/// Quiet destinations show `*`, captured pieces are bracketed.
pub struct HighlightedBoard<'a> {
    sink: &'a TextBoardSink,
    board: &'a Occupancy,
}

impl fmt::Display for HighlightedBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0u8..8 {
                let Some(sq) = Square::new(row, col) else {
                    continue;
                };
                let piece = self.board.get(sq).map_or('.', Occupant::fen_char);
                match self.sink.mark(sq) {
                    Some(MoveClass::Quiet) => write!(f, " * ")?,
                    Some(MoveClass::Capture) => write!(f, "[{piece}]")?,
                    None => write!(f, " {piece} ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a  b  c  d  e  f  g  h")
    }
}
