//! Line-oriented interactive session over any reader and writer.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tilemove_core::{Occupancy, SquareSet};

use crate::collaborators::{StaticBoard, TextBoardSink, TextPicker};
use crate::command::{Command, parse_command};
use crate::error::SelectError;
use crate::selector::{Selection, Selector, SelectorConfig};

/// A text session: one command per line, results printed to the writer.
pub struct Session {
    selector: Selector<StaticBoard, TextBoardSink>,
    picker: TextPicker,
}

impl Session {
    /// Start a session on the standard starting position.
    pub fn new() -> Self {
        Self::with_board(Occupancy::starting_position(), SelectorConfig::default())
    }

    /// Start a session on an arbitrary board.
    pub fn with_board(occupancy: Occupancy, config: SelectorConfig) -> Self {
        let selector =
            Selector::with_config(StaticBoard::new(occupancy), TextBoardSink::new(), config);
        Self {
            selector,
            picker: TextPicker,
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Occupancy {
        self.selector.board().occupancy()
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Malformed commands are reported and skipped; only I/O failures end the
    /// session early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), SelectError> {
        info!("session started");

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => {
                    if let Err(e) = self.execute(cmd, &mut output) {
                        if matches!(e, SelectError::Io { .. }) {
                            return Err(e);
                        }
                        warn!(error = %e, "command failed");
                        writeln!(output, "error: {e}")?;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(output, "error: {e}")?;
                }
            }
        }

        info!("session shutting down");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), SelectError> {
        match cmd {
            Command::Load(occupancy) => {
                self.selector.board_mut().load(occupancy);
                self.selector.deselect();
                writeln!(output, "loaded {occupancy}")?;
            }
            Command::Select(text) => match self.selector.handle(&self.picker, text.as_str())? {
                Some(selection) => self.print_selection(&selection, output)?,
                None => writeln!(output, "nothing selected")?,
            },
            Command::Place(sq, occupant) => {
                self.selector.board_mut().place(sq, occupant);
                writeln!(output, "placed {} on {sq}", occupant.tag())?;
            }
            Command::Lift(sq) => match self.selector.board_mut().lift(sq) {
                Some(occupant) => writeln!(output, "lifted {} from {sq}", occupant.tag())?,
                None => writeln!(output, "{sq} is empty")?,
            },
            Command::Clear => self.selector.deselect(),
            Command::Show => self.print_board(output)?,
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn print_selection<W: Write>(
        &self,
        selection: &Selection,
        output: &mut W,
    ) -> Result<(), SelectError> {
        writeln!(output, "{} on {}", selection.occupant.tag(), selection.origin)?;
        writeln!(output, "quiet: {}", square_list(selection.moves.quiet()))?;
        writeln!(output, "capture: {}", square_list(selection.moves.capture()))?;
        self.print_board(output)
    }

    fn print_board<W: Write>(&self, output: &mut W) -> Result<(), SelectError> {
        let sink = self.selector.sink();
        writeln!(output, "{}", sink.render(self.board()))?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn square_list(set: SquareSet) -> String {
    if set.is_empty() {
        return "-".to_string();
    }
    set.map(|sq| sq.to_string()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn select_prints_destinations() {
        let mut session = Session::new();
        let out = run(&mut session, "select e2\n");
        assert!(out.contains("WhitePawn on e2"));
        assert!(out.contains("quiet: e4 e3"));
        assert!(out.contains("capture: -"));
    }

    #[test]
    fn select_miss_reports_nothing() {
        let mut session = Session::new();
        let out = run(&mut session, "select e5\nselect zz\n");
        assert_eq!(out.matches("nothing selected").count(), 2);
    }

    #[test]
    fn place_and_lift_edit_the_board() {
        let mut session = Session::with_board(Occupancy::empty(), SelectorConfig::default());
        let out = run(&mut session, "place d4 Q\nplace d6 BlackPawn\nlift a1\nselect d4\n");
        assert!(out.contains("placed WhiteQueen on d4"));
        assert!(out.contains("a1 is empty"));
        assert!(out.contains("capture: d6"));
        assert_eq!(session.board().len(), 2);
    }

    #[test]
    fn errors_are_reported_and_session_continues() {
        let mut session = Session::new();
        let out = run(&mut session, "load 8/8\nlift\nbogus\nselect b1\n");
        let errors: Vec<&str> = out.lines().filter(|l| l.starts_with("error:")).collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], "error: expected 8 rows in placement, found 2");
        assert_eq!(out.matches("error:").count(), 2);
        assert!(out.contains("WhiteKnight on b1"));
    }

    #[test]
    fn quit_stops_reading() {
        let mut session = Session::new();
        let out = run(&mut session, "quit\nselect e2\n");
        assert!(out.is_empty());
    }

    #[test]
    fn load_replaces_board_and_clears_marks() {
        let mut session = Session::new();
        let out = run(&mut session, "select e2\nload 8/8/8/8/8/8/8/K7\nshow\n");
        assert!(out.contains("loaded 8/8/8/8/8/8/8/K7"));
        assert_eq!(session.board().len(), 1);
        let shown = out.rsplit("loaded").next().unwrap();
        assert!(!shown.contains('*'));
    }
}
