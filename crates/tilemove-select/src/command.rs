//! Parsing of session command lines.

use tilemove_core::{Occupancy, Occupant, Square};

use crate::error::SelectError;

/// A parsed session command.
#[derive(Debug)]
pub enum Command {
    /// `load startpos` or `load <placement>`: replace the board.
    Load(Occupancy),
    /// `select <square>`: the raw square text, resolved by the selection source.
    Select(String),
    /// `place <square> <piece>`: put a piece (FEN letter or tag) on a square.
    Place(Square, Occupant),
    /// `lift <square>`: take a piece off the board.
    Lift(Square),
    /// `clear`: drop the current selection.
    Clear,
    /// `show`: print the board with highlights.
    Show,
    /// `quit`: end the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, SelectError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "load" => parse_load(args),
        "select" => {
            let text = args.first().ok_or(SelectError::MissingArgument {
                command: "select",
                argument: "square",
            })?;
            Ok(Command::Select(text.to_string()))
        }
        "place" => parse_place(args),
        "lift" => {
            let text = args.first().ok_or(SelectError::MissingArgument {
                command: "lift",
                argument: "square",
            })?;
            Ok(Command::Lift(text.parse()?))
        }
        "clear" => Ok(Command::Clear),
        "show" => Ok(Command::Show),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

/// Parse the `load` arguments: `startpos` or a placement (extra FEN fields are ignored).
fn parse_load(args: &[&str]) -> Result<Command, SelectError> {
    match args.first() {
        None => Err(SelectError::MissingArgument {
            command: "load",
            argument: "placement",
        }),
        Some(&"startpos") => Ok(Command::Load(Occupancy::starting_position())),
        Some(placement) => Ok(Command::Load(placement.parse()?)),
    }
}

fn parse_place(args: &[&str]) -> Result<Command, SelectError> {
    let (Some(square), Some(piece)) = (args.first(), args.get(1)) else {
        return Err(SelectError::MissingArgument {
            command: "place",
            argument: "square and piece",
        });
    };
    Ok(Command::Place(square.parse()?, piece.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilemove_core::{PieceKind, Side};

    #[test]
    fn parse_load_startpos() {
        match parse_command("load startpos").unwrap() {
            Command::Load(board) => assert_eq!(board, Occupancy::starting_position()),
            other => panic!("expected Load, got {other:?}"),
        }
    }

    #[test]
    fn parse_load_placement() {
        match parse_command("load 8/8/8/8/8/8/8/K7 w - - 0 1").unwrap() {
            Command::Load(board) => assert_eq!(board.len(), 1),
            other => panic!("expected Load, got {other:?}"),
        }
    }

    #[test]
    fn parse_load_errors() {
        assert!(matches!(
            parse_command("load"),
            Err(SelectError::MissingArgument { command: "load", .. })
        ));
        assert!(matches!(parse_command("load 8/8"), Err(SelectError::Parse { .. })));
    }

    #[test]
    fn parse_select_keeps_raw_text() {
        match parse_command("select zz").unwrap() {
            Command::Select(text) => assert_eq!(text, "zz"),
            other => panic!("expected Select, got {other:?}"),
        }
        assert!(parse_command("select").is_err());
    }

    #[test]
    fn parse_place() {
        match parse_command("place e4 WhiteQueen").unwrap() {
            Command::Place(sq, occ) => {
                assert_eq!(sq, Square::new(4, 4).unwrap());
                assert_eq!(occ, Occupant::new(Side::White, PieceKind::Queen));
            }
            other => panic!("expected Place, got {other:?}"),
        }
        match parse_command("place 0,0 r").unwrap() {
            Command::Place(sq, occ) => {
                assert_eq!(sq, Square::new(0, 0).unwrap());
                assert_eq!(occ, Occupant::new(Side::Black, PieceKind::Rook));
            }
            other => panic!("expected Place, got {other:?}"),
        }
        assert!(parse_command("place e4").is_err());
        assert!(parse_command("place e4 PurpleQueen").is_err());
        assert!(parse_command("place x9 Q").is_err());
    }

    #[test]
    fn parse_lift() {
        assert!(matches!(parse_command("lift a8").unwrap(), Command::Lift(_)));
        assert!(parse_command("lift").is_err());
        assert!(parse_command("lift 9,9").is_err());
    }

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("show").unwrap(), Command::Show));
        assert!(matches!(parse_command("clear").unwrap(), Command::Clear));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert!(matches!(parse_command("foobar").unwrap(), Command::Unknown(_)));
        assert!(matches!(parse_command("   ").unwrap(), Command::Unknown(_)));
    }
}
