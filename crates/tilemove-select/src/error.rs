//! Selection and session errors.

use tilemove_core::{ParseError, Square};

/// Errors that can occur while handling selection events or session commands.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// The board source reported two pieces on one square while strict mode is on.
    #[error("board source reported more than one piece on {square}")]
    DuplicateSquare {
        /// The contested square.
        square: Square,
    },

    /// A command was given without an argument it requires.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },

    /// A square, piece or placement argument could not be parsed.
    #[error("{source}")]
    Parse {
        /// The underlying parse error.
        #[from]
        source: ParseError,
    },

    /// An I/O error occurred on the session streams.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
