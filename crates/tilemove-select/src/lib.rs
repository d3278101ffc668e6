//! Selection flow around the move generator: collaborator traits, a
//! selection controller and a text session.

pub mod collaborators;
pub mod command;
pub mod error;
pub mod selector;
pub mod session;
pub mod source;

pub use collaborators::{
    GridPicker, HighlightEvent, RecordingSink, StaticBoard, TextBoardSink, TextPicker,
};
pub use error::SelectError;
pub use selector::{Selection, Selector, SelectorConfig};
pub use session::Session;
pub use source::{BoardSource, HighlightSink, SelectionSource};
