//! Parsing module for sargam notation
//!
//! Text flows through the disjoin preprocessor first, then each token is
//! handed to the sargam parser.

pub mod disjoin;
pub mod listener;
pub mod reader;
pub mod sargam;

// Re-export commonly used types
pub use disjoin::DisjoinPreprocessor;
pub use listener::{NoteCollector, ParserListener};
pub use reader::SargamReader;
pub use sargam::{SargamParser, TokenOutcome};
