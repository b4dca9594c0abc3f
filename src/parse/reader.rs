//! Line reader
//!
//! Drives a whole line through the pipeline: disjoin comma groups, split
//! on whitespace, route sargam tokens to the parser and report each
//! outcome to a [`ParserListener`].

use log::debug;

use crate::models::{NoteEvent, TonicState};
use crate::parse::disjoin::DisjoinPreprocessor;
use crate::parse::listener::{NoteCollector, ParserListener};
use crate::parse::sargam::{SargamParser, TokenOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct SargamReader {
    preprocessor: DisjoinPreprocessor,
    parser: SargamParser,
}

impl SargamReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preprocessor(&self) -> &DisjoinPreprocessor {
        &self.preprocessor
    }

    pub fn parser(&self) -> &SargamParser {
        &self.parser
    }

    pub fn read_line(
        &self,
        line: &str,
        tonic: &mut TonicState,
        listener: &mut dyn ParserListener,
    ) {
        let music = self.preprocessor.preprocess(line);

        for token in music.split_whitespace() {
            if !self.parser.matches(token) {
                debug!("skipping non-sargam token '{}'", token);
                listener.on_token_skipped(token);
                continue;
            }

            match self.parser.parse_token(token, tonic) {
                TokenOutcome::Note(note) => listener.on_note_parsed(&note),
                TokenOutcome::TonicSet { previous, current } => {
                    listener.on_tonic_changed(previous, current)
                }
                TokenOutcome::DirectiveIgnored | TokenOutcome::Unrecognized => {
                    listener.on_token_skipped(token)
                }
            }
        }
    }

    /// Parse a line and return its notes in order
    pub fn parse_line(&self, line: &str, tonic: &mut TonicState) -> Vec<NoteEvent> {
        let mut collector = NoteCollector::new();
        self.read_line(line, tonic, &mut collector);
        collector.into_notes()
    }
}
