//! Parser callbacks
//!
//! Every method has a no-op default so a listener only overrides what it
//! cares about. Skipped tokens are reported here and nowhere else.

use crate::models::NoteEvent;

pub trait ParserListener {
    fn on_note_parsed(&mut self, _note: &NoteEvent) {}

    fn on_tonic_changed(&mut self, _previous: u8, _current: u8) {}

    /// A token that is not sargam, or a `SA=` directive that was rejected
    fn on_token_skipped(&mut self, _token: &str) {}
}

/// Collects parsed notes and skipped tokens in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteCollector {
    pub notes: Vec<NoteEvent>,
    pub skipped: Vec<String>,
}

impl NoteCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_notes(self) -> Vec<NoteEvent> {
        self.notes
    }
}

impl ParserListener for NoteCollector {
    fn on_note_parsed(&mut self, note: &NoteEvent) {
        self.notes.push(*note);
    }

    fn on_token_skipped(&mut self, token: &str) {
        self.skipped.push(token.to_string());
    }
}
