//! Parsed note events

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest valid MIDI pitch
pub const MAX_PITCH: u8 = 127;

/// A single note or rest produced from one sargam token
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEvent {
    /// MIDI pitch (0-127); 0 for rests
    pub pitch: u8,
    /// Fraction of a whole note; 0.0 for rests
    pub duration: f64,
    pub is_rest: bool,
}

impl NoteEvent {
    pub fn note(pitch: u8, duration: f64) -> Self {
        Self {
            pitch: pitch.min(MAX_PITCH),
            duration,
            is_rest: false,
        }
    }

    pub fn rest() -> Self {
        Self {
            pitch: 0,
            duration: 0.0,
            is_rest: true,
        }
    }
}

impl fmt::Display for NoteEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rest {
            write!(f, "R/{}", self.duration)
        } else {
            write!(f, "[{}]/{}", self.pitch, self.duration)
        }
    }
}
