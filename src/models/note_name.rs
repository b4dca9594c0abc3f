//! Western note names accepted as a tonic value
//!
//! Covers the 17 common spellings:
//! - 7 naturals (C, D, E, F, G, A, B)
//! - 5 sharps (C#, D#, F#, G#, A#)
//! - 5 flats (Db, Eb, Gb, Ab, Bb)
//!
//! A name may carry an octave number (`F#3`). Pitches follow the
//! convention where `C5` is MIDI 60 and a bare name sits in octave 5.

use crate::error::{Result, SargamError};
use crate::models::note_event::MAX_PITCH;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Octave assumed when a note name carries no number
pub const DEFAULT_OCTAVE: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
}

impl NoteName {
    /// Pitch class, C = 0
    pub fn semitone(&self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::Cs | NoteName::Db => 1,
            NoteName::D => 2,
            NoteName::Ds | NoteName::Eb => 3,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::Fs | NoteName::Gb => 6,
            NoteName::G => 7,
            NoteName::Gs | NoteName::Ab => 8,
            NoteName::A => 9,
            NoteName::As | NoteName::Bb => 10,
            NoteName::B => 11,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::Db => "Db",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::Eb => "Eb",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::Gb => "Gb",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::Ab => "Ab",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::Bb => "Bb",
            NoteName::B => "B",
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = SargamError;

    fn from_str(s: &str) -> Result<Self> {
        // Case-insensitive: the parser hands us uppercased text, so "DB" is D-flat
        match s.to_uppercase().as_str() {
            "C" => Ok(NoteName::C),
            "C#" | "C♯" => Ok(NoteName::Cs),
            "DB" | "D♭" => Ok(NoteName::Db),
            "D" => Ok(NoteName::D),
            "D#" | "D♯" => Ok(NoteName::Ds),
            "EB" | "E♭" => Ok(NoteName::Eb),
            "E" => Ok(NoteName::E),
            "F" => Ok(NoteName::F),
            "F#" | "F♯" => Ok(NoteName::Fs),
            "GB" | "G♭" => Ok(NoteName::Gb),
            "G" => Ok(NoteName::G),
            "G#" | "G♯" => Ok(NoteName::Gs),
            "AB" | "A♭" => Ok(NoteName::Ab),
            "A" => Ok(NoteName::A),
            "A#" | "A♯" => Ok(NoteName::As),
            "BB" | "B♭" => Ok(NoteName::Bb),
            "B" => Ok(NoteName::B),
            _ => Err(SargamError::InvalidTonicValue(s.to_string())),
        }
    }
}

/// Resolve a note name with optional octave (`C`, `F#3`, `BB6`) to a MIDI pitch
pub fn pitch_from_note_name(text: &str) -> Result<u8> {
    let split = text
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (name, octave) = text.split_at(split);

    let name: NoteName = name.parse()?;
    let octave = if octave.is_empty() {
        DEFAULT_OCTAVE
    } else {
        octave
            .parse::<i64>()
            .map_err(|_| SargamError::InvalidTonicValue(text.to_string()))?
    };

    let pitch = octave
        .checked_mul(12)
        .and_then(|p| p.checked_add(name.semitone() as i64))
        .ok_or_else(|| SargamError::InvalidTonicValue(text.to_string()))?;
    if (0..=MAX_PITCH as i64).contains(&pitch) {
        Ok(pitch as u8)
    } else {
        Err(SargamError::TonicOutOfRange(pitch))
    }
}
