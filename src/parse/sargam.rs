//! Sargam token parser
//!
//! Converts one whitespace-delimited token into a [`NoteEvent`]:
//!
//! ```text
//! START -> MATCH_DEGREE -> OCTAVE_LOOP(0..n) -> DURATION_SCAN(0..n) -> DONE
//! ```
//!
//! Token grammar (case-insensitive):
//! - `SA=<value>` sets the tonic and produces no note
//! - `KH` is a rest
//! - `<swar><octave markers><duration letters>`, e.g. `nik<<QI`
//!
//! Octave markers: `>` raises to taar saptak, `<` lowers to mandra saptak.
//! Markers compound and saturate at the ends of the MIDI range.

use log::{debug, trace};

use crate::error::{Result, SargamError};
use crate::models::duration::{scan_duration, to_f64};
use crate::models::note_name::pitch_from_note_name;
use crate::models::{NoteEvent, Swar, TonicState, MAX_PITCH};

pub const REST_MARKER: &str = "KH";
pub const TAAR_MARKER: char = '>';
pub const MANDRA_MARKER: char = '<';
pub const TONIC_DIRECTIVE: &str = "SA=";

/// Lowering is refused below this pitch
const LOWEST_SHIFTABLE: u16 = 12;
/// Raising is refused above this pitch
const HIGHEST_SHIFTABLE: u16 = 115;
const OCTAVE: u16 = 12;

/// What a single token turned into
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenOutcome {
    Note(NoteEvent),
    /// A `SA=` directive was applied
    TonicSet { previous: u8, current: u8 },
    /// A `SA=` directive whose value could not be used
    DirectiveIgnored,
    Unrecognized,
}

impl TokenOutcome {
    pub fn note(self) -> Option<NoteEvent> {
        match self {
            TokenOutcome::Note(note) => Some(note),
            _ => None,
        }
    }
}

/// Byte position within the uppercased token, local to one parse call
struct Cursor<'a> {
    music: &'a str,
    index: usize,
}

impl<'a> Cursor<'a> {
    fn new(music: &'a str) -> Self {
        Self { music, index: 0 }
    }

    fn remaining(&self) -> &'a str {
        let music: &'a str = self.music;
        &music[self.index..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, bytes: usize) {
        self.index = (self.index + bytes).min(self.music.len());
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SargamParser;

impl SargamParser {
    pub fn new() -> Self {
        Self
    }

    /// Whether `token` belongs to this parser: it starts with a two-letter
    /// swar symbol or with the rest marker
    pub fn matches(&self, token: &str) -> bool {
        let music = token.to_uppercase();
        if music.starts_with(REST_MARKER) {
            return true;
        }
        music.get(..2).map_or(false, Swar::is_base_symbol)
    }

    /// Parse a token, returning the note it denotes.
    ///
    /// Directives and unrecognized tokens yield `None`.
    pub fn parse(&self, token: &str, tonic: &mut TonicState) -> Option<NoteEvent> {
        self.parse_token(token, tonic).note()
    }

    pub fn parse_token(&self, token: &str, tonic: &mut TonicState) -> TokenOutcome {
        let music = token.to_uppercase();

        if let Some(value) = directive_value(&music) {
            return self.apply_directive(value, tonic);
        }

        let mut cursor = Cursor::new(&music);

        if cursor.remaining().starts_with(REST_MARKER) {
            cursor.advance(REST_MARKER.len());
            trace!("rest: {}", token);
            return TokenOutcome::Note(NoteEvent::rest());
        }

        let Some((swar, len)) = Swar::parse_prefix(cursor.remaining()) else {
            trace!("no swar in '{}'", token);
            return TokenOutcome::Unrecognized;
        };
        cursor.advance(len);

        let pitch = tonic.get() as u16 + swar.offset() as u16;
        let pitch = resolve_saptak(&mut cursor, pitch);

        let (duration, consumed) = scan_duration(cursor.remaining());
        cursor.advance(consumed);

        let note = NoteEvent::note(pitch.min(MAX_PITCH as u16) as u8, to_f64(duration));
        trace!("{} ({}) -> {}", token, swar, note);
        TokenOutcome::Note(note)
    }

    fn apply_directive(&self, value: &str, tonic: &mut TonicState) -> TokenOutcome {
        let previous = tonic.get();
        match self
            .resolve_tonic_value(value, tonic)
            .and_then(|pitch| tonic.set(pitch as i64))
        {
            Ok(()) => {
                debug!("tonic set: {} -> {}", previous, tonic.get());
                TokenOutcome::TonicSet {
                    previous,
                    current: tonic.get(),
                }
            }
            Err(e) => {
                debug!("ignoring tonic directive: {}", e);
                TokenOutcome::DirectiveIgnored
            }
        }
    }

    /// Resolve a directive value: a pitch number, a western note name, or a
    /// swar relative to the current tonic (`SA=PA` moves Sa up a fifth)
    pub fn resolve_tonic_value(&self, value: &str, tonic: &TonicState) -> Result<u8> {
        if let Ok(pitch) = value.parse::<i64>() {
            if !(0..=MAX_PITCH as i64).contains(&pitch) {
                return Err(SargamError::TonicOutOfRange(pitch));
            }
            return Ok(pitch as u8);
        }

        match pitch_from_note_name(value) {
            Ok(pitch) => return Ok(pitch),
            Err(e @ SargamError::TonicOutOfRange(_)) => return Err(e),
            Err(_) => {}
        }

        // Work on a copy so the lookup cannot disturb the live tonic
        let mut scratch = *tonic;
        match self.parse_token(value, &mut scratch) {
            TokenOutcome::Note(note) if !note.is_rest => Ok(note.pitch),
            _ => Err(SargamError::InvalidTonicValue(value.to_string())),
        }
    }
}

/// The value of a `SA=` directive, if `music` is one.
///
/// A bare `SA=` is not a directive. Only the text up to a second `=` counts.
fn directive_value(music: &str) -> Option<&str> {
    let rest = music.strip_prefix(TONIC_DIRECTIVE)?;
    if rest.is_empty() {
        return None;
    }
    rest.split('=').next()
}

/// Apply consecutive octave markers at the cursor
fn resolve_saptak(cursor: &mut Cursor<'_>, mut pitch: u16) -> u16 {
    while let Some(marker) = cursor.peek() {
        match marker {
            MANDRA_MARKER => {
                if pitch >= LOWEST_SHIFTABLE {
                    pitch -= OCTAVE;
                }
            }
            TAAR_MARKER => {
                if pitch <= HIGHEST_SHIFTABLE {
                    pitch += OCTAVE;
                }
            }
            _ => break,
        }
        cursor.advance(marker.len_utf8());
    }
    pitch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_at(token: &str, tonic: i64) -> Option<NoteEvent> {
        let mut state = TonicState::with_pitch(tonic).unwrap();
        SargamParser::new().parse(token, &mut state)
    }

    #[test]
    fn test_matches() {
        let parser = SargamParser::new();
        assert!(parser.matches("sa"));
        assert!(parser.matches("REK"));
        assert!(parser.matches("dhkQ"));
        assert!(parser.matches("Ni>"));
        assert!(parser.matches("kh"));
        assert!(parser.matches("SA=60"));
        assert!(!parser.matches("s"));
        assert!(!parser.matches(""));
        assert!(!parser.matches("C5q"));
        assert!(!parser.matches("|"));
    }

    #[test]
    fn test_bare_swar_is_quarter() {
        let note = parse_at("sa", 60).unwrap();
        assert_eq!(note, NoteEvent::note(60, 0.25));
    }

    #[test]
    fn test_all_offsets() {
        let tokens = [
            "SA", "REK", "RE", "GAK", "GA", "MA", "MAT", "PA", "DHK", "DH", "NIK", "NI",
        ];
        for (offset, token) in tokens.iter().enumerate() {
            let note = parse_at(token, 60).unwrap();
            assert_eq!(note.pitch as usize, 60 + offset, "{}", token);
        }
    }

    #[test]
    fn test_rest() {
        let note = parse_at("KH", 60).unwrap();
        assert!(note.is_rest);
        assert_eq!(note.duration, 0.0);

        let note = parse_at("khQ", 60).unwrap();
        assert!(note.is_rest);
        assert_eq!(note.duration, 0.0);
    }

    #[test]
    fn test_duration_letters_sum() {
        assert_eq!(parse_at("SAQI", 60).unwrap().duration, 0.375);
        assert_eq!(parse_at("paw", 60).unwrap().duration, 1.0);
        assert_eq!(parse_at("niHQ", 60).unwrap().duration, 0.75);
    }

    #[test]
    fn test_unknown_suffix_contributes_nothing() {
        assert_eq!(parse_at("SAHZ", 60).unwrap().duration, 0.5);
        assert_eq!(parse_at("DHA", 60).unwrap().duration, 0.25);
    }

    #[test]
    fn test_octave_markers() {
        assert_eq!(parse_at("SA>", 60).unwrap().pitch, 72);
        assert_eq!(parse_at("SA<", 60).unwrap().pitch, 48);
        assert_eq!(parse_at("SA>>", 60).unwrap().pitch, 84);
        assert_eq!(parse_at("SA<>", 60).unwrap().pitch, 60);
        assert_eq!(parse_at("ni<I", 60).unwrap(), NoteEvent::note(59, 0.125));
    }

    #[test]
    fn test_octave_saturation() {
        assert_eq!(parse_at("SA<", 5).unwrap().pitch, 5);
        assert_eq!(parse_at("SA<<<", 30).unwrap().pitch, 6);
        assert_eq!(parse_at("SA>", 116).unwrap().pitch, 116);
        assert_eq!(parse_at("SA>", 115).unwrap().pitch, 127);
    }

    #[test]
    fn test_pitch_clamped_to_midi_range() {
        assert_eq!(parse_at("NI", 127).unwrap().pitch, 127);
        assert_eq!(parse_at("NI<", 127).unwrap().pitch, 126);
    }

    #[test]
    fn test_directive_sets_tonic() {
        let parser = SargamParser::new();
        let mut tonic = TonicState::new();
        assert_eq!(parser.parse("SA=67", &mut tonic), None);
        assert_eq!(tonic.get(), 67);
        assert_eq!(parser.parse("SA", &mut tonic).unwrap().pitch, 67);
    }

    #[test]
    fn test_directive_outcome() {
        let parser = SargamParser::new();
        let mut tonic = TonicState::with_pitch(60).unwrap();
        assert_eq!(
            parser.parse_token("sa=62", &mut tonic),
            TokenOutcome::TonicSet {
                previous: 60,
                current: 62
            }
        );
    }

    #[test]
    fn test_directive_note_names() {
        let parser = SargamParser::new();
        let mut tonic = TonicState::new();
        parser.parse("SA=C", &mut tonic);
        assert_eq!(tonic.get(), 60);
        parser.parse("sa=a4", &mut tonic);
        assert_eq!(tonic.get(), 57);
        parser.parse("sa=Bb", &mut tonic);
        assert_eq!(tonic.get(), 70);
    }

    #[test]
    fn test_directive_relative_swar() {
        let parser = SargamParser::new();
        let mut tonic = TonicState::with_pitch(60).unwrap();
        parser.parse("SA=PA", &mut tonic);
        assert_eq!(tonic.get(), 67);
        parser.parse("SA=SA<", &mut tonic);
        assert_eq!(tonic.get(), 55);
    }

    #[test]
    fn test_bad_directives_leave_tonic() {
        let parser = SargamParser::new();
        let mut tonic = TonicState::with_pitch(60).unwrap();
        for token in ["SA=128", "SA=-3", "SA=XYZ", "SA=KH", "SA==5", "SA=C11"] {
            assert_eq!(
                parser.parse_token(token, &mut tonic),
                TokenOutcome::DirectiveIgnored,
                "{}",
                token
            );
            assert_eq!(tonic.get(), 60, "{}", token);
        }
    }

    #[test]
    fn test_huge_octave_directive_is_ignored() {
        let parser = SargamParser::new();
        let mut tonic = TonicState::with_pitch(60).unwrap();
        for token in ["SA=C999999999999999999", "SA=C4611686018427387909"] {
            assert_eq!(
                parser.parse_token(token, &mut tonic),
                TokenOutcome::DirectiveIgnored,
                "{}",
                token
            );
            assert_eq!(tonic.get(), 60, "{}", token);
        }
    }

    #[test]
    fn test_bare_directive_prefix_is_a_note() {
        let note = parse_at("SA=", 60).unwrap();
        assert_eq!(note, NoteEvent::note(60, 0.25));
    }

    #[test]
    fn test_directive_value_stops_at_second_equals() {
        let parser = SargamParser::new();
        let mut tonic = TonicState::with_pitch(60).unwrap();
        parser.parse("SA=64=3", &mut tonic);
        assert_eq!(tonic.get(), 64);
    }

    #[test]
    fn test_unrecognized() {
        let parser = SargamParser::new();
        let mut tonic = TonicState::new();
        assert_eq!(parser.parse_token("", &mut tonic), TokenOutcome::Unrecognized);
        assert_eq!(parser.parse_token("S", &mut tonic), TokenOutcome::Unrecognized);
        assert_eq!(parser.parse_token("xsa", &mut tonic), TokenOutcome::Unrecognized);
    }
}
