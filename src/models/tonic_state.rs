//! Current tonic (Sa)
//!
//! Owned by whoever drives the parser and passed by `&mut` into every
//! parse call. A `SA=` directive in one token changes the pitch used by
//! every later token until the next directive.

use crate::config::ParserConfig;
use crate::error::{Result, SargamError};
use crate::models::note_event::MAX_PITCH;
use serde::{Deserialize, Serialize};

/// Sa maps to C# (61) unless configured otherwise
pub const DEFAULT_TONIC: u8 = 61;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TonicState {
    pitch: u8,
}

impl TonicState {
    pub fn new() -> Self {
        Self {
            pitch: DEFAULT_TONIC,
        }
    }

    pub fn with_pitch(pitch: i64) -> Result<Self> {
        let mut state = Self::new();
        state.set(pitch)?;
        Ok(state)
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            pitch: config.default_tonic.min(MAX_PITCH),
        }
    }

    pub fn get(&self) -> u8 {
        self.pitch
    }

    /// Replace the tonic; values outside 0-127 leave it unchanged
    pub fn set(&mut self, pitch: i64) -> Result<()> {
        if !(0..=MAX_PITCH as i64).contains(&pitch) {
            return Err(SargamError::TonicOutOfRange(pitch));
        }
        self.pitch = pitch as u8;
        Ok(())
    }
}

impl Default for TonicState {
    fn default() -> Self {
        Self::new()
    }
}
