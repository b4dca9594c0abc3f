//! Models module for sargam notation
//!
//! This module contains the value types produced and consumed by the
//! parser: scale degrees, duration letters, note events and the tonic.

pub mod duration;
pub mod note_event;
pub mod note_name;
pub mod swar;
pub mod tonic_state;

// Re-export commonly used types
pub use duration::{DurationLetter, Rational};
pub use note_event::{NoteEvent, MAX_PITCH};
pub use note_name::NoteName;
pub use swar::Swar;
pub use tonic_state::{TonicState, DEFAULT_TONIC};
