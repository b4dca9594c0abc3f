//! Error types for sargam parsing
//!
//! The note parser itself never fails: malformed directives and unknown
//! tokens are ignored. These errors surface only from the tonic accessors,
//! configuration loading and the directive resolver, whose callers decide
//! whether to swallow them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SargamError {
    /// Directive value is neither a pitch number nor a resolvable note name
    #[error("invalid tonic value: '{0}'")]
    InvalidTonicValue(String),

    /// Pitch lies outside the MIDI range 0-127
    #[error("tonic pitch {0} is outside 0-127")]
    TonicOutOfRange(i64),

    #[error("invalid parser config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SargamError>;
