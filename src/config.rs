//! Parser configuration
//!
//! Hosts may supply a JSON document, e.g. `{"defaultTonic": 60}`. Missing
//! fields fall back to their defaults.

use crate::error::{Result, SargamError};
use crate::models::note_event::MAX_PITCH;
use crate::models::tonic_state::DEFAULT_TONIC;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    /// Pitch given to Sa before any `SA=` directive
    pub default_tonic: u8,
}

impl ParserConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ParserConfig =
            serde_json::from_str(json).map_err(|e| SargamError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_tonic > MAX_PITCH {
            return Err(SargamError::InvalidConfig(format!(
                "defaultTonic {} is outside 0-127",
                self.default_tonic
            )));
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_tonic: DEFAULT_TONIC,
        }
    }
}
