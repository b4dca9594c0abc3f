//! WASM API for sargam parsing
//!
//! A `SargamSession` owns the tonic for one stream of notation, so a `SA=`
//! directive in one call carries over to the next call on the same session.
//! Note events cross the boundary as plain objects:
//! `{ pitch, duration, isRest }`.

use wasm_bindgen::prelude::*;

use crate::config::ParserConfig;
use crate::models::{NoteEvent, TonicState};
use crate::parse::SargamReader;

fn to_js(notes: &impl serde::Serialize) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(notes).map_err(|e| {
        log::error!("Serialization error: {}", e);
        JsValue::from_str(&format!("Serialization error: {}", e))
    })
}

#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct SargamSession {
    tonic: TonicState,
    reader: SargamReader,
}

#[wasm_bindgen]
impl SargamSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SargamSession {
        SargamSession::default()
    }

    /// Build a session from a JSON config such as `{"defaultTonic": 60}`
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<SargamSession, JsValue> {
        let config = ParserConfig::from_json(config_json).map_err(|e| {
            log::warn!("{}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Ok(SargamSession {
            tonic: TonicState::from_config(&config),
            reader: SargamReader::new(),
        })
    }

    pub fn preprocess(&self, music: &str) -> String {
        self.reader.preprocessor().preprocess(music)
    }

    pub fn matches(&self, token: &str) -> bool {
        self.reader.parser().matches(token)
    }

    /// Parse one token; returns `null` for directives and unrecognized tokens
    #[wasm_bindgen(js_name = parseToken)]
    pub fn parse_token(&mut self, token: &str) -> Result<JsValue, JsValue> {
        match self.reader.parser().parse(token, &mut self.tonic) {
            Some(note) => to_js(&note),
            None => Ok(JsValue::NULL),
        }
    }

    /// Parse a whole line into an array of note events
    #[wasm_bindgen(js_name = parseLine)]
    pub fn parse_line(&mut self, line: &str) -> Result<JsValue, JsValue> {
        let notes: Vec<NoteEvent> = self.reader.parse_line(line, &mut self.tonic);
        log::debug!("parseLine: {} notes from '{}'", notes.len(), line);
        to_js(&notes)
    }

    #[wasm_bindgen(getter)]
    pub fn tonic(&self) -> u8 {
        self.tonic.get()
    }

    #[wasm_bindgen(js_name = setTonic)]
    pub fn set_tonic(&mut self, pitch: i32) -> Result<(), JsValue> {
        self.tonic
            .set(pitch as i64)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
