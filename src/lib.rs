//! Sargam Notation WASM Module
//!
//! Translates Hindustani sargam notation (`sa re gak ma> pa,dh KH`) into
//! note events with MIDI pitch and fractional duration.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parse;

// Re-export commonly used types
pub use config::ParserConfig;
pub use error::{Result, SargamError};
pub use models::*;
pub use parse::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();

    log::info!("Sargam notation WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    // Fails only if a logger is already installed
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
