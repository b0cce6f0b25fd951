//! MPEG-H UI Translator
//!
//! Translates between the MPEG-H decoder's UI manager and applications:
//! AudioScene XML snapshots become application JSON, and application change
//! requests become the ActionEvent XML commands the UI manager accepts.
//!
//! The converters in [`converters`] are pure functions; [`UiTranslator`]
//! adds the baseline scene and display language a live decoder session needs.

pub mod models;
pub mod converters;
pub mod errors;
pub mod settings;
pub mod session;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use converters::{
    compile_action_events, compile_actions, compose_audio_scene, parse_audio_scene, parse_scene_changes,
};
pub use errors::TranslatorError;
pub use session::UiTranslator;
pub use settings::TranslatorSettings;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        return;
    }

    log::info!("MPEG-H UI translator WASM module initialized");
}
