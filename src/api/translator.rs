//! JavaScript-facing translator session

use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize, translator_error};
use crate::session::UiTranslator;
use crate::settings::TranslatorSettings;

/// One translator session per decoder instance
#[wasm_bindgen]
pub struct MpeghUiTranslator {
    inner: UiTranslator,
}

#[wasm_bindgen]
impl MpeghUiTranslator {
    /// Create a session, optionally starting from a display language other
    /// than the default
    #[wasm_bindgen(constructor)]
    pub fn new(initial_display_language: Option<String>) -> MpeghUiTranslator {
        let settings = match initial_display_language {
            Some(language) => TranslatorSettings::with_display_language(&language),
            None => TranslatorSettings::default(),
        };
        wasm_info!("MpeghUiTranslator created, display language {}", settings.initial_display_language);
        MpeghUiTranslator {
            inner: UiTranslator::new(settings),
        }
    }

    /// Create a session from a settings object such as `{ initialDisplayLanguage: "deu" }`
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(settings: JsValue) -> Result<MpeghUiTranslator, JsValue> {
        let settings: TranslatorSettings = deserialize(settings, "Invalid translator settings")?;
        Ok(MpeghUiTranslator {
            inner: UiTranslator::new(settings),
        })
    }

    /// Translate an AudioScene XML update into the application scene object
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self, audio_scene_xml: &str) -> Result<JsValue, JsValue> {
        let json = self.inner.scene_to_json(audio_scene_xml).map_err(translator_error)?;
        serialize(&json, "Scene serialization error")
    }

    /// Translate an application change object into ActionEvent XML strings
    #[wasm_bindgen(js_name = toActionEvents)]
    pub fn to_action_events(&self, scene_changes: JsValue) -> Result<js_sys::Array, JsValue> {
        let changes: Value = deserialize(scene_changes, "Invalid scene changes")?;
        let events = self
            .inner
            .changes_to_action_events(&changes)
            .map_err(translator_error)?;

        let result = js_sys::Array::new();
        for event in &events {
            result.push(&JsValue::from_str(event));
        }
        wasm_info!("toActionEvents produced {} events", events.len());
        Ok(result)
    }

    #[wasm_bindgen(js_name = displayLanguage)]
    pub fn display_language(&self) -> Result<String, JsValue> {
        self.inner.display_language().map_err(translator_error)
    }

    /// Message of the most recent failure
    #[wasm_bindgen(js_name = lastError)]
    pub fn last_error(&self) -> Option<String> {
        self.inner.last_error()
    }
}
