//! Translator configuration

use serde::{Deserialize, Serialize};

use crate::models::Iso639Code;

/// Language assumed to be active on the decoder before any change is sent
pub const DEFAULT_DISPLAY_LANGUAGE: &str = "eng";

/// Session settings.
///
/// Every field is optional when deserialized; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslatorSettings {
    /// Display language the session starts with
    pub initial_display_language: Iso639Code,
    /// Pretty-print JSON written by the buffer API
    pub pretty_json: bool,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            initial_display_language: DEFAULT_DISPLAY_LANGUAGE.to_string(),
            pretty_json: false,
        }
    }
}

impl TranslatorSettings {
    pub fn with_display_language(language: &str) -> Self {
        Self {
            initial_display_language: language.to_string(),
            ..Self::default()
        }
    }
}
