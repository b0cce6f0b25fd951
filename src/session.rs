//! Stateful translator session
//!
//! The pure converters need the last scene reported by the decoder and the
//! display language currently applied to it. `UiTranslator` tracks both
//! behind one mutex, so a session can be shared between the thread feeding
//! scene updates and the thread submitting application changes.

use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use crate::converters::action_events::compile_action_events;
use crate::converters::changes_json::{parse_scene_changes, parse_scene_changes_str};
use crate::converters::scene_json::{compose_audio_scene, compose_audio_scene_string};
use crate::converters::scene_xml::parse_audio_scene;
use crate::errors::{Result, TranslatorError};
use crate::models::{AudioSceneChanges, AudioSceneConfig, Iso639Code, ValueChange};
use crate::settings::TranslatorSettings;

#[derive(Debug)]
struct SessionState {
    display_language: Iso639Code,
    /// Baseline for change compilation
    last_scene: Option<AudioSceneConfig>,
    last_error: Option<String>,
}

/// Translator session holding the baseline scene and display language
#[derive(Debug)]
pub struct UiTranslator {
    settings: TranslatorSettings,
    state: Mutex<SessionState>,
}

impl Default for UiTranslator {
    fn default() -> Self {
        Self::new(TranslatorSettings::default())
    }
}

impl UiTranslator {
    pub fn new(settings: TranslatorSettings) -> Self {
        let state = SessionState {
            display_language: settings.initial_display_language.clone(),
            last_scene: None,
            last_error: None,
        };
        Self {
            settings,
            state: Mutex::new(state),
        }
    }

    pub fn settings(&self) -> &TranslatorSettings {
        &self.settings
    }

    /// Parse a scene update, make it the new baseline and compose its JSON
    pub fn scene_to_json(&self, xml: &str) -> Result<Value> {
        let result = self.update_baseline(xml, |scene, language| compose_audio_scene(scene, language));
        self.record(result)
    }

    /// Compile application changes against the baseline.
    ///
    /// A requested display language becomes the tracked language once the
    /// whole change-set compiled successfully.
    pub fn changes_to_action_events(&self, changes: &Value) -> Result<Vec<String>> {
        let result = parse_scene_changes(changes)
            .map_err(TranslatorError::from)
            .and_then(|changes| self.compile_and_commit(&changes, None));
        self.record(result)
    }

    /// Buffer variant of [`Self::scene_to_json`].
    ///
    /// Writes the serialized JSON to `out` and returns its length. An
    /// undersized `out` fails with the required size; the scene still becomes
    /// the baseline since the decoder has already moved on to it.
    pub fn scene_to_json_into(&self, xml: &[u8], out: &mut [u8]) -> Result<usize> {
        let result = self.scene_to_json_buffer(xml, out);
        self.record(result)
    }

    /// Bounded variant of [`Self::changes_to_action_events`].
    ///
    /// `capacity` is the maximum number of events the caller accepts, zero
    /// meaning unbounded. When more events result nothing is committed and
    /// the required count is reported.
    pub fn changes_to_action_events_bounded(&self, json: &[u8], capacity: usize) -> Result<Vec<String>> {
        let result = self.bounded_action_events(json, capacity);
        self.record(result)
    }

    pub fn display_language(&self) -> Result<Iso639Code> {
        Ok(self.lock()?.display_language.clone())
    }

    /// Copy of the current baseline scene
    pub fn baseline(&self) -> Result<Option<AudioSceneConfig>> {
        Ok(self.lock()?.last_scene.clone())
    }

    /// Message of the most recent failure, kept until the next one
    pub fn last_error(&self) -> Option<String> {
        self.state.lock().ok().and_then(|state| state.last_error.clone())
    }

    fn scene_to_json_buffer(&self, xml: &[u8], out: &mut [u8]) -> Result<usize> {
        if xml.is_empty() {
            return Err(TranslatorError::InvalidArgument("empty AudioScene XML".to_string()));
        }
        let xml = std::str::from_utf8(xml)
            .map_err(|e| TranslatorError::InvalidArgument(format!("AudioScene XML is not UTF-8: {}", e)))?;

        let pretty = self.settings.pretty_json;
        let json = self.update_baseline(xml, |scene, language| {
            compose_audio_scene_string(scene, language, pretty)
        })?;

        let bytes = json.as_bytes();
        let Some(target) = out.get_mut(..bytes.len()) else {
            return Err(TranslatorError::InsufficientSpace { required: bytes.len() });
        };
        target.copy_from_slice(bytes);
        Ok(bytes.len())
    }

    fn bounded_action_events(&self, json: &[u8], capacity: usize) -> Result<Vec<String>> {
        if json.is_empty() {
            return Err(TranslatorError::InvalidArgument("empty scene changes".to_string()));
        }
        let json = std::str::from_utf8(json)
            .map_err(|e| TranslatorError::InvalidArgument(format!("Scene changes are not UTF-8: {}", e)))?;

        let changes = parse_scene_changes_str(json)?;
        let limit = if capacity == 0 { None } else { Some(capacity) };
        self.compile_and_commit(&changes, limit)
    }

    /// Parse outside the lock, then swap the baseline and compose under it
    fn update_baseline<T>(&self, xml: &str, compose: impl FnOnce(&AudioSceneConfig, &str) -> T) -> Result<T> {
        let scene = parse_audio_scene(xml)?;

        let mut state = self.lock()?;
        let output = compose(&scene, &state.display_language);
        log::info!(
            "Baseline scene {} (version {}) with {} presets",
            scene.uuid,
            scene.version,
            scene.presets.len()
        );
        state.last_scene = Some(scene);
        Ok(output)
    }

    fn compile_and_commit(&self, changes: &AudioSceneChanges, limit: Option<usize>) -> Result<Vec<String>> {
        let mut state = self.lock()?;
        let events = compile_action_events(
            changes,
            state.last_scene.as_ref(),
            Some(state.display_language.as_str()),
        )?;

        if let Some(limit) = limit {
            if events.len() > limit {
                return Err(TranslatorError::InsufficientSpace { required: events.len() });
            }
        }

        if let ValueChange::Changed(language) = &changes.display_language {
            state.display_language = language.clone();
        }
        Ok(events)
    }

    fn record<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            log::warn!("Translation failed: {}", err);
            if let Ok(mut state) = self.state.lock() {
                state.last_error = Some(err.to_string());
            }
        }
        result
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionState>> {
        self.state.lock().map_err(|_| TranslatorError::LockPoisoned)
    }
}
