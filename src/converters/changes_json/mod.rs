//! Application JSON → change-set
//!
//! The accepted JSON mirrors the composed scene format, so an application may
//! echo back an edited scene. Field presence maps one-to-one onto
//! [`ValueChange`]: a present field is a requested change, an absent or
//! `null` field is left unchanged. No cross-field checks happen here; the
//! action-event compiler reconciles the request with the baseline.
//!
//! ```text
//! { "uuid": "...", "displayLanguage": "deu",
//!   "audioPresets": [ { "id": 1, "active": true,
//!     "objects": [ { "id": 5, "prominence": { "level": 3.0 }, "muting": { "value": true } } ],
//!     "switchGroups": [ { "id": 9, "activeObject": 4, "objects": [ ... ] } ] } ] }
//! ```

mod wire;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::changes::AudioSceneChanges;

/// Malformed change requests
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChangesError {
    /// Not valid JSON, or a field has the wrong type or is missing
    #[error("Invalid scene changes: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for ChangesError {
    fn from(err: serde_json::Error) -> Self {
        ChangesError::InvalidJson(err.to_string())
    }
}

/// Parse a change request from a JSON value
pub fn parse_scene_changes(json: &Value) -> Result<AudioSceneChanges, ChangesError> {
    let changes = wire::SceneChangesJson::deserialize(json)?;
    Ok(changes.into())
}

/// Parse a change request from JSON text
pub fn parse_scene_changes_str(json: &str) -> Result<AudioSceneChanges, ChangesError> {
    let changes: wire::SceneChangesJson = serde_json::from_str(json)?;
    Ok(changes.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::changes::ValueChange;
    use serde_json::json;

    #[test]
    fn test_presence_maps_to_changed() {
        let changes = parse_scene_changes(&json!({
            "uuid": "abc",
            "displayLanguage": "deu",
            "audioPresets": [{
                "id": 1,
                "active": true,
                "objects": [{
                    "id": 5,
                    "prominence": { "level": 5.0 },
                    "muting": { "value": true },
                    "azimuth": { "offset": -20 },
                }],
                "switchGroups": [{
                    "id": 9,
                    "activeObject": 3,
                    "muting": { "value": false },
                    "objects": [{ "id": 3, "elevation": { "offset": 12.5 } }],
                }],
            }],
        }))
        .unwrap();

        assert_eq!(changes.uuid, "abc");
        assert_eq!(changes.display_language, ValueChange::Changed("deu".to_string()));

        let preset = &changes.presets[0];
        assert_eq!(preset.id, 1);
        assert_eq!(preset.is_active, ValueChange::Changed(true));

        let element = &preset.audio_elements[0];
        assert_eq!(element.id, 5);
        assert_eq!(element.prominence, ValueChange::Changed(5.0));
        assert_eq!(element.muting, ValueChange::Changed(true));
        assert_eq!(element.azimuth, ValueChange::Changed(-20.0));
        assert_eq!(element.elevation, ValueChange::Unchanged);

        let group = &preset.switch_groups[0];
        assert_eq!(group.active_object, ValueChange::Changed(3));
        assert_eq!(group.muting, ValueChange::Changed(false));
        assert_eq!(group.items[0].elevation, ValueChange::Changed(12.5));
        assert_eq!(group.items[0].prominence, ValueChange::Unchanged);
    }

    #[test]
    fn test_absent_and_null_are_unchanged() {
        let changes = parse_scene_changes(&json!({
            "displayLanguage": null,
            "audioPresets": [{ "id": 2, "active": null, "objects": [{ "id": 1, "prominence": {} }] }],
        }))
        .unwrap();

        assert_eq!(changes.uuid, crate::models::NIL_UUID);
        assert_eq!(changes.display_language, ValueChange::Unchanged);
        let preset = &changes.presets[0];
        assert_eq!(preset.is_active, ValueChange::Unchanged);
        assert!(preset.switch_groups.is_empty());
        assert!(!preset.audio_elements[0].has_changes());
    }

    #[test]
    fn test_echoed_scene_fields_are_ignored() {
        // a composed scene carries min/max/default and labels; only the current value counts
        let changes = parse_scene_changes(&json!({
            "uuid": "abc",
            "displayLanguageHint": "eng",
            "audioPresets": [{
                "id": 1, "labels": [], "contentLanguages": [], "default": true, "active": true,
                "objects": [{ "id": 5, "labels": [],
                    "prominence": { "level": 2.0, "min": -10.0, "max": 10.0, "default": 0.0 } }],
                "switchGroups": [],
            }],
        }))
        .unwrap();

        assert_eq!(changes.display_language, ValueChange::Unchanged);
        assert_eq!(changes.presets[0].audio_elements[0].prominence, ValueChange::Changed(2.0));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let err = parse_scene_changes(&json!({
            "audioPresets": [{ "id": 1, "active": "yes" }],
        }))
        .unwrap_err();
        assert!(matches!(err, ChangesError::InvalidJson(_)));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = parse_scene_changes(&json!({ "audioPresets": [{ "active": true }] })).unwrap_err();
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_parse_from_text() {
        let changes = parse_scene_changes_str(r#"{"uuid":"abc","displayLanguage":"fra"}"#).unwrap();
        assert_eq!(changes.display_language, ValueChange::Changed("fra".to_string()));
        assert!(changes.presets.is_empty());

        assert!(parse_scene_changes_str("{not json").is_err());
    }
}
