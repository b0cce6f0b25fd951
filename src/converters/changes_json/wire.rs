//! serde shapes of the change-request JSON

use serde::Deserialize;

use crate::models::changes::*;
use crate::models::NIL_UUID;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SceneChangesJson {
    #[serde(default)]
    uuid: Option<String>,
    #[serde(default)]
    display_language: ValueChange<String>,
    #[serde(default)]
    audio_presets: Option<Vec<PresetChangesJson>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PresetChangesJson {
    id: i32,
    #[serde(default)]
    active: ValueChange<bool>,
    #[serde(default)]
    objects: Option<Vec<ElementChangesJson>>,
    #[serde(default)]
    switch_groups: Option<Vec<SwitchGroupChangesJson>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SwitchGroupChangesJson {
    id: i32,
    #[serde(default)]
    active_object: ValueChange<i32>,
    #[serde(default)]
    muting: Option<MutingJson>,
    #[serde(default)]
    objects: Option<Vec<ElementChangesJson>>,
}

#[derive(Debug, Deserialize)]
struct ElementChangesJson {
    id: i32,
    #[serde(default)]
    prominence: Option<ProminenceJson>,
    #[serde(default)]
    muting: Option<MutingJson>,
    #[serde(default)]
    azimuth: Option<OffsetJson>,
    #[serde(default)]
    elevation: Option<OffsetJson>,
}

#[derive(Debug, Deserialize)]
struct ProminenceJson {
    #[serde(default)]
    level: ValueChange<f64>,
}

#[derive(Debug, Deserialize)]
struct MutingJson {
    #[serde(default)]
    value: ValueChange<bool>,
}

/// Azimuth and elevation share one shape
#[derive(Debug, Deserialize)]
struct OffsetJson {
    #[serde(default)]
    offset: ValueChange<f64>,
}

impl From<SceneChangesJson> for AudioSceneChanges {
    fn from(json: SceneChangesJson) -> Self {
        AudioSceneChanges {
            uuid: json.uuid.unwrap_or_else(|| NIL_UUID.to_string()),
            display_language: json.display_language,
            presets: json
                .audio_presets
                .unwrap_or_default()
                .into_iter()
                .map(PresetChanges::from)
                .collect(),
        }
    }
}

impl From<PresetChangesJson> for PresetChanges {
    fn from(json: PresetChangesJson) -> Self {
        PresetChanges {
            id: json.id,
            is_active: json.active,
            audio_elements: into_element_changes(json.objects),
            switch_groups: json
                .switch_groups
                .unwrap_or_default()
                .into_iter()
                .map(SwitchGroupChanges::from)
                .collect(),
        }
    }
}

impl From<SwitchGroupChangesJson> for SwitchGroupChanges {
    fn from(json: SwitchGroupChangesJson) -> Self {
        SwitchGroupChanges {
            id: json.id,
            active_object: json.active_object,
            muting: json.muting.map(|m| m.value).unwrap_or_default(),
            items: into_element_changes(json.objects),
        }
    }
}

impl From<ElementChangesJson> for AudioElementChanges {
    fn from(json: ElementChangesJson) -> Self {
        AudioElementChanges {
            id: json.id,
            prominence: json.prominence.map(|p| p.level).unwrap_or_default(),
            muting: json.muting.map(|m| m.value).unwrap_or_default(),
            azimuth: json.azimuth.map(|a| a.offset).unwrap_or_default(),
            elevation: json.elevation.map(|e| e.offset).unwrap_or_default(),
        }
    }
}

fn into_element_changes(objects: Option<Vec<ElementChangesJson>>) -> Vec<AudioElementChanges> {
    objects
        .unwrap_or_default()
        .into_iter()
        .map(AudioElementChanges::from)
        .collect()
}
