//! Scene model → application JSON
//!
//! Collections are always emitted, as empty arrays when there is nothing to
//! list, so applications can iterate them unconditionally. Optional
//! properties are emitted only when the scene carries them.

use serde_json::{json, Map, Value};

use crate::models::scene::*;

/// Compose the application JSON for `scene`.
///
/// `display_language_hint` is written to the output as-is.
pub fn compose_audio_scene(scene: &AudioSceneConfig, display_language_hint: &str) -> Value {
    let presets: Vec<Value> = scene
        .presets
        .iter()
        .map(|preset| {
            compose_preset(
                preset,
                scene.elements_for(preset),
                scene.switch_groups_for(preset),
            )
        })
        .collect();

    json!({
        "uuid": scene.uuid,
        "displayLanguageHint": display_language_hint,
        "audioPresets": presets,
    })
}

/// Compose and serialize; identical scenes always yield identical bytes
pub fn compose_audio_scene_string(
    scene: &AudioSceneConfig,
    display_language_hint: &str,
    pretty: bool,
) -> String {
    let value = compose_audio_scene(scene, display_language_hint);
    if pretty {
        format!("{:#}", value)
    } else {
        value.to_string()
    }
}

fn compose_labels(descriptions: &[LocalizedString]) -> Value {
    Value::Array(
        descriptions
            .iter()
            .map(|label| json!({ "lang": label.lang_code, "value": label.value }))
            .collect(),
    )
}

fn compose_prominence(prominence: &ProminenceLevelProperty) -> Value {
    json!({
        "level": prominence.current_value,
        "min": prominence.min_value,
        "max": prominence.max_value,
        "default": prominence.default_value,
    })
}

fn compose_muting(muting: &MutingProperty) -> Value {
    json!({
        "value": muting.current_value,
        "default": muting.default_value,
    })
}

fn compose_azimuth(azimuth: &AzimuthProperty) -> Value {
    json!({
        "offset": azimuth.current_value,
        "min": azimuth.min_value,
        "max": azimuth.max_value,
        "default": azimuth.default_value,
    })
}

fn compose_elevation(elevation: &ElevationProperty) -> Value {
    json!({
        "offset": elevation.current_value,
        "min": elevation.min_value,
        "max": elevation.max_value,
        "default": elevation.default_value,
    })
}

/// Labels, content language and content kind shared by elements and switch items
fn insert_kind(
    out: &mut Map<String, Value>,
    kind: Option<&AudioElementKind>,
    custom_kind: Option<&CustomAudioElementKind>,
) {
    let descriptions = custom_kind.map(|c| c.description.as_slice()).unwrap_or(&[]);
    out.insert("labels".into(), compose_labels(descriptions));

    if let Some(lang) = custom_kind.and_then(|c| c.lang_code.as_deref()) {
        if !lang.is_empty() {
            out.insert("contentLanguage".into(), json!(lang));
        }
    }
    if let Some(kind) = kind {
        out.insert("contentKind".into(), json!(kind.code));
    }
}

fn insert_properties(
    out: &mut Map<String, Value>,
    prominence: Option<&ProminenceLevelProperty>,
    muting: Option<&MutingProperty>,
    azimuth: Option<&AzimuthProperty>,
    elevation: Option<&ElevationProperty>,
) {
    if let Some(prominence) = prominence {
        out.insert("prominence".into(), compose_prominence(prominence));
    }
    if let Some(muting) = muting {
        out.insert("muting".into(), compose_muting(muting));
    }
    if let Some(azimuth) = azimuth {
        out.insert("azimuth".into(), compose_azimuth(azimuth));
    }
    if let Some(elevation) = elevation {
        out.insert("elevation".into(), compose_elevation(elevation));
    }
}

fn compose_audio_element(element: &AudioElement) -> Value {
    let mut out = Map::new();
    out.insert("id".into(), json!(element.id));
    insert_kind(&mut out, element.kind.as_ref(), element.custom_kind.as_ref());
    insert_properties(
        &mut out,
        element.prominence.as_ref(),
        element.muting.as_ref(),
        element.azimuth.as_ref(),
        element.elevation.as_ref(),
    );
    Value::Object(out)
}

/// Items carry no properties of their own; they report the group's
fn compose_switch_item(item: &AudioElementSwitchItem, group: &AudioElementSwitch) -> Value {
    let mut out = Map::new();
    out.insert("id".into(), json!(item.id));
    insert_kind(&mut out, item.kind.as_ref(), item.custom_kind.as_ref());
    insert_properties(
        &mut out,
        group.prominence.as_ref(),
        group.muting.as_ref(),
        group.azimuth.as_ref(),
        group.elevation.as_ref(),
    );
    Value::Object(out)
}

fn compose_switch_group(group: &AudioElementSwitch) -> Value {
    let mut out = Map::new();
    out.insert("id".into(), json!(group.id));

    let descriptions = group.custom_kind.as_ref().map(|c| c.description.as_slice()).unwrap_or(&[]);
    out.insert("labels".into(), compose_labels(descriptions));

    if let Some(muting) = &group.muting {
        out.insert("muting".into(), compose_muting(muting));
    }

    let mut objects = Vec::with_capacity(group.items.len());
    for item in &group.items {
        if item.is_default {
            out.insert("defaultObject".into(), json!(item.id));
        }
        if item.is_active {
            out.insert("activeObject".into(), json!(item.id));
        }
        objects.push(compose_switch_item(item, group));
    }
    out.insert("objects".into(), Value::Array(objects));

    Value::Object(out)
}

fn compose_preset(
    preset: &Preset,
    audio_elements: &[AudioElement],
    switch_groups: &[AudioElementSwitch],
) -> Value {
    let mut out = Map::new();
    out.insert("id".into(), json!(preset.id));

    let descriptions = preset.custom_kind.as_ref().map(|c| c.description.as_slice()).unwrap_or(&[]);
    out.insert("labels".into(), compose_labels(descriptions));
    out.insert("contentLanguages".into(), Value::Array(Vec::new()));

    if let Some(kind) = &preset.kind {
        out.insert("contentKind".into(), json!(kind.code));
    }
    out.insert("default".into(), json!(preset.is_default));
    out.insert("active".into(), json!(preset.is_active));

    out.insert(
        "objects".into(),
        Value::Array(audio_elements.iter().map(compose_audio_element).collect()),
    );
    out.insert(
        "switchGroups".into(),
        Value::Array(switch_groups.iter().map(compose_switch_group).collect()),
    );

    Value::Object(out)
}
