//! Change-set → ActionEvents
//!
//! Diffs a change-set against the baseline scene and emits one ActionEvent per
//! effective change, in a fixed order:
//!
//! 1. display language (global, no scene needed)
//! 2. per preset, in request order: preset selection, then audio elements
//!    (prominence, muting, azimuth, elevation), then switch groups
//!    (selection, muting, then per item prominence, azimuth, elevation)
//!
//! A requested value equal to the baseline's current value is suppressed. If
//! the baseline has no such property at all there is nothing to compare
//! against, so the request is always emitted.

use super::errors::CompileError;
use crate::models::changes::*;
use crate::models::scene::*;
use crate::models::{ActionEvent, ActionType, NIL_UUID};

/// Priority sent with a language selection
const LANGUAGE_PRIORITY: i32 = 0;

/// Whether `change` requests a value the baseline property does not already hold
pub fn is_effective<P: CurrentValue>(change: &ValueChange<P::Value>, baseline: Option<&P>) -> bool {
    match (change, baseline) {
        (ValueChange::Unchanged, _) => false,
        (ValueChange::Changed(_), None) => true,
        (ValueChange::Changed(value), Some(property)) => *value != property.current(),
    }
}

/// Compile `changes` into ActionEvents.
///
/// Without a `baseline` only global events (the display language) can be
/// produced. Without a `baseline_language` a requested language is always
/// considered different.
pub fn compile_actions(
    changes: &AudioSceneChanges,
    baseline: Option<&AudioSceneConfig>,
    baseline_language: Option<&str>,
) -> Result<Vec<ActionEvent>, CompileError> {
    let mut events = Vec::new();

    if let Some(language) = changes.display_language.new_value() {
        if baseline_language.map_or(true, |current| current != language.as_str()) {
            events.push(
                ActionEvent::new(ActionType::InterfaceLanguageSelected, NIL_UUID)
                    .with_text(language)
                    .with_int(LANGUAGE_PRIORITY),
            );
        }
    }

    let Some(scene) = baseline else {
        if !changes.presets.is_empty() {
            log::debug!("No baseline scene, skipping {} preset changes", changes.presets.len());
        }
        return Ok(events);
    };

    let uuid = changes.uuid.as_str();
    for preset_changes in &changes.presets {
        let preset = find_by_id(&scene.presets, preset_changes.id)
            .ok_or(CompileError::UnknownPreset(preset_changes.id))?;

        if preset_changes.requests_activation() {
            let already_active = scene.active_preset().map(|p| p.id) == Some(preset_changes.id);
            if !already_active {
                events.push(ActionEvent::new(ActionType::PresetSelected, uuid).with_int(preset_changes.id));
            }
        }

        let elements = scene.elements_for(preset);
        for element_changes in &preset_changes.audio_elements {
            if !element_changes.has_changes() {
                continue;
            }
            let element = find_by_id(elements, element_changes.id).ok_or(CompileError::UnknownAudioElement {
                preset: preset.id,
                id: element_changes.id,
            })?;
            compile_element(uuid, element_changes, element, &mut events);
        }

        let groups = scene.switch_groups_for(preset);
        for group_changes in &preset_changes.switch_groups {
            if !group_changes.has_changes() {
                continue;
            }
            let group = find_by_id(groups, group_changes.id).ok_or(CompileError::UnknownSwitchGroup {
                preset: preset.id,
                id: group_changes.id,
            })?;
            compile_switch_group(uuid, group_changes, group, &mut events);
        }
    }

    log::debug!("Compiled {} action events for scene {}", events.len(), uuid);
    Ok(events)
}

fn compile_element(
    uuid: &str,
    changes: &AudioElementChanges,
    element: &AudioElement,
    events: &mut Vec<ActionEvent>,
) {
    let id = changes.id;

    if let ValueChange::Changed(level) = changes.prominence {
        if is_effective(&changes.prominence, element.prominence.as_ref()) {
            events.push(
                ActionEvent::new(ActionType::AudioElementProminenceLevelChanged, uuid)
                    .with_int(id)
                    .with_float(level),
            );
        }
    }

    if let ValueChange::Changed(muted) = changes.muting {
        if is_effective(&changes.muting, element.muting.as_ref()) {
            events.push(
                ActionEvent::new(ActionType::AudioElementMutingChanged, uuid)
                    .with_int(id)
                    .with_bool(muted),
            );
        }
    }

    if let ValueChange::Changed(offset) = changes.azimuth {
        if is_effective(&changes.azimuth, element.azimuth.as_ref()) {
            events.push(
                ActionEvent::new(ActionType::AudioElementAzimuthChanged, uuid)
                    .with_int(id)
                    .with_float(offset),
            );
        }
    }

    if let ValueChange::Changed(offset) = changes.elevation {
        if is_effective(&changes.elevation, element.elevation.as_ref()) {
            events.push(
                ActionEvent::new(ActionType::AudioElementElevationChanged, uuid)
                    .with_int(id)
                    .with_float(offset),
            );
        }
    }
}

fn compile_switch_group(
    uuid: &str,
    changes: &SwitchGroupChanges,
    group: &AudioElementSwitch,
    events: &mut Vec<ActionEvent>,
) {
    let id = changes.id;

    if let ValueChange::Changed(requested) = changes.active_object {
        let is_selected = find_active(&group.items).map(|item| item.id) == Some(requested);
        if !is_selected {
            events.push(
                ActionEvent::new(ActionType::AudioElementSwitchSelected, uuid)
                    .with_int(id)
                    .with_float(f64::from(requested)),
            );
        }
    }

    if let ValueChange::Changed(muted) = changes.muting {
        if is_effective(&changes.muting, group.muting.as_ref()) {
            events.push(
                ActionEvent::new(ActionType::AudioElementSwitchMutingChanged, uuid)
                    .with_int(id)
                    .with_bool(muted),
            );
        }
    }

    // Items share the group's properties, so the group is the comparison basis.
    // Per-item muting cannot be signalled and is dropped.
    for item in &changes.items {
        if let ValueChange::Changed(level) = item.prominence {
            if is_effective(&item.prominence, group.prominence.as_ref()) {
                events.push(
                    ActionEvent::new(ActionType::AudioElementSwitchProminenceLevelChanged, uuid)
                        .with_int(id)
                        .with_float(level),
                );
            }
        }

        if let ValueChange::Changed(offset) = item.azimuth {
            if is_effective(&item.azimuth, group.azimuth.as_ref()) {
                events.push(
                    ActionEvent::new(ActionType::AudioElementSwitchAzimuthChanged, uuid)
                        .with_int(id)
                        .with_float(offset),
                );
            }
        }

        if let ValueChange::Changed(offset) = item.elevation {
            if is_effective(&item.elevation, group.elevation.as_ref()) {
                events.push(
                    ActionEvent::new(ActionType::AudioElementSwitchElevationChanged, uuid)
                        .with_int(id)
                        .with_float(offset),
                );
            }
        }
    }
}
