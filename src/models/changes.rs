//! Change-set model
//!
//! An application describes the desired scene state as a set of changes. Each
//! field is either left alone or carries a requested new value; whether the
//! request actually differs from the baseline is decided later by the
//! action-event compiler.

use serde::{Deserialize, Deserializer};

use super::scene::Iso639Code;

/// A value that may or may not have been changed
#[derive(Debug, Clone, PartialEq)]
pub enum ValueChange<T> {
    Unchanged,
    Changed(T),
}

impl<T> Default for ValueChange<T> {
    fn default() -> Self {
        ValueChange::Unchanged
    }
}

impl<T> ValueChange<T> {
    pub fn is_changed(&self) -> bool {
        matches!(self, ValueChange::Changed(_))
    }

    pub fn new_value(&self) -> Option<&T> {
        match self {
            ValueChange::Changed(value) => Some(value),
            ValueChange::Unchanged => None,
        }
    }
}

impl<T: PartialEq> ValueChange<T> {
    /// Whether this carries a value different from `current`
    pub fn is_updated(&self, current: &T) -> bool {
        match self {
            ValueChange::Changed(value) => value != current,
            ValueChange::Unchanged => false,
        }
    }
}

impl<T> From<Option<T>> for ValueChange<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => ValueChange::Changed(value),
            None => ValueChange::Unchanged,
        }
    }
}

// Absent (via #[serde(default)]) and null both mean "unchanged".
impl<'de, T: Deserialize<'de>> Deserialize<'de> for ValueChange<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(ValueChange::from)
    }
}

/// Requested changes to one audio element (or one switch-group item)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AudioElementChanges {
    pub id: i32,
    pub prominence: ValueChange<f64>,
    pub muting: ValueChange<bool>,
    pub azimuth: ValueChange<f64>,
    pub elevation: ValueChange<f64>,
}

impl AudioElementChanges {
    pub fn has_changes(&self) -> bool {
        self.prominence.is_changed()
            || self.muting.is_changed()
            || self.azimuth.is_changed()
            || self.elevation.is_changed()
    }

    /// Changes that can be signalled for an item of a switch group (no muting)
    pub fn has_switch_item_changes(&self) -> bool {
        self.prominence.is_changed() || self.azimuth.is_changed() || self.elevation.is_changed()
    }
}

/// Requested changes to one switch group
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwitchGroupChanges {
    pub id: i32,
    pub active_object: ValueChange<i32>,
    pub muting: ValueChange<bool>,
    pub items: Vec<AudioElementChanges>,
}

impl SwitchGroupChanges {
    pub fn has_changes(&self) -> bool {
        self.active_object.is_changed()
            || self.muting.is_changed()
            || self.items.iter().any(AudioElementChanges::has_switch_item_changes)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PresetChanges {
    pub id: i32,
    pub is_active: ValueChange<bool>,
    pub audio_elements: Vec<AudioElementChanges>,
    pub switch_groups: Vec<SwitchGroupChanges>,
}

impl PresetChanges {
    /// Whether this requests the preset to become the active one
    pub fn requests_activation(&self) -> bool {
        matches!(self.is_active, ValueChange::Changed(true))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AudioSceneChanges {
    pub uuid: String,
    pub display_language: ValueChange<Iso639Code>,
    pub presets: Vec<PresetChanges>,
}
