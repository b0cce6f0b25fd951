//! AudioScene domain model
//!
//! Typed representation of one MPEG-H UI manager AudioScene snapshot: presets,
//! audio elements, switch groups and their adjustable properties. A scene is
//! built once per inbound scene update and is read-only afterwards.

use serde::{Deserialize, Serialize};

/// ISO 639-2 three-letter language code
pub type Iso639Code = String;

/// Accepted AudioScene XML format versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneVersion {
    /// Objects of the active preset live on scene level
    V9,
    /// Objects live on preset level
    V10,
    V11,
}

impl SceneVersion {
    /// Resolve a version tag such as "9.0" or "10.0.1".
    ///
    /// Any tag not starting with one of the accepted major versions is rejected.
    pub fn from_tag(tag: &str) -> Option<SceneVersion> {
        if tag.starts_with("9.0") {
            Some(SceneVersion::V9)
        } else if tag.starts_with("10.0") {
            Some(SceneVersion::V10)
        } else if tag.starts_with("11.0") {
            Some(SceneVersion::V11)
        } else {
            None
        }
    }

    /// Whether audio elements and switch groups are listed per preset
    pub fn has_preset_objects(&self) -> bool {
        !matches!(self, SceneVersion::V9)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub lang_code: Iso639Code,
    pub value: String,
}

/// All DRC effects available for the current content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrcInfo {
    pub available_effects: Vec<u32>,
}

/// Free-text description with one label per language
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomDescriptor {
    pub description: Vec<LocalizedString>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetTable {
    pub code: u8,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchKindTable {
    pub code: u8,
    pub alias: Option<String>,
}

/// Content kind of an audio element (ContentKindTable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioElementKind {
    pub code: u8,
    pub alias: Option<String>,
    /// Language of the associated audio content
    pub lang_code: Option<Iso639Code>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomAudioElementKind {
    pub description: Vec<LocalizedString>,
    /// Language of the associated audio content
    pub lang_code: Option<Iso639Code>,
}

/// Gain control of an element or switch group relative to the whole scene.
///
/// The decoder keeps the overall loudness constant when this changes. The
/// allowed range is [-63 dB, 31 dB]; `min_value`/`max_value` may narrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProminenceLevelProperty {
    pub is_action_allowed: bool,
    pub min_value: f32,
    pub max_value: f32,
    pub current_value: f32,
    pub default_value: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutingProperty {
    pub is_action_allowed: bool,
    /// true for muted
    pub current_value: bool,
    pub default_value: bool,
}

/// Azimuth offset in degrees, within [-180, 180]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzimuthProperty {
    pub is_action_allowed: bool,
    /// Rightmost position
    pub min_value: f32,
    /// Leftmost position
    pub max_value: f32,
    pub current_value: f32,
    pub default_value: f32,
}

/// Elevation offset in degrees, within [-90, 90]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationProperty {
    pub is_action_allowed: bool,
    pub min_value: f32,
    pub max_value: f32,
    pub current_value: f32,
    pub default_value: f32,
}

/// Property whose current value can be compared against a requested change
pub trait CurrentValue {
    type Value: PartialEq;

    fn current(&self) -> Self::Value;
}

impl CurrentValue for ProminenceLevelProperty {
    type Value = f64;

    fn current(&self) -> f64 {
        f64::from(self.current_value)
    }
}

impl CurrentValue for MutingProperty {
    type Value = bool;

    fn current(&self) -> bool {
        self.current_value
    }
}

impl CurrentValue for AzimuthProperty {
    type Value = f64;

    fn current(&self) -> f64 {
        f64::from(self.current_value)
    }
}

impl CurrentValue for ElevationProperty {
    type Value = f64;

    fn current(&self) -> f64 {
        f64::from(self.current_value)
    }
}

/// A single controllable audio object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioElement {
    pub id: i32,
    pub is_available: bool,
    pub kind: Option<AudioElementKind>,
    pub custom_kind: Option<CustomAudioElementKind>,
    pub prominence: Option<ProminenceLevelProperty>,
    pub muting: Option<MutingProperty>,
    pub azimuth: Option<AzimuthProperty>,
    pub elevation: Option<ElevationProperty>,
}

/// One selectable alternative of a switch group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioElementSwitchItem {
    pub id: i32,
    pub is_available: bool,
    pub is_active: bool,
    pub is_default: bool,
    pub is_selectable: bool,
    pub kind: Option<AudioElementKind>,
    pub custom_kind: Option<CustomAudioElementKind>,
}

/// Switch group: mutually exclusive audio elements sharing one set of properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioElementSwitch {
    pub id: i32,
    pub is_available: bool,
    pub is_action_allowed: bool,
    pub kind: Option<SwitchKindTable>,
    pub custom_kind: Option<CustomDescriptor>,
    pub prominence: Option<ProminenceLevelProperty>,
    pub muting: Option<MutingProperty>,
    pub azimuth: Option<AzimuthProperty>,
    pub elevation: Option<ElevationProperty>,
    pub items: Vec<AudioElementSwitchItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: i32,
    /// Currently applied
    pub is_active: bool,
    /// Currently available for selection
    pub is_available: bool,
    pub is_default: bool,
    pub kind: Option<PresetTable>,
    pub custom_kind: Option<CustomDescriptor>,
    /// Only populated by version >= 10 scenes
    pub audio_elements: Vec<AudioElement>,
    /// Only populated by version >= 10 scenes
    pub switch_groups: Vec<AudioElementSwitch>,
}

/// Root AudioScene snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSceneConfig {
    pub uuid: String,
    pub version: String,
    /// Whether the scene changed in the bitstream
    pub config_changed: bool,
    pub drc_info: DrcInfo,
    pub presets: Vec<Preset>,
    /// Objects of the active preset, version 9 only
    pub audio_elements: Vec<AudioElement>,
    /// Switch groups of the active preset, version 9 only
    pub switch_groups: Vec<AudioElementSwitch>,
}

impl AudioSceneConfig {
    /// Major format version; `None` only for hand-built scenes with an unknown tag
    pub fn scene_version(&self) -> Option<SceneVersion> {
        SceneVersion::from_tag(&self.version)
    }

    pub fn active_preset(&self) -> Option<&Preset> {
        find_active(&self.presets)
    }

    /// Authoritative audio elements of `preset`.
    ///
    /// Version 9 scenes list the active preset's objects on scene level and
    /// leave the preset's own list empty.
    pub fn elements_for<'a>(&'a self, preset: &'a Preset) -> &'a [AudioElement] {
        if preset.is_active && preset.audio_elements.is_empty() {
            &self.audio_elements
        } else {
            &preset.audio_elements
        }
    }

    /// Authoritative switch groups of `preset`, same fallback as [`Self::elements_for`]
    pub fn switch_groups_for<'a>(&'a self, preset: &'a Preset) -> &'a [AudioElementSwitch] {
        if preset.is_active && preset.switch_groups.is_empty() {
            &self.switch_groups
        } else {
            &preset.switch_groups
        }
    }
}

/// Entries addressable by a list-scoped id
pub trait Identified {
    fn id(&self) -> i32;
}

/// Entries carrying an "is active" flag
pub trait Activatable {
    fn is_active(&self) -> bool;
}

macro_rules! impl_identified {
    ($($ty:ty),*) => {
        $(impl Identified for $ty {
            fn id(&self) -> i32 {
                self.id
            }
        })*
    };
}

impl_identified!(Preset, AudioElement, AudioElementSwitch, AudioElementSwitchItem);

impl Activatable for Preset {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Activatable for AudioElementSwitchItem {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Look up an entry by id within its list
pub fn find_by_id<T: Identified>(list: &[T], id: i32) -> Option<&T> {
    list.iter().find(|entry| entry.id() == id)
}

/// First entry flagged active, if any
pub fn find_active<T: Activatable>(list: &[T]) -> Option<&T> {
    list.iter().find(|entry| entry.is_active())
}
