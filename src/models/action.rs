//! ActionEvent model
//!
//! One ActionEvent describes a single effective change to be applied by the
//! MPEG-H UI manager. The numeric action-type codes are fixed by the decoder's
//! wire format.

use serde::{Deserialize, Serialize};

/// Scene UUID of global actions that do not address a scene
pub const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";

/// Format version written on every ActionEvent
pub const ACTION_EVENT_VERSION: &str = "9.0";

/// ActionEvent type codes understood by the UI manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    PresetSelected,
    AudioElementMutingChanged,
    AudioElementProminenceLevelChanged,
    AudioElementAzimuthChanged,
    AudioElementElevationChanged,
    AudioElementSwitchSelected,
    AudioElementSwitchMutingChanged,
    AudioElementSwitchProminenceLevelChanged,
    AudioElementSwitchAzimuthChanged,
    AudioElementSwitchElevationChanged,
    InterfaceLanguageSelected,
}

impl ActionType {
    pub fn code(&self) -> u8 {
        match self {
            ActionType::PresetSelected => 30,
            ActionType::AudioElementMutingChanged => 40,
            ActionType::AudioElementProminenceLevelChanged => 41,
            ActionType::AudioElementAzimuthChanged => 42,
            ActionType::AudioElementElevationChanged => 43,
            ActionType::AudioElementSwitchSelected => 60,
            ActionType::AudioElementSwitchMutingChanged => 61,
            ActionType::AudioElementSwitchProminenceLevelChanged => 62,
            ActionType::AudioElementSwitchAzimuthChanged => 63,
            ActionType::AudioElementSwitchElevationChanged => 64,
            ActionType::InterfaceLanguageSelected => 71,
        }
    }

    pub fn from_code(code: u8) -> Option<ActionType> {
        Some(match code {
            30 => ActionType::PresetSelected,
            40 => ActionType::AudioElementMutingChanged,
            41 => ActionType::AudioElementProminenceLevelChanged,
            42 => ActionType::AudioElementAzimuthChanged,
            43 => ActionType::AudioElementElevationChanged,
            60 => ActionType::AudioElementSwitchSelected,
            61 => ActionType::AudioElementSwitchMutingChanged,
            62 => ActionType::AudioElementSwitchProminenceLevelChanged,
            63 => ActionType::AudioElementSwitchAzimuthChanged,
            64 => ActionType::AudioElementSwitchElevationChanged,
            71 => ActionType::InterfaceLanguageSelected,
            _ => return None,
        })
    }
}

/// A single action to send to the UI manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub action_type: ActionType,
    /// Scene the action applies to; the nil UUID for global actions
    pub uuid: String,
    pub param_int: Option<i32>,
    pub param_float: Option<f64>,
    pub param_bool: Option<bool>,
    pub param_text: Option<String>,
}

impl ActionEvent {
    pub fn new(action_type: ActionType, uuid: &str) -> Self {
        Self {
            action_type,
            uuid: uuid.to_string(),
            param_int: None,
            param_float: None,
            param_bool: None,
            param_text: None,
        }
    }

    pub fn with_int(mut self, value: i32) -> Self {
        self.param_int = Some(value);
        self
    }

    pub fn with_float(mut self, value: f64) -> Self {
        self.param_float = Some(value);
        self
    }

    pub fn with_bool(mut self, value: bool) -> Self {
        self.param_bool = Some(value);
        self
    }

    pub fn with_text(mut self, value: &str) -> Self {
        self.param_text = Some(value.to_string());
        self
    }
}
