//! Format converters
//!
//! This module contains the converters between the decoder's AudioScene XML,
//! the application JSON formats and the decoder's ActionEvent XML.

pub mod scene_xml;
pub mod scene_json;
pub mod changes_json;
pub mod action_events;

// Re-export for convenience
pub use scene_xml::{parse_audio_scene, ParseError};
pub use scene_json::{compose_audio_scene, compose_audio_scene_string};
pub use changes_json::{parse_scene_changes, parse_scene_changes_str, ChangesError};
pub use action_events::{compile_action_events, compile_actions, encode_action_event, CompileError};
