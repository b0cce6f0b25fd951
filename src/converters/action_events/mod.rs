//! Change-set → ActionEvent XML
//!
//! Compiles an application change-set against the baseline scene into the
//! ActionEvent XML documents the MPEG-H UI manager accepts, one document per
//! effective change.
//!
//! # Basic Usage
//!
//! ```ignore
//! use mpegh_ui_translator::converters::action_events::compile_action_events;
//!
//! let events = compile_action_events(&changes, Some(&scene), Some("eng"))?;
//! for xml in events {
//!     send_to_decoder(&xml);
//! }
//! ```

pub mod compiler;
pub mod encoder;
pub mod errors;

pub use compiler::{compile_actions, is_effective};
pub use encoder::{encode_action_event, ActionEventXmlBuilder};
pub use errors::CompileError;

use crate::models::{AudioSceneChanges, AudioSceneConfig};

/// Compile `changes` and serialize every resulting event
pub fn compile_action_events(
    changes: &AudioSceneChanges,
    baseline: Option<&AudioSceneConfig>,
    baseline_language: Option<&str>,
) -> Result<Vec<String>, CompileError> {
    let events = compile_actions(changes, baseline, baseline_language)?;
    Ok(events.iter().map(encode_action_event).collect())
}
