//! Models module for the MPEG-H UI translator
//!
//! This module contains the audio scene snapshot, the change-set an
//! application submits against it, and the ActionEvents derived from both.

pub mod scene;
pub mod changes;
pub mod action;

// Re-export commonly used types
pub use scene::*;
pub use changes::*;
pub use action::{ActionEvent, ActionType, ACTION_EVENT_VERSION, NIL_UUID};
