//! Error types for action-event compilation

use thiserror::Error;

/// A change-set references something the baseline scene does not contain.
///
/// Compilation is aborted as a whole; no partial event list is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("Cannot apply changes for non-existing preset with id: {0}")]
    UnknownPreset(i32),

    #[error("Cannot apply changes for non-existing audio element with id {id} in preset {preset}")]
    UnknownAudioElement { preset: i32, id: i32 },

    #[error("Cannot apply changes for non-existing switch group with id {id} in preset {preset}")]
    UnknownSwitchGroup { preset: i32, id: i32 },
}
