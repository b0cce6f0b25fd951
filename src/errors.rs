//! Top-level error type of the translator session

use thiserror::Error;

use crate::converters::action_events::CompileError;
use crate::converters::changes_json::ChangesError;
use crate::converters::scene_xml::ParseError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslatorError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Changes(#[from] ChangesError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Caller-provided output space is too small; nothing was written
    #[error("Output requires {required} bytes")]
    InsufficientSpace { required: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Translator state lock is poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
