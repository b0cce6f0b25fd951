//! MPEG-H UI Translator WASM API
//!
//! This module provides the JavaScript-facing API of the translator.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion and logging
//! - `translator`: The `MpeghUiTranslator` session class

#[macro_use]
pub mod helpers;
pub mod translator;

pub use translator::MpeghUiTranslator;
