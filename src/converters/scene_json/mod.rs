//! Scene model → application JSON
//!
//! Produces the JSON format applications consume. Composition is a pure
//! function of the scene and the display-language hint and cannot fail.
//!
//! For the active preset the scene-level objects of a version 9 scene are
//! reported as if they belonged to the preset; a version 10/11 scene with
//! populated per-preset lists reports those lists only.

pub mod composer;

pub use composer::{compose_audio_scene, compose_audio_scene_string};
