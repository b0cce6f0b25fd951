//! AudioScene XML → scene model
//!
//! Parses the AudioScene XML emitted by the MPEG-H UI manager into an
//! [`AudioSceneConfig`](crate::models::AudioSceneConfig).
//!
//! Both layouts of the format are read in one pass: version 9 lists the
//! active preset's audio elements and switch groups on scene level, while
//! versions 10 and 11 list them per preset. Which list is authoritative is
//! decided by the consumers (see `AudioSceneConfig::elements_for`).
//!
//! # Basic Usage
//!
//! ```ignore
//! use mpegh_ui_translator::converters::scene_xml::parse_audio_scene;
//!
//! let scene = parse_audio_scene(r#"<AudioSceneConfig uuid="..." version="10.0">
//!   <presets>
//!     <preset id="0" isActive="true" isAvailable="true" isDefault="true"/>
//!   </presets>
//! </AudioSceneConfig>"#)?;
//! assert_eq!(scene.presets.len(), 1);
//! ```

pub mod errors;
pub mod parser;


pub use errors::ParseError;
pub use parser::{parse_audio_scene, parse_audio_scene_node, ParseResult};
