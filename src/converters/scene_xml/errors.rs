//! Error types for AudioScene XML parsing
//!
//! Every error is fatal for the whole scene: no partial scene is produced.

use thiserror::Error;

/// Fatal AudioScene XML parsing errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// XML is malformed (not well-formed)
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    /// Required child element is missing
    #[error("{node} has no '{element}' element")]
    MissingElement { node: String, element: String },

    /// Required attribute is missing
    #[error("{node} has no '{attribute}' property")]
    MissingAttribute { node: String, attribute: String },

    /// Attribute value does not parse as the expected type
    #[error("Property value of '{attribute}' in {node} is not {expected}: {value}")]
    InvalidAttribute {
        node: String,
        attribute: String,
        value: String,
        expected: &'static str,
    },

    /// Integral attribute value does not fit the target type
    #[error("Property value of '{attribute}' in {node} is out of range: {value}")]
    OutOfRange {
        node: String,
        attribute: String,
        value: i64,
    },

    /// Fixed-table substructure names the wrong table
    #[error("{expected} has invalid 'table' property value: {found}")]
    InvalidTable { expected: &'static str, found: String },

    /// Scene version is not one of the accepted major versions
    #[error("AudioSceneConfig has invalid 'version' property value: {0}")]
    InvalidVersion(String),
}
