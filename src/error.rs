//! Error types for SVG to mesh conversion
//!
//! Every error message carries a code so failures can be categorized
//! without matching on message text.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: Document (XML) errors
//! - **E3xxx**: Path data and geometry errors
//! - **E4xxx**: Configuration errors
//!
//! ## Error Codes
//!
//! - `E1001`: I/O error reading the drawing or writing the mesh
//! - `E2001`: Malformed document
//! - `E3001`: Malformed path data
//! - `E3002`: Degenerate geometry
//! - `E3003`: Path command issued before any `M`
//! - `E3004`: Invalid numeric attribute
//! - `E4001`: Invalid conversion configuration

use std::io;
use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a drawing into a mesh
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the drawing or writing the mesh
    ///
    /// **Error Code**: E1001
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// The drawing could not be read as a well-formed document
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Malformed XML syntax or unclosed tags
    /// - Empty input with no root element
    /// - A `path` element without a `d` attribute
    #[error("[E2001] Malformed document: {0}")]
    MalformedDocument(String),

    /// A path's `d` attribute does not follow the `M`/`L`/`A` grammar
    ///
    /// **Error Code**: E3001
    ///
    /// **Common Causes**:
    /// - Unsupported command letters (`C`, `Q`, `Z`, lowercase commands)
    /// - Wrong number of parameters (`M` and `L` take 2, `A` takes 7)
    /// - Numbers appearing before the first command
    #[error("[E3001] Malformed path data '{path}': {message}")]
    MalformedPathData {
        /// The offending `d` attribute
        path: String,
        /// What went wrong
        message: String,
    },

    /// Geometry that cannot be extruded without dividing by zero
    ///
    /// **Error Code**: E3002
    ///
    /// **Common Causes**:
    /// - A line segment whose endpoints coincide
    /// - An arc with a zero or negative radius
    /// - An arc whose start and end point coincide
    #[error("[E3002] Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// A line or arc command appeared before any move command
    ///
    /// **Error Code**: E3003
    #[error("[E3003] Path '{path}' draws before setting a start point with 'M'")]
    MissingStartPoint {
        /// The offending `d` attribute
        path: String,
    },

    /// A numeric attribute could not be parsed as a finite number
    ///
    /// **Error Code**: E3004
    ///
    /// **Suggestions**:
    /// - Use plain user units ("10" rather than "10px")
    /// - Use a period as the decimal separator
    #[error("[E3004] Invalid number: {0}")]
    InvalidNumber(String),

    /// The conversion configuration is unusable
    ///
    /// **Error Code**: E4001
    #[error("[E4001] Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::InvalidNumber(format!("Failed to parse floating-point number: {}", err))
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MalformedDocument(format!("XML parsing failed: {}", err))
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::MalformedDocument(format!("Attribute parsing failed: {}", err))
    }
}

impl Error {
    /// Create a MalformedPathData error for the given `d` string
    pub fn malformed_path(path: &str, message: impl Into<String>) -> Self {
        Error::MalformedPathData {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// Create a MalformedDocument error for a missing required attribute
    ///
    /// # Example
    /// ```ignore
    /// Error::missing_attribute("path", "d")
    /// ```
    pub fn missing_attribute(element: &str, attribute: &str) -> Self {
        Error::MalformedDocument(format!(
            "Element '<{}>' is missing required attribute '{}'",
            element, attribute
        ))
    }

    /// Create an InvalidNumber error naming the attribute and the bad value
    ///
    /// # Arguments
    /// * `field_name` - The attribute being parsed (e.g., "rect width")
    /// * `value` - The value that failed to parse
    pub fn invalid_number(field_name: &str, value: &str) -> Self {
        Error::InvalidNumber(format!(
            "Failed to parse '{}': expected a finite number, got '{}'",
            field_name, value
        ))
    }
}
