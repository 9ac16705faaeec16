//! Error types for the feature layer.

use std::io;

/// Errors that can occur while inferring schemas or producing feature rows.
///
/// Looking up a collection name that matches no known kind is not an error;
/// it surfaces as [`crate::CollectionKind::Unknown`] and an absent reader.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Arrow error (boxed - large type).
    #[error("Arrow error: {0}")]
    Arrow(Box<arrow::error::ArrowError>),

    /// JSON decoding error while loading a task data dump.
    #[error("JSON decode error: {source}")]
    JsonDecode { source: serde_json::Error },

    /// A process data DDI that is not exactly two bytes wide.
    ///
    /// This is data corruption from the upstream parser and cannot be
    /// replaced by a default.
    #[error("malformed DDI for device element {device_element}: expected 2 bytes, got {len}")]
    MalformedDdi {
        /// Number of bytes actually present.
        len: usize,
        /// Device element the value was logged for.
        device_element: String,
    },

    /// A geometry has more elements than WKB can count.
    #[error("geometry too large for WKB: {count} elements exceeds u32")]
    GeometryTooLarge { count: usize },

    /// The caller asked for a reader on a collection no reader exists for.
    #[error("feature collection not supported: {name}")]
    UnsupportedCollection { name: String },
}

impl From<arrow::error::ArrowError> for FeatureError {
    fn from(err: arrow::error::ArrowError) -> Self {
        Self::Arrow(Box::new(err))
    }
}

impl From<serde_json::Error> for FeatureError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonDecode { source }
    }
}
