//! Error types used by the crate.

use geoview_types::GeoviewTypesError;
use thiserror::Error;

/// Geoview error type.
#[derive(Debug, Error)]
pub enum GeoviewError {
    /// A line of a world file is not a number.
    #[error("failed to parse line {line} of the world file")]
    WorldFileParse {
        /// One-based line number.
        line: usize,
    },
    /// World file has less than six lines.
    #[error("insufficient number of parameters in the world file")]
    InsufficientWorldFileParameters,
    /// Viewport configuration cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Error reading data from the FS.
    #[error("failed to read file")]
    FsIo(#[from] std::io::Error),
    /// Error from the value types, e.g. an unknown CRS identifier.
    #[error(transparent)]
    Types(#[from] GeoviewTypesError),
}

impl From<serde_json::Error> for GeoviewError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidConfig(value.to_string())
    }
}
