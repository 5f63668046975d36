//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoviewTypesError {
    /// No projection is registered for the given CRS identifier.
    #[error("unknown coordinate reference system: {0}")]
    UnknownCrs(String),
    /// Text cannot be parsed as a `"latitude,longitude"` pair.
    #[error("invalid location: {0:?}")]
    InvalidLocation(String),
    /// Text cannot be parsed as a `"south,west,north,east"` quadruple.
    #[error("invalid bounding box: {0:?}")]
    InvalidBoundingBox(String),
}
