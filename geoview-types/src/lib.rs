//! This crate contains value types and map projections used by the
//! [geoview](https://docs.rs/geoview) crate.
//!
//! There are two coordinate spaces here:
//!
//! * [geographic](geo) coordinates, represented by [`Location`](geo::Location) (latitude and
//!   longitude in degrees) and [`BoundingBox`](geo::BoundingBox), and
//! * planar [cartesian](cartesian) map coordinates, represented by [`Point2`](cartesian::Point2),
//!   [`Vector2`](cartesian::Vector2) and [`Rect`](cartesian::Rect).
//!
//! A [`MapProjection`](geo::MapProjection) converts between the two. Projections are looked up by
//! their CRS identifier in a [`ProjectionRegistry`](geo::ProjectionRegistry).

pub mod cartesian;
pub mod error;
pub mod geo;

pub use error::GeoviewTypesError;
