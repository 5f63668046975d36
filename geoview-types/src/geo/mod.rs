//! Geographic coordinates (latitude and longitude, see [`Location`]) and conversion between them
//! and planar map coordinates (see [`MapProjection`]).

mod bounding_box;
mod crs;
mod datum;
pub mod impls;
mod location;
mod registry;
mod traits;

pub use bounding_box::BoundingBox;
pub use crs::{ProjectionType, AUTO2_42003, AUTO2_42004, EPSG_3857, EPSG_900913};
pub use datum::Datum;
pub use location::Location;
pub use registry::{ProjectionFactory, ProjectionRegistry};
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::MapProjection;
