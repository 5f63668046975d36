//! Implementations of the [`MapProjection`](crate::geo::MapProjection) trait.

pub mod projection;

pub use projection::{AutoEquirectangular, Orthographic, WebMercator};
