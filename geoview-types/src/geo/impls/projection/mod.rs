//! Implementations for the supported projections.
mod auto_equirectangular;
mod orthographic;
mod web_mercator;

pub use auto_equirectangular::AutoEquirectangular;
pub use orthographic::Orthographic;
pub use web_mercator::WebMercator;
