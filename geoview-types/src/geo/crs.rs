use serde::{Deserialize, Serialize};

/// CRS identifier of the spherical Web Mercator projection.
pub const EPSG_3857: &str = "EPSG:3857";
/// Legacy identifier of the Web Mercator projection.
pub const EPSG_900913: &str = "EPSG:900913";
/// CRS identifier of the automatic equirectangular projection.
pub const AUTO2_42004: &str = "AUTO2:42004";
/// CRS identifier of the automatic orthographic projection.
pub const AUTO2_42003: &str = "AUTO2:42003";

/// Classification of a projection by the shape of its projection surface.
///
/// Map consumers use it to decide whether longitude wrap-around applies: a normal cylindrical map
/// repeats itself every 360 degrees of longitude, an azimuthal one does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionType {
    /// Cylinder touching the equator. Meridians are vertical lines.
    NormalCylindrical,
    /// Plane touching the sphere at the projection center.
    Azimuthal,
}

impl ProjectionType {
    /// Returns true if the map wraps around at the anti-meridian.
    pub fn wraps_longitude(&self) -> bool {
        matches!(self, ProjectionType::NormalCylindrical)
    }
}
