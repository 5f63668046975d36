use crate::cartesian::{CartesianPoint2d, Point2, Vector2};
use crate::geo::crs::{ProjectionType, EPSG_3857};
use crate::geo::datum::Datum;
use crate::geo::location::Location;
use crate::geo::traits::point::GeoPoint;
use crate::geo::traits::projection::MapProjection;

/// Spherical Mercator projection used by the standard web map tile pyramid (`EPSG:3857`).
///
/// The projection is conformal, its [relative scale](MapProjection::relative_scale) is
/// `1 / cos(latitude)` on both axes. The poles are projected to infinity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WebMercator {
    datum: Datum,
    center: Location,
}

impl WebMercator {
    /// Creates a new instance with the given datum.
    pub fn new(datum: Datum) -> Self {
        Self {
            datum,
            center: Location::default(),
        }
    }

    /// Converts latitude in degrees into the mercator y value in degrees. Returns infinite values
    /// for the poles.
    pub fn latitude_to_y(lat: f64) -> f64 {
        if lat <= -90.0 {
            return f64::NEG_INFINITY;
        }
        if lat >= 90.0 {
            return f64::INFINITY;
        }

        // Same as ln(tan(pi/4 + lat/2)), but exact at the equator.
        lat.to_radians().sin().atanh().to_degrees()
    }

    /// Converts the mercator y value in degrees into latitude in degrees.
    pub fn y_to_latitude(y: f64) -> f64 {
        y.to_radians().sinh().atan().to_degrees()
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        Self::new(Datum::WGS84)
    }
}

impl MapProjection for WebMercator {
    fn crs_id(&self) -> &str {
        EPSG_3857
    }

    fn projection_type(&self) -> ProjectionType {
        ProjectionType::NormalCylindrical
    }

    fn center(&self) -> Location {
        self.center
    }

    fn units_per_degree(&self) -> f64 {
        self.datum.units_per_degree()
    }

    fn with_center(&self, center: Location) -> Box<dyn MapProjection> {
        Box::new(Self { center, ..*self })
    }

    fn location_to_map(&self, location: &Location) -> Point2 {
        let units_per_degree = self.units_per_degree();
        Point2::new(
            units_per_degree * location.lon(),
            units_per_degree * Self::latitude_to_y(location.lat()),
        )
    }

    fn map_to_location(&self, point: &Point2) -> Location {
        let units_per_degree = self.units_per_degree();
        Location::new(
            Self::y_to_latitude(point.y() / units_per_degree),
            point.x() / units_per_degree,
        )
    }

    fn relative_scale(&self, location: &Location) -> Vector2 {
        let k = 1.0 / location.lat_rad().cos();
        Vector2::new(k, k)
    }
}
