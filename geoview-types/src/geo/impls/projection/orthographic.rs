use crate::cartesian::{CartesianPoint2d, Point2};
use crate::geo::crs::{ProjectionType, AUTO2_42003};
use crate::geo::datum::Datum;
use crate::geo::location::Location;
use crate::geo::traits::point::GeoPoint;
use crate::geo::traits::projection::MapProjection;

/// Spherical orthographic projection centered at the projection center (`AUTO2:42003`).
///
/// Shows the hemisphere around the center as it is seen from an infinite distance. Map points
/// outside of the disk of the sphere radius have no location.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orthographic {
    datum: Datum,
    center: Location,
}

impl Orthographic {
    /// Creates a new instance with the given reference point.
    pub fn new(datum: Datum, center: Location) -> Self {
        Self { datum, center }
    }

    /// Radius of the projected sphere in map units.
    fn radius(&self) -> f64 {
        self.units_per_degree() * 180.0 / std::f64::consts::PI
    }
}

impl Default for Orthographic {
    fn default() -> Self {
        Self::new(Datum::WGS84, Location::default())
    }
}

impl MapProjection for Orthographic {
    fn crs_id(&self) -> &str {
        AUTO2_42003
    }

    fn projection_type(&self) -> ProjectionType {
        ProjectionType::Azimuthal
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
        if *location == self.center {
            return Point2::new(0.0, 0.0);
        }

        let lat0 = self.center.lat_rad();
        let lat = location.lat_rad();
        let d_lon = (location.lon() - self.center.lon()).to_radians();
        let r = self.radius();

        Point2::new(
            r * lat.cos() * d_lon.sin(),
            r * (lat0.cos() * lat.sin() - lat0.sin() * lat.cos() * d_lon.cos()),
        )
    }

    fn map_to_location(&self, point: &Point2) -> Location {
        if point.x() == 0.0 && point.y() == 0.0 {
            return self.center;
        }

        let r = self.radius();
        let x = point.x() / r;
        let y = point.y() / r;
        let r2 = x * x + y * y;

        if r2 > 1.0 || r2.is_nan() {
            return Location::INVALID;
        }

        let rho = r2.sqrt();
        let sin_c = rho;
        let cos_c = (1.0 - r2).sqrt();

        let lat0 = self.center.lat_rad();
        let (sin_lat0, cos_lat0) = lat0.sin_cos();

        Location::new(
            (cos_c * sin_lat0 + y * sin_c * cos_lat0 / rho)
                .asin()
                .to_degrees(),
            (x * sin_c)
                .atan2(rho * cos_c * cos_lat0 - y * sin_c * sin_lat0)
                .to_degrees()
                + self.center.lon(),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::geo::BoundingBox;
    use crate::latlon;

    #[test]
    fn center_projects_to_origin_exactly() {
        let projection = Orthographic::default();
        assert_eq!(
            projection.location_to_map(&latlon!(0.0, 0.0)),
            Point2::new(0.0, 0.0)
        );

        let projection = Orthographic::new(Datum::WGS84, latlon!(48.137, 11.575));
        assert_eq!(
            projection.location_to_map(&latlon!(48.137, 11.575)),
            Point2::new(0.0, 0.0)
        );
        assert_eq!(
            projection.map_to_location(&Point2::new(0.0, 0.0)),
            latlon!(48.137, 11.575)
        );
    }

    #[test]
    fn horizon_is_at_sphere_radius() {
        let projection = Orthographic::default();
        let radius = Datum::WGS84.semimajor();

        let east = projection.location_to_map(&latlon!(0.0, 90.0));
        assert_relative_eq!(east.x(), radius, max_relative = 1e-12);
        assert_abs_diff_eq!(east.y(), 0.0, epsilon = 1e-6);

        let north = projection.location_to_map(&latlon!(90.0, 0.0));
        assert_abs_diff_eq!(north.x(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(north.y(), radius, max_relative = 1e-12);
    }

    #[test]
    fn outside_of_disk_is_invalid() {
        let projection = Orthographic::new(Datum::WGS84, latlon!(30.0, -60.0));
        let radius = Datum::WGS84.semimajor();

        let location = projection.map_to_location(&Point2::new(radius * 1.0001, 0.0));
        assert!(location.lat().is_nan());
        assert!(location.lon().is_nan());

        let location = projection.map_to_location(&Point2::new(radius * 0.8, radius * 0.8));
        assert!(!location.is_valid());

        let location = projection.map_to_location(&Point2::new(f64::NAN, 0.0));
        assert!(!location.is_valid());

        let location = projection.map_to_location(&Point2::new(radius * 0.6, radius * 0.6));
        assert!(location.is_valid());
    }

    #[test]
    fn round_trip() {
        for center in [latlon!(0.0, 0.0), latlon!(52.0, 4.5), latlon!(-70.0, 170.0)] {
            let projection = Orthographic::new(Datum::WGS84, center);
            for (d_lat, d_lon) in [
                (0.0, 1.0),
                (1.0, 0.0),
                (-10.0, 25.0),
                (15.5, -40.0),
                (-12.0, -60.0),
                (5.0, 80.0),
            ] {
                let location = latlon!(center.lat() + d_lat, center.lon() + d_lon);
                let unprojected =
                    projection.map_to_location(&projection.location_to_map(&location));
                assert_relative_eq!(
                    unprojected.lat(),
                    location.lat(),
                    max_relative = 1e-9,
                    epsilon = 1e-9
                );
                assert_relative_eq!(
                    unprojected.lon(),
                    location.lon(),
                    max_relative = 1e-9,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn is_azimuthal() {
        let projection = Orthographic::default();
        assert_eq!(projection.projection_type(), ProjectionType::Azimuthal);
        assert!(!projection.projection_type().wraps_longitude());
        assert_eq!(projection.max_latitude(), 90.0);
    }

    #[test]
    fn bounding_box_to_rect_contains_corners() {
        let projection = Orthographic::new(Datum::WGS84, latlon!(45.0, 0.0));
        let bbox = BoundingBox::new(40.0, -5.0, 50.0, 5.0);
        let rect = projection.bounding_box_to_rect(&bbox);

        for location in [latlon!(40.0, -5.0), latlon!(50.0, 5.0), latlon!(50.0, -5.0)] {
            let projected = projection.location_to_map(&location);
            assert!(rect.contains(&projected));
        }
        assert!(rect.contains(&Point2::new(0.0, 0.0)));
    }

    #[test]
    fn crs_value_contains_center() {
        let projection = Orthographic::default().with_center(latlon!(-10.5, 20.0));
        assert_eq!(projection.crs_value(), "AUTO2:42003,1,20,-10.5");
    }
}
