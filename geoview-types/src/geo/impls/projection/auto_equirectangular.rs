use crate::cartesian::{CartesianPoint2d, Point2, Vector2};
use crate::geo::crs::{ProjectionType, AUTO2_42004};
use crate::geo::datum::Datum;
use crate::geo::location::Location;
use crate::geo::traits::point::GeoPoint;
use crate::geo::traits::projection::MapProjection;

/// Equirectangular projection with the standard parallel at the latitude of the projection
/// center (`AUTO2:42004`).
///
/// Longitudes are scaled by the cosine of the center latitude and measured from the center
/// meridian, latitudes are not scaled. This keeps the map approximately true to scale near the
/// center, which is all the tile alignment of the automatic projections relies on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AutoEquirectangular {
    datum: Datum,
    center: Location,
}

impl AutoEquirectangular {
    /// Creates a new instance with the given reference point.
    pub fn new(datum: Datum, center: Location) -> Self {
        Self { datum, center }
    }

    fn x_scale(&self) -> f64 {
        self.units_per_degree() * self.center.lat_rad().cos()
    }
}

impl Default for AutoEquirectangular {
    fn default() -> Self {
        Self::new(Datum::WGS84, Location::default())
    }
}

impl MapProjection for AutoEquirectangular {
    fn crs_id(&self) -> &str {
        AUTO2_42004
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
        Point2::new(
            self.x_scale() * (location.lon() - self.center.lon()),
            self.units_per_degree() * location.lat(),
        )
    }

    fn map_to_location(&self, point: &Point2) -> Location {
        Location::new(
            point.y() / self.units_per_degree(),
            point.x() / self.x_scale() + self.center.lon(),
        )
    }

    fn relative_scale(&self, location: &Location) -> Vector2 {
        Vector2::new(self.center.lat_rad().cos() / location.lat_rad().cos(), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::geo::BoundingBox;
    use crate::latlon;

    #[test]
    fn center_meridian_is_y_axis() {
        let projection = AutoEquirectangular::new(Datum::WGS84, latlon!(50.0, 10.0));
        let units = Datum::WGS84.units_per_degree();

        let projected = projection.location_to_map(&latlon!(50.0, 10.0));
        assert_eq!(projected.x(), 0.0);
        assert_eq!(projected.y(), 50.0 * units);

        let projected = projection.location_to_map(&latlon!(0.0, 11.0));
        assert_relative_eq!(projected.x(), units * 50f64.to_radians().cos());
        assert_eq!(projected.y(), 0.0);
    }

    #[test]
    fn round_trip() {
        let projection = AutoEquirectangular::default().with_center(latlon!(-35.0, 150.0));
        for lat in [-89.0, -35.0, -1.5, 0.0, 20.0, 75.25] {
            for lon in [-170.0, 0.0, 100.0, 150.0, 179.0, 330.0] {
                let unprojected =
                    projection.map_to_location(&projection.location_to_map(&latlon!(lat, lon)));
                assert_relative_eq!(unprojected.lat(), lat, max_relative = 1e-9, epsilon = 1e-12);
                assert_relative_eq!(unprojected.lon(), lon, max_relative = 1e-9, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn max_latitude_is_pole() {
        let projection = AutoEquirectangular::default();
        assert_eq!(projection.max_latitude(), 90.0);
    }

    #[test]
    fn relative_scale() {
        let projection = AutoEquirectangular::new(Datum::WGS84, latlon!(60.0, 0.0));
        assert_abs_diff_eq!(
            projection.relative_scale(&latlon!(60.0, 40.0)),
            Vector2::new(1.0, 1.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            projection.relative_scale(&latlon!(0.0, 40.0)),
            Vector2::new(0.5, 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn bounding_box_round_trip() {
        let projection = AutoEquirectangular::new(Datum::WGS84, latlon!(52.0, 13.0));
        let bbox = BoundingBox::new(50.0, 10.0, 54.0, 16.0);
        let restored = projection.rect_to_bounding_box(&projection.bounding_box_to_rect(&bbox));

        assert_abs_diff_eq!(restored.south(), bbox.south(), epsilon = 1e-9);
        assert_abs_diff_eq!(restored.west(), bbox.west(), epsilon = 1e-9);
        assert_abs_diff_eq!(restored.north(), bbox.north(), epsilon = 1e-9);
        assert_abs_diff_eq!(restored.east(), bbox.east(), epsilon = 1e-9);
    }

    #[test]
    fn crs_value_contains_center() {
        let projection = AutoEquirectangular::new(Datum::WGS84, latlon!(52.5, 13.25));
        assert_eq!(projection.crs_value(), "AUTO2:42004,1,13.25,52.5");
    }
}
