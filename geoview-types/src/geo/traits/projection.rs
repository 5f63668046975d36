use std::fmt::Debug;

use crate::cartesian::{CartesianPoint2d, Point2, Rect, Vector2};
use crate::geo::bounding_box::BoundingBox;
use crate::geo::crs::ProjectionType;
use crate::geo::location::Location;
use crate::geo::traits::point::GeoPoint;

/// Conversion between geographic [`Location`]s and planar map coordinates.
///
/// A projection is an immutable value. Projections that depend on a reference point (the
/// automatic `AUTO2` family) carry it as their [`center`](MapProjection::center); when the
/// reference point changes, a new projection is created with [`MapProjection::with_center`].
///
/// Map coordinates are scaled by [`MapProjection::units_per_degree`], so one unit is roughly one
/// meter at the equator.
///
/// Inverse conversion never fails with an error: for points outside of the projection domain
/// [`Location::INVALID`] is returned.
pub trait MapProjection: Debug + Send + Sync {
    /// Identifier of the coordinate reference system, e.g. `EPSG:3857`.
    fn crs_id(&self) -> &str;

    /// Shape of the projection surface.
    fn projection_type(&self) -> ProjectionType;

    /// Reference point of the projection.
    fn center(&self) -> Location;

    /// Scale of map coordinates: number of map units per one degree of arc.
    fn units_per_degree(&self) -> f64;

    /// Returns a copy of the projection with a different reference point.
    fn with_center(&self, center: Location) -> Box<dyn MapProjection>;

    /// Converts a geographic location into map coordinates.
    fn location_to_map(&self, location: &Location) -> Point2;

    /// Converts map coordinates into a geographic location. Returns [`Location::INVALID`] if the
    /// point is outside of the projection domain.
    fn map_to_location(&self, point: &Point2) -> Location;

    /// Local scale distortion at the given location relative to the scale at the projection
    /// center, per axis.
    fn relative_scale(&self, _location: &Location) -> Vector2 {
        Vector2::new(1.0, 1.0)
    }

    /// Returns true if the point is a valid result of a projection, i.e. both of its coordinates
    /// are finite.
    fn is_valid(&self, point: &Point2) -> bool {
        point.is_finite()
    }

    /// Map coordinates rectangle that contains the projected corners of the bounding box.
    fn bounding_box_to_rect(&self, bbox: &BoundingBox) -> Rect {
        let corners = [
            Location::new(bbox.south(), bbox.west()),
            Location::new(bbox.north(), bbox.west()),
            Location::new(bbox.north(), bbox.east()),
            Location::new(bbox.south(), bbox.east()),
        ]
        .map(|location| self.location_to_map(&location));

        Rect::from_points(corners.iter()).unwrap_or_else(Rect::nan)
    }

    /// Bounding box that contains the unprojected corners of the rectangle. If any of the
    /// corners is outside of the projection domain, [`BoundingBox::INVALID`] is returned.
    fn rect_to_bounding_box(&self, rect: &Rect) -> BoundingBox {
        let corners = rect
            .into_quadrangle()
            .map(|point| self.map_to_location(&point));

        BoundingBox::from_locations(corners.iter()).unwrap_or(BoundingBox::INVALID)
    }

    /// Largest latitude that can be displayed by the projection.
    ///
    /// For normal cylindrical projections this is the latitude of the map point at the same
    /// distance from the equator as the anti-meridian from the prime meridian (`85.0511...` for
    /// Web Mercator). Other projections can show the poles.
    fn max_latitude(&self) -> f64 {
        if self.projection_type() == ProjectionType::NormalCylindrical {
            let max_location =
                self.map_to_location(&Point2::new(0.0, 180.0 * self.units_per_degree()));
            if max_location.is_valid() && max_location.lat() < 90.0 {
                return max_location.lat();
            }
        }

        90.0
    }

    /// CRS parameter value for map service requests. For automatic projections the value
    /// includes the projection center: `AUTO2:42004,1,{lon},{lat}`.
    fn crs_value(&self) -> String {
        let crs_id = self.crs_id();
        if crs_id.starts_with("AUTO2:") || crs_id.starts_with("AUTO:") {
            let center = self.center();
            format!("{crs_id},1,{},{}", center.lon(), center.lat())
        } else {
            crs_id.to_string()
        }
    }

    /// Bounding box parameter value for map service requests: `x_min,y_min,x_max,y_max` in map
    /// coordinates.
    fn bbox_value(&self, rect: &Rect) -> String {
        format!(
            "{},{},{},{}",
            rect.x_min(),
            rect.y_min(),
            rect.x_max(),
            rect.y_max()
        )
    }
}
