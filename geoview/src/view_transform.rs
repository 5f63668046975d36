use geoview_types::cartesian::{CartesianPoint2d, Point2};
use geoview_types::geo::Datum;
use nalgebra::{Matrix3, Rotation2, Scale2, Translation2, Vector3};

/// Size of a tile of the standard web map tile pyramid in pixels.
const TILE_SIZE: f64 = 256.0;

/// Affine transform between planar map coordinates and view (pixel) coordinates.
///
/// The transform is defined by a pair of reference points (map center and view center), a uniform
/// scale in pixels per map unit, and a clockwise rotation in degrees. The Y axis is inverted: map
/// Y grows to the north while view Y grows downwards.
///
/// ```
/// use geoview::ViewTransform;
/// use geoview_types::cartesian::Point2;
///
/// let mut transform = ViewTransform::default();
/// transform.set_transform(Point2::new(1000.0, 500.0), Point2::new(400.0, 300.0), 0.5, 0.0);
///
/// assert_eq!(transform.map_to_view(Point2::new(1000.0, 500.0)), Point2::new(400.0, 300.0));
/// assert_eq!(transform.map_to_view(Point2::new(1200.0, 700.0)), Point2::new(500.0, 200.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    rotation: f64,
    map_to_view: Matrix3<f64>,
    view_to_map: Matrix3<f64>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            map_to_view: Matrix3::identity(),
            view_to_map: Matrix3::identity(),
        }
    }
}

impl ViewTransform {
    /// Creates a new transform. See [`ViewTransform::set_transform`].
    pub fn new(map_center: Point2, view_center: Point2, scale: f64, heading: f64) -> Self {
        let mut transform = Self::default();
        transform.set_transform(map_center, view_center, scale, heading);
        transform
    }

    /// Recomputes the transform so that `map_center` is projected onto `view_center`, map units
    /// are scaled by `scale` and the map is rotated clockwise by `heading` degrees around the view
    /// center.
    pub fn set_transform(
        &mut self,
        map_center: Point2,
        view_center: Point2,
        scale: f64,
        heading: f64,
    ) {
        self.scale = scale;
        self.rotation = ((heading % 360.0) + 360.0) % 360.0;

        let to_origin = Translation2::new(-map_center.x(), -map_center.y()).to_homogeneous();
        let scale = Scale2::new(scale, -scale).to_homogeneous();
        let rotation = Rotation2::new(self.rotation.to_radians()).to_homogeneous();
        let to_view = Translation2::new(view_center.x(), view_center.y()).to_homogeneous();

        self.map_to_view = to_view * rotation * scale * to_origin;
        self.view_to_map = self
            .map_to_view
            .try_inverse()
            .unwrap_or_else(|| Matrix3::from_element(f64::NAN));
    }

    /// Scaling factor from map units to pixels.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Clockwise rotation of the map in degrees, in the range `[0, 360)`.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Homogeneous matrix transforming map coordinates into view coordinates.
    pub fn map_to_view_matrix(&self) -> &Matrix3<f64> {
        &self.map_to_view
    }

    /// Homogeneous matrix transforming view coordinates into map coordinates.
    pub fn view_to_map_matrix(&self) -> &Matrix3<f64> {
        &self.view_to_map
    }

    /// Transforms a point in map coordinates into view coordinates.
    pub fn map_to_view(&self, point: Point2) -> Point2 {
        Self::apply(&self.map_to_view, point)
    }

    /// Transforms a point in view coordinates into map coordinates.
    pub fn view_to_map(&self, point: Point2) -> Point2 {
        Self::apply(&self.view_to_map, point)
    }

    fn apply(matrix: &Matrix3<f64>, point: Point2) -> Point2 {
        let v = matrix * Vector3::new(point.x(), point.y(), 1.0);
        Point2::new(v.x, v.y)
    }

    /// Converts a zoom level into the scale in pixels per meter.
    ///
    /// Zoom level `z` corresponds to the ground resolution of the level `z` of the standard web
    /// map tile pyramid at the equator.
    pub fn zoom_level_to_scale(zoom_level: f64) -> f64 {
        TILE_SIZE * 2f64.powf(zoom_level) / (360.0 * Datum::WGS84.units_per_degree())
    }

    /// Converts the scale in pixels per meter into a zoom level. Inverse of
    /// [`ViewTransform::zoom_level_to_scale`].
    pub fn scale_to_zoom_level(scale: f64) -> f64 {
        (scale * 360.0 * Datum::WGS84.units_per_degree() / TILE_SIZE).log2()
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn map_center_is_projected_to_view_center() {
        for heading in [0.0, 45.0, 90.0, 213.5] {
            let transform = ViewTransform::new(
                Point2::new(1_234_567.0, -7_654_321.0),
                Point2::new(512.0, 384.0),
                0.01,
                heading,
            );
            assert_abs_diff_eq!(
                transform.map_to_view(Point2::new(1_234_567.0, -7_654_321.0)),
                Point2::new(512.0, 384.0),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn y_axis_is_inverted() {
        let transform =
            ViewTransform::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0), 2.0, 0.0);
        assert_eq!(
            transform.map_to_view(Point2::new(10.0, 10.0)),
            Point2::new(120.0, 80.0)
        );
    }

    #[test]
    fn heading_rotates_clockwise() {
        let transform =
            ViewTransform::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0), 1.0, 90.0);

        // North of the center ends up to the right of the view center.
        assert_abs_diff_eq!(
            transform.map_to_view(Point2::new(0.0, 10.0)),
            Point2::new(110.0, 100.0),
            epsilon = 1e-9
        );
        // East of the center ends up below the view center.
        assert_abs_diff_eq!(
            transform.map_to_view(Point2::new(10.0, 0.0)),
            Point2::new(100.0, 110.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn view_to_map_is_inverse() {
        for heading in [0.0, 12.5, 90.0, 180.0, 271.0, 359.9] {
            for scale in [1e-5, 0.3, 1.0, 42.0] {
                let transform = ViewTransform::new(
                    Point2::new(-3_000_000.0, 4_500_000.0),
                    Point2::new(640.0, 360.0),
                    scale,
                    heading,
                );
                for point in [
                    Point2::new(0.0, 0.0),
                    Point2::new(640.0, 360.0),
                    Point2::new(1280.0, 720.0),
                    Point2::new(-15.5, 900.25),
                ] {
                    let restored = transform.map_to_view(transform.view_to_map(point));
                    assert_abs_diff_eq!(restored, point, epsilon = 1e-6);
                }
            }
        }
    }

    #[test]
    fn full_turn_is_noop() {
        let a = ViewTransform::new(Point2::new(5.0, 7.0), Point2::new(100.0, 50.0), 3.0, 30.0);
        let b = ViewTransform::new(Point2::new(5.0, 7.0), Point2::new(100.0, 50.0), 3.0, 390.0);
        let c = ViewTransform::new(Point2::new(5.0, 7.0), Point2::new(100.0, 50.0), 3.0, -330.0);

        assert_relative_eq!(a.rotation(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(b.rotation(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(c.rotation(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.map_to_view_matrix(), b.map_to_view_matrix(), epsilon = 1e-9);
        assert_abs_diff_eq!(a.map_to_view_matrix(), c.map_to_view_matrix(), epsilon = 1e-9);
    }

    #[test]
    fn zero_scale_produces_nan() {
        let transform =
            ViewTransform::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0), 0.0, 0.0);
        assert!(!transform.view_to_map(Point2::new(1.0, 1.0)).is_finite());
    }

    #[test]
    fn zoom_level_scale_conversion() {
        // Ground resolution of the zoom level 0 of the standard tile pyramid.
        assert_relative_eq!(
            1.0 / ViewTransform::zoom_level_to_scale(0.0),
            156543.03392804097,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            ViewTransform::zoom_level_to_scale(1.0),
            2.0 * ViewTransform::zoom_level_to_scale(0.0),
            max_relative = 1e-12
        );

        for scale in [1e-6, 0.0123, 1.0, 250.0] {
            assert_relative_eq!(
                ViewTransform::zoom_level_to_scale(ViewTransform::scale_to_zoom_level(scale)),
                scale,
                max_relative = 1e-12
            );
        }
        for zoom_level in [0.0, 1.0, 7.5, 20.0] {
            assert_relative_eq!(
                ViewTransform::scale_to_zoom_level(ViewTransform::zoom_level_to_scale(zoom_level)),
                zoom_level,
                epsilon = 1e-12
            );
        }
    }
}
