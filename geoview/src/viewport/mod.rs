//! Framework-independent state of an interactive map view.

use std::fmt::{Debug, Formatter};

use geoview_types::cartesian::{CartesianPoint2d, Point2, Rect, Size, Vector2};
use geoview_types::geo::{BoundingBox, GeoPoint, Location, MapProjection};
use log::{debug, warn};

use crate::listener::{ViewportChanged, ViewportListener};
use crate::view_rect::ViewRect;
use crate::view_transform::ViewTransform;

mod builder;
mod config;

pub use builder::MapViewportBuilder;
pub use config::{ViewportConfig, MAX_ZOOM_LEVEL_LIMIT};

/// Visible area of the map: projection, center, zoom level, heading and view size.
///
/// The viewport keeps a [`ViewTransform`] in sync with its state and converts between
/// geographic locations and view (pixel) coordinates. Every successful update is reported to
/// the registered [listeners](ViewportListener).
///
/// Setters normalize their arguments instead of failing: the zoom level is clamped to the
/// allowed range, the heading is brought into `[0, 360)`, and the center latitude is limited to
/// the [maximum latitude](MapViewport::max_latitude) of the projection. If the center cannot be
/// projected, the update is rejected and the whole previous state is kept.
pub struct MapViewport {
    projection: Box<dyn MapProjection>,
    projection_center: Option<Location>,
    center: Location,
    zoom_level: f64,
    min_zoom_level: f64,
    max_zoom_level: f64,
    heading: f64,
    size: Size,
    transform_center: Option<Location>,
    view_center: Point2,
    max_latitude: f64,
    view_transform: ViewTransform,
    center_longitude: f64,
    listeners: Vec<Box<dyn ViewportListener>>,
}

/// Plain values of the viewport state that are restored when an update is rejected.
#[derive(Debug, Clone, Copy)]
struct ViewportState {
    projection_center: Option<Location>,
    center: Location,
    zoom_level: f64,
    min_zoom_level: f64,
    max_zoom_level: f64,
    heading: f64,
    size: Size,
    transform_center: Option<Location>,
    view_center: Point2,
    max_latitude: f64,
}

impl Debug for MapViewport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapViewport")
            .field("projection", &self.projection)
            .field("projection_center", &self.projection_center)
            .field("center", &self.center)
            .field("zoom_level", &self.zoom_level)
            .field("heading", &self.heading)
            .field("size", &self.size)
            .field("view_transform", &self.view_transform)
            .finish_non_exhaustive()
    }
}

impl MapViewport {
    /// Creates a viewport with the given projection and default parameters: center at `(0, 0)`,
    /// zoom level 1 within `[1, 20]`, no rotation and zero size.
    ///
    /// Use [`MapViewportBuilder`] to set other initial values.
    pub fn new(projection: Box<dyn MapProjection>) -> Self {
        let mut viewport = Self {
            projection,
            projection_center: None,
            center: Location::default(),
            zoom_level: 1.0,
            min_zoom_level: 1.0,
            max_zoom_level: 20.0,
            heading: 0.0,
            size: Size::default(),
            transform_center: None,
            view_center: Point2::default(),
            max_latitude: 90.0,
            view_transform: ViewTransform::default(),
            center_longitude: 0.0,
            listeners: vec![],
        };

        viewport.apply_projection();
        viewport
    }

    fn state(&self) -> ViewportState {
        ViewportState {
            projection_center: self.projection_center,
            center: self.center,
            zoom_level: self.zoom_level,
            min_zoom_level: self.min_zoom_level,
            max_zoom_level: self.max_zoom_level,
            heading: self.heading,
            size: self.size,
            transform_center: self.transform_center,
            view_center: self.view_center,
            max_latitude: self.max_latitude,
        }
    }

    fn restore(&mut self, state: ViewportState) {
        self.projection_center = state.projection_center;
        self.center = state.center;
        self.zoom_level = state.zoom_level;
        self.min_zoom_level = state.min_zoom_level;
        self.max_zoom_level = state.max_zoom_level;
        self.heading = state.heading;
        self.size = state.size;
        self.transform_center = state.transform_center;
        self.view_center = state.view_center;
        self.max_latitude = state.max_latitude;
    }

    /// Applies the state changed since `previous` was taken, or rolls it back if the new center
    /// cannot be projected.
    fn commit(&mut self, previous: ViewportState, reset_transform_center: bool) {
        if !self.update_transform(reset_transform_center, false) {
            self.restore(previous);
        }
    }

    /// Current map projection. Its reference point is the projection center if set, otherwise
    /// the viewport center.
    pub fn projection(&self) -> &dyn MapProjection {
        &*self.projection
    }

    /// Replaces the map projection. The previous projection is kept if the center cannot be
    /// projected with the new one.
    pub fn set_projection(&mut self, projection: Box<dyn MapProjection>) {
        debug!(
            "Switching map projection from {} to {}",
            self.projection.crs_id(),
            projection.crs_id()
        );

        let previous = self.state();
        let previous_projection = std::mem::replace(&mut self.projection, projection);

        if !self.apply_projection() {
            self.projection = previous_projection;
            self.restore(previous);
        }
    }

    fn apply_projection(&mut self) -> bool {
        self.max_latitude = self.projection.max_latitude();
        self.center = self.adjust_center(self.center);
        self.reset_transform_center();
        self.update_transform(false, true)
    }

    /// Optional reference point of the projection. Azimuthal projections use the viewport center
    /// when it is not set.
    pub fn projection_center(&self) -> Option<Location> {
        self.projection_center
    }

    /// Sets reference point of the projection.
    pub fn set_projection_center(&mut self, projection_center: Option<Location>) {
        let previous = self.state();
        self.projection_center = projection_center;
        self.reset_transform_center();
        self.commit(previous, false);
    }

    /// Location of the view center.
    pub fn center(&self) -> Location {
        self.center
    }

    /// Moves the view center to the location.
    ///
    /// The latitude is limited to [`MapViewport::max_latitude`] and the longitude is normalized.
    /// Invalid locations and locations that cannot be projected are ignored.
    pub fn set_center(&mut self, center: Location) {
        if !center.is_valid() {
            warn!("Ignoring invalid map center {center}");
            return;
        }

        let previous = self.state();
        self.center = self.adjust_center(center);
        self.reset_transform_center();
        self.commit(previous, false);
    }

    fn adjust_center(&self, center: Location) -> Location {
        if !center.is_valid() {
            return Location::default();
        }

        Location::new(
            center.lat().clamp(-self.max_latitude, self.max_latitude),
            Location::normalize_longitude(center.lon()),
        )
    }

    /// Maximum absolute latitude of the view center for the current projection.
    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    /// Current zoom level.
    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    /// Sets the zoom level, clamped to the allowed range.
    pub fn set_zoom_level(&mut self, zoom_level: f64) {
        if zoom_level.is_nan() {
            warn!("Ignoring NaN zoom level");
            return;
        }

        let previous = self.state();
        self.zoom_level = self.clamp_zoom_level(zoom_level);
        self.commit(previous, false);
    }

    fn clamp_zoom_level(&self, zoom_level: f64) -> f64 {
        zoom_level.clamp(self.min_zoom_level, self.max_zoom_level)
    }

    /// Minimum allowed zoom level.
    pub fn min_zoom_level(&self) -> f64 {
        self.min_zoom_level
    }

    /// Sets minimum allowed zoom level. The value is limited to `[0, max_zoom_level]`.
    pub fn set_min_zoom_level(&mut self, min_zoom_level: f64) {
        if min_zoom_level.is_nan() {
            warn!("Ignoring NaN minimum zoom level");
            return;
        }

        let previous = self.state();
        self.min_zoom_level = min_zoom_level.clamp(0.0, self.max_zoom_level);

        if self.zoom_level < self.min_zoom_level {
            self.zoom_level = self.min_zoom_level;
            self.commit(previous, false);
        }
    }

    /// Maximum allowed zoom level.
    pub fn max_zoom_level(&self) -> f64 {
        self.max_zoom_level
    }

    /// Sets maximum allowed zoom level. The value is limited to
    /// `[min_zoom_level, MAX_ZOOM_LEVEL_LIMIT]`.
    pub fn set_max_zoom_level(&mut self, max_zoom_level: f64) {
        if max_zoom_level.is_nan() {
            warn!("Ignoring NaN maximum zoom level");
            return;
        }

        let previous = self.state();
        self.max_zoom_level = max_zoom_level
            .min(MAX_ZOOM_LEVEL_LIMIT)
            .max(self.min_zoom_level);

        if self.zoom_level > self.max_zoom_level {
            self.zoom_level = self.max_zoom_level;
            self.commit(previous, false);
        }
    }

    /// Clockwise rotation of the map in degrees.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Sets clockwise rotation of the map. The value is normalized into `[0, 360)`.
    pub fn set_heading(&mut self, heading: f64) {
        if !heading.is_finite() {
            warn!("Ignoring heading {heading}");
            return;
        }

        let previous = self.state();
        self.heading = normalize_heading(heading);
        self.commit(previous, false);
    }

    /// Size of the view in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets size of the view. The view center is placed in the middle of the view.
    pub fn set_size(&mut self, size: Size) {
        let previous = self.state();
        self.size = size;
        self.reset_transform_center();
        self.commit(previous, false);
    }

    /// Transform between map and view coordinates.
    pub fn view_transform(&self) -> &ViewTransform {
        &self.view_transform
    }

    /// Scale of the view in pixels per map unit.
    pub fn view_scale(&self) -> f64 {
        self.view_transform.scale()
    }

    /// Horizontal and vertical scale in pixels per map unit at the location.
    pub fn scale_at(&self, location: &Location) -> Vector2 {
        self.projection.relative_scale(location) * self.view_transform.scale()
    }

    /// Projects the location into view coordinates.
    pub fn location_to_view(&self, location: &Location) -> Point2 {
        self.view_transform
            .map_to_view(self.projection.location_to_map(location))
    }

    /// Returns the location shown at the view point, or [`Location::INVALID`] if the point is
    /// outside of the projection domain.
    pub fn view_to_location(&self, point: Point2) -> Location {
        self.projection
            .map_to_location(&self.view_transform.view_to_map(point))
    }

    /// Geographic bounding box of the map area shown in the view rectangle.
    pub fn view_rect_to_bounding_box(&self, rect: &Rect) -> BoundingBox {
        let corners = rect
            .into_quadrangle()
            .map(|p| self.view_transform.view_to_map(p));
        let map_rect = Rect::from_points(corners.iter()).unwrap_or_else(Rect::nan);

        self.projection.rect_to_bounding_box(&map_rect)
    }

    /// Geographic bounding box of the whole view.
    pub fn bounding_box(&self) -> BoundingBox {
        self.view_rect_to_bounding_box(&Rect::new(
            0.0,
            0.0,
            self.size.width(),
            self.size.height(),
        ))
    }

    /// Sets a temporary center point in view coordinates for rotation and scaling. It is reset
    /// when the center is set explicitly.
    pub fn set_transform_center(&mut self, center: Point2) {
        let location = self.view_to_location(center);
        if location.is_valid() {
            self.transform_center = Some(location);
            self.view_center = center;
        } else {
            self.transform_center = None;
            self.view_center = self.size.center();
        }
    }

    /// Resets the temporary transform center set by [`MapViewport::set_transform_center`].
    pub fn reset_transform_center(&mut self) {
        self.transform_center = None;
        self.view_center = self.size.center();
    }

    /// Moves the map by the translation in view coordinates, as when it is dragged.
    pub fn translate_map(&mut self, translation: Vector2) {
        if self.transform_center.is_some() {
            let previous = self.state();
            self.reset_transform_center();
            self.commit(previous, false);
        }

        if !translation.is_zero() {
            let center = self.view_to_location(self.view_center - translation);
            if center.is_valid() {
                self.set_center(center);
            } else {
                warn!("Map translation by {translation:?} moves the center out of the projection");
            }
        }
    }

    /// Applies a combined translation, rotation (in degrees) and scale gesture. Rotation and
    /// scaling are performed around the `center` point in view coordinates.
    ///
    /// Gestures with a non-finite translation or rotation, or a scale that is not a positive
    /// finite number, are ignored.
    pub fn transform_map(
        &mut self,
        center: Point2,
        translation: Vector2,
        rotation: f64,
        scale: f64,
    ) {
        if !(translation.dx().is_finite()
            && translation.dy().is_finite()
            && rotation.is_finite()
            && scale.is_finite()
            && scale > 0.0)
        {
            warn!(
                "Ignoring map transform with translation {translation:?}, rotation {rotation} \
                 and scale {scale}"
            );
            return;
        }

        if rotation == 0.0 && scale == 1.0 {
            self.translate_map(translation);
            return;
        }

        let previous = self.state();
        self.set_transform_center(center);
        self.view_center = self.view_center + translation;

        if rotation != 0.0 {
            self.heading = normalize_heading(self.heading + rotation);
        }

        if scale != 1.0 {
            self.zoom_level = self.clamp_zoom_level(self.zoom_level + scale.log2());
        }

        self.commit(previous, true);
    }

    /// Changes the zoom level keeping the `center` point in view coordinates at the same
    /// location.
    pub fn zoom_map(&mut self, center: Point2, zoom_level: f64) {
        let zoom_level = self.clamp_zoom_level(zoom_level);
        if !zoom_level.is_nan() && zoom_level != self.zoom_level {
            let previous = self.state();
            self.set_transform_center(center);
            self.zoom_level = zoom_level;
            self.commit(previous, true);
        }
    }

    /// Centers the view on the bounding box and zooms so that it fits into the view. The heading
    /// is reset to zero.
    pub fn zoom_to_bounds(&mut self, bbox: &BoundingBox) {
        let rect = self.projection.bounding_box_to_rect(bbox);
        let target_center = self.projection.map_to_location(&rect.center());

        if !target_center.is_valid() {
            warn!("Cannot zoom to {bbox:?}: its center is out of the projection");
            return;
        }

        let previous = self.state();
        let scale = (self.size.width() / rect.width()).min(self.size.height() / rect.height());
        let zoom_level = ViewTransform::scale_to_zoom_level(scale);
        if zoom_level.is_finite() {
            self.zoom_level = self.clamp_zoom_level(zoom_level);
        }

        self.heading = 0.0;
        self.center = self.adjust_center(target_center);
        self.reset_transform_center();
        self.commit(previous, false);
    }

    /// Returns the longitude shifted by a multiple of 360 degrees to be within 180 degrees of the
    /// center longitude.
    pub fn constrained_longitude(&self, longitude: f64) -> f64 {
        let offset = longitude - self.center.lon();

        if offset > 180.0 {
            self.center.lon() - 360.0 + offset % 360.0
        } else if offset < -180.0 {
            self.center.lon() + 360.0 + offset % 360.0
        } else {
            longitude
        }
    }

    /// Position of the location in view coordinates.
    ///
    /// For cylindrical projections, locations outside of the view are moved to the copy of the
    /// world closest to the view center.
    pub fn view_position(&self, location: &Location) -> Point2 {
        let position = self.location_to_view(location);

        if self.wraps_longitude() && self.is_outside_view(&position) {
            return self
                .location_to_view(&location.with_lon(self.constrained_longitude(location.lon())));
        }

        position
    }

    /// View rectangle of the bounding box, rotated with the map.
    pub fn view_rect(&self, bbox: &BoundingBox) -> ViewRect {
        self.view_rect_for_map_rect(&self.projection.bounding_box_to_rect(bbox))
    }

    /// View rectangle of the rectangle in map coordinates, rotated with the map.
    pub fn view_rect_for_map_rect(&self, rect: &Rect) -> ViewRect {
        let center = rect.center();
        let mut position = self.view_transform.map_to_view(center);

        if self.wraps_longitude() && self.is_outside_view(&position) {
            let location = self.projection.map_to_location(&center);
            if location.is_valid() {
                let location = location.with_lon(self.constrained_longitude(location.lon()));
                position = self.location_to_view(&location);
            }
        }

        let scale = self.view_transform.scale();
        ViewRect::centered(
            position,
            rect.width() * scale,
            rect.height() * scale,
            self.view_transform.rotation(),
        )
    }

    fn wraps_longitude(&self) -> bool {
        self.projection.projection_type().wraps_longitude()
    }

    fn is_outside_view(&self, point: &Point2) -> bool {
        point.x() < 0.0
            || point.x() > self.size.width()
            || point.y() < 0.0
            || point.y() > self.size.height()
    }

    /// Registers a listener notified after every viewport update.
    pub fn add_listener(&mut self, listener: impl ViewportListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Removes all registered listeners.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Recomputes the projection and the view transform from the current state and notifies the
    /// listeners. Returns false and leaves the projection and the transform unchanged if the
    /// center cannot be projected.
    fn update_transform(
        &mut self,
        mut reset_transform_center: bool,
        projection_changed: bool,
    ) -> bool {
        let view_scale = ViewTransform::zoom_level_to_scale(self.zoom_level);
        let projection = self
            .projection
            .with_center(self.projection_center.unwrap_or(self.center));

        let fixed_location = self.transform_center.unwrap_or(self.center);
        let map_center = projection.location_to_map(&fixed_location);
        if !projection.is_valid(&map_center) {
            warn!(
                "Map center {fixed_location} cannot be projected with {}, keeping the previous \
                 view",
                projection.crs_id()
            );
            return false;
        }

        self.projection = projection;
        self.view_transform
            .set_transform(map_center, self.view_center, view_scale, self.heading);

        if self.transform_center.is_some() {
            let center = self.view_to_location(self.size.center());
            if center.is_valid() {
                let mut center = center.normalized();
                if center.lat().abs() > self.max_latitude {
                    let lat = center.lat().clamp(-self.max_latitude, self.max_latitude);
                    center = center.with_lat(lat);
                    reset_transform_center = true;
                }

                self.center = center;

                if reset_transform_center {
                    self.reset_transform_center();
                    let projection = self
                        .projection
                        .with_center(self.projection_center.unwrap_or(self.center));

                    let map_center = projection.location_to_map(&self.center);
                    if projection.is_valid(&map_center) {
                        self.projection = projection;
                        self.view_transform.set_transform(
                            map_center,
                            self.view_center,
                            view_scale,
                            self.heading,
                        );
                    }
                }
            }
        }

        let event = ViewportChanged {
            projection_changed,
            longitude_offset: self.center.lon() - self.center_longitude,
        };
        self.center_longitude = self.center.lon();

        debug!(
            "Viewport updated: center {}, zoom level {}, heading {}",
            self.center, self.zoom_level, self.heading
        );

        for listener in &self.listeners {
            listener.viewport_changed(&event);
        }

        true
    }
}

fn normalize_heading(heading: f64) -> f64 {
    let heading = heading.rem_euclid(360.0);
    if heading >= 360.0 {
        0.0
    } else {
        heading
    }
}
