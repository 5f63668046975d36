use geoview_types::cartesian::Size;
use geoview_types::geo::{Location, EPSG_3857};
use serde::{Deserialize, Serialize};

use crate::error::GeoviewError;

/// Upper limit of the maximum zoom level.
pub const MAX_ZOOM_LEVEL_LIMIT: f64 = 22.0;

/// Initial state of a [`MapViewport`](super::MapViewport).
///
/// All fields are optional in the serialized form:
///
/// ```
/// use geoview::ViewportConfig;
/// use geoview_types::latlon;
///
/// let json = r#"{ "crs": "AUTO2:42003", "zoom_level": 4.5 }"#;
/// let config = ViewportConfig::from_json(json).unwrap();
/// assert_eq!(config.crs(), "AUTO2:42003");
/// assert_eq!(config.zoom_level(), 4.5);
/// assert_eq!(config.center(), latlon!(0.0, 0.0));
/// assert_eq!(config.max_zoom_level(), 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    crs: String,
    center: Location,
    projection_center: Option<Location>,
    zoom_level: f64,
    heading: f64,
    min_zoom_level: f64,
    max_zoom_level: f64,
    size: Size,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            crs: EPSG_3857.to_string(),
            center: Location::default(),
            projection_center: None,
            zoom_level: 1.0,
            heading: 0.0,
            min_zoom_level: 1.0,
            max_zoom_level: 20.0,
            size: Size::default(),
        }
    }
}

impl ViewportConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, GeoviewError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the zoom limits are consistent and all values are finite.
    pub fn validate(&self) -> Result<(), GeoviewError> {
        if !self.center.is_valid() {
            return Err(GeoviewError::InvalidConfig(format!(
                "center {} is not a valid location",
                self.center
            )));
        }

        if let Some(projection_center) = self.projection_center {
            if !projection_center.is_valid() {
                return Err(GeoviewError::InvalidConfig(format!(
                    "projection center {projection_center} is not a valid location"
                )));
            }
        }

        if !self.zoom_level.is_finite() || !self.heading.is_finite() {
            return Err(GeoviewError::InvalidConfig(
                "zoom level and heading must be finite".into(),
            ));
        }

        if !(0.0..=self.max_zoom_level).contains(&self.min_zoom_level)
            || self.max_zoom_level > MAX_ZOOM_LEVEL_LIMIT
        {
            return Err(GeoviewError::InvalidConfig(format!(
                "zoom level limits [{}, {}] must be within [0, {MAX_ZOOM_LEVEL_LIMIT}]",
                self.min_zoom_level, self.max_zoom_level
            )));
        }

        if !(self.size.width() >= 0.0 && self.size.height() >= 0.0) {
            return Err(GeoviewError::InvalidConfig(
                "view size must not be negative".into(),
            ));
        }

        Ok(())
    }

    /// Identifier of the map projection. Defaults to `EPSG:3857`.
    pub fn crs(&self) -> &str {
        &self.crs
    }

    /// Sets identifier of the map projection.
    pub fn with_crs(mut self, crs: impl Into<String>) -> Self {
        self.crs = crs.into();
        self
    }

    /// Sets identifier of the map projection.
    pub fn set_crs(&mut self, crs: impl Into<String>) {
        self.crs = crs.into();
    }

    /// Location of the center of the view.
    pub fn center(&self) -> Location {
        self.center
    }

    /// Sets location of the center of the view.
    pub fn with_center(mut self, center: Location) -> Self {
        self.center = center;
        self
    }

    /// Sets location of the center of the view.
    pub fn set_center(&mut self, center: Location) {
        self.center = center;
    }

    /// Reference point of the projection. If not set, the view center is used.
    pub fn projection_center(&self) -> Option<Location> {
        self.projection_center
    }

    /// Sets reference point of the projection.
    pub fn with_projection_center(mut self, projection_center: Option<Location>) -> Self {
        self.projection_center = projection_center;
        self
    }

    /// Sets reference point of the projection.
    pub fn set_projection_center(&mut self, projection_center: Option<Location>) {
        self.projection_center = projection_center;
    }

    /// Initial zoom level. Defaults to `1`.
    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    /// Sets initial zoom level.
    pub fn with_zoom_level(mut self, zoom_level: f64) -> Self {
        self.zoom_level = zoom_level;
        self
    }

    /// Sets initial zoom level.
    pub fn set_zoom_level(&mut self, zoom_level: f64) {
        self.zoom_level = zoom_level;
    }

    /// Clockwise rotation of the map in degrees.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Sets clockwise rotation of the map in degrees.
    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    /// Sets clockwise rotation of the map in degrees.
    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    /// Minimum allowed zoom level. Defaults to `1`.
    pub fn min_zoom_level(&self) -> f64 {
        self.min_zoom_level
    }

    /// Sets minimum allowed zoom level.
    pub fn with_min_zoom_level(mut self, min_zoom_level: f64) -> Self {
        self.min_zoom_level = min_zoom_level;
        self
    }

    /// Sets minimum allowed zoom level.
    pub fn set_min_zoom_level(&mut self, min_zoom_level: f64) {
        self.min_zoom_level = min_zoom_level;
    }

    /// Maximum allowed zoom level. Defaults to `20`.
    pub fn max_zoom_level(&self) -> f64 {
        self.max_zoom_level
    }

    /// Sets maximum allowed zoom level.
    pub fn with_max_zoom_level(mut self, max_zoom_level: f64) -> Self {
        self.max_zoom_level = max_zoom_level;
        self
    }

    /// Sets maximum allowed zoom level.
    pub fn set_max_zoom_level(&mut self, max_zoom_level: f64) {
        self.max_zoom_level = max_zoom_level;
    }

    /// Size of the view in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets size of the view in pixels.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets size of the view in pixels.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}
