use geoview_types::cartesian::Size;
use geoview_types::geo::{Location, MapProjection, ProjectionRegistry};

use super::{MapViewport, ViewportConfig};
use crate::error::GeoviewError;
use crate::listener::ViewportListener;

/// Convenience type to initialize a [`MapViewport`].
///
/// ```
/// use geoview::MapViewportBuilder;
/// use geoview_types::cartesian::Size;
/// use geoview_types::geo::ProjectionRegistry;
/// use geoview_types::latlon;
///
/// let registry = ProjectionRegistry::with_defaults();
/// let viewport = MapViewportBuilder::default()
///     .with_crs("AUTO2:42003")
///     .with_center(latlon!(48.2, 16.37))
///     .with_zoom_level(6.0)
///     .with_size(Size::new(800.0, 600.0))
///     .build(&registry)
///     .unwrap();
///
/// assert_eq!(viewport.projection().crs_id(), "AUTO2:42003");
/// assert_eq!(viewport.zoom_level(), 6.0);
/// ```
#[derive(Default)]
pub struct MapViewportBuilder {
    config: ViewportConfig,
    projection: Option<Box<dyn MapProjection>>,
    listeners: Vec<Box<dyn ViewportListener>>,
}

impl MapViewportBuilder {
    /// Creates a builder with the values of the configuration.
    pub fn from_config(config: ViewportConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Sets the CRS identifier used to look up the projection in the registry.
    ///
    /// Replaces the value set by [`MapViewportBuilder::with_projection`].
    pub fn with_crs(mut self, crs: impl Into<String>) -> Self {
        self.config.set_crs(crs);
        self.projection = None;
        self
    }

    /// Sets the projection directly, without a registry lookup.
    pub fn with_projection(mut self, projection: Box<dyn MapProjection>) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Sets the location of the view center. Defaults to `(0, 0)`.
    pub fn with_center(mut self, center: Location) -> Self {
        self.config.set_center(center);
        self
    }

    /// Sets the reference point of the projection.
    pub fn with_projection_center(mut self, projection_center: Location) -> Self {
        self.config.set_projection_center(Some(projection_center));
        self
    }

    /// Sets the zoom level. Defaults to `1`.
    pub fn with_zoom_level(mut self, zoom_level: f64) -> Self {
        self.config.set_zoom_level(zoom_level);
        self
    }

    /// Sets allowed range of the zoom level. Defaults to `[1, 20]`.
    pub fn with_zoom_level_limits(mut self, min_zoom_level: f64, max_zoom_level: f64) -> Self {
        self.config.set_min_zoom_level(min_zoom_level);
        self.config.set_max_zoom_level(max_zoom_level);
        self
    }

    /// Sets the clockwise rotation of the map in degrees.
    pub fn with_heading(mut self, heading: f64) -> Self {
        self.config.set_heading(heading);
        self
    }

    /// Sets the size of the view in pixels.
    pub fn with_size(mut self, size: Size) -> Self {
        self.config.set_size(size);
        self
    }

    /// Adds a listener for viewport changes.
    pub fn with_listener(mut self, listener: impl ViewportListener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Creates the viewport.
    ///
    /// Fails if the configuration is not valid or the CRS identifier is not in the registry.
    pub fn build(self, registry: &ProjectionRegistry) -> Result<MapViewport, GeoviewError> {
        let Self {
            config,
            projection,
            listeners,
        } = self;

        config.validate()?;

        let projection = match projection {
            Some(projection) => projection,
            None => registry.create(
                config.crs(),
                config.projection_center().unwrap_or(config.center()),
            )?,
        };

        let mut viewport = MapViewport::new(projection);
        viewport.min_zoom_level = config.min_zoom_level();
        viewport.max_zoom_level = config.max_zoom_level();
        viewport.set_size(config.size());
        viewport.set_projection_center(config.projection_center());
        viewport.set_zoom_level(config.zoom_level());
        viewport.set_heading(config.heading());
        viewport.set_center(config.center());

        viewport.listeners.extend(listeners);

        Ok(viewport)
    }
}
