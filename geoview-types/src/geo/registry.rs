use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::error::GeoviewTypesError;
use crate::geo::crs::{AUTO2_42003, AUTO2_42004, EPSG_3857, EPSG_900913};
use crate::geo::datum::Datum;
use crate::geo::impls::projection::{AutoEquirectangular, Orthographic, WebMercator};
use crate::geo::location::Location;
use crate::geo::traits::projection::MapProjection;

/// Function creating a projection with the given reference point.
pub type ProjectionFactory = Box<dyn Fn(Location) -> Box<dyn MapProjection> + Send + Sync>;

/// Lookup of projections by their CRS identifier.
///
/// The registry is an explicit value: create it once (usually with
/// [`ProjectionRegistry::with_defaults`]) and pass it to whatever needs to resolve CRS
/// identifiers.
///
/// ```
/// use geoview_types::geo::{MapProjection, ProjectionRegistry, ProjectionType};
/// use geoview_types::latlon;
///
/// let registry = ProjectionRegistry::with_defaults();
/// let projection = registry.create("AUTO2:42003", latlon!(52.0, 4.0)).unwrap();
/// assert_eq!(projection.projection_type(), ProjectionType::Azimuthal);
/// ```
pub struct ProjectionRegistry {
    factories: HashMap<String, ProjectionFactory>,
}

impl ProjectionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry with all the projections of this crate on the WGS84 datum.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(EPSG_3857, |center| {
            WebMercator::new(Datum::WGS84).with_center(center)
        });
        registry.register(EPSG_900913, |center| {
            WebMercator::new(Datum::WGS84).with_center(center)
        });
        registry.register(AUTO2_42004, |center| {
            Box::new(AutoEquirectangular::new(Datum::WGS84, center))
        });
        registry.register(AUTO2_42003, |center| {
            Box::new(Orthographic::new(Datum::WGS84, center))
        });

        registry
    }

    /// Adds a projection factory for the CRS identifier, replacing the previous one if any.
    pub fn register(
        &mut self,
        crs_id: impl Into<String>,
        factory: impl Fn(Location) -> Box<dyn MapProjection> + Send + Sync + 'static,
    ) {
        self.factories.insert(crs_id.into(), Box::new(factory));
    }

    /// Returns true if a projection is registered for the identifier.
    pub fn contains(&self, crs_id: &str) -> bool {
        self.factories.contains_key(crs_id)
    }

    /// Iterates over the registered identifiers in no particular order.
    pub fn crs_ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(|id| id.as_str())
    }

    /// Creates the projection registered for the identifier with the given reference point.
    pub fn create(
        &self,
        crs_id: &str,
        center: Location,
    ) -> Result<Box<dyn MapProjection>, GeoviewTypesError> {
        let factory = self
            .factories
            .get(crs_id)
            .ok_or_else(|| GeoviewTypesError::UnknownCrs(crs_id.to_string()))?;

        Ok(factory(center))
    }
}

impl Default for ProjectionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Debug for ProjectionRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.crs_ids().collect();
        ids.sort_unstable();
        f.debug_struct("ProjectionRegistry")
            .field("crs_ids", &ids)
            .finish()
    }
}
