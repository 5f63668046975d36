//! Geoview keeps the state of an interactive map view and converts positions between
//! geographic coordinates and the pixels of the view.
//!
//! The conversion is a chain of two steps:
//!
//! * a [`MapProjection`](geoview_types::geo::MapProjection) from the
//!   [geoview_types] crate maps a [`Location`](geoview_types::geo::Location) into a planar map
//!   point, and
//! * a [`ViewTransform`] scales, rotates and translates the map point into view coordinates.
//!
//! [`MapViewport`] ties both together and implements the behaviour of a map control that does
//! not depend on any GUI framework: panning, zooming and rotating with gestures, clamping the
//! center to the valid latitude range of the projection, and notifying
//! [listeners](ViewportListener) when the view changes.
//!
//! ```
//! use geoview::MapViewportBuilder;
//! use geoview_types::cartesian::{Point2, Size};
//! use geoview_types::geo::ProjectionRegistry;
//! use geoview_types::latlon;
//! # use approx::assert_abs_diff_eq;
//!
//! let registry = ProjectionRegistry::with_defaults();
//! let viewport = MapViewportBuilder::default()
//!     .with_center(latlon!(51.48, 0.0))
//!     .with_zoom_level(10.0)
//!     .with_size(Size::new(1024.0, 768.0))
//!     .build(&registry)
//!     .unwrap();
//!
//! let position = viewport.location_to_view(&latlon!(51.48, 0.0));
//! assert_abs_diff_eq!(position, Point2::new(512.0, 384.0), epsilon = 1e-6);
//! ```

pub mod error;
mod listener;
mod view_rect;
mod view_transform;
mod viewport;
pub mod world_file;

pub use error::GeoviewError;
pub use geoview_types;
pub use listener::{ViewportChanged, ViewportListener};
pub use view_rect::ViewRect;
pub use view_transform::ViewTransform;
pub use viewport::{MapViewport, MapViewportBuilder, ViewportConfig, MAX_ZOOM_LEVEL_LIMIT};
pub use world_file::WorldFile;
