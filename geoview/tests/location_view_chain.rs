use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use approx::assert_abs_diff_eq;
use geoview::{MapViewportBuilder, ViewportChanged, ViewportConfig, WorldFile};
use geoview_types::cartesian::{Point2, Size, Vector2};
use geoview_types::geo::{GeoPoint, Location, ProjectionRegistry};
use geoview_types::latlon;

#[test]
fn location_round_trips_through_view() {
    let registry = ProjectionRegistry::with_defaults();

    for crs in ["EPSG:3857", "EPSG:900913", "AUTO2:42004", "AUTO2:42003"] {
        for heading in [0.0, 17.0, 180.0, 300.0] {
            let viewport = MapViewportBuilder::default()
                .with_crs(crs)
                .with_center(latlon!(-33.87, 151.21))
                .with_zoom_level(9.0)
                .with_heading(heading)
                .with_size(Size::new(1920.0, 1080.0))
                .build(&registry)
                .unwrap();

            for location in [
                latlon!(-33.87, 151.21),
                latlon!(-34.5, 150.0),
                latlon!(-33.0, 152.75),
            ] {
                let position = viewport.location_to_view(&location);
                let restored = viewport.view_to_location(position);
                assert_abs_diff_eq!(restored.lat(), location.lat(), epsilon = 1e-9);
                assert_abs_diff_eq!(restored.lon(), location.lon(), epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn configured_viewport_reports_gestures() {
    let config = ViewportConfig::from_json(
        r#"{
            "crs": "EPSG:3857",
            "center": { "lat": 35.68, "lon": 139.69 },
            "zoom_level": 10,
            "size": { "width": 800, "height": 600 }
        }"#,
    )
    .unwrap();

    let updates = Arc::new(AtomicUsize::new(0));
    let counter = updates.clone();
    let mut viewport = MapViewportBuilder::from_config(config)
        .with_listener(move |_: &ViewportChanged| {
            counter.fetch_add(1, Ordering::Relaxed);
        })
        .build(&ProjectionRegistry::with_defaults())
        .unwrap();

    viewport.translate_map(Vector2::new(-40.0, 25.0));
    viewport.transform_map(Point2::new(200.0, 200.0), Vector2::new(5.0, 5.0), 10.0, 1.5);
    viewport.zoom_map(Point2::new(700.0, 100.0), 12.0);

    assert_eq!(updates.load(Ordering::Relaxed), 3);
    assert_eq!(viewport.heading(), 10.0);
    assert_eq!(viewport.zoom_level(), 12.0);
    assert_abs_diff_eq!(
        viewport.location_to_view(&viewport.center()),
        Point2::new(400.0, 300.0),
        epsilon = 1e-6
    );
}

#[test]
fn zoom_to_world_file_image() {
    let world_file = WorldFile::parse("0.01\n0\n0\n-0.01\n5.0\n52.0\n").unwrap();
    let bbox = world_file.bounding_box(1000.0, 500.0);
    assert_abs_diff_eq!(bbox.center(), latlon!(49.5, 10.0), epsilon = 1e-9);

    let mut viewport = MapViewportBuilder::default()
        .with_size(Size::new(640.0, 480.0))
        .build(&ProjectionRegistry::with_defaults())
        .unwrap();
    viewport.zoom_to_bounds(&bbox);

    // Mercator stretches the box vertically, so its height fills the view.
    let view_rect = viewport.view_rect(&bbox);
    assert_abs_diff_eq!(view_rect.height, 480.0, epsilon = 1e-6);
    assert!(view_rect.width < 640.0);
    assert_abs_diff_eq!(view_rect.center(), Point2::new(320.0, 240.0), epsilon = 1e-6);

    let center: Location = viewport.center();
    assert_abs_diff_eq!(center.lon(), 10.0, epsilon = 1e-9);
}
