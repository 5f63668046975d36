//! Prints the view positions of a few cities while the map is dragged, zoomed and rotated.
//!
//! Run with `RUST_LOG=debug cargo run --example viewport` to see the viewport updates.

use geoview::{GeoviewError, MapViewportBuilder, ViewportChanged};
use geoview_types::cartesian::{CartesianPoint2d, Point2, Size, Vector2};
use geoview_types::geo::{Location, ProjectionRegistry};
use geoview_types::latlon;

fn main() -> Result<(), GeoviewError> {
    env_logger::init();

    let registry = ProjectionRegistry::with_defaults();
    let crs = std::env::args().nth(1).unwrap_or_else(|| "EPSG:3857".to_string());

    let mut viewport = MapViewportBuilder::default()
        .with_crs(crs)
        .with_center(latlon!(50.0, 10.0))
        .with_zoom_level(5.0)
        .with_size(Size::new(1024.0, 768.0))
        .with_listener(|event: &ViewportChanged| {
            if event.crossed_antimeridian() {
                println!("Center crossed the antimeridian");
            }
        })
        .build(&registry)?;

    let cities = [
        ("Berlin", latlon!(52.52, 13.405)),
        ("Paris", latlon!(48.857, 2.352)),
        ("Rome", latlon!(41.9, 12.5)),
    ];

    print_positions(&viewport, &cities, "initial view");

    viewport.translate_map(Vector2::new(150.0, -60.0));
    print_positions(&viewport, &cities, "after drag");

    viewport.transform_map(Point2::new(512.0, 384.0), Vector2::new(0.0, 0.0), 30.0, 2.0);
    print_positions(&viewport, &cities, "after pinch");

    println!(
        "Visible area: {:?}, CRS value: {}",
        viewport.bounding_box(),
        viewport.projection().crs_value()
    );

    Ok(())
}

fn print_positions(viewport: &geoview::MapViewport, cities: &[(&str, Location)], title: &str) {
    println!(
        "{title}: center {}, zoom level {:.2}, heading {:.1}",
        viewport.center(),
        viewport.zoom_level(),
        viewport.heading()
    );

    for (name, location) in cities {
        let position = viewport.view_position(location);
        println!("  {name}: ({:.1}, {:.1})", position.x(), position.y());
    }
}
