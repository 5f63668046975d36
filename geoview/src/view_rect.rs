use geoview_types::cartesian::{CartesianPoint2d, Point2, Rect};
use serde::{Deserialize, Serialize};

/// Rectangle in view coordinates, possibly rotated around its center.
///
/// `x` and `y` are the coordinates of the top left corner of the unrotated rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewRect {
    /// Left side of the unrotated rectangle.
    pub x: f64,
    /// Top side of the unrotated rectangle.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Clockwise rotation around the center in degrees.
    pub rotation: f64,
}

impl ViewRect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation,
        }
    }

    /// Creates a rectangle of the given size centered at `center`.
    pub fn centered(center: Point2, width: f64, height: f64, rotation: f64) -> Self {
        Self::new(
            center.x() - width / 2.0,
            center.y() - height / 2.0,
            width,
            height,
            rotation,
        )
    }

    /// Center point, which is not affected by the rotation.
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The unrotated rectangle.
    pub fn unrotated(&self) -> Rect {
        Rect::from_origin_size(self.x, self.y, self.width, self.height)
    }
}
