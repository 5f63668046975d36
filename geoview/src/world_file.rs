//! Georeferencing of raster images with [world files](https://en.wikipedia.org/wiki/World_file).

use std::path::{Path, PathBuf};

use geoview_types::cartesian::{CartesianPoint2d, Point2, Rect};
use geoview_types::geo::BoundingBox;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::GeoviewError;

/// Affine transform from image pixel coordinates into map coordinates:
///
/// ```text
/// x' = A·x + B·y + C
/// y' = D·x + E·y + F
/// ```
///
/// The parameters are stored in a world file one per line in the order `A, D, B, E, C, F`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldFile {
    a: f64,
    d: f64,
    b: f64,
    e: f64,
    c: f64,
    f: f64,
}

impl WorldFile {
    /// Creates a transform from the parameters in the world file order.
    pub fn new(a: f64, d: f64, b: f64, e: f64, c: f64, f: f64) -> Self {
        Self { a, d, b, e, c, f }
    }

    /// Parses the contents of a world file. Lines after the sixth one are ignored.
    ///
    /// ```
    /// use geoview::WorldFile;
    ///
    /// let world_file = WorldFile::parse("10\n0\n0\n-10\n500000.5\n5200000.5\n").unwrap();
    /// assert_eq!(world_file.parameters(), [10.0, 0.0, 0.0, -10.0, 500000.5, 5200000.5]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, GeoviewError> {
        let mut parameters = [0.0; 6];
        let mut count = 0;

        for (index, line) in text.lines().take(6).enumerate() {
            parameters[index] = line
                .trim()
                .parse()
                .map_err(|_| GeoviewError::WorldFileParse { line: index + 1 })?;
            count += 1;
        }

        if count < parameters.len() {
            return Err(GeoviewError::InsufficientWorldFileParameters);
        }

        let [a, d, b, e, c, f] = parameters;
        Ok(Self::new(a, d, b, e, c, f))
    }

    /// Reads and parses a world file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, GeoviewError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Path of the world file of the image: the middle character of the extension is dropped
    /// and `w` is appended, e.g. `map.png` → `map.pgw`, `map.tif` → `map.tfw`.
    ///
    /// Returns `None` if the image extension is shorter than three characters.
    pub fn world_file_path(image_path: impl AsRef<Path>) -> Option<PathBuf> {
        let image_path = image_path.as_ref();
        let extension = image_path.extension()?.to_str()?;

        let mut chars: Vec<char> = extension.chars().collect();
        if chars.len() < 3 {
            return None;
        }

        chars.remove(1);
        chars.push('w');

        Some(image_path.with_extension(chars.into_iter().collect::<String>()))
    }

    /// Parameters in the world file order `A, D, B, E, C, F`.
    pub fn parameters(&self) -> [f64; 6] {
        [self.a, self.d, self.b, self.e, self.c, self.f]
    }

    /// Homogeneous matrix of the transform.
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(self.a, self.b, self.c, self.d, self.e, self.f, 0.0, 0.0, 1.0)
    }

    /// Transforms a pixel position into map coordinates.
    pub fn transform(&self, pixel: Point2) -> Point2 {
        let v = self.matrix() * Vector3::new(pixel.x(), pixel.y(), 1.0);
        Point2::new(v.x, v.y)
    }

    /// Returns true if the transform has rotation or shear terms.
    pub fn is_rotated(&self) -> bool {
        self.b != 0.0 || self.d != 0.0
    }

    /// Counterclockwise rotation of the image axes in map coordinates, in degrees.
    pub fn rotation(&self) -> f64 {
        if !self.is_rotated() {
            return 0.0;
        }

        (self.d.atan2(self.a) + self.b.atan2(-self.e)).to_degrees() / 2.0
    }

    /// Transform without rotation that maps the image to the same area as this one before it is
    /// rotated by [`WorldFile::rotation`].
    pub fn unrotated(&self) -> Self {
        if !self.is_rotated() {
            return *self;
        }

        Self {
            a: self.a.hypot(self.d),
            d: 0.0,
            b: 0.0,
            e: -self.e.hypot(self.b),
            ..*self
        }
    }

    /// Map rectangle covered by an image of the given size in pixels before rotation, and the
    /// rotation angle in degrees.
    pub fn bounds(&self, pixel_width: f64, pixel_height: f64) -> (Rect, f64) {
        let unrotated = self.unrotated();
        let rect = Rect::from_corners(
            unrotated.transform(Point2::new(0.0, 0.0)),
            unrotated.transform(Point2::new(pixel_width, pixel_height)),
        );

        (rect, self.rotation())
    }

    /// Bounds of an image of the given size in pixels as a bounding box, assuming the map
    /// coordinates are longitude and latitude.
    pub fn bounding_box(&self, pixel_width: f64, pixel_height: f64) -> BoundingBox {
        let (rect, _) = self.bounds(pixel_width, pixel_height);
        BoundingBox::new(rect.y_min(), rect.x_min(), rect.y_max(), rect.x_max())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse() {
        let world_file = WorldFile::parse(" 0.5 \r\n0\n0\n-0.25\n-180\n90\nextra line").unwrap();
        assert_eq!(world_file, WorldFile::new(0.5, 0.0, 0.0, -0.25, -180.0, 90.0));
        assert_eq!(
            world_file.transform(Point2::new(10.0, 20.0)),
            Point2::new(-175.0, 85.0)
        );
    }

    #[test]
    fn parse_errors() {
        assert_matches!(
            WorldFile::parse("1\n0\nzero\n-1\n0\n0"),
            Err(GeoviewError::WorldFileParse { line: 3 })
        );
        assert_matches!(
            WorldFile::parse("1\n0\n0\n-1\n\n0"),
            Err(GeoviewError::WorldFileParse { line: 5 })
        );
        assert_matches!(
            WorldFile::parse("1\n0\n0\n-1\n0"),
            Err(GeoviewError::InsufficientWorldFileParameters)
        );
        assert_matches!(
            WorldFile::parse(""),
            Err(GeoviewError::InsufficientWorldFileParameters)
        );
    }

    #[test]
    fn world_file_path() {
        assert_eq!(
            WorldFile::world_file_path("/data/map.png"),
            Some(PathBuf::from("/data/map.pgw"))
        );
        assert_eq!(
            WorldFile::world_file_path("image.tif"),
            Some(PathBuf::from("image.tfw"))
        );
        assert_eq!(
            WorldFile::world_file_path("image.jpeg"),
            Some(PathBuf::from("image.jegw"))
        );
        assert_eq!(WorldFile::world_file_path("image.gz"), None);
        assert_eq!(WorldFile::world_file_path("image"), None);
    }

    #[test]
    fn unrotated_bounds() {
        let world_file = WorldFile::new(0.1, 0.0, 0.0, -0.1, 10.0, 50.0);
        let (rect, rotation) = world_file.bounds(200.0, 100.0);

        assert_eq!(rotation, 0.0);
        assert_relative_eq!(rect.x_min(), 10.0);
        assert_relative_eq!(rect.x_max(), 30.0);
        assert_relative_eq!(rect.y_min(), 40.0);
        assert_relative_eq!(rect.y_max(), 50.0);

        let bbox = world_file.bounding_box(200.0, 100.0);
        assert_relative_eq!(bbox.south(), 40.0);
        assert_relative_eq!(bbox.west(), 10.0);
        assert_relative_eq!(bbox.north(), 50.0);
        assert_relative_eq!(bbox.east(), 30.0);
    }

    #[test]
    fn rotated_bounds() {
        let angle = 30f64.to_radians();
        let (sin, cos) = angle.sin_cos();
        let world_file = WorldFile::new(2.0 * cos, 2.0 * sin, 2.0 * sin, -2.0 * cos, 100.0, 200.0);

        assert!(world_file.is_rotated());
        assert_relative_eq!(world_file.rotation(), 30.0, epsilon = 1e-9);

        let (rect, rotation) = world_file.bounds(10.0, 5.0);
        assert_relative_eq!(rotation, 30.0, epsilon = 1e-9);
        assert_relative_eq!(rect.x_min(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(rect.width(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(rect.y_max(), 200.0, epsilon = 1e-9);
        assert_relative_eq!(rect.height(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn read_from_file() {
        let file_name = format!("geoview-world-file-{}.pgw", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, "1.5\n0\n0\n-1.5\n3\n4\n").unwrap();

        let world_file = WorldFile::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(world_file.parameters(), [1.5, 0.0, 0.0, -1.5, 3.0, 4.0]);

        assert_matches!(WorldFile::read(&path), Err(GeoviewError::FsIo(_)));
    }
}
