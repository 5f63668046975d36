use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::cartesian::point::{CartesianPoint2d, Point2};

/// Axis-aligned rectangle in cartesian coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
}

impl<N: Float> Rect<N> {
    /// Creates a new rectangle from its bounds. The bounds are not reordered.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Rectangle with all bounds set to NaN.
    pub fn nan() -> Self {
        Self::new(N::nan(), N::nan(), N::nan(), N::nan())
    }

    /// Creates a rectangle from its left (or bottom) corner and size.
    ///
    /// Negative sizes are normalized, so the resulting rectangle always has `x_min <= x_max` and
    /// `y_min <= y_max`.
    pub fn from_origin_size(x: N, y: N, width: N, height: N) -> Self {
        Self::from_corners(Point2::new(x, y), Point2::new(x + width, y + height))
    }

    /// Creates the smallest rectangle containing both points.
    pub fn from_corners(a: Point2<N>, b: Point2<N>) -> Self {
        Self {
            x_min: a.x().min(b.x()),
            y_min: a.y().min(b.y()),
            x_max: a.x().max(b.x()),
            y_max: a.y().max(b.y()),
        }
    }

    /// Creates the smallest rectangle containing all the points. Returns `None` if the iterator
    /// is empty.
    ///
    /// If any of the points has a NaN coordinate, the corresponding bounds of the result are NaN
    /// too.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut rect = Self {
            x_min: first.x(),
            y_min: first.y(),
            x_max: first.x(),
            y_max: first.y(),
        };

        for p in std::iter::once(first).chain(points) {
            if p.x().is_nan() || p.y().is_nan() {
                return Some(Self::nan());
            }

            if rect.x_min > p.x() {
                rect.x_min = p.x();
            }
            if rect.y_min > p.y() {
                rect.y_min = p.y();
            }
            if rect.x_max < p.x() {
                rect.x_max = p.x();
            }
            if rect.y_max < p.y() {
                rect.y_max = p.y();
            }
        }

        Some(rect)
    }

    /// Left bound.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Right bound.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Lower bound.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Upper bound.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Center point.
    pub fn center(&self) -> Point2<N> {
        let two = N::one() + N::one();
        Point2::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Smallest rectangle containing both this and the other rectangle.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Corner points in the order: `(x_min, y_min)`, `(x_min, y_max)`, `(x_max, y_max)`,
    /// `(x_max, y_min)`.
    pub fn into_quadrangle(self) -> [Point2<N>; 4] {
        [
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_min, self.y_max),
            Point2::new(self.x_max, self.y_max),
            Point2::new(self.x_max, self.y_min),
        ]
    }
}
