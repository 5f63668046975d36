use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Point in a 2-dimensional cartesian coordinate space.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: num_traits::Num + Copy + PartialOrd;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates are finite numbers.
    fn is_finite(&self) -> bool
    where
        Self::Num: Float,
    {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Squared euclidean distance to the other point.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }
}

/// Cartesian point type that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

/// A point in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }
}

impl<Num: Float> Point2<Num> {
    /// Point with both coordinates set to NaN. Returned by inverse view transforms that are not
    /// defined.
    pub fn nan() -> Self {
        Self::new(Num::nan(), Num::nan())
    }
}

impl<Num: nalgebra::Scalar + Copy> From<nalgebra::Point2<Num>> for Point2<Num> {
    fn from(value: nalgebra::Point2<Num>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl<Num: nalgebra::Scalar> From<Point2<Num>> for nalgebra::Point2<Num> {
    fn from(value: Point2<Num>) -> Self {
        nalgebra::Point2::new(value.x, value.y)
    }
}

/// Vector between two points in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector2<Num = f64> {
    dx: Num,
    dy: Num,
}

impl<Num: Copy> Vector2<Num> {
    /// Creates a new vector with the given coordinates.
    pub const fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// Returns x coordinate of the vector.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Returns y coordinate of the vector.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Returns true if both components are equal to zero.
    pub fn is_zero(&self) -> bool
    where
        Num: num_traits::Zero,
    {
        self.dx.is_zero() && self.dy.is_zero()
    }

    /// Returns squared magnitude (squared length) of the vector.
    pub fn magnitude_sq(&self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * self.dx + self.dy * self.dy
    }

    /// Returns magnitude (length) of the vector.
    pub fn magnitude(&self) -> Num
    where
        Num: Float,
    {
        self.magnitude_sq().sqrt()
    }
}

impl<Num> std::ops::Sub<Point2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vector2<Num>;

    fn sub(self, rhs: Point2<Num>) -> Self::Output {
        Vector2 {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl<Num> std::ops::Add<Vector2<Num>> for Point2<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Point2<Num>;

    fn add(self, rhs: Vector2<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl<Num> std::ops::Sub<Vector2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Point2<Num>;

    fn sub(self, rhs: Vector2<Num>) -> Self::Output {
        Self {
            x: self.x - rhs.dx,
            y: self.y - rhs.dy,
        }
    }
}

impl<Num> std::ops::Mul<Num> for Vector2<Num>
where
    Num: std::ops::Mul<Num, Output = Num> + Copy,
{
    type Output = Vector2<Num>;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

impl<Num> std::ops::Neg for Vector2<Num>
where
    Num: std::ops::Neg<Output = Num>,
{
    type Output = Vector2<Num>;

    fn neg(self) -> Self::Output {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd> CartesianPoint2d for Point2<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd> NewCartesianPoint2d<Num> for Point2<Num> {
    fn new(x: Num, y: Num) -> Self {
        Point2 { x, y }
    }
}

impl<Num> AbsDiffEq for Point2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<Num> RelativeEq for Point2<Num>
where
    Num: RelativeEq<Num, Epsilon = Num> + Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        Num::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl<Num> AbsDiffEq for Vector2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dx.abs_diff_eq(&other.dx, epsilon) && self.dy.abs_diff_eq(&other.dy, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vector_arithmetic() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, -2.0);

        let v = b - a;
        assert_eq!(v, Vector2::new(3.0, -4.0));
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(a + v, b);
        assert_eq!(b - v, a);
        assert_eq!(-v * 2.0, Vector2::new(-6.0, 8.0));
        assert_eq!(a.distance_sq(&b), 25.0);
    }

    #[test]
    fn finite_check() {
        assert!(Point2::new(1.0, -1.0).is_finite());
        assert!(!Point2::new(f64::NAN, 0.0).is_finite());
        assert!(!Point2::new(0.0, f64::INFINITY).is_finite());
        assert!(!Point2::<f64>::nan().is_finite());
    }

    #[test]
    fn nalgebra_conversion() {
        let point: nalgebra::Point2<f64> = Point2::new(3.0, -7.5).into();
        assert_eq!(point, nalgebra::Point2::new(3.0, -7.5));
        assert_eq!(Point2::from(point), Point2::new(3.0, -7.5));
    }
}
