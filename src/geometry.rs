//! Planar geometric primitives for truss layouts.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Position in the truss plane measured in metres.
///
/// The y axis points up and `x = 0` is the horizontal centre of the span.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal distance from mid-span.
    pub x: f64,
    /// Height above the bottom chord.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Straight structural element between two points.
///
/// Endpoint order is part of a member's identity, so `(a, b)` and `(b, a)`
/// compare unequal even though they describe the same segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
}

impl Member {
    /// Create a [`Member`] from its endpoints.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Vector pointing from `start` to `end`.
    #[must_use]
    pub fn delta(&self) -> Vector2<f64> {
        self.end.to_vector() - self.start.to_vector()
    }

    /// Distance between the endpoints in metres.
    ///
    /// # Examples
    /// ```
    /// use howetruss::{member, point};
    ///
    /// let diagonal = member(point(0.0, 0.0), point(3.0, 4.0));
    /// assert_eq!(diagonal.length(), 5.0);
    /// ```
    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    /// Point halfway along the member.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::from((self.start.to_vector() + self.end.to_vector()) * 0.5)
    }

    /// Direction of the member in radians, measured counter-clockwise from +x.
    ///
    /// Zero-length members report an angle of zero.
    #[must_use]
    pub fn angle(&self) -> f64 {
        let delta = self.delta();
        delta.y.atan2(delta.x)
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use howetruss::point;
///
/// let origin = point(0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Convenience helper for creating [`Member`] instances.
///
/// # Examples
/// ```
/// use howetruss::{member, point};
///
/// let post = member(point(1.0, 0.0), point(1.0, 2.0));
/// assert_eq!(post.end.y, 2.0);
/// ```
#[must_use]
pub const fn member(start: Point, end: Point) -> Member {
    Member::new(start, end)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn point_to_vector_roundtrip() {
        let origin = Point::new(1.0, 2.0);
        let vector: Vector2<f64> = origin.into();
        assert_eq!(vector, Vector2::new(1.0, 2.0));
        assert_eq!(Point::from(vector), origin);
    }

    #[test]
    fn member_metrics() {
        let post = member(point(-2.0, 0.0), point(-2.0, 3.0));
        assert_relative_eq!(post.length(), 3.0);
        assert_eq!(post.midpoint(), point(-2.0, 1.5));
        assert_relative_eq!(post.angle(), FRAC_PI_2);
    }

    #[test]
    fn zero_length_member_has_zero_angle() {
        let stub = member(point(5.0, 0.0), point(5.0, 0.0));
        assert_eq!(stub.length(), 0.0);
        assert_eq!(stub.angle(), 0.0);
    }

    #[test]
    fn endpoint_order_is_significant() {
        let a = point(0.0, 0.0);
        let b = point(1.0, 1.0);
        assert_ne!(member(a, b), member(b, a));
    }
}
