//! Geometric primitives for board layout and annotation drawing.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in scene space
//!
//! # Coordinate System
//!
//! fenboard uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The board scene spans `0..320` on both axes: eight cells of 40 units each.

/// A 2D point representing a position in scene coordinate space.
///
/// # Examples
///
/// ```
/// # use fenboard_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Point) -> f32 {
        other.sub_point(self).hypot()
    }

    /// Rotates this point around `origin` by `radians` (clockwise on screen,
    /// since the Y axis points down).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fenboard_core::geometry::Point;
    /// let p = Point::new(10.0, 0.0).rotate_around(Point::new(0.0, 0.0), std::f32::consts::FRAC_PI_2);
    /// assert!((p.x() - 0.0).abs() < 1e-4);
    /// assert!((p.y() - 10.0).abs() < 1e-4);
    /// ```
    pub fn rotate_around(self, origin: Point, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let offset = self.sub_point(origin);
        Self {
            x: origin.x + offset.x * cos - offset.y * sin,
            y: origin.y + offset.x * sin + offset.y * cos,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_distance() {
        let d = Point::new(20.0, 20.0).distance(Point::new(20.0, 100.0));
        assert_approx_eq!(f32, d, 80.0);
    }

    #[test]
    fn test_rotate_around_half_turn() {
        let origin = Point::new(100.0, 100.0);
        let p = Point::new(120.0, 100.0).rotate_around(origin, std::f32::consts::PI);
        assert_approx_eq!(f32, p.x(), 80.0, epsilon = 1e-4);
        assert_approx_eq!(f32, p.y(), 100.0, epsilon = 1e-4);
    }

    #[test]
    fn test_rotate_around_origin_is_fixed() {
        let origin = Point::new(3.0, 7.0);
        let p = origin.rotate_around(origin, 1.234);
        assert_approx_eq!(f32, p.x(), 3.0);
        assert_approx_eq!(f32, p.y(), 7.0);
    }
}
