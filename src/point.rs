// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point.

use core::fmt;
use core::ops::{Add, Sub};

use crate::Vec2;

/// A 2D point.
///
/// This is the purely geometric position; see [`StrokePoint`] for a captured
/// input sample that also carries pressure and time.
///
/// [`StrokePoint`]: crate::StrokePoint
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Determine the midpoint of two points.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).hypot()
    }

    /// Is this point finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Is this point NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Compare if two points are within `accuracy` of each other.
    ///
    /// Non-finite points are only near themselves.
    pub fn is_near(self, other: Point, accuracy: f64) -> bool {
        if !(self.is_finite() && other.is_finite()) {
            return self == other;
        }
        self.distance(other) <= accuracy
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Point {
        Point { x: v.0, y: v.1 }
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Vec2) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub<Point> for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Point) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline]
    fn from(p: mint::Point2<f64>) -> Point {
        Point { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        let a = Point::new(1., 2.);
        let b = Point::new(-4., 14.);
        assert_eq!(b - a, Vec2::new(-5., 12.));
        assert_eq!(a + (b - a), b);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn distance() {
        let p1 = Point::new(0., 10.);
        let p2 = Point::new(0., 5.);
        assert_eq!(p1.distance(p2), 5.);

        let p1 = Point::new(-11., 1.);
        let p2 = Point::new(-7., -2.);
        assert_eq!(p1.distance(p2), 5.);
    }

    #[test]
    fn midpoint() {
        let a = Point::new(0., 0.);
        let b = Point::new(3., -1.);
        assert_eq!(a.midpoint(b), Point::new(1.5, -0.5));
        assert_eq!(a.midpoint(a), a);
    }

    #[test]
    fn near() {
        assert!(Point::new(0., 0.).is_near(Point::new(0., 0.), 0.));
        assert!(Point::new(0., 0.).is_near(Point::new(0.1, 0.), 0.1));
        assert!(!Point::new(0., 0.).is_near(Point::new(1., 1.), 0.1));
        let inf = Point::new(f64::INFINITY, f64::INFINITY);
        assert!(inf.is_near(inf, 0.));
        assert!(!inf.is_near(Point::new(f64::NEG_INFINITY, f64::INFINITY), 1.));
        assert!(Point::new(f64::NAN, 0.).is_nan());
    }

    #[cfg(feature = "mint")]
    #[test]
    fn mint_conversions() {
        let p = Point::new(2.5, -1.0);
        let m: mint::Point2<f64> = p.into();
        assert_eq!((m.x, m.y), (2.5, -1.0));
        assert_eq!(Point::from(m), p);
    }
}
