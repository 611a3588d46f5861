// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Captured input samples.

use core::fmt;

use crate::Point;

/// A single sample of a freehand stroke.
///
/// Samples are produced by the input layer and only ever read here; the
/// sampling functions return new values rather than modifying their inputs.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokePoint {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// Pen pressure, nominally in `0.0..=1.0`.
    pub pressure: f64,
    /// Capture timestamp, in whatever unit the input layer uses.
    pub time: f64,
}

impl StrokePoint {
    /// Create a new sample.
    #[inline]
    pub const fn new(x: f64, y: f64, pressure: f64, time: f64) -> StrokePoint {
        StrokePoint {
            x,
            y,
            pressure,
            time,
        }
    }

    /// The position of this sample.
    #[inline]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// A copy of this sample moved to `p`, keeping pressure and time.
    #[inline]
    #[must_use]
    pub const fn with_position(self, p: Point) -> StrokePoint {
        StrokePoint {
            x: p.x,
            y: p.y,
            ..self
        }
    }

    /// Euclidean distance between the positions of two samples.
    #[inline]
    pub fn distance(self, other: StrokePoint) -> f64 {
        self.to_point().distance(other.to_point())
    }
}

impl From<(f64, f64)> for StrokePoint {
    /// A sample at the given position with zero pressure and time.
    #[inline]
    fn from(v: (f64, f64)) -> StrokePoint {
        StrokePoint::new(v.0, v.1, 0.0, 0.0)
    }
}

impl From<Point> for StrokePoint {
    #[inline]
    fn from(p: Point) -> StrokePoint {
        StrokePoint::new(p.x, p.y, 0.0, 0.0)
    }
}

impl From<StrokePoint> for Point {
    #[inline]
    fn from(p: StrokePoint) -> Point {
        p.to_point()
    }
}

impl From<&StrokePoint> for Point {
    #[inline]
    fn from(p: &StrokePoint) -> Point {
        p.to_point()
    }
}

impl fmt::Debug for StrokePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:?}, {:?}; p={:?} t={:?})",
            self.x, self.y, self.pressure, self.time
        )
    }
}
