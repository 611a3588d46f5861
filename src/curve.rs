// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic stroke segments with a width taper.

use core::ops::Range;

use crate::common::polyline_length;
use crate::{control_points, CurveError, ParamCurve, Point, StrokePoint};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Number of chords used by [`Curve::length`].
const LENGTH_STEPS: usize = 10;

/// Stroke width at the start and end of a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Widths {
    /// Width at the start point.
    pub start: f64,
    /// Width at the end point.
    pub end: f64,
}

impl Widths {
    /// Create a new width pair.
    #[inline]
    pub const fn new(start: f64, end: f64) -> Widths {
        Widths { start, end }
    }

    /// The same width at both ends.
    #[inline]
    pub const fn uniform(width: f64) -> Widths {
        Widths::new(width, width)
    }
}

/// A single cubic Bézier segment of an ink stroke.
///
/// The geometry runs from `start_point` to `end_point`, pulled by
/// `control1` and `control2` in that order. The width tapers from
/// `start_width` to `end_width` independently of the geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    /// The captured sample the segment starts at.
    pub start_point: StrokePoint,
    /// The first control point.
    pub control1: Point,
    /// The second control point.
    pub control2: Point,
    /// The captured sample the segment ends at.
    pub end_point: StrokePoint,
    /// Stroke width at `start_point`.
    pub start_width: f64,
    /// Stroke width at `end_point`.
    pub end_width: f64,
}

impl Curve {
    /// Create a new segment from its four defining points.
    #[inline]
    pub fn new(
        start_point: StrokePoint,
        control1: impl Into<Point>,
        control2: impl Into<Point>,
        end_point: StrokePoint,
        widths: Widths,
    ) -> Curve {
        Curve {
            start_point,
            control1: control1.into(),
            control2: control2.into(),
            end_point,
            start_width: widths.start,
            end_width: widths.end,
        }
    }

    /// Build the segment between the two middle points of a four-sample
    /// window.
    ///
    /// The outer samples only steer the tangents: the segment runs from
    /// `points[1]` to `points[2]`, its first control point is the outgoing
    /// handle of `points[1]` (joint of the first three samples) and its
    /// second control point is the incoming handle of `points[2]` (joint of
    /// the last three). Consecutive windows of a stroke therefore produce
    /// segments that share endpoints and tangents.
    ///
    /// `control1` is always the handle leaving `points[1]` and `control2` the
    /// handle arriving at `points[2]`; [`ParamCurve::eval`] uses them in that
    /// order, so renderers must not swap them.
    ///
    /// ```
    /// use inkbez::{Curve, Point, StrokePoint, Widths};
    ///
    /// let pts: [StrokePoint; 4] = [
    ///     (0.0, 0.0).into(),
    ///     (1.0, 1.0).into(),
    ///     (2.0, 0.0).into(),
    ///     (3.0, 1.0).into(),
    /// ];
    /// let c = Curve::from_points(&pts, Widths::new(1.0, 2.0));
    /// assert_eq!(c.start_point, pts[1]);
    /// assert_eq!(c.end_point, pts[2]);
    /// assert_eq!(c.control1, Point::new(1.5, 1.0));
    /// assert_eq!(c.control2, Point::new(1.5, 0.0));
    /// ```
    pub fn from_points(points: &[StrokePoint; 4], widths: Widths) -> Curve {
        let [p0, p1, p2, p3] = *points;
        let c2 = control_points(p0, p1, p2).c2;
        let c1 = control_points(p1, p2, p3).c1;
        Curve::new(p1, c2, c1, p2, widths)
    }

    /// Checked variant of [`Curve::from_points`] for slices.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::PointCount`] unless `points` holds exactly four
    /// samples.
    pub fn try_from_slice(points: &[StrokePoint], widths: Widths) -> Result<Curve, CurveError> {
        let window: &[StrokePoint; 4] =
            points.try_into().map_err(|_| CurveError::PointCount {
                expected: 4,
                found: points.len(),
            })?;
        Ok(Curve::from_points(window, widths))
    }

    /// Evaluate one coordinate of a cubic Bézier at parameter `t`.
    ///
    /// This is the Bernstein form
    /// `start·(1-t)³ + 3·c1·(1-t)²·t + 3·c2·(1-t)·t² + end·t³`, computed
    /// relative to `start` so that a constant polygon evaluates to exactly
    /// `start` everywhere. `t = 0` and `t = 1` return `start` and `end`
    /// exactly. Other values of `t` outside `[0, 1]` extrapolate the same
    /// polynomial.
    #[inline]
    pub fn point(t: f64, start: f64, c1: f64, c2: f64, end: f64) -> f64 {
        if t == 0.0 {
            return start;
        }
        if t == 1.0 {
            return end;
        }
        let mt = 1.0 - t;
        start
            + 3.0 * mt * mt * t * (c1 - start)
            + 3.0 * mt * t * t * (c2 - start)
            + t * t * t * (end - start)
    }

    /// Approximate arc length.
    ///
    /// This is the length of the polyline through the curve evaluated at
    /// eleven evenly spaced parameters. It is exact for straight segments
    /// with evenly spread control points and a cheap estimate otherwise.
    pub fn length(&self) -> f64 {
        polyline_length(self.eval_n(LENGTH_STEPS))
    }

    /// Stroke width at parameter `t`, interpolated linearly.
    #[inline]
    pub fn width_at(&self, t: f64) -> f64 {
        self.start_width + (self.end_width - self.start_width) * t
    }

    /// The widths at both ends.
    #[inline]
    pub fn widths(&self) -> Widths {
        Widths::new(self.start_width, self.end_width)
    }

    /// Dots to stamp along the segment when drawing it.
    ///
    /// There is one stamp per unit of [`length`](Curve::length), rounded up,
    /// so zero-length segments yield nothing. The width grows with the cube
    /// of `t`, which keeps the thickness close to `start_width` for most of
    /// the segment, and is capped at `max_width`.
    pub fn stamps(&self, max_width: f64) -> Stamps {
        let count = self.length().ceil();
        let count = if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        };
        Stamps {
            curve: *self,
            max_width,
            count,
            range: 0..count,
        }
    }
}

impl ParamCurve for Curve {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let (s, c1, c2, e) = (self.start_point, self.control1, self.control2, self.end_point);
        Point::new(
            Curve::point(t, s.x, c1.x, c2.x, e.x),
            Curve::point(t, s.y, c1.y, c2.y, e.y),
        )
    }

    #[inline]
    fn start(&self) -> Point {
        self.start_point.to_point()
    }

    #[inline]
    fn end(&self) -> Point {
        self.end_point.to_point()
    }
}

/// A dot to draw: its center and its width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stamp {
    /// Center of the dot.
    pub center: Point,
    /// Diameter of the dot.
    pub width: f64,
}

/// An iterator over the stamps of a [`Curve`].
///
/// Created by [`Curve::stamps`].
#[derive(Clone, Debug)]
pub struct Stamps {
    curve: Curve,
    max_width: f64,
    count: usize,
    range: Range<usize>,
}

impl Stamps {
    fn stamp(&self, i: usize) -> Stamp {
        let t = i as f64 / self.count as f64;
        let delta = self.curve.end_width - self.curve.start_width;
        let width = (self.curve.start_width + t * t * t * delta).min(self.max_width);
        Stamp {
            center: self.curve.eval(t),
            width,
        }
    }
}

impl Iterator for Stamps {
    type Item = Stamp;

    fn next(&mut self) -> Option<Stamp> {
        let i = self.range.next()?;
        Some(self.stamp(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Stamps {
    fn next_back(&mut self) -> Option<Stamp> {
        let i = self.range.next_back()?;
        Some(self.stamp(i))
    }
}

impl ExactSizeIterator for Stamps {}
