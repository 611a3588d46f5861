// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluating and resampling Bézier curves given by raw stroke samples.
//!
//! These functions treat a run of [`StrokePoint`]s directly as the control
//! polygon of a Bézier curve of any degree, rather than going through
//! [`Curve`](crate::Curve). Only the positions are interpolated; see
//! [`eval_bezier`] for how pressure and time are carried.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::common::polyline_length;
use crate::{Point, StrokePoint};

/// Default number of parameter steps for [`sample_bezier`].
pub const DEFAULT_STEPS: usize = 100;

/// Number of parameter steps in the dense pass of [`sample_bezier_uniform`].
pub const DENSE_STEPS: usize = 1000;

/// Default number of output points for [`sample_bezier_uniform`].
pub const DEFAULT_NUM_POINTS: usize = 100;

/// Default window size for [`sample_bezier_segments`].
pub const DEFAULT_SEGMENT_SIZE: usize = 4;

/// Control polygons up to this size are evaluated without allocating.
const INLINE_POINTS: usize = 8;

/// Evaluate the Bézier curve with control polygon `points` at `t`.
///
/// This is De Casteljau's algorithm for any number of points, run on a
/// private copy of the positions. The returned sample has the interpolated
/// position and the pressure and time of `points[0]`.
///
/// Evaluating at `t = 0` and `t = 1` reproduces the first and last position
/// exactly.
///
/// # Panics
///
/// Panics if `points` is empty.
///
/// ```
/// use inkbez::{eval_bezier, StrokePoint};
///
/// let pts = [
///     StrokePoint::new(0.0, 0.0, 0.5, 1.0),
///     StrokePoint::new(1.0, 2.0, 0.9, 2.0),
///     StrokePoint::new(2.0, 0.0, 0.1, 3.0),
/// ];
/// let mid = eval_bezier(&pts, 0.5);
/// assert_eq!((mid.x, mid.y), (1.0, 1.0));
/// assert_eq!((mid.pressure, mid.time), (0.5, 1.0));
/// ```
pub fn eval_bezier(points: &[StrokePoint], t: f64) -> StrokePoint {
    assert!(!points.is_empty(), "a Bézier curve needs at least one point");
    let mut q: SmallVec<[Point; INLINE_POINTS]> = points.iter().map(|p| p.to_point()).collect();
    let mt = 1.0 - t;
    let n = q.len() - 1;
    for r in 1..=n {
        for i in 0..=n - r {
            let (a, b) = (q[i], q[i + 1]);
            q[i] = Point::new(mt * a.x + t * b.x, mt * a.y + t * b.y);
        }
    }
    // TODO: interpolate pressure and time along with the position.
    points[0].with_position(q[0])
}

/// Evaluate the curve at `steps + 1` evenly spaced parameters.
///
/// The parameters are `i / steps` for `i` in `0..=steps`, so the result
/// starts at the first point and ends exactly at the last. With
/// `steps == 0` only the start is returned, and an empty control polygon
/// gives an empty result.
pub fn sample_bezier(points: &[StrokePoint], steps: usize) -> Vec<StrokePoint> {
    if points.is_empty() {
        return Vec::new();
    }
    if steps == 0 {
        return alloc::vec![eval_bezier(points, 0.0)];
    }
    let n = steps as f64;
    (0..=steps)
        .map(|i| eval_bezier(points, i as f64 / n))
        .collect()
}

/// Resample the curve to roughly `num_points` points evenly spaced by
/// arc length.
///
/// The curve is first sampled densely with [`DENSE_STEPS`] steps. The dense
/// samples are then walked while accumulating the distance travelled, and a
/// sample is kept every time that distance reaches `1 / (num_points - 1)`
/// of the total polyline length.
///
/// The first dense sample is always kept. Since each kept sample may
/// overshoot the target spacing by up to one dense step, the result can be
/// shorter than `num_points` and need not end on the curve's last point; it
/// is never longer. `num_points == 0` or an empty control polygon gives an
/// empty result.
pub fn sample_bezier_uniform(points: &[StrokePoint], num_points: usize) -> Vec<StrokePoint> {
    if points.is_empty() || num_points == 0 {
        return Vec::new();
    }
    let dense = sample_bezier(points, DENSE_STEPS);
    let total = polyline_length(&dense);
    let target = total / (num_points - 1) as f64;

    let mut result = Vec::with_capacity(num_points);
    result.push(dense[0]);
    let mut travelled = 0.0;
    for pair in dense.windows(2) {
        if result.len() >= num_points {
            break;
        }
        travelled += pair[0].distance(pair[1]);
        if travelled >= target {
            result.push(pair[1]);
            travelled = 0.0;
        }
    }
    result
}

/// Resample a long run of samples as a chain of Bézier pieces.
///
/// The samples are cut into windows of `segment_size` points, each starting
/// on the last point of the previous one, and every window is resampled
/// independently with [`sample_bezier_uniform`] to at most `steps` points.
/// The last window may be shorter, giving a lower-degree piece. The results
/// are concatenated in order, so shared boundary points may appear twice.
///
/// A `segment_size` below 2 is treated as 2. Fewer than two samples give an
/// empty result.
///
/// ```
/// use inkbez::{sample_bezier_segments, StrokePoint};
///
/// let stroke: Vec<StrokePoint> = (0..7).map(|i| (i as f64, (i % 2) as f64).into()).collect();
/// let pts = sample_bezier_segments(&stroke, 4, 20);
/// assert!(pts.len() <= 2 * 20);
/// assert_eq!(pts[0], stroke[0]);
/// ```
pub fn sample_bezier_segments(
    points: &[StrokePoint],
    segment_size: usize,
    steps: usize,
) -> Vec<StrokePoint> {
    let segment_size = segment_size.max(2);
    let mut result = Vec::new();
    for start in (0..points.len().saturating_sub(1)).step_by(segment_size - 1) {
        let end = (start + segment_size).min(points.len());
        result.extend(sample_bezier_uniform(&points[start..end], steps));
    }
    result
}
