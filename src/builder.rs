// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building stroke segments incrementally as samples arrive.

use alloc::vec::Vec;

use arrayvec::ArrayVec;

use crate::{Curve, StrokePoint, Widths};

/// Width settings for pressure-sensitive strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeOptions {
    /// Width drawn at zero pressure.
    pub min_width: f64,
    /// Width drawn at full pressure.
    pub max_width: f64,
}

impl StrokeOptions {
    /// Create options with the given width range.
    #[inline]
    pub const fn new(min_width: f64, max_width: f64) -> StrokeOptions {
        StrokeOptions {
            min_width,
            max_width,
        }
    }

    /// Stroke width for a sample with the given pressure.
    ///
    /// Pressure is clamped to `0.0..=1.0` and mapped linearly onto
    /// `min_width..=max_width`. NaN pressure counts as zero.
    pub fn width_for(&self, pressure: f64) -> f64 {
        let p = if pressure.is_nan() {
            0.0
        } else {
            pressure.clamp(0.0, 1.0)
        };
        self.min_width + (self.max_width - self.min_width) * p
    }
}

impl Default for StrokeOptions {
    fn default() -> Self {
        StrokeOptions::new(0.5, 2.5)
    }
}

/// Turns a stream of stroke samples into [`Curve`] segments.
///
/// The builder keeps the last few samples and, once it has enough context,
/// emits one segment per new sample: the segment ending at the previous
/// sample, whose far tangent is steered by the new one. The very first
/// sample is doubled up so that the stroke's first segment starts exactly
/// where the pen went down.
///
/// ```
/// use inkbez::{CurveBuilder, StrokeOptions, StrokePoint};
///
/// let mut builder = CurveBuilder::new(StrokeOptions::default());
/// assert!(builder.push(StrokePoint::new(0.0, 0.0, 0.5, 0.0)).is_none());
/// assert!(builder.push(StrokePoint::new(4.0, 1.0, 0.5, 1.0)).is_none());
/// let first = builder.push(StrokePoint::new(8.0, 0.0, 0.5, 2.0)).unwrap();
/// assert_eq!((first.start_point.x, first.end_point.x), (0.0, 4.0));
/// let last = builder.finish().unwrap();
/// assert_eq!((last.start_point.x, last.end_point.x), (4.0, 8.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CurveBuilder {
    options: StrokeOptions,
    window: ArrayVec<StrokePoint, 4>,
}

impl CurveBuilder {
    /// Create a builder for a new stroke.
    pub fn new(options: StrokeOptions) -> CurveBuilder {
        CurveBuilder {
            options,
            window: ArrayVec::new(),
        }
    }

    /// The width settings in use.
    pub fn options(&self) -> &StrokeOptions {
        &self.options
    }

    /// Add a sample, returning the segment it completes, if any.
    ///
    /// Nothing is returned for the first two samples of a stroke; after
    /// that, every sample yields exactly one segment.
    pub fn push(&mut self, point: StrokePoint) -> Option<Curve> {
        self.window.push(point);
        if self.window.len() == 3 {
            // First full context of the stroke.
            let first = self.window[0];
            self.window.insert(0, first);
        }
        self.emit()
    }

    /// End the stroke, returning the segment to its last sample, if any.
    ///
    /// The last sample is doubled up, mirroring how the stroke was started.
    /// Strokes of a single sample have no segments. The builder is reset
    /// afterwards.
    pub fn finish(&mut self) -> Option<Curve> {
        let curve = match self.window.len() {
            2 => {
                let (a, b) = (self.window[0], self.window[1]);
                Some(self.build(&[a, a, b, b]))
            }
            3 => {
                let (a, b, c) = (self.window[0], self.window[1], self.window[2]);
                Some(self.build(&[a, b, c, c]))
            }
            _ => None,
        };
        self.reset();
        curve
    }

    /// Forget the current stroke.
    pub fn reset(&mut self) {
        self.window.clear();
    }

    fn emit(&mut self) -> Option<Curve> {
        let window: [StrokePoint; 4] = self.window.as_slice().try_into().ok()?;
        self.window.remove(0);
        Some(self.build(&window))
    }

    fn build(&self, window: &[StrokePoint; 4]) -> Curve {
        let widths = Widths::new(
            self.options.width_for(window[1].pressure),
            self.options.width_for(window[2].pressure),
        );
        Curve::from_points(window, widths)
    }
}

/// Build all segments of a complete stroke.
///
/// A stroke of `n >= 2` samples yields `n - 1` segments, the `i`-th running
/// from `points[i]` to `points[i + 1]`.
pub fn curves(points: &[StrokePoint], options: StrokeOptions) -> Vec<Curve> {
    let mut builder = CurveBuilder::new(options);
    let mut result: Vec<Curve> = points.iter().filter_map(|&p| builder.push(p)).collect();
    result.extend(builder.finish());
    result
}
