// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use alloc::vec::Vec;

use crate::Point;

/// A curve parametrized by a scalar.
pub trait ParamCurve {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }

    /// Evaluate the curve at `n + 1` evenly spaced parameters.
    ///
    /// The parameters are `i / n` for `i` in `0..=n`, so both endpoints are
    /// included. With `n == 0` only the start point is returned.
    fn eval_n(&self, n: usize) -> Vec<Point> {
        if n == 0 {
            return alloc::vec![self.eval(0.0)];
        }
        let n_f = n as f64;
        (0..=n).map(|i| self.eval(i as f64 / n_f)).collect()
    }
}
