// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors from checked curve construction.

use core::fmt;

/// An error which can be returned when building a [`Curve`] from a slice.
///
/// [`Curve`]: crate::Curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurveError {
    /// The input did not have the number of points the operation needs.
    PointCount {
        /// How many points were required.
        expected: usize,
        /// How many points were supplied.
        found: usize,
    },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::PointCount { expected, found } => {
                write!(f, "Expected {expected} points, found {found}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CurveError {}
