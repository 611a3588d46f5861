// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth curves for freehand ink strokes.
//!
//! The inkbez library turns the discrete, possibly noisy samples of a pen or
//! touch stroke into a chain of cubic Bézier segments that join with matching
//! tangents, and provides the sampling utilities a drawing surface needs to
//! render them: evaluation, cheap length estimates, per-segment stroke widths,
//! and resampling to points evenly spaced by arc length.
//!
//! # Examples
//!
//! Building segments from a stroke as the samples come in:
//! ```
//! use inkbez::{CurveBuilder, ParamCurve, StrokeOptions, StrokePoint};
//!
//! let samples = [
//!     StrokePoint::new(0.0, 0.0, 0.2, 0.0),
//!     StrokePoint::new(10.0, 5.0, 0.6, 16.0),
//!     StrokePoint::new(20.0, 5.0, 1.0, 32.0),
//!     StrokePoint::new(30.0, 0.0, 0.8, 48.0),
//! ];
//! let mut builder = CurveBuilder::new(StrokeOptions::default());
//! let mut segments: Vec<_> = samples.iter().filter_map(|&s| builder.push(s)).collect();
//! segments.extend(builder.finish());
//!
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[1].start(), samples[1].to_point());
//! assert!(segments[1].length() >= 10.0);
//! ```
//!
//! Resampling a raw run of samples evenly:
//! ```
//! use inkbez::{sample_bezier_uniform, StrokePoint};
//!
//! let control: Vec<StrokePoint> = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]
//!     .into_iter()
//!     .map(StrokePoint::from)
//!     .collect();
//! let even = sample_bezier_uniform(&control, 20);
//! assert!(even.len() <= 20);
//! assert_eq!(even[0], control[0]);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The `alloc` crate is used regardless.
//!
//! The `serde`, `schemars` and `mint` features add serialization, JSON
//! schemas and `mint` conversions for the value types.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("inkbez requires either the `std` or `libm` feature");

extern crate alloc;

mod builder;
pub mod common;
mod control;
mod curve;
mod error;
mod param_curve;
mod point;
mod sample;
mod stroke_point;
mod vec2;

pub use crate::builder::*;
pub use crate::control::*;
pub use crate::curve::*;
pub use crate::error::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::sample::*;
pub use crate::stroke_point::*;
pub use crate::vec2::*;
