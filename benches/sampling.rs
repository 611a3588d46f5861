// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of the stroke sampling paths.

#![feature(test)]
extern crate test;
use test::Bencher;

use inkbez::{
    curves, eval_bezier, sample_bezier_segments, sample_bezier_uniform, Curve, StrokeOptions,
    StrokePoint, Widths, DEFAULT_NUM_POINTS, DEFAULT_SEGMENT_SIZE,
};

fn stroke(n: usize) -> Vec<StrokePoint> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 4.0;
            StrokePoint::new(x, (x * 0.1).sin() * 20.0, 0.5, i as f64 * 8.0)
        })
        .collect()
}

#[bench]
fn bench_eval_bezier_cubic(b: &mut Bencher) {
    let pts = stroke(4);
    b.iter(|| eval_bezier(test::black_box(&pts), test::black_box(0.37)))
}

#[bench]
fn bench_eval_bezier_degree_10(b: &mut Bencher) {
    let pts = stroke(11);
    b.iter(|| eval_bezier(test::black_box(&pts), test::black_box(0.37)))
}

#[bench]
fn bench_curve_length(b: &mut Bencher) {
    let pts = stroke(4);
    let c = Curve::try_from_slice(&pts, Widths::uniform(1.0)).unwrap();
    b.iter(|| test::black_box(c).length())
}

#[bench]
fn bench_sample_uniform(b: &mut Bencher) {
    let pts = stroke(4);
    b.iter(|| sample_bezier_uniform(test::black_box(&pts), DEFAULT_NUM_POINTS))
}

#[bench]
fn bench_sample_segments_64(b: &mut Bencher) {
    let pts = stroke(64);
    b.iter(|| sample_bezier_segments(test::black_box(&pts), DEFAULT_SEGMENT_SIZE, 20))
}

#[bench]
fn bench_build_curves_64(b: &mut Bencher) {
    let pts = stroke(64);
    b.iter(|| curves(test::black_box(&pts), StrokeOptions::default()))
}
