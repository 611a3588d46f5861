// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control points that join neighboring stroke segments smoothly.

use crate::Point;

/// The two control points flanking a joint point.
///
/// `c1` lies on the incoming side of the joint and `c2` on the outgoing
/// side; the three points are collinear, so a curve passing through the
/// joint with these handles has a continuous tangent there.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoints {
    /// Control point on the `s1` side of the joint.
    pub c1: Point,
    /// Control point on the `s2` side of the joint.
    pub c2: Point,
}

/// Compute the control points around the joint `s2` of three consecutive
/// samples.
///
/// The midpoints of the two chords `s1 s2` and `s2 s3` are blended by the
/// relative chord lengths, and both midpoints are then translated by the
/// offset that moves the blend onto `s2`. The resulting handles point along
/// a direction close to `s3 - s1`.
///
/// Coincident inputs are fine: when both chords have zero length the blend
/// factor is taken as zero and the handles collapse onto `s2`.
///
/// ```
/// use inkbez::{control_points, Point};
///
/// let cp = control_points(
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(2.0, 0.0),
/// );
/// assert_eq!(cp.c1, Point::new(0.5, 1.0));
/// assert_eq!(cp.c2, Point::new(1.5, 1.0));
/// ```
pub fn control_points(
    s1: impl Into<Point>,
    s2: impl Into<Point>,
    s3: impl Into<Point>,
) -> ControlPoints {
    let (s1, s2, s3) = (s1.into(), s2.into(), s3.into());
    let m1 = s1.midpoint(s2);
    let m2 = s2.midpoint(s3);

    let l1 = s1.distance(s2);
    let l2 = s2.distance(s3);
    let l = l1 + l2;
    let k = if l == 0.0 { 0.0 } else { l2 / l };

    let cm = m2 + (m1 - m2) * k;
    let t = s2 - cm;

    ControlPoints {
        c1: m1 + t,
        c2: m2 + t,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::control_points;
    use crate::{Point, StrokePoint};

    #[test]
    fn coincident_points() {
        let p = Point::new(3.5, -2.25);
        let cp = control_points(p, p, p);
        assert_eq!(cp.c1, p);
        assert_eq!(cp.c2, p);
    }

    #[test]
    fn coincident_points_random() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let p = Point::new(
                rng.random_range(-1e4..1e4),
                rng.random_range(-1e4..1e4),
            );
            let cp = control_points(p, p, p);
            assert!(!cp.c1.is_nan() && !cp.c2.is_nan());
            assert_eq!(cp.c1, p);
            assert_eq!(cp.c2, p);
        }
    }

    #[test]
    fn one_zero_chord() {
        // s1 == s2: k = 1, so the blend lands on m1 == s2 and the handles are
        // the raw midpoints.
        let s = Point::new(1.0, 1.0);
        let cp = control_points(s, s, Point::new(3.0, 1.0));
        assert_eq!(cp.c1, s);
        assert_eq!(cp.c2, Point::new(2.0, 1.0));

        // s2 == s3: k = 0.
        let cp = control_points(Point::new(-1.0, 1.0), s, s);
        assert_eq!(cp.c1, Point::new(0.0, 1.0));
        assert_eq!(cp.c2, s);
    }

    #[test]
    fn symmetric_peak() {
        let cp = control_points((0.0, 0.0), (1.0, 1.0), (2.0, 0.0));
        assert_eq!(cp.c1, Point::new(0.5, 1.0));
        assert_eq!(cp.c2, Point::new(1.5, 1.0));
    }

    #[test]
    fn handles_are_collinear_with_joint() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut pt = || Point::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
            let (s1, s2, s3) = (pt(), pt(), pt());
            let cp = control_points(s1, s2, s3);
            let d1 = s2 - cp.c1;
            let d2 = cp.c2 - s2;
            let cross = d1.x * d2.y - d1.y * d2.x;
            let scale = d1.hypot() * d2.hypot() + 1.0;
            assert!(cross.abs() < 1e-9 * scale, "cross {cross} at {s1:?} {s2:?} {s3:?}");
            // The handle direction follows s3 - s1.
            let chord = s3 - s1;
            assert!((cp.c2 - cp.c1).dot(chord) >= -1e-9 * scale);
        }
    }

    #[test]
    fn accepts_stroke_points() {
        let a = StrokePoint::new(0.0, 0.0, 0.5, 1.0);
        let b = StrokePoint::new(2.0, 0.0, 0.5, 2.0);
        let c = StrokePoint::new(4.0, 0.0, 0.5, 3.0);
        let cp = control_points(a, b, c);
        assert_eq!(cp.c1, Point::new(1.0, 0.0));
        assert_eq!(cp.c2, Point::new(3.0, 0.0));
    }
}
