// Copyright 2026 the Inkbez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("inkbez requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn ceil(self) -> Self => ceil;
    fn hypot(self, other: Self) -> Self => hypot;
}

/// Length of the polyline through `points`.
///
/// Zero for fewer than two points.
pub fn polyline_length<I>(points: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<crate::Point>,
{
    let mut iter = points.into_iter().map(Into::into);
    let Some(mut last) = iter.next() else {
        return 0.0;
    };
    let mut length = 0.0;
    for p in iter {
        length += last.distance(p);
        last = p;
    }
    length
}

#[cfg(test)]
mod tests {
    use super::polyline_length;
    use crate::Point;

    #[test]
    fn polyline_length_simple() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 0.0),
        ];
        assert_eq!(polyline_length(pts), 9.0);
        assert_eq!(polyline_length([Point::new(1.0, 1.0)]), 0.0);
        assert_eq!(polyline_length(core::iter::empty::<Point>()), 0.0);
    }
}
