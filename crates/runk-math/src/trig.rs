// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Trigonometric and Hyperbolic Functions
//!
//! Angles are in radians. Results are converted back to the argument's kind,
//! so integer callers get the rounded and saturated value, and a NaN result
//! (e.g. `asin(2)`) becomes zero.

use crate::adapt::{binary, unary, widen};
use crate::provider;
use runk_core::{Number, convert};

macro_rules! unary_fns {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<N: Number>(x: N) -> N {
                unary(x, provider::$name)
            }
        )*
    };
}

unary_fns! {
    /// Sine of `x`.
    ///
    /// ```rust
    /// assert_eq!(runk_math::trig::sin(0_i32), 0);
    /// assert_eq!(runk_math::trig::sin(2_i8), 1);
    /// ```
    sin,
    /// Cosine of `x`.
    cos,
    /// Tangent of `x`.
    tan,
    /// Arcsine of `x`. NaN outside `[-1, 1]`.
    asin,
    /// Arccosine of `x`. NaN outside `[-1, 1]`.
    acos,
    /// Arctangent of `x`.
    atan,
    /// Hyperbolic sine of `x`.
    sinh,
    /// Hyperbolic cosine of `x`.
    cosh,
    /// Hyperbolic tangent of `x`.
    tanh,
    /// Inverse hyperbolic sine of `x`.
    asinh,
    /// Inverse hyperbolic cosine of `x`. NaN below 1.
    acosh,
    /// Inverse hyperbolic tangent of `x`. `±∞` at `±1`.
    atanh,
}

/// The angle of the point `(x, y)`, i.e. the arctangent of `y / x` using the
/// signs of both to pick the quadrant. The result has `y`'s kind.
///
/// ```rust
/// use runk_math::trig::atan2;
/// assert!((atan2(1.0_f64, 1_i32) - core::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// assert_eq!(atan2(1_i32, -1_i32), 2);
/// ```
#[inline]
pub fn atan2<N: Number, M: Number>(y: N, x: M) -> N {
    binary(y, x, provider::atan2)
}

/// Sine and cosine of `x` in one call.
#[inline]
pub fn sincos<N: Number>(x: N) -> (N, N) {
    let (s, c) = provider::sincos(widen(x));
    (convert(s), convert(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_trig_on_floats_matches_provider() {
        assert_eq!(sin(PI / 6.0), provider::sin(PI / 6.0));
        assert_eq!(cos(0.0_f64), 1.0);
        assert_eq!(atan(f64::INFINITY), FRAC_PI_2);
        assert_eq!(sin(0.5_f32), provider::sin(0.5) as f32);
    }

    #[test]
    fn test_trig_on_integers_rounds() {
        assert_eq!(cos(0_u8), 1);
        // tan(1) = 1.557...
        assert_eq!(tan(1_i64), 2);
        // cos(3) = -0.98..., unsigned saturates at zero.
        assert_eq!(cos(3_u32), 0);
        assert_eq!(cos(3_i32), -1);
    }

    #[test]
    fn test_domain_errors_become_zero_for_integers() {
        assert_eq!(asin(2_i32), 0);
        assert_eq!(acosh(0_i16), 0);
        assert!(asin(2.0_f64).is_nan());
    }

    #[test]
    fn test_atanh_pole_saturates() {
        assert_eq!(atanh(1_i8), i8::MAX);
        assert_eq!(atanh(-1_i8), i8::MIN);
        assert_eq!(atanh(1.0_f32), f32::INFINITY);
    }

    #[test]
    fn test_hyperbolic_overflow_saturates() {
        assert_eq!(sinh(100_i16), i16::MAX);
        assert_eq!(cosh(0_u64), 1);
        assert_eq!(cosh(-100_i64), i64::MAX);
        assert_eq!(tanh(50_i32), 1);
    }

    #[test]
    fn test_atan2_quadrants() {
        assert_eq!(atan2(0.0_f64, -1.0_f64), PI);
        assert_eq!(atan2(-1_i32, 0_u8), -2);
        assert_eq!(atan2(1_u8, 0_u8), 2);
    }

    #[test]
    fn test_sincos() {
        let (s, c) = sincos(FRAC_PI_2);
        assert_eq!(s, 1.0);
        assert!(c.abs() < 1e-15);
        assert_eq!(sincos(0_i32), (0, 1));
    }
}
