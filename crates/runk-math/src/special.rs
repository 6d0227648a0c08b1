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

//! # Special Functions
//!
//! Gamma, error and Bessel functions. The order argument of [`jn`] and
//! [`yn`] is converted to `i32`; their result takes the kind of `x`.

use crate::adapt::{unary, widen};
use crate::provider;
use runk_core::{Number, convert};

macro_rules! unary_fns {
    ($($(#[$meta:meta])* $name:ident => $provider:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<N: Number>(x: N) -> N {
                unary(x, provider::$provider)
            }
        )*
    };
}

unary_fns! {
    /// The Gamma function.
    ///
    /// ```rust
    /// use runk_math::special::gamma;
    /// assert_eq!(gamma(5_u32), 24);
    /// assert!((gamma(0.5_f64) - core::f64::consts::PI.sqrt()).abs() < 1e-12);
    /// ```
    gamma => tgamma,
    /// The error function.
    erf => erf,
    /// The complementary error function, `1 - erf(x)`.
    erfc => erfc,
    /// The inverse error function; see [`provider::erfinv`].
    erfinv => erfinv,
    /// The inverse complementary error function.
    erfcinv => erfcinv,
    /// Bessel function of the first kind, order 0.
    j0 => j0,
    /// Bessel function of the first kind, order 1.
    j1 => j1,
    /// Bessel function of the second kind, order 0.
    y0 => y0,
    /// Bessel function of the second kind, order 1.
    y1 => y1,
}

/// Natural logarithm of `|Γ(x)|` together with the sign of `Γ(x)`
/// (`1` or `-1`).
///
/// ```rust
/// use runk_math::special::lgamma;
/// let (lg, sign) = lgamma(-0.5_f64);
/// assert_eq!(sign, -1);
/// assert!((lg - (2.0 * core::f64::consts::PI.sqrt()).ln()).abs() < 1e-12);
/// ```
#[inline]
pub fn lgamma<N: Number>(x: N) -> (N, i32) {
    let (lg, sign) = provider::lgamma_r(widen(x));
    (convert(lg), sign)
}

/// `ln|Γ(x)|` multiplied by the sign of `Γ(x)`.
#[inline]
pub fn lgam<N: Number>(x: N) -> N {
    let (lg, sign) = provider::lgamma_r(widen(x));
    convert(lg * sign as f64)
}

/// Bessel function of the first kind, order `n`.
#[inline]
pub fn jn<N: Number, M: Number>(n: N, x: M) -> M {
    convert(provider::jn(convert(n), widen(x)))
}

/// Bessel function of the second kind, order `n`.
#[inline]
pub fn yn<N: Number, M: Number>(n: N, x: M) -> M {
    convert(provider::yn(convert(n), widen(x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_gamma() {
        assert_eq!(gamma(1_i32), 1);
        assert_eq!(gamma(6_u16), 120);
        assert_eq!(gamma(200_i64), i64::MAX);
        assert!(close(gamma(3.0_f64), 2.0));
        // Poles at non-positive integers.
        assert_eq!(gamma(-1_i32), 0);
    }

    #[test]
    fn test_lgamma_and_lgam() {
        let (lg, sign) = lgamma(4.0_f64);
        assert!(close(lg, 6.0_f64.ln()));
        assert_eq!(sign, 1);

        let (lg, sign) = lgamma(-0.5_f64);
        assert_eq!(sign, -1);
        assert!(close(lgam(-0.5_f64), -lg));
        assert_eq!(lgam(-0.5_f64).signum(), -1.0);

        // ln(120) = 4.787...
        assert_eq!(lgamma(6_i32), (5, 1));
        assert_eq!(lgam(6_u8), 5);
    }

    #[test]
    fn test_error_functions() {
        assert_eq!(erf(0.0_f64), 0.0);
        assert_eq!(erfc(0.0_f64), 1.0);
        assert_eq!(erf(3_i32), 1);
        assert_eq!(erfc(-3_i32), 2);
        assert!(close(erfinv(erf(0.25_f64)), 0.25));
        assert!(close(erfcinv(erfc(0.25_f64)), 0.25));
    }

    #[test]
    fn test_inverse_error_function_poles() {
        assert_eq!(erfinv(1_i32), i32::MAX);
        assert_eq!(erfinv(-1_i8), i8::MIN);
        assert_eq!(erfinv(2_i32), 0);
        assert_eq!(erfcinv(0.0_f32), f32::INFINITY);
    }

    #[test]
    fn test_bessel_low_orders() {
        assert_eq!(j0(0.0_f64), 1.0);
        assert_eq!(j1(0.0_f64), 0.0);
        assert_eq!(j0(0_i32), 1);
        assert_eq!(y0(0.0_f64), f64::NEG_INFINITY);
        assert_eq!(y1(0_i16), i16::MIN);
    }

    #[test]
    fn test_bessel_order_n() {
        assert!(close(jn(0_i32, 2.5_f64), j0(2.5_f64)));
        assert!(close(jn(1_u8, 2.5_f64), j1(2.5_f64)));
        assert!(close(yn(1.0_f32, 2.5_f64), y1(2.5_f64)));
        // The order is rounded to an integer and the result follows `x`.
        assert!(close(jn(2.4_f64, 3.0_f64), provider::jn(2, 3.0)));
        assert_eq!(jn(2_i64, 0.0_f32), 0.0_f32);
        assert_eq!(jn(0_i8, 0_u8), 1_u8);
    }
}
