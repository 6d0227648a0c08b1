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

//! # Exponentials, Logarithms, Powers and Roots
//!
//! Overflowing results saturate at the caller's bounds and `log(0) = -∞`
//! becomes the minimum of an integer kind. Domain errors such as `sqrt(-1)`
//! produce NaN for float kinds and zero for integer kinds.

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
    /// `e^x`.
    ///
    /// ```rust
    /// use runk_math::exp::exp;
    /// assert_eq!(exp(1_i32), 3);
    /// assert_eq!(exp(1000_i32), i32::MAX);
    /// ```
    exp,
    /// `2^x`.
    exp2,
    /// `e^x - 1`, accurate near zero.
    expm1,
    /// Natural logarithm.
    log,
    /// Base-2 logarithm.
    log2,
    /// Base-10 logarithm.
    log10,
    /// `ln(1 + x)`, accurate near zero.
    log1p,
    /// Binary exponent of `x`; see [`provider::logb`].
    logb,
    /// Square root.
    ///
    /// ```rust
    /// use runk_math::exp::sqrt;
    /// assert_eq!(sqrt(4_i32), 2);
    /// assert_eq!(sqrt(-1_i32), 0);
    /// assert!(sqrt(-1.0_f64).is_nan());
    /// ```
    sqrt,
    /// Cube root.
    cbrt,
}

/// Binary exponent of `x` as an integer, converted to `x`'s kind.
///
/// `ilogb(0)` is `i32::MIN` before conversion and `ilogb(±∞)` is
/// `i32::MAX`.
#[inline]
pub fn ilogb<N: Number>(x: N) -> N {
    convert(provider::ilogb(widen(x)))
}

/// `x^y`. The result has `x`'s kind.
///
/// ```rust
/// use runk_math::exp::pow;
/// assert_eq!(pow(2_u8, 7_i64), 128);
/// assert_eq!(pow(2_u8, 9_i64), 255);
/// assert_eq!(pow(9.0_f32, 0.5_f64), 3.0);
/// ```
#[inline]
pub fn pow<N: Number, M: Number>(x: N, y: M) -> N {
    binary(x, y, provider::pow)
}

/// `10^n` for `n` converted to `i32`.
#[inline]
pub fn pow10<N: Number>(n: N) -> N {
    convert(provider::pow10(convert(n)))
}

/// `sqrt(x² + y²)` without undue overflow. The result has `x`'s kind.
#[inline]
pub fn hypot<N: Number, M: Number>(x: N, y: M) -> N {
    binary(x, y, provider::hypot)
}
