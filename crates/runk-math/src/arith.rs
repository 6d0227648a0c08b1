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

//! # Floating-Point Arithmetic
//!
//! Sign transfer, positive difference, remainders, fused multiply-add and
//! neighbour stepping. The first argument's kind decides the result kind.

use crate::adapt::{binary, widen};
use crate::provider;
use runk_core::{Number, convert};

/// `x` with the sign of `sign`.
///
/// ```rust
/// use runk_math::arith::copysign;
/// assert_eq!(copysign(3_i32, -0.0_f64), -3);
/// assert_eq!(copysign(3_u8, -1_i8), 0);
/// ```
#[inline]
pub fn copysign<N: Number, M: Number>(x: N, sign: M) -> N {
    binary(x, sign, provider::copysign)
}

/// `max(x - y, 0)`.
#[inline]
pub fn dim<N: Number, M: Number>(x: N, y: M) -> N {
    binary(x, y, provider::fdim)
}

/// Floating-point remainder of `x / y`, with the sign of `x`.
#[inline]
pub fn fmod<N: Number, M: Number>(x: N, y: M) -> N {
    binary(x, y, provider::fmod)
}

/// IEEE-754 remainder of `x / y`, with the quotient rounded to nearest even.
#[inline]
pub fn remainder<N: Number, M: Number>(x: N, y: M) -> N {
    binary(x, y, provider::remainder)
}

/// `x * y + z` with a single rounding.
#[inline]
pub fn fma<N: Number, M: Number, W: Number>(x: N, y: M, z: W) -> N {
    convert(provider::fma(widen(x), widen(y), widen(z)))
}

/// The next representable `f64` after `x` towards `y`, converted to `x`'s
/// kind.
#[inline]
pub fn nextafter<N: Number, M: Number>(x: N, y: M) -> N {
    binary(x, y, provider::nextafter)
}

/// The next representable `f32` after `x` towards `y`.
///
/// ```rust
/// use runk_math::arith::nextafter32;
/// assert_eq!(nextafter32(1_i32, 2_i32), 1.0_f32 + f32::EPSILON);
/// ```
#[inline]
pub fn nextafter32<N: Number, M: Number>(x: N, y: M) -> f32 {
    provider::nextafterf(convert(x), convert(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copysign() {
        assert_eq!(copysign(2.0_f64, -1_i64), -2.0);
        assert_eq!(copysign(-2_i16, 5_u8), 2);
        assert_eq!(copysign(i8::MIN, 1_i8), i8::MAX);
    }

    #[test]
    fn test_dim() {
        assert_eq!(dim(5_i32, 3_i32), 2);
        assert_eq!(dim(3_i32, 5_i32), 0);
        assert_eq!(dim(0_u8, -300_i32), 255);
        assert!(dim(f64::NAN, 1.0_f64).is_nan());
    }

    #[test]
    fn test_fmod_and_remainder() {
        assert_eq!(fmod(7_i32, 3_i32), 1);
        assert_eq!(fmod(-7_i32, 3_i32), -1);
        assert_eq!(fmod(5.5_f64, 2_u8), 1.5);
        assert_eq!(remainder(7_i32, 4_i32), -1);
        assert_eq!(remainder(5.0_f64, 2.0_f64), 1.0);
        // Division by zero is NaN, which integers see as zero.
        assert_eq!(fmod(7_i32, 0_i32), 0);
        assert!(fmod(7.0_f64, 0_i32).is_nan());
    }

    #[test]
    fn test_fma() {
        assert_eq!(fma(2_i32, 3_u8, 4.0_f64), 10);
        assert_eq!(fma(0.5_f64, 4_i32, -1_i8), 1.0);
        assert_eq!(fma(100_i8, 100_i8, 0_i8), i8::MAX);
    }

    #[test]
    fn test_nextafter() {
        assert_eq!(nextafter(1.0_f64, 2.0_f64), 1.0 + f64::EPSILON);
        assert_eq!(nextafter(1.0_f64, 1.0_f64), 1.0);
        assert_eq!(nextafter(0.0_f64, 1.0_f64), f64::from_bits(1));
        // The step is far below integer resolution.
        assert_eq!(nextafter(3_i32, 10_i32), 3);
    }

    #[test]
    fn test_nextafter32() {
        assert_eq!(nextafter32(1.0_f64, 0.0_f64), 1.0 - f32::EPSILON / 2.0);
        assert_eq!(nextafter32(0_u8, -1_i8), -f32::from_bits(1));
        assert!(nextafter32(f64::NAN, 1_i32).is_nan());
    }
}
