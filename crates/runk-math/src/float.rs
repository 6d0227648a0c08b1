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

//! # Float Decomposition and Classification
//!
//! Mantissa/exponent splitting, raw IEEE-754 bit patterns, and the sign,
//! NaN and infinity predicates. Integer arguments are converted first, so
//! `is_nan` is always `false` for them.

use crate::adapt::widen;
use crate::provider;
use runk_core::{Number, convert};

/// Splits `x` into a fraction in `[0.5, 1)` and a power of two such that
/// `x == frac * 2^exp`.
///
/// ```rust
/// use runk_math::float::frexp;
/// assert_eq!(frexp(8_i32), (0.5, 4));
/// assert_eq!(frexp(0.0_f64), (0.0, 0));
/// ```
#[inline]
pub fn frexp<N: Number>(x: N) -> (f64, i32) {
    provider::frexp(widen(x))
}

/// `frac * 2^exp`, with `exp` converted to `i32`. The result has `frac`'s
/// kind.
#[inline]
pub fn ldexp<N: Number, M: Number>(frac: N, exp: M) -> N {
    convert(provider::ldexp(widen(frac), convert(exp)))
}

/// Splits `x` into its integer part, converted to `x`'s kind, and its
/// fractional part. Both share the sign of `x`.
///
/// ```rust
/// use runk_math::float::modf;
/// assert_eq!(modf(-3.25_f64), (-3.0, -0.25));
/// assert_eq!(modf(9_u8), (9, 0.0));
/// ```
#[inline]
pub fn modf<N: Number>(x: N) -> (N, f64) {
    let (fract, int) = provider::modf(widen(x));
    (convert(int), fract)
}

/// The bit pattern of `x` as an `f32`.
#[inline]
pub fn float32_bits<N: Number>(x: N) -> u32 {
    provider::float32_bits(convert(x))
}

/// The `f32` whose bit pattern is `bits` converted to `u32`.
#[inline]
pub fn float32_from_bits<N: Number>(bits: N) -> f32 {
    provider::float32_from_bits(convert(bits))
}

/// The bit pattern of `x` as an `f64`.
#[inline]
pub fn float64_bits<N: Number>(x: N) -> u64 {
    provider::float64_bits(widen(x))
}

/// The `f64` whose bit pattern is `bits` converted to `u64`.
#[inline]
pub fn float64_from_bits<N: Number>(bits: N) -> f64 {
    provider::float64_from_bits(convert(bits))
}

/// Whether `x` is negative or negative zero.
#[inline]
pub fn signbit<N: Number>(x: N) -> bool {
    widen(x).is_sign_negative()
}

/// Whether `x` is NaN.
#[inline]
pub fn is_nan<N: Number>(x: N) -> bool {
    widen(x).is_nan()
}

/// Whether `x` is an infinity of the requested sign.
///
/// `sign > 0` asks for `+∞`, `sign < 0` for `-∞`, and zero accepts either.
///
/// ```rust
/// use runk_math::float::is_inf;
/// assert!(is_inf(f64::NEG_INFINITY, 0_i32));
/// assert!(is_inf(f64::NEG_INFINITY, -1_i32));
/// assert!(!is_inf(f64::NEG_INFINITY, 1_i32));
/// ```
#[inline]
pub fn is_inf<N: Number, M: Number>(x: N, sign: M) -> bool {
    let x = widen(x);
    let sign: i32 = convert(sign);
    (sign >= 0 && x == f64::INFINITY) || (sign <= 0 && x == f64::NEG_INFINITY)
}

/// `+∞` if `sign >= 0`, otherwise `-∞`.
#[inline]
pub fn inf<N: Number>(sign: N) -> f64 {
    let sign: i32 = convert(sign);
    if sign >= 0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}

/// NaN converted to `N`: NaN for float kinds, zero for integer kinds.
///
/// ```rust
/// assert!(runk_math::float::nan::<f32>().is_nan());
/// assert_eq!(runk_math::float::nan::<u16>(), 0);
/// ```
#[inline]
pub fn nan<N: Number>() -> N {
    convert(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frexp_reconstructs() {
        for x in [1.0_f64, -3.75, 1e-310, 6.02e23] {
            let (frac, exp) = frexp(x);
            assert!((0.5..1.0).contains(&frac.abs()));
            assert_eq!(provider::ldexp(frac, exp), x);
        }
    }

    #[test]
    fn test_ldexp() {
        assert_eq!(ldexp(0.75_f64, 4_i32), 12.0);
        assert_eq!(ldexp(3_i32, -1_i32), 2);
        assert_eq!(ldexp(1_i16, 20_u8), i16::MAX);
        // The exponent is rounded before use.
        assert_eq!(ldexp(1.0_f64, 2.6_f32), 8.0);
    }

    #[test]
    fn test_modf() {
        assert_eq!(modf(2.5_f64), (2.0, 0.5));
        assert_eq!(modf(-7_i32), (-7, -0.0));
        let (int, fract) = modf(f64::INFINITY);
        assert_eq!(int, f64::INFINITY);
        assert_eq!(fract, 0.0);
    }

    #[test]
    fn test_bit_patterns() {
        assert_eq!(float32_bits(1_u8), 0x3f80_0000);
        assert_eq!(float32_bits(-2.0_f64), 0xc000_0000);
        assert_eq!(float64_bits(1_i64), 0x3ff0_0000_0000_0000);
        assert_eq!(float32_from_bits(0x3f80_0000_u32), 1.0);
        assert_eq!(float64_from_bits(0x3ff0_0000_0000_0000_u64), 1.0);
        // Negative bit patterns saturate to zero before reinterpretation.
        assert_eq!(float32_from_bits(-1_i32), 0.0);
    }

    #[test]
    fn test_predicates() {
        assert!(signbit(-0.0_f64));
        assert!(signbit(-1_i8));
        assert!(!signbit(0_u32));
        assert!(is_nan(f32::NAN));
        assert!(!is_nan(0_i32));
        assert!(is_inf(f32::INFINITY, 1_u8));
        assert!(!is_inf(i64::MAX, 0_i32));
    }

    #[test]
    fn test_inf_and_nan() {
        assert_eq!(inf(0_i32), f64::INFINITY);
        assert_eq!(inf(-0.4_f64), f64::INFINITY);
        assert_eq!(inf(-3_i8), f64::NEG_INFINITY);
        assert!(nan::<f64>().is_nan());
        assert_eq!(nan::<i8>(), 0);
    }
}
