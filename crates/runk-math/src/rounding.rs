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

//! # Rounding Functions
//!
//! Each function converts its real-valued result back with the matching
//! [`Rounding`] policy, so the provider's rounding and the narrowing into an
//! integer kind always agree.

use crate::adapt::unary_by;
use crate::provider;
use runk_core::{Number, Rounding};

/// Least integer value not less than `x`.
#[inline]
pub fn ceil<N: Number>(x: N) -> N {
    unary_by(x, provider::ceil, Rounding::Ceil)
}

/// Greatest integer value not greater than `x`.
///
/// ```rust
/// use runk_math::rounding::floor;
/// assert_eq!(floor(-2.5_f64), -3.0);
/// assert_eq!(floor(7_u8), 7);
/// ```
#[inline]
pub fn floor<N: Number>(x: N) -> N {
    unary_by(x, provider::floor, Rounding::Floor)
}

/// `x` with its fractional part removed.
#[inline]
pub fn trunc<N: Number>(x: N) -> N {
    unary_by(x, provider::trunc, Rounding::Trunc)
}

/// Nearest integer, ties away from zero.
#[inline]
pub fn round<N: Number>(x: N) -> N {
    unary_by(x, provider::round, Rounding::HalfAwayFromZero)
}

/// Nearest integer, ties to even.
///
/// ```rust
/// use runk_math::rounding::round_to_even;
/// assert_eq!(round_to_even(2.5_f32), 2.0);
/// assert_eq!(round_to_even(-3.5_f64), -4.0);
/// ```
#[inline]
pub fn round_to_even<N: Number>(x: N) -> N {
    unary_by(x, provider::round_to_even, Rounding::HalfToEven)
}
