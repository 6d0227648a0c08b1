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

//! # Reduction Operators
//!
//! `max`, `min` and `abs` over any single [`Number`] type, plus the
//! variadic [`max!`](crate::max) and [`min!`](crate::min) macros.
//!
//! `max` and `min` seed their fold with the type's own minimum and maximum
//! from the range registry and replace only on strict improvement, so ties
//! keep the earliest value and NaN is never selected. An empty input yields
//! the seed itself. Because float seeds are the largest finite magnitude,
//! a float sequence made only of `-∞` yields `f64::MIN` from `max` (and one
//! of only `+∞` yields `f64::MAX` from `min`).

use crate::num::number::Number;
use crate::num::range::{max_of, min_of};

/// The largest value in `values`.
///
/// # Examples
///
/// ```rust
/// # use runk_core::reduce::max;
/// assert_eq!(max([3_i32, -7, 2]), 3);
/// assert_eq!(max([0.5_f64]), 0.5);
/// assert_eq!(max(Vec::<u8>::new()), 0);
/// ```
#[inline]
pub fn max<N, I>(values: I) -> N
where
    N: Number,
    I: IntoIterator<Item = N>,
{
    values
        .into_iter()
        .fold(min_of::<N>(), |best, v| if v > best { v } else { best })
}

/// The smallest value in `values`.
///
/// # Examples
///
/// ```rust
/// # use runk_core::reduce::min;
/// assert_eq!(min([3_i32, -7, 2]), -7);
/// assert_eq!(min(Vec::<i8>::new()), 127);
/// ```
#[inline]
pub fn min<N, I>(values: I) -> N
where
    N: Number,
    I: IntoIterator<Item = N>,
{
    values
        .into_iter()
        .fold(max_of::<N>(), |best, v| if v < best { v } else { best })
}

/// The absolute value of `value`.
///
/// Values strictly below zero are negated with two's-complement wraparound,
/// so the most negative signed integer maps to itself: `abs(i8::MIN)` is
/// `-128`. Use [`saturating_abs`] to clamp that case to the maximum instead.
///
/// # Examples
///
/// ```rust
/// # use runk_core::reduce::abs;
/// assert_eq!(abs(-5_i32), 5);
/// assert_eq!(abs(5_i32), 5);
/// assert_eq!(abs(i8::MIN), i8::MIN);
/// assert_eq!(abs(-0.5_f64), 0.5);
/// ```
#[inline]
pub fn abs<N: Number>(value: N) -> N {
    if value < N::ZERO {
        value.wrapping_neg_val()
    } else {
        value
    }
}

/// The absolute value of `value`, clamping `|MIN|` to `MAX` for signed
/// integers.
///
/// # Examples
///
/// ```rust
/// # use runk_core::reduce::saturating_abs;
/// assert_eq!(saturating_abs(i8::MIN), i8::MAX);
/// assert_eq!(saturating_abs(-3_i64), 3);
/// ```
#[inline]
pub fn saturating_abs<N: Number>(value: N) -> N {
    if value < N::ZERO {
        value.saturating_neg_val()
    } else {
        value
    }
}

/// Variadic maximum over values of one number type.
///
/// ```rust
/// assert_eq!(runk_core::max!(4_u16, 9, 1), 9);
/// ```
#[macro_export]
macro_rules! max {
    ($($value:expr),+ $(,)?) => {
        $crate::reduce::max([$($value),+])
    };
}

/// Variadic minimum over values of one number type.
///
/// ```rust
/// assert_eq!(runk_core::min!(4.0_f32, -9.5, 1.0), -9.5);
/// ```
#[macro_export]
macro_rules! min {
    ($($value:expr),+ $(,)?) => {
        $crate::reduce::min([$($value),+])
    };
}
