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

//! # Rounding Policies
//!
//! A `Rounding` maps a real value onto an integer-valued real before the
//! engine range-checks it against an integer target.

/// How a float is rounded before it is narrowed into an integer kind.
///
/// The default, [`Rounding::HalfAwayFromZero`], matches `f64::round`:
/// `2.5` becomes `3` and `-2.5` becomes `-3`.
///
/// # Examples
///
/// ```rust
/// # use runk_core::convert::Rounding;
/// assert_eq!(Rounding::default().apply(2.5), 3.0);
/// assert_eq!(Rounding::HalfToEven.apply(2.5), 2.0);
/// assert_eq!(Rounding::Floor.apply(-0.5), -1.0);
/// assert_eq!(Rounding::Custom(|x| x * 0.0).apply(9.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub enum Rounding {
    /// Round to nearest, ties away from zero.
    #[default]
    HalfAwayFromZero,
    /// Round to nearest, ties to the even neighbour.
    HalfToEven,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round toward zero.
    Trunc,
    /// A caller-supplied pure rounding function.
    Custom(fn(f64) -> f64),
}

impl Rounding {
    /// Applies the policy to `x`. NaN and infinities pass through.
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Rounding::HalfAwayFromZero => x.round(),
            Rounding::HalfToEven => x.round_ties_even(),
            Rounding::Floor => x.floor(),
            Rounding::Ceil => x.ceil(),
            Rounding::Trunc => x.trunc(),
            Rounding::Custom(f) => f(x),
        }
    }
}

impl std::fmt::Display for Rounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rounding::HalfAwayFromZero => "half-away-from-zero",
            Rounding::HalfToEven => "half-to-even",
            Rounding::Floor => "floor",
            Rounding::Ceil => "ceil",
            Rounding::Trunc => "trunc",
            Rounding::Custom(_) => "custom",
        };
        f.write_str(name)
    }
}
