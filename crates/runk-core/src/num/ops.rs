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

//! # By-Value Sign Operations
//!
//! Negation traits that behave uniformly across every number kind, so
//! generic code can flip signs without caring whether the type is an
//! integer (two's-complement wraparound) or a float (sign-bit flip).

/// Wrapping negation by value (no references).
///
/// Mirrors the inherent `wrapping_neg` on primitive integers: negating the
/// most negative signed value yields that same value, and negating a
/// non-zero unsigned value wraps around the modulus. Floats negate exactly.
///
/// # Examples
///
/// ```rust
/// # use runk_core::num::ops::WrappingNegVal;
/// assert_eq!(5i8.wrapping_neg_val(), -5);
/// assert_eq!(i8::MIN.wrapping_neg_val(), i8::MIN);
/// assert_eq!(1u8.wrapping_neg_val(), 255);
/// assert_eq!((-0.5f64).wrapping_neg_val(), 0.5);
/// ```
pub trait WrappingNegVal: Sized {
    /// Performs wrapping negation by value.
    fn wrapping_neg_val(self) -> Self;
}

/// Saturating negation by value (no references).
///
/// Negating the most negative signed integer clamps to the maximum instead
/// of wrapping. Floats negate exactly; unsigned integers saturate at zero.
///
/// # Examples
///
/// ```rust
/// # use runk_core::num::ops::SaturatingNegVal;
/// assert_eq!(i8::MIN.saturating_neg_val(), i8::MAX);
/// assert_eq!(7u32.saturating_neg_val(), 0);
/// ```
pub trait SaturatingNegVal: Sized {
    /// Performs saturating negation by value.
    fn saturating_neg_val(self) -> Self;
}

macro_rules! impl_neg_signed {
    ($($t:ty),*) => {
        $(
            impl WrappingNegVal for $t {
                #[inline(always)]
                fn wrapping_neg_val(self) -> Self {
                    <$t>::wrapping_neg(self)
                }
            }

            impl SaturatingNegVal for $t {
                #[inline(always)]
                fn saturating_neg_val(self) -> Self {
                    <$t>::saturating_neg(self)
                }
            }
        )*
    };
}

macro_rules! impl_neg_unsigned {
    ($($t:ty),*) => {
        $(
            impl WrappingNegVal for $t {
                #[inline(always)]
                fn wrapping_neg_val(self) -> Self {
                    <$t>::wrapping_neg(self)
                }
            }

            impl SaturatingNegVal for $t {
                #[inline(always)]
                fn saturating_neg_val(self) -> Self {
                    0
                }
            }
        )*
    };
}

macro_rules! impl_neg_float {
    ($($t:ty),*) => {
        $(
            impl WrappingNegVal for $t {
                #[inline(always)]
                fn wrapping_neg_val(self) -> Self {
                    -self
                }
            }

            impl SaturatingNegVal for $t {
                #[inline(always)]
                fn saturating_neg_val(self) -> Self {
                    -self
                }
            }
        )*
    };
}

impl_neg_signed!(i8, i16, i32, i64, isize);
impl_neg_unsigned!(u8, u16, u32, u64, usize);
impl_neg_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapping_neg_val<T: WrappingNegVal>(a: T) -> T {
        a.wrapping_neg_val()
    }

    fn saturating_neg_val<T: SaturatingNegVal>(a: T) -> T {
        a.saturating_neg_val()
    }

    #[test]
    fn test_wrapping_neg_val() {
        assert_eq!(wrapping_neg_val(127i8), -127i8);
        assert_eq!(wrapping_neg_val(-128i8), -128i8);
        assert_eq!(wrapping_neg_val(i64::MIN), i64::MIN);
        assert_eq!(wrapping_neg_val(0u16), 0u16);
        assert_eq!(wrapping_neg_val(2u16), u16::MAX - 1);
        assert_eq!(wrapping_neg_val(1.5f32), -1.5f32);
    }

    #[test]
    fn test_saturating_neg_val() {
        assert_eq!(saturating_neg_val(-128i8), 127i8);
        assert_eq!(saturating_neg_val(5isize), -5isize);
        assert_eq!(saturating_neg_val(9u64), 0u64);
        assert_eq!(saturating_neg_val(-2.0f64), 2.0f64);
    }
}
