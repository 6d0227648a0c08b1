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

//! # Unchecked Fallback Coercions
//!
//! Last-resort conversions that perform no range checks and apply no
//! special-value policy. The saturating engine never calls into this module
//! for a classified kind; [`convert_any`](crate::convert::convert_any)
//! reaches it only for values it could not classify.

use crate::convert::dynamic::DynNumber;
use crate::num::number::Number;
use num_traits::AsPrimitive;

/// Primitive `as` cast between two number types.
///
/// Same-width integer casts reinterpret the bit pattern, narrowing integer
/// casts truncate, float-to-integer casts truncate toward zero and clamp,
/// and NaN becomes zero. Prefer [`convert`](crate::convert::convert) unless
/// the raw cast is what you want.
///
/// # Examples
///
/// ```rust
/// # use runk_core::convert::fallback::coerce;
/// assert_eq!(coerce::<u8, i8>(-1), 255);
/// assert_eq!(coerce::<i8, i32>(300), 44);
/// assert_eq!(coerce::<i32, f64>(2.9), 2);
/// ```
#[inline(always)]
pub fn coerce<To, From>(from: From) -> To
where
    From: AsPrimitive<To>,
    To: Copy + 'static,
{
    from.as_()
}

/// The landing point for a type-erased value with no canonical value.
///
/// Without a known layout there is nothing to reinterpret, so the result is
/// the target's zero. Logged at `warn`.
#[cold]
pub(crate) fn coerce_unclassified<To: Number>(value: &dyn DynNumber) -> To {
    tracing::warn!(
        source = value.type_name(),
        target = %To::KIND,
        "unclassified numeric value, falling back to unchecked coercion"
    );
    To::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_reinterprets_same_width_integers() {
        assert_eq!(coerce::<u8, i8>(i8::MIN), 128);
        assert_eq!(coerce::<i64, u64>(u64::MAX), -1);
        assert_eq!(coerce::<usize, isize>(-1), usize::MAX);
    }

    #[test]
    fn test_coerce_truncates_without_saturating_integers() {
        assert_eq!(coerce::<u8, u32>(0x1_01), 1);
        assert_eq!(coerce::<i16, i64>(70_000), 4_464);
    }

    #[test]
    fn test_coerce_float_to_int_truncates() {
        assert_eq!(coerce::<i32, f64>(-2.9), -2);
        assert_eq!(coerce::<u8, f32>(f32::NAN), 0);
    }

    #[test]
    fn test_coerce_unclassified_yields_zero() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let opaque: Box<dyn std::any::Any> = Box::new("not a number");
        assert_eq!(coerce_unclassified::<u64>(&opaque), 0);
        assert_eq!(coerce_unclassified::<f32>(&opaque), 0.0);
    }
}
