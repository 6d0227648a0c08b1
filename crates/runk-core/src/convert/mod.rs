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

//! # Saturating Conversion
//!
//! Conversions between any two supported number types that never wrap,
//! never panic, and always produce a usable value.
//!
//! ## Submodules
//!
//! - `engine`: The kind-level algorithm `convert_value` over the canonical
//!   `Value` domain.
//! - `rounding`: The `Rounding` policies applied before float-to-integer
//!   narrowing.
//! - `converter`: A reusable `Converter` that carries a configured rounding
//!   policy.
//! - `dynamic`: `DynNumber` and `convert_any`, for numbers whose concrete
//!   type has been erased.
//! - `fallback`: The unchecked coercions used only when classification fails.
//!
//! ## Special values
//!
//! NaN converts to integer zero. Positive and negative infinity convert to
//! the target's maximum and minimum. Out-of-range values clamp to the
//! nearest bound. None of this is reported as an error; there is no error
//! channel.

pub mod converter;
pub mod dynamic;
pub mod engine;
pub mod fallback;
pub mod rounding;

pub use converter::Converter;
pub use dynamic::{DynNumber, classify, convert_any, convert_any_by};
pub use engine::convert_value;
pub use rounding::Rounding;

use crate::num::number::Number;

/// Converts `from` into `To`, saturating at `To`'s bounds and rounding
/// half away from zero when `To` is an integer.
///
/// # Examples
///
/// ```rust
/// use runk_core::convert;
///
/// assert_eq!(convert::<i8, _>(1e300_f64), 127);
/// assert_eq!(convert::<u8, _>(-3_i32), 0);
/// assert_eq!(convert::<i32, _>(2.5_f32), 3);
/// assert_eq!(convert::<u16, _>(f64::NAN), 0);
/// assert_eq!(convert::<f64, _>(7_u8), 7.0);
/// ```
#[inline]
pub fn convert<To, From>(from: From) -> To
where
    To: Number,
    From: Number,
{
    convert_by(from, Rounding::default())
}

/// Converts `from` into `To` using an explicit rounding policy for
/// float-to-integer narrowing.
///
/// # Examples
///
/// ```rust
/// use runk_core::{convert_by, Rounding};
///
/// assert_eq!(convert_by::<i32, _>(2.5_f64, Rounding::HalfToEven), 2);
/// assert_eq!(convert_by::<i32, _>(-2.5_f64, Rounding::Ceil), -2);
/// ```
#[inline]
pub fn convert_by<To, From>(from: From, rounding: Rounding) -> To
where
    To: Number,
    From: Number,
{
    To::from_value(convert_value(from.into_value(), To::KIND, rounding))
}

/// Method-call syntax for the saturating conversions.
///
/// # Examples
///
/// ```rust
/// use runk_core::{Convert, Rounding};
///
/// let small: i8 = 1000_i32.convert_to();
/// assert_eq!(small, 127);
///
/// let floored = 3.9_f64.convert_to_by::<u8>(Rounding::Floor);
/// assert_eq!(floored, 3);
/// ```
pub trait Convert: Number {
    /// Converts `self` into `To` with the default rounding policy.
    #[inline]
    fn convert_to<To: Number>(self) -> To {
        convert(self)
    }

    /// Converts `self` into `To` with the given rounding policy.
    #[inline]
    fn convert_to_by<To: Number>(self, rounding: Rounding) -> To {
        convert_by(self, rounding)
    }
}

impl<T: Number> Convert for T {}
