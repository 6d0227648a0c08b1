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

use crate::convert::convert_by;
use crate::convert::dynamic::{DynNumber, convert_any_by};
use crate::convert::engine::convert_value;
use crate::convert::rounding::Rounding;
use crate::num::kind::{Kind, Value};
use crate::num::number::Number;

/// A saturating converter configured with a rounding policy.
///
/// The free functions [`convert`](crate::convert::convert) and
/// [`convert_by`](crate::convert::convert_by) cover one-off calls; a
/// `Converter` is convenient when the same policy is threaded through a
/// larger computation.
///
/// # Examples
///
/// ```rust
/// use runk_core::{Converter, Rounding};
///
/// let floor = Converter::new().with_rounding(Rounding::Floor);
/// assert_eq!(floor.convert::<i32, _>(-0.5_f64), -1);
/// assert_eq!(floor.convert::<u8, _>(255.9_f64), 255);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    rounding: Rounding,
}

impl Converter {
    /// Creates a converter using [`Rounding::HalfAwayFromZero`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            rounding: Rounding::HalfAwayFromZero,
        }
    }

    /// Returns a copy of this converter using `rounding`.
    #[inline]
    pub const fn with_rounding(self, rounding: Rounding) -> Self {
        Self { rounding }
    }

    /// The configured rounding policy.
    #[inline(always)]
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Converts `from` into `To`.
    #[inline]
    pub fn convert<To, From>(&self, from: From) -> To
    where
        To: Number,
        From: Number,
    {
        convert_by(from, self.rounding)
    }

    /// Converts a canonical value into the range of `target`.
    #[inline]
    pub fn convert_value(&self, value: Value, target: Kind) -> Value {
        convert_value(value, target, self.rounding)
    }

    /// Converts a type-erased number into `To`.
    #[inline]
    pub fn convert_any<To: Number>(&self, value: &dyn DynNumber) -> To {
        convert_any_by(value, self.rounding)
    }
}

impl std::fmt::Display for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Converter(rounding: {})", self.rounding)
    }
}
