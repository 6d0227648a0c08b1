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

//! # Runk Core
//!
//! Generic numeric foundations for the runk ecosystem: a closed
//! classification of every primitive number type, a read-only registry of
//! their ranges, and a conversion engine that moves values between them
//! without wrapping, panicking, or failing.
//!
//! ## Modules
//!
//! - `num`: The `Kind` enumeration, the canonical `Value` domain, the
//!   `Number` trait (with `number_newtype!` for wrapper types), the range
//!   registry, and by-value constant and negation traits.
//! - `convert`: Saturating conversions (`convert`, `convert_by`, the
//!   `Convert` extension trait, `Converter`) with configurable `Rounding`,
//!   plus `DynNumber` and `convert_any` for type-erased numbers and the isolated
//!   unchecked `fallback` coercions.
//! - `reduce`: `max`, `min`, `abs` and `saturating_abs` over any `Number`,
//!   with variadic `max!` / `min!` macros.
//!
//! ## Conversion policy
//!
//! Integer targets clamp out-of-range values to their bounds, map NaN to
//! zero and infinities to the matching bound, and round floats half away
//! from zero unless another `Rounding` is supplied. Float targets widen
//! exactly or narrow natively.
//!
//! ```rust
//! use runk_core::{convert, max, Convert};
//!
//! let level: u8 = convert(-12.7_f64);
//! assert_eq!(level, 0);
//! assert_eq!(1e10_f64.convert_to::<i32>(), i32::MAX);
//! assert_eq!(max([1_u8, 7, 3]), 7);
//! ```

pub mod convert;
pub mod num;
pub mod reduce;

pub use convert::{
    Convert, Converter, DynNumber, Rounding, classify, convert, convert_any, convert_any_by,
    convert_by, convert_value,
};
pub use num::{Kind, Number, ParseKindError, RangeBound, Value, max_of, min_of};
pub use reduce::{abs, max, min, saturating_abs};

/// Items intended for glob-import: `use runk_core::prelude::*;`
pub mod prelude {
    pub use crate::convert::{Convert, Converter, Rounding, convert, convert_by};
    pub use crate::num::{Kind, Number, Value, max_of, min_of};
    pub use crate::reduce::{abs, saturating_abs};
}
