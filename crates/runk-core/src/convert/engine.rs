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

//! # Conversion Engine
//!
//! Kind-level saturating conversion. [`convert_value`] takes a value in the
//! canonical domain and a target [`Kind`] and returns a value that the
//! target type can hold exactly.
//!
//! ## Rules
//!
//! | Source → Target     | Behaviour                                                     |
//! |---------------------|---------------------------------------------------------------|
//! | integer → integer   | clamp in the target's native domain (`i64` or `u64`)          |
//! | integer → float     | widen to `f64`, then narrow natively for `f32`                |
//! | float → integer     | NaN → 0, ±∞ → max/min, round then clamp                       |
//! | float → float       | native narrowing, out-of-range `f64` becomes `±∞` in `f32`    |
//!
//! Same-kind conversions fall out of these rules as the identity.

use crate::convert::rounding::Rounding;
use crate::num::kind::{Kind, Value};
use crate::num::range::Limits;

/// Converts `value` into the range of `target`.
///
/// The result always holds a value `target` represents exactly: integer
/// targets never see NaN, infinities, fractions, or out-of-range values.
/// There is no failure mode.
///
/// # Examples
///
/// ```rust
/// # use runk_core::convert::{Rounding, convert_value};
/// # use runk_core::num::{Kind, Value};
/// let v = convert_value(Value::Float(1e300), Kind::I8, Rounding::default());
/// assert_eq!(v, Value::Signed(127));
///
/// let v = convert_value(Value::Signed(-1), Kind::U32, Rounding::default());
/// assert_eq!(v, Value::Unsigned(0));
///
/// let v = convert_value(Value::Float(f64::NAN), Kind::U8, Rounding::default());
/// assert_eq!(v, Value::Unsigned(0));
/// ```
pub fn convert_value(value: Value, target: Kind, rounding: Rounding) -> Value {
    match (value, target.bounds().limits()) {
        (Value::Signed(i), Limits::Signed { min, max }) => {
            Value::Signed(clamp_signed(i, min, max, target))
        }
        (Value::Signed(i), Limits::Unsigned { max }) => {
            if i < 0 {
                saturated(value, target);
                Value::Unsigned(0)
            } else {
                Value::Unsigned(clamp_unsigned(i as u64, max, target))
            }
        }
        (Value::Unsigned(u), Limits::Signed { max, .. }) => {
            // `max` is non-negative for every signed kind.
            if u > max as u64 {
                saturated(value, target);
                Value::Signed(max)
            } else {
                Value::Signed(u as i64)
            }
        }
        (Value::Unsigned(u), Limits::Unsigned { max }) => {
            Value::Unsigned(clamp_unsigned(u, max, target))
        }
        (Value::Float(f), Limits::Signed { min, max }) => {
            float_to_signed(f, min, max, rounding, target)
        }
        (Value::Float(f), Limits::Unsigned { max }) => float_to_unsigned(f, max, rounding, target),
        (v, Limits::Float { .. }) => Value::Float(narrow_float(v.as_f64(), target)),
    }
}

#[inline]
fn clamp_signed(i: i64, min: i64, max: i64, target: Kind) -> i64 {
    if i > max {
        saturated(Value::Signed(i), target);
        max
    } else if i < min {
        saturated(Value::Signed(i), target);
        min
    } else {
        i
    }
}

#[inline]
fn clamp_unsigned(u: u64, max: u64, target: Kind) -> u64 {
    if u > max {
        saturated(Value::Unsigned(u), target);
        max
    } else {
        u
    }
}

/// Float to signed integer. The NaN and infinity checks look at the
/// unrounded source; the range checks look at both source and rounded value.
fn float_to_signed(f: f64, min: i64, max: i64, rounding: Rounding, target: Kind) -> Value {
    if f.is_nan() {
        return Value::Signed(0);
    }
    let r = rounding.apply(f);
    let (lo, hi) = (min as f64, max as f64);
    if f == f64::INFINITY || f > hi || r > hi {
        saturated(Value::Float(f), target);
        return Value::Signed(max);
    }
    if f == f64::NEG_INFINITY || f < lo || r < lo {
        saturated(Value::Float(f), target);
        return Value::Signed(min);
    }
    // `hi` may round up to 2^63 for 64-bit targets; `as` saturates there.
    Value::Signed(r as i64)
}

fn float_to_unsigned(f: f64, max: u64, rounding: Rounding, target: Kind) -> Value {
    if f.is_nan() {
        return Value::Unsigned(0);
    }
    let r = rounding.apply(f);
    let hi = max as f64;
    if f == f64::INFINITY || f > hi || r > hi {
        saturated(Value::Float(f), target);
        return Value::Unsigned(max);
    }
    if f == f64::NEG_INFINITY || f < 0.0 || r < 0.0 {
        saturated(Value::Float(f), target);
        return Value::Unsigned(0);
    }
    Value::Unsigned(r as u64)
}

/// Native float narrowing. `f32` targets round to the nearest `f32` and
/// overflow to a signed infinity; NaN stays NaN.
#[inline]
fn narrow_float(f: f64, target: Kind) -> f64 {
    match target {
        Kind::F32 => f as f32 as f64,
        _ => f,
    }
}

#[inline(always)]
fn saturated(value: Value, target: Kind) {
    tracing::trace!(%value, %target, "value saturated to target bound");
}
