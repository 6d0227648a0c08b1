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

//! # Dynamic Conversion
//!
//! Conversion for values whose concrete type is erased, e.g. items of a
//! heterogeneous collection. Every [`Number`] (wrapper types made with
//! [`number_newtype!`](crate::number_newtype) included) is a [`DynNumber`],
//! as are `bool`, `Wrapping<P>`, `Saturating<P>` and [`Value`]. A
//! `Box<dyn Any>` is classified at runtime by downcasting against the
//! supported primitives. Only a value that yields no canonical value
//! reaches the unchecked fallback.

use crate::convert::engine::convert_value;
use crate::convert::fallback;
use crate::convert::rounding::Rounding;
use crate::num::kind::Value;
use crate::num::number::Number;
use std::any::Any;
use std::num::{Saturating, Wrapping};

/// A number whose concrete type has been erased.
///
/// Implemented for every [`Number`]. Other types may implement it with the
/// default method; [`convert_any`] then treats them as unclassified.
///
/// # Examples
///
/// ```rust
/// use runk_core::convert::DynNumber;
/// use runk_core::{number_newtype, Value};
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Celsius(i8);
/// number_newtype!(Celsius(i8));
///
/// let erased: &dyn DynNumber = &Celsius(-4);
/// assert_eq!(erased.to_value(), Some(Value::Signed(-4)));
/// ```
pub trait DynNumber: Any {
    /// The value in the canonical domain, or `None` if there is none.
    fn to_value(&self) -> Option<Value> {
        None
    }

    /// The name of the erased type, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: Number> DynNumber for T {
    #[inline]
    fn to_value(&self) -> Option<Value> {
        Some(self.into_value())
    }
}

impl DynNumber for bool {
    #[inline]
    fn to_value(&self) -> Option<Value> {
        Some(Value::Unsigned(u64::from(*self)))
    }
}

impl DynNumber for Value {
    #[inline]
    fn to_value(&self) -> Option<Value> {
        Some(*self)
    }
}

impl<P: Number> DynNumber for Wrapping<P> {
    #[inline]
    fn to_value(&self) -> Option<Value> {
        Some(self.0.into_value())
    }
}

impl<P: Number> DynNumber for Saturating<P> {
    #[inline]
    fn to_value(&self) -> Option<Value> {
        Some(self.0.into_value())
    }
}

impl DynNumber for Box<dyn Any> {
    fn to_value(&self) -> Option<Value> {
        classify(self.as_ref())
    }

    fn type_name(&self) -> &'static str {
        "Box<dyn Any>"
    }
}

macro_rules! classify_as {
    ($value:expr; $($t:ty),* $(,)?) => {
        $(
            if let Some(v) = $value.downcast_ref::<$t>() {
                return Some(v.into_value());
            }
            if let Some(v) = $value.downcast_ref::<Wrapping<$t>>() {
                return Some(v.0.into_value());
            }
            if let Some(v) = $value.downcast_ref::<Saturating<$t>>() {
                return Some(v.0.into_value());
            }
        )*
    };
}

/// Classifies a value known only as `&dyn Any` into the canonical domain.
///
/// Recognizes every primitive kind, `Wrapping<P>` and `Saturating<P>`
/// around them, `bool`, and an already-widened [`Value`]. Returns `None`
/// for anything else. Downcasting needs the concrete type, so wrapper types
/// are only recognized through [`DynNumber`].
pub fn classify(value: &dyn Any) -> Option<Value> {
    classify_as!(value; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
    if let Some(b) = value.downcast_ref::<bool>() {
        return b.to_value();
    }
    value.downcast_ref::<Value>().copied()
}

/// Converts a type-erased number into `To` with the default rounding.
///
/// `true` converts to one and `false` to zero. Values without a canonical
/// value are handed to the unchecked fallback, which logs a warning.
///
/// # Examples
///
/// ```rust
/// use runk_core::convert::{DynNumber, convert_any};
/// use std::num::Wrapping;
///
/// let items: Vec<Box<dyn DynNumber>> =
///     vec![Box::new(300_i32), Box::new(2.5_f64), Box::new(Wrapping(7_u8)), Box::new(true)];
/// let bytes: Vec<u8> = items.iter().map(|v| convert_any(v.as_ref())).collect();
/// assert_eq!(bytes, vec![255, 3, 7, 1]);
/// ```
#[inline]
pub fn convert_any<To: Number>(value: &dyn DynNumber) -> To {
    convert_any_by(value, Rounding::default())
}

/// Converts a type-erased number into `To` with an explicit rounding
/// policy.
pub fn convert_any_by<To: Number>(value: &dyn DynNumber, rounding: Rounding) -> To {
    match value.to_value() {
        Some(v) => To::from_value(convert_value(v, To::KIND, rounding)),
        None => fallback::coerce_unclassified(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;

    #[derive(Debug)]
    struct NotANumber;
    impl DynNumber for NotANumber {}

    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
    struct Celsius(i8);
    crate::number_newtype!(Celsius(i8));

    #[test]
    fn test_classify_primitives() {
        assert_eq!(classify(&-3_i8), Some(Value::Signed(-3)));
        assert_eq!(classify(&9_usize), Some(Value::Unsigned(9)));
        assert_eq!(classify(&1.5_f32), Some(Value::Float(1.5)));
        assert_eq!(classify(&true), Some(Value::Unsigned(1)));
        assert_eq!(classify(&Value::Signed(4)), Some(Value::Signed(4)));
    }

    #[test]
    fn test_classify_std_wrappers() {
        assert_eq!(classify(&Wrapping(-1_i64)), Some(Value::Signed(-1)));
        assert_eq!(classify(&Saturating(200_u8)), Some(Value::Unsigned(200)));
    }

    #[test]
    fn test_classify_rejects_non_numbers() {
        assert_eq!(classify(&"12"), None);
        assert_eq!(classify(&NotANumber), None);
    }

    #[test]
    fn test_convert_any_saturates_like_convert() {
        assert_eq!(convert_any::<i8>(&1e300_f64), 127);
        assert_eq!(convert_any::<u16>(&-4_i32), 0);
        assert_eq!(convert_any::<i32>(&f64::NAN), 0);
        assert_eq!(convert_any::<f32>(&u8::MAX), 255.0);
    }

    #[test]
    fn test_convert_any_matches_convert_for_newtypes() {
        let typed: i8 = convert(Celsius(5));
        let erased: i8 = convert_any(&Celsius(5));
        assert_eq!(erased, typed);
        assert_eq!(convert_any::<u8>(&Celsius(-40)), 0);
        assert_eq!(convert_any::<Celsius>(&1e6_f64), Celsius(127));
    }

    #[test]
    fn test_convert_any_bool_and_wrappers() {
        assert_eq!(convert_any::<i32>(&true), 1);
        assert_eq!(convert_any::<f64>(&false), 0.0);
        assert_eq!(convert_any::<i8>(&Wrapping(1000_i32)), 127);
        assert_eq!(convert_any::<u64>(&Saturating(-1_i16)), 0);
        assert_eq!(convert_any::<i16>(&Value::Float(-2.5)), -3);
    }

    #[test]
    fn test_convert_any_boxed_any_is_classified_at_runtime() {
        let boxed: Box<dyn Any> = Box::new(70_000_u32);
        assert_eq!(convert_any::<u16>(&boxed), u16::MAX);
        let opaque: Box<dyn Any> = Box::new("3.5");
        assert_eq!(convert_any::<f64>(&opaque), 0.0);
    }

    #[test]
    fn test_convert_any_by_rounding() {
        assert_eq!(convert_any_by::<i32>(&2.5_f64, Rounding::HalfToEven), 2);
        assert_eq!(convert_any_by::<i32>(&2.5_f64, Rounding::HalfAwayFromZero), 3);
    }

    #[test]
    fn test_unclassified_value_takes_fallback() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        assert_eq!(convert_any::<i32>(&NotANumber), 0);
        assert_eq!(NotANumber.type_name(), std::any::type_name::<NotANumber>());
    }
}
