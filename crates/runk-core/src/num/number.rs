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

//! # The `Number` Trait
//!
//! `Number` ties a concrete Rust type to its [`Kind`] at compile time and
//! moves values in and out of the canonical [`Value`] domain. It is
//! implemented for every primitive in the supported set and, through
//! [`number_newtype!`](crate::number_newtype), for single-field wrappers
//! around those primitives.

use crate::num::constants::{PlusOne, Zero};
use crate::num::kind::{Kind, Value};
use crate::num::ops::{SaturatingNegVal, WrappingNegVal};

/// A number type the conversion engine can classify.
///
/// The associated [`KIND`](Number::KIND) constant replaces any runtime type
/// inspection: generic code dispatches on it and the compiler folds the
/// branch away.
pub trait Number:
    Copy
    + PartialOrd
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
    + Zero
    + PlusOne
    + WrappingNegVal
    + SaturatingNegVal
{
    /// The kind this type is classified as.
    const KIND: Kind;

    /// Widens `self` losslessly into the canonical domain.
    fn into_value(self) -> Value;

    /// Narrows a canonical value into `Self`.
    ///
    /// The value is expected to lie inside the range of [`Self::KIND`];
    /// the conversion engine guarantees that. Out-of-range input follows
    /// primitive `as` semantics and is never checked here.
    fn from_value(value: Value) -> Self;
}

macro_rules! impl_number_signed {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Number for $t {
                const KIND: Kind = Kind::$kind;

                #[inline(always)]
                fn into_value(self) -> Value {
                    Value::Signed(self as i64)
                }

                #[inline(always)]
                fn from_value(value: Value) -> Self {
                    match value {
                        Value::Signed(i) => i as $t,
                        Value::Unsigned(u) => u as $t,
                        Value::Float(f) => f as $t,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_number_unsigned {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Number for $t {
                const KIND: Kind = Kind::$kind;

                #[inline(always)]
                fn into_value(self) -> Value {
                    Value::Unsigned(self as u64)
                }

                #[inline(always)]
                fn from_value(value: Value) -> Self {
                    match value {
                        Value::Signed(i) => i as $t,
                        Value::Unsigned(u) => u as $t,
                        Value::Float(f) => f as $t,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_number_float {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl Number for $t {
                const KIND: Kind = Kind::$kind;

                #[inline(always)]
                fn into_value(self) -> Value {
                    Value::Float(self as f64)
                }

                #[inline(always)]
                fn from_value(value: Value) -> Self {
                    match value {
                        Value::Signed(i) => i as $t,
                        Value::Unsigned(u) => u as $t,
                        Value::Float(f) => f as $t,
                    }
                }
            }
        )*
    };
}

impl_number_signed!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);
impl_number_unsigned!(u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize);
impl_number_float!(f32 => F32, f64 => F64);

/// Implements [`Number`] for a tuple struct wrapping a single primitive.
///
/// The wrapper is classified as the kind of the wrapped primitive, so it
/// converts, saturates, and reduces exactly like that primitive. The struct
/// must derive (or implement) `Clone`, `Copy`, `Debug` and `PartialOrd`.
///
/// # Examples
///
/// ```rust
/// use runk_core::{convert, number_newtype, Kind, Number};
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Celsius(i8);
/// number_newtype!(Celsius(i8));
///
/// assert_eq!(Celsius::KIND, Kind::I8);
/// let hot: Celsius = convert(1000.0_f64);
/// assert_eq!(hot, Celsius(127));
/// ```
#[macro_export]
macro_rules! number_newtype {
    ($name:ident($inner:ty)) => {
        impl $crate::num::constants::Zero for $name {
            const ZERO: Self = $name(<$inner as $crate::num::constants::Zero>::ZERO);
        }

        impl $crate::num::constants::PlusOne for $name {
            const PLUS_ONE: Self = $name(<$inner as $crate::num::constants::PlusOne>::PLUS_ONE);
        }

        impl $crate::num::ops::WrappingNegVal for $name {
            #[inline(always)]
            fn wrapping_neg_val(self) -> Self {
                $name($crate::num::ops::WrappingNegVal::wrapping_neg_val(self.0))
            }
        }

        impl $crate::num::ops::SaturatingNegVal for $name {
            #[inline(always)]
            fn saturating_neg_val(self) -> Self {
                $name($crate::num::ops::SaturatingNegVal::saturating_neg_val(self.0))
            }
        }

        impl $crate::num::number::Number for $name {
            const KIND: $crate::num::kind::Kind =
                <$inner as $crate::num::number::Number>::KIND;

            #[inline(always)]
            fn into_value(self) -> $crate::num::kind::Value {
                <$inner as $crate::num::number::Number>::into_value(self.0)
            }

            #[inline(always)]
            fn from_value(value: $crate::num::kind::Value) -> Self {
                $name(<$inner as $crate::num::number::Number>::from_value(value))
            }
        }
    };
}
