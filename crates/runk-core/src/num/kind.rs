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

//! # Numeric Kinds
//!
//! `Kind` is the closed classification of every primitive number type runk
//! understands, and `Value` is the canonical 64-bit domain in which values of
//! different kinds are compared. Every supported number widens losslessly
//! into a `Value`: signed integers into `i64`, unsigned integers into `u64`,
//! and both float widths into `f64`.

use std::fmt::{Debug, Display};
use std::str::FromStr;

/// The classification of a numeric type by signedness, width, and
/// integer-vs-floating nature.
///
/// `usize` is both the native-width and the pointer-sized unsigned integer,
/// so both roles share [`Kind::Usize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl Kind {
    /// The number of distinct kinds.
    pub const COUNT: usize = 12;

    /// Every kind, in declaration order.
    pub const ALL: [Kind; Kind::COUNT] = [
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::Isize,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::Usize,
        Kind::F32,
        Kind::F64,
    ];

    /// Returns `true` for the floating-point kinds.
    #[inline(always)]
    pub const fn is_float(self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    /// Returns `true` for the integer kinds, signed or not.
    #[inline(always)]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Returns `true` if the kind can hold negative values.
    /// Floats count as signed.
    #[inline(always)]
    pub const fn is_signed(self) -> bool {
        !self.is_unsigned()
    }

    /// Returns `true` for the unsigned integer kinds.
    #[inline(always)]
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 | Kind::Usize
        )
    }

    /// The storage width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Kind::I8 | Kind::U8 => 8,
            Kind::I16 | Kind::U16 => 16,
            Kind::I32 | Kind::U32 | Kind::F32 => 32,
            Kind::I64 | Kind::U64 | Kind::F64 => 64,
            Kind::Isize | Kind::Usize => usize::BITS,
        }
    }

    /// The Rust type name of the kind, e.g. `"i8"`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
        }
    }

    /// Position of the kind inside [`Kind::ALL`] and the range table.
    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when a string does not name a [`Kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    /// The name that failed to parse.
    pub name: String,
}

impl Display for ParseKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' does not name a numeric kind", self.name)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for Kind {
    type Err = ParseKindError;

    /// Parses the Rust type name of a kind. The aliases `int`, `uint`,
    /// `uintptr`, `byte`, `float32` and `float64` are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "i8" => Kind::I8,
            "i16" => Kind::I16,
            "i32" => Kind::I32,
            "i64" => Kind::I64,
            "isize" | "int" => Kind::Isize,
            "u8" | "byte" => Kind::U8,
            "u16" => Kind::U16,
            "u32" => Kind::U32,
            "u64" => Kind::U64,
            "usize" | "uint" | "uintptr" => Kind::Usize,
            "f32" | "float32" => Kind::F32,
            "f64" | "float64" => Kind::F64,
            _ => {
                return Err(ParseKindError {
                    name: s.to_string(),
                });
            }
        };
        Ok(kind)
    }
}

/// A number widened into the canonical comparison domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Any signed integer, widened to `i64`.
    Signed(i64),
    /// Any unsigned integer, widened to `u64`.
    Unsigned(u64),
    /// Any float, widened to `f64`.
    Float(f64),
}

impl Value {
    /// The value in the `f64` domain. Integers beyond 53 significant bits
    /// round to the nearest representable float.
    #[inline]
    pub const fn as_f64(self) -> f64 {
        match self {
            Value::Signed(i) => i as f64,
            Value::Unsigned(u) => u as f64,
            Value::Float(f) => f,
        }
    }

    /// Returns `true` if the value is a float NaN.
    #[inline]
    pub const fn is_nan(self) -> bool {
        matches!(self, Value::Float(f) if f.is_nan())
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    pub const fn is_integer(self) -> bool {
        !matches!(self, Value::Float(_))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Signed(i) => write!(f, "{i}"),
            Value::Unsigned(u) => write!(f, "{u}"),
            Value::Float(x) => write!(f, "{x}"),
        }
    }
}
