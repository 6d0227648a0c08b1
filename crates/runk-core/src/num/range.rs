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

//! # Range Registry
//!
//! The minimum, maximum and smallest positive value of every [`Kind`],
//! held in one read-only table. Integer bounds are kept exact in their
//! native 64-bit domain for clamping; every bound is also exposed in the
//! `f64` domain for cross-kind comparison. Float kinds report their
//! largest finite magnitude, never infinity.

use crate::num::kind::{Kind, Value};
use crate::num::number::Number;

/// The exact limits of a kind in its native comparison domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limits {
    /// A signed integer kind spanning `[min, max]`.
    Signed { min: i64, max: i64 },
    /// An unsigned integer kind spanning `[0, max]`.
    Unsigned { max: u64 },
    /// A float kind spanning `[-max, max]` in finite values.
    Float { max: f64 },
}

/// The representable range of one [`Kind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBound {
    kind: Kind,
    limits: Limits,
    smallest_positive: Value,
}

impl RangeBound {
    const fn signed(kind: Kind, min: i64, max: i64) -> Self {
        Self {
            kind,
            limits: Limits::Signed { min, max },
            smallest_positive: Value::Signed(1),
        }
    }

    const fn unsigned(kind: Kind, max: u64) -> Self {
        Self {
            kind,
            limits: Limits::Unsigned { max },
            smallest_positive: Value::Unsigned(1),
        }
    }

    const fn float(kind: Kind, max: f64, smallest_positive: f64) -> Self {
        Self {
            kind,
            limits: Limits::Float { max },
            smallest_positive: Value::Float(smallest_positive),
        }
    }

    /// The kind this bound describes.
    #[inline(always)]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// The exact limits in the native domain.
    #[inline(always)]
    pub const fn limits(&self) -> Limits {
        self.limits
    }

    /// The smallest representable value.
    #[inline]
    pub const fn min(&self) -> Value {
        match self.limits {
            Limits::Signed { min, .. } => Value::Signed(min),
            Limits::Unsigned { .. } => Value::Unsigned(0),
            Limits::Float { max } => Value::Float(-max),
        }
    }

    /// The largest representable value.
    #[inline]
    pub const fn max(&self) -> Value {
        match self.limits {
            Limits::Signed { max, .. } => Value::Signed(max),
            Limits::Unsigned { max } => Value::Unsigned(max),
            Limits::Float { max } => Value::Float(max),
        }
    }

    /// The minimum in the `f64` comparison domain.
    #[inline]
    pub const fn min_f64(&self) -> f64 {
        self.min().as_f64()
    }

    /// The maximum in the `f64` comparison domain.
    ///
    /// For `i64`/`u64` (and 64-bit `isize`/`usize`) this rounds up to the
    /// next power of two, which is what float comparisons see.
    #[inline]
    pub const fn max_f64(&self) -> f64 {
        self.max().as_f64()
    }

    /// The smallest strictly positive value: `1` for integers, the
    /// smallest subnormal for floats.
    #[inline(always)]
    pub const fn smallest_positive(&self) -> Value {
        self.smallest_positive
    }

    /// Returns `true` if `value` lies inside `[min, max]`, comparing in the
    /// native domain when both sides are integers. NaN is never contained.
    pub fn contains(&self, value: Value) -> bool {
        match (self.limits, value) {
            (Limits::Signed { min, max }, Value::Signed(i)) => min <= i && i <= max,
            (Limits::Signed { max, .. }, Value::Unsigned(u)) => u <= max as u64,
            (Limits::Unsigned { .. }, Value::Signed(i)) => i >= 0,
            (Limits::Unsigned { max }, Value::Unsigned(u)) => u <= max,
            (_, v) => {
                let f = v.as_f64();
                self.min_f64() <= f && f <= self.max_f64()
            }
        }
    }
}

/// The process-wide bound table, indexed by `Kind as usize`.
pub static RANGE_TABLE: [RangeBound; Kind::COUNT] = [
    RangeBound::signed(Kind::I8, i8::MIN as i64, i8::MAX as i64),
    RangeBound::signed(Kind::I16, i16::MIN as i64, i16::MAX as i64),
    RangeBound::signed(Kind::I32, i32::MIN as i64, i32::MAX as i64),
    RangeBound::signed(Kind::I64, i64::MIN, i64::MAX),
    RangeBound::signed(Kind::Isize, isize::MIN as i64, isize::MAX as i64),
    RangeBound::unsigned(Kind::U8, u8::MAX as u64),
    RangeBound::unsigned(Kind::U16, u16::MAX as u64),
    RangeBound::unsigned(Kind::U32, u32::MAX as u64),
    RangeBound::unsigned(Kind::U64, u64::MAX),
    RangeBound::unsigned(Kind::Usize, usize::MAX as u64),
    RangeBound::float(Kind::F32, f32::MAX as f64, f32::from_bits(1) as f64),
    RangeBound::float(Kind::F64, f64::MAX, f64::from_bits(1)),
];

impl Kind {
    /// The range bound of this kind.
    #[inline(always)]
    pub fn bounds(self) -> &'static RangeBound {
        &RANGE_TABLE[self.index()]
    }

    /// The smallest representable value of this kind.
    #[inline]
    pub fn min_value(self) -> Value {
        self.bounds().min()
    }

    /// The largest representable value of this kind.
    #[inline]
    pub fn max_value(self) -> Value {
        self.bounds().max()
    }
}

/// The smallest representable value of `T`.
///
/// # Examples
///
/// ```rust
/// # use runk_core::num::range::min_of;
/// assert_eq!(min_of::<i8>(), -128);
/// assert_eq!(min_of::<u32>(), 0);
/// assert_eq!(min_of::<f32>(), f32::MIN);
/// ```
#[inline]
pub fn min_of<T: Number>() -> T {
    T::from_value(T::KIND.min_value())
}

/// The largest representable value of `T`.
///
/// # Examples
///
/// ```rust
/// # use runk_core::num::range::max_of;
/// assert_eq!(max_of::<i8>(), 127);
/// assert_eq!(max_of::<u16>(), 65535);
/// assert_eq!(max_of::<f64>(), f64::MAX);
/// ```
#[inline]
pub fn max_of<T: Number>() -> T {
    T::from_value(T::KIND.max_value())
}

/// The smallest strictly positive value of `T`.
#[inline]
pub fn smallest_positive_of<T: Number>() -> T {
    T::from_value(T::KIND.bounds().smallest_positive())
}
