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

//! # Numeric Foundations
//!
//! The type-level vocabulary of runk: which number representations exist,
//! how they are classified, and what range each one covers.
//!
//! ## Submodules
//!
//! - `kind`: The closed `Kind` enumeration and the canonical `Value` domain
//!   (`i64` / `u64` / `f64`) used for cross-kind comparison.
//! - `number`: The `Number` trait mapping each concrete type to its `Kind`
//!   at compile time, plus the `number_newtype!` macro for wrappers.
//! - `range`: The read-only range registry (`RANGE_TABLE`) with typed
//!   helpers `min_of`, `max_of`, `smallest_positive_of`.
//! - `constants`: Associated-constant traits (`Zero`, `PlusOne`) for every
//!   supported primitive, floats included.
//! - `ops`: By-value negation traits (`WrappingNegVal`, `SaturatingNegVal`)
//!   that behave uniformly over integers and floats.
//!
//! ## Motivation
//!
//! Generic numeric code needs to ask "what kind of number is this and how
//! far does it reach" without per-type branches. Answering it through
//! associated constants keeps every such question a compile-time fact.

pub mod constants;
pub mod kind;
pub mod number;
pub mod ops;
pub mod range;

pub use kind::{Kind, ParseKindError, Value};
pub use number::Number;
pub use range::{RangeBound, max_of, min_of, smallest_positive_of};
