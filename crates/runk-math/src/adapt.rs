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

//! Shared widening and narrowing for the function adapters.
//!
//! Every adapter follows the same shape: widen each argument to `f64`
//! through the saturating engine, call one provider function, and convert
//! the `f64` result back to the caller's kind.

use runk_core::{Number, Rounding, convert, convert_by};

#[inline(always)]
pub(crate) fn widen<N: Number>(x: N) -> f64 {
    convert(x)
}

#[inline(always)]
pub(crate) fn unary<N: Number>(x: N, f: fn(f64) -> f64) -> N {
    convert(f(widen(x)))
}

#[inline(always)]
pub(crate) fn unary_by<N: Number>(x: N, f: fn(f64) -> f64, rounding: Rounding) -> N {
    convert_by(f(widen(x)), rounding)
}

#[inline(always)]
pub(crate) fn binary<N: Number, M: Number>(x: N, y: M, f: fn(f64, f64) -> f64) -> N {
    convert(f(widen(x), widen(y)))
}
