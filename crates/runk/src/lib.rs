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

//! # Runk
//!
//! Write numeric code once and run it on every primitive number type.
//!
//! One `use runk::prelude::*;` gives you the saturating conversion engine,
//! the number kind registry, the reductions, and the full set of generic
//! math functions.
//!
//! ## Crates
//!
//! | Re-export | Provides |
//! |-----------|----------|
//! | [`core`] | `Kind`, `Number`, `Value`, ranges, `convert`, `max` / `min` / `abs` |
//! | [`math`] | Trigonometric, exponential, special, rounding and float functions |
//!
//! ```rust
//! use runk::prelude::*;
//!
//! fn rms<N: Number>(values: &[N]) -> N {
//!     let sum: f64 = values.iter().map(|&v| pow(convert::<f64, _>(v), 2)).sum();
//!     sqrt(convert(sum / values.len() as f64))
//! }
//!
//! assert_eq!(rms(&[3_u8, 4, 5, 6]), 5);
//! assert!((rms(&[3.0_f32, 4.0]) - 3.535_534).abs() < 1e-6);
//! assert_eq!(max([rms(&[1_i32, 7]), 4]), 5);
//! ```

pub use runk_core as core;
pub use runk_math as math;

pub use runk_core::{max, min};

/// Glob-import convenience: `use runk::prelude::*;`
pub mod prelude {
    pub use runk_core::prelude::*;
    pub use runk_core::{max, min};
    pub use runk_math::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_reductions() {
        assert_eq!(max([3_i32, -7, 2]), 3);
        assert_eq!(min([3.5_f64, -0.5]), -0.5);
        assert_eq!(max!(1_u8, 9, 4), 9);
        assert_eq!(min!(-2_i64, 5), -2);
        assert_eq!(abs(-4_i16), 4);
    }
}
