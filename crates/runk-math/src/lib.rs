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

//! # Runk Math
//!
//! Elementary and special functions written once and callable with every
//! runk number kind. Each function widens its arguments to `f64` through
//! the saturating engine of `runk_core`, evaluates a single
//! [`provider`] function, and converts the result back. Integer callers
//! therefore receive rounded, clamped results and never observe NaN.
//!
//! ## Modules
//!
//! - `trig`: Circular and hyperbolic functions and their inverses.
//! - `exp`: Exponentials, logarithms, powers and roots.
//! - `special`: Gamma, error and Bessel functions.
//! - `rounding`: `ceil`, `floor`, `trunc`, `round`, `round_to_even`.
//! - `arith`: `copysign`, `dim`, `fmod`, `remainder`, `fma`, `nextafter`.
//! - `float`: Decomposition, bit patterns and classification.
//! - `provider`: The real-valued functions underneath, backed by `libm`.
//!
//! ```rust
//! use runk_math::prelude::*;
//!
//! assert_eq!(sqrt(81_u8), 9);
//! assert_eq!(exp(20_i16), i16::MAX);
//! assert_eq!(floor(-0.5_f32), -1.0);
//! ```

mod adapt;

pub mod arith;
pub mod exp;
pub mod float;
pub mod provider;
pub mod rounding;
pub mod special;
pub mod trig;

/// Every function adapter, for glob-import: `use runk_math::prelude::*;`
pub mod prelude {
    pub use crate::arith::{copysign, dim, fma, fmod, nextafter, nextafter32, remainder};
    pub use crate::exp::{
        cbrt, exp, exp2, expm1, hypot, ilogb, log, log1p, log2, log10, logb, pow, pow10, sqrt,
    };
    pub use crate::float::{
        float32_bits, float32_from_bits, float64_bits, float64_from_bits, frexp, inf, is_inf,
        is_nan, ldexp, modf, nan, signbit,
    };
    pub use crate::rounding::{ceil, floor, round, round_to_even, trunc};
    pub use crate::special::{
        erf, erfc, erfcinv, erfinv, gamma, j0, j1, jn, lgam, lgamma, y0, y1, yn,
    };
    pub use crate::trig::{
        acos, acosh, asin, asinh, atan, atan2, atanh, cos, cosh, sin, sincos, sinh, tan, tanh,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    /// The expected `i16` result for a real value under the default policy.
    fn narrowed(r: f64) -> i16 {
        if r.is_nan() {
            0
        } else if r >= f64::from(i16::MAX) {
            i16::MAX
        } else if r <= f64::from(i16::MIN) {
            i16::MIN
        } else {
            r.round() as i16
        }
    }

    #[test]
    fn test_integer_results_saturate_provider_results() {
        use crate::provider as p;

        let mut rng = StdRng::seed_from_u64(0x52554E4B);
        for _ in 0..2_000 {
            let x: i16 = rng.random();
            let y: i8 = rng.random();
            let (fx, fy) = (f64::from(x), f64::from(y));

            assert_eq!(exp(x), narrowed(p::exp(fx)));
            assert_eq!(log(x), narrowed(p::log(fx)));
            assert_eq!(sqrt(x), narrowed(p::sqrt(fx)));
            assert_eq!(pow(x, y), narrowed(p::pow(fx, fy)));
            assert_eq!(gamma(x), narrowed(p::tgamma(fx)));
            assert_eq!(tan(x), narrowed(p::tan(fx)));
            assert_eq!(ldexp(x, y), narrowed(p::ldexp(fx, i32::from(y))));
            assert_eq!(fmod(x, y), narrowed(p::fmod(fx, fy)));
            assert_eq!(hypot(x, y), narrowed(p::hypot(fx, fy)));
            assert_eq!(jn(y, x), narrowed(p::jn(i32::from(y), fx)));
        }
        assert_eq!(exp(i16::MAX), i16::MAX);
        assert_eq!(log(0_i16), i16::MIN);
        assert_eq!(sqrt(-4_i16), 0);
    }

    #[test]
    fn test_float_results_match_provider() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let x: f64 = rng.random_range(-50.0..50.0);
            assert_eq!(sin(x).to_bits(), crate::provider::sin(x).to_bits());
            assert_eq!(exp(x).to_bits(), crate::provider::exp(x).to_bits());
            assert_eq!(cbrt(x).to_bits(), crate::provider::cbrt(x).to_bits());
        }
    }

    #[test]
    fn test_f32_results_are_narrowed_provider_results() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2_000 {
            let x: f32 = rng.random_range(0.0..20.0);
            assert_eq!(sqrt(x), crate::provider::sqrt(x as f64) as f32);
            assert_eq!(log(x), crate::provider::log(x as f64) as f32);
        }
    }

    #[test]
    fn test_unsigned_results_never_negative() {
        for x in 0_u8..=255 {
            assert_eq!(sin(x), if crate::provider::sin(x as f64) >= 0.5 { 1 } else { 0 });
            assert!(cos(x) <= 1);
        }
    }
}
