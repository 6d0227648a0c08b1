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

//! # Real-Valued Math Provider
//!
//! The single seam between runk and the elementary function implementations
//! it wraps. Every adapter in this crate calls exactly one function from
//! here with `f64` arguments. Most are direct re-exports of `libm`; the few
//! functions `libm` lacks are derived from it.

use core::f64::consts::{FRAC_2_SQRT_PI, PI};

pub use libm::{
    acos, acosh, asin, asinh, atan, atan2, atanh, cbrt, ceil, copysign, cos, cosh, erf, erfc, exp,
    exp2, expm1, fdim, floor, fma, fmod, frexp, hypot, ilogb, j0, j1, jn, ldexp, lgamma_r, log,
    log1p, log2, log10, modf, nextafter, nextafterf, pow, remainder, round, sin, sincos, sinh, sqrt,
    tan, tanh, tgamma, trunc, y0, y1, yn,
};

/// Round to nearest, ties to even.
#[inline]
pub fn round_to_even(x: f64) -> f64 {
    // `rint` rounds in the default (ties-to-even) mode.
    libm::rint(x)
}

/// `10^n`. Underflows to zero below `1e-323` and overflows to `+∞`
/// above `1e308`.
#[inline]
pub fn pow10(n: i32) -> f64 {
    libm::pow(10.0, n as f64)
}

/// The binary exponent of `x` as a float.
///
/// `logb(±0) = -∞`, `logb(±∞) = +∞`, `logb(NaN) = NaN`.
pub fn logb(x: f64) -> f64 {
    if x == 0.0 {
        f64::NEG_INFINITY
    } else if x.is_infinite() {
        f64::INFINITY
    } else if x.is_nan() {
        x
    } else {
        libm::ilogb(x) as f64
    }
}

/// Inverse error function.
///
/// `erfinv(±1) = ±∞`; arguments outside `[-1, 1]` and NaN give NaN.
/// The double-precision polynomial estimate of Giles (2010) is polished with
/// Newton steps. For `|y| > 0.5` the steps run on `ln erfc` against the exact
/// tail mass `1 - |y|`, which keeps full precision up to the poles.
pub fn erfinv(y: f64) -> f64 {
    if y.is_nan() || !(-1.0..=1.0).contains(&y) {
        return f64::NAN;
    }
    if y == 0.0 {
        return y;
    }
    let a = y.abs();
    let x = if a > 0.5 {
        // Exact for `a` in `[0.5, 1]`.
        inverse_upper_tail(1.0 - a)
    } else {
        inverse_central(a)
    };
    x.copysign(y)
}

/// Inverse complementary error function.
///
/// `erfcinv(0) = +∞`, `erfcinv(2) = -∞`; arguments outside `[0, 2]` and
/// NaN give NaN. Small arguments are inverted directly on `erfc`, so
/// `erfcinv(1e-300)` stays finite.
pub fn erfcinv(q: f64) -> f64 {
    if q.is_nan() || !(0.0..=2.0).contains(&q) {
        return f64::NAN;
    }
    if q > 1.0 {
        // Exact for `q` in `[1, 2]`.
        return -erfcinv(2.0 - q);
    }
    if q < 0.5 {
        inverse_upper_tail(q)
    } else {
        erfinv(1.0 - q)
    }
}

/// Solves `erf(x) = a` for `a` in `(0, 0.5]`.
fn inverse_central(a: f64) -> f64 {
    let w = -libm::log((1.0 - a) * (1.0 + a));
    let mut x = giles_estimate(w) * a;
    for _ in 0..2 {
        let slope = FRAC_2_SQRT_PI * libm::exp(-x * x);
        x -= (libm::erf(x) - a) / slope;
    }
    x
}

/// Solves `erfc(x) = q` for `q` in `[0, 0.5)`.
fn inverse_upper_tail(q: f64) -> f64 {
    if q == 0.0 {
        return f64::INFINITY;
    }
    let w = -libm::log(q * (2.0 - q));
    let mut x = if w < GILES_DOMAIN {
        giles_estimate(w) * (1.0 - q)
    } else {
        asymptotic_estimate(q)
    };
    // Newton on `ln erfc(x) = ln q`, which stays well conditioned where
    // `erfc(x)` itself is tiny.
    let ln_q = libm::log(q);
    for _ in 0..8 {
        let tail = libm::erfc(x);
        let slope = FRAC_2_SQRT_PI * libm::exp(-x * x);
        if tail == 0.0 || slope == 0.0 {
            break;
        }
        let step = (libm::log(tail) - ln_q) * tail / slope;
        x += step;
        if step.abs() <= f64::EPSILON * x.abs() {
            break;
        }
    }
    x
}

/// Largest `w` the Giles polynomials were fitted for, reached at
/// `1 - |y| = 2^-53`.
const GILES_DOMAIN: f64 = 37.0;

/// Starting point for `erfc(x) = q` with `q` below `2^-53`, from
/// `erfc(x) ≈ e^(-x²) / (x√π)`.
fn asymptotic_estimate(q: f64) -> f64 {
    let l = -libm::log(q) - 0.5 * libm::log(PI);
    let mut x2 = l;
    for _ in 0..3 {
        x2 = l - 0.5 * libm::log(x2);
    }
    libm::sqrt(x2)
}

/// `erfinv(y) / y` as a function of `w = -ln(1 - y²)` (Giles, 2010).
fn giles_estimate(w: f64) -> f64 {
    let (t, coefficients): (f64, &[f64]) = if w < 6.25 {
        (w - 3.125, &CENTRAL)
    } else if w < 16.0 {
        (libm::sqrt(w) - 3.25, &TAIL)
    } else {
        (libm::sqrt(w) - 5.0, &FAR_TAIL)
    };
    coefficients.iter().fold(0.0, |p, c| c + p * t)
}

const CENTRAL: [f64; 23] = [
    -3.6444120640178196996e-21,
    -1.685059138182016589e-19,
    1.2858480715256400167e-18,
    1.115787767802518096e-17,
    -1.333171662854620906e-16,
    2.0972767875968561637e-17,
    6.6376381343583238325e-15,
    -4.0545662729752068639e-14,
    -8.1519341976054721522e-14,
    2.6335093153082322977e-12,
    -1.2975133253453532498e-11,
    -5.4154120542946279317e-11,
    1.051212273321532285e-09,
    -4.1126339803469836976e-09,
    -2.9070369957882005086e-08,
    4.2347877827932403518e-07,
    -1.3654692000834678645e-06,
    -1.3882523362786468719e-05,
    0.0001867342080340571352,
    -0.00074070253416626697512,
    -0.0060336708714301490533,
    0.24015818242558961693,
    1.6536545626831027356,
];

const TAIL: [f64; 19] = [
    2.2137376921775787049e-09,
    9.0756561938885390979e-08,
    -2.7517406297064545428e-07,
    1.8239629214389227755e-08,
    1.5027403968909827627e-06,
    -4.013867526981545969e-06,
    2.9234449089955446044e-06,
    1.2475304481671778723e-05,
    -4.7318229009055733981e-05,
    6.8284851459573175448e-05,
    2.4031110387097893999e-05,
    -0.0003550375203628474796,
    0.00095328937973738049703,
    -0.0016882755560235047313,
    0.0024914420961078508066,
    -0.0037512085075692412107,
    0.005370914553590063617,
    1.0052589676941592334,
    3.0838856104922207635,
];

const FAR_TAIL: [f64; 17] = [
    -2.7109920616438573243e-11,
    -2.5556418169965252055e-10,
    1.5076572693500548083e-09,
    -3.7894654401267369937e-09,
    7.6157012080783393804e-09,
    -1.4960026627149240478e-08,
    2.9147953450901080826e-08,
    -6.7711997758452339498e-08,
    2.2900482228026654717e-07,
    -9.9298272942317002539e-07,
    4.5260625972231537039e-06,
    -1.9681778105531670567e-05,
    7.5995277030017761139e-05,
    -0.00021503011930044477347,
    -0.00013871931833623122026,
    1.0103004648645343977,
    4.8499064014085844221,
];

/// The IEEE-754 bit pattern of an `f32`.
#[inline(always)]
pub fn float32_bits(x: f32) -> u32 {
    x.to_bits()
}

/// The `f32` with the given bit pattern.
#[inline(always)]
pub fn float32_from_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// The IEEE-754 bit pattern of an `f64`.
#[inline(always)]
pub fn float64_bits(x: f64) -> u64 {
    x.to_bits()
}

/// The `f64` with the given bit pattern.
#[inline(always)]
pub fn float64_from_bits(bits: u64) -> f64 {
    f64::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_erfinv_inverts_erf() {
        for &x in &[-2.5, -1.0, -0.3, 0.1, 0.5, 1.2, 3.0] {
            let y = erf(x);
            assert!(close(erfinv(y), x, 1e-12), "erfinv(erf({x})) = {}", erfinv(y));
        }
    }

    #[test]
    fn test_erfinv_special_values() {
        assert_eq!(erfinv(0.0), 0.0);
        assert_eq!(erfinv(1.0), f64::INFINITY);
        assert_eq!(erfinv(-1.0), f64::NEG_INFINITY);
        assert!(erfinv(1.5).is_nan());
        assert!(erfinv(f64::NAN).is_nan());
    }

    #[test]
    fn test_erfinv_near_the_poles() {
        let cases = [
            (1.0 - 1e-10, 4.572824958544924),
            (0.999999999999999, 5.675915739744712),
            (-(1.0 - 1e-12), -5.042031898572696),
        ];
        for (y, expected) in cases {
            let x = erfinv(y);
            assert!(close(x, expected, 1e-12), "erfinv({y}) = {x}, want {expected}");
            let mass = 1.0 - y.abs();
            assert!(((erfc(x.abs()) - mass) / mass).abs() < 1e-12);
        }
    }

    #[test]
    fn test_erfinv_is_odd() {
        for y in [0.1, 0.5, 0.75, 0.999] {
            assert_eq!(erfinv(-y), -erfinv(y));
        }
        assert!(erfinv(-0.0).is_sign_negative());
    }

    #[test]
    fn test_erfcinv() {
        assert_eq!(erfcinv(1.0), 0.0);
        assert_eq!(erfcinv(0.0), f64::INFINITY);
        assert_eq!(erfcinv(2.0), f64::NEG_INFINITY);
        assert!(erfcinv(-0.1).is_nan());
        assert!(erfcinv(2.1).is_nan());
        assert!(close(erfcinv(erfc(0.7)), 0.7, 1e-12));
        assert!(close(erfcinv(1.7), -erfcinv(0.3), 1e-15));
    }

    #[test]
    fn test_erfcinv_far_tail() {
        let cases = [
            (1e-20, 6.601580622355142),
            (1e-100, 15.065574702592645),
            (1e-300, 26.209469960516124),
        ];
        for (q, expected) in cases {
            let x = erfcinv(q);
            assert!(close(x, expected, 1e-10), "erfcinv({q}) = {x}, want {expected}");
        }
    }

    #[test]
    fn test_logb() {
        assert_eq!(logb(8.0), 3.0);
        assert_eq!(logb(0.75), -1.0);
        assert_eq!(logb(-0.0), f64::NEG_INFINITY);
        assert_eq!(logb(f64::NEG_INFINITY), f64::INFINITY);
        assert!(logb(f64::NAN).is_nan());
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1.0);
        assert_eq!(pow10(3), 1000.0);
        assert_eq!(pow10(-400), 0.0);
        assert_eq!(pow10(400), f64::INFINITY);
    }

    #[test]
    fn test_round_to_even() {
        assert_eq!(round_to_even(2.5), 2.0);
        assert_eq!(round_to_even(3.5), 4.0);
        assert_eq!(round_to_even(-0.5), -0.0);
    }

    #[test]
    fn test_bit_patterns() {
        assert_eq!(float32_bits(1.0), 0x3f80_0000);
        assert_eq!(float32_from_bits(0x4000_0000), 2.0);
        assert_eq!(float64_bits(1.0), 0x3ff0_0000_0000_0000);
        assert_eq!(float64_from_bits(0x4000_0000_0000_0000), 2.0);
    }
}
