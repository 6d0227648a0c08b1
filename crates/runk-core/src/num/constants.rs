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

/// A trait for number types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for number types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

macro_rules! impl_constants_for {
    ($zero:expr, $one:expr; $($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                const ZERO: Self = $zero;
            }

            impl PlusOne for $t {
                const PLUS_ONE: Self = $one;
            }
        )*
    };
}

impl_constants_for!(0, 1; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_constants_for!(0.0, 1.0; f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn zero<T: Zero>() -> T {
        T::ZERO
    }

    fn one<T: PlusOne>() -> T {
        T::PLUS_ONE
    }

    #[test]
    fn test_integer_constants() {
        assert_eq!(zero::<i8>(), 0);
        assert_eq!(zero::<usize>(), 0);
        assert_eq!(one::<u64>(), 1);
        assert_eq!(one::<isize>(), 1);
    }

    #[test]
    fn test_float_constants() {
        assert_eq!(zero::<f32>(), 0.0);
        assert_eq!(one::<f64>(), 1.0);
        assert!(zero::<f64>().is_sign_positive());
    }
}
