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

use num_traits::Zero;

/// Returns the smaller of two values, the first on ties.
///
/// Only `<` is consulted, so the function works for any partially ordered
/// type; with floating-point NaN operands the first operand wins.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::math::scalar::min_val;
/// assert_eq!(min_val(3, 7), 3);
/// assert_eq!(min_val(2.5, -1.0), -1.0);
/// ```
#[inline]
pub fn min_val<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Returns the larger of two values, the first on ties.
///
/// Only `<` is consulted; with floating-point NaN operands the first
/// operand wins.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::math::scalar::max_val;
/// assert_eq!(max_val(3, 7), 7);
/// assert_eq!(max_val(2.5, -1.0), 2.5);
/// ```
#[inline]
pub fn max_val<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

/// Clamps `value` into `[low, high]`.
///
/// Callers must pass `low <= high`; this is debug-asserted.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::math::scalar::clamp_val;
/// assert_eq!(clamp_val(5, 0, 10), 5);
/// assert_eq!(clamp_val(-3, 0, 10), 0);
/// assert_eq!(clamp_val(42, 0, 10), 10);
/// ```
#[inline]
pub fn clamp_val<T: PartialOrd>(value: T, low: T, high: T) -> T {
    debug_assert!(low <= high);

    if value < low {
        low
    } else if high < value {
        high
    } else {
        value
    }
}

/// Returns -1, 0, or +1 according to the sign of `value`.
///
/// Defined for signed integers and floats alike; zero and unordered
/// (NaN) inputs both yield 0.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::math::scalar::signum_val;
/// assert_eq!(signum_val(-17), -1);
/// assert_eq!(signum_val(0), 0);
/// assert_eq!(signum_val(0.5), 1);
/// ```
#[inline]
pub fn signum_val<T: Zero + PartialOrd>(value: T) -> i32 {
    if value > T::zero() {
        1
    } else if value < T::zero() {
        -1
    } else {
        0
    }
}
