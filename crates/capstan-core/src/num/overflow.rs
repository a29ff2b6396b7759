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

//! # Maximum-Width Checked Addition
//!
//! Addition at the widest integer widths (`i128`/`u128`) returning the
//! wrapped sum together with an explicit overflow flag, `true` meaning the
//! mathematical sum was not representable. The narrowing checked additions
//! in `capstan-bits` compute here first and then range-check against their
//! target width, so no intermediate step can lose information.

/// Adds two maximum-width signed integers, returning the wrapped sum and
/// whether the mathematical sum overflowed.
///
/// Overflow is detected by sign agreement: it occurred exactly when the
/// operands share a sign and the sum's sign differs from theirs.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::overflow;
/// assert_eq!(overflow::overflowing_add_i128(2, 3), (5, false));
/// let (wrapped, overflowed) = overflow::overflowing_add_i128(i128::MAX, 1);
/// assert_eq!(wrapped, i128::MIN);
/// assert!(overflowed);
/// ```
#[inline]
pub const fn overflowing_add_i128(a: i128, b: i128) -> (i128, bool) {
    let sum = a.wrapping_add(b);
    (sum, (a ^ b) >= 0 && (a ^ sum) < 0)
}

/// Adds two maximum-width unsigned integers, returning the wrapped sum and
/// whether the mathematical sum overflowed.
///
/// Overflow is detected by wraparound: the wrapped sum is smaller than an
/// operand exactly when a carry left the width.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::overflow;
/// assert_eq!(overflow::overflowing_add_u128(2, 3), (5, false));
/// let (wrapped, overflowed) = overflow::overflowing_add_u128(u128::MAX, 1);
/// assert_eq!(wrapped, 0);
/// assert!(overflowed);
/// ```
#[inline]
pub const fn overflowing_add_u128(a: u128, b: u128) -> (u128, bool) {
    let sum = a.wrapping_add(b);
    (sum, sum < a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_sign_combinations() {
        // Mixed signs can never overflow.
        assert_eq!(overflowing_add_i128(1, -2), (-1, false));
        assert_eq!(overflowing_add_i128(-1, 2), (1, false));
        assert_eq!(overflowing_add_i128(i128::MAX, i128::MIN), (-1, false));

        // Same-sign sums overflow exactly at the representability edge.
        assert_eq!(overflowing_add_i128(i128::MAX, 0), (i128::MAX, false));
        assert_eq!(overflowing_add_i128(i128::MIN, 0), (i128::MIN, false));
        assert!(overflowing_add_i128(i128::MAX, 1).1);
        assert!(overflowing_add_i128(i128::MIN, -1).1);
        assert!(overflowing_add_i128(i128::MAX, i128::MAX).1);
        assert!(overflowing_add_i128(i128::MIN, i128::MIN).1);
    }

    #[test]
    fn test_signed_matches_intrinsic() {
        let probes = [
            i128::MIN,
            i128::MIN + 1,
            -1,
            0,
            1,
            i128::MAX - 1,
            i128::MAX,
            i64::MIN as i128,
            i64::MAX as i128,
        ];
        for &a in &probes {
            for &b in &probes {
                assert_eq!(overflowing_add_i128(a, b), a.overflowing_add(b));
            }
        }
    }

    #[test]
    fn test_unsigned_matches_intrinsic() {
        let probes = [0u128, 1, 2, u64::MAX as u128, u128::MAX - 1, u128::MAX];
        for &a in &probes {
            for &b in &probes {
                assert_eq!(overflowing_add_u128(a, b), a.overflowing_add(b));
            }
        }
    }

    #[test]
    fn test_evaluates_in_const_context() {
        const SUM: (i128, bool) = overflowing_add_i128(40, 2);
        assert_eq!(SUM, (42, false));
    }
}
