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

use capstan_core::num::overflow;

/// A trait for destination types that can receive the sum of two
/// widest-width operands, together with an overflow flag.
///
/// The addition itself always happens at the width of [`Self::Wide`],
/// the widest integer type of the destination's signedness. The flag is
/// `true` when the mathematical sum does not fit the destination type;
/// the returned value is then the sum reduced modulo the destination
/// width. A `false` flag guarantees the returned value equals the
/// mathematical sum.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::ckd::add::NarrowingAdd;
/// let (sum, overflow) = i32::overflowing_add_wide(1_073_741_823, 1_073_741_823);
/// assert_eq!((sum, overflow), (2_147_483_646, false));
///
/// let (_, overflow) = i32::overflowing_add_wide(1_073_741_824, 1_073_741_824);
/// assert!(overflow);
/// ```
pub trait NarrowingAdd: Sized {
    /// The widest integer type sharing this type's signedness.
    type Wide;

    /// Adds `a` and `b` at full width, returning the sum reduced to
    /// `Self` and a flag that is `true` when the mathematical sum does
    /// not fit `Self`.
    fn overflowing_add_wide(a: Self::Wide, b: Self::Wide) -> (Self, bool);

    /// Adds `a` and `b` at full width, returning `None` when the
    /// mathematical sum does not fit `Self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use capstan_bits::ckd::add::NarrowingAdd;
    /// assert_eq!(u16::checked_add_wide(40_000, 30_000), None);
    /// assert_eq!(u16::checked_add_wide(40_000, 25_535), Some(u16::MAX));
    /// ```
    #[inline]
    fn checked_add_wide(a: Self::Wide, b: Self::Wide) -> Option<Self> {
        match Self::overflowing_add_wide(a, b) {
            (_, true) => None,
            (sum, false) => Some(sum),
        }
    }
}

macro_rules! narrowing_add_signed_impl {
    ($t:ty) => {
        impl NarrowingAdd for $t {
            type Wide = i128;

            #[inline]
            fn overflowing_add_wide(a: i128, b: i128) -> ($t, bool) {
                let (sum, mut overflow) = overflow::overflowing_add_i128(a, b);
                overflow |= sum > <$t>::MAX as i128 || sum < <$t>::MIN as i128;
                (sum as $t, overflow)
            }
        }
    };
}

macro_rules! narrowing_add_unsigned_impl {
    ($t:ty) => {
        impl NarrowingAdd for $t {
            type Wide = u128;

            #[inline]
            fn overflowing_add_wide(a: u128, b: u128) -> ($t, bool) {
                let (sum, mut overflow) = overflow::overflowing_add_u128(a, b);
                overflow |= sum > <$t>::MAX as u128;
                (sum as $t, overflow)
            }
        }
    };
}

narrowing_add_signed_impl!(i16);
narrowing_add_signed_impl!(i32);
narrowing_add_unsigned_impl!(u16);
narrowing_add_unsigned_impl!(u32);

// The widest types narrow to themselves, so the range checks vanish.

impl NarrowingAdd for i128 {
    type Wide = i128;

    #[inline]
    fn overflowing_add_wide(a: i128, b: i128) -> (i128, bool) {
        overflow::overflowing_add_i128(a, b)
    }
}

impl NarrowingAdd for u128 {
    type Wide = u128;

    #[inline]
    fn overflowing_add_wide(a: u128, b: u128) -> (u128, bool) {
        overflow::overflowing_add_u128(a, b)
    }
}
