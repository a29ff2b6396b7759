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

use capstan_core::num::swar;

/// A trait for words that can test whether exactly one of their bits is
/// set.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::shape::HasSingleBit;
/// assert!(0b0100_0000_u8.has_single_bit());
/// assert!(!0b0100_0001_u8.has_single_bit());
/// assert!(!0_u8.has_single_bit());
/// ```
pub trait HasSingleBit: Sized {
    /// Returns `true` iff exactly one bit is set; `false` for zero.
    fn has_single_bit(self) -> bool;
}

/// A trait for words that can report the minimum number of bits needed to
/// represent their value.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::shape::BitWidth;
/// assert_eq!(17_u32.bit_width(), 5);
/// assert_eq!(0_u32.bit_width(), 0);
/// assert_eq!(u8::MAX.bit_width(), 8);
/// ```
pub trait BitWidth: Sized {
    /// Returns the representation width in bits; 0 for zero.
    fn bit_width(self) -> u32;
}

/// A trait for words that can round themselves up to a power of two.
///
/// When the mathematical ceiling exceeds the top power of two of the
/// width, the result wraps modulo `2^BITS` and comes back 0. The wrap is
/// silent and deliberate; callers that can see such inputs must
/// range-check first.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::shape::BitCeil;
/// assert_eq!(17_u32.bit_ceil(), 32);
/// assert_eq!(32_u32.bit_ceil(), 32);
/// assert_eq!(0_u8.bit_ceil(), 1);
/// assert_eq!(200_u8.bit_ceil(), 0); // true ceiling 256 wraps
/// ```
pub trait BitCeil: Sized {
    /// Returns the smallest power of two `>= self`; 1 for inputs 0 and 1.
    fn bit_ceil(self) -> Self;
}

/// A trait for words that can round themselves down to a power of two.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::shape::BitFloor;
/// assert_eq!(17_u32.bit_floor(), 16);
/// assert_eq!(1_u32.bit_floor(), 1);
/// assert_eq!(0_u32.bit_floor(), 0);
/// ```
pub trait BitFloor: Sized {
    /// Returns the largest power of two `<= self`; 0 for zero.
    fn bit_floor(self) -> Self;
}

macro_rules! predicate_impl {
    ($trait_name:ident, $method:ident, $t:ty, $kernel:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> bool {
                swar::$kernel::<{ <$t>::BITS }>(self as u64)
            }
        }
    };
}

macro_rules! width_impl {
    ($trait_name:ident, $method:ident, $t:ty, $kernel:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> u32 {
                swar::$kernel::<{ <$t>::BITS }>(self as u64)
            }
        }
    };
}

macro_rules! rounding_impl {
    ($trait_name:ident, $method:ident, $t:ty, $kernel:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> $t {
                swar::$kernel::<{ <$t>::BITS }>(self as u64) as $t
            }
        }
    };
}

predicate_impl!(HasSingleBit, has_single_bit, u8, has_single_bit);
predicate_impl!(HasSingleBit, has_single_bit, u16, has_single_bit);
predicate_impl!(HasSingleBit, has_single_bit, u32, has_single_bit);
#[cfg(feature = "word64")]
predicate_impl!(HasSingleBit, has_single_bit, u64, has_single_bit);

width_impl!(BitWidth, bit_width, u8, bit_width);
width_impl!(BitWidth, bit_width, u16, bit_width);
width_impl!(BitWidth, bit_width, u32, bit_width);
#[cfg(feature = "word64")]
width_impl!(BitWidth, bit_width, u64, bit_width);

rounding_impl!(BitCeil, bit_ceil, u8, bit_ceil);
rounding_impl!(BitCeil, bit_ceil, u16, bit_ceil);
rounding_impl!(BitCeil, bit_ceil, u32, bit_ceil);
#[cfg(feature = "word64")]
rounding_impl!(BitCeil, bit_ceil, u64, bit_ceil);

rounding_impl!(BitFloor, bit_floor, u8, bit_floor);
rounding_impl!(BitFloor, bit_floor, u16, bit_floor);
rounding_impl!(BitFloor, bit_floor, u32, bit_floor);
#[cfg(feature = "word64")]
rounding_impl!(BitFloor, bit_floor, u64, bit_floor);
