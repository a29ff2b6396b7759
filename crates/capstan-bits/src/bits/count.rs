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

/// A trait for words that can count their set bits.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::count::PopulationCount;
/// let x: u8 = 0b1011_0010;
/// assert_eq!(x.population_count(), 4);
/// assert_eq!(0xFFFF_FFFF_u32.population_count(), 32);
/// ```
pub trait PopulationCount: Sized {
    /// Returns the number of set bits, a value in `[0, BITS]`.
    fn population_count(self) -> u32;
}

/// A trait for words that can count the zero bits above their highest set
/// bit.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::count::LeadingZeroCount;
/// assert_eq!(0b0001_0000_u8.leading_zero_count(), 3);
/// assert_eq!(0_u16.leading_zero_count(), 16);
/// ```
pub trait LeadingZeroCount: Sized {
    /// Returns the number of leading zero bits; the full width for zero.
    fn leading_zero_count(self) -> u32;
}

/// A trait for words that can count their run of one bits starting at the
/// highest bit.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::count::LeadingOneCount;
/// assert_eq!(0b1110_0001_u8.leading_one_count(), 3);
/// assert_eq!(0xFF_u8.leading_one_count(), 8);
/// ```
pub trait LeadingOneCount: Sized {
    /// Returns the number of leading one bits; the full width for all-ones.
    fn leading_one_count(self) -> u32;
}

/// A trait for words that can count the zero bits below their lowest set
/// bit.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::count::TrailingZeroCount;
/// assert_eq!(0b0001_1000_u8.trailing_zero_count(), 3);
/// assert_eq!(0_u32.trailing_zero_count(), 32);
/// ```
pub trait TrailingZeroCount: Sized {
    /// Returns the number of trailing zero bits; the full width for zero.
    fn trailing_zero_count(self) -> u32;
}

/// A trait for words that can count their run of one bits starting at the
/// lowest bit.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::count::TrailingOneCount;
/// assert_eq!(0b0010_0111_u8.trailing_one_count(), 3);
/// assert_eq!(0_u8.trailing_one_count(), 0);
/// ```
pub trait TrailingOneCount: Sized {
    /// Returns the number of trailing one bits; the full width for
    /// all-ones.
    fn trailing_one_count(self) -> u32;
}

macro_rules! count_impl {
    ($trait_name:ident, $method:ident, $t:ty, $kernel:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> u32 {
                swar::$kernel::<{ <$t>::BITS }>(self as u64)
            }
        }
    };
}

count_impl!(PopulationCount, population_count, u8, population_count);
count_impl!(PopulationCount, population_count, u16, population_count);
count_impl!(PopulationCount, population_count, u32, population_count);
#[cfg(feature = "word64")]
count_impl!(PopulationCount, population_count, u64, population_count);

count_impl!(LeadingZeroCount, leading_zero_count, u8, leading_zeros);
count_impl!(LeadingZeroCount, leading_zero_count, u16, leading_zeros);
count_impl!(LeadingZeroCount, leading_zero_count, u32, leading_zeros);
#[cfg(feature = "word64")]
count_impl!(LeadingZeroCount, leading_zero_count, u64, leading_zeros);

count_impl!(LeadingOneCount, leading_one_count, u8, leading_ones);
count_impl!(LeadingOneCount, leading_one_count, u16, leading_ones);
count_impl!(LeadingOneCount, leading_one_count, u32, leading_ones);
#[cfg(feature = "word64")]
count_impl!(LeadingOneCount, leading_one_count, u64, leading_ones);

count_impl!(TrailingZeroCount, trailing_zero_count, u8, trailing_zeros);
count_impl!(TrailingZeroCount, trailing_zero_count, u16, trailing_zeros);
count_impl!(TrailingZeroCount, trailing_zero_count, u32, trailing_zeros);
#[cfg(feature = "word64")]
count_impl!(TrailingZeroCount, trailing_zero_count, u64, trailing_zeros);

count_impl!(TrailingOneCount, trailing_one_count, u8, trailing_ones);
count_impl!(TrailingOneCount, trailing_one_count, u16, trailing_ones);
count_impl!(TrailingOneCount, trailing_one_count, u32, trailing_ones);
#[cfg(feature = "word64")]
count_impl!(TrailingOneCount, trailing_one_count, u64, trailing_ones);
