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

/// A trait for words whose bit order can be mirrored.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::reorder::BitReverse;
/// assert_eq!(0b1100_0001_u8.bit_reverse(), 0b1000_0011);
/// assert_eq!(0x0000_0001_u32.bit_reverse(), 0x8000_0000);
/// ```
pub trait BitReverse: Sized {
    /// Returns the value with bit `i` moved to bit `BITS - 1 - i`.
    fn bit_reverse(self) -> Self;
}

/// A trait for words whose byte order can be mirrored.
///
/// Implemented for multi-byte widths only; a single byte has nothing to
/// swap.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::reorder::ByteSwap;
/// assert_eq!(0x1234_u16.byte_swap(), 0x3412);
/// assert_eq!(0x1234_5678_u32.byte_swap(), 0x7856_3412);
/// ```
pub trait ByteSwap: Sized {
    /// Returns the value with byte `i` moved to byte `BITS / 8 - 1 - i`.
    fn byte_swap(self) -> Self;
}

/// A trait for words that can rotate their bits towards the high end.
///
/// Rotation is defined for every count: the count is reduced modulo the
/// width, so rotating by the width (or any multiple of it) is the
/// identity. No count is rejected.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::reorder::BitRotateLeft;
/// assert_eq!(0b1000_0001_u8.rotate_bits_left(1), 0b0000_0011);
/// assert_eq!(0xABCD_u16.rotate_bits_left(16), 0xABCD);
/// assert_eq!(0xABCD_u16.rotate_bits_left(20), 0xABCD_u16.rotate_bits_left(4));
/// ```
pub trait BitRotateLeft: Sized {
    /// Rotates towards the high end by `count % BITS` positions.
    fn rotate_bits_left(self, count: u32) -> Self;
}

/// A trait for words that can rotate their bits towards the low end.
///
/// Rotation is defined for every count: the count is reduced modulo the
/// width, so rotating by the width (or any multiple of it) is the
/// identity. No count is rejected.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::bits::reorder::BitRotateRight;
/// assert_eq!(0b0000_0011_u8.rotate_bits_right(1), 0b1000_0001);
/// assert_eq!(0xABCD_u16.rotate_bits_right(32), 0xABCD);
/// ```
pub trait BitRotateRight: Sized {
    /// Rotates towards the low end by `count % BITS` positions.
    fn rotate_bits_right(self, count: u32) -> Self;
}

macro_rules! reorder_impl {
    ($trait_name:ident, $method:ident, $t:ty, $kernel:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> $t {
                swar::$kernel::<{ <$t>::BITS }>(self as u64) as $t
            }
        }
    };
}

macro_rules! rotate_impl {
    ($trait_name:ident, $method:ident, $t:ty, $kernel:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, count: u32) -> $t {
                swar::$kernel::<{ <$t>::BITS }>(self as u64, count) as $t
            }
        }
    };
}

reorder_impl!(BitReverse, bit_reverse, u8, bit_reverse);
reorder_impl!(BitReverse, bit_reverse, u16, bit_reverse);
reorder_impl!(BitReverse, bit_reverse, u32, bit_reverse);
#[cfg(feature = "word64")]
reorder_impl!(BitReverse, bit_reverse, u64, bit_reverse);

reorder_impl!(ByteSwap, byte_swap, u16, byte_swap);
reorder_impl!(ByteSwap, byte_swap, u32, byte_swap);
#[cfg(feature = "word64")]
reorder_impl!(ByteSwap, byte_swap, u64, byte_swap);

rotate_impl!(BitRotateLeft, rotate_bits_left, u8, rotate_left);
rotate_impl!(BitRotateLeft, rotate_bits_left, u16, rotate_left);
rotate_impl!(BitRotateLeft, rotate_bits_left, u32, rotate_left);
#[cfg(feature = "word64")]
rotate_impl!(BitRotateLeft, rotate_bits_left, u64, rotate_left);

rotate_impl!(BitRotateRight, rotate_bits_right, u8, rotate_right);
rotate_impl!(BitRotateRight, rotate_bits_right, u16, rotate_right);
rotate_impl!(BitRotateRight, rotate_bits_right, u32, rotate_right);
#[cfg(feature = "word64")]
rotate_impl!(BitRotateRight, rotate_bits_right, u64, rotate_right);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::count::{LeadingZeroCount, TrailingZeroCount};
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // -------------------------------------------------------------------
    // Helper functions.
    // -------------------------------------------------------------------

    fn bit_reverse<T: BitReverse>(x: T) -> T {
        x.bit_reverse()
    }

    fn byte_swap<T: ByteSwap>(x: T) -> T {
        x.byte_swap()
    }

    fn rotate_bits_left<T: BitRotateLeft>(x: T, count: u32) -> T {
        x.rotate_bits_left(count)
    }

    fn rotate_bits_right<T: BitRotateRight>(x: T, count: u32) -> T {
        x.rotate_bits_right(count)
    }

    // -------------------------------------------------------------------
    // Bit reversal.
    // -------------------------------------------------------------------

    #[test]
    fn test_bit_reverse_matches_reference_u8() {
        for x in 0..=u8::MAX {
            assert_eq!(bit_reverse(x), x.reverse_bits(), "x = {:#010b}", x);
        }
    }

    #[test]
    fn test_bit_reverse_matches_reference_u16() {
        for x in 0..=u16::MAX {
            assert_eq!(bit_reverse(x), x.reverse_bits(), "x = {:#06x}", x);
        }
    }

    #[test]
    fn test_bit_reverse_matches_reference_random_u32() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_0E01);
        for _ in 0..20_000 {
            let x: u32 = rng.random();
            assert_eq!(bit_reverse(x), x.reverse_bits(), "x = {:#010x}", x);
        }
    }

    #[cfg(feature = "word64")]
    #[test]
    fn test_bit_reverse_matches_reference_random_u64() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_0E02);
        for _ in 0..20_000 {
            let x: u64 = rng.random();
            assert_eq!(bit_reverse(x), x.reverse_bits(), "x = {:#018x}", x);
        }
    }

    #[test]
    fn test_bit_reverse_is_an_involution() {
        for x in 0..=u8::MAX {
            assert_eq!(bit_reverse(bit_reverse(x)), x);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_0E03);
        for _ in 0..10_000 {
            let x: u32 = rng.random();
            assert_eq!(bit_reverse(bit_reverse(x)), x);
        }
    }

    #[test]
    fn test_bit_reverse_mirrors_zero_runs() {
        // Reversal swaps the ends of the word, so the leading zero run of
        // the mirror image is the trailing zero run of the input.
        for x in 1..=u8::MAX {
            assert_eq!(
                bit_reverse(x).leading_zero_count(),
                x.trailing_zero_count(),
                "x = {:#010b}",
                x
            );
        }
        for x in (1..=u16::MAX).step_by(13) {
            assert_eq!(
                bit_reverse(x).leading_zero_count(),
                x.trailing_zero_count()
            );
        }
    }

    #[test]
    fn test_bit_reverse_scenarios() {
        assert_eq!(bit_reverse(0b0000_0001_u8), 0b1000_0000);
        assert_eq!(bit_reverse(0b1100_0001_u8), 0b1000_0011);
        assert_eq!(bit_reverse(0xF0F0_u16), 0x0F0F);
        assert_eq!(bit_reverse(0x0000_0001_u32), 0x8000_0000);
        assert_eq!(bit_reverse(0xDEAD_BEEF_u32), 0xF77D_B57B);
    }

    #[cfg(feature = "word64")]
    #[test]
    fn test_bit_reverse_scenarios_u64() {
        assert_eq!(bit_reverse(1_u64), 1 << 63);
        assert_eq!(bit_reverse(u64::MAX), u64::MAX);
        assert_eq!(
            bit_reverse(0x0123_4567_89AB_CDEF_u64),
            0xF7B3_D591_E6A2_C480
        );
    }

    // -------------------------------------------------------------------
    // Byte swapping.
    // -------------------------------------------------------------------

    #[test]
    fn test_byte_swap_matches_reference_u16() {
        for x in 0..=u16::MAX {
            assert_eq!(byte_swap(x), x.swap_bytes(), "x = {:#06x}", x);
        }
    }

    #[test]
    fn test_byte_swap_matches_reference_random_u32() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_0E04);
        for _ in 0..20_000 {
            let x: u32 = rng.random();
            assert_eq!(byte_swap(x), x.swap_bytes(), "x = {:#010x}", x);
        }
    }

    #[cfg(feature = "word64")]
    #[test]
    fn test_byte_swap_matches_reference_random_u64() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_0E05);
        for _ in 0..20_000 {
            let x: u64 = rng.random();
            assert_eq!(byte_swap(x), x.swap_bytes(), "x = {:#018x}", x);
        }
    }

    #[test]
    fn test_byte_swap_is_an_involution() {
        for x in (0..=u16::MAX).step_by(7) {
            assert_eq!(byte_swap(byte_swap(x)), x);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_0E06);
        for _ in 0..10_000 {
            let x: u32 = rng.random();
            assert_eq!(byte_swap(byte_swap(x)), x);
        }
    }

    #[test]
    fn test_byte_swap_scenarios() {
        assert_eq!(byte_swap(0x1234_u16), 0x3412);
        assert_eq!(byte_swap(0x00FF_u16), 0xFF00);
        assert_eq!(byte_swap(0x1234_5678_u32), 0x7856_3412);
        assert_eq!(byte_swap(0xDEAD_BEEF_u32), 0xEFBE_ADDE);
    }

    #[cfg(feature = "word64")]
    #[test]
    fn test_byte_swap_scenarios_u64() {
        assert_eq!(
            byte_swap(0x0102_0304_0506_0708_u64),
            0x0807_0605_0403_0201
        );
        assert_eq!(byte_swap(u64::MAX), u64::MAX);
    }

    // -------------------------------------------------------------------
    // Rotation.
    // -------------------------------------------------------------------

    #[test]
    fn test_rotate_left_matches_reference_u8() {
        for x in 0..=u8::MAX {
            for count in 0..32 {
                assert_eq!(
                    rotate_bits_left(x, count),
                    x.rotate_left(count),
                    "x = {:#010b}, count = {}",
                    x,
                    count
                );
            }
        }
    }

    #[test]
    fn test_rotate_right_matches_reference_u8() {
        for x in 0..=u8::MAX {
            for count in 0..32 {
                assert_eq!(
                    rotate_bits_right(x, count),
                    x.rotate_right(count),
                    "x = {:#010b}, count = {}",
                    x,
                    count
                );
            }
        }
    }

    #[test]
    fn test_rotate_matches_reference_random_u16() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_0E07);
        for _ in 0..20_000 {
            let x: u16 = rng.random();
            let count: u32 = rng.random_range(0..64);
            assert_eq!(rotate_bits_left(x, count), x.rotate_left(count));
            assert_eq!(rotate_bits_right(x, count), x.rotate_right(count));
        }
    }

    #[test]
    fn test_rotate_matches_reference_random_u32() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_0E08);
        for _ in 0..20_000 {
            let x: u32 = rng.random();
            let count: u32 = rng.random_range(0..128);
            assert_eq!(rotate_bits_left(x, count), x.rotate_left(count));
            assert_eq!(rotate_bits_right(x, count), x.rotate_right(count));
        }
    }

    #[cfg(feature = "word64")]
    #[test]
    fn test_rotate_matches_reference_random_u64() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_0E09);
        for _ in 0..20_000 {
            let x: u64 = rng.random();
            let count: u32 = rng.random_range(0..256);
            assert_eq!(rotate_bits_left(x, count), x.rotate_left(count));
            assert_eq!(rotate_bits_right(x, count), x.rotate_right(count));
        }
    }

    #[test]
    fn test_rotate_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_0E0A);
        for _ in 0..10_000 {
            let x: u32 = rng.random();
            let count: u32 = rng.random_range(0..100);
            assert_eq!(rotate_bits_right(rotate_bits_left(x, count), count), x);
            assert_eq!(rotate_bits_left(rotate_bits_right(x, count), count), x);
        }
    }

    #[test]
    fn test_rotate_by_width_is_identity() {
        assert_eq!(rotate_bits_left(0xA5_u8, 8), 0xA5);
        assert_eq!(rotate_bits_right(0xA5_u8, 8), 0xA5);
        assert_eq!(rotate_bits_left(0xABCD_u16, 16), 0xABCD);
        assert_eq!(rotate_bits_left(0xABCD_u16, 48), 0xABCD);
        assert_eq!(rotate_bits_right(0x1234_5678_u32, 32), 0x1234_5678);
    }

    #[cfg(feature = "word64")]
    #[test]
    fn test_rotate_by_width_is_identity_u64() {
        assert_eq!(rotate_bits_left(0xDEAD_BEEF_CAFE_F00D_u64, 64), 0xDEAD_BEEF_CAFE_F00D);
        assert_eq!(rotate_bits_right(0xDEAD_BEEF_CAFE_F00D_u64, 128), 0xDEAD_BEEF_CAFE_F00D);
    }

    #[test]
    fn test_rotate_by_zero_is_identity() {
        assert_eq!(rotate_bits_left(0x5A_u8, 0), 0x5A);
        assert_eq!(rotate_bits_right(0x5A_u8, 0), 0x5A);
        assert_eq!(rotate_bits_left(0xFFFF_FFFF_u32, 0), 0xFFFF_FFFF);
    }

    #[test]
    fn test_rotate_scenarios() {
        // The carried-out high bit re-enters at the bottom.
        assert_eq!(rotate_bits_left(0b1000_0001_u8, 1), 0b0000_0011);
        assert_eq!(rotate_bits_right(0b0000_0011_u8, 1), 0b1000_0001);
        assert_eq!(rotate_bits_left(0x8000_u16, 1), 0x0001);
        assert_eq!(rotate_bits_right(0x0001_u16, 1), 0x8000);
        assert_eq!(rotate_bits_left(0xF000_000F_u32, 4), 0x0000_00FF);
    }

    #[test]
    fn test_rotate_preserves_all_ones_and_zero() {
        for count in 0..40 {
            assert_eq!(rotate_bits_left(0_u8, count), 0);
            assert_eq!(rotate_bits_left(u8::MAX, count), u8::MAX);
            assert_eq!(rotate_bits_right(0_u32, count), 0);
            assert_eq!(rotate_bits_right(u32::MAX, count), u32::MAX);
        }
    }
}
