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

//! # Word Trait
//!
//! The [`Word`] trait bundles every per-width capability of this crate
//! into a single bound, so generic code can ask for "an unsigned machine
//! word" once instead of repeating a dozen trait names.
//!
//! # Motivation
//!
//! Algorithms that walk bitsets or pack indices rarely care which width
//! they run at. A single composed bound keeps their signatures short and
//! guarantees the full operation set is available.
//!
//! Two capabilities are intentionally excluded:
//!
//! - [`ByteSwap`](crate::bits::reorder::ByteSwap) exists only for
//!   multi-byte widths, so including it would evict `u8`.
//! - [`NarrowingAdd`](crate::ckd::add::NarrowingAdd) is a property of
//!   narrowing destinations, not of words as such.
//!
//! With the `word64` feature disabled the trait covers `u8`, `u16` and
//! `u32`; with it enabled (the default), `u64` as well.

use crate::bits::count::{
    LeadingOneCount, LeadingZeroCount, PopulationCount, TrailingOneCount, TrailingZeroCount,
};
use crate::bits::reorder::{BitReverse, BitRotateLeft, BitRotateRight};
use crate::bits::shape::{BitCeil, BitFloor, BitWidth, HasSingleBit};
use num_traits::PrimInt;

/// A fixed-width unsigned machine word supporting the full bit
/// manipulation surface of this crate.
///
/// The trait is blanket-implemented for every type carrying all of its
/// constituent capabilities, so it never needs to be implemented by
/// hand.
///
/// # Examples
///
/// ```rust
/// # use capstan_bits::word::Word;
/// fn describe<W: Word>(x: W) -> (u32, bool) {
///     (x.population_count(), x.has_single_bit())
/// }
///
/// assert_eq!(describe(0x80_u8), (1, true));
/// assert_eq!(describe(0xFF00_u16), (8, false));
/// assert_eq!(describe(0_u32), (0, false));
/// ```
pub trait Word:
    PrimInt
    + PopulationCount
    + LeadingZeroCount
    + LeadingOneCount
    + TrailingZeroCount
    + TrailingOneCount
    + HasSingleBit
    + BitWidth
    + BitCeil
    + BitFloor
    + BitReverse
    + BitRotateLeft
    + BitRotateRight
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

impl<T> Word for T where
    T: PrimInt
        + PopulationCount
        + LeadingZeroCount
        + LeadingOneCount
        + TrailingZeroCount
        + TrailingOneCount
        + HasSingleBit
        + BitWidth
        + BitCeil
        + BitFloor
        + BitReverse
        + BitRotateLeft
        + BitRotateRight
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------
    // Helper functions.
    // -------------------------------------------------------------------

    fn check_boundary_values<W: Word>() {
        assert_eq!(W::zero().population_count(), 0);
        assert_eq!(W::zero().bit_width(), 0);
        assert!(!W::zero().has_single_bit());
        assert!(W::one().has_single_bit());
        assert_eq!(W::one().bit_width(), 1);
        assert_eq!(W::max_value().bit_reverse(), W::max_value());
        assert_eq!(W::max_value().rotate_bits_left(5), W::max_value());
    }

    fn check_round_trips<W: Word>(x: W) {
        assert_eq!(x.bit_reverse().bit_reverse(), x);
        assert_eq!(x.rotate_bits_left(3).rotate_bits_right(3), x);
        assert!(x.bit_floor().population_count() <= 1);
    }

    // -------------------------------------------------------------------
    // The composed bound works at every width.
    // -------------------------------------------------------------------

    #[test]
    fn test_word_boundary_values_all_widths() {
        check_boundary_values::<u8>();
        check_boundary_values::<u16>();
        check_boundary_values::<u32>();
        #[cfg(feature = "word64")]
        check_boundary_values::<u64>();
    }

    #[test]
    fn test_word_round_trips_all_widths() {
        check_round_trips(0xA5_u8);
        check_round_trips(0xBEEF_u16);
        check_round_trips(0xDEAD_BEEF_u32);
        #[cfg(feature = "word64")]
        check_round_trips(0xDEAD_BEEF_CAFE_F00D_u64);
    }

    #[test]
    fn test_word_agrees_with_prim_int_views() {
        fn check<W: Word>(x: W) {
            assert_eq!(x.population_count(), x.count_ones());
            assert_eq!(x.leading_zero_count(), x.leading_zeros());
            assert_eq!(x.trailing_zero_count(), x.trailing_zeros());
        }
        check(0xA5_u8);
        check(0x0F0F_u16);
        check(0x1234_5678_u32);
        #[cfg(feature = "word64")]
        check(0x0123_4567_89AB_CDEF_u64);
    }
}
