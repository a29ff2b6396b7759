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

//! # Width-Generic Bit Kernels
//!
//! Branch-light implementations of the classic bit tricks, each written
//! once and instantiated per width through a `const BITS: u32` parameter
//! of 8, 16, 32, or 64. A word travels in the low `BITS` bits of a `u64`
//! lane; the unused high bits must be zero. Every width-dependent constant
//! (field masks, swap-group masks, the horizontal-sum multiplier) is
//! derived from the lane mask by a division identity, so no per-width
//! constant tables exist to drift apart.
//!
//! All kernels are `const fn` and debug-assert both the supported width
//! and the zero high bits; release builds carry no checks.
//!
//! ## Highlights
//!
//! - `population_count`: SWAR parallel bit count, O(log BITS) operations.
//! - `leading_zeros` / `trailing_zeros` and their one-counting duals,
//!   built on smearing plus the population count.
//! - `has_single_bit`, `bit_width`, `bit_ceil`, `bit_floor` shape queries.
//! - `bit_reverse`, `byte_swap`, `rotate_left`, `rotate_right` reordering.

/// Returns the all-ones mask of a `bits`-wide lane.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::lane_mask(8), 0xFF);
/// assert_eq!(swar::lane_mask(64), u64::MAX);
/// ```
#[inline(always)]
pub const fn lane_mask(bits: u32) -> u64 {
    debug_assert!(matches!(bits, 8 | 16 | 32 | 64));
    if bits == 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Counts the set bits of a `BITS`-wide word, yielding a value in
/// `[0, BITS]`.
///
/// SWAR parallel bit count: fold adjacent 1-bit counts into 2-bit, 4-bit,
/// and 8-bit field sums with mask-shift-adds, then finish the horizontal
/// sum with one multiply by the repeating-byte constant and take the top
/// lane byte. Branch-free.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::population_count::<8>(0b1011_0010), 4);
/// assert_eq!(swar::population_count::<32>(0xFFFF_FFFF), 32);
/// assert_eq!(swar::population_count::<32>(0), 0);
/// ```
#[inline]
pub const fn population_count<const BITS: u32>(x: u64) -> u32 {
    debug_assert!(x <= lane_mask(BITS));

    let mask = lane_mask(BITS);
    // Field masks fall out of the lane mask: 0x55.. selects the low bit of
    // each pair, 0x33.. each 2-bit field, 0x0f.. each nibble, and 0x01..
    // is the horizontal-sum multiplier.
    let m1 = mask / 3;
    let m2 = mask / 5;
    let m4 = mask / 17;
    let h01 = mask / 255;

    let mut v = x - ((x >> 1) & m1);
    v = (v & m2) + ((v >> 2) & m2);
    v = (v + (v >> 4)) & m4;
    // The multiply may carry out of the lane; wrap and re-mask before
    // extracting the top byte.
    ((v.wrapping_mul(h01) & mask) >> (BITS - 8)) as u32
}

/// Counts the zero bits above the highest set bit, `BITS` for zero input.
///
/// Smears the highest set bit through every lower position, leaving
/// exactly `bit_width(x)` ones; the zero count is what remains of the
/// lane.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::leading_zeros::<8>(0b0001_0000), 3);
/// assert_eq!(swar::leading_zeros::<16>(0), 16);
/// assert_eq!(swar::leading_zeros::<32>(1), 31);
/// ```
#[inline]
pub const fn leading_zeros<const BITS: u32>(x: u64) -> u32 {
    debug_assert!(x <= lane_mask(BITS));

    let mut v = x;
    let mut shift = 1;
    while shift < BITS {
        v |= v >> shift;
        shift <<= 1;
    }
    BITS - population_count::<BITS>(v)
}

/// Counts the run of one bits starting at the highest bit, `BITS` for an
/// all-ones input.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::leading_ones::<8>(0b1110_0001), 3);
/// assert_eq!(swar::leading_ones::<8>(0xFF), 8);
/// assert_eq!(swar::leading_ones::<32>(0), 0);
/// ```
#[inline]
pub const fn leading_ones<const BITS: u32>(x: u64) -> u32 {
    debug_assert!(x <= lane_mask(BITS));
    leading_zeros::<BITS>(!x & lane_mask(BITS))
}

/// Counts the zero bits below the lowest set bit, `BITS` for zero input.
///
/// Mirror image of [`leading_zeros`]: the lowest set bit is smeared
/// upward with left shifts, re-masked to the lane after each pass.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::trailing_zeros::<8>(0b0001_1000), 3);
/// assert_eq!(swar::trailing_zeros::<16>(0), 16);
/// assert_eq!(swar::trailing_zeros::<32>(1), 0);
/// ```
#[inline]
pub const fn trailing_zeros<const BITS: u32>(x: u64) -> u32 {
    debug_assert!(x <= lane_mask(BITS));

    let mask = lane_mask(BITS);
    let mut v = x;
    let mut shift = 1;
    while shift < BITS {
        v = (v | (v << shift)) & mask;
        shift <<= 1;
    }
    BITS - population_count::<BITS>(v)
}

/// Counts the run of one bits starting at the lowest bit, `BITS` for an
/// all-ones input.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::trailing_ones::<8>(0b0010_0111), 3);
/// assert_eq!(swar::trailing_ones::<8>(0xFF), 8);
/// assert_eq!(swar::trailing_ones::<32>(0), 0);
/// ```
#[inline]
pub const fn trailing_ones<const BITS: u32>(x: u64) -> u32 {
    debug_assert!(x <= lane_mask(BITS));
    trailing_zeros::<BITS>(!x & lane_mask(BITS))
}

/// Returns `true` iff exactly one bit of the word is set; zero input is
/// `false`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert!(swar::has_single_bit::<8>(0b0100_0000));
/// assert!(!swar::has_single_bit::<8>(0b0100_0001));
/// assert!(!swar::has_single_bit::<8>(0));
/// ```
#[inline]
pub const fn has_single_bit<const BITS: u32>(x: u64) -> bool {
    debug_assert!(x <= lane_mask(BITS));
    x != 0 && (x & (x - 1)) == 0
}

/// Returns the minimum number of bits needed to represent the value;
/// zero input yields 0.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::bit_width::<32>(17), 5);
/// assert_eq!(swar::bit_width::<32>(0), 0);
/// assert_eq!(swar::bit_width::<8>(0xFF), 8);
/// ```
#[inline]
pub const fn bit_width<const BITS: u32>(x: u64) -> u32 {
    debug_assert!(x <= lane_mask(BITS));
    BITS - leading_zeros::<BITS>(x)
}

/// Rounds up to the smallest power of two greater than or equal to the
/// input; inputs 0 and 1 both yield 1.
///
/// When the true ceiling exceeds the top power of two of the width (for
/// 8 bits: any input above 128), the increment wraps modulo `2^BITS` and
/// the result is 0. The wrap is silent and deliberate, matching the
/// standard bit-ceiling facilities this kernel mirrors; callers that can
/// see such inputs must range-check first.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::bit_ceil::<32>(17), 32);
/// assert_eq!(swar::bit_ceil::<32>(32), 32);
/// assert_eq!(swar::bit_ceil::<8>(0), 1);
/// assert_eq!(swar::bit_ceil::<8>(200), 0); // true ceiling 256 wraps
/// ```
#[inline]
pub const fn bit_ceil<const BITS: u32>(x: u64) -> u64 {
    debug_assert!(x <= lane_mask(BITS));

    if x <= 1 {
        return 1;
    }
    let mut v = x - 1;
    let mut shift = 1;
    while shift < BITS {
        v |= v >> shift;
        shift <<= 1;
    }
    v.wrapping_add(1) & lane_mask(BITS)
}

/// Rounds down to the largest power of two less than or equal to the
/// input; zero input yields 0.
///
/// Smears the highest set bit downward, then strips everything below it.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::bit_floor::<32>(17), 16);
/// assert_eq!(swar::bit_floor::<32>(1), 1);
/// assert_eq!(swar::bit_floor::<32>(0), 0);
/// ```
#[inline]
pub const fn bit_floor<const BITS: u32>(x: u64) -> u64 {
    debug_assert!(x <= lane_mask(BITS));

    let mut v = x;
    let mut shift = 1;
    while shift < BITS {
        v |= v >> shift;
        shift <<= 1;
    }
    v - (v >> 1)
}

// Shared swap ladder for bit_reverse and byte_swap: exchange adjacent
// groups of `group` bits at geometrically doubling sizes. The group mask
// selecting the low half of each pair is lane_mask / (2^group + 1).
#[inline]
const fn reverse_groups(x: u64, bits: u32, start_group: u32) -> u64 {
    let mask = lane_mask(bits);
    let mut v = x;
    let mut group = start_group;
    while group < bits {
        let field = mask / ((1u64 << group) + 1);
        v = ((v >> group) & field) | ((v & field) << group);
        group <<= 1;
    }
    v
}

/// Reverses the bit order of the word: bit 0 trades places with bit
/// `BITS - 1`, bit 1 with `BITS - 2`, and so on. An involution.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::bit_reverse::<8>(0b1100_0001), 0b1000_0011);
/// assert_eq!(swar::bit_reverse::<16>(0x0001), 0x8000);
/// assert_eq!(swar::bit_reverse::<8>(swar::bit_reverse::<8>(0xA7)), 0xA7);
/// ```
#[inline]
pub const fn bit_reverse<const BITS: u32>(x: u64) -> u64 {
    debug_assert!(x <= lane_mask(BITS));
    reverse_groups(x, BITS, 1)
}

/// Reverses the byte order of the word. Defined for 16, 32, and 64 bit
/// widths; a single byte has no swap to perform.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::byte_swap::<16>(0x1234), 0x3412);
/// assert_eq!(swar::byte_swap::<32>(0x1234_5678), 0x7856_3412);
/// ```
#[inline]
pub const fn byte_swap<const BITS: u32>(x: u64) -> u64 {
    debug_assert!(BITS >= 16);
    debug_assert!(x <= lane_mask(BITS));
    reverse_groups(x, BITS, 8)
}

/// Rotates the word left by `count` positions, circularly.
///
/// The count is reduced modulo the width first, so any `count` is valid:
/// rotating by 0 or by a multiple of `BITS` is the identity.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::rotate_left::<8>(0b1000_0001, 1), 0b0000_0011);
/// assert_eq!(swar::rotate_left::<8>(0xAB, 8), 0xAB);
/// assert_eq!(swar::rotate_left::<32>(0x8000_0000, 1), 1);
/// ```
#[inline]
pub const fn rotate_left<const BITS: u32>(x: u64, count: u32) -> u64 {
    debug_assert!(x <= lane_mask(BITS));

    let c = count & (BITS - 1);
    // (BITS - c) & (BITS - 1) sends c = 0 to a zero counter-shift instead
    // of a full-width one.
    ((x << c) | (x >> ((BITS - c) & (BITS - 1)))) & lane_mask(BITS)
}

/// Rotates the word right by `count` positions, circularly.
///
/// The count is reduced modulo the width first, so any `count` is valid.
/// Inverse of [`rotate_left`] for the same count.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::swar;
/// assert_eq!(swar::rotate_right::<8>(0b0000_0011, 1), 0b1000_0001);
/// assert_eq!(swar::rotate_right::<16>(0x0001, 1), 0x8000);
/// ```
#[inline]
pub const fn rotate_right<const BITS: u32>(x: u64, count: u32) -> u64 {
    debug_assert!(x <= lane_mask(BITS));

    let c = count & (BITS - 1);
    ((x >> c) | (x << ((BITS - c) & (BITS - 1)))) & lane_mask(BITS)
}
