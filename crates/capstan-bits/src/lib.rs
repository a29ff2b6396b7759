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

//! # Capstan Bits
//!
//! Per-type surface of the Capstan bit primitives: one trait per operation,
//! implemented for the fixed-width unsigned words `u8`, `u16`, `u32`, and
//! `u64`, each method a thin delegation into the width-generic `const fn`
//! kernels of `capstan-core`. Code that needs results in constant contexts
//! calls the kernels directly; code that wants method syntax and generic
//! bounds uses these traits.
//!
//! ## Modules
//!
//! - `bits`: The bit-primitive trait families — counting
//!   (`PopulationCount`, leading/trailing zero and one counts), shape
//!   queries (`HasSingleBit`, `BitWidth`, `BitCeil`, `BitFloor`), and
//!   reordering (`BitReverse`, `ByteSwap`, rotations).
//! - `ckd`: Overflow-checked addition of maximum-width operands narrowed
//!   to a fixed target width (`NarrowingAdd`).
//! - `word`: The composed `Word` bound collecting the whole primitive
//!   family for generic callers.
//!
//! ## Feature flags
//!
//! - `word64` (default): exposes the `u64` impls. Disable it to omit the
//!   64-bit entry points on targets where they are unwanted; the narrower
//!   widths and the maximum-width checked additions remain available.
//!
//! Trait method names deliberately differ from the primitives' inherent
//! methods (`population_count` vs. `count_ones`, `rotate_bits_left` vs.
//! `rotate_left`), so a forgotten trait import fails to compile instead of
//! silently resolving to the intrinsic.

pub mod bits;
pub mod ckd;
pub mod word;
