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

//! # Bit-Primitive Traits
//!
//! By-value trait families over the fixed-width unsigned words, grouped by
//! concern.
//!
//! ## Submodules
//!
//! - `count`: `PopulationCount`, `LeadingZeroCount`, `LeadingOneCount`,
//!   `TrailingZeroCount`, `TrailingOneCount` — set-bit and run counting,
//!   each returning a count in `[0, BITS]`.
//! - `shape`: `HasSingleBit`, `BitWidth`, `BitCeil`, `BitFloor` —
//!   power-of-two and representation-width queries.
//! - `reorder`: `BitReverse`, `ByteSwap`, `BitRotateLeft`,
//!   `BitRotateRight` — order-changing transforms; byte swap starts at
//!   16 bits, rotations accept any count.
//!
//! All impls delegate to the width-generic kernels in `capstan_core`, one
//! macro-expanded line per width; the `u64` impls sit behind the `word64`
//! feature.

pub mod count;
pub mod reorder;
pub mod shape;
