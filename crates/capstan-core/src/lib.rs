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

//! # Capstan Core
//!
//! Width-generic, compile-time-evaluable bit-manipulation and
//! checked-arithmetic kernels for the Capstan crates. Everything here is a
//! pure `const fn`: results can seed `const` items, array lengths, and other
//! constant contexts, while the trait-based per-type surface lives in
//! `capstan-bits`.
//!
//! ## Modules
//!
//! - `num`: The algorithmic core. `num::swar` holds the branch-light bit
//!   kernels (population count, run counters, power-of-two rounding,
//!   reversal, byte swap, rotation) written once over a `const BITS`
//!   width parameter; `num::overflow` holds maximum-width addition with
//!   explicit overflow reporting.
//! - `math`: Scalar comparison helpers (`min_val`, `max_val`, `clamp_val`,
//!   `signum_val`) generic over ordered values.
//! - `utils`: Size-checked array allocation that refuses to allocate when
//!   the byte-size computation would overflow `usize`.
//!
//! ## Purpose
//!
//! Ports and embedded targets do not always get modern standard-library
//! bit facilities; these kernels provide the same semantics from first
//! principles, with the width-dependent constants derived from the width
//! instead of hand-copied per type.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
pub mod utils;
