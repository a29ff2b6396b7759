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

//! # Numeric Kernels
//!
//! The algorithmic core of the workspace: branch-light bit manipulation and
//! overflow-aware addition, all as `const fn`s usable in constant contexts.
//!
//! ## Submodules
//!
//! - `swar`: Bit kernels (population count, leading/trailing run counters,
//!   single-bit test, bit width, power-of-two ceiling/floor, bit reversal,
//!   byte swap, rotation) written once, generic over a `const BITS: u32`
//!   width of 8, 16, 32, or 64, with every width-dependent mask derived
//!   arithmetically from the width.
//! - `overflow`: Maximum-width (`i128`/`u128`) addition returning the
//!   wrapped sum together with an explicit overflow flag, the building
//!   block for the narrowing checked additions in `capstan-bits`.
//!
//! ## Motivation
//!
//! Hand-copying each trick per width invites the constants to drift apart.
//! A single generic body per algorithm, with its masks derived from the
//! width and tested exhaustively at the narrow widths, removes the failure
//! mode.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod overflow;
pub mod swar;
