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

/// Computes the byte size of a `len`-element array of `T`, or `None` when
/// the product overflows `usize`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::utils::alloc::checked_array_bytes;
/// assert_eq!(checked_array_bytes::<u32>(4), Some(16));
/// assert_eq!(checked_array_bytes::<u64>(usize::MAX), None);
/// assert_eq!(checked_array_bytes::<()>(usize::MAX), Some(0));
/// ```
#[inline]
pub const fn checked_array_bytes<T>(len: usize) -> Option<usize> {
    len.checked_mul(core::mem::size_of::<T>())
}

/// Allocates a default-initialized vector of `len` elements, or `None`
/// when the byte-size computation overflows `usize` or exceeds the
/// allocator's `isize::MAX` limit.
///
/// Only the size computation is guarded here; an allocator that cannot
/// satisfy a well-sized request still aborts, as is the platform norm.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::utils::alloc::alloc_array;
/// let zeros: Vec<u32> = alloc_array(8).unwrap();
/// assert_eq!(zeros, vec![0; 8]);
/// assert_eq!(alloc_array::<u64>(usize::MAX), None);
/// ```
#[must_use]
pub fn alloc_array<T: Default + Clone>(len: usize) -> Option<Vec<T>> {
    let bytes = checked_array_bytes::<T>(len)?;
    if bytes > isize::MAX as usize {
        return None;
    }
    Some(vec![T::default(); len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_array_bytes() {
        assert_eq!(checked_array_bytes::<u8>(16), Some(16));
        assert_eq!(checked_array_bytes::<u32>(16), Some(64));
        assert_eq!(checked_array_bytes::<u8>(usize::MAX), Some(usize::MAX));
        assert_eq!(checked_array_bytes::<u16>(usize::MAX), None);
        assert_eq!(checked_array_bytes::<u64>(usize::MAX / 4), None);
    }

    #[test]
    fn test_zero_cases() {
        assert_eq!(checked_array_bytes::<u64>(0), Some(0));
        assert_eq!(checked_array_bytes::<()>(usize::MAX), Some(0));
        let empty: Vec<u32> = alloc_array(0).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_alloc_array_refuses_overflow() {
        assert_eq!(alloc_array::<u64>(usize::MAX), None);
        assert_eq!(alloc_array::<u32>(usize::MAX / 2), None);
    }

    #[test]
    fn test_alloc_array_default_initializes() {
        let values: Vec<i32> = alloc_array(5).unwrap();
        assert_eq!(values, vec![0, 0, 0, 0, 0]);
    }
}
