//! Fixed-width word arithmetic for the SHA-2 family.
//!
//! FIPS 180-4 defines SHA-224/256 over 32-bit words and SHA-384/512 over
//! 64-bit words; apart from the width, the schedule expansion and the
//! compression loop are the same algorithm. This trait captures the handful
//! of operations the standard uses so the engine can be written once and
//! monomorphized for both widths.

use core::ops::{BitAnd, BitXor, Not};

/// An unsigned word of the width used by a SHA-2 variant.
///
/// Addition wraps modulo 2^width. Rotation and shift amounts always come
/// from the fixed per-width constants in [`super::params`], which keeps
/// them inside `0 < n < BITS`.
pub(crate) trait Word:
    Copy + BitAnd<Output = Self> + BitXor<Output = Self> + Not<Output = Self> + 'static
{
    /// Word width in bits.
    const BITS: u32;
    /// Word width in bytes.
    const BYTES: usize;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn rotate_right(self, n: u32) -> Self;
    fn shift_right(self, n: u32) -> Self;

    /// Read one big-endian word; `bytes` must be exactly `BYTES` long.
    fn from_be_slice(bytes: &[u8]) -> Self;
    /// Write the word big-endian; `out` must be exactly `BYTES` long.
    fn write_be(self, out: &mut [u8]);
}

impl Word for u32 {
    const BITS: u32 = 32;
    const BYTES: usize = 4;

    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    fn rotate_right(self, n: u32) -> Self {
        u32::rotate_right(self, n)
    }

    fn shift_right(self, n: u32) -> Self {
        self >> n
    }

    fn from_be_slice(bytes: &[u8]) -> Self {
        let mut v = 0u32;
        for &b in bytes {
            v = (v << 8) | u32::from(b);
        }
        v
    }

    fn write_be(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_be_bytes());
    }
}

impl Word for u64 {
    const BITS: u32 = 64;
    const BYTES: usize = 8;

    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    fn rotate_right(self, n: u32) -> Self {
        u64::rotate_right(self, n)
    }

    fn shift_right(self, n: u32) -> Self {
        self >> n
    }

    fn from_be_slice(bytes: &[u8]) -> Self {
        let mut v = 0u64;
        for &b in bytes {
            v = (v << 8) | u64::from(b);
        }
        v
    }

    fn write_be(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_add_wraps_silently() {
        assert_eq!(Word::wrapping_add(u32::MAX, 1u32), 0);
        assert_eq!(Word::wrapping_add(u64::MAX, 2u64), 1);
    }

    #[test]
    fn test_rotate_differs_from_shift() {
        let x = 0x8000_0001u32;
        assert_eq!(Word::rotate_right(x, 1), 0xc000_0000);
        assert_eq!(Word::shift_right(x, 1), 0x4000_0000);
    }

    #[test]
    fn test_be_roundtrip() {
        let mut buf = [0u8; 8];
        Word::write_be(0x0123_4567_89ab_cdefu64, &mut buf);
        assert_eq!(buf, [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
        assert_eq!(u64::from_be_slice(&buf), 0x0123_4567_89ab_cdef);
    }
}
