//! The [`Word`] trait and the width-generic counting helpers built on it.

use num_traits::{PrimInt, Unsigned, WrappingAdd};

use crate::macros::impl_word;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A fixed-width unsigned machine integer.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`. The trait
/// is sealed; every primitive in this crate that is generic over width is
/// generic over `Word`.
///
/// # Examples
///
/// ```
/// use smol_bits::Word;
///
/// assert_eq!(0b1011_0100_u8.select1(2), Some(4));
/// assert_eq!(0x0F_u16.used_bits(), 4);
/// assert_eq!(1_u64.hi_zero_bits(), 63);
/// ```
pub trait Word: PrimInt + Unsigned + WrappingAdd + sealed::Sealed {
    /// Width of the type in bits.
    const BITS: u32;

    /// Position of the `i`-th set bit, see [`select1`](crate::select1).
    #[inline(always)]
    fn select1(self, i: u32) -> Option<u32> {
        crate::select::select1(self, i)
    }

    /// Number of bits needed to represent the value; `0` for zero.
    #[inline(always)]
    fn used_bits(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Number of zero bits above the highest set bit; the full width for
    /// zero.
    #[inline(always)]
    fn hi_zero_bits(self) -> u32 {
        self.leading_zeros()
    }
}

impl_word!(u8, u16, u32, u64, u128, usize);

/// Counts the zero bits on the most significant side of a 32-bit value.
///
/// Zero yields 32.
///
/// ```
/// use smol_bits::num_hi_zero_bits_32;
///
/// assert_eq!(num_hi_zero_bits_32(0), 32);
/// assert_eq!(num_hi_zero_bits_32(1), 31);
/// assert_eq!(num_hi_zero_bits_32(u32::MAX), 0);
/// ```
#[inline(always)]
#[must_use]
pub const fn num_hi_zero_bits_32(n: u32) -> u32 {
    n.leading_zeros()
}

/// Counts the zero bits on the most significant side of a 64-bit value.
///
/// Zero yields 64.
#[inline(always)]
#[must_use]
pub const fn num_hi_zero_bits_64(n: u64) -> u32 {
    n.leading_zeros()
}

/// Width-generic leading zero count. Zero yields `T::BITS`.
#[inline(always)]
#[must_use]
pub fn num_hi_zero_bits<T: Word>(n: T) -> u32 {
    n.hi_zero_bits()
}

/// Number of bits required to store `n`, which is not its number of ones.
///
/// `0b0000_1000` needs 4 bits. Zero needs none, so unlike
/// [`num_hi_zero_bits_64`] the zero case is `0` and not `64`.
///
/// ```
/// use smol_bits::num_used_bits;
///
/// assert_eq!(num_used_bits(0), 0);
/// assert_eq!(num_used_bits(1), 1);
/// assert_eq!(num_used_bits(0b1000), 4);
/// assert_eq!(num_used_bits(u64::MAX), 64);
/// ```
#[inline(always)]
#[must_use]
pub const fn num_used_bits(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// `floor(log2(x))`, with `0` returned for `x == 0`.
///
/// The zero result carries no meaning; it only keeps the function total.
///
/// ```
/// use smol_bits::floor_log;
///
/// assert_eq!(floor_log(1), 0);
/// assert_eq!(floor_log(8), 3);
/// assert_eq!(floor_log(9), 3);
/// assert_eq!(floor_log(0), 0);
/// ```
#[inline(always)]
#[must_use]
pub const fn floor_log(x: u64) -> u8 {
    if x == 0 {
        0
    } else {
        (num_used_bits(x) - 1) as u8
    }
}
