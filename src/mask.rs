//! Low-bit masks and the `2^k - 1` test.

use core::fmt;

use crate::Word;

/// Error returned by [`try_full_mask`] when the requested width does not fit
/// in a `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskWidthError {
    /// More bits were requested than the mask type holds.
    TooManyBits {
        /// Maximum number of bits the mask type can hold
        max_bits: u32,
        /// Number of bits requested
        actual_bits: u32,
    },
}

impl fmt::Display for MaskWidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyBits {
                max_bits,
                actual_bits,
            } => {
                write!(
                    f,
                    "mask of {actual_bits} bits requested but the mask type can only hold {max_bits} bits"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MaskWidthError {}

/// Returns a `u64` with the low `num_bits` bits set.
///
/// `num_bits == 64` yields `u64::MAX`.
///
/// # Panics
///
/// Panics if `num_bits > 64`. Use [`try_full_mask`] when the width comes
/// from untrusted input.
///
/// ```
/// use smol_bits::full_mask;
///
/// assert_eq!(full_mask(0), 0);
/// assert_eq!(full_mask(4), 0b1111);
/// assert_eq!(full_mask(64), u64::MAX);
/// ```
#[inline]
#[must_use]
pub fn full_mask(num_bits: u32) -> u64 {
    assert!(
        num_bits <= u64::BITS,
        "mask width {num_bits} exceeds {} bits",
        u64::BITS
    );
    low_mask(num_bits)
}

/// Like [`full_mask`], but reports an oversized width as an error.
///
/// ```
/// use smol_bits::{MaskWidthError, try_full_mask};
///
/// assert_eq!(try_full_mask(8), Ok(0xFF));
/// assert_eq!(
///     try_full_mask(65),
///     Err(MaskWidthError::TooManyBits { max_bits: 64, actual_bits: 65 })
/// );
/// ```
#[inline]
pub const fn try_full_mask(num_bits: u32) -> Result<u64, MaskWidthError> {
    if num_bits > u64::BITS {
        return Err(MaskWidthError::TooManyBits {
            max_bits: u64::BITS,
            actual_bits: num_bits,
        });
    }
    Ok(low_mask(num_bits))
}

// `num_bits <= 64`; a shift by 64 is not a valid shift.
#[inline(always)]
const fn low_mask(num_bits: u32) -> u64 {
    if num_bits == u64::BITS {
        u64::MAX
    } else {
        (1 << num_bits) - 1
    }
}

/// Returns `true` if `n == 2^k - 1` for some `k >= 0`.
///
/// Zero (`k = 0`) and `T::MAX` both qualify; for `T::MAX` the increment
/// wraps to zero.
///
/// ```
/// use smol_bits::is_pow2_minus1;
///
/// assert!(is_pow2_minus1(0u64));
/// assert!(is_pow2_minus1(3u64));
/// assert!(!is_pow2_minus1(4u64));
/// assert!(is_pow2_minus1(u8::MAX));
/// ```
#[inline(always)]
#[must_use]
pub fn is_pow2_minus1<T: Word>(n: T) -> bool {
    (n & n.wrapping_add(&T::one())).is_zero()
}

/// `u64` form of [`is_pow2_minus1`], usable in const contexts.
#[inline(always)]
#[must_use]
pub const fn is_pow2_minus1_64(n: u64) -> bool {
    n & n.wrapping_add(1) == 0
}
