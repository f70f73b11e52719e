//! Zig-zag mapping between signed and unsigned integers.
//!
//! Small magnitudes of either sign map to small unsigned values
//! (0, -1, 1, -2, 2, ... become 0, 1, 2, 3, 4, ...), which keeps
//! variable-length encodings of signed deltas short.

use crate::{Word, macros::impl_zigzag, word::sealed::Sealed};

/// A signed integer that can be zig-zag encoded.
///
/// Only signed primitives implement this trait, so encoding an unsigned
/// value does not compile.
pub trait ZigZagEncode: Sealed + Copy {
    /// The unsigned integer of the same width.
    type Unsigned: Word;

    /// Maps `self` to `(self << 1) ^ (self >> (BITS - 1))`.
    fn zigzag_encode(self) -> Self::Unsigned;
}

/// An unsigned integer that can be zig-zag decoded.
///
/// Only unsigned primitives implement this trait, so decoding a signed value
/// does not compile.
pub trait ZigZagDecode: Word {
    /// The signed integer of the same width.
    type Signed: ZigZagEncode<Unsigned = Self>;

    /// Inverse of [`ZigZagEncode::zigzag_encode`].
    fn zigzag_decode(self) -> Self::Signed;
}

impl_zigzag!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

/// Zig-zag encodes a signed integer.
///
/// ```
/// use smol_bits::zigzag_encode;
///
/// assert_eq!(zigzag_encode(0i32), 0u32);
/// assert_eq!(zigzag_encode(-1i32), 1);
/// assert_eq!(zigzag_encode(1i32), 2);
/// assert_eq!(zigzag_encode(-2i32), 3);
/// assert_eq!(zigzag_encode(i8::MIN), u8::MAX);
/// ```
///
/// Unsigned input is rejected at compile time:
///
/// ```compile_fail
/// smol_bits::zigzag_encode(5u32);
/// ```
#[inline(always)]
#[must_use]
pub fn zigzag_encode<T: ZigZagEncode>(x: T) -> T::Unsigned {
    x.zigzag_encode()
}

/// Zig-zag decodes an unsigned integer.
///
/// ```
/// use smol_bits::zigzag_decode;
///
/// assert_eq!(zigzag_decode(4u64), 2i64);
/// assert_eq!(zigzag_decode(3u64), -2);
/// assert_eq!(zigzag_decode(u16::MAX), i16::MIN);
/// ```
///
/// ```compile_fail
/// smol_bits::zigzag_decode(-5i32);
/// ```
#[inline(always)]
#[must_use]
pub fn zigzag_decode<T: ZigZagDecode>(x: T) -> T::Signed {
    x.zigzag_decode()
}
