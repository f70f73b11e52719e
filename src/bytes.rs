//! Single-bit access on a byte buffer used as a flat bit array.
//!
//! Bit `offset` lives in byte `offset / 8` at position `offset % 8`, with
//! position 0 the least significant bit of the byte. Only that byte is read
//! or written.
//!
//! # Panics
//!
//! Every function here panics if `offset / 8` is not a valid index into the
//! buffer.

use crate::macros::bitpos;

/// Returns 1 if the bit at `offset` is set and 0 otherwise.
///
/// ```
/// use smol_bits::get_bit;
///
/// let buf = [0b0000_0100_u8, 0b1000_0000];
/// assert_eq!(get_bit(&buf, 2), 1);
/// assert_eq!(get_bit(&buf, 3), 0);
/// assert_eq!(get_bit(&buf, 15), 1);
/// ```
#[inline(always)]
#[must_use]
pub fn get_bit(buf: &[u8], offset: usize) -> u8 {
    let (byte, bit) = bitpos!(offset);
    (buf[byte] >> bit) & 1
}

/// Clears the bit at `offset`.
///
/// ```
/// use smol_bits::set_bit_to_0;
///
/// let mut buf = [0xFF_u8; 2];
/// set_bit_to_0(&mut buf, 9);
/// assert_eq!(buf, [0xFF, 0b1111_1101]);
/// ```
#[inline(always)]
pub fn set_bit_to_0(buf: &mut [u8], offset: usize) {
    let (byte, bit) = bitpos!(offset);
    buf[byte] &= !(1 << bit);
}

/// Sets the bit at `offset`.
///
/// ```
/// use smol_bits::set_bit_to_1;
///
/// let mut buf = [0_u8; 2];
/// set_bit_to_1(&mut buf, 0);
/// set_bit_to_1(&mut buf, 12);
/// assert_eq!(buf, [0b0000_0001, 0b0001_0000]);
/// ```
#[inline(always)]
pub fn set_bit_to_1(buf: &mut [u8], offset: usize) {
    let (byte, bit) = bitpos!(offset);
    buf[byte] |= 1 << bit;
}

/// Sets the bit at `offset` to `value`.
#[inline(always)]
pub fn set_bit(buf: &mut [u8], offset: usize, value: bool) {
    if value {
        set_bit_to_1(buf, offset);
    } else {
        set_bit_to_0(buf, offset);
    }
}

/// Flips the bit at `offset` and returns its new value (1 or 0).
///
/// ```
/// use smol_bits::{get_bit, toggle_bit};
///
/// let mut buf = [0_u8];
/// assert_eq!(toggle_bit(&mut buf, 5), 1);
/// assert_eq!(get_bit(&buf, 5), 1);
/// assert_eq!(toggle_bit(&mut buf, 5), 0);
/// ```
#[inline(always)]
pub fn toggle_bit(buf: &mut [u8], offset: usize) -> u8 {
    let (byte, bit) = bitpos!(offset);
    buf[byte] ^= 1 << bit;
    (buf[byte] >> bit) & 1
}
