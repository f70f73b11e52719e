//! `MortonKey` struct: a two-dimensional Z-order key.

use core::fmt;

use crate::shuffle::{bitwise_merge, bitwise_split};

/// Bits of the merged key that belong to the x coordinate.
const X_MASK: u64 = 0x5555_5555_5555_5555;
/// Bits of the merged key that belong to the y coordinate.
const Y_MASK: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// A pair of 32-bit coordinates interleaved into one 64-bit key.
///
/// The key is exactly [`bitwise_merge`]`(x, y)`: `x` on the even bits, `y`
/// on the odd bits. Keys order along the Z-order curve, so points that are
/// close in space tend to be close in key order, which is what spatial
/// indexes sorted by key rely on.
///
/// # Examples
///
/// ```
/// use smol_bits::MortonKey;
///
/// let key = MortonKey::new(3, 5);
/// assert_eq!(key.coords(), (3, 5));
/// assert_eq!(key.raw(), 0b10_0111);
///
/// // Neighbours along an axis without decoding
/// assert_eq!(key.next_x(), MortonKey::new(4, 5));
/// assert_eq!(key.prev_y(), MortonKey::new(3, 4));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MortonKey(u64);

impl MortonKey {
    /// Interleaves `x` and `y` into a key.
    #[inline]
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self(bitwise_merge(x, y))
    }

    /// Wraps an already merged 64-bit key.
    #[inline(always)]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the merged 64-bit key.
    #[inline(always)]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Splits the key back into `(x, y)`.
    #[inline]
    #[must_use]
    pub const fn coords(self) -> (u32, u32) {
        bitwise_split(self.0)
    }

    /// The x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(self) -> u32 {
        self.coords().0
    }

    /// The y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(self) -> u32 {
        self.coords().1
    }

    /// The key of `(x + 1, y)`, wrapping `x` at `u32::MAX`.
    #[inline]
    #[must_use]
    pub const fn next_x(self) -> Self {
        Self(axis_inc(self.0, X_MASK))
    }

    /// The key of `(x - 1, y)`, wrapping `x` at zero.
    #[inline]
    #[must_use]
    pub const fn prev_x(self) -> Self {
        Self(axis_dec(self.0, X_MASK))
    }

    /// The key of `(x, y + 1)`, wrapping `y` at `u32::MAX`.
    #[inline]
    #[must_use]
    pub const fn next_y(self) -> Self {
        Self(axis_inc(self.0, Y_MASK))
    }

    /// The key of `(x, y - 1)`, wrapping `y` at zero.
    #[inline]
    #[must_use]
    pub const fn prev_y(self) -> Self {
        Self(axis_dec(self.0, Y_MASK))
    }
}

// Filling the foreign bits with ones lets the carry ripple across them.
#[inline(always)]
const fn axis_inc(key: u64, mask: u64) -> u64 {
    ((key | !mask).wrapping_add(1) & mask) | (key & !mask)
}

#[inline(always)]
const fn axis_dec(key: u64, mask: u64) -> u64 {
    ((key & mask).wrapping_sub(1) & mask) | (key & !mask)
}

impl From<(u32, u32)> for MortonKey {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

impl From<MortonKey> for (u32, u32) {
    fn from(key: MortonKey) -> Self {
        key.coords()
    }
}

impl From<u64> for MortonKey {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<MortonKey> for u64 {
    fn from(key: MortonKey) -> Self {
        key.raw()
    }
}

impl fmt::Debug for MortonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.coords();
        f.debug_struct("MortonKey")
            .field("x", &x)
            .field("y", &y)
            .finish()
    }
}

impl fmt::Display for MortonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Binary for MortonKey {
    /// Formats the interleaved key; flags such as `#` and width apply to the
    /// raw `u64`.
    ///
    /// ```
    /// use smol_bits::MortonKey;
    ///
    /// assert_eq!(format!("{:#b}", MortonKey::new(1, 1)), "0b11");
    /// assert_eq!(format!("{:08b}", MortonKey::new(0, 3)), "00001010");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for MortonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
