//! Perfect shuffle permutations and bitwise merge / split of word pairs.
//!
//! The shuffle is a four stage swap network (blocks of 8, 4, 2, then 1
//! bits). Each stage exchanges the two inner quarters of every block, so
//! after the last stage the low half of the input sits on the even bit
//! positions and the high half on the odd ones.

/// One stage of the network: swap the bits selected by `mask` with the bits
/// `shift` positions above them, keeping the bits in `keep`.
#[inline(always)]
const fn swap_stage(x: u32, mask: u32, keep: u32, shift: u32) -> u32 {
    ((x & mask) << shift) | ((x >> shift) & mask) | (x & keep)
}

/// Interleaves the two 16-bit halves of `x`.
///
/// Output bit `2k` is bit `k` of the low half and output bit `2k + 1` is bit
/// `k` of the high half.
///
/// ```
/// use smol_bits::perfect_shuffle;
///
/// assert_eq!(perfect_shuffle(0x0000_FFFF), 0x5555_5555);
/// assert_eq!(perfect_shuffle(0xFFFF_0000), 0xAAAA_AAAA);
/// assert_eq!(perfect_shuffle(0x0001_0001), 0b11);
/// ```
#[inline]
#[must_use]
pub const fn perfect_shuffle(x: u32) -> u32 {
    let x = swap_stage(x, 0x0000_FF00, 0xFF00_00FF, 8);
    let x = swap_stage(x, 0x00F0_00F0, 0xF00F_F00F, 4);
    let x = swap_stage(x, 0x0C0C_0C0C, 0xC3C3_C3C3, 2);
    swap_stage(x, 0x2222_2222, 0x9999_9999, 1)
}

/// Inverse of [`perfect_shuffle`]: gathers the even bits into the low half
/// and the odd bits into the high half.
///
/// ```
/// use smol_bits::{perfect_shuffle, perfect_unshuffle};
///
/// assert_eq!(perfect_unshuffle(0x5555_5555), 0x0000_FFFF);
/// assert_eq!(perfect_unshuffle(perfect_shuffle(0xDEAD_BEEF)), 0xDEAD_BEEF);
/// ```
#[inline]
#[must_use]
pub const fn perfect_unshuffle(x: u32) -> u32 {
    let x = swap_stage(x, 0x2222_2222, 0x9999_9999, 1);
    let x = swap_stage(x, 0x0C0C_0C0C, 0xC3C3_C3C3, 2);
    let x = swap_stage(x, 0x00F0_00F0, 0xF00F_F00F, 4);
    swap_stage(x, 0x0000_FF00, 0xFF00_00FF, 8)
}

/// Interleaves `x` and `y` into one 64-bit word.
///
/// The bits of `x` take the even positions and the bits of `y` the odd
/// ones, each keeping its own order: for `x = x31..x0` and `y = y31..y0` the
/// result reads `y31 x31 y30 x30 .. y0 x0` from the top.
///
/// ```
/// use smol_bits::bitwise_merge;
///
/// assert_eq!(bitwise_merge(0, 0), 0);
/// assert_eq!(bitwise_merge(1, 0), 1);
/// assert_eq!(bitwise_merge(0, 1), 2);
/// assert_eq!(bitwise_merge(u32::MAX, 0), 0x5555_5555_5555_5555);
/// assert_eq!(bitwise_merge(0, u32::MAX), 0xAAAA_AAAA_AAAA_AAAA);
/// ```
#[inline]
#[must_use]
pub const fn bitwise_merge(x: u32, y: u32) -> u64 {
    let hi = perfect_shuffle((y & 0xFFFF_0000) | (x >> 16));
    let lo = perfect_shuffle(((y & 0xFFFF) << 16) | (x & 0xFFFF));
    ((hi as u64) << 32) | lo as u64
}

/// Inverse of [`bitwise_merge`]: returns `(x, y)`.
///
/// ```
/// use smol_bits::{bitwise_merge, bitwise_split};
///
/// let v = bitwise_merge(0x1234_5678, 0x9ABC_DEF0);
/// assert_eq!(bitwise_split(v), (0x1234_5678, 0x9ABC_DEF0));
/// ```
#[inline]
#[must_use]
pub const fn bitwise_split(v: u64) -> (u32, u32) {
    let hi = perfect_unshuffle((v >> 32) as u32);
    let lo = perfect_unshuffle(v as u32);
    let x = ((hi & 0xFFFF) << 16) | (lo & 0xFFFF);
    let y = (hi & 0xFFFF_0000) | (lo >> 16);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_single_bits() {
        for k in 0..16 {
            assert_eq!(perfect_shuffle(1 << k), 1 << (2 * k), "low bit {k}");
            assert_eq!(
                perfect_shuffle(1 << (16 + k)),
                1 << (2 * k + 1),
                "high bit {k}"
            );
        }
    }

    #[test]
    fn test_unshuffle_single_bits() {
        for k in 0..16 {
            assert_eq!(perfect_unshuffle(1 << (2 * k)), 1 << k);
            assert_eq!(perfect_unshuffle(1 << (2 * k + 1)), 1 << (16 + k));
        }
    }

    #[test]
    fn test_shuffle_fixed_points() {
        assert_eq!(perfect_shuffle(0), 0);
        assert_eq!(perfect_shuffle(u32::MAX), u32::MAX);
        assert_eq!(perfect_unshuffle(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_merge_single_bits() {
        for k in 0..32 {
            assert_eq!(bitwise_merge(1 << k, 0), 1 << (2 * k));
            assert_eq!(bitwise_merge(0, 1 << k), 1 << (2 * k + 1));
        }
    }

    #[test]
    fn test_merge_is_const() {
        const KEY: u64 = bitwise_merge(3, 1);
        const COORDS: (u32, u32) = bitwise_split(KEY);
        assert_eq!(KEY, 0b0111);
        assert_eq!(COORDS, (3, 1));
    }
}
