//! Rank selection over the set bits of a single word.

use core::iter::FusedIterator;

use crate::Word;

/// Returns the 0-based position of the `i`-th set bit of `x`, counting ranks
/// from 1 and positions from the least significant bit.
///
/// Returns `None` if `x` has fewer than `i` set bits.
///
/// # Panics
///
/// Panics if `i` is `0` or greater than `T::BITS`. A rank outside that range
/// is a caller bug, not a lookup miss.
///
/// # Examples
///
/// ```
/// use smol_bits::select1;
///
/// let x = 0b1001_0110_u8;
/// assert_eq!(select1(x, 1), Some(1));
/// assert_eq!(select1(x, 2), Some(2));
/// assert_eq!(select1(x, 4), Some(7));
/// assert_eq!(select1(x, 5), None);
/// ```
#[inline]
#[must_use]
pub fn select1<T: Word>(x: T, i: u32) -> Option<u32> {
    assert!(
        i > 0 && i <= T::BITS,
        "rank {i} out of range 1..={}",
        T::BITS
    );
    if x.count_ones() < i {
        return None;
    }
    let mut rem = x;
    for _ in 1..i {
        rem = rem & (rem - T::one());
    }
    Some(rem.trailing_zeros())
}

/// Returns an iterator over the positions of the set bits of `x`.
///
/// ```
/// use smol_bits::ones;
///
/// let bits: Vec<u32> = ones(0b1010_0001_u16).collect();
/// assert_eq!(bits, vec![0, 5, 7]);
///
/// let rev: Vec<u32> = ones(0b1010_0001_u16).rev().collect();
/// assert_eq!(rev, vec![7, 5, 0]);
/// ```
#[inline]
pub fn ones<T: Word>(x: T) -> Ones<T> {
    Ones { word: x }
}

/// An iterator over the positions of set bits in one word.
///
/// Created by [`ones`]. Positions are yielded in ascending order, so the
/// `n`-th item (0-based) equals `select1(x, n + 1)`.
#[derive(Debug, Clone)]
pub struct Ones<T> {
    word: T,
}

impl<T: Word> Iterator for Ones<T> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.word.is_zero() {
            return None;
        }
        let pos = self.word.trailing_zeros();
        self.word = self.word & (self.word - T::one());
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.word.count_ones() as usize;
        (n, Some(n))
    }

    #[inline]
    fn count(self) -> usize {
        self.word.count_ones() as usize
    }
}

impl<T: Word> DoubleEndedIterator for Ones<T> {
    #[inline]
    fn next_back(&mut self) -> Option<u32> {
        if self.word.is_zero() {
            return None;
        }
        let pos = T::BITS - 1 - self.word.leading_zeros();
        self.word = self.word & !(T::one() << pos as usize);
        Some(pos)
    }
}

impl<T: Word> ExactSizeIterator for Ones<T> {}

impl<T: Word> FusedIterator for Ones<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_select1(mut x: u64, mut i: u32) -> Option<u32> {
        for j in 0..64 {
            if x & 1 == 1 {
                i -= 1;
                if i == 0 {
                    return Some(j);
                }
            }
            x >>= 1;
        }
        None
    }

    #[test]
    fn test_select1_known_values() {
        let values: [(u64, u32, Option<u32>); 8] = [
            (0x0000_0000_0000_0001, 1, Some(0)),
            (0x8000_0000_0000_0000, 1, Some(63)),
            (0x8000_0000_0000_0001, 1, Some(0)),
            (0x8000_0000_0000_0001, 2, Some(63)),
            (0x8000_0010_0000_0001, 2, Some(36)),
            (0x8000_0010_0000_0001, 3, Some(63)),
            (0x8000_0010_0000_0001, 4, None),
            (0, 1, None),
        ];
        for (x, i, expected) in values {
            assert_eq!(select1(x, i), expected, "select1({x:#x}, {i})");
            assert_eq!(reference_select1(x, i), expected);
        }
    }

    #[test]
    fn test_select1_full_word() {
        for i in 1..=64 {
            assert_eq!(select1(u64::MAX, i), Some(i - 1));
        }
        for i in 1..=8 {
            assert_eq!(select1(u8::MAX, i), Some(i - 1));
        }
        assert_eq!(select1(u128::MAX, 128), Some(127));
    }

    #[test]
    fn test_select1_exhaustive_u8() {
        for x in 0u8..=u8::MAX {
            for i in 1..=8 {
                assert_eq!(select1(x, i), reference_select1(u64::from(x), i));
            }
        }
    }

    #[test]
    #[should_panic(expected = "rank 0 out of range")]
    fn test_select1_rank_zero_panics() {
        let _ = select1(1u32, 0);
    }

    #[test]
    #[should_panic(expected = "rank 9 out of range 1..=8")]
    fn test_select1_rank_past_width_panics() {
        let _ = select1(0xFFu8, 9);
    }

    #[test]
    fn test_ones_both_ends() {
        let mut it = ones(0x8000_0000_0000_0101_u64);
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(63));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(8));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_ones_nth_matches_select1() {
        let x = 0xDEAD_BEEF_u32;
        for (n, pos) in ones(x).enumerate() {
            assert_eq!(select1(x, n as u32 + 1), Some(pos));
        }
        assert_eq!(ones(x).count(), x.count_ones() as usize);
    }
}
