//! Small, width-generic bit manipulation primitives.
//!
//! This crate collects the word-level tricks that bitmap, succinct and
//! spatial-index code keeps re-deriving, with their edge cases pinned down:
//!
//! - **Rank selection**: [`select1`] finds the position of the i-th set bit,
//!   [`ones`] iterates over all of them
//! - **Zig-zag mapping**: [`zigzag_encode`] / [`zigzag_decode`], with the
//!   signed / unsigned direction enforced by the type system
//! - **Perfect shuffle**: [`perfect_shuffle`] / [`perfect_unshuffle`] of the
//!   halves of a `u32`
//! - **Bitwise merge**: [`bitwise_merge`] / [`bitwise_split`] of two `u32`
//!   into one `u64`, wrapped by [`MortonKey`]
//! - **Packed bits**: [`get_bit`], [`set_bit_to_0`], [`set_bit_to_1`] on byte
//!   buffers
//! - **Counting**: [`num_hi_zero_bits_32`], [`num_hi_zero_bits_64`],
//!   [`num_used_bits`], [`floor_log`]
//! - **Masks**: [`full_mask`], [`is_pow2_minus1`]
//!
//! Everything is `no_std`, allocation free, and most functions are `const`.
//!
//! # Examples
//!
//! ```
//! use smol_bits::{MortonKey, bitwise_merge, full_mask, select1, zigzag_encode};
//!
//! // Position of the third set bit
//! assert_eq!(select1(0b1011_0010_u8, 3), Some(5));
//!
//! // Small signed deltas become small unsigned values
//! assert_eq!(zigzag_encode(-3i32), 5);
//!
//! // x on the even bits, y on the odd bits
//! assert_eq!(bitwise_merge(0b11, 0b01), 0b0111);
//! let key = MortonKey::new(0b11, 0b01);
//! assert_eq!(key.coords(), (0b11, 0b01));
//!
//! // A full-width mask is not a shift by 64
//! assert_eq!(full_mask(64), u64::MAX);
//! ```
//!
//! # Preconditions
//!
//! Rank and width arguments outside their documented range are programming
//! errors and panic ([`select1`], [`full_mask`]). A rank larger than the
//! number of set bits is an ordinary miss and returns `None`. Bit offsets
//! beyond a byte buffer panic through slice indexing.
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` for [`MaskWidthError`]
//! - `serde`: serialization of [`MortonKey`]
//! - `rkyv`: zero-copy archiving of [`MortonKey`]

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

// Module declarations
mod bytes;
mod macros;
mod mask;
mod morton;
mod select;
mod shuffle;
mod word;
mod zigzag;

#[cfg(feature = "rkyv")]
pub mod rkyv;

#[cfg(feature = "rkyv")]
pub use self::rkyv::{ArchivedMortonKey, MortonKeyResolver};

#[cfg(feature = "serde")]
pub mod serde;

// Re-exports
pub use bytes::{get_bit, set_bit, set_bit_to_0, set_bit_to_1, toggle_bit};
pub use mask::{MaskWidthError, full_mask, is_pow2_minus1, is_pow2_minus1_64, try_full_mask};
pub use morton::MortonKey;
pub use select::{Ones, ones, select1};
pub use shuffle::{bitwise_merge, bitwise_split, perfect_shuffle, perfect_unshuffle};
pub use word::{
    Word, floor_log, num_hi_zero_bits, num_hi_zero_bits_32, num_hi_zero_bits_64, num_used_bits,
};
pub use zigzag::{ZigZagDecode, ZigZagEncode, zigzag_decode, zigzag_encode};
