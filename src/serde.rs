//! Serde implementations for `MortonKey`.
//!
//! By default a key serializes as its raw merged `u64`. The [`coords`]
//! module serializes it as an `(x, y)` pair instead, for formats read by
//! people or by systems that do not know the interleaving.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::MortonKey;

impl Serialize for MortonKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.raw())
    }
}

impl<'de> Deserialize<'de> for MortonKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(MortonKey::from_raw)
    }
}

/// Serde implementation serializing a [`MortonKey`] as an `(x, y)` tuple.
///
/// ```
/// # use serde::{Deserialize, Serialize};
/// use smol_bits::MortonKey;
///
/// #[derive(Serialize, Deserialize)]
/// struct Cell {
///     #[serde(with = "smol_bits::serde::coords")]
///     key: MortonKey,
/// }
/// # let _ = Cell { key: MortonKey::new(1, 2) };
/// ```
pub mod coords {
    use super::*;

    /// Serialize the key as an `(x, y)` tuple.
    pub fn serialize<S>(key: &MortonKey, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        key.coords().serialize(serializer)
    }

    /// Deserialize the key from an `(x, y)` tuple.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<MortonKey, D::Error>
    where
        D: Deserializer<'de>,
    {
        <(u32, u32)>::deserialize(deserializer).map(MortonKey::from)
    }
}
