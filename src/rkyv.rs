//! Rkyv implementation for `MortonKey`.

use rkyv::{Archive, Deserialize, Place, Serialize, rancor::Fallible};

use crate::MortonKey;

/// The archived version of MortonKey: the raw key as a little-endian `u64`.
pub type ArchivedMortonKey = rkyv::rend::u64_le;

/// The resolver for MortonKey.
pub type MortonKeyResolver = <u64 as Archive>::Resolver;

impl Archive for MortonKey {
    type Archived = ArchivedMortonKey;
    type Resolver = MortonKeyResolver;

    #[inline]
    fn resolve(&self, resolver: Self::Resolver, out: Place<Self::Archived>) {
        self.raw().resolve(resolver, out);
    }
}

impl<S: Fallible + ?Sized> Serialize<S> for MortonKey {
    #[inline]
    fn serialize(&self, serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        self.raw().serialize(serializer)
    }
}

impl<D: Fallible + ?Sized> Deserialize<MortonKey, D> for ArchivedMortonKey {
    #[inline]
    fn deserialize(&self, _deserializer: &mut D) -> Result<MortonKey, D::Error> {
        Ok(MortonKey::from_raw(self.to_native()))
    }
}
