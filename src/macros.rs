/// Split a bit offset into (byte index, bit position within byte).
macro_rules! bitpos {
    ($offset:expr) => {{
        let offset = $offset;
        (offset >> 3, (offset & 7) as u32)
    }};
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {$(
        impl crate::word::sealed::Sealed for $t {}

        impl crate::word::Word for $t {
            const BITS: u32 = <$t>::BITS;
        }
    )*};
}

macro_rules! impl_zigzag {
    ($($s:ty => $u:ty),* $(,)?) => {$(
        impl crate::word::sealed::Sealed for $s {}

        impl crate::zigzag::ZigZagEncode for $s {
            type Unsigned = $u;

            #[inline(always)]
            fn zigzag_encode(self) -> $u {
                (self.wrapping_shl(1) ^ (self >> (<$s>::BITS - 1))) as $u
            }
        }

        impl crate::zigzag::ZigZagDecode for $u {
            type Signed = $s;

            #[inline(always)]
            fn zigzag_decode(self) -> $s {
                ((self >> 1) as $s) ^ -((self & 1) as $s)
            }
        }
    )*};
}

pub(crate) use bitpos;
pub(crate) use impl_word;
pub(crate) use impl_zigzag;
