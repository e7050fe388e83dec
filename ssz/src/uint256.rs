use byteorder::ByteOrder as _;
use derive_more::{Display, From, Into};
use ethereum_types::U256 as RawUint256;

use crate::{
    consts::Endianness,
    error::ReadError,
    porcelain::{SszRead, SszSize, SszWrite},
    size::Size,
};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Debug, From, Into, Display)]
pub struct Uint256(RawUint256);

impl SszSize for Uint256 {
    const SIZE: Size = Size::Fixed {
        size: size_of::<Self>(),
    };
}

impl<C> SszRead<C> for Uint256 {
    #[inline]
    fn from_ssz_unchecked(_context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        let mut raw = RawUint256::default();

        for (chunk, limb) in bytes.chunks_exact(size_of::<u64>()).zip(raw.0.iter_mut()) {
            *limb = Endianness::read_u64(chunk);
        }

        Ok(Self(raw))
    }
}

impl SszWrite for Uint256 {
    #[inline]
    fn write_fixed(&self, bytes: &mut [u8]) {
        for (chunk, limb) in bytes.chunks_exact_mut(size_of::<u64>()).zip(self.0 .0) {
            Endianness::write_u64(chunk, limb);
        }
    }
}

impl Uint256 {
    // `<RawUint256 as From<u64>>::from` is not `const`.
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        let mut raw = RawUint256::zero();
        raw.0[0] = value;
        Self(raw)
    }

    #[must_use]
    pub fn from_le_bytes(bytes: [u8; size_of::<Self>()]) -> Self {
        Self(RawUint256::from_little_endian(&bytes))
    }

    #[must_use]
    pub fn to_le_bytes(self) -> [u8; size_of::<Self>()] {
        let mut bytes = [0; size_of::<Self>()];
        self.write_fixed(&mut bytes);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use crate::porcelain::SszReadDefault as _;

    use super::*;

    #[test]
    fn uint256_is_little_endian_in_ssz() -> Result<(), ReadError> {
        let mut bytes = [0; 32];
        bytes[0] = 7;
        bytes[1] = 1;

        assert_eq!(Uint256::from_ssz_default(bytes)?, Uint256::from_u64(263));
        assert_eq!(Uint256::from_u64(263).to_le_bytes(), bytes);

        Ok(())
    }
}
