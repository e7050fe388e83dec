use byteorder::ByteOrder as _;

use crate::{
    consts::Endianness,
    error::ReadError,
    porcelain::{SszRead, SszSize, SszWrite},
    size::Size,
};

impl SszSize for bool {
    const SIZE: Size = Size::Fixed {
        size: size_of::<Self>(),
    };
}

impl<C> SszRead<C> for bool {
    #[inline]
    fn from_ssz_unchecked(_context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        match bytes[0] {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(ReadError::BooleanInvalid { value }),
        }
    }
}

impl SszWrite for bool {
    #[inline]
    fn write_fixed(&self, bytes: &mut [u8]) {
        bytes[0] = (*self).into();
    }
}

impl SszSize for u8 {
    const SIZE: Size = Size::Fixed {
        size: size_of::<Self>(),
    };
}

impl<C> SszRead<C> for u8 {
    #[inline]
    fn from_ssz_unchecked(_context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        Ok(bytes[0])
    }
}

impl SszWrite for u8 {
    #[inline]
    fn write_fixed(&self, bytes: &mut [u8]) {
        bytes[0] = *self;
    }
}

impl SszSize for u32 {
    const SIZE: Size = Size::Fixed {
        size: size_of::<Self>(),
    };
}

impl<C> SszRead<C> for u32 {
    #[inline]
    fn from_ssz_unchecked(_context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        Ok(Endianness::read_u32(bytes))
    }
}

impl SszWrite for u32 {
    #[inline]
    fn write_fixed(&self, bytes: &mut [u8]) {
        Endianness::write_u32(bytes, *self);
    }
}

impl SszSize for u64 {
    const SIZE: Size = Size::Fixed {
        size: size_of::<Self>(),
    };
}

impl<C> SszRead<C> for u64 {
    #[inline]
    fn from_ssz_unchecked(_context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        Ok(Endianness::read_u64(bytes))
    }
}

impl SszWrite for u64 {
    #[inline]
    fn write_fixed(&self, bytes: &mut [u8]) {
        Endianness::write_u64(bytes, *self);
    }
}
