use core::{
    fmt::{Debug, Formatter, Result as FmtResult},
    marker::PhantomData,
};

use bitvec::{bitbox, boxed::BitBox, vec::BitVec};
use derivative::Derivative;
use derive_more::{Deref, DerefMut};
use typenum::Unsigned;

use crate::{
    consts::BITS_PER_BYTE,
    error::{ReadError, WriteError},
    porcelain::{SszRead, SszSize, SszWrite},
    size::Size,
};

#[derive(Deref, DerefMut, Derivative)]
#[derivative(
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Default(bound = "")
)]
pub struct BitList<N> {
    // We rely on `bitvec::order::Lsb0` being the default bit ordering to implement SSZ correctly.
    #[deref]
    #[deref_mut]
    bits: BitBox<u8>,
    #[derivative(PartialEq = "ignore")]
    phantom: PhantomData<N>,
}

impl<N: Unsigned> TryFrom<Vec<u8>> for BitList<N> {
    type Error = ReadError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let length = Self::measure_length(bytes.as_slice())?;
        Ok(Self::from_vec_with_length(bytes, length))
    }
}

// This sort of code arguably belongs in an impl of `core::fmt::Binary` rather than `Debug`,
// but we don't ever format bit lists directly and we need a `Debug` impl anyway.
impl<N> Debug for BitList<N> {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("0b")?;

        for bit in self.iter().by_vals() {
            formatter.write_str(if bit { "1" } else { "0" })?;
        }

        Ok(())
    }
}

impl<N> SszSize for BitList<N> {
    const SIZE: Size = Size::Variable { minimum_size: 1 };
}

impl<C, N: Unsigned> SszRead<C> for BitList<N> {
    fn from_ssz_unchecked(_context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        let length = Self::measure_length(bytes)?;
        let bytes = bytes[..bytes_without_delimiting_bit(length)].to_vec();
        Ok(Self::from_vec_with_length(bytes, length))
    }
}

impl<N> SszWrite for BitList<N> {
    fn write_variable(&self, bytes: &mut Vec<u8>) -> Result<(), WriteError> {
        bytes.extend(self.to_bytes_with_delimiting_bit());
        Ok(())
    }
}

impl<N> BitList<N> {
    /// Returns the bits packed into bytes followed by the delimiting bit.
    ///
    /// This is the SSZ encoding of the bit list. Unlike [`SszWrite::to_ssz`] it cannot fail.
    #[must_use]
    pub fn to_bytes_with_delimiting_bit(&self) -> Vec<u8> {
        let length = self.len();
        let mut bytes = vec![0; bytes_with_delimiting_bit(length)];

        bytes[..bytes_without_delimiting_bit(length)].copy_from_slice(self.bits.as_raw_slice());
        bytes[length / BITS_PER_BYTE] |= 1 << (length % BITS_PER_BYTE);

        bytes
    }

    #[must_use]
    pub fn with_length(length: usize) -> Self
    where
        N: Unsigned,
    {
        assert!(length <= N::USIZE);

        Self::from_bit_box(bitbox![_, _; 0; length])
    }

    fn measure_length(bytes: &[u8]) -> Result<usize, ReadError>
    where
        N: Unsigned,
    {
        let last_byte = *bytes.last().ok_or(ReadError::BitListEmptySlice)?;

        if last_byte == 0 {
            return Err(ReadError::BitListNoDelimitingBit);
        }

        let leading_zeros_in_last_byte: usize = last_byte
            .leading_zeros()
            .try_into()
            .expect("number of bits in a byte should fit in usize");

        let data_bits_in_last_byte = (BITS_PER_BYTE - 1) - leading_zeros_in_last_byte;

        let maximum = N::USIZE;
        let actual = (bytes.len() - 1) * BITS_PER_BYTE + data_bits_in_last_byte;

        if actual > maximum {
            return Err(ReadError::BitListTooLong { maximum, actual });
        }

        Ok(actual)
    }

    fn from_vec_with_length(bytes: Vec<u8>, length: usize) -> Self {
        let mut bits = BitVec::from_vec(bytes);
        bits.truncate(length);
        Self::from_bit_box(bits.into_boxed_bitslice())
    }

    fn from_bit_box(mut bits: BitBox<u8>) -> Self {
        bits.fill_uninitialized(false);

        Self {
            bits,
            phantom: PhantomData,
        }
    }
}

const fn bytes_without_delimiting_bit(length: usize) -> usize {
    length.div_ceil(BITS_PER_BYTE)
}

const fn bytes_with_delimiting_bit(length: usize) -> usize {
    length.saturating_add(1).div_ceil(BITS_PER_BYTE)
}
