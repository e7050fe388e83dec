use core::{
    fmt::{Debug, Formatter, Result as FmtResult},
    marker::PhantomData,
};

use bitvec::{order::Lsb0, view::BitView as _};
use derivative::Derivative;
use typenum::Unsigned;

use crate::{
    consts::BITS_PER_BYTE,
    error::ReadError,
    porcelain::{SszRead, SszSize, SszWrite},
    size::Size,
};

#[derive(Derivative)]
#[derivative(Clone(bound = ""), PartialEq(bound = ""), Eq(bound = ""))]
pub struct BitVector<N> {
    bytes: Box<[u8]>,
    #[derivative(PartialEq = "ignore")]
    phantom: PhantomData<N>,
}

impl<N: Unsigned> Default for BitVector<N> {
    fn default() -> Self {
        Self::new_unchecked(vec![0; Self::byte_count()].into())
    }
}

impl<N: Unsigned> TryFrom<&[u8]> for BitVector<N> {
    type Error = ReadError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::validate_length(bytes)?;
        Ok(Self::new_unchecked(bytes.into()))
    }
}

// This sort of code arguably belongs in an impl of `core::fmt::Binary` rather than `Debug`,
// but we don't ever format bit vectors directly and we need a `Debug` impl anyway.
impl<N: Unsigned> Debug for BitVector<N> {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("0b")?;

        for bit in self.bytes.view_bits::<Lsb0>()[..N::USIZE].iter().by_vals() {
            formatter.write_str(if bit { "1" } else { "0" })?;
        }

        Ok(())
    }
}

impl<N: Unsigned> SszSize for BitVector<N> {
    const SIZE: Size = Size::Fixed {
        size: N::USIZE.div_ceil(BITS_PER_BYTE),
    };
}

impl<C, N: Unsigned> SszRead<C> for BitVector<N> {
    fn from_ssz_unchecked(_context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        bytes.try_into()
    }
}

impl<N: Unsigned> SszWrite for BitVector<N> {
    fn write_fixed(&self, bytes: &mut [u8]) {
        bytes.copy_from_slice(&self.bytes);
    }
}

impl<N> BitVector<N> {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool>
    where
        N: Unsigned,
    {
        (index < N::USIZE).then(|| self.bytes.view_bits::<Lsb0>()[index])
    }

    pub fn set(&mut self, index: usize, value: bool)
    where
        N: Unsigned,
    {
        assert!(index < N::USIZE);

        self.bytes.view_bits_mut::<Lsb0>().set(index, value);
    }

    const fn byte_count() -> usize
    where
        N: Unsigned,
    {
        N::USIZE.div_ceil(BITS_PER_BYTE)
    }

    fn validate_length(bytes: &[u8]) -> Result<(), ReadError>
    where
        N: Unsigned,
    {
        let expected_bytes = Self::byte_count();

        if bytes.len() != expected_bytes {
            return Err(ReadError::FixedSizeMismatch {
                expected: expected_bytes,
                actual: bytes.len(),
            });
        }

        let expected = N::USIZE;

        // Bits past the length of the vector must be zero.
        if let Some(actual) = bytes.view_bits::<Lsb0>().last_one() {
            if actual >= expected {
                return Err(ReadError::BitVectorTooLong {
                    expected,
                    actual: actual + 1,
                });
            }
        }

        Ok(())
    }

    fn new_unchecked(bytes: Box<[u8]>) -> Self {
        Self {
            bytes,
            phantom: PhantomData,
        }
    }
}
