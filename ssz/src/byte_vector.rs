use core::{
    fmt::{Debug, Formatter, Result as FmtResult},
    marker::PhantomData,
};

use derivative::Derivative;
use typenum::Unsigned;

use crate::{
    error::ReadError,
    porcelain::{SszRead, SszSize, SszWrite},
    size::Size,
};

// Blobs are 128 KiB, so the bytes are kept on the heap.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), PartialEq(bound = ""), Eq(bound = ""))]
pub struct ByteVector<N> {
    bytes: Box<[u8]>,
    #[derivative(PartialEq = "ignore")]
    phantom: PhantomData<N>,
}

impl<N: Unsigned> Default for ByteVector<N> {
    fn default() -> Self {
        Self::new_unchecked(vec![0; N::USIZE].into())
    }
}

impl<N> AsRef<[u8]> for ByteVector<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<N: Unsigned> TryFrom<&[u8]> for ByteVector<N> {
    type Error = ReadError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let expected = N::USIZE;
        let actual = bytes.len();

        if expected != actual {
            return Err(ReadError::VectorSizeMismatch { expected, actual });
        }

        Ok(Self::new_unchecked(bytes.into()))
    }
}

impl<N> Debug for ByteVector<N> {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("0x")?;

        for byte in self.as_bytes() {
            write!(formatter, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl<N: Unsigned> SszSize for ByteVector<N> {
    const SIZE: Size = Size::Fixed { size: N::USIZE };
}

impl<C, N: Unsigned> SszRead<C> for ByteVector<N> {
    fn from_ssz_unchecked(_context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        Ok(Self::new_unchecked(bytes.into()))
    }
}

impl<N: Unsigned> SszWrite for ByteVector<N> {
    fn write_fixed(&self, bytes: &mut [u8]) {
        bytes.copy_from_slice(self.as_bytes());
    }
}

impl<N> ByteVector<N> {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn new_unchecked(bytes: Box<[u8]>) -> Self {
        Self {
            bytes,
            phantom: PhantomData,
        }
    }
}
