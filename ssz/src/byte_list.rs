use core::fmt::{Debug, Formatter, Result as FmtResult};

use derivative::Derivative;
use typenum::Unsigned;

use crate::{
    contiguous_list::ContiguousList,
    error::{ReadError, WriteError},
    porcelain::{SszRead, SszSize, SszWrite},
    size::Size,
};

#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Default(bound = "")
)]
pub struct ByteList<N> {
    bytes: ContiguousList<u8, N>,
}

impl<N> AsRef<[u8]> for ByteList<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<N: Unsigned> TryFrom<Vec<u8>> for ByteList<N> {
    type Error = ReadError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, ReadError> {
        ContiguousList::try_from(bytes).map(|bytes| Self { bytes })
    }
}

// This sort of code arguably belongs in an impl of `core::fmt::LowerHex` rather than `Debug`,
// but we don't ever format byte lists directly and we need a `Debug` impl anyway.
impl<N> Debug for ByteList<N> {
    fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("0x")?;

        for byte in self.as_bytes() {
            write!(formatter, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl<N> SszSize for ByteList<N> {
    const SIZE: Size = Size::Variable { minimum_size: 0 };
}

impl<C, N: Unsigned> SszRead<C> for ByteList<N> {
    fn from_ssz_unchecked(_context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        // Do not forward to `ContiguousList::from_ssz_unchecked`.
        // Copying the whole slice at once is much faster for transactions.
        ContiguousList::<u8, N>::validate_length(bytes.len())?;
        let bytes = ContiguousList::new_unchecked(bytes.into());
        Ok(Self { bytes })
    }
}

impl<N> SszWrite for ByteList<N> {
    fn write_variable(&self, bytes: &mut Vec<u8>) -> Result<(), WriteError> {
        bytes.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl<N> ByteList<N> {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
