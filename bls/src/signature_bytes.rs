use fixed_hash::construct_fixed_hash;
use ssz::{ReadError, Size, SszRead, SszSize, SszWrite};

pub const SIGNATURE_SIZE: usize = 96;

construct_fixed_hash! {
    #[derive(derive_more::AsRef)]
    pub struct SignatureBytes(SIGNATURE_SIZE);
}

impl SszSize for SignatureBytes {
    const SIZE: Size = Size::Fixed {
        size: SIGNATURE_SIZE,
    };
}

impl<C> SszRead<C> for SignatureBytes {
    #[inline]
    fn from_ssz_unchecked(_context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        Ok(Self::from_slice(bytes))
    }
}

impl SszWrite for SignatureBytes {
    #[inline]
    fn write_fixed(&self, bytes: &mut [u8]) {
        bytes.copy_from_slice(self.as_bytes());
    }
}

impl SignatureBytes {
    /// The compressed encoding of the point at infinity.
    ///
    /// Used in place of a RANDAO reveal when the caller asks to skip its verification.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        let mut bytes = Self::zero();
        bytes.as_mut()[0] = 0xc0;
        bytes
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::empty()
    }
}
