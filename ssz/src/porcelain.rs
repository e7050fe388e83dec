// Hash tree roots are not computed anywhere in this workspace, so there is no `SszHash`.
// Roots that appear in containers (`transactions_root`, `blob_root`) are supplied by callers.

use easy_ext::ext;

use crate::{
    error::{ReadError, WriteError},
    size::Size,
};

pub trait SszSize {
    const SIZE: Size;
}

pub trait SszRead<C>: SszSize + Sized {
    /// Attempts to deserialize `bytes` into `Self` without checking the length of `bytes`.
    ///
    /// This is safe in the Rust sense of the word but may panic if called directly.
    /// This should only be called as an optimization inside [`SszRead`] impls for fixed-size types.
    /// For variable-size types [`SszRead::from_ssz`] is equivalent and should be used instead.
    fn from_ssz_unchecked(context: &C, bytes: &[u8]) -> Result<Self, ReadError>;

    /// Attempts to deserialize `bytes` into `Self` with full validation.
    fn from_ssz(context: &C, bytes: impl AsRef<[u8]>) -> Result<Self, ReadError> {
        let bytes = bytes.as_ref();

        if let Size::Fixed { size: expected } = Self::SIZE {
            let actual = bytes.len();

            if actual != expected {
                return Err(ReadError::FixedSizeMismatch { expected, actual });
            }
        }

        Self::from_ssz_unchecked(context, bytes)
    }
}

/// Extension trait for types that can be deserialized without a context.
#[ext(SszReadDefault)]
pub impl<T: SszRead<()>> T {
    fn from_ssz_default(bytes: impl AsRef<[u8]>) -> Result<Self, ReadError> {
        Self::from_ssz(&(), bytes)
    }
}

pub trait SszWrite: SszSize {
    // The panics could be avoided with some type-level programming, but it's not worth the trouble.
    fn write_fixed(&self, _bytes: &mut [u8]) {
        panic!("SszWrite::write_fixed must be implemented for fixed-size types");
    }

    fn write_variable(&self, _bytes: &mut Vec<u8>) -> Result<(), WriteError> {
        panic!("SszWrite::write_variable must be implemented for variable-size types");
    }

    fn to_ssz(&self) -> Result<Vec<u8>, WriteError> {
        match Self::SIZE {
            Size::Fixed { size } => {
                let mut bytes = vec![0; size];
                self.write_fixed(bytes.as_mut_slice());
                Ok(bytes)
            }
            Size::Variable { minimum_size } => {
                let mut bytes = Vec::with_capacity(minimum_size);
                self.write_variable(&mut bytes)?;
                Ok(bytes)
            }
        }
    }
}
