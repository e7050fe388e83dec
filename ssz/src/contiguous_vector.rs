use core::{fmt::Debug, marker::PhantomData};

use derivative::Derivative;
use derive_more::Deref;
use typenum::Unsigned;

use crate::{
    error::{ReadError, WriteError},
    porcelain::{SszRead, SszSize, SszWrite},
    shared,
    size::Size,
};

// Backed by a boxed slice rather than an array because `N` cannot be used in array lengths yet.
#[derive(Deref, Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq"),
    Debug(bound = "T: Debug", transparent = "true")
)]
pub struct ContiguousVector<T, N> {
    #[deref]
    elements: Box<[T]>,
    #[derivative(Debug = "ignore")]
    phantom: PhantomData<N>,
}

impl<T: Default, N: Unsigned> Default for ContiguousVector<T, N> {
    fn default() -> Self {
        Self::new_unchecked(core::iter::repeat_with(T::default).take(N::USIZE).collect())
    }
}

impl<T, N: Unsigned> TryFrom<Vec<T>> for ContiguousVector<T, N> {
    type Error = ReadError;

    fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
        Self::validate_length(vec.len())?;
        Ok(Self::new_unchecked(vec.into()))
    }
}

impl<'vector, T, N> IntoIterator for &'vector ContiguousVector<T, N> {
    type Item = &'vector T;
    type IntoIter = <&'vector [T] as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: SszSize, N: Unsigned> SszSize for ContiguousVector<T, N> {
    const SIZE: Size = Size::for_vector(T::SIZE, N::USIZE);
}

impl<C, T: SszRead<C>, N: Unsigned> SszRead<C> for ContiguousVector<T, N> {
    fn from_ssz_unchecked(context: &C, bytes: &[u8]) -> Result<Self, ReadError> {
        let results = shared::read_vector(context, bytes, N::USIZE)?;
        let elements =
            itertools::process_results(results, |elements| Box::<[T]>::from_iter(elements))?;
        Self::validate_length(elements.len())?;
        Ok(Self::new_unchecked(elements))
    }
}

impl<T: SszWrite, N: Unsigned> SszWrite for ContiguousVector<T, N> {
    fn write_fixed(&self, bytes: &mut [u8]) {
        let size = T::SIZE.fixed_part();

        for (element, subslice) in self.iter().zip(bytes.chunks_exact_mut(size)) {
            element.write_fixed(subslice);
        }
    }

    fn write_variable(&self, bytes: &mut Vec<u8>) -> Result<(), WriteError> {
        shared::write_list(bytes, self)
    }
}

impl<T, N> ContiguousVector<T, N> {
    const fn validate_length(actual: usize) -> Result<(), ReadError>
    where
        N: Unsigned,
    {
        let expected = N::USIZE;

        if actual != expected {
            return Err(ReadError::VectorSizeMismatch { expected, actual });
        }

        Ok(())
    }

    fn new_unchecked(elements: Box<[T]>) -> Self {
        Self {
            elements,
            phantom: PhantomData,
        }
    }
}
