use crate::consts::BYTES_PER_LENGTH_OFFSET;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Size {
    Fixed { size: usize },
    Variable { minimum_size: usize },
}

impl Size {
    /// Computes the size of a container from the sizes of its fields.
    ///
    /// Variable-size fields contribute an offset to the fixed part of the container.
    #[must_use]
    pub const fn for_container<const N: usize>(field_sizes: [Self; N]) -> Self {
        let mut total = 0;
        let mut all_fixed = true;
        let mut index = 0;

        while index < N {
            match field_sizes[index] {
                Self::Fixed { size } => total += size,
                Self::Variable { minimum_size } => {
                    total += BYTES_PER_LENGTH_OFFSET + minimum_size;
                    all_fixed = false;
                }
            }

            index += 1;
        }

        if all_fixed {
            Self::Fixed { size: total }
        } else {
            Self::Variable {
                minimum_size: total,
            }
        }
    }

    /// Computes the size of a vector of `length` elements of size `element_size`.
    #[must_use]
    pub const fn for_vector(element_size: Self, length: usize) -> Self {
        match element_size {
            Self::Fixed { size } => Self::Fixed {
                size: size * length,
            },
            Self::Variable { minimum_size } => Self::Variable {
                minimum_size: (BYTES_PER_LENGTH_OFFSET + minimum_size) * length,
            },
        }
    }

    /// The number of bytes a value of this size occupies in the fixed part of a container.
    #[must_use]
    pub const fn fixed_part(self) -> usize {
        match self {
            Self::Fixed { size } => size,
            Self::Variable { .. } => BYTES_PER_LENGTH_OFFSET,
        }
    }

    /// The size of a union encoded without a selector byte.
    ///
    /// Such unions are always treated as variable-size, because the variant has to be determined
    /// by other means before the bytes can be read.
    #[must_use]
    pub const fn for_untagged_union<const N: usize>(variant_sizes: [Self; N]) -> Self {
        let mut minimum_size = usize::MAX;
        let mut index = 0;

        while index < N {
            let variant_size = variant_sizes[index].minimum_size();

            if variant_size < minimum_size {
                minimum_size = variant_size;
            }

            index += 1;
        }

        Self::Variable { minimum_size }
    }

    #[must_use]
    pub const fn minimum_size(self) -> usize {
        match self {
            Self::Fixed { size } => size,
            Self::Variable { minimum_size } => minimum_size,
        }
    }
}
