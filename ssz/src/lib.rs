// These are re-exported primarily to make `ssz_derive` work without additional dependencies.
pub use ethereum_types::H256;
pub use ssz_derive::Ssz;

pub use crate::{
    bit_list::BitList,
    bit_vector::BitVector,
    byte_list::ByteList,
    byte_vector::ByteVector,
    consts::{Endianness, Offset, BYTES_PER_LENGTH_OFFSET},
    contiguous_list::ContiguousList,
    contiguous_vector::ContiguousVector,
    error::{ReadError, WriteError},
    porcelain::{SszRead, SszReadDefault, SszSize, SszWrite},
    shared::{read_offset_unchecked, subslice, write_offset},
    size::Size,
    uint256::Uint256,
};

mod arrays;
mod basic;
mod bit_list;
mod bit_vector;
mod byte_list;
mod byte_vector;
mod consts;
mod contiguous_list;
mod contiguous_vector;
mod error;
mod pointers;
mod porcelain;
mod shared;
mod size;
mod uint256;

#[cfg(test)]
mod tests;
