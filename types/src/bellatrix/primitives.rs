use ssz::{ByteList, Uint256};

use crate::preset::MaxBytesPerTransaction;

pub type Gas = u64;
pub type Transaction = ByteList<MaxBytesPerTransaction>;
pub type Wei = Uint256;
