use primitive_types::H384;
use ssz::ByteVector;

use crate::preset::BytesPerBlob;

pub type Blob = ByteVector<BytesPerBlob>;
pub type BlobIndex = u64;
pub type KzgCommitment = H384;
pub type KzgProof = H384;
