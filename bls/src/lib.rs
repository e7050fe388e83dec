//! Compressed BLS12-381 points as they appear in beacon blocks.
//!
//! Signatures are never verified here. Blocks only carry them through to the node.

pub use crate::{
    public_key_bytes::{PublicKeyBytes, COMPRESSED_SIZE},
    signature_bytes::{SignatureBytes, SIGNATURE_SIZE},
};

pub type AggregateSignatureBytes = SignatureBytes;

mod public_key_bytes;
mod signature_bytes;
