//! Conversion between the decimal strings used in JSON and the little-endian bytes of SSZ.
//!
//! `base_fee_per_gas` is the only 256-bit integer in blocks.

use anyhow::{bail, Result};
use ethereum_types::U256;

const BYTES: usize = 32;

pub fn decimal_to_le_bytes(decimal: &str) -> Result<[u8; BYTES]> {
    // `U256::from_dec_str` accepts an empty string and treats it as zero.
    if decimal.is_empty() || !decimal.bytes().all(|byte| byte.is_ascii_digit()) {
        bail!("could not parse Uint256");
    }

    let Ok(value) = U256::from_dec_str(decimal) else {
        bail!("number too big for Uint256");
    };

    let mut bytes = [0; BYTES];
    value.to_big_endian(&mut bytes);
    bytes.reverse();

    Ok(bytes)
}

#[must_use]
pub fn le_bytes_to_decimal(bytes: &[u8; BYTES]) -> String {
    U256::from_little_endian(bytes).to_string()
}
