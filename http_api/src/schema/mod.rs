//! JSON wire representations of consensus containers for every phase.

use serde::Serialize;
use types::combined::GenericBeaconBlock;

use crate::conversion::Wire as _;

pub mod altair;
pub mod bellatrix;
pub mod capella;
pub mod deneb;
pub mod phase0;

/// The `data` field of a block production response.
///
/// The variant is not encoded. Clients learn it from the `version` field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BeaconBlockJson {
    Phase0(phase0::BeaconBlock),
    Altair(altair::BeaconBlock),
    Bellatrix(bellatrix::BeaconBlock),
    BlindedBellatrix(bellatrix::BlindedBeaconBlock),
    Capella(capella::BeaconBlock),
    BlindedCapella(capella::BlindedBeaconBlock),
    Deneb(deneb::BlockContents),
    BlindedDeneb(deneb::BlindedBlockContents),
}

impl From<&GenericBeaconBlock> for BeaconBlockJson {
    fn from(block: &GenericBeaconBlock) -> Self {
        match block {
            GenericBeaconBlock::Phase0(block) => Self::Phase0(block.to_json()),
            GenericBeaconBlock::Altair(block) => Self::Altair(block.to_json()),
            GenericBeaconBlock::Bellatrix(block) => Self::Bellatrix(block.to_json()),
            GenericBeaconBlock::BlindedBellatrix(block) => Self::BlindedBellatrix(block.to_json()),
            GenericBeaconBlock::Capella(block) => Self::Capella(block.to_json()),
            GenericBeaconBlock::BlindedCapella(block) => Self::BlindedCapella(block.to_json()),
            GenericBeaconBlock::Deneb(contents) => Self::Deneb(contents.to_json()),
            GenericBeaconBlock::BlindedDeneb(contents) => Self::BlindedDeneb(contents.to_json()),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Debug;

    use serde_json::{json, Value};
    use ssz::{SszRead, SszReadDefault as _, SszWrite};

    use crate::{
        conversion::{Validate as _, Wire},
        fixtures,
    };

    use super::*;

    type TestResult = Result<(), Box<dyn core::error::Error>>;

    fn assert_round_trips<T>(value: &T) -> TestResult
    where
        T: Wire + SszRead<()> + SszWrite + PartialEq + Debug,
    {
        let json_string = serde_json::to_string(&value.to_json())?;
        let json = serde_json::from_str::<T::Json>(&json_string)?;

        json.validate()?;

        let decoded = T::from_json(json)?;

        assert_eq!(&decoded, value);
        assert_eq!(serde_json::to_string(&decoded.to_json())?, json_string);
        assert_eq!(&T::from_ssz_default(value.to_ssz()?)?, value);

        Ok(())
    }

    #[test]
    fn phase0_block_round_trips() -> TestResult {
        assert_round_trips(&fixtures::phase0_signed_block())
    }

    #[test]
    fn altair_block_round_trips() -> TestResult {
        assert_round_trips(&fixtures::altair_signed_block())
    }

    #[test]
    fn bellatrix_blocks_round_trip() -> TestResult {
        assert_round_trips(&fixtures::bellatrix_signed_block())?;
        assert_round_trips(&fixtures::bellatrix_signed_blinded_block())
    }

    #[test]
    fn capella_blocks_round_trip() -> TestResult {
        assert_round_trips(&fixtures::capella_signed_block())?;
        assert_round_trips(&fixtures::capella_signed_blinded_block())
    }

    #[test]
    fn deneb_block_contents_round_trip() -> TestResult {
        assert_round_trips(&fixtures::deneb_signed_block_contents())?;
        assert_round_trips(&fixtures::deneb_signed_blinded_block_contents())?;
        assert_round_trips(&fixtures::deneb_block_contents())?;
        assert_round_trips(&fixtures::deneb_blinded_block_contents())
    }

    #[test]
    fn execution_payload_is_encoded_with_strings() -> TestResult {
        let json = serde_json::to_value(fixtures::bellatrix_block().to_json())?;
        let payload = &json["body"]["execution_payload"];

        assert_eq!(json["slot"], json!("100"));
        assert_eq!(payload["base_fee_per_gas"], json!("7"));
        assert_eq!(payload["gas_limit"], json!("30000000"));
        assert_eq!(payload["extra_data"], json!("0x6772616e64696e65"));
        assert_eq!(payload["transactions"], json!(["0x02f8", "0x"]));

        Ok(())
    }

    #[test]
    fn production_data_has_no_variant_tag() -> TestResult {
        for block in fixtures::beacon_blocks() {
            let json = serde_json::to_value(BeaconBlockJson::from(&block))?;

            let slot = match &json {
                Value::Object(map) if map.contains_key("blob_sidecars") => &json["block"]["slot"],
                Value::Object(map) if map.contains_key("blinded_blob_sidecars") => {
                    &json["blinded_block"]["slot"]
                }
                _ => &json["slot"],
            };

            assert_eq!(slot, &json!("100"));
        }

        Ok(())
    }
}
