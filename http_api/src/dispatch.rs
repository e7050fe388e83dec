//! Detection of the phase of a submitted block.
//!
//! Request bodies do not say which phase they belong to. The decoders for every phase are tried
//! in a fixed order, newest first, and the first one that accepts the body wins.

use anyhow::Error as AnyhowError;
use log::debug;
use serde::Deserialize as _;
use serde_json::Value;
use ssz::{ReadError, SszRead, SszReadDefault as _};
use types::{
    altair::containers::SignedBeaconBlock as AltairSignedBeaconBlock,
    bellatrix::containers::{
        SignedBeaconBlock as BellatrixSignedBeaconBlock,
        SignedBlindedBeaconBlock as BellatrixSignedBlindedBeaconBlock,
    },
    capella::containers::{
        SignedBeaconBlock as CapellaSignedBeaconBlock,
        SignedBlindedBeaconBlock as CapellaSignedBlindedBeaconBlock,
    },
    combined::GenericSignedBlock,
    deneb::containers::{
        SignedBlindedBlockContents as DenebSignedBlindedBlockContents,
        SignedBlockContents as DenebSignedBlockContents,
    },
    nonstandard::Phase,
    phase0::containers::SignedBeaconBlock as Phase0SignedBeaconBlock,
};

use crate::{
    conversion::{FieldError, Validate as _, Wire},
    error::Error,
};

/// The family of endpoints a block was submitted to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlockKind {
    Full,
    // Blocks from before Bellatrix have no blinded form and are accepted as they are.
    Blinded,
}

impl BlockKind {
    const fn schemas(self) -> &'static [Schema] {
        match self {
            Self::Full => FULL_SCHEMAS,
            Self::Blinded => BLINDED_SCHEMAS,
        }
    }
}

enum JsonAttempt {
    Mismatch(AnyhowError),
    Match(Result<GenericSignedBlock, FieldError>),
}

struct Schema {
    phase: Phase,
    json: fn(&Value) -> JsonAttempt,
    ssz: fn(&[u8]) -> Result<GenericSignedBlock, ReadError>,
}

impl Schema {
    const fn of<T>(phase: Phase) -> Self
    where
        T: Wire + SszRead<()> + Into<GenericSignedBlock>,
    {
        Self {
            phase,
            json: try_json::<T>,
            ssz: try_ssz::<T>,
        }
    }
}

// The order is significant. If a body could be decoded by more than one schema,
// the one listed first is used.
const FULL_SCHEMAS: &[Schema] = &[
    Schema::of::<DenebSignedBlockContents>(Phase::Deneb),
    Schema::of::<CapellaSignedBeaconBlock>(Phase::Capella),
    Schema::of::<BellatrixSignedBeaconBlock>(Phase::Bellatrix),
    Schema::of::<AltairSignedBeaconBlock>(Phase::Altair),
    Schema::of::<Phase0SignedBeaconBlock>(Phase::Phase0),
];

const BLINDED_SCHEMAS: &[Schema] = &[
    Schema::of::<DenebSignedBlindedBlockContents>(Phase::Deneb),
    Schema::of::<CapellaSignedBlindedBeaconBlock>(Phase::Capella),
    Schema::of::<BellatrixSignedBlindedBeaconBlock>(Phase::Bellatrix),
    Schema::of::<AltairSignedBeaconBlock>(Phase::Altair),
    Schema::of::<Phase0SignedBeaconBlock>(Phase::Phase0),
];

/// Decodes a JSON request body.
///
/// A schema matches if the body has exactly the fields of the schema and none of them are empty.
/// If the values in a matching body cannot be converted, the remaining schemas are not tried.
pub fn decode_json(kind: BlockKind, body: &[u8]) -> Result<GenericSignedBlock, Error> {
    let value = serde_json::from_slice::<Value>(body).map_err(|error| {
        debug!("request body is not valid JSON: {error}");
        Error::InvalidPayload
    })?;

    for schema in kind.schemas() {
        match (schema.json)(&value) {
            JsonAttempt::Mismatch(error) => {
                debug!("request body does not match {kind:?} {} schema: {error}", schema.phase);
            }
            JsonAttempt::Match(result) => return result.map_err(Error::DecodeFieldError),
        }
    }

    Err(Error::InvalidPayload)
}

/// Decodes an SSZ request body.
pub fn decode_ssz(kind: BlockKind, body: &[u8]) -> Result<GenericSignedBlock, Error> {
    for schema in kind.schemas() {
        match (schema.ssz)(body) {
            Ok(block) => return Ok(block),
            Err(error) => {
                debug!("request body does not match {kind:?} {} schema: {error}", schema.phase);
            }
        }
    }

    Err(Error::InvalidPayload)
}

fn try_json<T: Wire + Into<GenericSignedBlock>>(value: &Value) -> JsonAttempt {
    let json = match T::Json::deserialize(value) {
        Ok(json) => json,
        Err(error) => return JsonAttempt::Mismatch(error.into()),
    };

    if let Err(error) = json.validate() {
        return JsonAttempt::Mismatch(error.into());
    }

    JsonAttempt::Match(T::from_json(json).map(Into::into))
}

fn try_ssz<T: SszRead<()> + Into<GenericSignedBlock>>(
    bytes: &[u8],
) -> Result<GenericSignedBlock, ReadError> {
    T::from_ssz_default(bytes).map(Into::into)
}
