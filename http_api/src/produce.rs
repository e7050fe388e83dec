//! Handlers for the block production endpoint.

use std::sync::Arc;

use anyhow::{ensure, Result};
use axum::{extract::State, http::HeaderMap};
use bls::SignatureBytes;
use log::info;
use serde::Deserialize;
use types::{
    combined::GenericBeaconBlock,
    phase0::primitives::{Slot, H256},
};

use crate::{
    collaborators::{
        BlockProducer, BlockRequest, OptimisticModeFetcher, ProducedBlock, SyncChecker,
    },
    conversion,
    error::Error,
    extractors::{EthPath, EthQuery},
    guards,
    response::EthResponse,
};

// Parameters are kept as strings so that each one gets its own error message.
// Custom fields are allowed for compatibility with other clients.
#[derive(Default, Deserialize)]
pub struct ProduceBlockQuery {
    slot: Option<String>,
    randao_reveal: Option<String>,
    graffiti: Option<String>,
    #[serde(default, with = "serde_utils::query_flag")]
    skip_randao_verification: bool,
}

/// `GET /eth/v3/validator/blocks`
pub async fn produce_block(
    State(sync_checker): State<Arc<dyn SyncChecker>>,
    State(block_producer): State<Arc<dyn BlockProducer>>,
    State(optimistic_mode_fetcher): State<Arc<dyn OptimisticModeFetcher>>,
    EthQuery(query): EthQuery<ProduceBlockQuery>,
    headers: HeaderMap,
) -> Result<EthResponse<GenericBeaconBlock>, Error> {
    produce(
        sync_checker.as_ref(),
        block_producer.as_ref(),
        optimistic_mode_fetcher.as_ref(),
        query.slot.as_deref(),
        &query,
        &headers,
    )
    .await
}

/// `GET /eth/v3/validator/blocks/{slot}`
pub async fn produce_block_at_slot(
    State(sync_checker): State<Arc<dyn SyncChecker>>,
    State(block_producer): State<Arc<dyn BlockProducer>>,
    State(optimistic_mode_fetcher): State<Arc<dyn OptimisticModeFetcher>>,
    EthPath(slot): EthPath<String>,
    EthQuery(query): EthQuery<ProduceBlockQuery>,
    headers: HeaderMap,
) -> Result<EthResponse<GenericBeaconBlock>, Error> {
    produce(
        sync_checker.as_ref(),
        block_producer.as_ref(),
        optimistic_mode_fetcher.as_ref(),
        Some(slot.as_str()),
        &query,
        &headers,
    )
    .await
}

async fn produce(
    sync_checker: &dyn SyncChecker,
    block_producer: &dyn BlockProducer,
    optimistic_mode_fetcher: &dyn OptimisticModeFetcher,
    slot: Option<&str>,
    query: &ProduceBlockQuery,
    headers: &HeaderMap,
) -> Result<EthResponse<GenericBeaconBlock>, Error> {
    guards::check_sync(sync_checker).await?;

    let request = BlockRequest {
        slot: parse_slot(slot)?,
        randao_reveal: query.randao_reveal()?,
        graffiti: query.graffiti()?,
        skip_mev_boost: false,
    };

    let ProducedBlock {
        block,
        is_blinded,
        payload_value,
    } = block_producer.get_beacon_block(request).await?;

    let phase = block.phase();

    guards::check_optimistic(optimistic_mode_fetcher, phase).await?;

    info!(
        "produced {phase} block at slot {} (blinded: {is_blinded}, value: {payload_value})",
        request.slot,
    );

    Ok(EthResponse::json_or_ssz(block, headers)
        .version(phase)
        .execution_payload_blinded(is_blinded)
        .execution_payload_value(payload_value))
}

fn parse_slot(slot: Option<&str>) -> Result<Slot, Error> {
    let slot = slot
        .filter(|slot| !slot.is_empty())
        .ok_or(Error::SlotRequired)?;

    conversion::decode_decimal(slot).map_err(Error::InvalidSlot)
}

impl ProduceBlockQuery {
    fn randao_reveal(&self) -> Result<SignatureBytes, Error> {
        if self.skip_randao_verification {
            return Ok(SignatureBytes::empty());
        }

        let randao_reveal = self
            .randao_reveal
            .as_deref()
            .filter(|randao_reveal| !randao_reveal.is_empty())
            .ok_or(Error::RandaoRevealRequired)?;

        conversion::decode_fixed_hex(randao_reveal)
            .map(SignatureBytes)
            .map_err(Error::InvalidRandaoReveal)
    }

    fn graffiti(&self) -> Result<H256, Error> {
        match self.graffiti.as_deref() {
            None | Some("") => Ok(H256::zero()),
            Some(graffiti) => decode_graffiti(graffiti).map_err(Error::InvalidGraffiti),
        }
    }
}

fn decode_graffiti(string: &str) -> Result<H256> {
    let bytes = conversion::decode_hex(string)?;
    let length = bytes.len();

    ensure!(
        length <= H256::len_bytes(),
        "expected at most {} bytes, found {length} bytes",
        H256::len_bytes(),
    );

    let mut graffiti = H256::zero();
    graffiti.as_bytes_mut()[..length].copy_from_slice(&bytes);
    Ok(graffiti)
}
