//! Handlers for endpoints that accept signed blocks.

use axum::{extract::State, http::StatusCode};
use log::{info, warn};
use serde::Deserialize;

use crate::{
    broadcast::{self, BroadcastValidation},
    collaborators::{Collaborators, ProposeOutcome},
    dispatch::BlockKind,
    error::Error,
    extractors::{EthBlockBody, EthQuery},
    guards,
};

#[derive(Deserialize)]
pub struct PublishBlockQuery {
    broadcast_validation: Option<BroadcastValidation>,
}

/// `POST /eth/v1/beacon/blocks`
pub async fn publish_block(
    State(collaborators): State<Collaborators>,
    body: EthBlockBody,
) -> Result<StatusCode, Error> {
    publish(&collaborators, BlockKind::Full, BroadcastValidation::Gossip, body).await
}

/// `POST /eth/v2/beacon/blocks`
pub async fn publish_block_v2(
    State(collaborators): State<Collaborators>,
    EthQuery(query): EthQuery<PublishBlockQuery>,
    body: EthBlockBody,
) -> Result<StatusCode, Error> {
    let policy = query.broadcast_validation.unwrap_or_default();
    publish(&collaborators, BlockKind::Full, policy, body).await
}

/// `POST /eth/v1/beacon/blinded_blocks`
pub async fn publish_blinded_block(
    State(collaborators): State<Collaborators>,
    body: EthBlockBody,
) -> Result<StatusCode, Error> {
    publish(&collaborators, BlockKind::Blinded, BroadcastValidation::Gossip, body).await
}

/// `POST /eth/v2/beacon/blinded_blocks`
pub async fn publish_blinded_block_v2(
    State(collaborators): State<Collaborators>,
    EthQuery(query): EthQuery<PublishBlockQuery>,
    body: EthBlockBody,
) -> Result<StatusCode, Error> {
    let policy = query.broadcast_validation.unwrap_or_default();
    publish(&collaborators, BlockKind::Blinded, policy, body).await
}

async fn publish(
    collaborators: &Collaborators,
    kind: BlockKind,
    policy: BroadcastValidation,
    body: EthBlockBody,
) -> Result<StatusCode, Error> {
    guards::check_sync(collaborators.sync_checker.as_ref()).await?;

    let format = body.format();
    let block = body.decode(kind).await.inspect_err(|error| {
        warn!("rejected {kind:?} block submitted as {format:?}: {error}");
    })?;

    broadcast::validate_broadcast(policy, &block, collaborators).await?;

    let phase = block.phase();
    let slot = block.slot();

    let outcome = collaborators
        .block_proposer
        .propose_beacon_block(block)
        .await?;

    info!("published {phase} block at slot {slot} submitted as {format:?} ({outcome:?})");

    match outcome {
        ProposeOutcome::Published => Ok(StatusCode::OK),
        ProposeOutcome::Accepted => Ok(StatusCode::ACCEPTED),
    }
}
