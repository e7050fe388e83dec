//! Interfaces to the parts of the node that handle blocks after they pass through the API.

use core::fmt::Debug;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use bls::SignatureBytes;
use serde::Serialize;
use types::{
    combined::{GenericBeaconBlock, GenericSignedBlock},
    phase0::primitives::{Slot, H256},
};

/// What happened to a published block.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposeOutcome {
    /// The block was broadcast and imported.
    Published,
    /// The block was broadcast but could not be imported.
    Accepted,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockRequest {
    pub slot: Slot,
    pub randao_reveal: SignatureBytes,
    pub graffiti: H256,
    pub skip_mev_boost: bool,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProducedBlock {
    pub block: GenericBeaconBlock,
    pub is_blinded: bool,
    pub payload_value: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize)]
pub struct SyncDetails {
    #[serde(with = "serde_utils::string_or_native")]
    pub head_slot: Slot,
    #[serde(with = "serde_utils::string_or_native")]
    pub sync_distance: u64,
    pub is_syncing: bool,
    pub is_optimistic: bool,
    pub el_offline: bool,
}

/// A beacon state held by the node.
///
/// The API never inspects states. It only passes them from [`StateFetcher`] to
/// [`StateTransition`].
pub trait BeaconState: Debug + Send + Sync {}

#[async_trait]
pub trait BlockProposer: Send + Sync {
    async fn propose_beacon_block(&self, block: GenericSignedBlock) -> Result<ProposeOutcome>;
}

#[async_trait]
pub trait BlockProducer: Send + Sync {
    async fn get_beacon_block(&self, request: BlockRequest) -> Result<ProducedBlock>;
}

#[async_trait]
pub trait SyncChecker: Send + Sync {
    /// Returns whether the node is syncing along with details to report if it is.
    async fn sync_status(&self) -> Result<(bool, SyncDetails)>;
}

#[async_trait]
pub trait OptimisticModeFetcher: Send + Sync {
    async fn is_optimistic(&self) -> Result<bool>;
}

#[async_trait]
pub trait StateFetcher: Send + Sync {
    async fn state_at(&self, block_root: H256) -> Result<Arc<dyn BeaconState>>;
}

#[async_trait]
pub trait StateTransition: Send + Sync {
    async fn execute(&self, state: Arc<dyn BeaconState>, block: &GenericSignedBlock)
        -> Result<()>;
}

#[async_trait]
pub trait ForkChoiceFetcher: Send + Sync {
    async fn highest_received_block_slot(&self) -> Slot;
}

/// Everything the API needs from the rest of the node.
#[derive(Clone)]
pub struct Collaborators {
    pub block_proposer: Arc<dyn BlockProposer>,
    pub block_producer: Arc<dyn BlockProducer>,
    pub sync_checker: Arc<dyn SyncChecker>,
    pub optimistic_mode_fetcher: Arc<dyn OptimisticModeFetcher>,
    pub state_fetcher: Arc<dyn StateFetcher>,
    pub state_transition: Arc<dyn StateTransition>,
    pub fork_choice_fetcher: Arc<dyn ForkChoiceFetcher>,
}
