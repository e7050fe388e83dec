//! Collaborators with canned responses.

use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use types::{
    combined::GenericSignedBlock,
    phase0::primitives::{Slot, H256},
};

use crate::{
    collaborators::{
        BeaconState, BlockProducer, BlockProposer, BlockRequest, Collaborators, ForkChoiceFetcher,
        OptimisticModeFetcher, ProducedBlock, ProposeOutcome, StateFetcher, StateTransition,
        SyncChecker, SyncDetails,
    },
    fixtures,
};

#[derive(Clone, Copy, Debug)]
pub struct MockSyncChecker {
    // `None` means the status cannot be determined.
    is_syncing: Option<bool>,
}

impl Default for MockSyncChecker {
    fn default() -> Self {
        Self::synced()
    }
}

impl MockSyncChecker {
    pub const fn synced() -> Self {
        Self {
            is_syncing: Some(false),
        }
    }

    pub const fn syncing() -> Self {
        Self {
            is_syncing: Some(true),
        }
    }

    pub const fn failing() -> Self {
        Self { is_syncing: None }
    }
}

#[async_trait]
impl SyncChecker for MockSyncChecker {
    async fn sync_status(&self) -> Result<(bool, SyncDetails)> {
        let is_syncing = self
            .is_syncing
            .ok_or_else(|| anyhow!("sync status unavailable"))?;

        let details = if is_syncing {
            SyncDetails {
                head_slot: 90,
                sync_distance: 10,
                is_syncing,
                is_optimistic: false,
                el_offline: false,
            }
        } else {
            SyncDetails::default()
        };

        Ok((is_syncing, details))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MockOptimisticModeFetcher {
    is_optimistic: Option<bool>,
}

impl Default for MockOptimisticModeFetcher {
    fn default() -> Self {
        Self::new(Some(false))
    }
}

impl MockOptimisticModeFetcher {
    pub const fn new(is_optimistic: Option<bool>) -> Self {
        Self { is_optimistic }
    }
}

#[async_trait]
impl OptimisticModeFetcher for MockOptimisticModeFetcher {
    async fn is_optimistic(&self) -> Result<bool> {
        self.is_optimistic
            .ok_or_else(|| anyhow!("optimistic status unavailable"))
    }
}

#[derive(Debug)]
struct MockState;

impl BeaconState for MockState {}

#[derive(Clone, Debug)]
pub struct MockStateFetcher {
    has_state: bool,
    calls: Arc<AtomicUsize>,
}

impl MockStateFetcher {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StateFetcher for MockStateFetcher {
    async fn state_at(&self, _block_root: H256) -> Result<Arc<dyn BeaconState>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.has_state {
            bail!("state not found");
        }

        Ok(Arc::new(MockState))
    }
}

#[derive(Clone, Debug)]
pub struct MockStateTransition {
    succeeds: bool,
    calls: Arc<AtomicUsize>,
}

impl MockStateTransition {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StateTransition for MockStateTransition {
    async fn execute(
        &self,
        _state: Arc<dyn BeaconState>,
        _block: &GenericSignedBlock,
    ) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.succeeds {
            bail!("invalid state root");
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MockForkChoiceFetcher {
    highest_received_block_slot: Slot,
}

#[async_trait]
impl ForkChoiceFetcher for MockForkChoiceFetcher {
    async fn highest_received_block_slot(&self) -> Slot {
        self.highest_received_block_slot
    }
}

#[derive(Clone, Debug)]
pub struct MockBlockProposer {
    outcome: Option<ProposeOutcome>,
    proposed: Arc<Mutex<Vec<GenericSignedBlock>>>,
}

impl MockBlockProposer {
    pub fn proposed(&self) -> Vec<GenericSignedBlock> {
        self.proposed
            .lock()
            .expect("mutex should not be poisoned")
            .clone()
    }
}

#[async_trait]
impl BlockProposer for MockBlockProposer {
    async fn propose_beacon_block(&self, block: GenericSignedBlock) -> Result<ProposeOutcome> {
        let outcome = self
            .outcome
            .ok_or_else(|| anyhow!("failed to broadcast block"))?;

        self.proposed
            .lock()
            .expect("mutex should not be poisoned")
            .push(block);

        Ok(outcome)
    }
}

#[derive(Clone, Debug)]
pub struct MockBlockProducer {
    produced: Option<ProducedBlock>,
    requests: Arc<Mutex<Vec<BlockRequest>>>,
}

impl MockBlockProducer {
    pub fn requests(&self) -> Vec<BlockRequest> {
        self.requests
            .lock()
            .expect("mutex should not be poisoned")
            .clone()
    }
}

#[async_trait]
impl BlockProducer for MockBlockProducer {
    async fn get_beacon_block(&self, request: BlockRequest) -> Result<ProducedBlock> {
        self.requests
            .lock()
            .expect("mutex should not be poisoned")
            .push(request);

        self.produced
            .clone()
            .ok_or_else(|| anyhow!("execution engine is offline"))
    }
}

/// A node where every check passes unless a field is replaced.
#[derive(Clone, Debug)]
pub struct MockNode {
    pub block_proposer: MockBlockProposer,
    pub block_producer: MockBlockProducer,
    pub sync_checker: MockSyncChecker,
    pub optimistic_mode_fetcher: MockOptimisticModeFetcher,
    pub state_fetcher: MockStateFetcher,
    pub state_transition: MockStateTransition,
    pub fork_choice_fetcher: MockForkChoiceFetcher,
}

impl Default for MockNode {
    fn default() -> Self {
        Self {
            block_proposer: Self::proposer(Some(ProposeOutcome::Published)),
            block_producer: Self::producer(Some(ProducedBlock {
                block: fixtures::phase0_block().into(),
                is_blinded: false,
                payload_value: 0,
            })),
            sync_checker: MockSyncChecker::synced(),
            optimistic_mode_fetcher: MockOptimisticModeFetcher::default(),
            state_fetcher: MockStateFetcher {
                has_state: true,
                calls: Arc::default(),
            },
            state_transition: MockStateTransition {
                succeeds: true,
                calls: Arc::default(),
            },
            fork_choice_fetcher: Self::highest_received_block_slot(0),
        }
    }
}

impl MockNode {
    /// A proposer that fails with an error when `outcome` is `None`.
    pub fn proposer(outcome: Option<ProposeOutcome>) -> MockBlockProposer {
        MockBlockProposer {
            outcome,
            proposed: Arc::default(),
        }
    }

    /// A producer that fails with an error when `produced` is `None`.
    pub fn producer(produced: Option<ProducedBlock>) -> MockBlockProducer {
        MockBlockProducer {
            produced,
            requests: Arc::default(),
        }
    }

    pub fn missing_state() -> MockStateFetcher {
        MockStateFetcher {
            has_state: false,
            calls: Arc::default(),
        }
    }

    pub fn failing_transition() -> MockStateTransition {
        MockStateTransition {
            succeeds: false,
            calls: Arc::default(),
        }
    }

    pub const fn highest_received_block_slot(slot: Slot) -> MockForkChoiceFetcher {
        MockForkChoiceFetcher {
            highest_received_block_slot: slot,
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            block_proposer: Arc::new(self.block_proposer.clone()),
            block_producer: Arc::new(self.block_producer.clone()),
            sync_checker: Arc::new(self.sync_checker),
            optimistic_mode_fetcher: Arc::new(self.optimistic_mode_fetcher),
            state_fetcher: Arc::new(self.state_fetcher.clone()),
            state_transition: Arc::new(self.state_transition.clone()),
            fork_choice_fetcher: Arc::new(self.fork_choice_fetcher),
        }
    }
}
