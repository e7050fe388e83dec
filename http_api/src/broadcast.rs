use anyhow::{ensure, Context as _, Result};
use log::warn;
use serde::Deserialize;
use strum::EnumString;
use types::combined::GenericSignedBlock;

use crate::{collaborators::Collaborators, error::Error};

/// Checks to run on a block before it is published.
///
/// Unrecognized values of the `broadcast_validation` query parameter are treated as `gossip`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Deserialize, EnumString)]
#[serde(from = "String")]
#[strum(serialize_all = "snake_case")]
pub enum BroadcastValidation {
    #[default]
    Gossip,
    Consensus,
    ConsensusAndEquivocation,
}

impl From<String> for BroadcastValidation {
    fn from(string: String) -> Self {
        string.parse().unwrap_or_default()
    }
}

pub async fn validate_broadcast(
    policy: BroadcastValidation,
    block: &GenericSignedBlock,
    collaborators: &Collaborators,
) -> Result<(), Error> {
    let result = match policy {
        BroadcastValidation::Gossip => Ok(()),
        BroadcastValidation::Consensus => validate_consensus(block, collaborators)
            .await
            .map_err(Error::StateTransitionError),
        BroadcastValidation::ConsensusAndEquivocation => {
            validate_consensus(block, collaborators)
                .await
                .map_err(Error::StateTransitionError)?;

            validate_equivocation(block, collaborators)
                .await
                .map_err(Error::EquivocationError)
        }
    };

    result.inspect_err(|error| {
        warn!(
            "block at slot {} failed {policy:?} broadcast validation: {error}",
            block.slot(),
        );
    })
}

async fn validate_consensus(
    block: &GenericSignedBlock,
    collaborators: &Collaborators,
) -> Result<()> {
    let state = collaborators
        .state_fetcher
        .state_at(block.parent_root())
        .await
        .context("could not get parent state")?;

    collaborators
        .state_transition
        .execute(state, block)
        .await
        .context("could not execute state transition")
}

async fn validate_equivocation(
    block: &GenericSignedBlock,
    collaborators: &Collaborators,
) -> Result<()> {
    let slot = block.slot();
    let highest_slot = collaborators
        .fork_choice_fetcher
        .highest_received_block_slot()
        .await;

    ensure!(
        highest_slot != slot,
        "block for slot {slot} already exists in fork choice",
    );

    Ok(())
}
