use log::warn;
use types::nonstandard::Phase;

use crate::{
    collaborators::{OptimisticModeFetcher, SyncChecker},
    error::Error,
};

/// Rejects requests while the node is syncing.
pub async fn check_sync(sync_checker: &dyn SyncChecker) -> Result<(), Error> {
    let (is_syncing, details) = sync_checker
        .sync_status()
        .await
        .map_err(Error::SyncCheckFailed)?;

    if is_syncing {
        let details = serde_json::to_string(&details)
            .map_err(|error| Error::Internal(error.into()))?;
        return Err(Error::NodeIsSyncing { details });
    }

    Ok(())
}

/// Rejects produced blocks with execution payloads while the head is optimistic.
///
/// Blocks from before Bellatrix have no execution payload and are not checked.
pub async fn check_optimistic(
    optimistic_mode_fetcher: &dyn OptimisticModeFetcher,
    phase: Phase,
) -> Result<(), Error> {
    if phase < Phase::Bellatrix {
        return Ok(());
    }

    let is_optimistic = optimistic_mode_fetcher
        .is_optimistic()
        .await
        .map_err(Error::OptimisticCheckFailed)?;

    if is_optimistic {
        warn!("refusing to serve {phase} block because head is optimistic");
        return Err(Error::HeadIsOptimistic);
    }

    Ok(())
}
