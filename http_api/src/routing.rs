use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
    Router,
};

use crate::{
    collaborators::{BlockProducer, Collaborators, OptimisticModeFetcher, SyncChecker},
    produce::{produce_block, produce_block_at_slot},
    publish::{
        publish_blinded_block, publish_blinded_block_v2, publish_block, publish_block_v2,
    },
};

impl FromRef<Collaborators> for Arc<dyn SyncChecker> {
    fn from_ref(collaborators: &Collaborators) -> Self {
        Arc::clone(&collaborators.sync_checker)
    }
}

impl FromRef<Collaborators> for Arc<dyn BlockProducer> {
    fn from_ref(collaborators: &Collaborators) -> Self {
        Arc::clone(&collaborators.block_producer)
    }
}

impl FromRef<Collaborators> for Arc<dyn OptimisticModeFetcher> {
    fn from_ref(collaborators: &Collaborators) -> Self {
        Arc::clone(&collaborators.optimistic_mode_fetcher)
    }
}

pub fn routes(collaborators: Collaborators) -> Router {
    eth_v1_beacon_routes()
        .merge(eth_v2_beacon_routes())
        .merge(eth_v3_validator_routes())
        // Blocks with many blob sidecars exceed the default limit of 2 MB.
        .layer(DefaultBodyLimit::disable())
        .with_state(collaborators)
}

fn eth_v1_beacon_routes() -> Router<Collaborators> {
    Router::new()
        .route("/eth/v1/beacon/blocks", post(publish_block))
        .route("/eth/v1/beacon/blinded_blocks", post(publish_blinded_block))
}

fn eth_v2_beacon_routes() -> Router<Collaborators> {
    Router::new()
        .route("/eth/v2/beacon/blocks", post(publish_block_v2))
        .route(
            "/eth/v2/beacon/blinded_blocks",
            post(publish_blinded_block_v2),
        )
}

fn eth_v3_validator_routes() -> Router<Collaborators> {
    Router::new()
        .route("/eth/v3/validator/blocks", get(produce_block))
        .route("/eth/v3/validator/blocks/{slot}", get(produce_block_at_slot))
}
