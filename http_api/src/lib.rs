//! Beacon Node API endpoints for publishing and producing blocks.
//!
//! Requests are translated between the JSON or SSZ wire formats and the consensus containers of
//! every phase. The rest of the node is reached through the traits in [`collaborators`].

pub use crate::{
    broadcast::BroadcastValidation,
    error::Error,
    http_api_config::HttpApiConfig,
    routing::routes,
    task::HttpApi,
};

pub mod collaborators;

mod broadcast;
mod conversion;
mod dispatch;
mod error;
mod extractors;
mod guards;
mod http_api_config;
mod produce;
mod publish;
mod response;
mod routing;
mod schema;
mod task;
mod uint256;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod mocks;
