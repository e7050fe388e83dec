pub use helpers::{extend_router_with_middleware, MiddlewareOptions};
pub use misc::{
    Direction, ETH_CONSENSUS_VERSION, ETH_EXECUTION_PAYLOAD_BLINDED, ETH_EXECUTION_PAYLOAD_VALUE,
};
pub use traits::ApiError;

pub mod logging;
pub mod middleware;

mod error;
mod helpers;
mod misc;
mod traits;
