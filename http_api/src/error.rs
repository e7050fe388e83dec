use core::error::Error as StdError;
use std::sync::Arc;

use anyhow::Error as AnyhowError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use http_api_utils::ApiError;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::conversion::FieldError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not decode request body into consensus block")]
    DecodeFieldError(#[source] FieldError),
    #[error("equivocation validation failed")]
    EquivocationError(#[source] AnyhowError),
    #[error("The node is currently optimistic and cannot serve validators")]
    HeadIsOptimistic,
    #[error(transparent)]
    Internal(#[from] AnyhowError),
    #[error("unable to decode graffiti")]
    InvalidGraffiti(#[source] AnyhowError),
    #[error("Body does not represent a valid block type")]
    InvalidPayload,
    #[error("invalid query string")]
    InvalidQuery(#[source] AnyhowError),
    #[error("unable to decode randao reveal")]
    InvalidRandaoReveal(#[source] AnyhowError),
    #[error("slot is invalid")]
    InvalidSlot(#[source] AnyhowError),
    #[error("Could not read request body")]
    MalformedBody(#[source] AnyhowError),
    #[error(
        "Beacon node is currently syncing and not serving request on that endpoint \
         Details: {details}"
    )]
    NodeIsSyncing { details: String },
    #[error("Could not determine if the node is a optimistic node")]
    OptimisticCheckFailed(#[source] AnyhowError),
    #[error("randao reveal is required as query parameters")]
    RandaoRevealRequired,
    #[error("slot is required")]
    SlotRequired,
    #[error("consensus validation failed")]
    StateTransitionError(#[source] AnyhowError),
    #[error("Could not check if node is syncing")]
    SyncCheckFailed(#[source] AnyhowError),
}

impl ApiError for Error {
    fn sources(&self) -> impl Iterator<Item = &dyn StdError> {
        let mut error: Option<&dyn StdError> = Some(self);

        core::iter::from_fn(move || {
            let source = error?.source();
            core::mem::replace(&mut error, source)
        })
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.format_sources())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = Json(self.body()).into_response();
        let extension = Extension(Arc::new(self));
        (status_code, extension, body).into_response()
    }
}

impl Error {
    pub(crate) const fn status_code(&self) -> StatusCode {
        match self {
            Self::DecodeFieldError(_)
            | Self::EquivocationError(_)
            | Self::InvalidGraffiti(_)
            | Self::InvalidPayload
            | Self::InvalidQuery(_)
            | Self::InvalidRandaoReveal(_)
            | Self::InvalidSlot(_)
            | Self::RandaoRevealRequired
            | Self::SlotRequired
            | Self::StateTransitionError(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_)
            | Self::MalformedBody(_)
            | Self::OptimisticCheckFailed(_)
            | Self::SyncCheckFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::HeadIsOptimistic | Self::NodeIsSyncing { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }

    fn body(&self) -> EthErrorResponse<'_> {
        EthErrorResponse {
            code: self.status_code().as_u16(),
            message: self,
        }
    }
}

#[derive(Serialize)]
struct EthErrorResponse<'error> {
    // The `code` field is supposed to contain a number, not a string.
    code: u16,
    message: &'error Error,
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use serde_json::{json, Result, Value};
    use test_case::test_case;

    use super::*;

    #[test_case(
        Error::InvalidPayload,
        json!({
            "code": 400,
            "message": "Body does not represent a valid block type",
        })
    )]
    #[test_case(
        Error::SyncCheckFailed(anyhow!("sync status unavailable")),
        json!({
            "code": 500,
            "message": "Could not check if node is syncing: sync status unavailable",
        })
    )]
    #[test_case(
        Error::NodeIsSyncing { details: r#"{"head_slot":"1"}"#.to_owned() },
        json!({
            "code": 503,
            "message": "Beacon node is currently syncing and not serving request on that \
                        endpoint Details: {\"head_slot\":\"1\"}",
        })
    )]
    #[test_case(
        Error::StateTransitionError(
            anyhow!("state not found").context("could not get parent state"),
        ),
        json!({
            "code": 400,
            "message": "consensus validation failed: could not get parent state: state not found",
        })
    )]
    #[test_case(
        Error::Internal(anyhow!("execution engine unavailable").context("failed to propose")),
        json!({
            "code": 500,
            "message": "failed to propose: execution engine unavailable",
        })
    )]
    fn error_is_serialized_with_sources(error: Error, expected_json: Value) -> Result<()> {
        assert_eq!(serde_json::to_value(error.body())?, expected_json);
        Ok(())
    }

    #[test_case(Error::HeadIsOptimistic => StatusCode::SERVICE_UNAVAILABLE)]
    #[test_case(Error::MalformedBody(anyhow!("reset")) => StatusCode::INTERNAL_SERVER_ERROR)]
    #[test_case(Error::SlotRequired => StatusCode::BAD_REQUEST)]
    fn error_response_has_matching_status(error: Error) -> StatusCode {
        error.into_response().status()
    }
}
