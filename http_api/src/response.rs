use anyhow::Result;
use axum::{
    http::{header::ACCEPT, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use http_api_utils::{
    ETH_CONSENSUS_VERSION, ETH_EXECUTION_PAYLOAD_BLINDED, ETH_EXECUTION_PAYLOAD_VALUE,
};
use log::warn;
use mediatype::{MediaType, MediaTypeList};
use mime::APPLICATION_OCTET_STREAM;
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use ssz::SszWrite as _;
use types::{combined::GenericBeaconBlock, nonstandard::Phase};

use crate::{error::Error, schema::BeaconBlockJson};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JsonOrSsz {
    Json,
    Ssz,
}

pub struct EthResponse<T> {
    data: T,

    // These are returned in both JSON body fields and headers.
    version: Option<Phase>,
    execution_payload_blinded: Option<bool>,
    execution_payload_value: Option<u64>,

    format: JsonOrSsz,
}

#[serde_as]
#[derive(Serialize)]
struct EthResponseBody<D> {
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<Phase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_payload_blinded: Option<bool>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_payload_value: Option<u64>,
    data: D,
}

impl IntoResponse for EthResponse<GenericBeaconBlock> {
    fn into_response(self) -> Response {
        let run = || {
            let response_headers = self.response_headers()?;

            let response_body = match self.format {
                JsonOrSsz::Json => self
                    .json_body(BeaconBlockJson::from(&self.data))
                    .into_response(),
                JsonOrSsz::Ssz => self.data.to_ssz()?.into_response(),
            };

            Ok((response_headers, response_body))
        };

        run().map_err(Error::Internal).into_response()
    }
}

impl<T> EthResponse<T> {
    // `axum` recommends using `axum_extra::TypedHeader` instead of extracting all headers,
    // but the `headers` crate does not provide a type for the `Accept` header.
    // See <https://github.com/hyperium/headers/issues/53>.
    //
    // A malformed `Accept` header falls back to JSON.
    pub fn json_or_ssz(data: T, request_headers: &HeaderMap) -> Self {
        let format = requested_format(request_headers).unwrap_or_else(|error| {
            warn!("unable to parse Accept header, defaulting to JSON: {error}");
            JsonOrSsz::Json
        });

        Self {
            data,
            version: None,
            execution_payload_blinded: None,
            execution_payload_value: None,
            format,
        }
    }

    pub const fn version(mut self, phase: Phase) -> Self {
        self.version = Some(phase);
        self
    }

    pub const fn execution_payload_blinded(mut self, execution_payload_blinded: bool) -> Self {
        self.execution_payload_blinded = Some(execution_payload_blinded);
        self
    }

    pub const fn execution_payload_value(mut self, execution_payload_value: u64) -> Self {
        self.execution_payload_value = Some(execution_payload_value);
        self
    }

    fn response_headers(&self) -> Result<HeaderMap> {
        let mut response_headers = HeaderMap::new();

        if let Some(phase) = self.version {
            let header_value = phase.as_ref().try_into()?;
            response_headers.insert(ETH_CONSENSUS_VERSION, header_value);
        }

        if let Some(blinded) = self.execution_payload_blinded {
            let header_value = HeaderValue::from_static(if blinded { "true" } else { "false" });
            response_headers.insert(ETH_EXECUTION_PAYLOAD_BLINDED, header_value);
        }

        if let Some(value) = self.execution_payload_value {
            response_headers.insert(ETH_EXECUTION_PAYLOAD_VALUE, HeaderValue::from(value));
        }

        Ok(response_headers)
    }

    const fn json_body<D>(&self, data: D) -> Json<EthResponseBody<D>> {
        Json(EthResponseBody {
            version: self.version,
            execution_payload_blinded: self.execution_payload_blinded,
            execution_payload_value: self.execution_payload_value,
            data,
        })
    }
}

fn requested_format(request_headers: &HeaderMap) -> Result<JsonOrSsz> {
    let Some(accept_header) = request_headers.get(ACCEPT) else {
        return Ok(JsonOrSsz::Json);
    };

    let accept = accept_content_type(accept_header.to_str()?)?;

    if accept.as_deref() == Some(APPLICATION_OCTET_STREAM.as_ref()) {
        Ok(JsonOrSsz::Ssz)
    } else {
        Ok(JsonOrSsz::Json)
    }
}

// Media types without a `q` parameter have a weight of 1.
// Media types with a weight of 0 are not acceptable.
// If several media types have the highest weight, the first one wins.
fn accept_content_type(accept_header: &str) -> Result<Option<String>> {
    let mut best: Option<(f32, String)> = None;

    for media_type in MediaTypeList::new(accept_header) {
        let MediaType {
            ty, subty, params, ..
        } = media_type?;

        let essence = format!("{ty}/{subty}");

        let q = params
            .iter()
            .find(|(name, _)| name == "q")
            .map(|(_, value)| value.as_str().parse::<f32>())
            .transpose()?
            .unwrap_or(1.0);

        if q <= 0.0 {
            continue;
        }

        if best.as_ref().is_none_or(|(best_q, _)| q > *best_q) {
            best = Some((q, essence));
        }
    }

    Ok(best.map(|(_, essence)| essence))
}
