//! Custom extractors for the [Eth Beacon Node API].
//!
//! The extractors provided by `axum` report errors in plain text with various status codes.
//! The [Eth Beacon Node API] requires errors to be reported in JSON with the 400 status code.
//!
//! [Eth Beacon Node API]: https://ethereum.github.io/beacon-APIs/

use core::convert::Infallible;

use anyhow::Error as AnyhowError;
use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    RequestPartsExt as _,
};
use axum_extra::{
    extract::Query,
    headers::{ContentType, HeaderMapExt as _},
};
use mime::{Mime, APPLICATION_OCTET_STREAM};
use serde::de::DeserializeOwned;
use types::combined::GenericSignedBlock;

use crate::{
    dispatch::{self, BlockKind},
    error::Error,
};

pub struct EthPath<T>(pub T);

// The slot is parsed by the handler so that the sync check comes first.
impl<S: Send + Sync> FromRequestParts<S> for EthPath<String> {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extract::<Path<String>>()
            .await
            .map(|Path(slot)| Self(slot))
            .map_err(AnyhowError::new)
            .map_err(Error::InvalidSlot)
    }
}

pub struct EthQuery<T>(pub T);

impl<S: Send + Sync, T: DeserializeOwned + 'static> FromRequestParts<S> for EthQuery<T> {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extract()
            .await
            .map(|Query(query)| Self(query))
            .map_err(AnyhowError::msg)
            .map_err(Error::InvalidQuery)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BodyFormat {
    Json,
    Ssz,
}

/// A block submitted in the body of a request.
///
/// The body is not read until [`EthBlockBody::decode`] is called.
pub struct EthBlockBody {
    format: BodyFormat,
    body: Body,
}

impl<S: Send + Sync> FromRequest<S> for EthBlockBody {
    type Rejection = Infallible;

    async fn from_request(request: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        let is_ssz = parts
            .headers
            .typed_get::<ContentType>()
            .map(Mime::from)
            .is_some_and(|mime| mime.essence_str() == APPLICATION_OCTET_STREAM.essence_str());

        let format = if is_ssz {
            BodyFormat::Ssz
        } else {
            BodyFormat::Json
        };

        Ok(Self { format, body })
    }
}

impl EthBlockBody {
    pub const fn format(&self) -> BodyFormat {
        self.format
    }

    pub async fn decode(self, kind: BlockKind) -> Result<GenericSignedBlock, Error> {
        let bytes = to_bytes(self.body, usize::MAX)
            .await
            .map_err(AnyhowError::new)
            .map_err(Error::MalformedBody)?;

        match self.format {
            BodyFormat::Json => dispatch::decode_json(kind, &bytes),
            BodyFormat::Ssz => dispatch::decode_ssz(kind, &bytes),
        }
    }
}
