use core::net::SocketAddr;

use axum::{
    body::{Body, Bytes},
    extract::{ConnectInfo, OriginalUri, Request},
    http::{
        header::{HeaderValue, CONTENT_TYPE},
        Uri,
    },
    middleware::Next,
    response::{IntoResponse as _, Response},
    Extension,
};
use log::info;
use mime::APPLICATION_JSON;

use crate::{error::Error, misc::Direction};

// Block bodies with blob sidecars can be several megabytes.
// They are still logged because blocks are the only thing this API accepts.
const MAX_LOGGED_BODY_SIZE: usize = 16 * 1024 * 1024;

async fn buffer_and_log(direction: Direction, uri: &Uri, body: Body) -> Result<Bytes, Error> {
    let bytes = axum::body::to_bytes(body, MAX_LOGGED_BODY_SIZE)
        .await
        .map_err(|error| Error::InvalidBody {
            direction,
            uri: uri.clone(),
            source: error.into(),
        })?;

    match core::str::from_utf8(&bytes) {
        Ok(string) => info!("{direction} body for {uri}: {string:?}"),
        Err(_) => info!("{direction} body for {uri}: {} bytes of binary data", bytes.len()),
    }

    Ok(bytes)
}

pub async fn insert_response_extensions(request: Request, next: Next) -> Response {
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .copied();

    let method = request.method().clone();

    let original_uri = request
        .extensions()
        .get::<OriginalUri>()
        .cloned()
        .unwrap_or_else(|| OriginalUri(request.uri().clone()));

    let mut response = next.run(request).await;

    if let Some(remote) = remote {
        response.extensions_mut().insert(remote);
    }

    (Extension(method), Extension(original_uri), response).into_response()
}

pub async fn log_request_and_response_bodies(
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    let uri = request.uri().clone();

    let (parts, body) = request.into_parts();
    let bytes = buffer_and_log(Direction::Request, &uri, body).await?;
    let request = Request::from_parts(parts, Body::from(bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = buffer_and_log(Direction::Response, &uri, body).await?;
    let response = Response::from_parts(parts, Body::from(bytes));

    Ok(response)
}

// Some validator clients submit requests without `Content-Type`.
// The Eth Beacon Node API [requires `Content-Type` to be present].
//
// [requires `Content-Type` to be present]: https://github.com/ethereum/beacon-APIs/blob/6ed3820587afce7525528ca1d21abae7647087a3/beacon-node-oapi.yaml#L8-L9
pub async fn patch_content_type(mut request: Request) -> Request {
    request
        .headers_mut()
        .entry(CONTENT_TYPE)
        .or_insert(HeaderValue::from_static(APPLICATION_JSON.as_ref()));

    request
}
