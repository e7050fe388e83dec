use core::{net::SocketAddr, time::Duration};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, OriginalUri},
    http::{Method, Request},
    response::Response,
};
use log::info;
use tracing::Span;

use crate::ApiError;

// `TraceLayer` already logs most of this out of the box, but we still use `log`.
// We have to duplicate some of the information because `log` does not have spans.
//
// By default, `TraceLayer` emits events at `DEBUG` with the default target.
// Applications using this crate usually filter them out.

pub fn log_request(
    log_requests: bool,
    log_headers: bool,
) -> impl Fn(&Request<Body>, &Span) + Clone {
    move |request: &Request<Body>, _span: &Span| {
        let method = request.method();
        let uri = request.uri();

        if log_requests {
            let version = request.version();
            let remote = format_remote(request.extensions().get());

            info!("received request ({method} {uri} {version:?}) from {remote}");
        }

        if log_headers {
            let headers = request.headers();

            info!("request headers for ({method} {uri}): {headers:?}");
        }
    }
}

pub fn log_response<E: ApiError + Send + Sync + 'static>(
    log_requests: bool,
) -> impl Fn(&Response, Duration, &Span) + Clone {
    move |response: &Response, latency: Duration, _span: &Span| {
        if !log_requests {
            return;
        }

        let version = response.version();
        let status = response.status();
        let extensions = response.extensions();

        // The extensions are missing if `insert_response_extensions` did not run,
        // which happens when a request is rejected by an outer layer.
        let method = extensions
            .get::<Method>()
            .map_or_else(|| "?".to_owned(), ToString::to_string);

        let original_uri = extensions
            .get::<OriginalUri>()
            .map_or_else(|| "?".to_owned(), |OriginalUri(uri)| uri.to_string());

        let remote = format_remote(extensions.get());

        match (
            // Use `match` to extend the lifetime of `Arguments` created by `format_args!`. See:
            // <https://stackoverflow.com/questions/48732263/why-is-rusts-assert-eq-implemented-using-a-match/54855986#54855986>
            format_args!(
                "produced response ({version:?} {status}) \
                to ({method} {original_uri}) \
                for {remote} in {latency:?}",
            ),
            extensions.get::<Arc<E>>(),
        ) {
            (shared, Some(error)) => info!("{shared} (error: {})", error.format_sources()),
            (shared, None) => info!("{shared}"),
        }
    }
}

fn format_remote(connect_info: Option<&ConnectInfo<SocketAddr>>) -> String {
    connect_info.map_or_else(
        || "unknown peer".to_owned(),
        |ConnectInfo(remote)| remote.to_string(),
    )
}
