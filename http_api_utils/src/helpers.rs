use core::time::Duration;

use axum::{error_handling::HandleErrorLayer, http::StatusCode, BoxError, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{logging, middleware, traits::ApiError};

/// Switches for the optional layers added by [`extend_router_with_middleware`].
#[derive(Clone, Copy, Default, Debug)]
#[expect(clippy::struct_excessive_bools)]
pub struct MiddlewareOptions {
    pub timeout: Option<Duration>,
    pub log_requests: bool,
    pub log_headers: bool,
    pub log_bodies: bool,
    pub patch_content_type: bool,
}

pub fn extend_router_with_middleware<E: ApiError + Send + Sync + 'static>(
    mut router: Router,
    allowed_origins: AllowOrigin,
    options: MiddlewareOptions,
) -> Router {
    let MiddlewareOptions {
        timeout,
        log_requests,
        log_headers,
        log_bodies,
        patch_content_type,
    } = options;

    if let Some(timeout) = timeout {
        router = router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|_: BoxError| async {
                    StatusCode::REQUEST_TIMEOUT
                }))
                .timeout(timeout),
        );
    }

    router = router.layer(CorsLayer::new().allow_origin(allowed_origins).vary([]));

    if log_requests {
        router = router.layer(axum::middleware::from_fn(
            middleware::insert_response_extensions,
        ));
    }

    if log_requests || log_headers {
        router = router.layer(
            TraceLayer::new_for_http()
                .on_request(logging::log_request(log_requests, log_headers))
                .on_response(logging::log_response::<E>(log_requests)),
        );
    }

    if log_bodies {
        router = router.layer(axum::middleware::from_fn(
            middleware::log_request_and_response_bodies,
        ));
    }

    if patch_content_type {
        router = router.layer(axum::middleware::map_request(
            middleware::patch_content_type,
        ));
    }

    router
}
