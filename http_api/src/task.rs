use core::net::SocketAddr;

use anyhow::{Error as AnyhowError, Result};
use http_api_utils::MiddlewareOptions;
use log::info;
use tokio::net::TcpListener;
use tracing::instrument;

use crate::{
    collaborators::Collaborators, error::Error, http_api_config::HttpApiConfig, routing,
};

pub struct HttpApi {
    pub collaborators: Collaborators,
    pub http_api_config: HttpApiConfig,
}

impl HttpApi {
    #[instrument(parent = None, skip(self), fields(address = %self.http_api_config.address))]
    pub async fn run(self) -> Result<()> {
        let listener = self.http_api_config.listener().await?;
        self.run_internal(listener).await
    }

    // Passing in a bound listener ensures the socket is listening by the time tests submit
    // requests and lets them use the port assigned by binding to port 0.
    pub(crate) async fn run_internal(self, listener: TcpListener) -> Result<()> {
        let Self {
            collaborators,
            http_api_config,
        } = self;

        let HttpApiConfig {
            address: _,
            allow_origin,
            timeout,
            log_requests,
            patch_content_type,
        } = http_api_config;

        let options = MiddlewareOptions {
            timeout,
            log_requests,
            patch_content_type,
            ..MiddlewareOptions::default()
        };

        let router = routing::routes(collaborators);
        let router =
            http_api_utils::extend_router_with_middleware::<Error>(router, allow_origin, options);

        let service = router.into_make_service_with_connect_info::<SocketAddr>();

        info!("HTTP server listening on {}", listener.local_addr()?);

        axum::serve(listener, service)
            .await
            .map_err(AnyhowError::new)
    }
}
