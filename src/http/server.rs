//! HTTP server setup and dispatch.
//!
//! # Responsibilities
//! - Create the Axum router: catch-all forwarding under /api, /healthz
//! - Wire middleware (request ID, tracing, body limit, department gate)
//! - Apply hot config reloads atomically
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::middleware::department_gate;
use crate::http::request::{request_id, RequestUuid};
use crate::observability::metrics;
use crate::proxy::{Forwarder, UpstreamTarget};
use crate::proxy::forwarder::UpstreamError;

/// Config-derived state swapped wholesale on reload.
pub struct RuntimeState {
    pub config: GatewayConfig,
    pub upstream: UpstreamTarget,
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<ArcSwap<RuntimeState>>,
    pub forwarder: Arc<Forwarder>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamTarget::from_config(&config.upstream)?;
        let forwarder = Arc::new(Forwarder::new(Duration::from_secs(
            config.upstream.connect_secs,
        )));
        let max_body_size = config.security.max_body_size;

        let state = AppState {
            runtime: Arc::new(ArcSwap::from_pointee(RuntimeState { config, upstream })),
            forwarder,
        };

        let router = Self::build_router(state.clone(), max_body_size);
        Ok(Self { router, state })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState, max_body_size: usize) -> Router {
        let api = Router::new()
            .route("/api", any(forward_handler))
            .route("/api/{*path}", any(forward_handler))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                department_gate,
            ));

        Router::new()
            .route("/healthz", get(health_handler))
            .merge(api)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(RequestUuid))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(max_body_size)),
            )
    }

    /// Run the server until shutdown, draining config updates as they arrive.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<GatewayConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let runtime = self.state.runtime.clone();
        tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                match UpstreamTarget::from_config(&new_config.upstream) {
                    Ok(upstream) => {
                        tracing::info!(
                            upstream = %new_config.upstream.base_url,
                            enforce_access = new_config.access.enforce,
                            "Configuration applied"
                        );
                        runtime.store(Arc::new(RuntimeState {
                            config: new_config,
                            upstream,
                        }));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Config update rejected");
                    }
                }
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Liveness endpoint, also used by the management CLI.
async fn health_handler() -> Response {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

/// Catch-all forwarding handler for the /api prefix.
async fn forward_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let started = Instant::now();
    let request_id = request_id(request.headers()).to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let runtime = state.runtime.load_full();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Forwarding request"
    );

    match state.forwarder.forward(&runtime.upstream, request).await {
        Ok(response) => {
            metrics::record_forward(&method, response.status().as_u16(), started);
            response.into_response()
        }
        Err(err) => {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %err,
                timeout = ?runtime.upstream.timeout(),
                "Forwarding failed"
            );
            let response = err.into_response();
            metrics::record_forward(&method, response.status().as_u16(), started);
            response
        }
    }
}
