//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, metrics)
//! - Bind server to listener
//! - Stop on the shutdown broadcast

use axum::{
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::assets::AssetPipeline;
use crate::config::{AppConfig, CorsConfig};
use crate::http::error::ServerError;
use crate::http::handlers;
use crate::http::middleware::track_metrics;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::rpc::RpcClient;
use crate::world::WorldClient;

/// Headroom between the slowest outbound call and the inbound deadline.
pub const DEADLINE_MARGIN_SECS: u64 = 1;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: AssetPipeline,
    /// `None` when world data is disabled.
    pub world: Option<WorldClient>,
}

impl AppState {
    /// Build clients from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServerError> {
        let rpc = RpcClient::new(&config.rpc)?;
        let world = if config.world.enabled {
            Some(WorldClient::new(&config.world)?)
        } else {
            None
        };

        Ok(Self {
            pipeline: AssetPipeline::new(rpc),
            world,
        })
    }
}

/// HTTP server for the fleet analytics API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, ServerError> {
        let state = AppState::from_config(&config)?;
        let router = Self::build_router(&config, state)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Result<Router, ServerError> {
        let router = Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/assets/{wallet}", get(handlers::get_assets))
            .route("/fleet/{wallet}", get(handlers::get_fleet))
            .route("/transactions/{wallet}", get(handlers::get_transactions))
            .route("/eve-world", get(handlers::get_world))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(TimeoutLayer::new(request_deadline(config)))
            .layer(cors_layer(&config.cors)?)
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(set_request_id_layer());

        Ok(router)
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            rpc_url = %self.config.rpc.url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The assembled router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Inbound request deadline.
///
/// Always outlasts the ledger and world call timeouts so an outbound timeout
/// is answered by the handler (503 or fallback) rather than cut off here.
pub fn request_deadline(config: &AppConfig) -> Duration {
    let mut outbound = config.rpc.timeout_secs;
    if config.world.enabled {
        outbound = outbound.max(config.world.timeout_secs);
    }
    let secs = config
        .timeouts
        .request_secs
        .max(outbound.saturating_add(DEADLINE_MARGIN_SECS));
    Duration::from_secs(secs)
}

/// CORS policy from configuration. `*` admits any origin.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ServerError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o).map_err(|_| ServerError::InvalidOrigin(o.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
