//! Route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::assets::{AssetsReport, FleetReport, TransactionsReport, DEFAULT_TRANSACTIONS_LIMIT};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::world::WorldError;

pub const SERVICE_NAME: &str = "EVE Frontier x Sui Fleet Analytics";

const WORLD_SOURCE: &str = "eve-frontier-world-api";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub rpc: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct WorldQuery {
    pub endpoint: Option<String>,
}

/// Service metadata and endpoint list.
pub async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut endpoints = vec![
        "/health",
        "/assets/{wallet}",
        "/fleet/{wallet}",
        "/transactions/{wallet}",
    ];
    if state.world.is_some() {
        endpoints.push("/eve-world");
    }

    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "rpc": state.pipeline.rpc().url(),
        "data": "live Sui ledger",
        "endpoints": endpoints,
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        rpc: state.pipeline.rpc().url().to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_assets(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<AssetsReport>, ApiError> {
    let report = state.pipeline.get_assets(&wallet).await?;
    Ok(Json(report))
}

pub async fn get_fleet(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<FleetReport>, ApiError> {
    let report = state.pipeline.get_fleet(&wallet).await?;
    tracing::info!(
        wallet = %wallet,
        total_assets = report.fleet_summary.total_assets,
        ships = report.fleet_summary.ships,
        "Fleet summary built"
    );
    Ok(Json(report))
}

pub async fn get_transactions(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<TransactionsReport>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_TRANSACTIONS_LIMIT);
    let report = state.pipeline.get_transactions(&wallet, limit).await?;
    Ok(Json(report))
}

/// World API passthrough. Upstream failures still answer 200 so the
/// dashboard keeps rendering ledger data.
pub async fn get_world(State(state): State<AppState>, Query(query): Query<WorldQuery>) -> Response {
    let Some(world) = &state.world else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "world data is disabled" })),
        )
            .into_response();
    };

    let endpoint = query.endpoint.unwrap_or_else(|| "types".to_string());

    match world.fetch(&endpoint).await {
        Ok(data) => Json(json!({
            "source": WORLD_SOURCE,
            "endpoint": endpoint,
            "data": data,
        }))
        .into_response(),
        Err(WorldError::InvalidEndpoint(name)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("invalid endpoint '{}'", name) })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(endpoint = %endpoint, error = %e, "World API unavailable");
            Json(json!({
                "source": WORLD_SOURCE,
                "endpoint": endpoint,
                "error": e.to_string(),
                "note": "EVE Frontier World API may be in maintenance. Sui on-chain data is always available.",
                "data": null,
            }))
            .into_response()
        }
    }
}
