//! Dashboard HTTP server
//!
//! Serves the derived round views to the presentation layer and proxies the
//! single round trigger to the backend.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use round_client::RoundClient;
use round_core::{MapperOptions, RoundSnapshot, TopologyState};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::fallback;
use crate::state::{RoundPhase, RoundState};

/// Context shared across handlers
pub struct ServerContext {
    pub state: Arc<RoundState>,
    pub client: RoundClient,
    pub mapper: MapperOptions,
}

/// Dashboard HTTP server
pub struct DashboardServer {
    context: Arc<ServerContext>,
}

impl DashboardServer {
    pub fn new(context: Arc<ServerContext>) -> Self {
        Self { context }
    }

    /// Create the Axum router
    pub fn router(self) -> Router {
        // CORS layer to allow browser clients
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

        Router::new()
            .route("/api/run-round", post(handle_run_round))
            .route("/api/state", get(handle_state))
            .route("/api/topology", get(handle_topology))
            .route("/api/health", get(handle_health))
            .layer(cors)
            .with_state(self.context)
    }

    /// Run the server
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Dashboard server listening on {}", addr);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateResponse {
    phase: RoundPhase,
    /// Last trigger error, if any; the snapshot below is still the most
    /// recent good data
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    snapshot: RoundSnapshot,
}

/// Trigger one round upstream. Refused with 409 while a trigger is already
/// in flight; on failure the previous snapshot is kept.
async fn handle_run_round(State(context): State<Arc<ServerContext>>) -> impl IntoResponse {
    if !context.state.begin() {
        return (
            StatusCode::CONFLICT,
            Json(json!({"error": "a round is already running"})),
        )
            .into_response();
    }

    match context.client.run_round().await {
        Ok(round) => {
            let snapshot = RoundSnapshot::derive(&round, &context.mapper, Utc::now());
            tracing::info!(
                "round {} complete: {} clients, {} validators, network_ok={}",
                snapshot.round_id,
                snapshot.clients.len(),
                snapshot.validators.len(),
                snapshot.verdict.network_ok
            );
            context.state.complete(snapshot.clone());
            Json(snapshot).into_response()
        }
        Err(e) => {
            let message = e.to_string();
            tracing::error!("round trigger failed: {}", message);
            context.state.fail(message.clone());
            (StatusCode::BAD_GATEWAY, Json(json!({"error": message}))).into_response()
        }
    }
}

/// Current snapshot, or the static fallback before the first round
async fn handle_state(State(context): State<Arc<ServerContext>>) -> impl IntoResponse {
    let snapshot = context.state.snapshot().unwrap_or_else(fallback::snapshot);
    Json(StateResponse {
        phase: context.state.phase(),
        error: context.state.last_error(),
        snapshot,
    })
}

async fn handle_topology(State(context): State<Arc<ServerContext>>) -> impl IntoResponse {
    let snapshot = context.state.snapshot().unwrap_or_else(fallback::snapshot);
    Json(TopologyState::derive(&snapshot))
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
