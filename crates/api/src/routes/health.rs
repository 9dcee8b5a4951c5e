//! Liveness route for Biztime.
//!
//! Mounted at the root next to `/companies` and `/invoices`. A failing
//! `SELECT 1` against the pool reports `degraded` but still answers 200, so
//! a load balancer can tell "process up, Postgres down" apart from a dead
//! process.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when Postgres answered, `degraded` otherwise.
    pub status: &'static str,
    /// `biztime-api` package version.
    pub version: &'static str,
    /// Result of the round-trip query.
    pub db_healthy: bool,
}

impl HealthResponse {
    fn from_db_check(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match biztime_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    Json(HealthResponse::from_db_check(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
