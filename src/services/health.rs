use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::daily_post::next_fire_utc;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: i64,
    /// When the next scheduled post will go out, in UTC.
    pub next_post: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(config: Arc<Config>) -> Self {
        let state = AppState {
            config,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = Utc::now();
    let next_post = next_fire_utc(
        now,
        state.config.post_timezone,
        state.config.post_hour,
        state.config.post_minute,
        0,
    );

    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: now,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (now - state.start_time).num_seconds(),
        next_post,
    })
}

async fn liveness_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "alive" }))
}
