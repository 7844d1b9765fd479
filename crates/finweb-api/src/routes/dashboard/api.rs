//! Dashboard JSON endpoints

use crate::AppState;
use axum::Json;
use serde_json::Value;

/// Stats passthrough so the client script can refresh the dashboard
/// figures without a full page reload. Degrades to an empty object,
/// same as the page rendering.
pub async fn api_stats(state: axum::extract::State<AppState>) -> Json<Value> {
    match state.client.dashboard_stats_raw().await {
        Ok(value) => Json(value),
        Err(e) => {
            log::error!("error fetching /dashboard/stats/: {}", e);
            Json(serde_json::json!({}))
        }
    }
}
