//! Health endpoint handler

use axum::{extract::State, response::IntoResponse, Json};

use crate::{models::ApiResponse, AppState};

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state
        .store
        .stats()
        .await
        .unwrap_or_else(|_| serde_json::json!({}));

    Json(ApiResponse::success(serde_json::json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "timestamp": chrono::Utc::now().timestamp(),
        "store_stats": stats,
    })))
}
