//! Handlers for feedback submission and read-back

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::info;

use crate::{
    error::{AppError, Result},
    extractors::SubmissionBody,
    models::{ApiResponse, FeedbackRecord, SubmissionReceipt},
    validation::{validate_email, INVALID_EMAIL_FORMAT, MISSING_REQUIRED_FIELDS},
    AppState,
};

pub const FEEDBACK_SAVED: &str = "反馈已成功保存";

pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    SubmissionBody(submission): SubmissionBody,
) -> Result<impl IntoResponse> {
    let name = submission.name.unwrap_or_default().trim().to_string();
    let email = submission.email.unwrap_or_default().trim().to_string();
    let message = submission.message.unwrap_or_default().trim().to_string();

    info!("POST /submit-feedback - name: {}", name);

    if name.is_empty() || message.is_empty() {
        return Err(AppError::Validation(MISSING_REQUIRED_FIELDS.to_string()));
    }

    if !email.is_empty() && validate_email(&email).is_err() {
        return Err(AppError::Validation(INVALID_EMAIL_FORMAT.to_string()));
    }

    let timestamp = submission
        .timestamp
        .as_deref()
        .map(str::trim)
        .filter(|ts| !ts.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

    let record = FeedbackRecord {
        name,
        email,
        message,
        timestamp,
    };

    state.store.append(&record.render_block()).await?;

    let FeedbackRecord {
        name, timestamp, ..
    } = record;

    Ok(Json(ApiResponse::success_with_message(
        FEEDBACK_SAVED.to_string(),
        SubmissionReceipt { name, timestamp },
    )))
}

pub async fn handle_get_feedback(State(state): State<AppState>) -> Result<impl IntoResponse> {
    info!("GET /get-feedback");

    let contents = state.store.read_all().await?;

    Ok(Json(ApiResponse::success(contents)))
}

// Bare OPTIONS requests that the CORS layer passed through get a plain 200.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
