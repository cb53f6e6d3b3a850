//! Submission endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use udyam_schema::SubmissionRecord;

use crate::models::{SubmitRejection, SubmitResponse};
use crate::ApiState;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new().route("/submit", post(submit))
}

/// Submit a complete registration record.
///
/// Validation runs on the raw values, so injected markup inside a
/// pattern field fails as a format error; sanitization runs on the
/// accepted record just before it reaches the sink.
#[utoipa::path(
    post,
    path = "/submit",
    request_body = SubmissionRecord,
    responses(
        (status = 201, description = "Stored", body = SubmitResponse),
        (status = 200, description = "Valid but not stored (no sink configured)", body = SubmitResponse),
        (status = 400, description = "Validation failed", body = SubmitRejection)
    ),
    tag = "submit"
)]
pub async fn submit(
    State(state): State<Arc<ApiState>>,
    Json(record): Json<SubmissionRecord>,
) -> Response {
    if let Err(errors) = state.validator.validate_submission(&record) {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmitRejection::new(errors)),
        )
            .into_response();
    }

    let clean = state.sanitizer.sanitize(&record);

    let Some(sink) = &state.sink else {
        return (StatusCode::OK, Json(SubmitResponse::unstored(clean))).into_response();
    };

    match sink.store(clean.clone()).await {
        Ok(id) => (StatusCode::CREATED, Json(SubmitResponse::stored(id))).into_response(),
        Err(err) => {
            // storage degradation is not the client's problem
            tracing::warn!(error = %err, "sink unavailable, acknowledging unstored");
            (StatusCode::OK, Json(SubmitResponse::unstored(clean))).into_response()
        }
    }
}
