//! Form schema endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use udyam_schema::FormSchema;

use crate::{models::ApiResponse, ApiState};

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/form-schema/:step", get(form_schema))
        .route("/scraped-schema/:step", get(scraped_schema))
}

/// Schema for a registration step, resolved through the fallback chain
/// (live extraction, cached extraction, static default).
#[utoipa::path(
    get,
    path = "/form-schema/{step}",
    params(("step" = u8, Path, description = "Registration step, 1 or 2")),
    responses(
        (status = 200, description = "Step schema", body = FormSchema),
        (status = 404, description = "Unknown step")
    ),
    tag = "schema"
)]
pub async fn form_schema(
    State(state): State<Arc<ApiState>>,
    Path(step): Path<u8>,
) -> Response {
    match state.provider.get_schema(step).await {
        Some(schema) => Json(schema).into_response(),
        None => not_found(step),
    }
}

/// Cached extractor output only; 404 when no scrape has run yet.
#[utoipa::path(
    get,
    path = "/scraped-schema/{step}",
    params(("step" = u8, Path, description = "Registration step, 1 or 2")),
    responses(
        (status = 200, description = "Cached scraped schema", body = FormSchema),
        (status = 404, description = "No cached schema for this step")
    ),
    tag = "schema"
)]
pub async fn scraped_schema(
    State(state): State<Arc<ApiState>>,
    Path(step): Path<u8>,
) -> Response {
    match state.provider.cached_schema(step).await {
        Ok(schema) => Json(schema).into_response(),
        Err(err) => {
            tracing::debug!(step, error = %err, "scraped schema not served");
            not_found(step)
        }
    }
}

fn not_found(step: u8) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<FormSchema>::error(
            "SCHEMA_NOT_FOUND",
            &format!("no schema available for step {step}"),
        )),
    )
        .into_response()
}
