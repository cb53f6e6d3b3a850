//! Single-field validation endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use udyam_schema::PatternKind;

use crate::models::{AadhaarBody, OtpBody, PanBody, PincodeBody, ValidateResponse};
use crate::ApiState;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/validate/aadhaar", post(validate_aadhaar))
        .route("/validate/pan", post(validate_pan))
        .route("/validate/otp", post(validate_otp))
        .route("/validate/pincode", post(validate_pincode))
}

fn verdict(
    state: &ApiState,
    kind: PatternKind,
    raw: Option<&str>,
) -> (StatusCode, Json<ValidateResponse>) {
    match state.validator.validate_field(kind, raw) {
        Ok(()) => (
            StatusCode::OK,
            Json(ValidateResponse::ok(format!("Valid {kind} format"))),
        ),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ValidateResponse::fail(err.to_string())),
        ),
    }
}

/// Validate an Aadhaar number's format
#[utoipa::path(
    post,
    path = "/validate/aadhaar",
    request_body = AadhaarBody,
    responses(
        (status = 200, description = "Format valid", body = ValidateResponse),
        (status = 400, description = "Format invalid", body = ValidateResponse)
    ),
    tag = "validate"
)]
pub async fn validate_aadhaar(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<AadhaarBody>,
) -> (StatusCode, Json<ValidateResponse>) {
    verdict(&state, PatternKind::Aadhaar, body.aadhaar_number.as_deref())
}

/// Validate a PAN's format
#[utoipa::path(
    post,
    path = "/validate/pan",
    request_body = PanBody,
    responses(
        (status = 200, description = "Format valid", body = ValidateResponse),
        (status = 400, description = "Format invalid", body = ValidateResponse)
    ),
    tag = "validate"
)]
pub async fn validate_pan(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<PanBody>,
) -> (StatusCode, Json<ValidateResponse>) {
    verdict(&state, PatternKind::Pan, body.pan_number.as_deref())
}

/// Validate an OTP's format
#[utoipa::path(
    post,
    path = "/validate/otp",
    request_body = OtpBody,
    responses(
        (status = 200, description = "Format valid", body = ValidateResponse),
        (status = 400, description = "Format invalid", body = ValidateResponse)
    ),
    tag = "validate"
)]
pub async fn validate_otp(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<OtpBody>,
) -> (StatusCode, Json<ValidateResponse>) {
    verdict(&state, PatternKind::Otp, body.otp.as_deref())
}

/// Validate a PIN code's format
#[utoipa::path(
    post,
    path = "/validate/pincode",
    request_body = PincodeBody,
    responses(
        (status = 200, description = "Format valid", body = ValidateResponse),
        (status = 400, description = "Format invalid", body = ValidateResponse)
    ),
    tag = "validate"
)]
pub async fn validate_pincode(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<PincodeBody>,
) -> (StatusCode, Json<ValidateResponse>) {
    verdict(&state, PatternKind::Pincode, body.pincode.as_deref())
}
