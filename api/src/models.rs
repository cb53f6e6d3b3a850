//! API Models

use serde::{Deserialize, Serialize};
use udyam_schema::SubmissionRecord;
use udyam_validate::FieldError;
use utoipa::ToSchema;
use uuid::Uuid;

/// Standard API response envelope for schema and error payloads.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorResponse {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// Error body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

// ============ Field validation ============

/// Body of `POST /validate/aadhaar`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AadhaarBody {
    pub aadhaar_number: Option<String>,
}

/// Body of `POST /validate/pan`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PanBody {
    pub pan_number: Option<String>,
}

/// Body of `POST /validate/otp`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OtpBody {
    pub otp: Option<String>,
}

/// Body of `POST /validate/pincode`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PincodeBody {
    pub pincode: Option<String>,
}

/// Verdict of a single-field validation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidateResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

// ============ Submission ============

/// Successful submission outcome, stored or explicitly acknowledged
/// as unstored when no sink is configured.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub stored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The validated, sanitized record, echoed back when unstored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SubmissionRecord>,
}

impl SubmitResponse {
    pub fn stored(record_id: Uuid) -> Self {
        Self {
            success: true,
            stored: true,
            record_id: Some(record_id),
            message: Some("Registration submitted".into()),
            data: None,
        }
    }

    pub fn unstored(record: SubmissionRecord) -> Self {
        Self {
            success: true,
            stored: false,
            record_id: None,
            message: Some("Validated successfully; storage is not configured".into()),
            data: Some(record),
        }
    }
}

/// Aggregated per-field rejection of a submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitRejection {
    pub success: bool,
    pub errors: Vec<FieldError>,
}

impl SubmitRejection {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}
