//! Submission validation
//!
//! Format-only checks against the injected [`PatternRegistry`]: a value
//! that matches its pattern passes even if no such Aadhaar/PAN exists.
//! No checksum or government-registry lookup is performed here.
//!
//! Submission-level validation aggregates every failure into one ordered
//! list so the UI can highlight all invalid fields at once.

#![warn(missing_docs)]

pub mod sanitizer;

pub use sanitizer::Sanitizer;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use std::sync::Arc;
use thiserror::Error;
use udyam_schema::{PatternKind, PatternRegistry, SubmissionRecord};

/// A single field-level validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Required value absent or empty
    #[error("{field} is required")]
    MissingInput {
        /// Field path
        field: String,
    },
    /// Value present but not matching its pattern
    #[error("{message}")]
    PatternMismatch {
        /// Field path
        field: String,
        /// Help message naming the expected format
        message: String,
    },
    /// Consent flag not literally true
    #[error("Consent is required for {field}")]
    ConsentRequired {
        /// Field path
        field: String,
    },
    /// Non-optional free-text field empty
    #[error("{field} is required")]
    RequiredFieldMissing {
        /// Field path
        field: String,
    },
}

impl ValidationError {
    /// Field path this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingInput { field }
            | ValidationError::PatternMismatch { field, .. }
            | ValidationError::ConsentRequired { field }
            | ValidationError::RequiredFieldMissing { field } => field,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingInput { .. } => ErrorCode::MissingInput,
            ValidationError::PatternMismatch { .. } => ErrorCode::PatternMismatch,
            ValidationError::ConsentRequired { .. } => ErrorCode::ConsentRequired,
            ValidationError::RequiredFieldMissing { .. } => ErrorCode::RequiredFieldMissing,
        }
    }
}

/// Machine-readable failure code, surfaced verbatim to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Required value absent or empty
    MissingInput,
    /// Value present but not matching its pattern
    PatternMismatch,
    /// Consent flag not literally true
    ConsentRequired,
    /// Non-optional free-text field empty
    RequiredFieldMissing,
}

/// One entry of the aggregated submission error list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Field path
    pub field: String,
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<ValidationError> for FieldError {
    fn from(err: ValidationError) -> Self {
        Self {
            field: err.field().to_string(),
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Stateless format validator over the shared pattern registry.
#[derive(Clone)]
pub struct Validator {
    registry: Arc<PatternRegistry>,
}

impl Validator {
    /// Create a validator over a shared registry.
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }

    /// Validate a single raw value against a pattern kind.
    ///
    /// Absent/empty input fails with `MissingInput`; non-matching input
    /// fails with `PatternMismatch` carrying the kind's help message.
    pub fn validate_field(
        &self,
        kind: PatternKind,
        raw: Option<&str>,
    ) -> Result<(), ValidationError> {
        self.check_pattern(kind, kind.as_str(), raw)
    }

    fn check_pattern(
        &self,
        kind: PatternKind,
        field: &str,
        raw: Option<&str>,
    ) -> Result<(), ValidationError> {
        let raw = raw.unwrap_or("");
        if raw.trim().is_empty() {
            return Err(ValidationError::MissingInput {
                field: field.to_string(),
            });
        }
        // anchored match on the raw value: padding is a format error,
        // not something to clean up on the caller's behalf
        if !self.registry.matches(kind, raw) {
            return Err(ValidationError::PatternMismatch {
                field: field.to_string(),
                message: kind.help().to_string(),
            });
        }
        Ok(())
    }

    fn check_required(field: &str, raw: Option<&str>) -> Result<(), ValidationError> {
        if raw.map_or(true, |v| v.trim().is_empty()) {
            return Err(ValidationError::RequiredFieldMissing {
                field: field.to_string(),
            });
        }
        Ok(())
    }

    fn check_consent(field: &str, flag: Option<bool>) -> Result<(), ValidationError> {
        if flag != Some(true) {
            return Err(ValidationError::ConsentRequired {
                field: field.to_string(),
            });
        }
        Ok(())
    }

    /// Validate a full submission, aggregating every failure in record
    /// field order. `Ok(())` only when the record is entirely valid.
    pub fn validate_submission(&self, record: &SubmissionRecord) -> Result<(), Vec<FieldError>> {
        let mut errors: Vec<FieldError> = Vec::new();
        let mut push = |res: Result<(), ValidationError>| {
            if let Err(e) = res {
                errors.push(e.into());
            }
        };

        push(self.check_pattern(
            PatternKind::Aadhaar,
            "aadhaarNumber",
            record.aadhaar_number.as_deref(),
        ));
        push(Self::check_required(
            "entrepreneurName",
            record.entrepreneur_name.as_deref(),
        ));
        push(Self::check_consent("consent", record.consent));
        push(self.check_pattern(PatternKind::Otp, "otp", record.otp.as_deref()));
        if record.otp_verified != Some(true) {
            push(Err(ValidationError::RequiredFieldMissing {
                field: "otpVerified".to_string(),
            }));
        }
        push(Self::check_required(
            "organisationType",
            record.organisation_type.as_deref(),
        ));
        push(self.check_pattern(
            PatternKind::Pan,
            "panNumber",
            record.pan_number.as_deref(),
        ));
        push(Self::check_required(
            "panHolderName",
            record.pan_holder_name.as_deref(),
        ));
        push(Self::check_required("dob", record.dob.as_deref()));
        push(Self::check_consent("panConsent", record.pan_consent));
        push(self.check_pattern(
            PatternKind::Pincode,
            "pincode",
            record.pincode.as_deref(),
        ));
        push(Self::check_required("state", record.state.as_deref()));
        push(Self::check_required("city", record.city.as_deref()));

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = errors.len(), "submission rejected");
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> Validator {
        Validator::new(Arc::new(PatternRegistry::new()))
    }

    fn valid_record() -> SubmissionRecord {
        SubmissionRecord {
            aadhaar_number: Some("234567890123".into()),
            entrepreneur_name: Some("A".into()),
            consent: Some(true),
            otp: Some("123456".into()),
            otp_verified: Some(true),
            organisation_type: Some("proprietary".into()),
            pan_number: Some("ABCDE1234F".into()),
            pan_holder_name: Some("A".into()),
            dob: Some("1990-01-01".into()),
            pan_consent: Some(true),
            pincode: Some("560011".into()),
            state: Some("Karnataka".into()),
            city: Some("Bangalore".into()),
        }
    }

    #[test]
    fn test_validate_field_missing() {
        let v = validator();
        let err = v.validate_field(PatternKind::Aadhaar, None).unwrap_err();
        assert!(matches!(err, ValidationError::MissingInput { .. }));
        let err = v.validate_field(PatternKind::Aadhaar, Some("  ")).unwrap_err();
        assert!(matches!(err, ValidationError::MissingInput { .. }));
    }

    #[test]
    fn test_validate_field_pattern_message() {
        let v = validator();
        let err = v.validate_field(PatternKind::Pan, Some("BADPAN0000X")).unwrap_err();
        assert!(matches!(err, ValidationError::PatternMismatch { .. }));
        assert_eq!(err.to_string(), "Invalid PAN format. Expected: ABCDE1234F");
    }

    #[test]
    fn test_whitespace_padded_value_rejected() {
        let v = validator();
        for (kind, padded) in [
            (PatternKind::Aadhaar, " 234567890123 "),
            (PatternKind::Pan, "ABCDE1234F "),
            (PatternKind::Otp, " 123456"),
            (PatternKind::Pincode, "560011\n"),
        ] {
            let err = v.validate_field(kind, Some(padded)).unwrap_err();
            assert!(
                matches!(err, ValidationError::PatternMismatch { .. }),
                "{kind}: padded value must fail the anchored pattern"
            );
        }
    }

    #[test]
    fn test_format_only_no_semantic_check() {
        // matches the pattern even though no such Aadhaar is issued
        let v = validator();
        assert!(v.validate_field(PatternKind::Aadhaar, Some("999999999999")).is_ok());
    }

    #[test]
    fn test_submission_valid() {
        assert!(validator().validate_submission(&valid_record()).is_ok());
    }

    #[test]
    fn test_submission_consent_required() {
        let v = validator();

        let mut rec = valid_record();
        rec.consent = Some(false);
        let errs = v.validate_submission(&rec).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "consent");
        assert_eq!(errs[0].code, ErrorCode::ConsentRequired);

        let mut rec = valid_record();
        rec.pan_consent = None;
        let errs = v.validate_submission(&rec).unwrap_err();
        assert_eq!(errs[0].field, "panConsent");
        assert_eq!(errs[0].code, ErrorCode::ConsentRequired);
    }

    #[test]
    fn test_submission_aggregates_in_field_order() {
        let v = validator();
        let mut rec = valid_record();
        rec.aadhaar_number = Some("123".into());
        rec.pan_number = None;
        rec.city = Some("".into());

        let errs = v.validate_submission(&rec).unwrap_err();
        let fields: Vec<&str> = errs.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["aadhaarNumber", "panNumber", "city"]);
        assert_eq!(errs[0].code, ErrorCode::PatternMismatch);
        assert_eq!(errs[1].code, ErrorCode::MissingInput);
        assert_eq!(errs[2].code, ErrorCode::RequiredFieldMissing);
    }

    #[test]
    fn test_field_error_serializes_codes() {
        let err: FieldError = ValidationError::ConsentRequired {
            field: "consent".into(),
        }
        .into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "CONSENT_REQUIRED");
        assert_eq!(json["field"], "consent");
    }
}
