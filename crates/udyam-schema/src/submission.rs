//! Submission record shape
//!
//! Explicit typed shape for a registration attempt. Every field is
//! optional at the boundary so a malformed body deserializes instead of
//! failing opaquely; the validator decides what is actually missing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The complete set of values for one registration attempt.
///
/// Created transiently per request, forwarded to the sink after
/// validation and sanitization, never updated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// 12-digit Aadhaar number
    pub aadhaar_number: Option<String>,
    /// Entrepreneur name as per Aadhaar
    pub entrepreneur_name: Option<String>,
    /// Aadhaar usage consent; must be literally true
    pub consent: Option<bool>,
    /// 6-digit OTP
    pub otp: Option<String>,
    /// Whether the OTP step-up completed; must be literally true
    pub otp_verified: Option<bool>,
    /// Organisation type value from the step-2 select
    pub organisation_type: Option<String>,
    /// 10-character PAN
    pub pan_number: Option<String>,
    /// Name of the PAN holder
    pub pan_holder_name: Option<String>,
    /// Date of birth or incorporation, as per PAN
    pub dob: Option<String>,
    /// PAN data usage consent; must be literally true
    pub pan_consent: Option<bool>,
    /// 6-digit postal PIN code
    pub pincode: Option<String>,
    /// State
    pub state: Option<String>,
    /// City
    pub city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_names() {
        let json = r#"{
            "aadhaarNumber": "234567890123",
            "entrepreneurName": "A",
            "consent": true,
            "otp": "123456",
            "otpVerified": true,
            "panNumber": "ABCDE1234F",
            "panConsent": true
        }"#;
        let rec: SubmissionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.aadhaar_number.as_deref(), Some("234567890123"));
        assert_eq!(rec.consent, Some(true));
        assert_eq!(rec.pan_number.as_deref(), Some("ABCDE1234F"));
        // absent fields stay None rather than failing deserialization
        assert!(rec.organisation_type.is_none());
        assert!(rec.pincode.is_none());
    }
}
