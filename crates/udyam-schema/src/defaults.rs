//! Hand-authored default schemas
//!
//! Always-available fallback when no scraped schema can be served. These
//! mirror the live Udyam registration form as of authoring; the extractor
//! exists to catch drift.

use crate::field::{FieldOption, FieldType, FieldValidation, FormField, FormSchema};
use crate::patterns::PatternKind;

/// Default schema for a step, if the step is known.
pub fn default_schema(step: u8) -> Option<FormSchema> {
    match step {
        1 => Some(default_step1()),
        2 => Some(default_step2()),
        _ => None,
    }
}

fn pattern_validation(kind: PatternKind, required: bool, max_length: Option<u32>) -> FieldValidation {
    FieldValidation {
        required,
        min_length: None,
        max_length,
        pattern: Some(kind.pattern_str().to_string()),
        help_text: Some(kind.help().to_string()),
    }
}

fn required_text() -> FieldValidation {
    FieldValidation {
        required: true,
        ..Default::default()
    }
}

/// Step 1: Aadhaar number, entrepreneur name, consent, OTP.
pub fn default_step1() -> FormSchema {
    FormSchema {
        title: "Aadhaar Verification With OTP".into(),
        step: 1,
        fields: vec![
            FormField {
                id: "aadhaarNumber".into(),
                name: "aadhaarNumber".into(),
                label: "Aadhaar Number / आधार संख्या".into(),
                field_type: FieldType::Tel,
                options: vec![],
                validation: Some(pattern_validation(PatternKind::Aadhaar, true, Some(12))),
            },
            FormField {
                id: "entrepreneurName".into(),
                name: "entrepreneurName".into(),
                label: "Name of Entrepreneur / उद्यमी का नाम".into(),
                field_type: FieldType::Text,
                options: vec![],
                validation: Some(FieldValidation {
                    required: true,
                    max_length: Some(100),
                    ..Default::default()
                }),
            },
            FormField {
                id: "consent".into(),
                name: "consent".into(),
                label: "I hereby give my consent to Ministry of MSME for using my Aadhaar number for Udyam Registration".into(),
                field_type: FieldType::Checkbox,
                options: vec![],
                validation: Some(required_text()),
            },
            FormField {
                id: "otp".into(),
                name: "otp".into(),
                label: "Enter One Time Password (OTP)".into(),
                field_type: FieldType::Otp,
                options: vec![],
                validation: Some(pattern_validation(PatternKind::Otp, true, Some(6))),
            },
        ],
    }
}

/// Step 2: organisation type, PAN details, address fields.
pub fn default_step2() -> FormSchema {
    FormSchema {
        title: "PAN Verification".into(),
        step: 2,
        fields: vec![
            FormField {
                id: "organisationType".into(),
                name: "organisationType".into(),
                label: "Type of Organisation / संगठन के प्रकार".into(),
                field_type: FieldType::Select,
                options: vec![
                    FieldOption::new("Proprietary / एकल स्वामित्व", "proprietary"),
                    FieldOption::new("Hindu Undivided Family / हिंदू अविभाजित परिवार", "huf"),
                    FieldOption::new("Partnership / पार्टनरशिप", "partnership"),
                    FieldOption::new("Co-Operative / सहकारी", "cooperative"),
                    FieldOption::new("Private Limited Company / प्राइवेट लिमिटेड कंपनी", "pvt_ltd"),
                    FieldOption::new("Public Limited Company / पब्लिक लिमिटेड कंपनी", "public_ltd"),
                    FieldOption::new("Limited Liability Partnership / सीमित दायित्व भागीदारी", "llp"),
                    FieldOption::new("Society / सोसाइटी", "society"),
                    FieldOption::new("Trust / ट्रस्ट", "trust"),
                ],
                validation: Some(required_text()),
            },
            FormField {
                id: "panNumber".into(),
                name: "panNumber".into(),
                label: "PAN / पैन".into(),
                field_type: FieldType::Text,
                options: vec![],
                validation: Some(pattern_validation(PatternKind::Pan, true, Some(10))),
            },
            FormField {
                id: "panHolderName".into(),
                name: "panHolderName".into(),
                label: "Name of PAN Holder / पैन धारक का नाम".into(),
                field_type: FieldType::Text,
                options: vec![],
                validation: Some(FieldValidation {
                    required: true,
                    max_length: Some(100),
                    ..Default::default()
                }),
            },
            FormField {
                id: "dob".into(),
                name: "dob".into(),
                label: "DOB or DOI as per PAN / पैन के अनुसार जन्म तिथि".into(),
                field_type: FieldType::Date,
                options: vec![],
                validation: Some(required_text()),
            },
            FormField {
                id: "panConsent".into(),
                name: "panConsent".into(),
                label: "I hereby give my consent for use of my PAN data from Income Tax Department".into(),
                field_type: FieldType::Checkbox,
                options: vec![],
                validation: Some(required_text()),
            },
            FormField {
                id: "pincode".into(),
                name: "pincode".into(),
                label: "PIN Code / पिन कोड".into(),
                field_type: FieldType::Number,
                options: vec![],
                validation: Some(pattern_validation(PatternKind::Pincode, true, Some(6))),
            },
            FormField {
                id: "state".into(),
                name: "state".into(),
                label: "State / राज्य".into(),
                field_type: FieldType::Text,
                options: vec![],
                validation: Some(required_text()),
            },
            FormField {
                id: "city".into(),
                name: "city".into(),
                label: "City / शहर".into(),
                field_type: FieldType::Text,
                options: vec![],
                validation: Some(required_text()),
            },
        ],
    }
}
