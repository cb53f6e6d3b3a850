//! Free-text sanitization
//!
//! Strips script-injection substrings from string fields before
//! persistence. This is removal, not escaping: residual markup around a
//! stripped attribute can survive. Format validation runs on the raw
//! value first, so injected markup inside a pattern field is rejected as
//! a format error rather than silently cleaned.

use regex::Regex;
use udyam_schema::SubmissionRecord;

/// Pre-compiled strip patterns. Sanitization never fails; worst case the
/// output is an empty string.
pub struct Sanitizer {
    script_block: Regex,
    js_scheme: Regex,
    event_attr: Regex,
}

impl Sanitizer {
    /// Compile the strip patterns.
    pub fn new() -> Self {
        Self {
            // script elements including their content
            script_block: Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>")
                .expect("sanitizer pattern must compile"),
            js_scheme: Regex::new(r"(?i)javascript:").expect("sanitizer pattern must compile"),
            // on*= handler assignments; the surrounding tag text may survive
            event_attr: Regex::new(r#"(?i)\bon\w+\s*="#).expect("sanitizer pattern must compile"),
        }
    }

    /// Strip injection substrings from one value and trim whitespace.
    pub fn sanitize_text(&self, input: &str) -> String {
        let out = self.script_block.replace_all(input, "");
        let out = self.js_scheme.replace_all(&out, "");
        let out = self.event_attr.replace_all(&out, "");
        out.trim().to_string()
    }

    /// Sanitize every string field of a record; non-string fields pass
    /// through unchanged.
    pub fn sanitize(&self, record: &SubmissionRecord) -> SubmissionRecord {
        let clean = |v: &Option<String>| v.as_deref().map(|s| self.sanitize_text(s));
        SubmissionRecord {
            aadhaar_number: clean(&record.aadhaar_number),
            entrepreneur_name: clean(&record.entrepreneur_name),
            consent: record.consent,
            otp: clean(&record.otp),
            otp_verified: record.otp_verified,
            organisation_type: clean(&record.organisation_type),
            pan_number: clean(&record.pan_number),
            pan_holder_name: clean(&record.pan_holder_name),
            dob: clean(&record.dob),
            pan_consent: record.pan_consent,
            pincode: clean(&record.pincode),
            state: clean(&record.state),
            city: clean(&record.city),
        }
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_script_with_content() {
        let s = Sanitizer::new();
        assert_eq!(s.sanitize_text("<script>alert(1)</script>John"), "John");
        assert_eq!(
            s.sanitize_text("a<SCRIPT type=\"text/javascript\">x\ny</SCRIPT>b"),
            "ab"
        );
    }

    #[test]
    fn test_strips_js_scheme_and_event_handlers() {
        let s = Sanitizer::new();
        assert_eq!(s.sanitize_text("javascript:alert(1)"), "alert(1)");
        // the handler assignment goes; the surrounding tag text may stay
        let out = s.sanitize_text("John<img onerror=alert(1)>");
        assert!(!out.to_lowercase().contains("onerror="));
        assert!(out.starts_with("John"));
    }

    #[test]
    fn test_trims_and_never_fails() {
        let s = Sanitizer::new();
        assert_eq!(s.sanitize_text("  John  "), "John");
        assert_eq!(s.sanitize_text("<script>x</script>"), "");
        assert_eq!(s.sanitize_text(""), "");
    }

    #[test]
    fn test_record_sanitize_preserves_non_strings() {
        let s = Sanitizer::new();
        let rec = SubmissionRecord {
            entrepreneur_name: Some("<script>alert(1)</script>John".into()),
            consent: Some(true),
            otp_verified: Some(false),
            ..Default::default()
        };
        let out = s.sanitize(&rec);
        assert_eq!(out.entrepreneur_name.as_deref(), Some("John"));
        assert_eq!(out.consent, Some(true));
        assert_eq!(out.otp_verified, Some(false));
        assert!(out.aadhaar_number.is_none());
    }
}
