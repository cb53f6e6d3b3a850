//! Identity-field pattern registry
//!
//! The regexes here are a compatibility contract with the browser client,
//! which encodes the same rules independently. Do not loosen them.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical email pattern used by the extractor heuristics.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Identity-field kinds with a fixed validation pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// 12-digit Aadhaar number, first digit 2-9
    Aadhaar,
    /// 10-character PAN: 5 letters, 4 digits, 1 letter
    Pan,
    /// 10-digit mobile number, first digit 6-9
    Mobile,
    /// 6-digit one-time password
    Otp,
    /// 6-digit postal PIN code
    Pincode,
}

impl PatternKind {
    /// All registered kinds, in registry order.
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Aadhaar,
        PatternKind::Pan,
        PatternKind::Mobile,
        PatternKind::Otp,
        PatternKind::Pincode,
    ];

    /// Registry name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Aadhaar => "aadhaar",
            PatternKind::Pan => "pan",
            PatternKind::Mobile => "mobile",
            PatternKind::Otp => "otp",
            PatternKind::Pincode => "pincode",
        }
    }

    /// Anchored regex source for this kind.
    pub fn pattern_str(&self) -> &'static str {
        match self {
            PatternKind::Aadhaar => r"^[2-9][0-9]{11}$",
            PatternKind::Pan => r"^[A-Z]{5}[0-9]{4}[A-Z]{1}$",
            PatternKind::Mobile => r"^[6-9][0-9]{9}$",
            PatternKind::Otp => r"^[0-9]{6}$",
            PatternKind::Pincode => r"^[0-9]{6}$",
        }
    }

    /// Human-readable help message naming the expected format.
    pub fn help(&self) -> &'static str {
        match self {
            PatternKind::Aadhaar => "Invalid Aadhaar format. Expected: 12 digits starting with 2-9",
            PatternKind::Pan => "Invalid PAN format. Expected: ABCDE1234F",
            PatternKind::Mobile => "Invalid mobile format. Expected: 10 digits starting with 6-9",
            PatternKind::Otp => "Invalid OTP format. Expected: 6 digits",
            PatternKind::Pincode => "Invalid PIN code format. Expected: 6 digits",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-compiled pattern set for the identity fields.
///
/// Built once at startup and shared read-only; matching is anchored on
/// the whole string, so whitespace and stray characters never pass.
pub struct PatternRegistry {
    patterns: Vec<(PatternKind, Regex)>,
}

impl PatternRegistry {
    /// Compile the fixed pattern table.
    pub fn new() -> Self {
        let patterns = PatternKind::ALL
            .iter()
            .map(|kind| {
                let re = Regex::new(kind.pattern_str()).expect("registry pattern must compile");
                (*kind, re)
            })
            .collect();
        Self { patterns }
    }

    /// Whole-string match of `value` against the kind's pattern.
    pub fn matches(&self, kind: PatternKind, value: &str) -> bool {
        self.regex(kind).is_match(value)
    }

    /// Compiled regex for a kind.
    pub fn regex(&self, kind: PatternKind) -> &Regex {
        // ALL covers every variant, so the lookup cannot miss.
        &self
            .patterns
            .iter()
            .find(|(k, _)| *k == kind)
            .expect("every kind is registered")
            .1
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the registry is empty (never, after construction).
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}
