//! Per-step relevance filtering
//!
//! The live page carries far more controls than one registration step;
//! each step keeps only the fields whose label or name matches its
//! keyword set, capped to a small count with the primary field first.

use udyam_schema::FormField;

/// Relevance filter for one registration step.
pub struct StepFilter {
    keywords: &'static [&'static str],
    primary: &'static str,
    cap: usize,
}

/// Filter for a known step, if any.
pub fn step_filter(step: u8) -> Option<StepFilter> {
    match step {
        1 => Some(StepFilter {
            keywords: &["aadhaar", "otp", "name", "consent", "declaration"],
            primary: "aadhaar",
            cap: 6,
        }),
        2 => Some(StepFilter {
            keywords: &[
                "pan",
                "pin",
                "pincode",
                "state",
                "city",
                "district",
                "organisation",
                "organization",
                "dob",
                "birth",
            ],
            primary: "pan",
            cap: 8,
        }),
        _ => None,
    }
}

impl StepFilter {
    /// Keep relevant fields, primary-keyword fields first, capped.
    pub fn apply(&self, fields: Vec<FormField>) -> Vec<FormField> {
        let mut kept: Vec<FormField> = fields
            .into_iter()
            .filter(|f| {
                let toks = search_tokens(f);
                self.keywords.iter().any(|k| toks.iter().any(|t| t == k))
            })
            .collect();
        // stable: non-primary fields keep their document order
        kept.sort_by_key(|f| !search_tokens(f).iter().any(|t| t == self.primary));
        kept.truncate(self.cap);
        kept
    }
}

fn search_tokens(field: &FormField) -> Vec<String> {
    let mut toks = tokenize(&field.label);
    toks.extend(tokenize(&field.name));
    toks
}

/// Lowercase word tokens, split on camelCase boundaries and anything
/// non-alphanumeric. `"panNumber"` becomes `["pan", "number"]`, so a
/// keyword matches whole words only and never mid-word substrings
/// ("pan" does not hit "companyName").
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() && prev_lower {
                tokens.push(current.to_lowercase());
                current.clear();
            }
            prev_lower = ch.is_lowercase();
            current.push(ch);
        } else {
            prev_lower = false;
            if !current.is_empty() {
                tokens.push(current.to_lowercase());
                current.clear();
            }
        }
    }
    if !current.is_empty() {
        tokens.push(current.to_lowercase());
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use udyam_schema::FieldType;

    fn field(name: &str, label: &str) -> FormField {
        FormField {
            id: name.to_string(),
            name: name.to_string(),
            label: label.to_string(),
            field_type: FieldType::Text,
            options: vec![],
            validation: None,
        }
    }

    #[test]
    fn test_tokenize_splits_camel_case_and_separators() {
        assert_eq!(tokenize("panNumber"), vec!["pan", "number"]);
        assert_eq!(tokenize("PIN Code of unit"), vec!["pin", "code", "of", "unit"]);
        assert_eq!(tokenize("ctl00$txtPan"), vec!["ctl00", "txt", "pan"]);
        assert!(tokenize("  ").is_empty());
    }

    #[test]
    fn test_step2_keeps_relevant_and_sorts_pan_first() {
        let filter = step_filter(2).unwrap();
        let fields = vec![
            field("state", "State"),
            field("captcha", "Enter Captcha"),
            field("pincode", "PIN Code"),
            field("panNumber", "PAN"),
            field("city", "City"),
        ];
        let kept = filter.apply(fields);
        let names: Vec<&str> = kept.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["panNumber", "state", "pincode", "city"]);
    }

    #[test]
    fn test_keyword_matches_whole_tokens_only() {
        let filter = step_filter(2).unwrap();
        let fields = vec![
            field("companyName", "Company Name"),
            field("shippingAddress", "Shipping Address"),
            field("panHolderName", "Name of PAN Holder"),
        ];
        let kept = filter.apply(fields);
        let names: Vec<&str> = kept.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["panHolderName"]);
    }

    #[test]
    fn test_cap_applied() {
        let filter = step_filter(2).unwrap();
        let fields: Vec<FormField> = (0..20).map(|i| field(&format!("pan{i}"), "PAN field")).collect();
        assert_eq!(filter.apply(fields).len(), 8);
    }

    #[test]
    fn test_irrelevant_input_filters_to_empty() {
        let filter = step_filter(1).unwrap();
        let fields = vec![field("captcha", "Enter Captcha"), field("search", "Search site")];
        assert!(filter.apply(fields).is_empty());
    }

    #[test]
    fn test_unknown_step() {
        assert!(step_filter(3).is_none());
    }
}
