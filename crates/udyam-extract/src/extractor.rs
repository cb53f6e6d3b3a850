//! Live-page field extraction
//!
//! Single-pass batch job: navigate, discover form controls, resolve each
//! control's label, infer validation rules, filter noise, write the
//! assembled schema document to the cache directory.

use crate::steps::{step_filter, tokenize};
use crate::{cache_file_name, ExtractError};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use udyam_schema::defaults::default_schema;
use udyam_schema::patterns::EMAIL_PATTERN;
use udyam_schema::{FieldOption, FieldType, FieldValidation, FormField, FormSchema, PatternKind};

/// First-attempt navigation timeout.
const NAV_TIMEOUT: Duration = Duration::from_secs(30);
/// Relaxed timeout for the single navigation retry.
const RETRY_TIMEOUT: Duration = Duration::from_secs(60);
/// Pause before retrying navigation.
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Hidden-field marker tokens of the legacy ASP.NET host page.
const FRAMEWORK_MARKERS: [&str; 3] = ["__viewstate", "__event", "ctl00"];

/// Offline scraper producing one cached schema document per step.
pub struct Extractor {
    client: reqwest::Client,
    target_url: String,
    output_dir: PathBuf,
}

impl Extractor {
    /// Create an extractor for a target page and cache directory.
    pub fn new(target_url: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            target_url: target_url.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Run one extraction pass for a step and write the cache document.
    ///
    /// Navigation failure after the single retry aborts the run without
    /// writing anything; the provider's fallback chain covers it. An
    /// empty filtered result falls back to the step's hand-authored
    /// default so downstream readers always see a well-formed file.
    pub async fn run(&self, step: u8) -> Result<FormSchema, ExtractError> {
        let filter = step_filter(step).ok_or(ExtractError::UnknownStep(step))?;
        let default = default_schema(step).ok_or(ExtractError::UnknownStep(step))?;

        let html = self.navigate().await?;
        let fields = extract_fields(&html);
        tracing::info!(step, discovered = fields.len(), "extraction pass complete");

        let kept = filter.apply(fields);
        let schema = if kept.is_empty() {
            tracing::warn!(step, "no relevant fields extracted, using default document");
            default
        } else {
            FormSchema {
                title: default.title,
                step,
                fields: kept,
            }
        };

        self.write_cache(&schema)?;
        Ok(schema)
    }

    /// Load the target page, retrying once with a relaxed timeout.
    async fn navigate(&self) -> Result<String, ExtractError> {
        match self.fetch(NAV_TIMEOUT).await {
            Ok(body) => Ok(body),
            Err(err) => {
                tracing::warn!(error = %err, "navigation failed, retrying once");
                tokio::time::sleep(RETRY_DELAY).await;
                self.fetch(RETRY_TIMEOUT).await.map_err(Into::into)
            }
        }
    }

    async fn fetch(&self, timeout: Duration) -> Result<String, reqwest::Error> {
        self.client
            .get(&self.target_url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }

    fn write_cache(&self, schema: &FormSchema) -> Result<(), ExtractError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(cache_file_name(schema.step));
        let json = serde_json::to_string_pretty(schema)?;
        std::fs::write(&path, json)?;
        tracing::info!(step = schema.step, path = %path.display(), "schema document written");
        Ok(())
    }

    /// Cache directory this extractor writes into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Discover every visible form control in a document and turn it into a
/// [`FormField`]. Pure over the markup, so it is testable offline.
pub fn extract_fields(html: &str) -> Vec<FormField> {
    let doc = Html::parse_document(html);
    let controls = Selector::parse("input, select, textarea").expect("static selector");
    let labels_by_for = collect_labels(&doc);

    let mut fields = Vec::new();
    for (i, el) in doc.select(&controls).enumerate() {
        let type_attr = el.value().attr("type").unwrap_or("text").to_lowercase();
        if matches!(type_attr.as_str(), "hidden" | "button" | "submit") {
            continue;
        }

        let label = resolve_label(&el, &labels_by_for);
        let name_attr = el.value().attr("name").unwrap_or("").to_string();
        if label.is_empty()
            || label.chars().count() < 3
            || is_framework_marker(&label)
            || is_framework_marker(&name_attr)
        {
            continue;
        }

        let id = el
            .value()
            .attr("id")
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| (!name_attr.is_empty()).then(|| name_attr.clone()))
            .unwrap_or_else(|| format!("field{i}"));
        let name = if name_attr.is_empty() { id.clone() } else { name_attr };

        let field_type = field_type_of(&el, &type_attr, &name);
        fields.push(FormField {
            id,
            name,
            label,
            field_type,
            options: collect_options(&el),
            validation: infer_validation(&el, field_type),
        });
    }
    fields
}

/// Map of explicit `<label for=..>` associations.
fn collect_labels(doc: &Html) -> HashMap<String, String> {
    let sel = Selector::parse("label[for]").expect("static selector");
    doc.select(&sel)
        .filter_map(|l| {
            let target = l.value().attr("for")?;
            let text = normalize(&l.text().collect::<String>());
            (!text.is_empty()).then(|| (target.to_string(), text))
        })
        .collect()
}

/// Resolve a control's display label, first non-empty source wins:
/// explicit label element, nearest preceding sibling text, enclosing
/// single-child ancestor text, then placeholder/name/id attributes.
fn resolve_label(el: &ElementRef, labels_by_for: &HashMap<String, String>) -> String {
    if let Some(text) = el.value().attr("id").and_then(|id| labels_by_for.get(id)) {
        return text.clone();
    }

    for sib in el.prev_siblings() {
        if let Some(text) = sib.value().as_text() {
            let text = normalize(text);
            if !text.is_empty() {
                return text;
            }
        } else if let Some(sib_el) = ElementRef::wrap(sib) {
            let text = normalize(&sib_el.text().collect::<String>());
            if !text.is_empty() {
                return text;
            }
        }
    }

    if let Some(parent) = el.parent().and_then(ElementRef::wrap) {
        let element_children = parent.children().filter(|c| c.value().is_element()).count();
        if element_children == 1 {
            let text = normalize(&parent.text().collect::<String>());
            if !text.is_empty() {
                return text;
            }
        }
    }

    for attr in ["placeholder", "name", "id"] {
        if let Some(value) = el.value().attr(attr) {
            let value = value.trim();
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }
    String::new()
}

fn field_type_of(el: &ElementRef, type_attr: &str, name: &str) -> FieldType {
    match el.value().name() {
        "select" => FieldType::Select,
        "textarea" => FieldType::Text,
        _ => match type_attr {
            "number" => FieldType::Number,
            "radio" => FieldType::Radio,
            "checkbox" => FieldType::Checkbox,
            "date" => FieldType::Date,
            "tel" => FieldType::Tel,
            "email" => FieldType::Email,
            "password" => FieldType::Password,
            _ => {
                if hint_tokens(el, name).iter().any(|t| t == "otp") {
                    FieldType::Otp
                } else {
                    FieldType::Text
                }
            }
        },
    }
}

/// Infer validation rules: explicit attributes verbatim, then known
/// heuristics keyed on input kind and surrounding text.
fn infer_validation(el: &ElementRef, field_type: FieldType) -> Option<FieldValidation> {
    let attr = |name: &str| el.value().attr(name);
    let mut v = FieldValidation::default();

    if attr("required").is_some() {
        v.required = true;
    }
    v.max_length = attr("maxlength").and_then(|s| s.parse().ok());
    v.min_length = attr("minlength").and_then(|s| s.parse().ok());

    if let Some(pattern) = attr("pattern").filter(|p| !p.is_empty()) {
        v.pattern = Some(pattern.to_string());
    } else {
        let placeholder = attr("placeholder").unwrap_or("").to_lowercase();
        let hint = hint_tokens(el, attr("name").unwrap_or(""));
        match field_type {
            FieldType::Email => v.pattern = Some(EMAIL_PATTERN.to_string()),
            FieldType::Tel if placeholder.contains("aadhaar") => {
                apply_kind(&mut v, PatternKind::Aadhaar)
            }
            FieldType::Tel if placeholder.contains("mobile") => {
                apply_kind(&mut v, PatternKind::Mobile)
            }
            _ => {}
        }
        if v.pattern.is_none() {
            if hint.iter().any(|t| t == "pan") {
                apply_kind(&mut v, PatternKind::Pan);
            } else if hint.iter().any(|t| t == "pin" || t == "pincode") {
                apply_kind(&mut v, PatternKind::Pincode);
            }
        }
    }

    (v != FieldValidation::default()).then_some(v)
}

fn apply_kind(v: &mut FieldValidation, kind: PatternKind) {
    v.pattern = Some(kind.pattern_str().to_string());
    v.help_text = Some(kind.help().to_string());
}

/// Word tokens of the control's name and placeholder, the text the
/// heuristics key on. Whole-token matching keeps "pan" from hitting
/// names like "companyName".
fn hint_tokens(el: &ElementRef, name: &str) -> Vec<String> {
    let mut toks = tokenize(name);
    toks.extend(tokenize(el.value().attr("placeholder").unwrap_or("")));
    toks
}

fn collect_options(el: &ElementRef) -> Vec<FieldOption> {
    if el.value().name() != "select" {
        return Vec::new();
    }
    let option_sel = Selector::parse("option").expect("static selector");
    el.select(&option_sel)
        .filter_map(|opt| {
            let label = normalize(&opt.text().collect::<String>());
            let value = opt
                .value()
                .attr("value")
                .map(str::to_string)
                .unwrap_or_else(|| label.clone());
            (!label.is_empty() && !value.is_empty()).then(|| FieldOption { label, value })
        })
        .collect()
}

fn is_framework_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    FRAMEWORK_MARKERS.iter().any(|m| lower.contains(m))
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
