//! Udyam Registration Portal API
//!
//! HTTP surface of the MSME registration portal: schema fetch, field
//! validation, and submission intake.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     REGISTRATION PORTAL API                     │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │              REST API (axum)                              │  │
//! │  │  OpenAPI 3.1 | CORS | Rate Limiting | Request Tracing     │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │                                                                 │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐           │
//! │  │    Schema    │  │  Validator + │  │  Submission  │           │
//! │  │   Provider   │  │   Sanitizer  │  │     Sink     │           │
//! │  │ live→cache→  │  │ (pattern     │  │ (memory or   │           │
//! │  │   default    │  │  registry)   │  │  unstored)   │           │
//! │  └──────────────┘  └──────────────┘  └──────────────┘           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![allow(dead_code)]

pub mod config;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod sink;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use udyam_extract::SchemaProvider;
use udyam_schema::PatternRegistry;
use udyam_validate::{Sanitizer, Validator};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use middleware::rate_limit::{RateLimitConfig, RateLimiter};
use sink::{MemorySink, SubmissionSink};

pub use config::{Config, SinkMode};
pub use models::*;

/// Shared, immutable service state. Built once at startup; every request
/// reads it without locking.
pub struct ApiState {
    /// Compiled identity-field patterns
    pub registry: Arc<PatternRegistry>,
    /// Format validator over the registry
    pub validator: Validator,
    /// Free-text sanitizer
    pub sanitizer: Sanitizer,
    /// Schema fallback chain
    pub provider: SchemaProvider,
    /// Submission sink, absent when storage is not configured
    pub sink: Option<Arc<dyn SubmissionSink>>,
}

impl ApiState {
    /// Wire the state for a configuration.
    pub fn new(config: &Config) -> Self {
        let registry = Arc::new(PatternRegistry::new());
        let sink: Option<Arc<dyn SubmissionSink>> = match config.sink {
            SinkMode::Memory => Some(Arc::new(MemorySink::new())),
            SinkMode::None => None,
        };
        Self {
            validator: Validator::new(registry.clone()),
            sanitizer: Sanitizer::new(),
            provider: SchemaProvider::new(config.schema_endpoint.clone(), &*config.schema_dir),
            sink,
            registry,
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Udyam Registration API",
        version = "1.0.0",
        description = "Multi-step MSME registration portal: form schemas, field validation, submission intake",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::health_check,
        routes::schema::form_schema,
        routes::schema::scraped_schema,
        routes::validate::validate_aadhaar,
        routes::validate::validate_pan,
        routes::validate::validate_otp,
        routes::validate::validate_pincode,
        routes::submit::submit,
    ),
    components(
        schemas(
            routes::health::HealthResponse,
            ErrorResponse,
            AadhaarBody, PanBody, OtpBody, PincodeBody, ValidateResponse,
            SubmitResponse, SubmitRejection,
            udyam_schema::FormSchema, udyam_schema::FormField,
            udyam_schema::FieldType, udyam_schema::FieldOption,
            udyam_schema::FieldValidation, udyam_schema::SubmissionRecord,
            udyam_validate::FieldError, udyam_validate::ErrorCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "schema", description = "Form schema resolution"),
        (name = "validate", description = "Single-field format validation"),
        (name = "submit", description = "Registration submission")
    )
)]
pub struct ApiDoc;

/// Build the portal router with default rate limits.
pub fn build_router(state: ApiState) -> Router {
    build_router_with_limits(state, RateLimitConfig::default())
}

/// Build the portal router with explicit rate limits.
pub fn build_router_with_limits(state: ApiState, limits: RateLimitConfig) -> Router {
    let limiter = Arc::new(RateLimiter::new(limits));
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health::health_check))
        .merge(routes::schema::router())
        .merge(routes::validate::router())
        .merge(routes::submit::router())
        .layer(axum::middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit::rate_limit,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn test_state(sink: Option<Arc<dyn SubmissionSink>>) -> ApiState {
        let registry = Arc::new(PatternRegistry::new());
        ApiState {
            validator: Validator::new(registry.clone()),
            sanitizer: Sanitizer::new(),
            // no endpoint, no cache dir: provider always lands on defaults
            provider: SchemaProvider::new(None, "/nonexistent/udyam-test-cache"),
            sink,
            registry,
        }
    }

    fn server_with_memory_sink() -> (TestServer, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let server =
            TestServer::new(build_router(test_state(Some(sink.clone())))).unwrap();
        (server, sink)
    }

    fn valid_payload() -> Value {
        json!({
            "aadhaarNumber": "234567890123",
            "entrepreneurName": "A",
            "consent": true,
            "otp": "123456",
            "otpVerified": true,
            "organisationType": "proprietary",
            "panNumber": "ABCDE1234F",
            "panHolderName": "A",
            "dob": "1990-01-01",
            "panConsent": true,
            "pincode": "560011",
            "state": "Karnataka",
            "city": "Bangalore"
        })
    }

    #[tokio::test]
    async fn test_submit_valid_stored() {
        let (server, sink) = server_with_memory_sink();
        let res = server.post("/submit").json(&valid_payload()).await;
        assert_eq!(res.status_code(), 201);
        let body: Value = res.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["stored"], true);
        assert!(body["recordId"].is_string());
        assert_eq!(sink.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_valid_without_sink_acknowledged_unstored() {
        let server = TestServer::new(build_router(test_state(None))).unwrap();
        let res = server.post("/submit").json(&valid_payload()).await;
        assert_eq!(res.status_code(), 200);
        let body: Value = res.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["stored"], false);
        // the validated data comes back to the caller
        assert_eq!(body["data"]["aadhaarNumber"], "234567890123");
    }

    #[tokio::test]
    async fn test_submit_bad_pan_rejected() {
        let (server, sink) = server_with_memory_sink();
        let mut payload = valid_payload();
        payload["panNumber"] = json!("BADPAN0000X");
        let res = server.post("/submit").json(&payload).await;
        assert_eq!(res.status_code(), 400);
        let body: Value = res.json();
        assert_eq!(body["success"], false);
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["field"], "panNumber");
        assert_eq!(errors[0]["code"], "PATTERN_MISMATCH");
        assert_eq!(sink.len(), 0);
    }

    #[tokio::test]
    async fn test_submit_missing_consent_rejected() {
        let (server, _) = server_with_memory_sink();
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("consent");
        let res = server.post("/submit").json(&payload).await;
        assert_eq!(res.status_code(), 400);
        let body: Value = res.json();
        assert_eq!(body["errors"][0]["code"], "CONSENT_REQUIRED");
    }

    #[tokio::test]
    async fn test_submit_sanitizes_before_storage() {
        let (server, sink) = server_with_memory_sink();
        let mut payload = valid_payload();
        payload["entrepreneurName"] = json!("<script>alert(1)</script>John");
        let res = server.post("/submit").json(&payload).await;
        assert_eq!(res.status_code(), 201);
        let body: Value = res.json();
        let id: uuid::Uuid = body["recordId"].as_str().unwrap().parse().unwrap();
        let stored = sink.get(id).unwrap();
        assert_eq!(stored.record.entrepreneur_name.as_deref(), Some("John"));
    }

    #[tokio::test]
    async fn test_validate_endpoints() {
        let (server, _) = server_with_memory_sink();

        let res = server
            .post("/validate/aadhaar")
            .json(&json!({"aadhaarNumber": "234567890123"}))
            .await;
        assert_eq!(res.status_code(), 200);
        let body: Value = res.json();
        assert_eq!(body["valid"], true);

        let res = server
            .post("/validate/pan")
            .json(&json!({"panNumber": "abcde1234f"}))
            .await;
        assert_eq!(res.status_code(), 400);
        let body: Value = res.json();
        assert_eq!(body["valid"], false);
        assert_eq!(body["error"], "Invalid PAN format. Expected: ABCDE1234F");

        let res = server.post("/validate/otp").json(&json!({"otp": "12345"})).await;
        assert_eq!(res.status_code(), 400);

        let res = server
            .post("/validate/pincode")
            .json(&json!({"pincode": "560011"}))
            .await;
        assert_eq!(res.status_code(), 200);
    }

    #[tokio::test]
    async fn test_form_schema_falls_back_to_default() {
        let (server, _) = server_with_memory_sink();
        let res = server.get("/form-schema/1").await;
        assert_eq!(res.status_code(), 200);
        let schema: Value = res.json();
        assert_eq!(schema["step"], 1);
        assert!(!schema["fields"].as_array().unwrap().is_empty());

        let res = server.get("/form-schema/9").await;
        assert_eq!(res.status_code(), 404);
    }

    #[tokio::test]
    async fn test_scraped_schema_missing_cache_is_not_found() {
        let (server, _) = server_with_memory_sink();
        let res = server.get("/scraped-schema/1").await;
        assert_eq!(res.status_code(), 404);
    }

    #[tokio::test]
    async fn test_rate_limit_kicks_in() {
        let state = test_state(None);
        let server = TestServer::new(build_router_with_limits(
            state,
            RateLimitConfig {
                requests_per_second: 1,
                burst: 2,
            },
        ))
        .unwrap();

        assert_eq!(server.get("/health").await.status_code(), 200);
        assert_eq!(server.get("/health").await.status_code(), 200);
        let res = server.get("/health").await;
        assert_eq!(res.status_code(), 429);
        assert!(res.headers().contains_key("retry-after"));
    }
}
