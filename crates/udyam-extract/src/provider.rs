//! Schema resolution with fallback
//!
//! Resolves the authoritative schema for a step: freshly-served
//! extraction, then the cached extraction document, then the static
//! default. Misses in the first two sources are logged and swallowed;
//! the caller never observes a failure for a known step.

use crate::{cache_file_name, ExtractError};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use udyam_schema::defaults::default_schema;
use udyam_schema::FormSchema;

/// Anything that can produce a schema document for a step. The rest of
/// the system is indifferent to which strategy produced the document.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Produce the schema for a step.
    async fn produce(&self, step: u8) -> Result<FormSchema, ExtractError>;
}

/// Fetches a freshly-served extraction from an extraction endpoint.
pub struct LiveSchemaSource {
    client: reqwest::Client,
    endpoint: String,
}

impl LiveSchemaSource {
    /// Endpoint base URL; the step number is appended as a path segment.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SchemaSource for LiveSchemaSource {
    async fn produce(&self, step: u8) -> Result<FormSchema, ExtractError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), step);
        let schema = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await?
            .error_for_status()?
            .json::<FormSchema>()
            .await?;
        Ok(schema)
    }
}

/// Reads the most recent cached extraction document for a step.
pub struct CachedSchemaSource {
    dir: PathBuf,
}

impl CachedSchemaSource {
    /// Cache directory the extractor writes into.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SchemaSource for CachedSchemaSource {
    async fn produce(&self, step: u8) -> Result<FormSchema, ExtractError> {
        let path = self.dir.join(cache_file_name(step));
        let raw = tokio::fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Hand-authored defaults; always available for known steps.
pub struct StaticSchemaSource;

#[async_trait]
impl SchemaSource for StaticSchemaSource {
    async fn produce(&self, step: u8) -> Result<FormSchema, ExtractError> {
        default_schema(step).ok_or(ExtractError::UnknownStep(step))
    }
}

/// Three-step fallback chain over the sources above.
pub struct SchemaProvider {
    live: Option<LiveSchemaSource>,
    cache: CachedSchemaSource,
    fallback: StaticSchemaSource,
}

impl SchemaProvider {
    /// Build a provider; `endpoint` is optional since most deployments
    /// run the extractor as a batch job and serve only the cache.
    pub fn new(endpoint: Option<String>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            live: endpoint.map(LiveSchemaSource::new),
            cache: CachedSchemaSource::new(cache_dir),
            fallback: StaticSchemaSource,
        }
    }

    /// Resolve the schema for a step; `None` only for unknown steps.
    pub async fn get_schema(&self, step: u8) -> Option<FormSchema> {
        if let Some(live) = &self.live {
            match live.produce(step).await {
                Ok(schema) => return Some(schema),
                Err(err) => tracing::warn!(step, error = %err, "live extraction unavailable"),
            }
        }
        match self.cache.produce(step).await {
            Ok(schema) => return Some(schema),
            Err(err) => tracing::debug!(step, error = %err, "no cached extraction"),
        }
        self.fallback.produce(step).await.ok()
    }

    /// Cached extractor output only, no fallback. Used by the
    /// scraped-schema endpoint where "no cache" is a visible not-found.
    pub async fn cached_schema(&self, step: u8) -> Result<FormSchema, ExtractError> {
        self.cache.produce(step).await
    }
}
