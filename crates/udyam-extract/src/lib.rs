//! Best-effort schema extraction
//!
//! Re-derives the registration form's field schema from the live page's
//! markup and caches it as a JSON document per step. Extraction is
//! inherently environment-coupled; every consumer reaches it through the
//! [`SchemaSource`] seam so the rest of the system is indifferent to
//! whether a schema came from a live scrape, a cache file, or the
//! hand-authored defaults.
//!
//! ```text
//!   Extractor ──▶ stepN-schema.json ──▶ SchemaProvider ──▶ API consumer
//!      │                                      │
//!      └── live page (fetch + DOM query)      └── fallback: cache → defaults
//! ```

#![warn(missing_docs)]

pub mod extractor;
pub mod provider;
pub mod steps;

pub use extractor::Extractor;
pub use provider::{SchemaProvider, SchemaSource};

use thiserror::Error;

/// Extraction failure. Operational, never surfaced to portal callers;
/// the provider falls through to the next source instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Page or endpoint fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Cache file unreadable
    #[error("cache read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Cache or endpoint document malformed
    #[error("malformed schema document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Step has no known schema
    #[error("unknown step {0}")]
    UnknownStep(u8),
}

/// Cache file name for a step's extracted schema.
pub fn cache_file_name(step: u8) -> String {
    format!("step{step}-schema.json")
}
