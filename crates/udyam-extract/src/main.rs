//! Batch schema scraper
//!
//! Runs one extraction pass per registration step and writes the cached
//! schema documents. Scrape failures are logged, not fatal: the portal's
//! schema provider falls back to older caches or the static defaults.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use udyam_extract::Extractor;

const DEFAULT_TARGET: &str = "https://udyamregistration.gov.in/UdyamRegistration.aspx";
const DEFAULT_SCHEMA_DIR: &str = "generated-schemas";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let target = std::env::var("UDYAM_TARGET_URL").unwrap_or_else(|_| DEFAULT_TARGET.into());
    let out_dir = std::env::var("UDYAM_SCHEMA_DIR").unwrap_or_else(|_| DEFAULT_SCHEMA_DIR.into());

    let extractor = Extractor::new(target, out_dir);
    for step in [1u8, 2] {
        match extractor.run(step).await {
            Ok(schema) => {
                tracing::info!(step, fields = schema.fields.len(), "scrape complete")
            }
            Err(err) => tracing::error!(step, error = %err, "scrape failed, cache left as-is"),
        }
    }
}
