//! Service configuration
//!
//! Plain environment variables, read once at startup. Every knob has a
//! default so the service runs with no configuration at all.

/// Where accepted submissions go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkMode {
    /// In-memory store (default)
    Memory,
    /// No storage; submissions are acknowledged unstored
    None,
}

/// Startup configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address
    pub bind_addr: String,
    /// Optional live extraction endpoint for the schema provider
    pub schema_endpoint: Option<String>,
    /// Directory holding cached extractor output
    pub schema_dir: String,
    /// Submission sink mode
    pub sink: SinkMode,
}

impl Config {
    /// Read configuration from `UDYAM_*` environment variables.
    pub fn from_env() -> Self {
        let sink = match std::env::var("UDYAM_SINK").as_deref() {
            Ok("none") => SinkMode::None,
            _ => SinkMode::Memory,
        };
        Self {
            bind_addr: std::env::var("UDYAM_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            schema_endpoint: std::env::var("UDYAM_SCHEMA_ENDPOINT").ok(),
            schema_dir: std::env::var("UDYAM_SCHEMA_DIR")
                .unwrap_or_else(|_| "generated-schemas".into()),
            sink,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            schema_endpoint: None,
            schema_dir: "generated-schemas".into(),
            sink: SinkMode::Memory,
        }
    }
}
