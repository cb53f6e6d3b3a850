//! Submission persistence sink
//!
//! The portal runs with or without storage. When no sink is configured
//! the submit endpoint acknowledges a valid record without storing it;
//! a sink failure degrades the same way instead of failing the request.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use thiserror::Error;
use udyam_schema::SubmissionRecord;
use uuid::Uuid;

/// Sink failure. Operational, recovered locally by the submit route.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Backing store rejected or lost the write
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// Accepts a validated record, returns a generated identifier.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Store one validated, sanitized record.
    async fn store(&self, record: SubmissionRecord) -> Result<Uuid, SinkError>;
}

/// A stored registration attempt.
#[derive(Debug, Clone)]
pub struct StoredSubmission {
    /// Generated record identifier
    pub id: Uuid,
    /// The sanitized record as accepted
    pub record: SubmissionRecord,
    /// Lifecycle status; starts as "submitted"
    pub status: String,
    /// Acceptance time
    pub created_at: DateTime<Utc>,
}

/// In-memory sink. Default storage for single-process deployments and
/// tests; writers and readers synchronize on one lock.
#[derive(Default)]
pub struct MemorySink {
    records: RwLock<Vec<StoredSubmission>>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Fetch a stored record by id.
    pub fn get(&self, id: Uuid) -> Option<StoredSubmission> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }
}

#[async_trait]
impl SubmissionSink for MemorySink {
    async fn store(&self, record: SubmissionRecord) -> Result<Uuid, SinkError> {
        let id = Uuid::new_v4();
        self.records.write().push(StoredSubmission {
            id,
            record,
            status: "submitted".to_string(),
            created_at: Utc::now(),
        });
        tracing::info!(%id, "submission stored");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_sink_round_trip() {
        let sink = MemorySink::new();
        let record = SubmissionRecord {
            entrepreneur_name: Some("A".into()),
            ..Default::default()
        };
        let id = sink.store(record).await.unwrap();
        assert_eq!(sink.len(), 1);
        let stored = sink.get(id).unwrap();
        assert_eq!(stored.status, "submitted");
        assert_eq!(stored.record.entrepreneur_name.as_deref(), Some("A"));
    }
}
