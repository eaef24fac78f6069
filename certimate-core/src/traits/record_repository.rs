//! Record persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{PersistedRecord, RecordFilter, RecordKind, RecordPayload};

/// Record Repository Trait
///
/// One repository serves all three record kinds (access, deploy, notify).
/// Failures are reported as an opaque [`CoreError`](crate::CoreError) whose
/// message is shown to the user; the engine does not interpret it further.
///
/// Platform implementation:
/// - `certimate-app`: `MemoryRecordRepository`, `JsonFileRecordRepository`
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Create a record
    ///
    /// # Arguments
    /// * `kind` - Record kind
    /// * `payload` - Record content
    async fn create(
        &self,
        kind: RecordKind,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord>;

    /// Replace the content of an existing record
    ///
    /// # Arguments
    /// * `kind` - Record kind
    /// * `id` - Record ID
    /// * `payload` - New record content
    async fn update(
        &self,
        kind: RecordKind,
        id: &str,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord>;

    /// List records of a kind
    ///
    /// # Arguments
    /// * `kind` - Record kind
    /// * `filter` - Optional filter
    async fn list(
        &self,
        kind: RecordKind,
        filter: Option<&RecordFilter>,
    ) -> CoreResult<Vec<PersistedRecord>>;
}
