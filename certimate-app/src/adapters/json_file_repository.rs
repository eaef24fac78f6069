//! `RecordRepository` persisted to a single JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use certimate_core::error::{CoreError, CoreResult};
use certimate_core::traits::RecordRepository;
use certimate_core::types::{PersistedRecord, RecordFilter, RecordKind, RecordPayload};

use super::memory_repository::RecordTable;

/// Current store file version.
const STORE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    records: Vec<PersistedRecord>,
}

/// JSON file store.
///
/// The whole table is kept in memory and rewritten on every change; a write
/// goes to a sibling temporary file first and is renamed over the store, so
/// a crash never leaves a truncated file behind.
pub struct JsonFileRecordRepository {
    path: PathBuf,
    table: RwLock<RecordTable>,
}

impl JsonFileRecordRepository {
    /// Opens the store at `path`; a missing file is an empty store.
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if the file cannot be read and
    /// `CoreError::SerializationError` if it is not a store file.
    pub async fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let records = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => {
                let file: StoreFile = serde_json::from_str(&raw).map_err(|e| {
                    CoreError::SerializationError(format!(
                        "Invalid store {}: {e}",
                        path.display()
                    ))
                })?;
                if file.version > STORE_VERSION {
                    return Err(CoreError::StorageError(format!(
                        "Store version {} is newer than supported {STORE_VERSION}",
                        file.version
                    )));
                }
                file.records
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };
        log::debug!("Opened record store {} ({} records)", path.display(), records.len());

        Ok(Self {
            path,
            table: RwLock::new(RecordTable::from_records(records)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, table: &RecordTable) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }
        let file = StoreFile {
            version: STORE_VERSION,
            records: table.records().to_vec(),
        };
        let raw = serde_json::to_string_pretty(&file)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to write store: {e}")))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to replace store: {e}")))
    }
}

#[async_trait]
impl RecordRepository for JsonFileRecordRepository {
    async fn create(
        &self,
        kind: RecordKind,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord> {
        let mut table = self.table.write().await;
        let mut next = table.clone();
        let record = next.create(kind, payload);
        self.persist(&next).await?;
        *table = next;
        Ok(record)
    }

    async fn update(
        &self,
        kind: RecordKind,
        id: &str,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord> {
        let mut table = self.table.write().await;
        let mut next = table.clone();
        let record = next.update(kind, id, payload)?;
        self.persist(&next).await?;
        *table = next;
        Ok(record)
    }

    async fn list(
        &self,
        kind: RecordKind,
        filter: Option<&RecordFilter>,
    ) -> CoreResult<Vec<PersistedRecord>> {
        Ok(self.table.read().await.list(kind, filter))
    }
}
