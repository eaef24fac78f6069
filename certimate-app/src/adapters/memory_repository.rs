//! In-memory `RecordRepository`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use certimate_core::error::{CoreError, CoreResult};
use certimate_core::traits::RecordRepository;
use certimate_core::types::{PersistedRecord, RecordFilter, RecordKind, RecordPayload};

/// Records of every kind, in creation order.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordTable {
    records: Vec<PersistedRecord>,
}

impl RecordTable {
    pub(crate) fn from_records(records: Vec<PersistedRecord>) -> Self {
        Self { records }
    }

    pub(crate) fn records(&self) -> &[PersistedRecord] {
        &self.records
    }

    pub(crate) fn create(&mut self, kind: RecordKind, payload: &RecordPayload) -> PersistedRecord {
        let record = PersistedRecord::create(kind, payload);
        self.records.push(record.clone());
        record
    }

    pub(crate) fn update(
        &mut self,
        kind: RecordKind,
        id: &str,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.kind == kind && r.id == id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        record.apply(payload);
        Ok(record.clone())
    }

    pub(crate) fn list(
        &self,
        kind: RecordKind,
        filter: Option<&RecordFilter>,
    ) -> Vec<PersistedRecord> {
        self.records
            .iter()
            .filter(|r| r.kind == kind && filter.is_none_or(|f| f.matches(r)))
            .cloned()
            .collect()
    }
}

/// Volatile repository, for tests and hosts without storage.
#[derive(Debug, Default)]
pub struct MemoryRecordRepository {
    table: RwLock<RecordTable>,
}

impl MemoryRecordRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordRepository for MemoryRecordRepository {
    async fn create(
        &self,
        kind: RecordKind,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord> {
        Ok(self.table.write().await.create(kind, payload))
    }

    async fn update(
        &self,
        kind: RecordKind,
        id: &str,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord> {
        self.table.write().await.update(kind, id, payload)
    }

    async fn list(
        &self,
        kind: RecordKind,
        filter: Option<&RecordFilter>,
    ) -> CoreResult<Vec<PersistedRecord>> {
        Ok(self.table.read().await.list(kind, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certimate_core::types::ConfigMap;

    fn payload(provider: &str) -> RecordPayload {
        RecordPayload {
            name: provider.to_string(),
            provider: provider.to_string(),
            access_id: None,
            reserve: None,
            config: ConfigMap::new(),
        }
    }

    #[tokio::test]
    async fn kinds_are_separate() {
        let repo = MemoryRecordRepository::new();
        let res = repo.create(RecordKind::Access, &payload("ssh")).await;
        assert!(res.is_ok(), "create failed: {res:?}");
        let Ok(access) = res else {
            return;
        };

        let res = repo.update(RecordKind::Deploy, &access.id, &payload("ssh")).await;
        assert!(matches!(res, Err(CoreError::RecordNotFound(_))));

        let res = repo.list(RecordKind::Deploy, None).await;
        assert!(matches!(res, Ok(ref v) if v.is_empty()));
    }
}
