//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::i18n::{BuiltinLocalizer, Language};
use crate::services::ServiceContext;
use crate::traits::{Notice, Notifier, RecordRepository};
use crate::types::{ConfigMap, PersistedRecord, RecordFilter, RecordKind, RecordPayload};

// ===== MockRecordRepository =====

pub struct MockRecordRepository {
    records: RwLock<HashMap<(RecordKind, String), PersistedRecord>>,
    /// 如果 Some，下一次 create/update 返回此错误
    next_error: RwLock<Option<CoreError>>,
    /// 如果 Some，create/update 在写入前等待放行
    gate: RwLock<Option<Arc<Notify>>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_error: RwLock::new(None),
            gate: RwLock::new(None),
        }
    }

    /// 让下一次写入失败
    pub async fn fail_next(&self, err: CoreError) {
        *self.next_error.write().await = Some(err);
    }

    /// 挂起后续写入，直到返回的 `Notify` 放行（每次放行一次写入）
    pub async fn hold_saves(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.write().await = Some(gate.clone());
        gate
    }

    /// 绕过闸门直接写入一条记录
    pub async fn seed(
        &self,
        kind: RecordKind,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord> {
        let record = PersistedRecord::create(kind, payload);
        self.records
            .write()
            .await
            .insert((kind, record.id.clone()), record.clone());
        Ok(record)
    }

    pub async fn count(&self, kind: RecordKind) -> usize {
        self.records
            .read()
            .await
            .keys()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    async fn before_write(&self) -> CoreResult<()> {
        let gate = self.gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match self.next_error.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn create(
        &self,
        kind: RecordKind,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord> {
        self.before_write().await?;
        self.seed(kind, payload).await
    }

    async fn update(
        &self,
        kind: RecordKind,
        id: &str,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord> {
        self.before_write().await?;
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&(kind, id.to_string()))
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        record.apply(payload);
        Ok(record.clone())
    }

    async fn list(
        &self,
        kind: RecordKind,
        filter: Option<&RecordFilter>,
    ) -> CoreResult<Vec<PersistedRecord>> {
        let mut records: Vec<PersistedRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|((k, _), r)| *k == kind && filter.is_none_or(|f| f.matches(r)))
            .map(|(_, r)| r.clone())
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.name.cmp(&b.name)));
        Ok(records)
    }
}

// ===== RecordingNotifier =====

pub struct RecordingNotifier {
    notices: StdMutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            notices: StdMutex::new(Vec::new()),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

// ===== 工厂方法 =====

pub struct TestContext {
    pub ctx: Arc<ServiceContext>,
    pub repository: Arc<MockRecordRepository>,
    pub notifier: Arc<RecordingNotifier>,
}

/// 创建测试用 `ServiceContext`（英文本地化）
pub fn create_test_context() -> TestContext {
    let repository = Arc::new(MockRecordRepository::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let ctx = Arc::new(ServiceContext::new(
        repository.clone(),
        Arc::new(BuiltinLocalizer::new(Language::EnUs)),
        notifier.clone(),
    ));
    TestContext {
        ctx,
        repository,
        notifier,
    }
}

/// 创建不带配置的测试记录内容
pub fn payload(name: &str, provider: &str) -> RecordPayload {
    RecordPayload {
        name: name.to_string(),
        provider: provider.to_string(),
        access_id: None,
        reserve: None,
        config: ConfigMap::new(),
    }
}
