//! 记录查询服务

use std::sync::Arc;

use certimate_provider::Variant;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{PersistedRecord, RecordFilter, RecordKind};

/// 记录查询服务
pub struct RecordService {
    ctx: Arc<ServiceContext>,
}

impl RecordService {
    /// 创建记录服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出某类记录
    pub async fn list(
        &self,
        kind: RecordKind,
        filter: Option<&RecordFilter>,
    ) -> CoreResult<Vec<PersistedRecord>> {
        self.ctx.repository.list(kind, filter).await.inspect_err(|e| {
            e.log(&format!("Failed to list {kind} records"));
        })
    }

    /// 列出可供某个部署 / 通知变体使用的授权记录
    ///
    /// 变体不消费授权时返回空列表。
    pub async fn list_accesses_for<V: Variant>(
        &self,
        variant: V,
    ) -> CoreResult<Vec<PersistedRecord>> {
        let Some(access) = variant.access_provider() else {
            return Ok(Vec::new());
        };
        let filter = RecordFilter::provider(access.key());
        self.list(RecordKind::Access, Some(&filter)).await
    }
}
