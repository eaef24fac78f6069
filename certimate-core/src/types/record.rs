//! 配置记录相关类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use certimate_provider::{ConfigMap, RecordKind, Reserve};

/// 表单合并后的值（父表单字段 + `config` 下的子表单快照）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    /// 记录 ID（编辑模式）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 记录名称
    pub name: String,
    /// 判别字段（provider key），未选择时为 `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// 关联的授权记录 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_id: Option<String>,
    /// 保留用途标签
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve: Option<Reserve>,
    /// 子表单快照
    pub config: ConfigMap,
}

/// 提交给仓库的记录内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPayload {
    /// 记录名称
    pub name: String,
    /// 判别字段
    pub provider: String,
    /// 关联的授权记录 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_id: Option<String>,
    /// 保留用途标签
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve: Option<Reserve>,
    /// 变体配置
    #[serde(default)]
    pub config: ConfigMap,
}

/// 已持久化的记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRecord {
    /// 记录 ID (UUID)
    pub id: String,
    /// 记录类别
    pub kind: RecordKind,
    /// 记录名称
    pub name: String,
    /// 判别字段
    pub provider: String,
    /// 关联的授权记录 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_id: Option<String>,
    /// 保留用途标签
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve: Option<Reserve>,
    /// 变体配置
    #[serde(default)]
    pub config: ConfigMap,
    /// 创建时间
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    /// 更新时间
    #[serde(with = "crate::utils::datetime")]
    pub updated_at: DateTime<Utc>,
}

impl PersistedRecord {
    /// 以新 ID 创建记录
    pub fn create(kind: RecordKind, payload: &RecordPayload) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            name: payload.name.clone(),
            provider: payload.provider.clone(),
            access_id: payload.access_id.clone(),
            reserve: payload.reserve,
            config: payload.config.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 用新内容覆盖记录（保留 ID 与创建时间）
    pub fn apply(&mut self, payload: &RecordPayload) {
        self.name.clone_from(&payload.name);
        self.provider.clone_from(&payload.provider);
        self.access_id.clone_from(&payload.access_id);
        self.reserve = payload.reserve;
        self.config.clone_from(&payload.config);
        self.updated_at = Utc::now();
    }
}

/// 列表过滤条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFilter {
    /// 仅返回该判别字段的记录
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// 仅返回带该保留标签的记录
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve: Option<Reserve>,
}

impl RecordFilter {
    /// 按判别字段过滤
    #[must_use]
    pub fn provider(provider: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..Self::default()
        }
    }

    /// 记录是否满足过滤条件
    pub fn matches(&self, record: &PersistedRecord) -> bool {
        self.provider
            .as_deref()
            .is_none_or(|p| p == record.provider)
            && self.reserve.is_none_or(|r| record.reserve == Some(r))
    }
}
