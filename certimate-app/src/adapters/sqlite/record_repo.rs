//! `RecordRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use certimate_core::error::{CoreError, CoreResult};
use certimate_core::traits::RecordRepository;
use certimate_core::types::{
    ConfigMap, PersistedRecord, RecordFilter, RecordKind, RecordPayload, Reserve,
};
use certimate_core::utils::datetime;

use super::SqliteStore;
use super::entity::record;

impl record::Model {
    /// Convert a `SeaORM` row model into a `PersistedRecord`.
    fn into_record(self) -> CoreResult<PersistedRecord> {
        let kind = RecordKind::from_key(&self.kind).ok_or_else(|| {
            CoreError::SerializationError(format!("Invalid kind: {}", self.kind))
        })?;
        let reserve = self
            .reserve
            .map(|r| {
                Reserve::from_key(&r)
                    .ok_or_else(|| CoreError::SerializationError(format!("Invalid reserve: {r}")))
            })
            .transpose()?;
        let config: ConfigMap = serde_json::from_str(&self.config)
            .map_err(|e| CoreError::SerializationError(format!("Invalid config: {e}")))?;
        let created_at = datetime::parse_text(&self.created_at).ok_or_else(|| {
            CoreError::SerializationError(format!("Invalid created_at: {}", self.created_at))
        })?;
        let updated_at = datetime::parse_text(&self.updated_at).ok_or_else(|| {
            CoreError::SerializationError(format!("Invalid updated_at: {}", self.updated_at))
        })?;

        Ok(PersistedRecord {
            id: self.id,
            kind,
            name: self.name,
            provider: self.provider,
            access_id: self.access_id,
            reserve,
            config,
            created_at,
            updated_at,
        })
    }
}

/// Convert a `PersistedRecord` into a `SeaORM` active model.
fn record_to_active_model(record: &PersistedRecord) -> CoreResult<record::ActiveModel> {
    let config = serde_json::to_string(&record.config)
        .map_err(|e| CoreError::SerializationError(e.to_string()))?;

    Ok(record::ActiveModel {
        id: Set(record.id.clone()),
        kind: Set(record.kind.as_str().to_string()),
        name: Set(record.name.clone()),
        provider: Set(record.provider.clone()),
        access_id: Set(record.access_id.clone()),
        reserve: Set(record.reserve.map(|r| r.as_str().to_string())),
        config: Set(config),
        created_at: Set(record.created_at.to_rfc3339()),
        updated_at: Set(record.updated_at.to_rfc3339()),
    })
}

impl SqliteStore {
    async fn find(&self, kind: RecordKind, id: &str) -> CoreResult<Option<PersistedRecord>> {
        let row = record::Entity::find_by_id(id)
            .filter(record::Column::Kind.eq(kind.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query record: {e}")))?;

        row.map(record::Model::into_record).transpose()
    }
}

#[async_trait]
impl RecordRepository for SqliteStore {
    async fn create(
        &self,
        kind: RecordKind,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord> {
        let record = PersistedRecord::create(kind, payload);
        let active_model = record_to_active_model(&record)?;

        record::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to create record: {e}")))?;

        Ok(record)
    }

    async fn update(
        &self,
        kind: RecordKind,
        id: &str,
        payload: &RecordPayload,
    ) -> CoreResult<PersistedRecord> {
        let mut record = self
            .find(kind, id)
            .await?
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        record.apply(payload);
        let active_model = record_to_active_model(&record)?;

        record::Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to update record: {e}")))?;

        Ok(record)
    }

    async fn list(
        &self,
        kind: RecordKind,
        filter: Option<&RecordFilter>,
    ) -> CoreResult<Vec<PersistedRecord>> {
        let mut query = record::Entity::find().filter(record::Column::Kind.eq(kind.as_str()));
        if let Some(filter) = filter {
            if let Some(ref provider) = filter.provider {
                query = query.filter(record::Column::Provider.eq(provider.as_str()));
            }
            if let Some(reserve) = filter.reserve {
                query = query.filter(record::Column::Reserve.eq(reserve.as_str()));
            }
        }

        let rows = query
            .order_by_asc(record::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query records: {e}")))?;

        rows.into_iter().map(record::Model::into_record).collect()
    }
}
