//! Provider catalog service
//!
//! Localized picker entries and schemas for hosts that only know the record
//! kind at runtime.

use std::sync::Arc;

use serde::Serialize;

use certimate_provider::{
    AccessProvider, Capability, RecordKind, UsageFilter, Variant, VariantSchema,
    catalog,
};

use crate::error::{CoreError, CoreResult};
use crate::form::{Dispatcher, ProviderOption};
use crate::services::ServiceContext;

/// Kind-erased picker entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub kind: RecordKind,
    pub key: &'static str,
    pub label: String,
    pub icon: &'static str,
    pub capabilities: &'static [Capability],
    /// Access provider whose credential the variant consumes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_provider: Option<AccessProvider>,
}

impl CatalogEntry {
    fn from_option<V: Variant>(option: ProviderOption<V>) -> Self {
        Self {
            kind: V::KIND,
            key: option.key,
            label: option.label,
            icon: option.icon,
            capabilities: option.provider.descriptor().capabilities,
            access_provider: option.provider.access_provider(),
        }
    }
}

/// Provider catalog service
pub struct CatalogService {
    ctx: Arc<ServiceContext>,
}

impl CatalogService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Picker entries of `V` under `usage`.
    pub fn options<V: Variant>(&self, usage: Option<UsageFilter>) -> Vec<ProviderOption<V>> {
        Dispatcher::<V>::new().options(usage, self.ctx.localizer.as_ref())
    }

    /// Picker entries of a kind chosen at runtime.
    pub fn entries(&self, kind: RecordKind, usage: Option<UsageFilter>) -> Vec<CatalogEntry> {
        match kind {
            RecordKind::Access => self.erase::<AccessProvider>(usage),
            #[cfg(feature = "all-kinds")]
            RecordKind::Deploy => self.erase::<certimate_provider::DeployProvider>(usage),
            #[cfg(feature = "all-kinds")]
            RecordKind::Notify => self.erase::<certimate_provider::NotifyProvider>(usage),
            #[cfg(not(feature = "all-kinds"))]
            RecordKind::Deploy | RecordKind::Notify => Vec::new(),
        }
    }

    /// Field schema of one provider.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ProviderNotFound`] if `key` is not in the catalog
    /// of `kind`.
    pub fn schema(&self, kind: RecordKind, key: &str) -> CoreResult<VariantSchema> {
        match kind {
            RecordKind::Access => schema_of::<AccessProvider>(key),
            #[cfg(feature = "all-kinds")]
            RecordKind::Deploy => schema_of::<certimate_provider::DeployProvider>(key),
            #[cfg(feature = "all-kinds")]
            RecordKind::Notify => schema_of::<certimate_provider::NotifyProvider>(key),
            #[cfg(not(feature = "all-kinds"))]
            RecordKind::Deploy | RecordKind::Notify => Err(CoreError::ProviderNotFound {
                kind,
                provider: key.to_string(),
            }),
        }
    }

    fn erase<V: Variant>(&self, usage: Option<UsageFilter>) -> Vec<CatalogEntry> {
        self.options::<V>(usage)
            .into_iter()
            .map(CatalogEntry::from_option)
            .collect()
    }
}

fn schema_of<V: Variant>(key: &str) -> CoreResult<VariantSchema> {
    catalog::resolve::<V>(key)
        .map(|d| d.schema)
        .map_err(CoreError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;

    #[test]
    fn entries_are_kind_tagged_and_filtered() {
        let service = CatalogService::new(create_test_context().ctx);

        let notification = service.entries(RecordKind::Access, Some(UsageFilter::Notification));
        assert!(!notification.is_empty());
        assert!(notification.iter().all(|e| e.kind == RecordKind::Access));
        assert!(
            notification
                .iter()
                .all(|e| e.capabilities.contains(&Capability::Notification))
        );
    }

    #[cfg(feature = "all-kinds")]
    #[test]
    fn deploy_entries_name_their_credential() {
        let service = CatalogService::new(create_test_context().ctx);
        let entries = service.entries(RecordKind::Deploy, None);
        let Some(oss) = entries.iter().find(|e| e.key == "aliyun-oss") else {
            panic!("aliyun-oss missing");
        };
        assert_eq!(oss.access_provider, Some(AccessProvider::Aliyun));
    }

    #[test]
    fn schema_lookup() {
        let service = CatalogService::new(create_test_context().ctx);
        let res = service.schema(RecordKind::Access, "ssh");
        assert!(res.is_ok(), "schema failed: {res:?}");
        let Ok(schema) = res else {
            return;
        };
        assert!(schema.has_field("authMethod"));

        let res = service.schema(RecordKind::Access, "ftp");
        assert!(matches!(res, Err(CoreError::ProviderNotFound { .. })));
    }
}
