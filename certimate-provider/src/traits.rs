use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::providers::AccessProvider;
use crate::error::{ConfigError, Result};
use crate::schema::VariantSchema;
use crate::types::{ConfigMap, RecordKind, VariantDescriptor};

/// A discriminator enum: one value per supported provider of a record kind.
///
/// Implemented by [`AccessProvider`], `DeployProvider` and `NotifyProvider`.
/// The mapping from discriminator to descriptor is a plain `match`, so it is
/// total and order-independent.
pub trait Variant:
    Copy + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Record kind this discriminator belongs to.
    const KIND: RecordKind;

    /// Typed sum of every variant configuration of this kind, serialized as
    /// `{ "provider": key, "config": { ... } }`.
    type Config: Serialize + DeserializeOwned + Debug + Clone + Send + Sync;

    /// Every discriminator value, in catalog (display) order.
    fn all() -> &'static [Self];

    /// Persisted discriminator string.
    fn key(self) -> &'static str;

    /// Parses a persisted discriminator string.
    fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.key() == key)
    }

    /// Static descriptor of this variant.
    fn descriptor(self) -> VariantDescriptor<Self>;

    /// Configuration schema of this variant.
    fn schema(self) -> VariantSchema {
        self.descriptor().schema
    }

    /// Access provider whose credential this variant consumes, if any.
    fn access_provider(self) -> Option<AccessProvider> {
        None
    }

    /// Converts a validated form snapshot into the typed configuration.
    fn parse_config(self, config: &ConfigMap) -> Result<Self::Config> {
        let tagged = serde_json::json!({ "provider": self.key(), "config": config });
        serde_json::from_value(tagged).map_err(|e| ConfigError::Shape {
            kind: Self::KIND,
            provider: self.key().to_string(),
            reason: e.to_string(),
        })
    }
}
