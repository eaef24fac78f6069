//! Catalog lookups shared by the three record kinds.

use crate::error::{ConfigError, Result};
use crate::traits::Variant;
use crate::types::{UsageFilter, VariantDescriptor};

/// Resolves a persisted discriminator string to its descriptor.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownProvider`] if `key` is not part of the
/// catalog of `V`.
///
/// # Examples
///
/// ```rust
/// use certimate_provider::{catalog, AccessProvider};
///
/// let d = catalog::resolve::<AccessProvider>("cloudflare").unwrap();
/// assert_eq!(d.provider, AccessProvider::Cloudflare);
/// assert!(catalog::resolve::<AccessProvider>("unknown").is_err());
/// ```
pub fn resolve<V: Variant>(key: &str) -> Result<VariantDescriptor<V>> {
    V::from_key(key).map(V::descriptor).ok_or_else(|| {
        log::debug!("Unknown {} provider: {key}", V::KIND);
        ConfigError::UnknownProvider {
            kind: V::KIND,
            provider: key.to_string(),
        }
    })
}

/// Lists the descriptors passing the optional usage filter, in catalog order.
pub fn list_available<V: Variant>(usage: Option<UsageFilter>) -> Vec<VariantDescriptor<V>> {
    V::all()
        .iter()
        .map(|v| v.descriptor())
        .filter(|d| d.is_available(usage))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::{Value, json};

    use super::*;
    use crate::providers::AccessProvider;
    #[cfg(feature = "deploy")]
    use crate::providers::DeployProvider;
    #[cfg(feature = "notify")]
    use crate::providers::NotifyProvider;
    use crate::schema::RESERVED_FIELDS;
    use crate::types::{ConfigMap, Constraint, FieldType, RecordKind};

    /// Builds a value map that satisfies every field of the schema.
    fn sample_values<V: Variant>(variant: V) -> ConfigMap {
        let schema = variant.schema();
        let mut values = schema.defaults();
        for spec in schema.fields {
            if values.contains_key(spec.key) {
                continue;
            }
            let value = match (spec.field_type, spec.constraint) {
                (FieldType::Number, Constraint::Range { min, .. }) => json!(min),
                (FieldType::Number, Constraint::Port) => json!(443),
                (FieldType::Number, _) => json!(1000),
                (FieldType::Switch, _) => json!(false),
                (FieldType::Select(options), _) => {
                    json!(options.iter().find(|o| !o.is_empty()).unwrap_or(&""))
                }
                (_, Constraint::Url) => json!("https://example.com/"),
                (_, Constraint::Domain | Constraint::Host) => json!("example.com"),
                (_, Constraint::Email) => json!("ops@example.com"),
                _ => json!("sample"),
            };
            values.insert(spec.key.to_string(), value);
        }
        values
    }

    fn check_catalog<V: Variant>() {
        let mut keys = HashSet::new();
        for variant in V::all() {
            assert!(keys.insert(variant.key()), "duplicate key {}", variant.key());

            let schema = variant.schema();
            let mut field_keys = HashSet::new();
            for spec in schema.fields {
                assert!(
                    !RESERVED_FIELDS.contains(&spec.key),
                    "{variant:?} declares reserved field {}",
                    spec.key
                );
                assert!(field_keys.insert(spec.key), "{variant:?} repeats {}", spec.key);
            }
            for rule in schema.rules {
                assert!(schema.has_field(rule.trigger()), "{variant:?} rule trigger");
            }

            let values = schema.normalize(&sample_values(*variant));
            let errors = schema.validate(&values);
            assert!(errors.is_empty(), "{variant:?}: {errors:?}");

            let parsed = variant.parse_config(&values);
            assert!(parsed.is_ok(), "{variant:?}: {parsed:?}");
        }
    }

    #[test]
    fn access_catalog_is_consistent() {
        check_catalog::<AccessProvider>();
        assert!(AccessProvider::all().len() >= 40);
    }

    #[cfg(feature = "deploy")]
    #[test]
    fn deploy_catalog_is_consistent() {
        check_catalog::<DeployProvider>();
        assert!(DeployProvider::all().len() >= 18);
    }

    #[cfg(feature = "notify")]
    #[test]
    fn notify_catalog_is_consistent() {
        check_catalog::<NotifyProvider>();
        assert!(NotifyProvider::all().len() >= 9);
    }

    #[test]
    fn resolve_unknown_key() {
        let res = resolve::<AccessProvider>("not-a-provider");
        assert!(matches!(
            res,
            Err(ConfigError::UnknownProvider {
                kind: RecordKind::Access,
                ..
            })
        ));
    }

    #[test]
    fn list_available_filters_by_usage() {
        let all = list_available::<AccessProvider>(None);
        assert_eq!(all.len(), AccessProvider::all().len());

        let ca = list_available::<AccessProvider>(Some(UsageFilter::Ca));
        assert!(ca.iter().any(|d| d.provider == AccessProvider::LetsEncrypt));
        assert!(ca.iter().all(|d| d.provider != AccessProvider::Cloudflare));

        let dns = list_available::<AccessProvider>(Some(UsageFilter::Dns));
        assert!(dns.iter().any(|d| d.provider == AccessProvider::Cloudflare));
        assert!(dns.iter().all(|d| d.provider != AccessProvider::Email));
    }

    #[test]
    fn parse_config_reports_shape_errors() {
        let mut values = ConfigMap::new();
        values.insert("smtpHost".to_string(), json!("smtp.example.com"));
        let res = AccessProvider::Email.parse_config(&values);
        assert!(matches!(res, Err(ConfigError::Shape { .. })));
    }

    #[test]
    fn empty_schema_parses_empty_map() {
        let res = AccessProvider::Local.parse_config(&ConfigMap::new());
        assert!(res.is_ok(), "{res:?}");
        let Ok(config) = res else {
            return;
        };
        let json_res = serde_json::to_value(&config);
        assert!(json_res.is_ok());
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json, json!({ "provider": "local", "config": {} }));
        assert_eq!(json.get("provider").and_then(Value::as_str), Some("local"));
    }
}
