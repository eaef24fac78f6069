//! Variant schema: the field list, defaults and cross-field rules of one
//! variant, driving a single generic validator.

use crate::error::FieldError;
use crate::rules::FieldRule;
use crate::types::{ConfigMap, FieldSpec};
use crate::validate;

/// Field names owned by the parent form. Variant schemas must not use them.
pub const RESERVED_FIELDS: &[&str] = &["name", "provider", "accessId", "reserve", "config"];

/// Declarative schema of one variant configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSchema {
    /// Fields in display order.
    pub fields: &'static [FieldSpec],
    /// Cross-field rules.
    pub rules: &'static [FieldRule],
}

impl VariantSchema {
    /// Schema without fields (e.g., the local host needs no credentials).
    pub const EMPTY: Self = Self {
        fields: &[],
        rules: &[],
    };

    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields, rules: &[] }
    }

    #[must_use]
    pub const fn with_rules(self, rules: &'static [FieldRule]) -> Self {
        Self { rules, ..self }
    }

    /// Looks up a field by key.
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Returns `true` if `key` is declared by this schema.
    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Canonical defaults for a newly created record.
    ///
    /// Fields without a declared default are absent.
    pub fn defaults(&self) -> ConfigMap {
        self.fields
            .iter()
            .filter_map(|f| f.default.to_value().map(|v| (f.key.to_string(), v)))
            .collect()
    }

    /// Validates every field and returns all failures, in field order.
    pub fn validate(&self, values: &ConfigMap) -> Vec<FieldError> {
        self.fields
            .iter()
            .filter_map(|spec| validate::check_field(spec, values))
            .collect()
    }

    /// Applies successful coercions (see [`validate::normalize`]).
    pub fn normalize(&self, values: &ConfigMap) -> ConfigMap {
        validate::normalize(self.fields, values)
    }

    /// Rules fired by an edit of `key`, in declaration order.
    pub fn rules_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'static FieldRule> + 'a {
        self.rules.iter().filter(move |r| r.trigger() == key)
    }
}
