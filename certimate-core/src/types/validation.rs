//! Aggregated validation result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use certimate_provider::FieldError;

use crate::traits::Localizer;

/// Mapping from field name to a localized error message.
///
/// An absent field is valid. Nested (variant) fields are keyed
/// `config.<field>`, parent fields by their bare name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    /// Localizes field errors, prefixing every key with `prefix` when given.
    pub fn from_field_errors(
        prefix: Option<&str>,
        errors: &[FieldError],
        localizer: &dyn Localizer,
    ) -> Self {
        let errors = errors
            .iter()
            .map(|e| {
                let key = match prefix {
                    Some(p) => format!("{p}.{}", e.field),
                    None => e.field.to_string(),
                };
                let params = e.kind.params();
                let params: Vec<(&str, &str)> =
                    params.iter().map(|(k, v)| (*k, v.as_str())).collect();
                (key, localizer.resolve(e.kind.message_key(), &params))
            })
            .collect();
        Self { errors }
    }

    /// Returns `true` if no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message of a failing field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Failing field names, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Union of two results. Scopes never share keys, so nothing is overwritten.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{BuiltinLocalizer, Language};
    use certimate_provider::FieldErrorKind;

    #[test]
    fn prefixes_nested_keys() {
        let localizer = BuiltinLocalizer::new(Language::EnUs);
        let nested = ValidationResult::from_field_errors(
            Some("config"),
            &[FieldError::new("url", FieldErrorKind::Required)],
            &localizer,
        );
        let parent = ValidationResult::from_field_errors(
            None,
            &[FieldError::new("name", FieldErrorKind::TooLong { max: 64 })],
            &localizer,
        );
        let merged = parent.merge(nested);

        assert_eq!(merged.fields().collect::<Vec<_>>(), vec!["config.url", "name"]);
        assert_eq!(merged.get("config.url"), Some("This field is required"));
        assert_eq!(
            merged.get("name"),
            Some("Please enter no more than 64 characters")
        );
    }
}
