//! Nested scope: the sub-form of one variant.

use std::collections::HashSet;

use futures::future::{Ready, ready};
use serde_json::Value;
use tokio::sync::watch;

use certimate_provider::{ConfigMap, FieldError, Variant, VariantDescriptor, VariantSchema};

/// Initial values of a sub-form.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialValues {
    /// The variant's canonical defaults (new records only).
    Defaults,
    /// Values taken verbatim (existing record, or a restored snapshot).
    Values(ConfigMap),
}

/// Mount arguments of a sub-form.
#[derive(Debug, Clone, PartialEq)]
pub struct SubFormInit {
    pub initial: InitialValues,
    pub disabled: bool,
}

impl SubFormInit {
    pub fn defaults() -> Self {
        Self {
            initial: InitialValues::Defaults,
            disabled: false,
        }
    }

    pub fn values(values: ConfigMap) -> Self {
        Self {
            initial: InitialValues::Values(values),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(self, disabled: bool) -> Self {
        Self { disabled, ..self }
    }
}

/// The editable form of exactly one variant's configuration.
///
/// Every accepted edit re-validates the whole scope and publishes the full
/// normalized snapshot to subscribers. Publishing goes through a
/// [`watch`] channel, so a subscriber always observes the latest complete
/// snapshot and never a partial one.
pub struct VariantForm<V: Variant> {
    descriptor: VariantDescriptor<V>,
    /// Values at mount, restored by [`reset`](Self::reset).
    initial: ConfigMap,
    /// Raw values as entered (unparsable input kept for error display).
    values: ConfigMap,
    disabled: bool,
    /// Fields the user edited since mount.
    touched: HashSet<&'static str>,
    submitted: bool,
    changes: watch::Sender<ConfigMap>,
}

impl<V: Variant> VariantForm<V> {
    /// Mounts the sub-form of `descriptor`.
    pub fn mount(descriptor: VariantDescriptor<V>, init: SubFormInit) -> Self {
        let initial = match init.initial {
            InitialValues::Defaults => descriptor.schema.defaults(),
            InitialValues::Values(values) => values,
        };
        let (changes, _) = watch::channel(descriptor.schema.normalize(&initial));
        log::debug!("Mounted {} form for {}", V::KIND, descriptor.provider.key());

        Self {
            descriptor,
            values: initial.clone(),
            initial,
            disabled: init.disabled,
            touched: HashSet::new(),
            submitted: false,
            changes,
        }
    }

    pub fn provider(&self) -> V {
        self.descriptor.provider
    }

    pub fn descriptor(&self) -> &VariantDescriptor<V> {
        &self.descriptor
    }

    pub fn schema(&self) -> VariantSchema {
        self.descriptor.schema
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Subscribes to value changes. The receiver starts at the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ConfigMap> {
        self.changes.subscribe()
    }

    /// Raw values as entered.
    pub fn values(&self) -> &ConfigMap {
        &self.values
    }

    /// Raw value of one field.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Normalized snapshot (what is propagated upward and persisted).
    pub fn snapshot(&self) -> ConfigMap {
        self.schema().normalize(&self.values)
    }

    /// Returns `true` if the user edited `key` since mount.
    pub fn is_touched(&self, key: &str) -> bool {
        self.touched.contains(key)
    }

    /// Applies a user edit.
    ///
    /// Returns `false` (and changes nothing) when the form is disabled or the
    /// key is not declared by the variant's schema.
    pub fn set_field(&mut self, key: &str, value: Value) -> bool {
        if self.disabled {
            log::debug!("Ignored edit of {key}: form is disabled");
            return false;
        }
        let schema = self.schema();
        let Some(spec) = schema.field(key) else {
            log::debug!(
                "Ignored edit of {key}: not a field of {}",
                self.descriptor.provider.key()
            );
            return false;
        };

        let old = self.values.insert(spec.key.to_string(), value);
        self.touched.insert(spec.key);

        let touched = &self.touched;
        for rule in schema.rules_for(spec.key) {
            let changed = rule.apply(old.as_ref(), &mut self.values, schema.fields, |k| {
                touched.contains(k)
            });
            if !changed.is_empty() {
                log::debug!("Rule on {key} rewrote {changed:?}");
            }
        }

        self.publish();
        true
    }

    /// Current failures of every field, visible or not.
    pub fn errors(&self) -> Vec<FieldError> {
        self.schema().validate(&self.values)
    }

    /// Failures the user should see: touched fields, or all after a submit attempt.
    pub fn visible_errors(&self) -> Vec<FieldError> {
        let errors = self.errors();
        if self.submitted {
            return errors;
        }
        errors
            .into_iter()
            .filter(|e| self.touched.contains(e.field))
            .collect()
    }

    /// Back to the mount values, with no touched fields and hidden errors.
    pub fn reset(&mut self) {
        self.values.clone_from(&self.initial);
        self.touched.clear();
        self.submitted = false;
        self.publish();
    }

    /// Validates the scope and makes all its errors visible.
    pub fn validate(&mut self) -> Ready<Vec<FieldError>> {
        self.submitted = true;
        ready(self.errors())
    }

    fn publish(&self) {
        self.changes.send_replace(self.snapshot());
    }
}

impl<V: Variant> std::fmt::Debug for VariantForm<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantForm")
            .field("provider", &self.descriptor.provider)
            .field("values", &self.values)
            .field("disabled", &self.disabled)
            .field("touched", &self.touched)
            .field("submitted", &self.submitted)
            .finish_non_exhaustive()
    }
}
