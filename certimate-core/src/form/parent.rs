//! Parent scope: the fields common to every record.

use std::collections::HashSet;

use futures::future::{Ready, ready};
use tokio::sync::watch;

use certimate_provider::{ConfigMap, FieldError, FieldErrorKind, Reserve};

/// Maximum length of a record name, in characters.
pub const NAME_MAX_LEN: usize = 64;

/// Parent field keys.
pub const FIELD_NAME: &str = "name";
pub const FIELD_PROVIDER: &str = "provider";
pub const FIELD_ACCESS_ID: &str = "accessId";
pub const FIELD_RESERVE: &str = "reserve";
pub const FIELD_CONFIG: &str = "config";

/// Values of the parent scope at open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentValues {
    pub name: String,
    pub provider: Option<String>,
    pub access_id: Option<String>,
    pub reserve: Option<Reserve>,
}

/// The parent scope of a record form.
///
/// Holds the common fields and mirrors the nested scope's snapshot under
/// `config`. The mirror is read-only here: it follows the nested scope's
/// change channel and is never written back.
#[derive(Debug)]
pub struct ParentForm {
    initial: ParentValues,
    values: ParentValues,
    /// Whether the selected variant consumes an access record.
    requires_access: bool,
    initial_requires_access: bool,
    config: Option<watch::Receiver<ConfigMap>>,
    disabled: bool,
    touched: HashSet<&'static str>,
    submitted: bool,
}

impl ParentForm {
    pub fn new(initial: ParentValues, requires_access: bool) -> Self {
        Self {
            values: initial.clone(),
            initial,
            requires_access,
            initial_requires_access: requires_access,
            config: None,
            disabled: false,
            touched: HashSet::new(),
            submitted: false,
        }
    }

    pub fn values(&self) -> &ParentValues {
        &self.values
    }

    pub fn initial(&self) -> &ParentValues {
        &self.initial
    }

    /// Latest snapshot published by the attached nested scope.
    pub fn config(&self) -> ConfigMap {
        self.config
            .as_ref()
            .map(|rx| rx.borrow().clone())
            .unwrap_or_default()
    }

    /// Follows a newly mounted nested scope; `None` detaches (no variant).
    pub fn attach(&mut self, config: Option<watch::Receiver<ConfigMap>>) {
        self.config = config;
    }

    pub fn requires_access(&self) -> bool {
        self.requires_access
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        if self.disabled {
            return false;
        }
        self.values.name = name.into();
        self.touched.insert(FIELD_NAME);
        true
    }

    pub fn set_access_id(&mut self, access_id: Option<String>) -> bool {
        if self.disabled {
            return false;
        }
        self.values.access_id = access_id.filter(|id| !id.trim().is_empty());
        self.touched.insert(FIELD_ACCESS_ID);
        true
    }

    /// Replaces the access id without marking it user-edited.
    pub(crate) fn restore_access_id(&mut self, access_id: Option<String>) {
        self.values.access_id = access_id;
    }

    /// Records a discriminator change decided by the controller.
    pub(crate) fn set_provider(&mut self, provider: Option<String>, requires_access: bool) {
        self.values.provider = provider;
        self.requires_access = requires_access;
        self.touched.insert(FIELD_PROVIDER);
    }

    /// Current failures of every parent field.
    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let name = self.values.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new(FIELD_NAME, FieldErrorKind::Required));
        } else if name.chars().count() > NAME_MAX_LEN {
            errors.push(FieldError::new(
                FIELD_NAME,
                FieldErrorKind::TooLong { max: NAME_MAX_LEN },
            ));
        }
        if self.values.provider.is_none() {
            errors.push(FieldError::new(FIELD_PROVIDER, FieldErrorKind::Required));
        }
        if self.requires_access && self.values.access_id.is_none() {
            errors.push(FieldError::new(FIELD_ACCESS_ID, FieldErrorKind::Required));
        }
        errors
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

    /// Resets the listed fields (all parent fields when `None`).
    ///
    /// `config` is not a parent-owned value; resetting it is the nested
    /// scope's job.
    pub fn reset(&mut self, fields: Option<&[&str]>) {
        let wants = |key: &str| fields.is_none_or(|f| f.contains(&key));
        if wants(FIELD_NAME) {
            self.values.name.clone_from(&self.initial.name);
            self.touched.remove(FIELD_NAME);
        }
        if wants(FIELD_PROVIDER) {
            self.values.provider.clone_from(&self.initial.provider);
            self.requires_access = self.initial_requires_access;
            self.touched.remove(FIELD_PROVIDER);
        }
        if wants(FIELD_ACCESS_ID) {
            self.values.access_id.clone_from(&self.initial.access_id);
            self.touched.remove(FIELD_ACCESS_ID);
        }
        if wants(FIELD_RESERVE) {
            self.values.reserve = self.initial.reserve;
        }
        if fields.is_none() {
            self.submitted = false;
        }
    }

    /// Validates the scope and makes all its errors visible.
    pub fn validate(&mut self) -> Ready<Vec<FieldError>> {
        self.submitted = true;
        ready(self.errors())
    }
}
