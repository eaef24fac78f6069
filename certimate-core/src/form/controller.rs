//! Composite form controller: parent scope plus the mounted nested scope.

use std::sync::Arc;

use futures::future::OptionFuture;
use serde_json::Value;

use certimate_provider::{ConfigMap, Reserve, UsageFilter, Variant};

use super::parent::{FIELD_CONFIG, FIELD_PROVIDER, ParentForm, ParentValues};
use super::variant_form::{SubFormInit, VariantForm};
use crate::error::{CoreError, CoreResult};
use crate::traits::Localizer;
use crate::types::{FormValues, PersistedRecord, ValidationResult};

/// Key prefix of nested scope errors.
pub const CONFIG_PREFIX: &str = FIELD_CONFIG;

/// Initial state of a composite form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInit {
    /// Record id (edit mode).
    pub id: Option<String>,
    pub name: String,
    /// Discriminator key; an unknown key opens in the "pick a provider" state.
    pub provider: Option<String>,
    pub access_id: Option<String>,
    pub reserve: Option<Reserve>,
    /// Existing config; `None` mounts the variant defaults.
    pub config: Option<ConfigMap>,
    /// Narrows the selectable variants.
    pub usage: Option<UsageFilter>,
}

impl FormInit {
    /// Blank record.
    pub fn add(usage: Option<UsageFilter>) -> Self {
        Self {
            reserve: usage.and_then(UsageFilter::reserve),
            usage,
            ..Self::default()
        }
    }

    /// Blank record with a preselected provider.
    pub fn preset(provider: impl Into<String>, usage: Option<UsageFilter>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..Self::add(usage)
        }
    }

    /// Existing record.
    pub fn edit(record: &PersistedRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            provider: Some(record.provider.clone()),
            access_id: record.access_id.clone(),
            reserve: record.reserve,
            config: Some(record.config.clone()),
            usage: None,
        }
    }

    #[must_use]
    pub fn with_usage(self, usage: Option<UsageFilter>) -> Self {
        Self { usage, ..self }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

/// State of the anchor variant saved while another variant is mounted.
#[derive(Debug, Clone)]
struct AnchorState {
    config: ConfigMap,
    access_id: Option<String>,
}

/// The variant whose config survives a round trip through other variants.
#[derive(Debug, Clone)]
struct Anchor<V> {
    provider: V,
    saved: Option<AnchorState>,
}

/// Owns the parent scope and at most one nested scope, and exposes the
/// merged view of both.
///
/// The nested scope is owned directly; the parent only mirrors its snapshot
/// through the change channel handed over at mount.
pub struct CompositeFormController<V: Variant> {
    localizer: Arc<dyn Localizer>,
    init: FormInit,
    parent: ParentForm,
    nested: Option<VariantForm<V>>,
    anchor: Option<Anchor<V>>,
    disabled: bool,
}

impl<V: Variant> CompositeFormController<V> {
    pub fn new(localizer: Arc<dyn Localizer>, init: FormInit) -> Self {
        let parent = ParentForm::new(ParentValues::default(), false);
        let mut controller = Self {
            localizer,
            init,
            parent,
            nested: None,
            anchor: None,
            disabled: false,
        };
        controller.mount_initial();
        controller
    }

    /// (Re)builds both scopes from the initial state.
    fn mount_initial(&mut self) {
        let variant = self.initial_variant();
        if variant.is_none()
            && let Some(key) = self.init.provider.as_deref()
        {
            log::debug!("Opening {} form with unknown provider {key}", V::KIND);
        }

        self.parent = ParentForm::new(
            ParentValues {
                name: self.init.name.clone(),
                provider: variant.map(|v| v.key().to_string()),
                access_id: self.init.access_id.clone(),
                reserve: self.init.reserve,
            },
            variant.is_some_and(|v| v.access_provider().is_some()),
        );
        self.parent.set_disabled(self.disabled);
        self.mount_nested(variant);
        self.anchor = variant.map(|provider| Anchor {
            provider,
            saved: None,
        });
    }

    fn initial_variant(&self) -> Option<V> {
        self.init.provider.as_deref().and_then(V::from_key)
    }

    /// Mounts `variant` with its initial config and hands its change channel to the parent.
    fn mount_nested(&mut self, variant: Option<V>) {
        self.nested = variant.map(|v| {
            let init = match &self.init.config {
                Some(config) => SubFormInit::values(config.clone()),
                None => SubFormInit::defaults(),
            };
            VariantForm::mount(v.descriptor(), init.disabled(self.disabled))
        });
        self.parent
            .attach(self.nested.as_ref().map(VariantForm::subscribe));
    }

    pub fn init(&self) -> &FormInit {
        &self.init
    }

    pub fn usage(&self) -> Option<UsageFilter> {
        self.init.usage
    }

    pub fn parent(&self) -> &ParentForm {
        &self.parent
    }

    /// The mounted nested scope, if a variant is selected.
    pub fn nested(&self) -> Option<&VariantForm<V>> {
        self.nested.as_ref()
    }

    pub fn provider(&self) -> Option<V> {
        self.nested.as_ref().map(VariantForm::provider)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables editing of both scopes.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.parent.set_disabled(disabled);
        if let Some(nested) = self.nested.as_mut() {
            nested.set_disabled(disabled);
        }
    }

    /// Parent fields merged with the nested snapshot under `config`.
    pub fn get_values(&self) -> FormValues {
        let parent = self.parent.values();
        FormValues {
            id: self.init.id.clone(),
            name: parent.name.clone(),
            provider: parent.provider.clone(),
            access_id: parent.access_id.clone(),
            reserve: parent.reserve,
            config: self.parent.config(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        self.parent.set_name(name)
    }

    pub fn set_access_id(&mut self, access_id: Option<String>) -> bool {
        self.parent.set_access_id(access_id)
    }

    /// Edits a field of the nested scope.
    pub fn set_config_field(&mut self, key: &str, value: Value) -> bool {
        self.nested
            .as_mut()
            .is_some_and(|nested| nested.set_field(key, value))
    }

    /// Switches the discriminator.
    ///
    /// Returns `false` when the key is unknown (the form drops back to the
    /// "pick a provider" state), when the variant is filtered out by the
    /// usage, or when the form is disabled.
    pub fn select_provider(&mut self, key: &str) -> bool {
        if self.disabled {
            return false;
        }
        let Some(variant) = V::from_key(key) else {
            log::debug!("Unknown {} provider selected: {key}", V::KIND);
            self.stash_anchor();
            self.nested = None;
            self.parent.attach(None);
            self.parent.set_provider(None, false);
            return false;
        };
        if !variant.descriptor().is_available(self.init.usage) {
            log::debug!(
                "{} provider {key} is not available for {:?}",
                V::KIND,
                self.init.usage
            );
            return false;
        }
        let current = self.provider();
        if current == Some(variant) {
            return true;
        }

        self.stash_anchor();
        if current.and_then(V::access_provider) != variant.access_provider() {
            self.parent.restore_access_id(None);
        }

        let init = match self.anchor.as_mut() {
            None => {
                self.anchor = Some(Anchor {
                    provider: variant,
                    saved: None,
                });
                SubFormInit::defaults()
            }
            Some(anchor) if anchor.provider == variant => match anchor.saved.take() {
                Some(state) => {
                    log::debug!("Restoring {} config of {key}", V::KIND);
                    self.parent.restore_access_id(state.access_id);
                    SubFormInit::values(state.config)
                }
                None => self.anchor_initial(variant),
            },
            Some(_) => SubFormInit::defaults(),
        };

        let nested = VariantForm::mount(variant.descriptor(), init.disabled(self.disabled));
        self.parent.attach(Some(nested.subscribe()));
        self.parent.set_provider(
            Some(variant.key().to_string()),
            variant.access_provider().is_some(),
        );
        self.nested = Some(nested);
        true
    }

    /// Saves the anchor's state if the anchor is the mounted variant.
    fn stash_anchor(&mut self) {
        let (Some(anchor), Some(nested)) = (self.anchor.as_mut(), self.nested.as_ref()) else {
            return;
        };
        if anchor.provider == nested.provider() {
            anchor.saved = Some(AnchorState {
                config: nested.values().clone(),
                access_id: self.parent.values().access_id.clone(),
            });
        }
    }

    /// Mount arguments of the anchor when nothing was saved for it.
    fn anchor_initial(&self, variant: V) -> SubFormInit {
        let opened_with = self.init.provider.as_deref() == Some(variant.key());
        match &self.init.config {
            Some(config) if opened_with => SubFormInit::values(config.clone()),
            _ => SubFormInit::defaults(),
        }
    }

    /// Resets the listed fields, or the whole form when `None`.
    ///
    /// Listing `config` resets the nested scope to its mount values. Listing
    /// `provider` while another variant is mounted brings back the initial
    /// variant with its initial config.
    pub fn reset_fields(&mut self, fields: Option<&[&str]>) {
        let Some(fields) = fields else {
            self.mount_initial();
            return;
        };
        self.parent.reset(Some(fields));

        let initial = self.initial_variant();
        if fields.contains(&FIELD_PROVIDER) && self.provider() != initial {
            self.mount_nested(initial);
            self.anchor = initial.map(|provider| Anchor {
                provider,
                saved: None,
            });
        } else if fields.contains(&FIELD_CONFIG)
            && let Some(nested) = self.nested.as_mut()
        {
            nested.reset();
        }
    }

    /// Validates both scopes concurrently and waits for both.
    ///
    /// Both scopes switch to showing all their errors, whichever fails.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ValidationFailed`] carrying the merged errors of
    /// every failing field (nested fields keyed `config.<field>`).
    pub async fn validate_all(&mut self) -> CoreResult<FormValues> {
        let parent = self.parent.validate();
        let nested: OptionFuture<_> = self.nested.as_mut().map(VariantForm::validate).into();
        let (parent_errors, nested_errors) = futures::join!(parent, nested);

        let result = self.merge_errors(&parent_errors, &nested_errors.unwrap_or_default());
        if result.is_valid() {
            Ok(self.get_values())
        } else {
            log::debug!(
                "{} form rejected: {:?}",
                V::KIND,
                result.fields().collect::<Vec<_>>()
            );
            Err(CoreError::ValidationFailed(result))
        }
    }

    /// Errors currently shown to the user, both scopes merged.
    pub fn visible_errors(&self) -> ValidationResult {
        let nested = self
            .nested
            .as_ref()
            .map(VariantForm::visible_errors)
            .unwrap_or_default();
        self.merge_errors(&self.parent.visible_errors(), &nested)
    }

    fn merge_errors(
        &self,
        parent: &[certimate_provider::FieldError],
        nested: &[certimate_provider::FieldError],
    ) -> ValidationResult {
        let localizer = self.localizer.as_ref();
        ValidationResult::from_field_errors(None, parent, localizer).merge(
            ValidationResult::from_field_errors(Some(CONFIG_PREFIX), nested, localizer),
        )
    }
}

impl<V: Variant> std::fmt::Debug for CompositeFormController<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeFormController")
            .field("init", &self.init)
            .field("parent", &self.parent)
            .field("nested", &self.nested)
            .field("anchor", &self.anchor)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{BuiltinLocalizer, Language};
    use crate::types::{RecordKind, RecordPayload};
    use certimate_provider::AccessProvider;
    use serde_json::json;

    fn localizer() -> Arc<dyn Localizer> {
        Arc::new(BuiltinLocalizer::new(Language::EnUs))
    }

    fn access_form(init: FormInit) -> CompositeFormController<AccessProvider> {
        CompositeFormController::new(localizer(), init)
    }

    fn record(provider: &str, config: serde_json::Value) -> PersistedRecord {
        let config = match config {
            Value::Object(map) => map,
            _ => ConfigMap::new(),
        };
        PersistedRecord::create(
            RecordKind::Access,
            &RecordPayload {
                name: "existing".to_string(),
                provider: provider.to_string(),
                access_id: None,
                reserve: None,
                config,
            },
        )
    }

    #[tokio::test]
    async fn url_and_token_single_error() {
        let mut form = access_form(FormInit::preset("gotify", None));
        form.set_name("gotify");
        form.set_config_field("token", json!("abc"));

        let res = form.validate_all().await;
        let Err(CoreError::ValidationFailed(errors)) = res else {
            panic!("expected validation failure, got {res:?}");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["config.url"]);
    }

    #[tokio::test]
    async fn url_and_token_resolves_with_config() {
        let mut form = access_form(FormInit::preset("gotify", None));
        form.set_name("gotify");
        form.set_config_field("url", json!("https://example.com/api/"));
        form.set_config_field("token", json!("abc"));

        let res = form.validate_all().await;
        assert!(res.is_ok(), "validate_all failed: {res:?}");
        let Ok(values) = res else {
            return;
        };
        assert_eq!(
            Value::Object(values.config),
            json!({ "url": "https://example.com/api/", "token": "abc" })
        );
        assert_eq!(values.provider.as_deref(), Some("gotify"));
    }

    #[tokio::test]
    async fn join_reports_only_failing_scope() {
        // parent fails, nested passes
        let mut form = access_form(FormInit::preset("cloudflare", None));
        form.set_config_field("dnsApiToken", json!("token"));
        let Err(CoreError::ValidationFailed(errors)) = form.validate_all().await else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name"]);

        // nested fails, parent passes
        let mut form = access_form(FormInit::preset("cloudflare", None));
        form.set_name("cf");
        let Err(CoreError::ValidationFailed(errors)) = form.validate_all().await else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["config.dnsApiToken"]);
    }

    #[tokio::test]
    async fn both_scopes_errors_become_visible() {
        let mut form = access_form(FormInit::preset("cloudflare", None));
        assert!(form.visible_errors().is_empty());

        let res = form.validate_all().await;
        assert!(res.is_err());
        let visible = form.visible_errors();
        assert!(visible.contains("name"));
        assert!(visible.contains("config.dnsApiToken"));
    }

    #[test]
    fn merge_tracks_last_snapshot() {
        let mut form = access_form(FormInit::preset("webhook", None));
        for i in 0..20 {
            form.set_config_field("url", json!(format!("https://example.com/{i}")));
        }
        form.set_config_field("method", json!("PUT"));

        let Some(nested) = form.nested() else {
            panic!("nested scope not mounted");
        };
        assert_eq!(form.get_values().config, nested.snapshot());
        assert_eq!(
            form.get_values().config.get("url"),
            Some(&json!("https://example.com/19"))
        );
    }

    #[test]
    fn restore_on_return_in_add_mode() {
        let mut form = access_form(FormInit::add(None));
        assert!(form.nested().is_none());

        assert!(form.select_provider("ssh"));
        form.set_config_field("host", json!("10.0.0.8"));

        assert!(form.select_provider("cloudflare"));
        assert_eq!(form.get_values().config, ConfigMap::new());

        assert!(form.select_provider("ssh"));
        assert_eq!(form.get_values().config.get("host"), Some(&json!("10.0.0.8")));
    }

    #[test]
    fn intermediate_variant_is_not_restored() {
        let mut form = access_form(FormInit::preset("ssh", None));
        form.select_provider("webhook");
        form.set_config_field("url", json!("https://hook.example.com/"));
        form.select_provider("email");
        form.select_provider("webhook");

        assert!(form.get_values().config.get("url").is_none());
        assert_eq!(form.get_values().config.get("method"), Some(&json!("POST")));
    }

    #[test]
    fn edit_mode_switch_discards_old_config() {
        let existing = record(
            "ssh",
            json!({ "host": "10.0.0.1", "port": 2222, "authMethod": "password", "username": "ops", "password": "pw" }),
        );
        let mut form = access_form(FormInit::edit(&existing));
        assert_eq!(form.get_values().config.get("port"), Some(&json!(2222)));

        assert!(form.select_provider("webhook"));
        let config = form.get_values().config;
        assert!(config.get("host").is_none());
        assert!(config.get("password").is_none());
        assert_eq!(config.get("method"), Some(&json!("POST")));

        // back to the record's variant: the original config returns
        assert!(form.select_provider("ssh"));
        assert_eq!(form.get_values().config.get("port"), Some(&json!(2222)));
        assert_eq!(form.get_values().config.get("username"), Some(&json!("ops")));
    }

    #[test]
    fn tls_toggle_keeps_record_port_in_edit_mode() {
        let existing = record(
            "email",
            json!({
                "smtpHost": "smtp.example.com",
                "smtpPort": 2525,
                "smtpTls": false,
                "username": "mailer",
                "password": "pw",
                "senderAddress": "noreply@example.com",
            }),
        );
        let mut form = access_form(FormInit::edit(&existing));
        assert!(form.set_config_field("smtpTls", json!(true)));
        assert_eq!(form.get_values().config.get("smtpPort"), Some(&json!(2525)));

        // a record still on the plain SMTP port follows the toggle
        let existing = record(
            "email",
            json!({ "smtpHost": "smtp.example.com", "smtpPort": 25, "smtpTls": false }),
        );
        let mut form = access_form(FormInit::edit(&existing));
        assert!(form.set_config_field("smtpTls", json!(true)));
        assert_eq!(form.get_values().config.get("smtpPort"), Some(&json!(465)));
    }

    #[test]
    fn tls_toggle_keeps_restored_port() {
        let mut form = access_form(FormInit::add(None));
        assert!(form.select_provider("email"));
        form.set_config_field("smtpPort", json!(2525));

        assert!(form.select_provider("ssh"));
        assert!(form.select_provider("email"));
        assert_eq!(form.get_values().config.get("smtpPort"), Some(&json!(2525)));

        assert!(form.set_config_field("smtpTls", json!(true)));
        assert_eq!(form.get_values().config.get("smtpPort"), Some(&json!(2525)));
    }

    #[tokio::test]
    async fn numeric_text_value_is_valid_and_saved_as_text() {
        let mut form = access_form(FormInit::preset("gotify", None));
        form.set_name("gotify");
        form.set_config_field("url", json!("https://example.com/api/"));
        form.set_config_field("token", json!(12345));
        assert!(form.visible_errors().is_empty());

        let res = form.validate_all().await;
        assert!(res.is_ok(), "validate_all failed: {res:?}");
        let Ok(values) = res else {
            return;
        };
        assert_eq!(values.config.get("token"), Some(&json!("12345")));
        assert!(AccessProvider::Gotify.parse_config(&values.config).is_ok());
    }

    #[tokio::test]
    async fn list_in_text_field_is_a_field_error() {
        let mut form = access_form(FormInit::preset("gotify", None));
        form.set_name("gotify");
        form.set_config_field("url", json!("https://example.com/api/"));
        form.set_config_field("token", json!(["a", "b"]));

        let Err(CoreError::ValidationFailed(errors)) = form.validate_all().await else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["config.token"]);
    }

    #[test]
    fn unknown_provider_opens_picker_state() {
        let existing = record("not-a-provider", json!({}));
        let form = access_form(FormInit::edit(&existing));
        assert!(form.nested().is_none());
        assert!(form.get_values().provider.is_none());

        let mut form = access_form(FormInit::preset("ssh", None));
        assert!(!form.select_provider("nope"));
        assert!(form.nested().is_none());
        assert!(form.get_values().config.is_empty());
    }

    #[test]
    fn usage_filter_refuses_unavailable_variant() {
        let mut form = access_form(FormInit::add(Some(UsageFilter::Ca)));
        assert!(!form.select_provider("cloudflare"));
        assert!(form.nested().is_none());
        assert_eq!(form.get_values().reserve, Some(Reserve::Ca));
    }

    #[cfg(feature = "all-kinds")]
    #[test]
    fn access_id_cleared_when_access_provider_changes() {
        let mut form: CompositeFormController<certimate_provider::DeployProvider> =
            CompositeFormController::new(localizer(), FormInit::preset("aliyun-cdn", None));
        assert!(form.parent().requires_access());
        form.set_access_id(Some("acc-aliyun".to_string()));

        // same access provider keeps the credential
        form.select_provider("aliyun-oss");
        assert_eq!(form.get_values().access_id.as_deref(), Some("acc-aliyun"));

        form.select_provider("tencentcloud-cdn");
        assert!(form.get_values().access_id.is_none());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut form = access_form(FormInit::preset("ssh", None));
        form.set_name("changed");
        form.set_config_field("port", json!(2200));
        form.select_provider("email");

        form.reset_fields(None);
        let once = (form.get_values(), form.visible_errors());
        form.reset_fields(None);
        assert_eq!((form.get_values(), form.visible_errors()), once);
        assert_eq!(form.get_values().provider.as_deref(), Some("ssh"));
        assert_eq!(form.get_values().config.get("port"), Some(&json!(22)));
    }

    #[test]
    fn partial_reset_of_config_keeps_parent() {
        let mut form = access_form(FormInit::preset("ssh", None));
        form.set_name("kept");
        form.set_config_field("host", json!("example.com"));

        form.reset_fields(Some(&["config"]));
        assert_eq!(form.get_values().name, "kept");
        assert_eq!(
            form.get_values().config.get("host"),
            Some(&json!("127.0.0.1"))
        );
    }

    #[test]
    fn disabled_form_rejects_edits() {
        let mut form = access_form(FormInit::preset("ssh", None));
        form.set_disabled(true);
        assert!(!form.set_name("x"));
        assert!(!form.set_config_field("host", json!("example.com")));
        assert!(!form.select_provider("email"));
        assert_eq!(form.provider(), Some(AccessProvider::Ssh));
    }
}
