//! Edit surface: hosts one composite form per open/close cycle and
//! orchestrates validation and persistence on save.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, watch};

use certimate_provider::{ConfigMap, UsageFilter, Variant, catalog};

use crate::error::{CoreError, CoreResult};
use crate::form::{CompositeFormController, FormInit};
use crate::services::ServiceContext;
use crate::traits::Notice;
use crate::types::{FormValues, PersistedRecord, RecordPayload, ValidationResult};

/// Called with the persisted record once a save succeeds.
pub type AfterSubmit = Box<dyn FnOnce(&PersistedRecord) + Send>;

/// Called with `true` when the surface opens and `false` when it closes.
pub type OnOpenChange = Arc<dyn Fn(bool) + Send + Sync>;

/// Lifecycle state of an edit surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceState {
    Idle,
    Open,
    Validating,
    Submitting,
    Closed,
}

impl SurfaceState {
    /// A save is in flight.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }
}

/// How the user asked to close the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Explicit cancel button.
    Cancel,
    /// Click outside the surface.
    Backdrop,
    /// Close icon in the header.
    CloseIcon,
}

/// Arguments of [`EditSurface::open`].
#[derive(Default)]
pub struct SurfaceProps {
    /// Existing record (edit mode).
    pub data: Option<PersistedRecord>,
    /// Preselected provider key (add mode).
    pub preset: Option<String>,
    pub usage: Option<UsageFilter>,
    pub after_submit: Option<AfterSubmit>,
    pub on_open_change: Option<OnOpenChange>,
}

impl SurfaceProps {
    pub fn add(usage: Option<UsageFilter>) -> Self {
        Self {
            usage,
            ..Self::default()
        }
    }

    pub fn preset(provider: impl Into<String>, usage: Option<UsageFilter>) -> Self {
        Self {
            preset: Some(provider.into()),
            usage,
            ..Self::default()
        }
    }

    pub fn edit(record: PersistedRecord) -> Self {
        Self {
            data: Some(record),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn after_submit(self, f: impl FnOnce(&PersistedRecord) + Send + 'static) -> Self {
        Self {
            after_submit: Some(Box::new(f)),
            ..self
        }
    }

    #[must_use]
    pub fn on_open_change(self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        Self {
            on_open_change: Some(Arc::new(f)),
            ..self
        }
    }
}

impl std::fmt::Debug for SurfaceProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceProps")
            .field("data", &self.data)
            .field("preset", &self.preset)
            .field("usage", &self.usage)
            .field("after_submit", &self.after_submit.is_some())
            .field("on_open_change", &self.on_open_change.is_some())
            .finish()
    }
}

/// State of one open/close cycle.
struct Session<V: Variant> {
    controller: CompositeFormController<V>,
    /// Id of the record being edited; `None` creates a new record.
    editing: Option<String>,
    after_submit: Option<AfterSubmit>,
    on_open_change: Option<OnOpenChange>,
}

/// A generic "edit this kind of record, call me back with the result"
/// surface, shared by access, deploy and notify records.
///
/// Every state transition happens while holding the session lock. The lock
/// is released while the repository call is in flight, so the surface can
/// still be read (and refuses dismissal) during a save.
pub struct EditSurface<V: Variant> {
    ctx: Arc<ServiceContext>,
    state: watch::Sender<SurfaceState>,
    session: Mutex<Option<Session<V>>>,
}

impl<V: Variant> EditSurface<V> {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let (state, _) = watch::channel(SurfaceState::Idle);
        Self {
            ctx,
            state,
            session: Mutex::new(None),
        }
    }

    pub fn state(&self) -> SurfaceState {
        *self.state.borrow()
    }

    /// Subscribes to state changes.
    pub fn subscribe_state(&self) -> watch::Receiver<SurfaceState> {
        self.state.subscribe()
    }

    fn transition(&self, from: &[SurfaceState], to: SurfaceState) -> bool {
        self.state.send_if_modified(|state| {
            if from.contains(state) {
                *state = to;
                true
            } else {
                false
            }
        })
    }

    fn invalid_state(&self, action: &str) -> CoreError {
        CoreError::InvalidState(format!(
            "cannot {action} {} surface while {:?}",
            V::KIND,
            self.state()
        ))
    }

    /// Opens the surface with a fresh composite form.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidState`] if the surface is already open.
    pub async fn open(&self, props: SurfaceProps) -> CoreResult<()> {
        let SurfaceProps {
            data,
            preset,
            usage,
            after_submit,
            on_open_change,
        } = props;

        let mut session = self.session.lock().await;
        if !self.transition(&[SurfaceState::Idle, SurfaceState::Closed], SurfaceState::Open) {
            return Err(self.invalid_state("open"));
        }

        let init = match (data, preset) {
            (Some(record), _) => FormInit::edit(&record).with_usage(usage),
            (None, Some(provider)) => FormInit::preset(provider, usage),
            (None, None) => FormInit::add(usage),
        };
        log::debug!(
            "Opened {} surface ({})",
            V::KIND,
            init.id.as_deref().unwrap_or("new")
        );
        *session = Some(Session {
            editing: init.id.clone(),
            controller: CompositeFormController::new(self.ctx.localizer.clone(), init),
            after_submit,
            on_open_change: on_open_change.clone(),
        });
        drop(session);

        if let Some(callback) = on_open_change {
            callback(true);
        }
        Ok(())
    }

    /// Runs `f` against the form while the surface is open.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidState`] unless the surface is open and idle.
    pub async fn edit<R>(
        &self,
        f: impl FnOnce(&mut CompositeFormController<V>) -> R,
    ) -> CoreResult<R> {
        let mut session = self.session.lock().await;
        match session.as_mut() {
            Some(session) if self.state() == SurfaceState::Open => Ok(f(&mut session.controller)),
            _ => Err(self.invalid_state("edit")),
        }
    }

    /// Merged form values, if a form is mounted.
    pub async fn values(&self) -> Option<FormValues> {
        self.session
            .lock()
            .await
            .as_ref()
            .map(|s| s.controller.get_values())
    }

    /// Errors currently shown by the form.
    pub async fn errors(&self) -> ValidationResult {
        self.session
            .lock()
            .await
            .as_ref()
            .map(|s| s.controller.visible_errors())
            .unwrap_or_default()
    }

    /// Closes the surface without saving.
    ///
    /// Refused (returns `false`) while a save is validating or submitting,
    /// whatever the reason.
    pub async fn dismiss(&self, reason: DismissReason) -> bool {
        let mut session = self.session.lock().await;
        if !self.transition(&[SurfaceState::Open], SurfaceState::Closed) {
            log::debug!(
                "Refused to dismiss {} surface ({reason:?}) while {:?}",
                V::KIND,
                self.state()
            );
            return false;
        }
        let on_open_change = session.take().and_then(|s| s.on_open_change);
        drop(session);

        log::debug!("Dismissed {} surface ({reason:?})", V::KIND);
        if let Some(callback) = on_open_change {
            callback(false);
        }
        true
    }

    /// Validates and persists the form.
    ///
    /// On success the `after_submit` callback runs, then the form is torn
    /// down and the surface closes. On any failure the surface returns to
    /// [`SurfaceState::Open`] with every entered value intact.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidState`] if the surface is not open
    /// - [`CoreError::ValidationFailed`] with the merged field errors
    /// - [`CoreError::UsageMismatch`] / [`CoreError::ConfigShape`] for a
    ///   provider the surface cannot save (notified as a request error)
    /// - the repository's error if persisting fails (notified)
    pub async fn save(&self) -> CoreResult<PersistedRecord> {
        // declared before the session lock so it runs after the lock is released
        let mut pending = PendingSave {
            surface: self,
            armed: false,
        };
        let mut guard = self.session.lock().await;
        let Some(session) = guard.as_mut() else {
            return Err(self.invalid_state("save"));
        };
        if !self.transition(&[SurfaceState::Open], SurfaceState::Validating) {
            return Err(self.invalid_state("save"));
        }
        pending.armed = true;
        session.controller.set_disabled(true);

        let prepared = match session.controller.validate_all().await {
            Ok(values) => build_payload::<V>(&values, session.controller.usage()).inspect_err(
                |e| self.report_failure(e),
            ),
            Err(e) => {
                e.log(&format!("Rejected {} form", V::KIND));
                Err(e)
            }
        };
        let payload = match prepared {
            Ok(payload) => payload,
            Err(e) => {
                session.controller.set_disabled(false);
                self.transition(&[SurfaceState::Validating], SurfaceState::Open);
                return Err(e);
            }
        };
        let editing = session.editing.clone();
        self.transition(&[SurfaceState::Validating], SurfaceState::Submitting);
        drop(guard);

        let result = match editing.as_deref() {
            Some(id) => self.ctx.repository.update(V::KIND, id, &payload).await,
            None => self.ctx.repository.create(V::KIND, &payload).await,
        };

        let mut guard = self.session.lock().await;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                self.report_failure(&e);
                if let Some(session) = guard.as_mut() {
                    session.controller.set_disabled(false);
                }
                self.transition(&[SurfaceState::Submitting], SurfaceState::Open);
                return Err(e);
            }
        };
        let session = guard.take();
        drop(guard);
        pending.armed = false;

        log::info!(
            "Saved {} record {} ({})",
            V::KIND,
            record.id,
            record.provider
        );
        let on_open_change = session.and_then(|session| {
            if let Some(callback) = session.after_submit {
                callback(&record);
            }
            session.on_open_change
        });
        self.transition(&[SurfaceState::Submitting], SurfaceState::Closed);
        if let Some(callback) = on_open_change {
            callback(false);
        }
        Ok(record)
    }

    fn report_failure(&self, err: &CoreError) {
        err.log(&format!("Failed to save {} record", V::KIND));
        let localizer = self.ctx.localizer.as_ref();
        let message = match err {
            CoreError::RequestError(message) | CoreError::StorageError(message) => message.clone(),
            CoreError::UsageMismatch { .. }
            | CoreError::ConfigShape { .. }
            | CoreError::ProviderNotFound { .. } => {
                format!("{}: {err}", localizer.text("common.notice.request_error"))
            }
            _ => err.to_string(),
        };
        self.ctx.notifier.notify(Notice::error(
            localizer.text("common.notice.save_failed"),
            message,
        ));
    }
}

/// Reopens the surface when a `save` future is dropped before it finished.
struct PendingSave<'a, V: Variant> {
    surface: &'a EditSurface<V>,
    armed: bool,
}

impl<V: Variant> Drop for PendingSave<'_, V> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let reopened = self.surface.transition(
            &[SurfaceState::Validating, SurfaceState::Submitting],
            SurfaceState::Open,
        );
        if !reopened {
            return;
        }
        match self.surface.session.try_lock() {
            Ok(mut session) => {
                if let Some(session) = session.as_mut() {
                    session.controller.set_disabled(false);
                }
            }
            Err(_) => log::warn!("{} form left disabled: session is busy", V::KIND),
        }
        log::warn!("Interrupted {} save; surface reopened", V::KIND);
    }
}

/// Converts validated form values into the repository payload.
///
/// The provider must pass the usage filter and the config must convert into
/// the provider's typed shape; the persisted config is the typed value
/// written back, so unknown keys are dropped.
pub(crate) fn build_payload<V: Variant>(
    values: &FormValues,
    usage: Option<UsageFilter>,
) -> CoreResult<RecordPayload> {
    let key = values.provider.as_deref().unwrap_or_default();
    let descriptor = catalog::resolve::<V>(key)?;
    if let Some(usage) = usage
        && !usage.matches(descriptor.capabilities)
    {
        return Err(CoreError::UsageMismatch {
            provider: key.to_string(),
            usage,
        });
    }

    let typed = descriptor.provider.parse_config(&values.config)?;
    let config = canonical_config(&typed)?;

    Ok(RecordPayload {
        name: values.name.trim().to_string(),
        provider: key.to_string(),
        access_id: values.access_id.clone(),
        reserve: values.reserve,
        config,
    })
}

/// The `config` half of a typed `{ provider, config }` value.
fn canonical_config<T: Serialize>(typed: &T) -> CoreResult<ConfigMap> {
    let value =
        serde_json::to_value(typed).map_err(|e| CoreError::SerializationError(e.to_string()))?;
    match value.get("config") {
        Some(serde_json::Value::Object(config)) => Ok(config.clone()),
        _ => Err(CoreError::SerializationError(
            "typed config is not an object".to_string(),
        )),
    }
}
