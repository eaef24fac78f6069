//! Platform-agnostic application bootstrap for Certimate record editors.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter
//! injection), `AppConfig` and the storage adapters a host shell picks from.

pub mod adapters;
mod config;

use std::sync::Arc;

use certimate_core::certimate_provider::AccessProvider;
#[cfg(feature = "all-kinds")]
use certimate_core::certimate_provider::{DeployProvider, NotifyProvider};
use certimate_core::error::{CoreError, CoreResult};
use certimate_core::i18n::BuiltinLocalizer;
use certimate_core::services::{CatalogService, EditSurface, RecordService, ServiceContext};
use certimate_core::traits::{Localizer, Notifier, RecordRepository};

pub use config::AppConfig;

use adapters::LogNotifier;

/// Platform-agnostic application state.
///
/// Holds the `ServiceContext` and the stateless services. Edit surfaces are
/// created per dialog via the `*_surface` constructors.
pub struct AppState {
    /// Service context (holds the injected adapters)
    pub ctx: Arc<ServiceContext>,
    /// Configuration the state was built with
    pub config: AppConfig,
    /// Provider catalog service
    pub catalog_service: CatalogService,
    /// Record listing service
    pub record_service: RecordService,
}

impl AppState {
    /// New edit surface for access records.
    pub fn access_surface(&self) -> EditSurface<AccessProvider> {
        EditSurface::new(Arc::clone(&self.ctx))
    }

    /// New edit surface for deploy records.
    #[cfg(feature = "all-kinds")]
    pub fn deploy_surface(&self) -> EditSurface<DeployProvider> {
        EditSurface::new(Arc::clone(&self.ctx))
    }

    /// New edit surface for notify records.
    #[cfg(feature = "all-kinds")]
    pub fn notify_surface(&self) -> EditSurface<NotifyProvider> {
        EditSurface::new(Arc::clone(&self.ctx))
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `repository` — where records are persisted
///
/// # Optional
/// - `config` — defaults to `AppConfig::default()`
/// - `localizer` — defaults to `BuiltinLocalizer` in the configured language
/// - `notifier` — defaults to `LogNotifier`
pub struct AppStateBuilder {
    config: Option<AppConfig>,
    repository: Option<Arc<dyn RecordRepository>>,
    localizer: Option<Arc<dyn Localizer>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            repository: None,
            localizer: None,
            notifier: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn repository(mut self, repo: Arc<dyn RecordRepository>) -> Self {
        self.repository = Some(repo);
        self
    }

    #[must_use]
    pub fn localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidState` if the repository is missing.
    pub fn build(self) -> CoreResult<AppState> {
        let repository = self
            .repository
            .ok_or_else(|| CoreError::InvalidState("repository is required".to_string()))?;
        let config = self.config.unwrap_or_default();
        let localizer = self
            .localizer
            .unwrap_or_else(|| Arc::new(BuiltinLocalizer::new(config.language)));
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(LogNotifier));

        let ctx = Arc::new(ServiceContext::new(repository, localizer, notifier));
        log::debug!("AppState built (language: {})", config.language.code());

        Ok(AppState {
            catalog_service: CatalogService::new(Arc::clone(&ctx)),
            record_service: RecordService::new(Arc::clone(&ctx)),
            ctx,
            config,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
