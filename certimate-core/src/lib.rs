//! Certimate Core Library
//!
//! Provider-polymorphic configuration form engine shared by the access,
//! deploy and notify record editors:
//! - Variant sub-forms driven by the static provider catalog
//! - Composite form controller (parent scope + one nested scope)
//! - Edit surface with save orchestration
//!
//! Storage, localization and user notification are abstracted through
//! traits, so the same engine runs behind any host shell.

pub mod error;
pub mod form;
pub mod i18n;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use form::{CompositeFormController, Dispatcher, FormInit, ProviderOption, VariantForm};
pub use i18n::{BuiltinLocalizer, Language};
pub use services::{
    CatalogService, DismissReason, EditSurface, RecordService, ServiceContext, SurfaceProps,
    SurfaceState,
};
pub use traits::{Localizer, Notice, NoticeLevel, Notifier, RecordRepository};

// Re-export the provider catalog
pub use certimate_provider;
