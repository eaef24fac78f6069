//! # certimate-provider
//!
//! Provider catalog of the certimate console: the access, deploy and notify
//! variants, their field schemas and the validators driven by those schemas.
//!
//! Every record kind has a discriminator enum implementing [`Variant`]. The
//! discriminator maps (through a plain `match`) to a [`VariantDescriptor`]
//! carrying the display label key, icon, capability tags and the
//! [`VariantSchema`] of its configuration. The schema is data: a `const`
//! table of [`FieldSpec`]s plus declared cross-field [`FieldRule`]s, checked
//! by a single generic validator.
//!
//! ## Feature Flags
//!
//! - **`all-kinds`** *(default)*: enable the deploy and notify catalogs.
//! - **`deploy`**: enable [`DeployProvider`].
//! - **`notify`**: enable [`NotifyProvider`].
//!
//! The access catalog is always available.
//!
//! ## Usage
//!
//! ```rust
//! use certimate_provider::{catalog, AccessProvider, UsageFilter, Variant};
//!
//! // Pick a variant the way a picker would.
//! let dns = catalog::list_available::<AccessProvider>(Some(UsageFilter::Dns));
//! assert!(dns.iter().any(|d| d.provider == AccessProvider::Cloudflare));
//!
//! // Validate its configuration.
//! let schema = AccessProvider::Ssh.schema();
//! let mut values = schema.defaults();
//! values.insert("port".into(), "abc".into());
//! let errors = schema.validate(&values);
//! assert!(errors.iter().any(|e| e.field == "port"));
//! ```
//!
//! ## Error Handling
//!
//! Field-level failures are reported as [`FieldError`]s whose
//! [`FieldErrorKind::message_key`] points into the `common.errmsg.*`
//! localization namespace. Discriminator and shape failures surface as
//! [`ConfigError`].

pub mod catalog;
mod error;
mod providers;
mod rules;
mod schema;
mod traits;
mod types;
pub mod validate;

// Re-export error types
pub use error::{ConfigError, FieldError, FieldErrorKind, Result};

pub use rules::{FieldRule, replace_extension};
pub use schema::{RESERVED_FIELDS, VariantSchema};
pub use traits::Variant;

pub use types::{
    Capability, ConfigMap, Constraint, FieldDefault, FieldSpec, FieldType, RecordKind,
    Requirement, Reserve, UsageFilter, VariantDescriptor,
};

// Re-export catalogs
pub use providers::access;
pub use providers::{AccessConfig, AccessProvider};

#[cfg(feature = "deploy")]
pub use providers::deploy;
#[cfg(feature = "deploy")]
pub use providers::{DeployConfig, DeployProvider};

#[cfg(feature = "notify")]
pub use providers::notify;
#[cfg(feature = "notify")]
pub use providers::{NotifyConfig, NotifyProvider};
