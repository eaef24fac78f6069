//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use certimate_provider::{RecordKind, UsageFilter};

// Re-export library error type
pub use certimate_provider::ConfigError;

use crate::types::ValidationResult;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Discriminator not in the catalog
    #[error("Provider not found: {kind}/{provider}")]
    ProviderNotFound { kind: RecordKind, provider: String },

    /// Aggregate validation rejected (parent and nested scope errors merged)
    #[error("Validation failed on {} field(s)", .0.len())]
    ValidationFailed(ValidationResult),

    /// The chosen discriminator is not allowed under the surface's usage filter
    #[error("Provider {provider} is not available for {usage} usage")]
    UsageMismatch { provider: String, usage: UsageFilter },

    /// The config does not convert into the discriminator's typed shape
    #[error("Invalid {kind} config for {provider}: {reason}")]
    ConfigShape {
        kind: RecordKind,
        provider: String,
        reason: String,
    },

    /// Record not found
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Request failed (repository reported a failure with a message)
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Operation not allowed in the current edit surface state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<ConfigError> for CoreError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownProvider { kind, provider } => {
                Self::ProviderNotFound { kind, provider }
            }
            ConfigError::Shape {
                kind,
                provider,
                reason,
            } => Self::ConfigShape {
                kind,
                provider,
                reason,
            },
        }
    }
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationFailed(_) | Self::RecordNotFound(_) | Self::InvalidState(_) => true,
            Self::ProviderNotFound { .. }
            | Self::UsageMismatch { .. }
            | Self::ConfigShape { .. }
            | Self::RequestError(_)
            | Self::SerializationError(_)
            | Self::StorageError(_) => false,
        }
    }

    /// Logs the error at the level chosen by [`is_expected`](Self::is_expected).
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_maps_to_core_error() {
        let err: CoreError = ConfigError::Shape {
            kind: RecordKind::Access,
            provider: "email".to_string(),
            reason: "missing field `smtpHost`".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::ConfigShape { .. }));
        assert!(!err.is_expected());
    }

    #[test]
    fn validation_failure_is_expected() {
        let err = CoreError::ValidationFailed(ValidationResult::default());
        assert!(err.is_expected());
        assert_eq!(err.to_string(), "Validation failed on 0 field(s)");
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CoreError::RequestError("timeout".to_string());
        let json_res = serde_json::to_value(&err);
        assert!(json_res.is_ok(), "serde_json::to_value failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json["code"], "RequestError");
        assert_eq!(json["details"], "timeout");
    }
}
