use serde::Serialize;
use thiserror::Error;

use crate::types::RecordKind;

/// Why a single field failed its declared rule.
///
/// Each kind maps to a localization key under `common.errmsg.*` plus the
/// parameters interpolated into the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldErrorKind {
    /// A required field is absent or blank.
    Required,
    /// Fewer characters than allowed.
    TooShort {
        /// Minimum character count.
        min: usize,
    },
    /// More characters than allowed.
    TooLong {
        /// Maximum character count.
        max: usize,
    },
    /// Not an absolute http/https URL.
    InvalidUrl,
    /// Not a domain name.
    InvalidDomain,
    /// Neither a domain name nor an IP literal.
    InvalidHost,
    /// Not an email address.
    InvalidEmail,
    /// Not an integer port between 1 and 65535.
    InvalidPort,
    /// Not an integer (numeric strings are accepted, anything else is not).
    NotANumber,
    /// Integer outside the inclusive range.
    OutOfRange {
        /// Minimum value.
        min: i64,
        /// Maximum value.
        max: i64,
    },
    /// Not a boolean.
    NotABoolean,
    /// A text field holding a list or an object.
    NotText,
    /// Value outside the declared enumeration.
    NotAllowed {
        /// Allowed values.
        allowed: Vec<String>,
    },
    /// Chat id is zero or not an integer.
    InvalidChatId,
}

impl FieldErrorKind {
    /// Localization key of the message.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Required => "common.errmsg.required",
            Self::TooShort { .. } => "common.errmsg.string_min",
            Self::TooLong { .. } => "common.errmsg.string_max",
            Self::InvalidUrl => "common.errmsg.url_invalid",
            Self::InvalidDomain => "common.errmsg.domain_invalid",
            Self::InvalidHost => "common.errmsg.host_invalid",
            Self::InvalidEmail => "common.errmsg.email_invalid",
            Self::InvalidPort => "common.errmsg.port_invalid",
            Self::NotANumber => "common.errmsg.number_invalid",
            Self::OutOfRange { .. } => "common.errmsg.number_range",
            Self::NotABoolean => "common.errmsg.boolean_invalid",
            Self::NotText => "common.errmsg.text_invalid",
            Self::NotAllowed { .. } => "common.errmsg.enum_invalid",
            Self::InvalidChatId => "common.errmsg.chat_id_invalid",
        }
    }

    /// Interpolation parameters of the message.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::TooShort { min } => vec![("min", min.to_string())],
            Self::TooLong { max } => vec![("max", max.to_string())],
            Self::OutOfRange { min, max } => {
                vec![("min", min.to_string()), ("max", max.to_string())]
            }
            Self::NotAllowed { allowed } => vec![("allowed", allowed.join(", "))],
            _ => Vec::new(),
        }
    }
}

/// A field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Field key inside the variant configuration.
    pub field: &'static str,
    /// Failure reason.
    #[serde(flatten)]
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: &'static str, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FieldErrorKind::Required => write!(f, "{}: required", self.field),
            FieldErrorKind::TooShort { min } => {
                write!(f, "{}: at least {min} characters", self.field)
            }
            FieldErrorKind::TooLong { max } => {
                write!(f, "{}: at most {max} characters", self.field)
            }
            FieldErrorKind::InvalidUrl => write!(f, "{}: invalid URL", self.field),
            FieldErrorKind::InvalidDomain => write!(f, "{}: invalid domain", self.field),
            FieldErrorKind::InvalidHost => write!(f, "{}: invalid host", self.field),
            FieldErrorKind::InvalidEmail => write!(f, "{}: invalid email", self.field),
            FieldErrorKind::InvalidPort => write!(f, "{}: invalid port", self.field),
            FieldErrorKind::NotANumber => write!(f, "{}: not a number", self.field),
            FieldErrorKind::OutOfRange { min, max } => {
                write!(f, "{}: must be between {min} and {max}", self.field)
            }
            FieldErrorKind::NotABoolean => write!(f, "{}: not a boolean", self.field),
            FieldErrorKind::NotText => write!(f, "{}: not text", self.field),
            FieldErrorKind::NotAllowed { allowed } => {
                write!(f, "{}: must be one of {}", self.field, allowed.join(", "))
            }
            FieldErrorKind::InvalidChatId => write!(f, "{}: invalid chat id", self.field),
        }
    }
}

impl std::error::Error for FieldError {}

/// Errors raised when a discriminator or a configuration blob cannot be
/// interpreted.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "code", rename_all = "camelCase")]
pub enum ConfigError {
    /// The discriminator is not part of the catalog of `kind`.
    #[error("Unknown {kind} provider: {provider}")]
    UnknownProvider {
        /// Record kind that was looked up.
        kind: RecordKind,
        /// Unrecognized discriminator.
        provider: String,
    },

    /// The configuration does not have the shape declared by the discriminator.
    #[error("Invalid {kind} config for {provider}: {reason}")]
    Shape {
        /// Record kind.
        kind: RecordKind,
        /// Discriminator.
        provider: String,
        /// Deserializer message.
        reason: String,
    },
}

/// Type alias for `Result<T, ConfigError>`.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_params() {
        let kind = FieldErrorKind::OutOfRange { min: 1, max: 10 };
        assert_eq!(kind.message_key(), "common.errmsg.number_range");
        assert_eq!(
            kind.params(),
            vec![("min", "1".to_string()), ("max", "10".to_string())]
        );
    }

    #[test]
    fn field_error_serializes_flat() {
        let err = FieldError::new("port", FieldErrorKind::InvalidPort);
        let json_res = serde_json::to_value(&err);
        assert!(json_res.is_ok(), "serde_json::to_value failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json["field"], "port");
        assert_eq!(json["type"], "invalidPort");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::UnknownProvider {
            kind: RecordKind::Deploy,
            provider: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown deploy provider: nope");
    }
}
