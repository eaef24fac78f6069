//! Field validators.
//!
//! Every check is a pure function over a JSON value. Numeric strings are
//! coerced before range checks; anything that does not parse fails instead of
//! silently becoming zero.

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{FieldError, FieldErrorKind};
use crate::types::{ConfigMap, Constraint, FieldSpec, FieldType, Requirement};

static DOMAIN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:\*\.)?(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}$")
        .ok()
});

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Returns `true` for values that count as "not filled in".
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Coerces a JSON value into an integer.
///
/// Accepts integers and strings holding an integer (surrounding whitespace
/// ignored). Floats with a fractional part, booleans and other strings fail.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerces a JSON value into a boolean (`true`/`false` or their string forms).
pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Coerces a scalar JSON value into text. Lists and objects fail.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Returns `true` if `s` is an absolute http/https URL with a host.
pub fn is_url(s: &str) -> bool {
    url::Url::parse(s.trim())
        .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
}

/// Returns `true` if `s` is a domain name (a leading `*.` is allowed).
pub fn is_domain(s: &str) -> bool {
    DOMAIN_RE.as_ref().is_some_and(|re| re.is_match(s.trim()))
}

/// Returns `true` if `s` is an IPv4 or IPv6 literal.
pub fn is_ip(s: &str) -> bool {
    s.trim().parse::<IpAddr>().is_ok()
}

/// Returns `true` if `s` is an email address.
pub fn is_email(s: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(s.trim()))
}

/// Returns `true` if the field's requirement is active for the current values.
pub fn is_required(spec: &FieldSpec, values: &ConfigMap) -> bool {
    match spec.requirement {
        Requirement::Required => true,
        Requirement::Optional => false,
        Requirement::RequiredWhen { field, any_of } => values
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|v| any_of.contains(&v)),
    }
}

/// Checks one field against its spec.
///
/// `values` is the whole variant map; it is consulted for conditional
/// requirements only.
pub fn check_field(spec: &FieldSpec, values: &ConfigMap) -> Option<FieldError> {
    let value = values.get(spec.key);
    let fail = |kind| Some(FieldError::new(spec.key, kind));

    // The chat id rule treats "absent" as valid regardless of requiredness.
    if spec.constraint == Constraint::ChatId {
        return check_chat_id(value).err().and_then(fail);
    }

    if is_blank(value) {
        return if is_required(spec, values) {
            fail(FieldErrorKind::Required)
        } else {
            None
        };
    }
    let Some(value) = value else {
        return None;
    };

    match spec.field_type {
        FieldType::Number => {
            let Some(n) = coerce_int(value) else {
                return if spec.constraint == Constraint::Port {
                    fail(FieldErrorKind::InvalidPort)
                } else {
                    fail(FieldErrorKind::NotANumber)
                };
            };
            check_int(spec.constraint, n).err().and_then(fail)
        }
        FieldType::Switch => {
            if coerce_bool(value).is_some() {
                None
            } else {
                fail(FieldErrorKind::NotABoolean)
            }
        }
        FieldType::Select(options) => match value.as_str() {
            Some(s) if options.contains(&s) => None,
            _ => fail(FieldErrorKind::NotAllowed {
                allowed: options.iter().map(ToString::to_string).collect(),
            }),
        },
        FieldType::Text | FieldType::Password | FieldType::Textarea => {
            let Some(s) = coerce_text(value) else {
                return fail(FieldErrorKind::NotText);
            };
            check_str(spec.constraint, &s).err().and_then(fail)
        }
    }
}

fn check_int(constraint: Constraint, n: i64) -> Result<(), FieldErrorKind> {
    match constraint {
        Constraint::Port if !(1..=65535).contains(&n) => Err(FieldErrorKind::InvalidPort),
        Constraint::Range { min, max } if n < min || n > max => {
            Err(FieldErrorKind::OutOfRange { min, max })
        }
        _ => Ok(()),
    }
}

fn check_str(constraint: Constraint, s: &str) -> Result<(), FieldErrorKind> {
    match constraint {
        Constraint::Length { min, max } => {
            let len = s.chars().count();
            if len < min {
                Err(FieldErrorKind::TooShort { min })
            } else if len > max {
                Err(FieldErrorKind::TooLong { max })
            } else {
                Ok(())
            }
        }
        Constraint::Url if !is_url(s) => Err(FieldErrorKind::InvalidUrl),
        Constraint::Domain if !is_domain(s) => Err(FieldErrorKind::InvalidDomain),
        Constraint::Host if !(is_domain(s) || is_ip(s)) => Err(FieldErrorKind::InvalidHost),
        Constraint::Email if !is_email(s) => Err(FieldErrorKind::InvalidEmail),
        Constraint::Port => match s.trim().parse::<i64>() {
            Ok(n) => check_int(Constraint::Port, n),
            Err(_) => Err(FieldErrorKind::InvalidPort),
        },
        _ => Ok(()),
    }
}

/// Three-way chat id rule: absent → valid, zero → invalid, other integer → valid.
fn check_chat_id(value: Option<&Value>) -> Result<(), FieldErrorKind> {
    if is_blank(value) {
        return Ok(());
    }
    match value.and_then(coerce_int) {
        Some(0) | None => Err(FieldErrorKind::InvalidChatId),
        Some(_) => Ok(()),
    }
}

/// Applies the coercions that succeed, leaving unparsable input untouched so
/// that validation can report it.
///
/// - Number fields: integer strings become numbers, blank values are removed.
/// - Switch fields: `"true"`/`"false"` become booleans, blank values are removed.
/// - Text fields: numbers and booleans become strings, `null` is removed.
pub fn normalize(fields: &[FieldSpec], values: &ConfigMap) -> ConfigMap {
    let mut out = values.clone();
    for spec in fields {
        let Some(value) = values.get(spec.key) else {
            continue;
        };
        match spec.field_type {
            FieldType::Number => {
                if is_blank(Some(value)) {
                    out.remove(spec.key);
                } else if let Some(n) = coerce_int(value) {
                    out.insert(spec.key.to_string(), Value::from(n));
                }
            }
            FieldType::Switch => {
                if is_blank(Some(value)) {
                    out.remove(spec.key);
                } else if let Some(b) = coerce_bool(value) {
                    out.insert(spec.key.to_string(), Value::Bool(b));
                }
            }
            FieldType::Text | FieldType::Password | FieldType::Textarea => match value {
                Value::Null => {
                    out.remove(spec.key);
                }
                Value::Number(_) | Value::Bool(_) => {
                    if let Some(s) = coerce_text(value) {
                        out.insert(spec.key.to_string(), Value::String(s));
                    }
                }
                _ => {}
            },
            FieldType::Select(_) => {}
        }
    }
    out
}
