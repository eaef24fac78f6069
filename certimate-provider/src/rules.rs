//! Declared cross-field rules.
//!
//! A rule is triggered by an edit of one field and may rewrite siblings.
//! Rules never mark the fields they touch as user-edited.

use serde_json::Value;

use crate::types::{ConfigMap, FieldDefault, FieldSpec};
use crate::validate::{coerce_bool, coerce_int, is_blank};

/// A side effect attached to a trigger field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// When the boolean `trigger` changes, preset `target` to `on` or `off`.
    ///
    /// `target` is only rewritten while it is blank or still holds the preset
    /// paired with the previous toggle state, and the user has not edited it.
    PresetOnToggle {
        trigger: &'static str,
        target: &'static str,
        on: FieldDefault,
        off: FieldDefault,
    },
    /// When `trigger` changes value, reset every target to its declared
    /// default, or remove it when it has none.
    ResetOnChange {
        trigger: &'static str,
        targets: &'static [&'static str],
    },
    /// When the format select `trigger` changes, replace the file extension of
    /// the path held by `target` with the one mapped to the new format.
    ExtensionFollows {
        trigger: &'static str,
        target: &'static str,
        extensions: &'static [(&'static str, &'static str)],
    },
}

impl FieldRule {
    /// Field whose edit fires this rule.
    pub fn trigger(&self) -> &'static str {
        match self {
            Self::PresetOnToggle { trigger, .. }
            | Self::ResetOnChange { trigger, .. }
            | Self::ExtensionFollows { trigger, .. } => trigger,
        }
    }

    /// Applies the rule after `trigger` moved from `old` to the value now in
    /// `values`.
    ///
    /// `fields` is the variant schema (for defaults) and `is_user_edited`
    /// reports whether the user has edited a field since mount. Returns the
    /// keys the rule rewrote.
    pub fn apply(
        &self,
        old: Option<&Value>,
        values: &mut ConfigMap,
        fields: &[FieldSpec],
        is_user_edited: impl Fn(&str) -> bool,
    ) -> Vec<&'static str> {
        let new = values.get(self.trigger()).cloned();
        if old == new.as_ref() {
            return Vec::new();
        }

        match *self {
            Self::PresetOnToggle {
                target, on, off, ..
            } => {
                if is_user_edited(target) {
                    return Vec::new();
                }
                let Some(flag) = new.as_ref().and_then(coerce_bool) else {
                    return Vec::new();
                };
                let (preset, previous) = if flag { (on, off) } else { (off, on) };
                let current = values.get(target);
                if !(is_blank(current) || current.is_some_and(|v| holds(v, previous))) {
                    return Vec::new();
                }
                match preset.to_value() {
                    Some(v) => {
                        values.insert(target.to_string(), v);
                    }
                    None => {
                        values.remove(target);
                    }
                }
                vec![target]
            }
            Self::ResetOnChange { targets, .. } => {
                for target in targets {
                    let default = fields
                        .iter()
                        .find(|f| f.key == *target)
                        .and_then(|f| f.default.to_value());
                    match default {
                        Some(v) => {
                            values.insert((*target).to_string(), v);
                        }
                        None => {
                            values.remove(*target);
                        }
                    }
                }
                targets.to_vec()
            }
            Self::ExtensionFollows {
                target, extensions, ..
            } => {
                let Some(format) = new.as_ref().and_then(Value::as_str) else {
                    return Vec::new();
                };
                let Some((_, ext)) = extensions.iter().find(|(f, _)| *f == format) else {
                    return Vec::new();
                };
                let Some(path) = values.get(target).and_then(Value::as_str) else {
                    return Vec::new();
                };
                if path.trim().is_empty() {
                    return Vec::new();
                }
                let replaced = replace_extension(path, ext);
                values.insert(target.to_string(), Value::String(replaced));
                vec![target]
            }
        }
    }
}

/// Returns `true` if `value` equals the declared preset, numeric strings
/// included.
fn holds(value: &Value, preset: FieldDefault) -> bool {
    match preset {
        FieldDefault::None => false,
        FieldDefault::Int(n) => coerce_int(value) == Some(n),
        FieldDefault::Bool(b) => coerce_bool(value) == Some(b),
        FieldDefault::Str(s) => value.as_str() == Some(s),
    }
}

/// Replaces the extension of the last path segment, or appends one.
///
/// `ext` includes the leading dot. Both `/` and `\` separate segments.
pub fn replace_extension(path: &str, ext: &str) -> String {
    let segment_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let segment = &path[segment_start..];
    match segment.rfind('.') {
        // a leading dot marks a hidden file, not an extension
        Some(dot) if dot > 0 => format!("{}{}", &path[..segment_start + dot], ext),
        _ => format!("{path}{ext}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> ConfigMap {
        match value {
            Value::Object(m) => m,
            _ => ConfigMap::new(),
        }
    }

    const TLS_PORT: FieldRule = FieldRule::PresetOnToggle {
        trigger: "smtpTls",
        target: "smtpPort",
        on: FieldDefault::Int(465),
        off: FieldDefault::Int(25),
    };

    #[test]
    fn toggle_presets_untouched_sibling() {
        let mut values = map(json!({ "smtpTls": true, "smtpPort": 25 }));
        let changed = TLS_PORT.apply(Some(&json!(false)), &mut values, &[], |_| false);
        assert_eq!(changed, vec!["smtpPort"]);
        assert_eq!(values.get("smtpPort"), Some(&json!(465)));
    }

    #[test]
    fn toggle_keeps_user_edited_sibling() {
        let mut values = map(json!({ "smtpTls": true, "smtpPort": 2525 }));
        let changed = TLS_PORT.apply(Some(&json!(false)), &mut values, &[], |k| k == "smtpPort");
        assert!(changed.is_empty());
        assert_eq!(values.get("smtpPort"), Some(&json!(2525)));
    }

    #[test]
    fn toggle_keeps_custom_value_from_mount() {
        // an existing record: nothing touched yet, but the port is not a preset
        let mut values = map(json!({ "smtpTls": true, "smtpPort": 2525 }));
        let changed = TLS_PORT.apply(Some(&json!(false)), &mut values, &[], |_| false);
        assert!(changed.is_empty());
        assert_eq!(values.get("smtpPort"), Some(&json!(2525)));

        let mut values = map(json!({ "smtpTls": false, "smtpPort": "2525" }));
        let changed = TLS_PORT.apply(Some(&json!(true)), &mut values, &[], |_| false);
        assert!(changed.is_empty());
        assert_eq!(values.get("smtpPort"), Some(&json!("2525")));
    }

    #[test]
    fn toggle_fills_blank_and_follows_previous_preset() {
        let mut values = map(json!({ "smtpTls": true }));
        TLS_PORT.apply(Some(&json!(false)), &mut values, &[], |_| false);
        assert_eq!(values.get("smtpPort"), Some(&json!(465)));

        let mut values = map(json!({ "smtpTls": true, "smtpPort": "" }));
        TLS_PORT.apply(Some(&json!(false)), &mut values, &[], |_| false);
        assert_eq!(values.get("smtpPort"), Some(&json!(465)));

        // switching off only undoes the "on" preset
        let mut values = map(json!({ "smtpTls": false, "smtpPort": "465" }));
        TLS_PORT.apply(Some(&json!(true)), &mut values, &[], |_| false);
        assert_eq!(values.get("smtpPort"), Some(&json!(25)));

        let mut values = map(json!({ "smtpTls": false, "smtpPort": 25 }));
        let changed = TLS_PORT.apply(Some(&json!(true)), &mut values, &[], |_| false);
        assert!(changed.is_empty());
    }

    #[test]
    fn unchanged_trigger_is_noop() {
        let mut values = map(json!({ "smtpTls": true, "smtpPort": 25 }));
        let changed = TLS_PORT.apply(Some(&json!(true)), &mut values, &[], |_| false);
        assert!(changed.is_empty());
        assert_eq!(values.get("smtpPort"), Some(&json!(25)));
    }

    #[test]
    fn reset_on_change_restores_defaults_or_clears() {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::select("authMethod", "Auth method", &["none", "password", "key"]),
            FieldSpec::password("password", "Password"),
            FieldSpec::text("username", "Username").default_str("root"),
        ];
        const RULE: FieldRule = FieldRule::ResetOnChange {
            trigger: "authMethod",
            targets: &["password", "username"],
        };
        let mut values = map(json!({ "authMethod": "key", "password": "secret", "username": "deploy" }));
        let changed = RULE.apply(Some(&json!("password")), &mut values, FIELDS, |_| true);
        assert_eq!(changed, vec!["password", "username"]);
        assert!(!values.contains_key("password"));
        assert_eq!(values.get("username"), Some(&json!("root")));
    }

    #[test]
    fn extension_follows_format() {
        const RULE: FieldRule = FieldRule::ExtensionFollows {
            trigger: "format",
            target: "certPath",
            extensions: &[("PEM", ".crt"), ("PFX", ".pfx"), ("JKS", ".jks")],
        };
        let mut values = map(json!({ "format": "PFX", "certPath": "/etc/ssl/site.crt" }));
        RULE.apply(Some(&json!("PEM")), &mut values, &[], |_| true);
        assert_eq!(values.get("certPath"), Some(&json!("/etc/ssl/site.pfx")));

        let mut values = map(json!({ "format": "JKS", "certPath": "" }));
        let changed = RULE.apply(Some(&json!("PEM")), &mut values, &[], |_| true);
        assert!(changed.is_empty());
    }

    #[test]
    fn replace_extension_cases() {
        assert_eq!(replace_extension("/a/b/cert.crt", ".pfx"), "/a/b/cert.pfx");
        assert_eq!(replace_extension("/a/b.d/cert", ".pfx"), "/a/b.d/cert.pfx");
        assert_eq!(replace_extension("C:\\certs\\site.pem", ".jks"), "C:\\certs\\site.jks");
        assert_eq!(replace_extension("/a/.hidden", ".crt"), "/a/.hidden.crt");
        assert_eq!(replace_extension("cert.tar.gz", ".pfx"), "cert.tar.pfx");
    }
}
