//! 字段联动规则与校验的端到端测试

mod common;

use certimate_provider::{
    AccessProvider, DeployProvider, FieldErrorKind, NotifyProvider, Variant, catalog,
};
use common::edit;
use serde_json::json;

// ============ 授权 ============

#[test]
fn test_email_tls_toggle_presets_port() {
    let provider = AccessProvider::Email;
    let mut form = provider.schema().defaults();
    assert_eq!(form.get("smtpPort"), Some(&json!(25)));

    edit(provider, &mut form, "smtpTls", json!(true), &[]);
    assert_eq!(form.get("smtpPort"), Some(&json!(465)));

    edit(provider, &mut form, "smtpTls", json!(false), &[]);
    assert_eq!(form.get("smtpPort"), Some(&json!(25)));
}

#[test]
fn test_email_tls_toggle_keeps_edited_port() {
    let provider = AccessProvider::Email;
    let mut form = provider.schema().defaults();
    form.insert("smtpPort".to_string(), json!(2525));

    let changed = edit(provider, &mut form, "smtpTls", json!(true), &["smtpPort"]);
    assert!(changed.is_empty());
    assert_eq!(form.get("smtpPort"), Some(&json!(2525)));
}

#[test]
fn test_email_tls_toggle_keeps_saved_port() {
    let provider = AccessProvider::Email;
    let mut form = provider.schema().defaults();
    form.insert("smtpPort".to_string(), json!(587));

    // nothing edited yet, as right after opening an existing record
    let changed = edit(provider, &mut form, "smtpTls", json!(true), &[]);
    assert!(changed.is_empty());
    assert_eq!(form.get("smtpPort"), Some(&json!(587)));
}

#[test]
fn test_ssh_auth_method_clears_secrets() {
    let provider = AccessProvider::Ssh;
    let mut form = provider.schema().defaults();
    form.insert("password".to_string(), json!("hunter2"));
    form.insert("keyPassphrase".to_string(), json!("pass"));

    edit(provider, &mut form, "authMethod", json!("key"), &["password"]);
    assert!(!form.contains_key("password"));
    assert!(!form.contains_key("keyPassphrase"));

    let errors = provider.schema().validate(&form);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["key"]);
}

#[test]
fn test_ssh_port_rejects_garbage() {
    let schema = AccessProvider::Ssh.schema();
    let mut form = schema.defaults();
    form.insert("password".to_string(), json!("x"));
    form.insert("port".to_string(), json!("22abc"));

    let errors = schema.validate(&form);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, FieldErrorKind::InvalidPort);

    form.insert("port".to_string(), json!("2222"));
    let normalized = schema.normalize(&form);
    assert_eq!(normalized.get("port"), Some(&json!(2222)));
    assert!(schema.validate(&normalized).is_empty());
}

#[test]
fn test_webhook_requires_absolute_url() {
    let schema = AccessProvider::Webhook.schema();
    let mut form = schema.defaults();
    form.insert("url".to_string(), json!("example.com/hook"));
    let errors = schema.validate(&form);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind.message_key(), "common.errmsg.url_invalid");
}

// ============ 部署 ============

#[test]
fn test_local_format_rewrites_cert_extension() {
    let provider = DeployProvider::Local;
    let mut form = provider.schema().defaults();
    assert_eq!(form.get("certPath"), Some(&json!("/etc/ssl/certimate/cert.crt")));

    edit(provider, &mut form, "format", json!("PFX"), &[]);
    assert_eq!(form.get("certPath"), Some(&json!("/etc/ssl/certimate/cert.pfx")));

    form.insert("pfxPassword".to_string(), json!("changeit"));
    edit(provider, &mut form, "format", json!("JKS"), &[]);
    assert_eq!(form.get("certPath"), Some(&json!("/etc/ssl/certimate/cert.jks")));
    assert!(!form.contains_key("pfxPassword"));

    let errors = provider.schema().validate(&form);
    let mut fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    fields.sort_unstable();
    assert_eq!(fields, vec!["jksAlias", "jksKeypass", "jksStorepass"]);
}

#[test]
fn test_slb_resource_type_resets_ids() {
    let provider = DeployProvider::AliyunSlb;
    let mut form = provider.schema().defaults();
    form.insert("region".to_string(), json!("cn-hangzhou"));
    form.insert("loadbalancerId".to_string(), json!("lb-123"));
    form.insert("listenerPort".to_string(), json!(8443));

    edit(provider, &mut form, "resourceType", json!("certificate"), &[]);
    assert!(!form.contains_key("loadbalancerId"));
    assert_eq!(form.get("listenerPort"), Some(&json!(443)));
    assert!(provider.schema().validate(&form).is_empty());
}

#[test]
fn test_deploy_typed_config() {
    let provider = DeployProvider::K8sSecret;
    let mut form = provider.schema().defaults();
    form.insert("secretName".to_string(), json!("site-tls"));
    let config = require_ok!(provider.parse_config(&form));
    let json = require_ok!(serde_json::to_value(&config));
    assert_eq!(json["provider"], "k8s-secret");
    assert_eq!(json["config"]["secretDataKeyForCrt"], "tls.crt");
}

// ============ 通知 ============

#[test]
fn test_notify_catalog_resolves() {
    let descriptor = require_ok!(catalog::resolve::<NotifyProvider>("telegrambot"));
    assert_eq!(descriptor.provider.access_provider(), Some(AccessProvider::TelegramBot));
    assert!(catalog::resolve::<NotifyProvider>("cloudflare").is_err());
}
