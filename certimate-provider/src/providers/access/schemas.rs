//! Field tables of the access variants.

use crate::rules::FieldRule;
use crate::schema::VariantSchema;
use crate::types::{Constraint, FieldDefault, FieldSpec};

// ============ Shared shapes ============

pub(super) const ACCESS_KEY_PAIR: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("accessKeyId", "AccessKey ID").required(),
    FieldSpec::password("secretAccessKey", "Secret AccessKey").required(),
]);

pub(super) const KEY_PAIR: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("accessKey", "AccessKey").required(),
    FieldSpec::password("secretKey", "SecretKey").required(),
]);

pub(super) const TOKEN: VariantSchema =
    VariantSchema::new(&[FieldSpec::password("apiToken", "API token").required()]);

pub(super) const EAB: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("eabKid", "EAB KID").required(),
    FieldSpec::password("eabHmacKey", "EAB HMAC key").required(),
]);

pub(super) const WEBHOOK_BOT: VariantSchema = VariantSchema::new(&[FieldSpec::text(
    "webhookUrl",
    "Webhook URL",
)
.required()
.constraint(Constraint::Url)]);

pub(super) const WEBHOOK_BOT_SIGNED: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("webhookUrl", "Webhook URL")
        .required()
        .constraint(Constraint::Url),
    FieldSpec::password("secret", "Signing secret"),
]);

pub(super) const BOT_CHANNEL: VariantSchema = VariantSchema::new(&[
    FieldSpec::password("botToken", "Bot token").required(),
    FieldSpec::text("channelId", "Default channel ID"),
]);

// ============ DNS & cloud ============

pub(super) const ACMEHTTPREQ: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("endpoint", "Endpoint")
        .required()
        .constraint(Constraint::Url)
        .placeholder("https://example.com/api/"),
    FieldSpec::select("mode", "Mode", &["", "RAW"]).default_str(""),
    FieldSpec::text("username", "Username"),
    FieldSpec::password("password", "Password"),
]);

pub(super) const ALIYUN: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("accessKeyId", "AccessKey ID").required(),
    FieldSpec::password("accessKeySecret", "AccessKey secret").required(),
    FieldSpec::text("resourceGroupId", "Resource group ID"),
]);

pub(super) const AWS: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("accessKeyId", "Access key ID").required(),
    FieldSpec::password("secretAccessKey", "Secret access key").required(),
]);

pub(super) const AZURE: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("tenantId", "Tenant ID").required(),
    FieldSpec::text("clientId", "Client ID").required(),
    FieldSpec::password("clientSecret", "Client secret").required(),
    FieldSpec::select(
        "cloudName",
        "Cloud",
        &["public", "azureusgovernment", "azurechina"],
    )
    .default_str("public"),
]);

pub(super) const BAIDUCLOUD: VariantSchema = ACCESS_KEY_PAIR;

pub(super) const BAOTAPANEL: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("serverUrl", "Server URL")
        .required()
        .constraint(Constraint::Url)
        .placeholder("http://127.0.0.1:8888/"),
    FieldSpec::password("apiKey", "API key").required(),
    FieldSpec::switch("allowInsecureConnections", "Allow insecure connections"),
]);

pub(super) const CLOUDFLARE: VariantSchema = VariantSchema::new(&[
    FieldSpec::password("dnsApiToken", "DNS API token").required(),
    FieldSpec::password("zoneApiToken", "Zone API token"),
]);

pub(super) const CLOUDNS: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("authId", "Auth ID").required(),
    FieldSpec::password("authPassword", "Auth password").required(),
]);

pub(super) const DNSLA: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("apiId", "API ID").required(),
    FieldSpec::password("apiSecret", "API secret").required(),
]);

pub(super) const GODADDY: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("apiKey", "API key").required(),
    FieldSpec::password("apiSecret", "API secret").required(),
]);

pub(super) const HUAWEICLOUD: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("accessKeyId", "AccessKey ID").required(),
    FieldSpec::password("secretAccessKey", "Secret AccessKey").required(),
    FieldSpec::text("enterpriseProjectId", "Enterprise project ID"),
]);

pub(super) const K8S: VariantSchema = VariantSchema::new(&[FieldSpec::textarea(
    "kubeConfig",
    "KubeConfig",
)
.placeholder("Leave empty to use the in-cluster configuration")]);

pub(super) const NAMECHEAP: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("username", "Username").required(),
    FieldSpec::password("apiKey", "API key").required(),
]);

pub(super) const NETCUP: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("customerNumber", "Customer number").required(),
    FieldSpec::password("apiKey", "API key").required(),
    FieldSpec::password("apiPassword", "API password").required(),
]);

pub(super) const POWERDNS: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("serverUrl", "Server URL")
        .required()
        .constraint(Constraint::Url),
    FieldSpec::password("apiKey", "API key").required(),
]);

pub(super) const SSH: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("host", "Host")
        .required()
        .constraint(Constraint::Host)
        .default_str("127.0.0.1"),
    FieldSpec::number("port", "Port")
        .required()
        .constraint(Constraint::Port)
        .default_int(22),
    FieldSpec::select("authMethod", "Authentication", &["none", "password", "key"])
        .required()
        .default_str("password"),
    FieldSpec::text("username", "Username")
        .required()
        .default_str("root"),
    FieldSpec::password("password", "Password").required_when("authMethod", &["password"]),
    FieldSpec::textarea("key", "Private key").required_when("authMethod", &["key"]),
    FieldSpec::password("keyPassphrase", "Key passphrase"),
])
.with_rules(&[FieldRule::ResetOnChange {
    trigger: "authMethod",
    targets: &["password", "key", "keyPassphrase"],
}]);

pub(super) const TENCENTCLOUD: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("secretId", "SecretId").required(),
    FieldSpec::password("secretKey", "SecretKey").required(),
]);

// ============ Webhook & notification ============

pub(super) const WEBHOOK: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("url", "Webhook URL")
        .required()
        .constraint(Constraint::Url),
    FieldSpec::select("method", "HTTP method", &["GET", "POST", "PUT", "PATCH", "DELETE"])
        .required()
        .default_str("POST"),
    FieldSpec::textarea("headers", "Headers").placeholder("Content-Type: application/json"),
    FieldSpec::switch("allowInsecureConnections", "Allow insecure connections"),
]);

pub(super) const EMAIL: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("smtpHost", "SMTP host")
        .required()
        .constraint(Constraint::Host),
    FieldSpec::number("smtpPort", "SMTP port")
        .required()
        .constraint(Constraint::Port)
        .default_int(25),
    FieldSpec::switch("smtpTls", "Use TLS"),
    FieldSpec::text("username", "Username").required(),
    FieldSpec::password("password", "Password").required(),
    FieldSpec::text("senderAddress", "Sender address")
        .required()
        .constraint(Constraint::Email),
    FieldSpec::text("receiverAddress", "Default receiver address").constraint(Constraint::Email),
])
.with_rules(&[FieldRule::PresetOnToggle {
    trigger: "smtpTls",
    target: "smtpPort",
    on: FieldDefault::Int(465),
    off: FieldDefault::Int(25),
}]);

pub(super) const TELEGRAMBOT: VariantSchema = VariantSchema::new(&[
    FieldSpec::password("botToken", "Bot token").required(),
    FieldSpec::number("chatId", "Default chat ID").constraint(Constraint::ChatId),
]);

pub(super) const MATTERMOST: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("serverUrl", "Server URL")
        .required()
        .constraint(Constraint::Url),
    FieldSpec::text("username", "Username").required(),
    FieldSpec::password("password", "Password").required(),
    FieldSpec::text("channelId", "Default channel ID"),
]);

pub(super) const GOTIFY: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("url", "Server URL")
        .required()
        .constraint(Constraint::Url),
    FieldSpec::password("token", "Application token").required(),
    FieldSpec::number("priority", "Default priority").constraint(Constraint::Range { min: 0, max: 10 }),
]);

// ============ Certificate authorities ============

pub(super) const ACMECA: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("endpoint", "Directory URL")
        .required()
        .constraint(Constraint::Url)
        .placeholder("https://acme.example.com/directory"),
    FieldSpec::text("eabKid", "EAB KID"),
    FieldSpec::password("eabHmacKey", "EAB HMAC key"),
]);
