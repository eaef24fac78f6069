//! Field tables of the deploy variants.

use crate::rules::FieldRule;
use crate::schema::VariantSchema;
use crate::types::{Constraint, FieldSpec};

const FORMATS: &[&str] = &["PEM", "PFX", "JKS"];

const FORMAT_RULES: &[FieldRule] = &[
    FieldRule::ExtensionFollows {
        trigger: "format",
        target: "certPath",
        extensions: &[("PEM", ".crt"), ("PFX", ".pfx"), ("JKS", ".jks")],
    },
    FieldRule::ResetOnChange {
        trigger: "format",
        targets: &["pfxPassword", "jksAlias", "jksKeypass", "jksStorepass"],
    },
];

pub(super) const LOCAL: VariantSchema = VariantSchema::new(&[
    FieldSpec::select("format", "Certificate format", FORMATS)
        .required()
        .default_str("PEM"),
    FieldSpec::text("certPath", "Certificate path")
        .required()
        .default_str("/etc/ssl/certimate/cert.crt"),
    FieldSpec::text("keyPath", "Private key path")
        .required_when("format", &["PEM"])
        .default_str("/etc/ssl/certimate/cert.key"),
    FieldSpec::password("pfxPassword", "PFX password").required_when("format", &["PFX"]),
    FieldSpec::text("jksAlias", "JKS alias").required_when("format", &["JKS"]),
    FieldSpec::password("jksKeypass", "JKS key password").required_when("format", &["JKS"]),
    FieldSpec::password("jksStorepass", "JKS store password").required_when("format", &["JKS"]),
    FieldSpec::select("shellEnv", "Shell", &["sh", "cmd", "powershell"]).default_str("sh"),
    FieldSpec::textarea("preCommand", "Pre-deploy command"),
    FieldSpec::textarea("postCommand", "Post-deploy command"),
])
.with_rules(FORMAT_RULES);

pub(super) const SSH: VariantSchema = VariantSchema::new(&[
    FieldSpec::select("format", "Certificate format", FORMATS)
        .required()
        .default_str("PEM"),
    FieldSpec::text("certPath", "Certificate path")
        .required()
        .default_str("/etc/ssl/certimate/cert.crt"),
    FieldSpec::text("keyPath", "Private key path")
        .required_when("format", &["PEM"])
        .default_str("/etc/ssl/certimate/cert.key"),
    FieldSpec::password("pfxPassword", "PFX password").required_when("format", &["PFX"]),
    FieldSpec::text("jksAlias", "JKS alias").required_when("format", &["JKS"]),
    FieldSpec::password("jksKeypass", "JKS key password").required_when("format", &["JKS"]),
    FieldSpec::password("jksStorepass", "JKS store password").required_when("format", &["JKS"]),
    FieldSpec::textarea("preCommand", "Pre-deploy command"),
    FieldSpec::textarea("postCommand", "Post-deploy command"),
    FieldSpec::switch("useSCP", "Upload with SCP"),
])
.with_rules(FORMAT_RULES);

/// CDN services addressed by an accelerated domain only.
pub(super) const CDN_DOMAIN: VariantSchema = VariantSchema::new(&[FieldSpec::text(
    "domain",
    "Accelerated domain",
)
.required()
.constraint(Constraint::Domain)]);

pub(super) const ALIYUN_OSS: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("endpoint", "Endpoint")
        .required()
        .placeholder("oss-cn-hangzhou.aliyuncs.com"),
    FieldSpec::text("bucket", "Bucket").required(),
    FieldSpec::text("domain", "Custom domain")
        .required()
        .constraint(Constraint::Domain),
]);

pub(super) const ALIYUN_SLB: VariantSchema = VariantSchema::new(&[
    FieldSpec::select(
        "resourceType",
        "Resource type",
        &["certificate", "loadbalancer", "listener"],
    )
    .required()
    .default_str("loadbalancer"),
    FieldSpec::text("region", "Region").required(),
    FieldSpec::text("loadbalancerId", "Load balancer ID")
        .required_when("resourceType", &["loadbalancer", "listener"]),
    FieldSpec::number("listenerPort", "Listener port")
        .required_when("resourceType", &["listener"])
        .constraint(Constraint::Port)
        .default_int(443),
])
.with_rules(&[FieldRule::ResetOnChange {
    trigger: "resourceType",
    targets: &["loadbalancerId", "listenerPort"],
}]);

pub(super) const TENCENTCLOUD_CLB: VariantSchema = VariantSchema::new(&[
    FieldSpec::select(
        "resourceType",
        "Resource type",
        &["loadbalancer", "listener", "ruledomain"],
    )
    .required()
    .default_str("listener"),
    FieldSpec::text("region", "Region").required(),
    FieldSpec::text("loadbalancerId", "Load balancer ID").required(),
    FieldSpec::text("listenerId", "Listener ID")
        .required_when("resourceType", &["listener", "ruledomain"]),
    FieldSpec::text("domain", "Rule domain")
        .required_when("resourceType", &["ruledomain"])
        .constraint(Constraint::Domain),
])
.with_rules(&[FieldRule::ResetOnChange {
    trigger: "resourceType",
    targets: &["listenerId", "domain"],
}]);

pub(super) const HUAWEICLOUD_CDN: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("region", "Region")
        .required()
        .default_str("cn-north-1"),
    FieldSpec::text("domain", "Accelerated domain")
        .required()
        .constraint(Constraint::Domain),
]);

pub(super) const HUAWEICLOUD_ELB: VariantSchema = VariantSchema::new(&[
    FieldSpec::select(
        "resourceType",
        "Resource type",
        &["certificate", "loadbalancer", "listener"],
    )
    .required()
    .default_str("certificate"),
    FieldSpec::text("region", "Region")
        .required()
        .default_str("cn-north-1"),
    FieldSpec::text("certificateId", "Certificate ID")
        .required_when("resourceType", &["certificate"]),
    FieldSpec::text("loadbalancerId", "Load balancer ID")
        .required_when("resourceType", &["loadbalancer"]),
    FieldSpec::text("listenerId", "Listener ID").required_when("resourceType", &["listener"]),
])
.with_rules(&[FieldRule::ResetOnChange {
    trigger: "resourceType",
    targets: &["certificateId", "loadbalancerId", "listenerId"],
}]);

pub(super) const AWS_CLOUDFRONT: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("region", "Region")
        .required()
        .default_str("us-east-1"),
    FieldSpec::text("distributionId", "Distribution ID").required(),
]);

pub(super) const K8S_SECRET: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("namespace", "Namespace")
        .required()
        .default_str("default"),
    FieldSpec::text("secretName", "Secret name").required(),
    FieldSpec::text("secretType", "Secret type")
        .required()
        .default_str("kubernetes.io/tls"),
    FieldSpec::text("secretDataKeyForCrt", "Data key for certificate")
        .required()
        .default_str("tls.crt"),
    FieldSpec::text("secretDataKeyForKey", "Data key for private key")
        .required()
        .default_str("tls.key"),
]);

pub(super) const BAOTAPANEL_SITE: VariantSchema = VariantSchema::new(&[
    FieldSpec::select("siteType", "Site type", &["php", "other"])
        .required()
        .default_str("other"),
    FieldSpec::text("siteName", "Site name").required(),
]);

pub(super) const WEBHOOK: VariantSchema = VariantSchema::new(&[FieldSpec::textarea(
    "webhookData",
    "Webhook data",
)
.placeholder("{ \"certificate\": \"${CERTIFICATE}\" }")]);
