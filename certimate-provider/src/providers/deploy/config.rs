use serde::{Deserialize, Serialize};

/// Typed deploy configuration, one variant per [`DeployProvider`](super::DeployProvider).
///
/// Serialized as `{ "provider": "<key>", "config": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", content = "config", rename_all = "kebab-case")]
pub enum DeployConfig {
    Local(LocalDeployConfig),
    Ssh(SshDeployConfig),
    AliyunCdn(CdnDomainDeployConfig),
    AliyunOss(AliyunOssDeployConfig),
    AliyunSlb(AliyunSlbDeployConfig),
    TencentcloudCdn(CdnDomainDeployConfig),
    TencentcloudClb(TencentcloudClbDeployConfig),
    HuaweicloudCdn(HuaweicloudCdnDeployConfig),
    HuaweicloudElb(HuaweicloudElbDeployConfig),
    AwsCloudfront(AwsCloudfrontDeployConfig),
    BaiducloudCdn(CdnDomainDeployConfig),
    QiniuCdn(CdnDomainDeployConfig),
    DogecloudCdn(CdnDomainDeployConfig),
    ByteplusCdn(CdnDomainDeployConfig),
    VolcengineCdn(CdnDomainDeployConfig),
    K8sSecret(K8sSecretDeployConfig),
    BaotapanelSite(BaotapanelSiteDeployConfig),
    Webhook(WebhookDeployConfig),
}

/// Output format of a certificate written to a file system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CertificateFormat {
    #[default]
    Pem,
    Pfx,
    Jks,
}

impl CertificateFormat {
    /// File extension conventionally used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pem => ".crt",
            Self::Pfx => ".pfx",
            Self::Jks => ".jks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDeployConfig {
    pub format: CertificateFormat,
    pub cert_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfx_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jks_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jks_keypass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jks_storepass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_command: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshDeployConfig {
    pub format: CertificateFormat,
    pub cert_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfx_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jks_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jks_keypass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jks_storepass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_command: Option<String>,
    #[serde(default, rename = "useSCP")]
    pub use_scp: bool,
}

/// CDN target addressed by its accelerated domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdnDomainDeployConfig {
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliyunOssDeployConfig {
    pub endpoint: String,
    pub bucket: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliyunSlbDeployConfig {
    pub resource_type: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loadbalancer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listener_port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TencentcloudClbDeployConfig {
    pub resource_type: String,
    pub region: String,
    pub loadbalancer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listener_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuaweicloudCdnDeployConfig {
    pub region: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuaweicloudElbDeployConfig {
    pub resource_type: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loadbalancer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listener_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsCloudfrontDeployConfig {
    pub region: String,
    pub distribution_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K8sSecretDeployConfig {
    pub namespace: String,
    pub secret_name: String,
    pub secret_type: String,
    pub secret_data_key_for_crt: String,
    pub secret_data_key_for_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaotapanelSiteDeployConfig {
    pub site_type: String,
    pub site_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDeployConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_data: Option<String>,
}
