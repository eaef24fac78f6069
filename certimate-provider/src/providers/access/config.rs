use serde::{Deserialize, Serialize};

/// Configuration of a variant that takes no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoConfig {}

/// Typed access configuration, one variant per [`AccessProvider`](super::AccessProvider).
///
/// Serialized as `{ "provider": "<key>", "config": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", content = "config", rename_all = "lowercase")]
pub enum AccessConfig {
    AcmeHttpReq(AcmeHttpReqAccessConfig),
    Aliyun(AliyunAccessConfig),
    Aws(AccessKeyPairAccessConfig),
    Azure(AzureAccessConfig),
    BaiduCloud(AccessKeyPairAccessConfig),
    BaotaPanel(BaotaPanelAccessConfig),
    BytePlus(KeyPairAccessConfig),
    Cloudflare(CloudflareAccessConfig),
    ClouDns(ClouDnsAccessConfig),
    Desec(TokenAccessConfig),
    DnsLa(DnsLaAccessConfig),
    DogeCloud(KeyPairAccessConfig),
    Dynv6(TokenAccessConfig),
    Gcore(TokenAccessConfig),
    GoDaddy(GoDaddyAccessConfig),
    HuaweiCloud(HuaweiCloudAccessConfig),
    K8s(K8sAccessConfig),
    Local(NoConfig),
    Namecheap(NamecheapAccessConfig),
    NameSilo(TokenAccessConfig),
    Netcup(NetcupAccessConfig),
    PowerDns(PowerDnsAccessConfig),
    Qiniu(KeyPairAccessConfig),
    Ssh(SshAccessConfig),
    TencentCloud(TencentCloudAccessConfig),
    Volcengine(AccessKeyPairAccessConfig),
    Webhook(WebhookAccessConfig),
    Email(EmailAccessConfig),
    TelegramBot(TelegramBotAccessConfig),
    DingTalkBot(WebhookBotAccessConfig),
    LarkBot(WebhookBotAccessConfig),
    WeComBot(WebhookBotAccessConfig),
    SlackBot(BotChannelAccessConfig),
    DiscordBot(BotChannelAccessConfig),
    Mattermost(MattermostAccessConfig),
    Gotify(GotifyAccessConfig),
    LetsEncrypt(NoConfig),
    LetsEncryptStaging(NoConfig),
    Buypass(NoConfig),
    ZeroSsl(EabAccessConfig),
    GoogleTrustServices(EabAccessConfig),
    SslCom(EabAccessConfig),
    AcmeCa(AcmeCaAccessConfig),
}

// ============ Shared shapes ============

/// `accessKeyId` + `secretAccessKey` pair (AWS, Baidu AI Cloud, Volcengine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeyPairAccessConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// `accessKey` + `secretKey` pair (BytePlus, Doge Cloud, Qiniu).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPairAccessConfig {
    pub access_key: String,
    pub secret_key: String,
}

/// Single API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccessConfig {
    pub api_token: String,
}

/// External account binding of an ACME CA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EabAccessConfig {
    pub eab_kid: String,
    pub eab_hmac_key: String,
}

/// Chat bot reached through an incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookBotAccessConfig {
    pub webhook_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Bot token plus an optional default channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotChannelAccessConfig {
    pub bot_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

// ============ Per-provider shapes ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcmeHttpReqAccessConfig {
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliyunAccessConfig {
    pub access_key_id: String,
    pub access_key_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureAccessConfig {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaotaPanelAccessConfig {
    pub server_url: String,
    pub api_key: String,
    #[serde(default)]
    pub allow_insecure_connections: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudflareAccessConfig {
    pub dns_api_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_api_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClouDnsAccessConfig {
    pub auth_id: String,
    pub auth_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsLaAccessConfig {
    pub api_id: String,
    pub api_secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoDaddyAccessConfig {
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuaweiCloudAccessConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
}

/// An empty kubeconfig selects the in-cluster configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K8sAccessConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kube_config: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamecheapAccessConfig {
    pub username: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetcupAccessConfig {
    pub customer_number: String,
    pub api_key: String,
    pub api_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerDnsAccessConfig {
    pub server_url: String,
    pub api_key: String,
}

/// SSH authentication method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SshAuthMethod {
    None,
    #[default]
    Password,
    Key,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshAccessConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub auth_method: SshAuthMethod,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_passphrase: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TencentCloudAccessConfig {
    pub secret_id: String,
    pub secret_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAccessConfig {
    pub url: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,
    #[serde(default)]
    pub allow_insecure_connections: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAccessConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_tls: bool,
    pub username: String,
    pub password: String,
    pub sender_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramBotAccessConfig {
    pub bot_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MattermostAccessConfig {
    pub server_url: String,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GotifyAccessConfig {
    pub url: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcmeCaAccessConfig {
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eab_kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eab_hmac_key: Option<String>,
}
