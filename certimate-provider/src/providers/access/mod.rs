//! Access providers: credentials for DNS hosts, clouds, panels, CAs and
//! notification services.

mod config;
mod schemas;

use serde::{Deserialize, Serialize};

pub use config::{
    AccessConfig, AccessKeyPairAccessConfig, AcmeCaAccessConfig, AcmeHttpReqAccessConfig,
    AliyunAccessConfig, AzureAccessConfig, BaotaPanelAccessConfig, BotChannelAccessConfig,
    ClouDnsAccessConfig, CloudflareAccessConfig, DnsLaAccessConfig, EabAccessConfig,
    EmailAccessConfig, GoDaddyAccessConfig, GotifyAccessConfig, HuaweiCloudAccessConfig,
    K8sAccessConfig, KeyPairAccessConfig, MattermostAccessConfig, NamecheapAccessConfig,
    NetcupAccessConfig, NoConfig, PowerDnsAccessConfig, SshAccessConfig, SshAuthMethod,
    TelegramBotAccessConfig, TencentCloudAccessConfig, TokenAccessConfig,
    WebhookAccessConfig, WebhookBotAccessConfig,
};

use crate::schema::VariantSchema;
use crate::traits::Variant;
use crate::types::{Capability, RecordKind, VariantDescriptor};

const DNS: &[Capability] = &[Capability::Dns];
const HOSTING: &[Capability] = &[Capability::Hosting];
const DNS_HOSTING: &[Capability] = &[Capability::Dns, Capability::Hosting];
const HOSTING_NOTIFICATION: &[Capability] = &[Capability::Hosting, Capability::Notification];
const NOTIFICATION: &[Capability] = &[Capability::Notification];
const CA: &[Capability] = &[Capability::Ca];

/// Access provider discriminator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccessProvider {
    AcmeHttpReq,
    Aliyun,
    Aws,
    Azure,
    BaiduCloud,
    BaotaPanel,
    BytePlus,
    Cloudflare,
    ClouDns,
    Desec,
    DnsLa,
    DogeCloud,
    Dynv6,
    Gcore,
    GoDaddy,
    HuaweiCloud,
    K8s,
    Local,
    Namecheap,
    NameSilo,
    Netcup,
    PowerDns,
    Qiniu,
    Ssh,
    TencentCloud,
    Volcengine,
    Webhook,
    Email,
    TelegramBot,
    DingTalkBot,
    LarkBot,
    WeComBot,
    SlackBot,
    DiscordBot,
    Mattermost,
    Gotify,
    LetsEncrypt,
    LetsEncryptStaging,
    Buypass,
    ZeroSsl,
    GoogleTrustServices,
    SslCom,
    AcmeCa,
}

const ALL: &[AccessProvider] = &[
    AccessProvider::AcmeHttpReq,
    AccessProvider::Aliyun,
    AccessProvider::Aws,
    AccessProvider::Azure,
    AccessProvider::BaiduCloud,
    AccessProvider::BaotaPanel,
    AccessProvider::BytePlus,
    AccessProvider::Cloudflare,
    AccessProvider::ClouDns,
    AccessProvider::Desec,
    AccessProvider::DnsLa,
    AccessProvider::DogeCloud,
    AccessProvider::Dynv6,
    AccessProvider::Gcore,
    AccessProvider::GoDaddy,
    AccessProvider::HuaweiCloud,
    AccessProvider::K8s,
    AccessProvider::Local,
    AccessProvider::Namecheap,
    AccessProvider::NameSilo,
    AccessProvider::Netcup,
    AccessProvider::PowerDns,
    AccessProvider::Qiniu,
    AccessProvider::Ssh,
    AccessProvider::TencentCloud,
    AccessProvider::Volcengine,
    AccessProvider::Webhook,
    AccessProvider::Email,
    AccessProvider::TelegramBot,
    AccessProvider::DingTalkBot,
    AccessProvider::LarkBot,
    AccessProvider::WeComBot,
    AccessProvider::SlackBot,
    AccessProvider::DiscordBot,
    AccessProvider::Mattermost,
    AccessProvider::Gotify,
    AccessProvider::LetsEncrypt,
    AccessProvider::LetsEncryptStaging,
    AccessProvider::Buypass,
    AccessProvider::ZeroSsl,
    AccessProvider::GoogleTrustServices,
    AccessProvider::SslCom,
    AccessProvider::AcmeCa,
];

impl AccessProvider {
    fn describe(
        self,
        name: &'static str,
        label_key: &'static str,
        icon: &'static str,
        capabilities: &'static [Capability],
        schema: VariantSchema,
    ) -> VariantDescriptor<Self> {
        VariantDescriptor {
            provider: self,
            name,
            label_key,
            icon,
            capabilities,
            schema,
        }
    }
}

impl Variant for AccessProvider {
    const KIND: RecordKind = RecordKind::Access;
    type Config = AccessConfig;

    fn all() -> &'static [Self] {
        ALL
    }

    fn key(self) -> &'static str {
        match self {
            Self::AcmeHttpReq => "acmehttpreq",
            Self::Aliyun => "aliyun",
            Self::Aws => "aws",
            Self::Azure => "azure",
            Self::BaiduCloud => "baiducloud",
            Self::BaotaPanel => "baotapanel",
            Self::BytePlus => "byteplus",
            Self::Cloudflare => "cloudflare",
            Self::ClouDns => "cloudns",
            Self::Desec => "desec",
            Self::DnsLa => "dnsla",
            Self::DogeCloud => "dogecloud",
            Self::Dynv6 => "dynv6",
            Self::Gcore => "gcore",
            Self::GoDaddy => "godaddy",
            Self::HuaweiCloud => "huaweicloud",
            Self::K8s => "k8s",
            Self::Local => "local",
            Self::Namecheap => "namecheap",
            Self::NameSilo => "namesilo",
            Self::Netcup => "netcup",
            Self::PowerDns => "powerdns",
            Self::Qiniu => "qiniu",
            Self::Ssh => "ssh",
            Self::TencentCloud => "tencentcloud",
            Self::Volcengine => "volcengine",
            Self::Webhook => "webhook",
            Self::Email => "email",
            Self::TelegramBot => "telegrambot",
            Self::DingTalkBot => "dingtalkbot",
            Self::LarkBot => "larkbot",
            Self::WeComBot => "wecombot",
            Self::SlackBot => "slackbot",
            Self::DiscordBot => "discordbot",
            Self::Mattermost => "mattermost",
            Self::Gotify => "gotify",
            Self::LetsEncrypt => "letsencrypt",
            Self::LetsEncryptStaging => "letsencryptstaging",
            Self::Buypass => "buypass",
            Self::ZeroSsl => "zerossl",
            Self::GoogleTrustServices => "googletrustservices",
            Self::SslCom => "sslcom",
            Self::AcmeCa => "acmeca",
        }
    }

    fn descriptor(self) -> VariantDescriptor<Self> {
        use schemas as s;

        match self {
            Self::AcmeHttpReq => self.describe(
                "ACME HTTP request",
                "provider.acmehttpreq",
                "/imgs/providers/acmehttpreq.svg",
                DNS,
                s::ACMEHTTPREQ,
            ),
            Self::Aliyun => self.describe(
                "Alibaba Cloud",
                "provider.aliyun",
                "/imgs/providers/aliyun.svg",
                DNS_HOSTING,
                s::ALIYUN,
            ),
            Self::Aws => self.describe(
                "AWS",
                "provider.aws",
                "/imgs/providers/aws.svg",
                DNS_HOSTING,
                s::AWS,
            ),
            Self::Azure => self.describe(
                "Azure",
                "provider.azure",
                "/imgs/providers/azure.svg",
                DNS_HOSTING,
                s::AZURE,
            ),
            Self::BaiduCloud => self.describe(
                "Baidu AI Cloud",
                "provider.baiducloud",
                "/imgs/providers/baiducloud.svg",
                DNS_HOSTING,
                s::BAIDUCLOUD,
            ),
            Self::BaotaPanel => self.describe(
                "aaPanel (BaoTa)",
                "provider.baotapanel",
                "/imgs/providers/baotapanel.svg",
                HOSTING,
                s::BAOTAPANEL,
            ),
            Self::BytePlus => self.describe(
                "BytePlus",
                "provider.byteplus",
                "/imgs/providers/byteplus.svg",
                HOSTING,
                s::KEY_PAIR,
            ),
            Self::Cloudflare => self.describe(
                "Cloudflare",
                "provider.cloudflare",
                "/imgs/providers/cloudflare.svg",
                DNS,
                s::CLOUDFLARE,
            ),
            Self::ClouDns => self.describe(
                "ClouDNS",
                "provider.cloudns",
                "/imgs/providers/cloudns.png",
                DNS,
                s::CLOUDNS,
            ),
            Self::Desec => self.describe(
                "deSEC",
                "provider.desec",
                "/imgs/providers/desec.svg",
                DNS,
                s::TOKEN,
            ),
            Self::DnsLa => self.describe(
                "DNS.LA",
                "provider.dnsla",
                "/imgs/providers/dnsla.svg",
                DNS,
                s::DNSLA,
            ),
            Self::DogeCloud => self.describe(
                "Doge Cloud",
                "provider.dogecloud",
                "/imgs/providers/dogecloud.png",
                HOSTING,
                s::KEY_PAIR,
            ),
            Self::Dynv6 => self.describe(
                "dynv6",
                "provider.dynv6",
                "/imgs/providers/dynv6.png",
                DNS,
                s::TOKEN,
            ),
            Self::Gcore => self.describe(
                "Gcore",
                "provider.gcore",
                "/imgs/providers/gcore.png",
                DNS,
                s::TOKEN,
            ),
            Self::GoDaddy => self.describe(
                "GoDaddy",
                "provider.godaddy",
                "/imgs/providers/godaddy.svg",
                DNS,
                s::GODADDY,
            ),
            Self::HuaweiCloud => self.describe(
                "Huawei Cloud",
                "provider.huaweicloud",
                "/imgs/providers/huaweicloud.svg",
                DNS_HOSTING,
                s::HUAWEICLOUD,
            ),
            Self::K8s => self.describe(
                "Kubernetes",
                "provider.k8s",
                "/imgs/providers/k8s.svg",
                HOSTING,
                s::K8S,
            ),
            Self::Local => self.describe(
                "Local host",
                "provider.local",
                "/imgs/providers/local.svg",
                HOSTING,
                VariantSchema::EMPTY,
            ),
            Self::Namecheap => self.describe(
                "Namecheap",
                "provider.namecheap",
                "/imgs/providers/namecheap.svg",
                DNS,
                s::NAMECHEAP,
            ),
            Self::NameSilo => self.describe(
                "NameSilo",
                "provider.namesilo",
                "/imgs/providers/namesilo.svg",
                DNS,
                s::TOKEN,
            ),
            Self::Netcup => self.describe(
                "netcup",
                "provider.netcup",
                "/imgs/providers/netcup.png",
                DNS,
                s::NETCUP,
            ),
            Self::PowerDns => self.describe(
                "PowerDNS",
                "provider.powerdns",
                "/imgs/providers/powerdns.svg",
                DNS,
                s::POWERDNS,
            ),
            Self::Qiniu => self.describe(
                "Qiniu Cloud",
                "provider.qiniu",
                "/imgs/providers/qiniu.svg",
                HOSTING,
                s::KEY_PAIR,
            ),
            Self::Ssh => self.describe(
                "SSH",
                "provider.ssh",
                "/imgs/providers/ssh.svg",
                HOSTING,
                s::SSH,
            ),
            Self::TencentCloud => self.describe(
                "Tencent Cloud",
                "provider.tencentcloud",
                "/imgs/providers/tencentcloud.svg",
                DNS_HOSTING,
                s::TENCENTCLOUD,
            ),
            Self::Volcengine => self.describe(
                "Volcengine",
                "provider.volcengine",
                "/imgs/providers/volcengine.svg",
                DNS_HOSTING,
                s::ACCESS_KEY_PAIR,
            ),
            Self::Webhook => self.describe(
                "Webhook",
                "provider.webhook",
                "/imgs/providers/webhook.svg",
                HOSTING_NOTIFICATION,
                s::WEBHOOK,
            ),
            Self::Email => self.describe(
                "Email",
                "provider.email",
                "/imgs/providers/email.svg",
                NOTIFICATION,
                s::EMAIL,
            ),
            Self::TelegramBot => self.describe(
                "Telegram bot",
                "provider.telegrambot",
                "/imgs/providers/telegram.svg",
                NOTIFICATION,
                s::TELEGRAMBOT,
            ),
            Self::DingTalkBot => self.describe(
                "DingTalk bot",
                "provider.dingtalkbot",
                "/imgs/providers/dingtalk.svg",
                NOTIFICATION,
                s::WEBHOOK_BOT_SIGNED,
            ),
            Self::LarkBot => self.describe(
                "Lark bot",
                "provider.larkbot",
                "/imgs/providers/lark.svg",
                NOTIFICATION,
                s::WEBHOOK_BOT_SIGNED,
            ),
            Self::WeComBot => self.describe(
                "WeCom bot",
                "provider.wecombot",
                "/imgs/providers/wecom.svg",
                NOTIFICATION,
                s::WEBHOOK_BOT,
            ),
            Self::SlackBot => self.describe(
                "Slack bot",
                "provider.slackbot",
                "/imgs/providers/slack.svg",
                NOTIFICATION,
                s::BOT_CHANNEL,
            ),
            Self::DiscordBot => self.describe(
                "Discord bot",
                "provider.discordbot",
                "/imgs/providers/discord.svg",
                NOTIFICATION,
                s::BOT_CHANNEL,
            ),
            Self::Mattermost => self.describe(
                "Mattermost",
                "provider.mattermost",
                "/imgs/providers/mattermost.svg",
                NOTIFICATION,
                s::MATTERMOST,
            ),
            Self::Gotify => self.describe(
                "Gotify",
                "provider.gotify",
                "/imgs/providers/gotify.png",
                NOTIFICATION,
                s::GOTIFY,
            ),
            Self::LetsEncrypt => self.describe(
                "Let's Encrypt",
                "provider.letsencrypt",
                "/imgs/providers/letsencrypt.svg",
                CA,
                VariantSchema::EMPTY,
            ),
            Self::LetsEncryptStaging => self.describe(
                "Let's Encrypt (staging)",
                "provider.letsencryptstaging",
                "/imgs/providers/letsencrypt.svg",
                CA,
                VariantSchema::EMPTY,
            ),
            Self::Buypass => self.describe(
                "Buypass",
                "provider.buypass",
                "/imgs/providers/buypass.png",
                CA,
                VariantSchema::EMPTY,
            ),
            Self::ZeroSsl => self.describe(
                "ZeroSSL",
                "provider.zerossl",
                "/imgs/providers/zerossl.svg",
                CA,
                s::EAB,
            ),
            Self::GoogleTrustServices => self.describe(
                "Google Trust Services",
                "provider.googletrustservices",
                "/imgs/providers/google.svg",
                CA,
                s::EAB,
            ),
            Self::SslCom => self.describe(
                "SSL.com",
                "provider.sslcom",
                "/imgs/providers/sslcom.svg",
                CA,
                s::EAB,
            ),
            Self::AcmeCa => self.describe(
                "Custom ACME CA",
                "provider.acmeca",
                "/imgs/providers/acmeca.svg",
                CA,
                s::ACMECA,
            ),
        }
    }
}

impl std::fmt::Display for AccessProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
