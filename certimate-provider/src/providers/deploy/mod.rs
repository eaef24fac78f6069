//! Deploy providers: targets a certificate is pushed to.

mod config;
mod schemas;

use serde::{Deserialize, Serialize};

pub use config::{
    AliyunOssDeployConfig, AliyunSlbDeployConfig, AwsCloudfrontDeployConfig,
    BaotapanelSiteDeployConfig, CdnDomainDeployConfig, CertificateFormat, DeployConfig,
    HuaweicloudCdnDeployConfig, HuaweicloudElbDeployConfig, K8sSecretDeployConfig,
    LocalDeployConfig, SshDeployConfig, TencentcloudClbDeployConfig, WebhookDeployConfig,
};

use super::AccessProvider;
use crate::traits::Variant;
use crate::types::{Capability, RecordKind, VariantDescriptor};

const HOSTING: &[Capability] = &[Capability::Hosting];

/// Deploy provider discriminator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DeployProvider {
    Local,
    Ssh,
    AliyunCdn,
    AliyunOss,
    AliyunSlb,
    TencentcloudCdn,
    TencentcloudClb,
    HuaweicloudCdn,
    HuaweicloudElb,
    AwsCloudfront,
    BaiducloudCdn,
    QiniuCdn,
    DogecloudCdn,
    ByteplusCdn,
    VolcengineCdn,
    K8sSecret,
    BaotapanelSite,
    Webhook,
}

const ALL: &[DeployProvider] = &[
    DeployProvider::Local,
    DeployProvider::Ssh,
    DeployProvider::AliyunCdn,
    DeployProvider::AliyunOss,
    DeployProvider::AliyunSlb,
    DeployProvider::TencentcloudCdn,
    DeployProvider::TencentcloudClb,
    DeployProvider::HuaweicloudCdn,
    DeployProvider::HuaweicloudElb,
    DeployProvider::AwsCloudfront,
    DeployProvider::BaiducloudCdn,
    DeployProvider::QiniuCdn,
    DeployProvider::DogecloudCdn,
    DeployProvider::ByteplusCdn,
    DeployProvider::VolcengineCdn,
    DeployProvider::K8sSecret,
    DeployProvider::BaotapanelSite,
    DeployProvider::Webhook,
];

impl Variant for DeployProvider {
    const KIND: RecordKind = RecordKind::Deploy;
    type Config = DeployConfig;

    fn all() -> &'static [Self] {
        ALL
    }

    fn key(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Ssh => "ssh",
            Self::AliyunCdn => "aliyun-cdn",
            Self::AliyunOss => "aliyun-oss",
            Self::AliyunSlb => "aliyun-slb",
            Self::TencentcloudCdn => "tencentcloud-cdn",
            Self::TencentcloudClb => "tencentcloud-clb",
            Self::HuaweicloudCdn => "huaweicloud-cdn",
            Self::HuaweicloudElb => "huaweicloud-elb",
            Self::AwsCloudfront => "aws-cloudfront",
            Self::BaiducloudCdn => "baiducloud-cdn",
            Self::QiniuCdn => "qiniu-cdn",
            Self::DogecloudCdn => "dogecloud-cdn",
            Self::ByteplusCdn => "byteplus-cdn",
            Self::VolcengineCdn => "volcengine-cdn",
            Self::K8sSecret => "k8s-secret",
            Self::BaotapanelSite => "baotapanel-site",
            Self::Webhook => "webhook",
        }
    }

    fn descriptor(self) -> VariantDescriptor<Self> {
        use schemas as s;

        let (name, label_key, icon, schema) = match self {
            Self::Local => (
                "Local host",
                "provider.local",
                "/imgs/providers/local.svg",
                s::LOCAL,
            ),
            Self::Ssh => (
                "SSH",
                "provider.ssh",
                "/imgs/providers/ssh.svg",
                s::SSH,
            ),
            Self::AliyunCdn => (
                "Alibaba Cloud CDN",
                "provider.aliyun-cdn",
                "/imgs/providers/aliyun.svg",
                s::CDN_DOMAIN,
            ),
            Self::AliyunOss => (
                "Alibaba Cloud OSS",
                "provider.aliyun-oss",
                "/imgs/providers/aliyun.svg",
                s::ALIYUN_OSS,
            ),
            Self::AliyunSlb => (
                "Alibaba Cloud SLB",
                "provider.aliyun-slb",
                "/imgs/providers/aliyun.svg",
                s::ALIYUN_SLB,
            ),
            Self::TencentcloudCdn => (
                "Tencent Cloud CDN",
                "provider.tencentcloud-cdn",
                "/imgs/providers/tencentcloud.svg",
                s::CDN_DOMAIN,
            ),
            Self::TencentcloudClb => (
                "Tencent Cloud CLB",
                "provider.tencentcloud-clb",
                "/imgs/providers/tencentcloud.svg",
                s::TENCENTCLOUD_CLB,
            ),
            Self::HuaweicloudCdn => (
                "Huawei Cloud CDN",
                "provider.huaweicloud-cdn",
                "/imgs/providers/huaweicloud.svg",
                s::HUAWEICLOUD_CDN,
            ),
            Self::HuaweicloudElb => (
                "Huawei Cloud ELB",
                "provider.huaweicloud-elb",
                "/imgs/providers/huaweicloud.svg",
                s::HUAWEICLOUD_ELB,
            ),
            Self::AwsCloudfront => (
                "AWS CloudFront",
                "provider.aws-cloudfront",
                "/imgs/providers/aws.svg",
                s::AWS_CLOUDFRONT,
            ),
            Self::BaiducloudCdn => (
                "Baidu AI Cloud CDN",
                "provider.baiducloud-cdn",
                "/imgs/providers/baiducloud.svg",
                s::CDN_DOMAIN,
            ),
            Self::QiniuCdn => (
                "Qiniu CDN",
                "provider.qiniu-cdn",
                "/imgs/providers/qiniu.svg",
                s::CDN_DOMAIN,
            ),
            Self::DogecloudCdn => (
                "Doge Cloud CDN",
                "provider.dogecloud-cdn",
                "/imgs/providers/dogecloud.png",
                s::CDN_DOMAIN,
            ),
            Self::ByteplusCdn => (
                "BytePlus CDN",
                "provider.byteplus-cdn",
                "/imgs/providers/byteplus.svg",
                s::CDN_DOMAIN,
            ),
            Self::VolcengineCdn => (
                "Volcengine CDN",
                "provider.volcengine-cdn",
                "/imgs/providers/volcengine.svg",
                s::CDN_DOMAIN,
            ),
            Self::K8sSecret => (
                "Kubernetes Secret",
                "provider.k8s-secret",
                "/imgs/providers/k8s.svg",
                s::K8S_SECRET,
            ),
            Self::BaotapanelSite => (
                "aaPanel site",
                "provider.baotapanel-site",
                "/imgs/providers/baotapanel.svg",
                s::BAOTAPANEL_SITE,
            ),
            Self::Webhook => (
                "Webhook",
                "provider.webhook",
                "/imgs/providers/webhook.svg",
                s::WEBHOOK,
            ),
        };

        VariantDescriptor {
            provider: self,
            name,
            label_key,
            icon,
            capabilities: HOSTING,
            schema,
        }
    }

    fn access_provider(self) -> Option<AccessProvider> {
        Some(match self {
            Self::Local => AccessProvider::Local,
            Self::Ssh => AccessProvider::Ssh,
            Self::AliyunCdn | Self::AliyunOss | Self::AliyunSlb => AccessProvider::Aliyun,
            Self::TencentcloudCdn | Self::TencentcloudClb => AccessProvider::TencentCloud,
            Self::HuaweicloudCdn | Self::HuaweicloudElb => AccessProvider::HuaweiCloud,
            Self::AwsCloudfront => AccessProvider::Aws,
            Self::BaiducloudCdn => AccessProvider::BaiduCloud,
            Self::QiniuCdn => AccessProvider::Qiniu,
            Self::DogecloudCdn => AccessProvider::DogeCloud,
            Self::ByteplusCdn => AccessProvider::BytePlus,
            Self::VolcengineCdn => AccessProvider::Volcengine,
            Self::K8sSecret => AccessProvider::K8s,
            Self::BaotapanelSite => AccessProvider::BaotaPanel,
            Self::Webhook => AccessProvider::Webhook,
        })
    }
}

impl std::fmt::Display for DeployProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UsageFilter;

    #[test]
    fn keys_match_serde_names() {
        for provider in DeployProvider::all() {
            let json_res = serde_json::to_value(provider);
            assert!(json_res.is_ok(), "serde_json::to_value failed: {json_res:?}");
            let Ok(json) = json_res else {
                return;
            };
            assert_eq!(json.as_str(), Some(provider.key()), "{provider:?}");
        }
    }

    #[test]
    fn every_target_consumes_a_hosting_credential() {
        for provider in DeployProvider::all() {
            let access = provider.access_provider();
            assert!(access.is_some(), "{provider:?}");
            if let Some(access) = access {
                assert!(
                    access.descriptor().is_available(Some(UsageFilter::Hosting)),
                    "{provider:?} -> {access:?}"
                );
            }
        }
    }

    #[test]
    fn certificate_format_extension() {
        assert_eq!(CertificateFormat::Pfx.extension(), ".pfx");
        assert_eq!(CertificateFormat::default(), CertificateFormat::Pem);
    }
}
