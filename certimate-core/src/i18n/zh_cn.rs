//! 简体中文翻译 (zh-CN)

pub const TRANSLATIONS: &[(&str, &str)] = &[
    // ========================================================================
    // 校验错误
    // ========================================================================
    ("common.errmsg.required", "此项为必填项"),
    ("common.errmsg.string_min", "请输入至少 {{min}} 个字符"),
    ("common.errmsg.string_max", "请输入不超过 {{max}} 个字符"),
    ("common.errmsg.url_invalid", "请输入正确的 URL"),
    ("common.errmsg.domain_invalid", "请输入正确的域名"),
    ("common.errmsg.host_invalid", "请输入正确的域名或 IP 地址"),
    ("common.errmsg.email_invalid", "请输入正确的邮箱地址"),
    ("common.errmsg.port_invalid", "请输入正确的端口号（1-65535）"),
    ("common.errmsg.number_invalid", "请输入正确的整数"),
    ("common.errmsg.number_range", "请输入 {{min}} 到 {{max}} 之间的数字"),
    ("common.errmsg.boolean_invalid", "请选择开启或关闭"),
    ("common.errmsg.text_invalid", "请输入文本"),
    ("common.errmsg.enum_invalid", "请从以下选项中选择：{{allowed}}"),
    ("common.errmsg.chat_id_invalid", "请输入正确的会话 ID"),
    // ========================================================================
    // 通知
    // ========================================================================
    ("common.notice.saved", "保存成功"),
    ("common.notice.save_failed", "保存失败"),
    ("common.notice.request_error", "请求错误"),
    // ========================================================================
    // 父表单字段
    // ========================================================================
    ("common.field.name", "名称"),
    ("common.field.provider", "提供商"),
    ("common.field.access", "授权凭证"),
    ("common.placeholder.pick_provider", "请选择提供商"),
    // ========================================================================
    // 记录类别
    // ========================================================================
    ("kind.access", "授权凭证"),
    ("kind.deploy", "部署目标"),
    ("kind.notify", "通知渠道"),
    // ========================================================================
    // 提供商名称（未列出的沿用英文名）
    // ========================================================================
    ("provider.aliyun", "阿里云"),
    ("provider.aliyun-cdn", "阿里云 CDN"),
    ("provider.aliyun-oss", "阿里云 OSS"),
    ("provider.aliyun-slb", "阿里云 SLB"),
    ("provider.baiducloud", "百度智能云"),
    ("provider.baiducloud-cdn", "百度智能云 CDN"),
    ("provider.baotapanel", "宝塔面板"),
    ("provider.baotapanel-site", "宝塔面板网站"),
    ("provider.dingtalkbot", "钉钉机器人"),
    ("provider.dogecloud", "多吉云"),
    ("provider.dogecloud-cdn", "多吉云 CDN"),
    ("provider.email", "邮件"),
    ("provider.huaweicloud", "华为云"),
    ("provider.huaweicloud-cdn", "华为云 CDN"),
    ("provider.huaweicloud-elb", "华为云 ELB"),
    ("provider.larkbot", "飞书机器人"),
    ("provider.local", "本地主机"),
    ("provider.qiniu", "七牛云"),
    ("provider.qiniu-cdn", "七牛云 CDN"),
    ("provider.tencentcloud", "腾讯云"),
    ("provider.tencentcloud-cdn", "腾讯云 CDN"),
    ("provider.tencentcloud-clb", "腾讯云 CLB"),
    ("provider.volcengine", "火山引擎"),
    ("provider.volcengine-cdn", "火山引擎 CDN"),
    ("provider.wecombot", "企业微信机器人"),
];
