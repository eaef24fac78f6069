//! 英文翻译 (en-US)

pub const TRANSLATIONS: &[(&str, &str)] = &[
    // ========================================================================
    // 校验错误
    // ========================================================================
    ("common.errmsg.required", "This field is required"),
    ("common.errmsg.string_min", "Please enter at least {{min}} characters"),
    ("common.errmsg.string_max", "Please enter no more than {{max}} characters"),
    ("common.errmsg.url_invalid", "Please enter a valid URL"),
    ("common.errmsg.domain_invalid", "Please enter a valid domain name"),
    ("common.errmsg.host_invalid", "Please enter a valid domain name or IP address"),
    ("common.errmsg.email_invalid", "Please enter a valid email address"),
    ("common.errmsg.port_invalid", "Please enter a valid port (1-65535)"),
    ("common.errmsg.number_invalid", "Please enter a valid integer"),
    ("common.errmsg.number_range", "Please enter a number between {{min}} and {{max}}"),
    ("common.errmsg.boolean_invalid", "Please choose on or off"),
    ("common.errmsg.text_invalid", "Please enter text"),
    ("common.errmsg.enum_invalid", "Please choose one of: {{allowed}}"),
    ("common.errmsg.chat_id_invalid", "Please enter a valid chat ID"),
    // ========================================================================
    // 通知
    // ========================================================================
    ("common.notice.saved", "Saved successfully"),
    ("common.notice.save_failed", "Failed to save"),
    ("common.notice.request_error", "Request error"),
    // ========================================================================
    // 父表单字段
    // ========================================================================
    ("common.field.name", "Name"),
    ("common.field.provider", "Provider"),
    ("common.field.access", "Credential"),
    ("common.placeholder.pick_provider", "Please select a provider"),
    // ========================================================================
    // 记录类别
    // ========================================================================
    ("kind.access", "Credential"),
    ("kind.deploy", "Deployment target"),
    ("kind.notify", "Notification channel"),
];
