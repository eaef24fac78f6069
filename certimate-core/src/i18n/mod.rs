//! 国际化（i18n）模块
//!
//! 内置 en-US 与 zh-CN 两套键值翻译表，通过 [`BuiltinLocalizer`] 实现
//! [`Localizer`]。缺失的键先回退到 en-US，再回退到键本身。

use serde::{Deserialize, Serialize};

use crate::traits::Localizer;

mod en_us;
mod zh_cn;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// 英语（美国）
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// 简体中文（中国）
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::ZhCn]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::ZhCn => "简体中文",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::EnUs => en_us::TRANSLATIONS,
            Language::ZhCn => zh_cn::TRANSLATIONS,
        }
    }
}

/// 内置翻译表实现的 [`Localizer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocalizer {
    language: Language,
}

impl BuiltinLocalizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        let find = |table: &'static [(&'static str, &'static str)]| {
            table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
        };
        find(self.language.table()).or_else(|| find(Language::EnUs.table()))
    }
}

impl Localizer for BuiltinLocalizer {
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String {
        let Some(template) = self.lookup(key) else {
            log::debug!("Missing translation for {key}");
            return key.to_string();
        };
        interpolate(template, params)
    }
}

/// 替换模板中的 `{{name}}` 占位符，未提供的占位符原样保留
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{{{name}}}}}"), value)
    })
}
