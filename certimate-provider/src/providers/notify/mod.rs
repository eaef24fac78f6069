//! Notify providers: channels a workflow message is sent through.
//!
//! Every channel consumes a notification-reserved access record; the notify
//! config only holds per-channel overrides.

use serde::{Deserialize, Serialize};

use super::AccessProvider;
use super::access::NoConfig;
use crate::schema::VariantSchema;
use crate::traits::Variant;
use crate::types::{Capability, Constraint, FieldSpec, RecordKind, VariantDescriptor};

const NOTIFICATION: &[Capability] = &[Capability::Notification];

// ============ Schemas ============

const EMAIL: VariantSchema = VariantSchema::new(&[
    FieldSpec::text("senderAddress", "Sender address").constraint(Constraint::Email),
    FieldSpec::text("receiverAddress", "Receiver address").constraint(Constraint::Email),
]);

const TELEGRAMBOT: VariantSchema =
    VariantSchema::new(&[FieldSpec::number("chatId", "Chat ID").constraint(Constraint::ChatId)]);

const CHANNEL: VariantSchema =
    VariantSchema::new(&[FieldSpec::text("channelId", "Channel ID")]);

const GOTIFY: VariantSchema = VariantSchema::new(&[FieldSpec::number("priority", "Priority")
    .constraint(Constraint::Range { min: 0, max: 10 })]);

const WEBHOOK: VariantSchema =
    VariantSchema::new(&[FieldSpec::textarea("webhookData", "Webhook data")]);

// ============ Discriminator ============

/// Notify provider discriminator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotifyProvider {
    Email,
    TelegramBot,
    DingTalkBot,
    LarkBot,
    WeComBot,
    SlackBot,
    DiscordBot,
    Mattermost,
    Gotify,
    Webhook,
}

const ALL: &[NotifyProvider] = &[
    NotifyProvider::Email,
    NotifyProvider::TelegramBot,
    NotifyProvider::DingTalkBot,
    NotifyProvider::LarkBot,
    NotifyProvider::WeComBot,
    NotifyProvider::SlackBot,
    NotifyProvider::DiscordBot,
    NotifyProvider::Mattermost,
    NotifyProvider::Gotify,
    NotifyProvider::Webhook,
];

impl Variant for NotifyProvider {
    const KIND: RecordKind = RecordKind::Notify;
    type Config = NotifyConfig;

    fn all() -> &'static [Self] {
        ALL
    }

    fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::TelegramBot => "telegrambot",
            Self::DingTalkBot => "dingtalkbot",
            Self::LarkBot => "larkbot",
            Self::WeComBot => "wecombot",
            Self::SlackBot => "slackbot",
            Self::DiscordBot => "discordbot",
            Self::Mattermost => "mattermost",
            Self::Gotify => "gotify",
            Self::Webhook => "webhook",
        }
    }

    fn descriptor(self) -> VariantDescriptor<Self> {
        // 通知渠道的名称与图标沿用对应的授权提供商
        let access = self.access_provider().map(AccessProvider::descriptor);
        let schema = match self {
            Self::Email => EMAIL,
            Self::TelegramBot => TELEGRAMBOT,
            Self::SlackBot | Self::DiscordBot | Self::Mattermost => CHANNEL,
            Self::Gotify => GOTIFY,
            Self::Webhook => WEBHOOK,
            Self::DingTalkBot | Self::LarkBot | Self::WeComBot => VariantSchema::EMPTY,
        };

        VariantDescriptor {
            provider: self,
            name: access.map_or("", |a| a.name),
            label_key: access.map_or("", |a| a.label_key),
            icon: access.map_or("", |a| a.icon),
            capabilities: NOTIFICATION,
            schema,
        }
    }

    fn access_provider(self) -> Option<AccessProvider> {
        Some(match self {
            Self::Email => AccessProvider::Email,
            Self::TelegramBot => AccessProvider::TelegramBot,
            Self::DingTalkBot => AccessProvider::DingTalkBot,
            Self::LarkBot => AccessProvider::LarkBot,
            Self::WeComBot => AccessProvider::WeComBot,
            Self::SlackBot => AccessProvider::SlackBot,
            Self::DiscordBot => AccessProvider::DiscordBot,
            Self::Mattermost => AccessProvider::Mattermost,
            Self::Gotify => AccessProvider::Gotify,
            Self::Webhook => AccessProvider::Webhook,
        })
    }
}

impl std::fmt::Display for NotifyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// ============ Typed configuration ============

/// Typed notify configuration, one variant per [`NotifyProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", content = "config", rename_all = "lowercase")]
pub enum NotifyConfig {
    Email(EmailNotifyConfig),
    TelegramBot(TelegramBotNotifyConfig),
    DingTalkBot(NoConfig),
    LarkBot(NoConfig),
    WeComBot(NoConfig),
    SlackBot(ChannelNotifyConfig),
    DiscordBot(ChannelNotifyConfig),
    Mattermost(ChannelNotifyConfig),
    Gotify(GotifyNotifyConfig),
    Webhook(WebhookNotifyConfig),
}

/// Per-channel address overrides; the access record supplies the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotifyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramBotNotifyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelNotifyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GotifyNotifyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookNotifyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UsageFilter;

    #[test]
    fn every_channel_uses_a_notification_credential() {
        for provider in NotifyProvider::all() {
            let access = provider.access_provider();
            assert!(access.is_some(), "{provider:?}");
            if let Some(access) = access {
                assert!(
                    access.descriptor().is_available(Some(UsageFilter::Notification)),
                    "{provider:?}"
                );
                assert_eq!(access.key(), provider.key());
            }
        }
    }

    #[test]
    fn label_follows_access_provider() {
        let d = NotifyProvider::TelegramBot.descriptor();
        assert_eq!(d.label_key, "provider.telegrambot");
        assert_eq!(d.name, "Telegram bot");
    }

    #[test]
    fn zero_chat_id_is_rejected() {
        let mut values = crate::ConfigMap::new();
        values.insert("chatId".to_string(), serde_json::json!(0));
        let errors = NotifyProvider::TelegramBot.schema().validate(&values);
        assert_eq!(errors.len(), 1);

        values.insert("chatId".to_string(), serde_json::json!(-100_123));
        assert!(NotifyProvider::TelegramBot.schema().validate(&values).is_empty());

        values.remove("chatId");
        assert!(NotifyProvider::TelegramBot.schema().validate(&values).is_empty());
    }
}
