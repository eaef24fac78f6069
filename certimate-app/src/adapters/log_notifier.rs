//! `Notifier` that forwards notices to the `log` facade.

use certimate_core::traits::{Notice, NoticeLevel, Notifier};

/// Notifier for hosts without a toast area (CLI, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        let Notice {
            level,
            title,
            message,
        } = notice;
        match level {
            NoticeLevel::Info | NoticeLevel::Success => log::info!("{title}: {message}"),
            NoticeLevel::Warning => log::warn!("{title}: {message}"),
            NoticeLevel::Error => log::error!("{title}: {message}"),
        }
    }
}
