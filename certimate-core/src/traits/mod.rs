//! External interface abstract trait definition

mod localizer;
mod notifier;
mod record_repository;

pub use localizer::Localizer;
pub use notifier::{Notice, NoticeLevel, Notifier};
pub use record_repository::RecordRepository;
