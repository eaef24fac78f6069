//! Storage and notification adapters for host shells (CLI, tests).

mod json_file_repository;
mod log_notifier;
mod memory_repository;

pub use json_file_repository::JsonFileRecordRepository;
pub use log_notifier::LogNotifier;
pub use memory_repository::MemoryRecordRepository;

#[cfg(feature = "sqlite-store")]
mod sqlite;

#[cfg(feature = "sqlite-store")]
pub use sqlite::SqliteStore;
