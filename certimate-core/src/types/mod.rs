//! 类型定义模块

mod record;
mod validation;

pub use record::{FormValues, PersistedRecord, RecordFilter, RecordPayload};
pub use validation::ValidationResult;

// Re-export provider 库的公共类型
pub use certimate_provider::{ConfigMap, RecordKind, Reserve, UsageFilter};
