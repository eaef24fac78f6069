//! 业务逻辑服务层

mod catalog_service;
mod edit_surface;
mod record_service;

pub use catalog_service::{CatalogEntry, CatalogService};
pub use edit_surface::{
    AfterSubmit, DismissReason, EditSurface, OnOpenChange, SurfaceProps, SurfaceState,
};
pub use record_service::RecordService;

use std::sync::Arc;

use crate::traits::{Localizer, Notifier, RecordRepository};

/// 服务上下文 - 持有所有依赖
///
/// 宿主层需要创建此上下文，并注入平台特定的存储、本地化与通知实现。
pub struct ServiceContext {
    /// 记录持久化仓库
    pub repository: Arc<dyn RecordRepository>,
    /// 本地化解析器
    pub localizer: Arc<dyn Localizer>,
    /// 用户通知
    pub notifier: Arc<dyn Notifier>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        repository: Arc<dyn RecordRepository>,
        localizer: Arc<dyn Localizer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            localizer,
            notifier,
        }
    }
}
