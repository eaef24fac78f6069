//! 表单引擎
//!
//! - [`VariantForm`]: 单个变体的子表单（嵌套作用域）
//! - [`ParentForm`]: 通用字段（父作用域）
//! - [`CompositeFormController`]: 组合两个作用域，对外提供统一实例契约
//! - [`Dispatcher`]: 判别字段到描述符 / 子表单的映射

mod controller;
mod dispatcher;
mod parent;
mod variant_form;

pub use controller::{CONFIG_PREFIX, CompositeFormController, FormInit};
pub use dispatcher::{Dispatcher, ProviderOption};
pub use parent::{
    FIELD_ACCESS_ID, FIELD_CONFIG, FIELD_NAME, FIELD_PROVIDER, FIELD_RESERVE, NAME_MAX_LEN,
    ParentForm, ParentValues,
};
pub use variant_form::{InitialValues, SubFormInit, VariantForm};
