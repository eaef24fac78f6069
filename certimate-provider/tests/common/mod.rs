//! 共享测试工具和辅助函数

#![allow(dead_code)]

use certimate_provider::{ConfigMap, FieldRule, Variant};
use serde_json::Value;

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 从 JSON 对象构造表单值
pub fn values(json: Value) -> ConfigMap {
    match json {
        Value::Object(map) => map,
        _ => ConfigMap::new(),
    }
}

/// 模拟一次用户编辑：写入字段并触发该字段上声明的联动规则
///
/// `edited` 为用户已经手动编辑过的字段。
pub fn edit<V: Variant>(
    variant: V,
    values: &mut ConfigMap,
    key: &str,
    value: Value,
    edited: &[&str],
) -> Vec<&'static str> {
    let schema = variant.schema();
    let old = values.insert(key.to_string(), value);
    let rules: Vec<&FieldRule> = schema.rules_for(key).collect();
    rules
        .into_iter()
        .flat_map(|rule| rule.apply(old.as_ref(), values, schema.fields, |k| edited.contains(&k)))
        .collect()
}
