//! 类型兼容性检查
//!
//! 绑定时校验要存入的值，解析时校验（生产之后）要返回的值。

use crate::instance::Instance;
use infrastructure_common::TypeInfo;

/// 判断 `actual` 能否满足期望类型 `expected`
///
/// 按顺序匹配，第一条命中即返回：
/// 1. 类型完全相同；
/// 2. `actual` 声明了转换成 `expected` 的能力；
/// 3. `actual` 是生产者（延迟到生产后再检查）。
pub fn is_assignable(expected: &TypeInfo, actual: &Instance) -> bool {
    if actual.type_info() == *expected {
        return true;
    }

    if actual.implements(expected) {
        return true;
    }

    actual.is_producer()
}
