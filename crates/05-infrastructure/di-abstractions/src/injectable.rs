//! 字段注入抽象接口
//!
//! 通常由 `#[derive(Injectable)]` 生成实现：带 `#[inject]` 标记的字段按声明顺序注入，
//! 未标记的字段保持原值。

use crate::resolver::ServiceLocator;
use infrastructure_common::{RegistryResult, TypeInfo};

/// 字段注入点描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectionPoint {
    /// 字段名
    pub field: &'static str,
    /// 字段声明的类型，总是作为期望类型参与校验
    pub field_type: TypeInfo,
    /// 标记中给出的名称，`None` 表示按字段类型解析
    pub name: Option<&'static str>,
}

impl InjectionPoint {
    /// 该字段使用的查找键
    pub fn key(&self) -> &'static str {
        self.name.unwrap_or(self.field_type.name)
    }
}

/// 可字段注入的结构体
pub trait Injectable: Send + Sync + 'static {
    /// 按声明顺序列出所有注入点
    fn injection_points() -> Vec<InjectionPoint>
    where
        Self: Sized;

    /// 依次解析并写入所有注入点，遇到第一个错误即停止（已写入的字段不回滚）
    fn inject_fields(&mut self, locator: &dyn ServiceLocator) -> RegistryResult<()>;
}
