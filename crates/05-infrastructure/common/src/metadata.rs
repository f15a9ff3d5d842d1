//! 元数据定义
//!
//! 提供注册表使用的类型描述信息

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型信息
///
/// `name` 是类型的规范名称，也是按类型绑定时使用的查找键；
/// 类型相等性只比较 `id`。
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    /// 规范类型名称（完整路径）
    pub name: &'static str,
    /// 类型ID
    pub id: TypeId,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// 规范名称，即按类型解析时的查找键
    pub fn canonical_name(&self) -> &'static str {
        self.name
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &'static str {
        // 泛型参数里也可能带路径，只截取最外层
        let outer = self.name.split('<').next().unwrap_or(self.name);
        let start = outer.rfind("::").map(|i| i + 2).unwrap_or(0);
        &self.name[start..]
    }

    /// 是否为指定类型
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
