//! 解析抽象接口
//!
//! 提供按键解析条目的能力，以及在其上构建的类型化便捷方法

use crate::instance::Instance;
use infrastructure_common::{RegistryResult, TypeInfo};
use std::any::Any;
use std::fmt;

/// 服务定位器 trait
///
/// 注册表实现它；服务初始化和字段注入只依赖这个接口。
pub trait ServiceLocator {
    /// 按 `key` 解析条目并校验其能满足 `expected`
    fn resolve(
        &self,
        key: &str,
        context: &ResolveContext<'_>,
        expected: &TypeInfo,
    ) -> RegistryResult<Instance>;
}

/// 服务定位器的类型化扩展
pub trait ServiceLocatorExt: ServiceLocator {
    /// 按类型解析，键为 `T` 的规范名称
    fn get_by_type<T: Clone + 'static>(&self) -> RegistryResult<T> {
        self.get_with_context(None, &ResolveContext::new())
    }

    /// 按名称解析，仍以 `T` 作为期望类型
    fn get_by_name<T: Clone + 'static>(&self, name: &str) -> RegistryResult<T> {
        self.get_with_context(Some(name), &ResolveContext::new())
    }

    /// 带调用上下文解析；`name` 为 `None` 时按类型解析
    fn get_with_context<T: Clone + 'static>(
        &self,
        name: Option<&str>,
        context: &ResolveContext<'_>,
    ) -> RegistryResult<T> {
        let expected = TypeInfo::of::<T>();
        let key = name.unwrap_or(expected.canonical_name());
        self.resolve(key, context, &expected)?.downcast::<T>()
    }
}

impl<L: ServiceLocator + ?Sized> ServiceLocatorExt for L {}

/// 解析上下文
///
/// 传给生产者，让同一个绑定可以按注入点产出不同的值。
#[derive(Clone, Copy, Default)]
pub struct ResolveContext<'a> {
    caller: Option<&'a (dyn Any + Send + Sync)>,
    owner: Option<TypeInfo>,
    field: Option<&'static str>,
}

impl<'a> ResolveContext<'a> {
    /// 创建空的解析上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 以调用方的值作为上下文
    pub fn from_caller(caller: &'a (dyn Any + Send + Sync)) -> Self {
        Self {
            caller: Some(caller),
            ..Self::default()
        }
    }

    /// 字段注入时的上下文
    pub fn for_field(owner: TypeInfo, field: &'static str) -> Self {
        Self {
            caller: None,
            owner: Some(owner),
            field: Some(field),
        }
    }

    /// 发起解析的调用方
    pub fn caller(&self) -> Option<&'a (dyn Any + Send + Sync)> {
        self.caller
    }

    /// 把调用方还原成具体类型
    pub fn caller_as<T: 'static>(&self) -> Option<&'a T> {
        self.caller.and_then(|caller| caller.downcast_ref::<T>())
    }

    /// 发起字段注入的结构体类型
    pub fn owner(&self) -> Option<TypeInfo> {
        self.owner
    }

    /// 正在注入的字段名
    pub fn field(&self) -> Option<&'static str> {
        self.field
    }
}

impl fmt::Debug for ResolveContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveContext")
            .field("caller", &self.caller.is_some())
            .field("owner", &self.owner.map(|o| o.name))
            .field("field", &self.field)
            .finish()
    }
}
