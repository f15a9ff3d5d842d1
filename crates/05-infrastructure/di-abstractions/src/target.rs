//! 注入目标
//!
//! 直接注入时，每个目标都必须是一个可写的位置。

use crate::instance::{Instance, Shared};
use infrastructure_common::{RegistryError, RegistryResult, TypeInfo};

/// 注入目标 trait
pub trait InjectionTarget {
    /// 目标位置的类型；不是可写位置时返回 `None`
    fn target_type(&self) -> Option<TypeInfo>;

    /// 把解析结果写入目标
    fn assign(&mut self, instance: Instance) -> RegistryResult<()>;

    /// 用于错误信息的描述
    fn describe(&self) -> String;
}

/// 可变引用形式的注入槽
pub struct Slot<'a, T>(&'a mut T);

impl<'a, T> Slot<'a, T> {
    /// 包装一个可写的字段或变量
    pub fn new(slot: &'a mut T) -> Self {
        Self(slot)
    }
}

impl<T: Clone + Send + Sync + 'static> InjectionTarget for Slot<'_, T> {
    fn target_type(&self) -> Option<TypeInfo> {
        Some(TypeInfo::of::<T>())
    }

    fn assign(&mut self, instance: Instance) -> RegistryResult<()> {
        *self.0 = instance.downcast::<T>()?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("&mut {}", std::any::type_name::<T>())
    }
}

/// 共享记录通过写锁注入，锁被占用时字段不可写
impl<T: Clone + Send + Sync + 'static> InjectionTarget for Shared<T> {
    fn target_type(&self) -> Option<TypeInfo> {
        Some(TypeInfo::of::<T>())
    }

    fn assign(&mut self, instance: Instance) -> RegistryResult<()> {
        let value = instance.downcast::<T>()?;
        let mut guard = self
            .try_write()
            .ok_or_else(|| RegistryError::field_not_settable(self.describe()))?;
        *guard = value;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("Shared<{}>", std::any::type_name::<T>())
    }
}

/// 绑定值不是可写位置
impl InjectionTarget for Instance {
    fn target_type(&self) -> Option<TypeInfo> {
        None
    }

    fn assign(&mut self, _instance: Instance) -> RegistryResult<()> {
        Err(RegistryError::invalid_injection_point(self.describe()))
    }

    fn describe(&self) -> String {
        self.type_info().name.to_string()
    }
}
