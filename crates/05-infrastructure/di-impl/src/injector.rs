//! 注入操作

use crate::registry::Registry;
use di_abstractions::{
    Injectable, InjectionTarget, Instance, RegistryError, RegistryResult, ResolveContext,
    ServiceLocator,
};
use tracing::debug;

impl Registry {
    /// 按类型依次注入每个目标
    ///
    /// 遇到第一个错误即返回，之前已写入的目标保持已写入状态。
    pub fn inject_into(&self, targets: &mut [&mut dyn InjectionTarget]) -> RegistryResult<()> {
        self.inject_from_context(&ResolveContext::new(), targets)
    }

    /// 带调用上下文的 [`Registry::inject_into`]
    pub fn inject_from_context(
        &self,
        context: &ResolveContext<'_>,
        targets: &mut [&mut dyn InjectionTarget],
    ) -> RegistryResult<()> {
        for target in targets.iter_mut() {
            let expected = target
                .target_type()
                .ok_or_else(|| RegistryError::invalid_injection_point(target.describe()))?;

            debug!("注入目标: {}", target.describe());
            let instance = self.resolve(expected.canonical_name(), context, &expected)?;
            target.assign(instance)?;
        }
        Ok(())
    }

    /// 对一个可字段注入的结构体执行字段注入
    pub fn inject_fields<T: Injectable>(&self, record: &mut T) -> RegistryResult<()> {
        record.inject_fields(self)
    }

    /// 对已擦除类型的记录执行字段注入
    pub fn inject_instance_fields(&self, instance: &Instance) -> RegistryResult<()> {
        instance.inject_fields(self)
    }
}
