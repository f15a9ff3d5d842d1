//! 绑定操作

use crate::registry::Registry;
use di_abstractions::{is_assignable, Instance, Producer, RegistryError, RegistryResult, TypeInfo};
use tracing::{debug, warn};

impl Registry {
    /// 以值自身类型的规范名称为键绑定，不做兼容性检查
    pub fn bind(&mut self, instance: Instance) -> RegistryResult<()> {
        let key = instance.type_info().canonical_name();
        self.store_entry(key.to_string(), instance)
    }

    /// 绑定一个普通值
    pub fn bind_value<T: Send + Sync + 'static>(&mut self, value: T) -> RegistryResult<()> {
        self.bind(Instance::new(value))
    }

    /// 以 `E` 的规范名称为键绑定，要求值能满足 `E`
    pub fn bind_with_type<E: ?Sized + 'static>(&mut self, instance: Instance) -> RegistryResult<()> {
        self.bind_with_type_info(TypeInfo::of::<E>(), instance)
    }

    /// 以 `expected` 的规范名称为键绑定，要求值能满足 `expected`
    pub fn bind_with_type_info(
        &mut self,
        expected: TypeInfo,
        instance: Instance,
    ) -> RegistryResult<()> {
        if !is_assignable(&expected, &instance) {
            return Err(RegistryError::invalid_injection_type(
                expected.name,
                instance.type_info().name,
            ));
        }
        self.store_entry(expected.canonical_name().to_string(), instance)
    }

    /// 以任意名称绑定；兼容性检查推迟到解析时
    pub fn bind_with_name(
        &mut self,
        name: impl Into<String>,
        instance: Instance,
    ) -> RegistryResult<()> {
        self.store_entry(name.into(), instance)
    }

    /// 为类型 `T` 绑定一个生产者
    pub fn bind_producer_for<T: ?Sized + 'static, P: Producer>(
        &mut self,
        producer: P,
    ) -> RegistryResult<()> {
        self.bind_with_type::<T>(Instance::producer(producer))
    }

    fn store_entry(&mut self, key: String, instance: Instance) -> RegistryResult<()> {
        if self.sealed {
            warn!("注册表已封存，拒绝绑定: {}", key);
            return Err(RegistryError::Sealed { key });
        }

        debug!("绑定条目: {} -> {}", key, instance.type_info());
        if self.store.put(key.clone(), instance).is_some() && self.config.warn_on_rebind {
            warn!("覆盖已存在的条目: {}", key);
        }
        Ok(())
    }
}
