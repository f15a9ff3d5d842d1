//! 服务注册表与解析器

use crate::store::EntryStore;
use di_abstractions::{
    is_assignable, Instance, RegistryError, RegistryResult, ResolveContext, ServiceLocator,
    ServiceLocatorExt, TypeInfo,
};
use infrastructure_common::RegistryConfig;
use tracing::{debug, info};

/// 服务注册表
///
/// 生命周期：创建、绑定、填充。设计为单线程在启动阶段写入，
/// 之后只读地解析和注入；并发绑定需要调用方自行串行化。
#[derive(Debug)]
pub struct Registry {
    pub(crate) store: EntryStore,
    pub(crate) config: RegistryConfig,
    pub(crate) populated: bool,
    pub(crate) sealed: bool,
}

impl Registry {
    /// 使用默认配置创建注册表
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// 使用指定配置创建注册表，配置中的命名值会按名称绑定
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut store = EntryStore::new();
        for (name, value) in &config.values {
            store.put(name.clone(), Instance::new(value.clone()));
        }
        if !store.is_empty() {
            info!("从配置绑定了 {} 个命名值", store.len());
        }

        Self {
            store,
            config,
            populated: false,
            sealed: false,
        }
    }

    /// 当前使用的配置
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// 是否存在指定键的条目
    pub fn contains(&self, key: &str) -> bool {
        self.store.contains(key)
    }

    /// 按绑定顺序列出所有键
    pub fn keys(&self) -> Vec<&str> {
        self.store.keys().collect()
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// 是否没有任何条目
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// 是否已完成填充
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// 是否已封存（封存后拒绝绑定）
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// 按类型获取，键为 `T` 的规范名称
    pub fn get_by_type<T: Clone + 'static>(&self) -> RegistryResult<T> {
        ServiceLocatorExt::get_by_type(self)
    }

    /// 按名称获取，以 `T` 作为期望类型校验
    pub fn get_by_name<T: Clone + 'static>(&self, name: &str) -> RegistryResult<T> {
        ServiceLocatorExt::get_by_name(self, name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceLocator for Registry {
    fn resolve(
        &self,
        key: &str,
        context: &ResolveContext<'_>,
        expected: &TypeInfo,
    ) -> RegistryResult<Instance> {
        let entry = self
            .store
            .get(key)
            .ok_or_else(|| RegistryError::entry_not_found(key))?;

        // 精确匹配直接返回，即使该值本身是生产者
        if entry.type_info() == *expected {
            return Ok(entry.clone());
        }

        let candidate = match entry.as_producer() {
            Some(producer) => {
                debug!("调用生产者: {} -> {}", key, expected);
                producer
                    .produce(context, expected)
                    .map_err(RegistryError::ProducerFailed)?
            }
            None => entry.clone(),
        };

        if !is_assignable(expected, &candidate) {
            return Err(RegistryError::invalid_injection_type(
                expected.name,
                candidate.type_info().name,
            ));
        }

        Ok(candidate.cast_to(expected).unwrap_or(candidate))
    }
}
