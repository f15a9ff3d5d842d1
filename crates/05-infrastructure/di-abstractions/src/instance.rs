//! 绑定值
//!
//! [`Instance`] 是注册表中每个条目的来源：类型擦除的值、它的 [`TypeInfo`]
//! 以及一张能力表（可转换成的类型、生产者、字段注入、服务初始化）。
//! 能力都在构造时通过闭包显式声明，解析时不做任何隐式的结构匹配。

use crate::injectable::Injectable;
use crate::producer::Producer;
use crate::resolver::ServiceLocator;
use crate::service::Service;
use infrastructure_common::{RegistryError, RegistryResult, TypeInfo};
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// 可被字段注入修改的共享记录
pub type Shared<T> = Arc<RwLock<T>>;

/// 创建共享记录
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}

type AnyValue = Arc<dyn Any + Send + Sync>;
type CastFn = Arc<dyn Fn(&(dyn Any + Send + Sync)) -> Option<Instance> + Send + Sync>;
type HookFn =
    Arc<dyn Fn(&(dyn Any + Send + Sync), &dyn ServiceLocator) -> RegistryResult<()> + Send + Sync>;

#[derive(Clone)]
struct Capability {
    info: TypeInfo,
    cast: CastFn,
}

/// 绑定值及其能力表
#[derive(Clone)]
pub struct Instance {
    info: TypeInfo,
    value: AnyValue,
    capabilities: Vec<Capability>,
    producer: Option<Arc<dyn Producer>>,
    fields: Option<HookFn>,
    init: Option<HookFn>,
}

impl Instance {
    /// 包装一个普通值
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            info: TypeInfo::of::<T>(),
            value: Arc::new(value),
            capabilities: Vec::new(),
            producer: None,
            fields: None,
            init: None,
        }
    }

    /// 包装一个生产者
    ///
    /// 值本身仍是生产者对象，按它自己的类型精确解析时直接返回生产者。
    pub fn producer<P: Producer>(producer: P) -> Self {
        let producer = Arc::new(producer);
        Self {
            info: TypeInfo::of::<P>(),
            value: producer.clone() as AnyValue,
            capabilities: Vec::new(),
            producer: Some(producer as Arc<dyn Producer>),
            fields: None,
            init: None,
        }
    }

    /// 包装一个可字段注入的共享记录
    pub fn record<T: Injectable>(record: Shared<T>) -> Self {
        let mut instance = Self::new(record);
        let hook: HookFn = Arc::new(
            |value: &(dyn Any + Send + Sync), locator: &dyn ServiceLocator| {
                let mut guard = lock_record::<T>(value)?;
                guard.inject_fields(locator)
            },
        );
        instance.fields = Some(hook);
        instance
    }

    /// 包装一个带初始化钩子的服务记录
    pub fn service<T: Injectable + Service>(record: Shared<T>) -> Self {
        let mut instance = Self::record(record);
        let hook: HookFn = Arc::new(
            |value: &(dyn Any + Send + Sync), locator: &dyn ServiceLocator| {
                let mut guard = lock_record::<T>(value)?;
                guard
                    .init(locator)
                    .map_err(|source| RegistryError::ServiceInitFailed {
                        service: std::any::type_name::<T>().to_string(),
                        source,
                    })
            },
        );
        instance.init = Some(hook);
        instance
    }

    /// 开始构建一个带能力声明的值，能力的转换源类型固定为 `T`
    pub fn builder<T: Send + Sync + 'static>(value: T) -> InstanceBuilder<T> {
        InstanceBuilder {
            instance: Self::new(value),
            _value: PhantomData,
        }
    }

    /// 值的类型信息
    pub fn type_info(&self) -> TypeInfo {
        self.info
    }

    /// 是否声明了转换成 `target` 的能力
    pub fn implements(&self, target: &TypeInfo) -> bool {
        self.capabilities.iter().any(|c| c.info == *target)
    }

    /// 已声明的能力类型
    pub fn capabilities(&self) -> impl Iterator<Item = TypeInfo> + '_ {
        self.capabilities.iter().map(|c| c.info)
    }

    /// 是否为生产者
    pub fn is_producer(&self) -> bool {
        self.producer.is_some()
    }

    /// 取出生产者
    pub fn as_producer(&self) -> Option<&Arc<dyn Producer>> {
        self.producer.as_ref()
    }

    /// 是否为可字段注入的记录
    pub fn is_record(&self) -> bool {
        self.fields.is_some()
    }

    /// 是否带服务初始化钩子
    pub fn is_service(&self) -> bool {
        self.init.is_some()
    }

    /// 转换为 `target` 类型：精确匹配返回自身，否则使用声明的能力
    pub fn cast_to(&self, target: &TypeInfo) -> Option<Instance> {
        if self.info == *target {
            return Some(self.clone());
        }
        self.capabilities
            .iter()
            .find(|c| c.info == *target)
            .and_then(|c| (c.cast)(self.value.as_ref()))
    }

    /// 借用内部值
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// 克隆出内部值，类型不符时返回 `InvalidInjectionType`
    pub fn downcast<T: Clone + 'static>(&self) -> RegistryResult<T> {
        self.downcast_ref::<T>().cloned().ok_or_else(|| {
            RegistryError::invalid_injection_type(std::any::type_name::<T>(), self.info.name)
        })
    }

    /// 对记录执行字段注入，非记录返回 `InvalidInjectionPoint`
    pub fn inject_fields(&self, locator: &dyn ServiceLocator) -> RegistryResult<()> {
        match &self.fields {
            Some(hook) => hook(self.value.as_ref(), locator),
            None => Err(RegistryError::invalid_injection_point(self.info.name)),
        }
    }

    /// 调用服务初始化钩子，非服务时什么也不做
    pub fn init_service(&self, locator: &dyn ServiceLocator) -> RegistryResult<()> {
        match &self.init {
            Some(hook) => hook(self.value.as_ref(), locator),
            None => Ok(()),
        }
    }
}

/// 带能力声明的值的构建器
///
/// 值的类型在 [`Instance::builder`] 处确定，每个能力的转换闭包都以 `&T` 为参数。
pub struct InstanceBuilder<T> {
    instance: Instance,
    _value: PhantomData<fn() -> T>,
}

impl<T: Send + Sync + 'static> InstanceBuilder<T> {
    /// 声明该值可作为 `I` 使用，`cast` 负责转换（通常是 `Arc<dyn Trait>` 的强制转换）
    pub fn capability<I, F>(mut self, cast: F) -> Self
    where
        I: Send + Sync + 'static,
        F: Fn(&T) -> I + Send + Sync + 'static,
    {
        let cast: CastFn = Arc::new(move |value: &(dyn Any + Send + Sync)| {
            value.downcast_ref::<T>().map(|v| Instance::new(cast(v)))
        });
        self.instance.capabilities.push(Capability {
            info: TypeInfo::of::<I>(),
            cast,
        });
        self
    }

    /// 完成构建
    pub fn build(self) -> Instance {
        self.instance
    }
}

impl<T: Send + Sync + 'static> From<InstanceBuilder<T>> for Instance {
    fn from(builder: InstanceBuilder<T>) -> Self {
        builder.build()
    }
}

fn lock_record<T: 'static>(
    value: &(dyn Any + Send + Sync),
) -> RegistryResult<parking_lot::RwLockWriteGuard<'_, T>> {
    let record = value
        .downcast_ref::<Shared<T>>()
        .ok_or_else(|| RegistryError::invalid_injection_point(std::any::type_name::<T>()))?;
    record
        .try_write()
        .ok_or_else(|| RegistryError::field_not_settable(std::any::type_name::<T>()))
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.info.name)
            .field(
                "capabilities",
                &self.capabilities.iter().map(|c| c.info.name).collect::<Vec<_>>(),
            )
            .field("producer", &self.is_producer())
            .field("record", &self.is_record())
            .field("service", &self.is_service())
            .finish()
    }
}
