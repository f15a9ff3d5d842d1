//! 生产者抽象接口
//!
//! 生产者在解析时才被调用，同一个绑定可以为不同的注入点产出不同的值。

use crate::instance::Instance;
use crate::resolver::ResolveContext;
use infrastructure_common::{BoxError, TypeInfo};

/// 生产者 trait
///
/// 每次解析都会重新调用，结果不会被缓存。
pub trait Producer: Send + Sync + 'static {
    /// 为 `expected` 类型产出一个值
    fn produce(&self, context: &ResolveContext<'_>, expected: &TypeInfo)
        -> Result<Instance, BoxError>;
}

/// 闭包形式的生产者
pub struct ProducerFn<F>(F);

impl<F> Producer for ProducerFn<F>
where
    F: Fn(&ResolveContext<'_>, &TypeInfo) -> Result<Instance, BoxError> + Send + Sync + 'static,
{
    fn produce(
        &self,
        context: &ResolveContext<'_>,
        expected: &TypeInfo,
    ) -> Result<Instance, BoxError> {
        (self.0)(context, expected)
    }
}

/// 把闭包包装成生产者
pub fn producer_fn<F>(produce: F) -> ProducerFn<F>
where
    F: Fn(&ResolveContext<'_>, &TypeInfo) -> Result<Instance, BoxError> + Send + Sync + 'static,
{
    ProducerFn(produce)
}
