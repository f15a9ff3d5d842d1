//! 服务生命周期钩子

use crate::resolver::ServiceLocator;
use infrastructure_common::BoxError;

/// 可初始化的服务
///
/// 注册表填充时，对每个以 [`Instance::service`](crate::Instance::service)
/// 绑定的条目在字段注入之后调用一次 `init`。
pub trait Service: Send + Sync + 'static {
    /// 初始化服务，可以通过 `locator` 获取其他条目
    fn init(&mut self, locator: &dyn ServiceLocator) -> Result<(), BoxError>;
}
