//! # 服务注册表实现
//!
//! 提供运行时服务注册表：按类型或名称绑定值，按类型或名称解析，
//! 向目标位置或结构体字段注入，以及一次性的填充（字段注入 + 服务初始化）。
//!
//! ```ignore
//! let mut registry = Registry::new();
//! registry.bind_value("Hello".to_string())?;
//!
//! let mut greeting = String::new();
//! di_impl::inject!(registry, greeting)?;
//! ```

mod binder;
mod injector;
mod populator;
mod registry;
mod store;

pub use registry::Registry;
pub use store::EntryStore;

pub use di_abstractions::*;

/// 按类型向一组可变位置注入
///
/// 展开为 [`Registry::inject_into`]，每个位置都包装成 [`Slot`]。
#[macro_export]
macro_rules! inject {
    ($registry:expr, $($target:expr),+ $(,)?) => {
        $registry.inject_into(&mut [
            $(&mut $crate::Slot::new(&mut $target) as &mut dyn $crate::InjectionTarget),+
        ])
    };
}
