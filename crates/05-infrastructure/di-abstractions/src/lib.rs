//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义绑定值、类型兼容性规则以及注入相关的核心接口。
//!
//! ## 核心接口
//!
//! - [`Instance`] - 绑定值及其能力表
//! - [`is_assignable`] - 类型兼容性检查
//! - [`Producer`] - 延迟生产值的生产者
//! - [`Service`] - 填充时调用的初始化钩子
//! - [`Injectable`] - 可字段注入的结构体，可用 `#[derive(Injectable)]` 生成实现
//! - [`ServiceLocator`] - 服务定位器接口
//! - [`InjectionTarget`] - 直接注入的目标位置

pub mod compat;
pub mod injectable;
pub mod instance;
pub mod producer;
pub mod resolver;
pub mod service;
pub mod target;

pub use compat::*;
pub use injectable::*;
pub use instance::*;
pub use producer::*;
pub use resolver::*;
pub use service::*;
pub use target::*;

pub use infrastructure_common::{BoxError, RegistryError, RegistryResult, TypeInfo};

/// 字段注入派生宏
pub use inject_macros::Injectable;
