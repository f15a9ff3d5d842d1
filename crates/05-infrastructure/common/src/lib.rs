//! # Infrastructure Common
//!
//! 服务注册表各层共享的基础类型。
//!
//! ## 核心组件
//!
//! - [`TypeInfo`] - 规范类型描述，按类型绑定和解析时的键来源
//! - [`RegistryError`] - 注册表错误
//! - [`RegistryConfig`] - 注册表配置

pub mod configuration;
pub mod errors;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use metadata::*;
