//! 错误类型定义

use thiserror::Error;

/// 装箱的动态错误，由生产者和服务初始化返回
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置构建失败: {source}")]
    BuildError {
        #[from]
        source: config::ConfigError,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 注册表错误类型
///
/// 所有错误都会终止当前操作，注册表内部不做重试。
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("条目未找到: {key}")]
    EntryNotFound { key: String },

    #[error("注入类型无效: 期望 {expected}, 实际 {actual}")]
    InvalidInjectionType { expected: String, actual: String },

    #[error("注入点无效: {target}")]
    InvalidInjectionPoint { target: String },

    #[error("字段不可写: {target}")]
    FieldNotSettable { target: String },

    /// 生产者返回的错误原样传播
    #[error(transparent)]
    ProducerFailed(BoxError),

    #[error("服务初始化失败: {service}, 原因: {source}")]
    ServiceInitFailed {
        service: String,
        #[source]
        source: BoxError,
    },

    #[error("注册表已封存，无法绑定: {key}")]
    Sealed { key: String },
}

impl RegistryError {
    /// 创建条目未找到错误
    pub fn entry_not_found(key: impl Into<String>) -> Self {
        Self::EntryNotFound { key: key.into() }
    }

    /// 创建注入类型无效错误
    pub fn invalid_injection_type(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::InvalidInjectionType {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// 创建注入点无效错误
    pub fn invalid_injection_point(target: impl Into<String>) -> Self {
        Self::InvalidInjectionPoint {
            target: target.into(),
        }
    }

    /// 创建字段不可写错误
    pub fn field_not_settable(target: impl Into<String>) -> Self {
        Self::FieldNotSettable {
            target: target.into(),
        }
    }
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type RegistryResult<T> = Result<T, RegistryError>;
