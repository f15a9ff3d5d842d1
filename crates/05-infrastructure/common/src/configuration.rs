//! 注册表配置
//!
//! 使用 `config` crate 从可选的配置文件和 `REGISTRY` 前缀的环境变量加载。

use crate::errors::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "REGISTRY";

/// 注册表配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// 填充成功后封存注册表，之后的绑定调用会失败
    pub seal_after_populate: bool,
    /// 覆盖已存在的键时输出警告
    pub warn_on_rebind: bool,
    /// 构造时按名称绑定的字符串值
    pub values: HashMap<String, String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            seal_after_populate: false,
            warn_on_rebind: true,
            values: HashMap::new(),
        }
    }
}

impl RegistryConfig {
    /// 从配置文件（可不存在）和环境变量加载配置
    pub fn load(path: &str) -> ConfigResult<Self> {
        debug!("加载注册表配置: {}", path);

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Self::from_settings(settings)
    }

    /// 从 TOML 字符串加载配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: config::Config) -> ConfigResult<Self> {
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(key) = self.values.keys().find(|key| key.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("命名值的键不能为空: {:?}", key),
            });
        }
        Ok(())
    }
}
