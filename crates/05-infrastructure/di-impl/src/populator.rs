//! 填充操作
//!
//! 对当前所有条目的快照执行一次字段注入和服务初始化。

use crate::registry::Registry;
use di_abstractions::RegistryResult;
use tracing::{debug, error, info, warn};

impl Registry {
    /// 填充注册表
    ///
    /// 按绑定顺序遍历条目：记录先注入字段，服务再调用 `init`。遇到第一个错误即中止，
    /// 此时注册表保持未填充状态，可以修正绑定后重试。已填充时再次调用只记录警告。
    pub fn populate(&mut self) -> RegistryResult<()> {
        if self.populated {
            warn!("注册表已填充，忽略重复调用");
            return Ok(());
        }

        let entries = self.store.snapshot();
        info!("开始填充注册表，共 {} 个条目", entries.len());

        for (key, instance) in &entries {
            if instance.is_record() {
                debug!("注入字段: {}", key);
                self.inject_instance_fields(instance).map_err(|e| {
                    error!("字段注入失败: {}: {}", key, e);
                    e
                })?;
            }

            if instance.is_service() {
                debug!("初始化服务: {}", key);
                instance.init_service(&*self).map_err(|e| {
                    error!("服务初始化失败: {}: {}", key, e);
                    e
                })?;
            }
        }

        self.populated = true;
        if self.config.seal_after_populate {
            self.sealed = true;
            info!("注册表已封存");
        }

        info!("注册表填充完成");
        Ok(())
    }
}
