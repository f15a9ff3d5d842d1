//! # 示例应用程序
//!
//! 演示服务注册表的完整流程：加载配置、绑定、填充、解析。

use clap::Parser;
use di_abstractions::{
    producer_fn, shared, BoxError, Injectable, Instance, RegistryError, Service,
    ServiceLocator, ServiceLocatorExt,
};
use di_impl::Registry;
use infrastructure_common::RegistryConfig;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "服务注册表示例应用")]
struct Args {
    /// 配置文件路径（不含扩展名时按已知格式查找）
    #[arg(short, long, default_value = "config/registry")]
    config: String,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 要问候的用户
    #[arg(default_value = "world")]
    users: Vec<String>,
}

/// 用户资料存储
trait ProfileStore: Send + Sync {
    fn display_name(&self, user: &str) -> Option<String>;
}

struct MemoryProfileStore {
    profiles: HashMap<String, String>,
}

impl ProfileStore for MemoryProfileStore {
    fn display_name(&self, user: &str) -> Option<String> {
        self.profiles.get(user).cloned()
    }
}

/// 问候服务
#[derive(Default, Injectable)]
struct GreetingService {
    #[inject("greeting")]
    greeting: String,
    #[inject]
    profiles: Option<Arc<dyn ProfileStore>>,
    #[inject("request_id")]
    request_id: String,
}

impl Service for GreetingService {
    fn init(&mut self, locator: &dyn ServiceLocator) -> Result<(), BoxError> {
        // 未绑定时不加标点，其余错误照常返回
        let punctuation: String = match locator.get_by_name("punctuation") {
            Err(RegistryError::EntryNotFound { .. }) => String::new(),
            other => other?,
        };
        self.greeting.push_str(&punctuation);
        info!("问候服务已初始化 (request {})", self.request_id);
        Ok(())
    }
}

impl GreetingService {
    fn greet(&self, user: &str) -> String {
        let name = self
            .profiles
            .as_ref()
            .and_then(|p| p.display_name(user))
            .unwrap_or_else(|| user.to_string());
        format!("{} {}", self.greeting, name)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("启动服务注册表示例应用");

    let config = RegistryConfig::load(&args.config)?;
    let mut registry = build_registry(config)?;
    registry.populate()?;

    // 注册表之外的对象也可以按同样的标记注入
    let mut service = GreetingService::default();
    registry.inject_fields(&mut service)?;
    for user in &args.users {
        println!("{}", service.greet(user));
    }

    info!("注册表中共有 {} 个条目: {:?}", registry.len(), registry.keys());
    Ok(())
}

/// 构建注册表并绑定示例条目
fn build_registry(config: RegistryConfig) -> anyhow::Result<Registry> {
    let mut registry = Registry::with_config(config);

    if !registry.contains("greeting") {
        registry.bind_with_name("greeting", Instance::new("Hello".to_string()))?;
    }

    let mut profiles = HashMap::new();
    profiles.insert("alice".to_string(), "Alice Liddell".to_string());
    registry.bind_with_type::<Option<Arc<dyn ProfileStore>>>(
        Instance::builder(Arc::new(MemoryProfileStore { profiles }))
            .capability(|s| -> Option<Arc<dyn ProfileStore>> { Some(s.clone()) })
            .build(),
    )?;

    let next_id = AtomicU64::new(1);
    registry.bind_with_name(
        "request_id",
        Instance::producer(producer_fn(move |context, _| {
            let id = next_id.fetch_add(1, Ordering::SeqCst);
            let owner = context.owner().map(|o| o.short_name()).unwrap_or("?");
            Ok(Instance::new(format!("{}-{}", owner, id)))
        })),
    )?;

    registry.bind(Instance::service(shared(GreetingService::default())))?;
    Ok(registry)
}
