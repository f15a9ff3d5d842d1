//! Centralized end-to-end tests for the service registry
use di_abstractions::{
    producer_fn, shared, BoxError, Injectable, Instance, RegistryError, Service, ServiceLocator,
    ServiceLocatorExt, Shared, Slot, TypeInfo,
};
use di_impl::{inject, Registry};
use infrastructure_common::RegistryConfig;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug)]
struct Injected {
    name: String,
}

#[derive(Default, Injectable)]
struct Holder {
    #[inject]
    service_by_type: Option<Arc<Injected>>,
    #[inject("ServiceByName")]
    service_by_name: Option<Arc<Injected>>,
    untouched: u32,
}

trait Store: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

struct MemoryStore {
    prefix: String,
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        Some(format!("{}{}", self.prefix, key))
    }
}

/// 依赖存储和问候语的服务
#[derive(Default, Injectable)]
struct Greeter {
    #[inject]
    greeting: String,
    #[inject(name = "primary")]
    store: Option<Arc<dyn Store>>,
    started: bool,
}

impl Service for Greeter {
    fn init(&mut self, locator: &dyn ServiceLocator) -> Result<(), BoxError> {
        // init 时字段已注入，也可以再取其他条目
        let retries: u8 = locator.get_by_name("retries")?;
        self.started = retries > 0 && self.store.is_some();
        Ok(())
    }
}

impl Greeter {
    fn greet(&self, who: &str) -> String {
        let suffix = self
            .store
            .as_ref()
            .and_then(|s| s.get(who))
            .unwrap_or_default();
        format!("{} {}", self.greeting, suffix)
    }
}

fn injected(name: &str) -> Arc<Injected> {
    Arc::new(Injected {
        name: name.to_string(),
    })
}

fn bind_injected(registry: &mut Registry) -> anyhow::Result<()> {
    registry.bind_value(injected("A"))?;
    registry.bind_with_name("ServiceByName", Instance::new(injected("B")))?;
    Ok(())
}

#[test]
fn test_bind_and_get() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.bind_value("Hello".to_string())?;
    registry.bind_with_name("MyCustomName", Instance::new("Hello".to_string()))?;

    assert_eq!(registry.get_by_type::<String>()?, "Hello");
    assert_eq!(registry.get_by_name::<String>("MyCustomName")?, "Hello");
    assert!(matches!(
        registry.get_by_name::<i32>("MyCustomName"),
        Err(RegistryError::InvalidInjectionType { .. })
    ));
    Ok(())
}

#[test]
fn test_inject_into_locations() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.bind_value("Hello".to_string())?;
    bind_injected(&mut registry)?;

    let mut greeting = String::new();
    let mut service: Option<Arc<Injected>> = None;
    let mut by_type = injected("");
    inject!(registry, greeting, by_type)?;
    assert_eq!(greeting, "Hello");
    assert_eq!(by_type.name, "A");

    // Option<Arc<Injected>> 没有绑定
    let err = registry
        .inject_into(&mut [&mut Slot::new(&mut service)])
        .unwrap_err();
    assert!(matches!(err, RegistryError::EntryNotFound { .. }));
    assert!(service.is_none());
    Ok(())
}

#[test]
fn test_derived_injection_points() {
    let points = Holder::injection_points();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].field, "service_by_type");
    assert_eq!(points[0].field_type, TypeInfo::of::<Option<Arc<Injected>>>());
    assert_eq!(points[0].name, None);
    assert_eq!(points[1].key(), "ServiceByName");
}

#[test]
fn test_inject_fields_by_type_and_name() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.bind_value(Some(injected("A")))?;
    registry.bind_with_name("ServiceByName", Instance::new(Some(injected("B"))))?;

    let mut holder = Holder {
        untouched: 7,
        ..Holder::default()
    };
    registry.inject_fields(&mut holder)?;

    assert_eq!(holder.service_by_type.as_ref().map(|s| s.name.as_str()), Some("A"));
    assert_eq!(holder.service_by_name.as_ref().map(|s| s.name.as_str()), Some("B"));
    assert_eq!(holder.untouched, 7);
    Ok(())
}

#[test]
fn test_inject_fields_stops_at_first_error() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.bind_value(Some(injected("A")))?;

    let mut holder = Holder::default();
    let err = registry.inject_fields(&mut holder).unwrap_err();

    assert!(matches!(err, RegistryError::EntryNotFound { .. }));
    assert!(holder.service_by_type.is_some());
    assert!(holder.service_by_name.is_none());
    Ok(())
}

#[test]
fn test_populate_wires_services() -> anyhow::Result<()> {
    let greeter: Shared<Greeter> = shared(Greeter::default());

    let mut registry = Registry::new();
    registry.bind(Instance::service(greeter.clone()))?;
    registry.bind_value("Hello".to_string())?;
    registry.bind_with_name("retries", Instance::new(3u8))?;
    registry.bind_with_name(
        "primary",
        Instance::builder(Arc::new(MemoryStore {
            prefix: "user:".to_string(),
        }))
        .capability(|s| -> Option<Arc<dyn Store>> { Some(s.clone()) })
        .build(),
    )?;
    registry.populate()?;

    let greeter = greeter.read();
    assert!(greeter.started);
    assert_eq!(greeter.greet("bob"), "Hello user:bob");
    Ok(())
}

#[test]
fn test_populate_reports_missing_dependency() {
    let mut registry = Registry::new();
    registry
        .bind(Instance::service(shared(Greeter::default())))
        .unwrap();

    let err = registry.populate().unwrap_err();
    assert!(matches!(
        err,
        RegistryError::EntryNotFound { ref key } if key == TypeInfo::of::<String>().canonical_name()
    ));
    assert!(!registry.is_populated());
}

#[test]
fn test_producer_for_string() -> anyhow::Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let mut registry = Registry::new();
    registry.bind_producer_for::<String, _>(producer_fn(move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Instance::new("Hello World".to_string()))
    }))?;

    assert_eq!(registry.get_by_type::<String>()?, "Hello World");

    let mut greeting = String::new();
    inject!(registry, greeting)?;
    assert_eq!(greeting, "Hello World");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[test]
fn test_producer_sees_injection_point() -> anyhow::Result<()> {
    #[derive(Default, Injectable)]
    struct Labels {
        #[inject("label")]
        title: String,
        #[inject("label")]
        subtitle: String,
    }

    let mut registry = Registry::new();
    registry.bind_with_name(
        "label",
        Instance::producer(producer_fn(|context, _| {
            let owner = context.owner().map(|o| o.short_name()).unwrap_or_default();
            let field = context.field().unwrap_or_default();
            Ok(Instance::new(format!("{}.{}", owner, field)))
        })),
    )?;

    let mut labels = Labels::default();
    registry.inject_fields(&mut labels)?;
    assert_eq!(labels.title, "Labels.title");
    assert_eq!(labels.subtitle, "Labels.subtitle");
    Ok(())
}

#[test]
fn test_producer_failure() {
    #[derive(Debug, thiserror::Error)]
    #[error("backend offline")]
    struct Offline;

    let mut registry = Registry::new();
    registry
        .bind_producer_for::<String, _>(producer_fn(|_, _| Err(Offline.into())))
        .unwrap();

    let err = registry.get_by_type::<String>().unwrap_err();
    assert!(matches!(err, RegistryError::ProducerFailed(_)));
    assert_eq!(err.to_string(), "backend offline");
}

#[test]
fn test_configured_registry() -> anyhow::Result<()> {
    let config = RegistryConfig::from_toml_str(
        r#"
        seal_after_populate = true

        [values]
        greeting = "Hi"
        "#,
    )?;

    let mut registry = Registry::with_config(config);
    assert_eq!(registry.get_by_name::<String>("greeting")?, "Hi");

    registry.populate()?;
    assert!(registry.is_sealed());
    assert!(matches!(
        registry.bind_value(1u32),
        Err(RegistryError::Sealed { .. })
    ));
    Ok(())
}

#[test]
fn test_registry_as_locator() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    bind_injected(&mut registry)?;

    let locator: &dyn ServiceLocator = &registry;
    let a: Arc<Injected> = locator.get_by_type()?;
    let b: Arc<Injected> = locator.get_by_name("ServiceByName")?;
    assert_eq!((a.name.as_str(), b.name.as_str()), ("A", "B"));
    Ok(())
}
