//! 注入宏集成测试

use di_abstractions::{Injectable, Instance, RegistryError, TypeInfo};
use di_impl::Registry;
use std::sync::Arc;

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

struct FixedClock(u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

/// 测试服务
#[derive(Default, Injectable)]
pub struct TestService {
    #[inject]
    name: String,
    #[inject("timeout")]
    timeout: u64,
    #[inject(name = "max_connections")]
    max_connections: usize,
    initialized: bool,
}

#[derive(Injectable)]
struct WithTrait {
    #[inject("clock")]
    clock: Arc<dyn Clock>,
}

#[derive(Default, Injectable)]
struct Generic<T: Clone + Default + Send + Sync + 'static> {
    #[inject]
    value: T,
}

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.bind_value("test".to_string()).unwrap();
    registry
        .bind_with_name("timeout", Instance::new(30u64))
        .unwrap();
    registry
        .bind_with_name("max_connections", Instance::new(100usize))
        .unwrap();
    registry
}

#[test]
fn test_injection_points_follow_declaration_order() {
    let points = TestService::injection_points();
    let fields: Vec<&str> = points.iter().map(|p| p.field).collect();
    assert_eq!(fields, vec!["name", "timeout", "max_connections"]);

    assert_eq!(points[0].name, None);
    assert_eq!(points[0].field_type, TypeInfo::of::<String>());
    assert_eq!(points[1].name, Some("timeout"));
    assert_eq!(points[2].name, Some("max_connections"));
}

#[test]
fn test_derived_inject_fields() {
    let mut service = TestService::default();
    registry().inject_fields(&mut service).unwrap();

    assert_eq!(service.name, "test");
    assert_eq!(service.timeout, 30);
    assert_eq!(service.max_connections, 100);
    assert!(!service.initialized);
}

#[test]
fn test_named_field_is_type_checked() {
    let mut registry = registry();
    registry
        .bind_with_name("timeout", Instance::new("thirty".to_string()))
        .unwrap();

    let mut service = TestService::default();
    let err = registry.inject_fields(&mut service).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidInjectionType { .. }));
    assert_eq!(service.name, "test");
    assert_eq!(service.timeout, 0);
}

#[test]
fn test_trait_object_field() {
    let mut registry = Registry::new();
    registry
        .bind_with_name(
            "clock",
            Instance::builder(Arc::new(FixedClock(42)))
                .capability(|c| -> Arc<dyn Clock> { c.clone() })
                .build(),
        )
        .unwrap();

    let mut holder = WithTrait {
        clock: Arc::new(FixedClock(0)),
    };
    registry.inject_fields(&mut holder).unwrap();
    assert_eq!(holder.clock.now(), 42);
}

#[test]
fn test_generic_struct() {
    let mut registry = Registry::new();
    registry.bind_value(9i32).unwrap();

    let mut holder = Generic::<i32>::default();
    registry.inject_fields(&mut holder).unwrap();
    assert_eq!(holder.value, 9);
    assert_eq!(
        Generic::<i32>::injection_points()[0].field_type,
        TypeInfo::of::<i32>()
    );
}
