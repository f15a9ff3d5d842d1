use di_abstractions::Injectable;

#[derive(Default, Injectable)]
struct OkRecord {
    #[inject]
    by_type: String,
    #[inject(name = "")]
    empty_name: u32,
    plain: bool,
}

#[derive(Injectable)]
struct NothingToInject {
    value: u8,
}

fn main() {
    let points = OkRecord::injection_points();
    assert_eq!(points.len(), 2);
    assert!(points.iter().all(|p| p.name.is_none()));
    assert!(NothingToInject::injection_points().is_empty());

    let record = OkRecord::default();
    assert!(!record.plain);
    let _ = (record.by_type, record.empty_name, NothingToInject { value: 1 }.value);
}
