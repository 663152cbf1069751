use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use models::NewContact;
use service::contacts::ContactService;
use service::storage::JsonFileStore;

fn bench_contacts(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let path = std::env::temp_dir().join(format!("contacts_bench_{}.json", uuid::Uuid::new_v4()));
    let svc = ContactService::new(Arc::new(JsonFileStore::new(&path)));

    // seed a document of realistic size outside of the measured loop
    for id in 1..=200 {
        let input = NewContact { id, name: format!("Contact {id:03}"), phone: format!("555-{:04}", 10_000 - id) };
        rt.block_on(svc.create(input)).unwrap();
    }

    c.bench_function("contacts_sort_by_phone", |b| {
        b.iter(|| rt.block_on(svc.sort("phone", Some("desc"))).unwrap());
    });

    let mut next_id = 1_000;
    c.bench_function("contacts_create_delete", |b| {
        b.iter(|| {
            next_id += 1;
            let input = NewContact { id: next_id, name: "Bench".into(), phone: "555-0000".into() };
            rt.block_on(svc.create(input)).unwrap();
            rt.block_on(svc.delete(next_id)).unwrap();
        });
    });

    let _ = std::fs::remove_file(&path);
}

criterion_group!(benches, bench_contacts);
criterion_main!(benches);
