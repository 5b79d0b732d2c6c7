//! # Dealer Registry Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | Credential | PIN hashing and constant-time verification |
//! | Lifecycle | Create on an in-memory ledger |
//! | Queries | Full scan and per-key history at growing ledger sizes |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dr_01_asset_registry::{hash_pin, verify_pin, AssetRegistryApi, PlaintextPin, RegistryConfig};
use dr_tests::fixtures::{privileged, registry, request};

fn bench_credential(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-01-credential");
    let pin = PlaintextPin::new("482913");
    let digest = hash_pin(&pin);

    group.bench_function("hash_pin", |b| b.iter(|| black_box(hash_pin(&pin))));
    group.bench_function("verify_pin", |b| {
        b.iter(|| black_box(verify_pin(&pin, &digest)))
    });
    group.finish();
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-01-lifecycle");
    group.bench_function("create_asset", |b| {
        let (svc, _) = registry(RegistryConfig::default());
        let mut n = 0u64;
        b.iter(|| {
            n += 1;
            let id = format!("DLR{n:08}");
            svc.create_asset(&privileged(), request(&id, "919000000000", "1234", 0.0, "ACTIVE"))
                .unwrap();
        })
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-01-queries");

    for size in [100u64, 1_000, 10_000] {
        let (svc, _) = registry(RegistryConfig::default());
        for i in 0..size {
            let id = format!("DLR{i:06}");
            svc.create_asset(&privileged(), request(&id, "919000000000", "1234", 0.0, "ACTIVE"))
                .unwrap();
        }
        for _ in 0..10 {
            svc.update_asset(
                &privileged(),
                request("DLR000000", "919000000000", "1234", 1.0, "ACTIVE"),
            )
            .unwrap();
        }

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("get_all_assets", size), &svc, |b, svc| {
            b.iter(|| black_box(svc.get_all_assets().unwrap().len()))
        });
        group.bench_with_input(BenchmarkId::new("get_asset_history", size), &svc, |b, svc| {
            b.iter(|| black_box(svc.get_asset_history("DLR000000").unwrap().len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_credential, bench_create, bench_queries);
criterion_main!(benches);
