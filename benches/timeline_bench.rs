use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queue_sim::engine::run_simulation;
use queue_sim::models::{ModelConfig, SimConfig};

const SERVERS: u32 = 4;
const CUSTOMERS: [u32; 3] = [100, 1_000, 10_000];

fn build_config(customers: u32) -> SimConfig {
    SimConfig {
        servers: SERVERS,
        customers,
        arrival_rate: 2.0,
        service_rate: 3.0,
        model: ModelConfig::Mmc,
        seed: Some(42),
    }
}

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");

    for customers in CUSTOMERS {
        let size_label = format!("{}x{}", customers, SERVERS);
        group.bench_with_input(
            BenchmarkId::new("generate", &size_label),
            &customers,
            |b, &customers| {
                let config = build_config(customers);
                b.iter(|| {
                    let result = run_simulation(&config).expect("simulation should succeed");
                    black_box(result);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_timeline);
criterion_main!(benches);
