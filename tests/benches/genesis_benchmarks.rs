//! # Genesis Pipeline Benchmarks
//!
//! Assembly and validation run once per node start, bounded by
//! accounts × bootstrap transactions.
//!
//! | Stage | Input |
//! |-------|-------|
//! | assemble | 1..100 bootstrap txs |
//! | validate | 100..10 000 accounts |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use genesis_core::{validate_genesis_state, GenesisAssembler, JsonTxDecoder};
use genesis_tests::fixtures::{default_document, gentx_batch, plain_account};

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("genesis-assemble");
    let doc = default_document();

    for size in [1u32, 10, 100] {
        let batch = gentx_batch(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("gentxs", size), &batch, |b, batch| {
            let assembler = GenesisAssembler::new(JsonTxDecoder);
            b.iter(|| black_box(assembler.assemble(&doc, batch.clone()).is_ok()))
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("genesis-validate");

    for size in [100u32, 1_000, 10_000] {
        let mut state = genesis_core::build_default();
        state.accounts = (0..size).map(|n| plain_account(n, 1_000)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("accounts", size), &state, |b, state| {
            b.iter(|| black_box(validate_genesis_state(state).is_ok()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_assemble, bench_validate);
criterion_main!(benches);
