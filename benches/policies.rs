//! Throughput benches for the online policies and the flow oracle.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use policylab::{make_items, McfOpt, Policy, PolicyKind, ReplacementPolicy, Trace};

/// A cyclic trace over `distinct` items, the adversarial pattern for
/// recency-based policies.
fn cyclic_trace(distinct: usize, accesses: usize) -> Trace {
    let costs: Vec<u64> = (1..=distinct as u64).collect();
    let items = make_items(&costs);
    (0..accesses).map(|i| items[i % distinct].clone()).collect()
}

fn bench_policies(c: &mut Criterion) {
    let trace = cyclic_trace(8, 10_000);
    let mut group = c.benchmark_group("policy_run");

    for kind in PolicyKind::ALL {
        group.bench_function(format!("{kind:?}"), |b| {
            b.iter(|| {
                let mut policy = Policy::new(kind, 4).unwrap();
                black_box(policy.run(black_box(&trace)))
            })
        });
    }
    group.finish();
}

fn bench_flow_oracle(c: &mut Criterion) {
    let trace = cyclic_trace(8, 200);
    c.bench_function("mcf_opt_run", |b| {
        let oracle = McfOpt::new(4).unwrap();
        b.iter(|| black_box(oracle.run(black_box(&trace))))
    });
}

criterion_group!(benches, bench_policies, bench_flow_oracle);
criterion_main!(benches);
