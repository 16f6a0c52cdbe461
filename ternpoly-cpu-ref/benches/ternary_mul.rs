use criterion::{Criterion, criterion_group, criterion_main};
use ternpoly_cpu_ref::TernaryRef;
use ternpoly_hal::bench_suite::ternary::{bench_ternary_mul, bench_ternary_mul_indices};

fn bench_ternary_mul_cpu_ref(c: &mut Criterion) {
    bench_ternary_mul::<TernaryRef>(c, "cpu_ref");
}

fn bench_ternary_mul_indices_cpu_ref(c: &mut Criterion) {
    bench_ternary_mul_indices::<TernaryRef>(c, "cpu_ref");
}

criterion_group!(benches, bench_ternary_mul_cpu_ref, bench_ternary_mul_indices_cpu_ref);
criterion_main!(benches);
