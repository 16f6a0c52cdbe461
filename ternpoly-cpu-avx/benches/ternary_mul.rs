use criterion::{Criterion, criterion_group, criterion_main};
use ternpoly_cpu_avx::TernaryAvx;
use ternpoly_hal::bench_suite::ternary::{bench_ternary_mul, bench_ternary_mul_indices};

fn bench_ternary_mul_cpu_avx(c: &mut Criterion) {
    if !std::arch::is_x86_feature_detected!("avx2") {
        eprintln!("Skipping: ternary_mul::cpu_avx requires AVX2");
        return;
    }
    bench_ternary_mul::<TernaryAvx>(c, "cpu_avx");
}

fn bench_ternary_mul_indices_cpu_avx(c: &mut Criterion) {
    if !std::arch::is_x86_feature_detected!("avx2") {
        eprintln!("Skipping: ternary_mul_indices::cpu_avx requires AVX2");
        return;
    }
    bench_ternary_mul_indices::<TernaryAvx>(c, "cpu_avx");
}

criterion_group!(benches, bench_ternary_mul_cpu_avx, bench_ternary_mul_indices_cpu_avx);
criterion_main!(benches);
