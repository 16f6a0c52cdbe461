use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::{
    TERNARY_WEIGHT,
    api::{ModuleNew, ScratchOwnedAlloc, ScratchOwnedBorrow, TernaryMul, TernaryMulIndices, TernaryMulTmpBytes},
    layouts::{Backend, Module, ScratchOwned, TernaryCoeffs, TernaryIndices, Znx8, Znx8Owned},
    source::Source,
};

const LOG_N: [usize; 4] = [8, 9, 10, 11];

pub fn bench_ternary_mul<BE: Backend>(c: &mut Criterion, label: &str)
where
    Module<BE>: ModuleNew<BE> + TernaryMul<BE> + TernaryMulTmpBytes,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
{
    let group_name: String = format!("ternary_mul::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<BE: Backend>(n: usize) -> impl FnMut()
    where
        Module<BE>: ModuleNew<BE> + TernaryMul<BE> + TernaryMulTmpBytes,
        ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
    {
        let mut source: Source = Source::new([0u8; 32]);

        let module: Module<BE> = Module::<BE>::new(n as u64);

        let mut a: Znx8Owned = Znx8::alloc(n);
        let mut res: Znx8Owned = Znx8::alloc(n);
        a.fill_binary(&mut source);
        let b: TernaryCoeffs = TernaryCoeffs::sample(n, TERNARY_WEIGHT, &mut source);

        let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());

        move || {
            module.ternary_mul(&mut res, &a, &b, scratch.borrow());
            black_box(&res);
        }
    }

    for log_n in LOG_N {
        let id: BenchmarkId = BenchmarkId::from_parameter(1 << log_n);
        let mut runner = runner::<BE>(1 << log_n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

pub fn bench_ternary_mul_indices<BE: Backend>(c: &mut Criterion, label: &str)
where
    Module<BE>: ModuleNew<BE> + TernaryMulIndices<BE> + TernaryMulTmpBytes,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
{
    let group_name: String = format!("ternary_mul_indices::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<BE: Backend>(n: usize) -> impl FnMut()
    where
        Module<BE>: ModuleNew<BE> + TernaryMulIndices<BE> + TernaryMulTmpBytes,
        ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
    {
        let mut source: Source = Source::new([0u8; 32]);

        let module: Module<BE> = Module::<BE>::new(n as u64);

        let mut a: Znx8Owned = Znx8::alloc(n);
        let mut res: Znx8Owned = Znx8::alloc(n);
        a.fill_binary(&mut source);
        let b: TernaryIndices = TernaryIndices::sample(n, &mut source);

        let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());

        move || {
            module.ternary_mul_indices(&mut res, &a, &b, scratch.borrow());
            black_box(&res);
        }
    }

    for log_n in LOG_N {
        let id: BenchmarkId = BenchmarkId::from_parameter(1 << log_n);
        let mut runner = runner::<BE>(1 << log_n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}
