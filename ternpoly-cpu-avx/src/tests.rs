use ternpoly_cpu_ref::TernaryRef;
use ternpoly_hal::{
    api::{ModuleNew, ScratchOwnedAlloc, ScratchOwnedBorrow, TernaryMulIndices, TernaryMulTmpBytes},
    layouts::{Module, ScratchOwned, TernaryIndices, Znx8, Znx8Owned},
    test_suite::ternary,
};

use crate::TernaryAvx;

fn avx_module(n: u64) -> Option<Module<TernaryAvx>> {
    if !std::arch::is_x86_feature_detected!("avx2") {
        eprintln!("skipping: avx2 not detected");
        return None;
    }
    Some(Module::<TernaryAvx>::new(n))
}

macro_rules! avx_test_suite {
    (
        size = $size:expr,
        tests = { $( $test_name:ident => $impl:path ),+ $(,)? }
    ) => {
        $(
            #[test]
            fn $test_name() {
                if let Some(module) = avx_module($size) {
                    ($impl)(&module);
                }
            }
        )+
    };
}

macro_rules! avx_cross_test_suite {
    (
        size = $size:expr,
        tests = { $( $test_name:ident => $impl:path ),+ $(,)? }
    ) => {
        $(
            #[test]
            fn $test_name() {
                if let Some(module_test) = avx_module($size) {
                    let module_ref: Module<TernaryRef> = Module::<TernaryRef>::new($size);
                    ($impl)(&module_ref, &module_test);
                }
            }
        )+
    };
}

avx_test_suite! {
    size = 512,
    tests = {
        test_ternary_mul_indices_cpu_avx => ternary::test_ternary_mul_indices,
        test_ternary_mul_schoolbook_cpu_avx => ternary::test_ternary_mul_schoolbook,
        test_ternary_mul_shift_cpu_avx => ternary::test_ternary_mul_shift,
        test_ternary_mul_unit_operand_cpu_avx => ternary::test_ternary_mul_unit_operand,
        test_ternary_mul_all_ones_cpu_avx => ternary::test_ternary_mul_all_ones,
        test_ternary_mul_negation_cpu_avx => ternary::test_ternary_mul_negation,
        test_ternary_mul_permutation_cpu_avx => ternary::test_ternary_mul_permutation,
        test_ternary_mul_sparse_cpu_avx => ternary::test_ternary_mul_sparse,
        test_ternary_mul_concurrent_cpu_avx => ternary::test_ternary_mul_concurrent,
    }
}

avx_cross_test_suite! {
    size = 512,
    tests = {
        test_ternary_mul_indices_cross_cpu_avx => ternary::test_ternary_mul_indices_cross,
        test_ternary_mul_cross_cpu_avx => ternary::test_ternary_mul_cross,
    }
}

avx_cross_test_suite! {
    size = 64,
    tests = {
        test_ternary_mul_indices_cross_cpu_avx_n64 => ternary::test_ternary_mul_indices_cross,
    }
}

#[test]
fn short_dense_operand_panics_cpu_avx() {
    let Some(module) = avx_module(64) else {
        return;
    };

    let backing: Vec<u8> = vec![1; 64];
    let b: TernaryIndices = TernaryIndices::new(
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        [10, 11, 12, 13, 14, 15, 16, 17, 18, 19],
    );

    // Bytes of `backing` past 32 lie outside `a` and must never be read.
    let result = std::panic::catch_unwind(|| {
        let mut scratch: ScratchOwned<TernaryAvx> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());
        let a: Znx8<&[u8]> = Znx8::from_data(&backing[..32], 32);
        let mut res: Znx8Owned = Znx8::alloc(64);
        module.ternary_mul_indices(&mut res, &a, &b, scratch.borrow());
    });
    assert!(result.is_err());
}
