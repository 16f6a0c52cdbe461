use proptest::prelude::*;
use ternpoly_hal::{
    RING_DEGREE, TERNARY_HALF_WEIGHT, TERNARY_WEIGHT,
    api::{ModuleNew, ScratchOwnedAlloc, ScratchOwnedBorrow, TernaryMul, TernaryMulIndices, TernaryMulTmpBytes},
    backend_test_suite,
    layouts::{Module, ScratchOwned, TernaryCoeffs, TernaryIndices, TernaryTerm, Znx8, Znx8Owned},
};

use crate::TernaryRef;

backend_test_suite! {
    mod ring_degree_512,
    backend = crate::TernaryRef,
    size = 512,
    tests = {
        test_ternary_mul_indices => ternpoly_hal::test_suite::ternary::test_ternary_mul_indices,
        test_ternary_mul_schoolbook => ternpoly_hal::test_suite::ternary::test_ternary_mul_schoolbook,
        test_ternary_mul_shift => ternpoly_hal::test_suite::ternary::test_ternary_mul_shift,
        test_ternary_mul_unit_operand => ternpoly_hal::test_suite::ternary::test_ternary_mul_unit_operand,
        test_ternary_mul_all_ones => ternpoly_hal::test_suite::ternary::test_ternary_mul_all_ones,
        test_ternary_mul_negation => ternpoly_hal::test_suite::ternary::test_ternary_mul_negation,
        test_ternary_mul_permutation => ternpoly_hal::test_suite::ternary::test_ternary_mul_permutation,
        test_ternary_mul_sparse => ternpoly_hal::test_suite::ternary::test_ternary_mul_sparse,
        test_ternary_mul_concurrent => ternpoly_hal::test_suite::ternary::test_ternary_mul_concurrent,
    }
}

backend_test_suite! {
    mod ring_degree_32,
    backend = crate::TernaryRef,
    size = 32,
    tests = {
        test_ternary_mul_indices => ternpoly_hal::test_suite::ternary::test_ternary_mul_indices,
        test_ternary_mul_schoolbook => ternpoly_hal::test_suite::ternary::test_ternary_mul_schoolbook,
        test_ternary_mul_shift => ternpoly_hal::test_suite::ternary::test_ternary_mul_shift,
        test_ternary_mul_all_ones => ternpoly_hal::test_suite::ternary::test_ternary_mul_all_ones,
        test_ternary_mul_negation => ternpoly_hal::test_suite::ternary::test_ternary_mul_negation,
    }
}

#[test]
#[should_panic(expected = "lane width")]
fn module_rejects_sub_lane_degree() {
    let _ = Module::<TernaryRef>::new(16);
}

#[test]
fn tmp_bytes_covers_two_n() {
    let module: Module<TernaryRef> = Module::<TernaryRef>::new(RING_DEGREE as u64);
    assert!(module.ternary_mul_tmp_bytes() >= 2 * RING_DEGREE);
}

#[test]
#[should_panic(expected = "Attempted to take")]
fn undersized_scratch_panics() {
    let module: Module<TernaryRef> = Module::<TernaryRef>::new(64);
    let mut scratch: ScratchOwned<TernaryRef> = ScratchOwned::alloc(16);
    let a: Znx8Owned = Znx8::alloc(64);
    let mut res: Znx8Owned = Znx8::alloc(64);
    let b: TernaryCoeffs = TernaryCoeffs::new(vec![TernaryTerm::pos(0)]);
    module.ternary_mul(&mut res, &a, &b, scratch.borrow());
}

#[test]
#[should_panic(expected = "a.n()=32 != res.n()=64")]
fn short_dense_operand_panics() {
    let module: Module<TernaryRef> = Module::<TernaryRef>::new(64);
    let mut scratch: ScratchOwned<TernaryRef> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());
    let backing: Vec<u8> = vec![1; 64];
    let a: Znx8<&[u8]> = Znx8::from_data(&backing[..32], 32);
    let mut res: Znx8Owned = Znx8::alloc(64);
    let b: TernaryIndices = TernaryIndices::new(
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        [10, 11, 12, 13, 14, 15, 16, 17, 18, 19],
    );
    module.ternary_mul_indices(&mut res, &a, &b, scratch.borrow());
}

prop_compose! {
    fn binary_poly(n: usize)(coeffs in proptest::collection::vec(0i8..=1, n)) -> Znx8Owned {
        Znx8::from_i8(&coeffs)
    }
}

prop_compose! {
    fn canonical_operand(n: usize)(
        exps in proptest::sample::subsequence((0..n).collect::<Vec<usize>>(), TERNARY_WEIGHT).prop_shuffle()
    ) -> TernaryIndices {
        let mut pos: [usize; TERNARY_HALF_WEIGHT] = [0; TERNARY_HALF_WEIGHT];
        let mut neg: [usize; TERNARY_HALF_WEIGHT] = [0; TERNARY_HALF_WEIGHT];
        pos.copy_from_slice(&exps[..TERNARY_HALF_WEIGHT]);
        neg.copy_from_slice(&exps[TERNARY_HALF_WEIGHT..]);
        TernaryIndices::new(pos, neg)
    }
}

proptest! {
    #[test]
    fn lane_kernel_matches_scalar_kernel(a in binary_poly(RING_DEGREE), b in canonical_operand(RING_DEGREE)) {
        let module: Module<TernaryRef> = Module::<TernaryRef>::new(RING_DEGREE as u64);
        let mut scratch: ScratchOwned<TernaryRef> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());
        let mut c_want: Znx8Owned = Znx8::alloc(RING_DEGREE);
        let mut c_have: Znx8Owned = Znx8::alloc(RING_DEGREE);

        module.ternary_mul(&mut c_want, &a, &TernaryCoeffs::from(&b), scratch.borrow());
        module.ternary_mul_indices(&mut c_have, &a, &b, scratch.borrow());

        prop_assert_eq!(c_want, c_have);
    }

    #[test]
    fn term_order_is_irrelevant(
        a in binary_poly(RING_DEGREE),
        b in canonical_operand(RING_DEGREE),
        rot in 0..TERNARY_WEIGHT,
    ) {
        let module: Module<TernaryRef> = Module::<TernaryRef>::new(RING_DEGREE as u64);
        let mut scratch: ScratchOwned<TernaryRef> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());
        let mut c_want: Znx8Owned = Znx8::alloc(RING_DEGREE);
        let mut c_have: Znx8Owned = Znx8::alloc(RING_DEGREE);

        let b: TernaryCoeffs = TernaryCoeffs::from(&b);
        let mut terms: Vec<TernaryTerm> = b.terms().to_vec();
        terms.rotate_left(rot);

        module.ternary_mul(&mut c_want, &a, &b, scratch.borrow());
        module.ternary_mul(&mut c_have, &a, &TernaryCoeffs::new(terms), scratch.borrow());

        prop_assert_eq!(c_want, c_have);
    }
}
