use ternpoly_hal::{
    layouts::TernaryTerm,
    reference::znx::{ZnxTernaryMul, ZnxTernaryMulIndices, znx_ternary_mul_indices_ref, znx_ternary_mul_ref},
};

use crate::TernaryRef;

impl ZnxTernaryMul for TernaryRef {
    #[inline(always)]
    fn znx_ternary_mul(res: &mut [i8], tmp: &mut [i8], a: &[i8], b: &[TernaryTerm]) {
        znx_ternary_mul_ref(res, tmp, a, b);
    }
}

impl ZnxTernaryMulIndices for TernaryRef {
    #[inline(always)]
    fn znx_ternary_mul_indices(res: &mut [i8], tmp: &mut [i8], a: &[i8], pos: &[usize], neg: &[usize]) {
        znx_ternary_mul_indices_ref(res, tmp, a, pos, neg);
    }
}
