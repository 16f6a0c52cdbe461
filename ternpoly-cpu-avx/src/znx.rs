use ternpoly_hal::{
    layouts::TernaryTerm,
    reference::znx::{ZnxTernaryMul, ZnxTernaryMulIndices, znx_ternary_mul_ref},
};

use crate::TernaryAvx;

impl ZnxTernaryMul for TernaryAvx {
    #[inline(always)]
    fn znx_ternary_mul(res: &mut [i8], tmp: &mut [i8], a: &[i8], b: &[TernaryTerm]) {
        znx_ternary_mul_ref(res, tmp, a, b);
    }
}

impl ZnxTernaryMulIndices for TernaryAvx {
    #[inline(always)]
    fn znx_ternary_mul_indices(res: &mut [i8], tmp: &mut [i8], a: &[i8], pos: &[usize], neg: &[usize]) {
        #[cfg(target_arch = "x86_64")]
        {
            // SAFETY: a `Module<TernaryAvx>` only exists once AVX2 has been detected.
            unsafe { crate::znx_avx::znx_ternary_mul_indices_avx(res, tmp, a, pos, neg) }
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            ternpoly_hal::reference::znx::znx_ternary_mul_indices_ref(res, tmp, a, pos, neg)
        }
    }
}
