use ternpoly_hal::{
    api::{TakeSlice, TernaryMulTmpBytes},
    layouts::{Backend, Module, Scratch, TernaryCoeffs, TernaryIndices, Znx8ToMut, Znx8ToRef},
    oep::{TernaryMulImpl, TernaryMulIndicesImpl, TernaryMulTmpBytesImpl},
    reference::{ternary_mul, ternary_mul_indices, ternary_mul_tmp_bytes},
};

use crate::TernaryRef;

unsafe impl TernaryMulTmpBytesImpl<Self> for TernaryRef {
    fn ternary_mul_tmp_bytes_impl(module: &Module<Self>) -> usize {
        ternary_mul_tmp_bytes(module.n(), Self::lane_bytes())
    }
}

unsafe impl TernaryMulImpl<Self> for TernaryRef
where
    Scratch<Self>: TakeSlice,
{
    fn ternary_mul_impl<R, A>(module: &Module<Self>, res: &mut R, a: &A, b: &TernaryCoeffs, scratch: &mut Scratch<Self>)
    where
        R: Znx8ToMut,
        A: Znx8ToRef,
    {
        let (tmp, _) = scratch.take_slice(module.ternary_mul_tmp_bytes());
        ternary_mul::<R, A, Self>(res, a, b, tmp);
    }
}

unsafe impl TernaryMulIndicesImpl<Self> for TernaryRef
where
    Scratch<Self>: TakeSlice,
{
    fn ternary_mul_indices_impl<R, A>(
        module: &Module<Self>,
        res: &mut R,
        a: &A,
        b: &TernaryIndices,
        scratch: &mut Scratch<Self>,
    ) where
        R: Znx8ToMut,
        A: Znx8ToRef,
    {
        let (tmp, _) = scratch.take_slice(module.ternary_mul_tmp_bytes());
        ternary_mul_indices::<R, A, Self>(res, a, b, tmp);
    }
}
