use crate::{
    api::{TernaryMul, TernaryMulIndices, TernaryMulSparse, TernaryMulTmpBytes},
    layouts::{Backend, Module, Scratch, SparseTernary, TernaryCoeffs, TernaryIndices, Znx8ToMut, Znx8ToRef},
    oep::{TernaryMulImpl, TernaryMulIndicesImpl, TernaryMulTmpBytesImpl},
};

impl<B> TernaryMulTmpBytes for Module<B>
where
    B: Backend + TernaryMulTmpBytesImpl<B>,
{
    fn ternary_mul_tmp_bytes(&self) -> usize {
        B::ternary_mul_tmp_bytes_impl(self)
    }
}

impl<B> TernaryMul<B> for Module<B>
where
    B: Backend + TernaryMulImpl<B>,
{
    fn ternary_mul<R, A>(&self, res: &mut R, a: &A, b: &TernaryCoeffs, scratch: &mut Scratch<B>)
    where
        R: Znx8ToMut,
        A: Znx8ToRef,
    {
        B::ternary_mul_impl(self, res, a, b, scratch)
    }
}

impl<B> TernaryMulIndices<B> for Module<B>
where
    B: Backend + TernaryMulIndicesImpl<B>,
{
    fn ternary_mul_indices<R, A>(&self, res: &mut R, a: &A, b: &TernaryIndices, scratch: &mut Scratch<B>)
    where
        R: Znx8ToMut,
        A: Znx8ToRef,
    {
        B::ternary_mul_indices_impl(self, res, a, b, scratch)
    }
}

impl<B> TernaryMulSparse<B> for Module<B>
where
    B: Backend + TernaryMulImpl<B> + TernaryMulIndicesImpl<B>,
{
    fn ternary_mul_sparse<R, A>(&self, res: &mut R, a: &A, b: &SparseTernary, scratch: &mut Scratch<B>)
    where
        R: Znx8ToMut,
        A: Znx8ToRef,
    {
        match b {
            SparseTernary::Coeffs(b) => B::ternary_mul_impl(self, res, a, b, scratch),
            SparseTernary::Indices(b) => B::ternary_mul_indices_impl(self, res, a, b, scratch),
        }
    }
}
