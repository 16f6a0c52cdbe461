use crate::layouts::{Backend, Scratch, SparseTernary, TernaryCoeffs, TernaryIndices, Znx8ToMut, Znx8ToRef};

/// Returns the number of scratch bytes required by [`TernaryMul`],
/// [`TernaryMulIndices`] and [`TernaryMulSparse`].
pub trait TernaryMulTmpBytes {
    fn ternary_mul_tmp_bytes(&self) -> usize;
}

pub trait TernaryMul<B: Backend> {
    /// Sets `res` to `a * b` in `Z[X]/(X^N + 1)`, where `b` is a sparse ternary
    /// polynomial in general form.
    ///
    /// `a` is expected to be binary and the exponents of `b` distinct and in `[0, N)`.
    /// Coefficients are accumulated with 8-bit wrapping arithmetic.
    fn ternary_mul<R, A>(&self, res: &mut R, a: &A, b: &TernaryCoeffs, scratch: &mut Scratch<B>)
    where
        R: Znx8ToMut,
        A: Znx8ToRef;
}

pub trait TernaryMulIndices<B: Backend> {
    /// Sets `res` to `a * b` in `Z[X]/(X^N + 1)`, where `b` is a sparse ternary
    /// polynomial in canonical form.
    ///
    /// Produces the same coefficients as [`TernaryMul::ternary_mul`] called with
    /// `TernaryCoeffs::from(b)`.
    fn ternary_mul_indices<R, A>(&self, res: &mut R, a: &A, b: &TernaryIndices, scratch: &mut Scratch<B>)
    where
        R: Znx8ToMut,
        A: Znx8ToRef;
}

pub trait TernaryMulSparse<B: Backend> {
    /// Sets `res` to `a * b`, dispatching on the encoding of `b`.
    fn ternary_mul_sparse<R, A>(&self, res: &mut R, a: &A, b: &SparseTernary, scratch: &mut Scratch<B>)
    where
        R: Znx8ToMut,
        A: Znx8ToRef;
}
