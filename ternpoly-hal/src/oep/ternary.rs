use crate::layouts::{Backend, Module, Scratch, TernaryCoeffs, TernaryIndices, Znx8ToMut, Znx8ToRef};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::ternary_mul_tmp_bytes] for reference code.
/// * See [crate::api::TernaryMulTmpBytes] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait TernaryMulTmpBytesImpl<B: Backend> {
    fn ternary_mul_tmp_bytes_impl(module: &Module<B>) -> usize;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::ternary_mul] for reference code.
/// * See [crate::api::TernaryMul] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait TernaryMulImpl<B: Backend> {
    fn ternary_mul_impl<R, A>(module: &Module<B>, res: &mut R, a: &A, b: &TernaryCoeffs, scratch: &mut Scratch<B>)
    where
        R: Znx8ToMut,
        A: Znx8ToRef;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::ternary_mul_indices] for reference code.
/// * See [crate::api::TernaryMulIndices] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait TernaryMulIndicesImpl<B: Backend> {
    fn ternary_mul_indices_impl<R, A>(module: &Module<B>, res: &mut R, a: &A, b: &TernaryIndices, scratch: &mut Scratch<B>)
    where
        R: Znx8ToMut,
        A: Znx8ToRef;
}
