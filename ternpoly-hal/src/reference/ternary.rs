use crate::{
    layouts::{TernaryCoeffs, TernaryIndices, Znx8, Znx8ToMut, Znx8ToRef},
    reference::znx::{ZnxTernaryMul, ZnxTernaryMulIndices},
};

/// Scratch bytes required by [`ternary_mul`] and [`ternary_mul_indices`] for
/// ring degree `n` on a backend with `lane_bytes`-byte lanes.
///
/// The accumulator spans `2n` bytes; one extra lane keeps every window of a
/// wider backend kernel inside the buffer.
pub fn ternary_mul_tmp_bytes(n: usize, lane_bytes: usize) -> usize {
    (n << 1) + lane_bytes
}

pub fn ternary_mul<R, A, ZNX>(res: &mut R, a: &A, b: &TernaryCoeffs, tmp: &mut [i8])
where
    R: Znx8ToMut,
    A: Znx8ToRef,
    ZNX: ZnxTernaryMul,
{
    let a: Znx8<&[u8]> = a.to_ref();
    let mut res: Znx8<&mut [u8]> = res.to_mut();

    assert_eq!(a.n(), res.n(), "a.n()={} != res.n()={}", a.n(), res.n());

    #[cfg(debug_assertions)]
    {
        if let Err(e) = b.check(res.n()) {
            panic!("invalid sparse operand: {e}")
        }
    }

    ZNX::znx_ternary_mul(res.coeffs_mut(), tmp, a.coeffs(), b.terms());
}

pub fn ternary_mul_indices<R, A, ZNX>(res: &mut R, a: &A, b: &TernaryIndices, tmp: &mut [i8])
where
    R: Znx8ToMut,
    A: Znx8ToRef,
    ZNX: ZnxTernaryMulIndices,
{
    let a: Znx8<&[u8]> = a.to_ref();
    let mut res: Znx8<&mut [u8]> = res.to_mut();

    assert_eq!(a.n(), res.n(), "a.n()={} != res.n()={}", a.n(), res.n());

    #[cfg(debug_assertions)]
    {
        if let Err(e) = b.check(res.n()) {
            panic!("invalid sparse operand: {e}")
        }
    }

    ZNX::znx_ternary_mul_indices(res.coeffs_mut(), tmp, a.coeffs(), b.pos(), b.neg());
}
