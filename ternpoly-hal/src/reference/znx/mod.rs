mod fold;
mod schoolbook;
mod ternary_mul;

pub use fold::*;
pub use schoolbook::*;
pub use ternary_mul::*;

use crate::layouts::TernaryTerm;

pub trait ZnxTernaryMul {
    fn znx_ternary_mul(res: &mut [i8], tmp: &mut [i8], a: &[i8], b: &[TernaryTerm]);
}

pub trait ZnxTernaryMulIndices {
    fn znx_ternary_mul_indices(res: &mut [i8], tmp: &mut [i8], a: &[i8], pos: &[usize], neg: &[usize]);
}
