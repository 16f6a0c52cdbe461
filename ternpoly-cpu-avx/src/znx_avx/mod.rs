mod ternary_mul;

pub use ternary_mul::*;
