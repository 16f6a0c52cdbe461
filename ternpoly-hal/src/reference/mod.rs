//! Pure-Rust reference kernels.
//!
//! [`znx`] holds the slice-level kernels and the kernel traits backends implement.
//! The functions re-exported at this level adapt them to [`Znx8`](crate::layouts::Znx8)
//! operands and are what backend `oep` implementations call.

pub mod znx;

mod ternary;

pub use ternary::*;
