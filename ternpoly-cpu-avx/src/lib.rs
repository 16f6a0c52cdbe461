//! AVX2-accelerated CPU backend for [`ternpoly_hal`].
//!
//! This crate provides [`TernaryAvx`], whose canonical-form product
//! ([`TernaryMulIndices`](ternpoly_hal::api::TernaryMulIndices)) runs on 256-bit
//! registers: each 32-byte lane of the dense operand is loaded once and
//! added to (or subtracted from) the 32-byte accumulator window of every exponent
//! with `_mm256_add_epi8` / `_mm256_sub_epi8`. The general-form product uses the
//! scalar reference kernel.
//!
//! # CPU requirements
//!
//! This backend **requires** an x86-64 CPU with AVX2. Runtime feature detection
//! is performed in [`Module::new()`](ternpoly_hal::api::ModuleNew::new); if AVX2 is
//! missing the constructor logs an error and panics.
//!
//! # Correctness guarantees
//!
//! Results are **bit-identical** to `ternpoly-cpu-ref`: both backends accumulate
//! with 8-bit wrapping arithmetic, so they agree even on operands outside the
//! binary/ternary contract.
//!
//! # Threading and concurrency
//!
//! - **`TernaryAvx` is `Send + Sync`**: zero-sized marker type, no internal state.
//! - **Operations require `&mut` for outputs and scratch**: concurrent calls need
//!   distinct result and scratch buffers.

mod module;
mod scratch;
mod ternary;
mod znx;
#[cfg(target_arch = "x86_64")]
mod znx_avx;

#[cfg(all(test, target_arch = "x86_64"))]
mod tests;

#[cfg(target_arch = "x86_64")]
pub use znx_avx::znx_ternary_mul_indices_avx;

pub struct TernaryAvx {}
