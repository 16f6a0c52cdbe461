//! # ternpoly-hal
//!
//! A trait-based Hardware Abstraction Layer (HAL) for multiplying a dense binary
//! polynomial by a sparse ternary polynomial in the negacyclic ring `Z[X]/(X^N + 1)`.
//!
//! This product is the inner primitive of lattice-based multi-signature and
//! homomorphic vector-commitment schemes: every sign, verify, commit and open
//! performs many of them, so their throughput bounds the whole scheme.
//!
//! ## Core Concepts
//!
//! **Ring:** All polynomials live in `Z[X]/(X^N + 1)` where `N` is a power of two.
//! A [`layouts::Module`] fixes `N` once at construction and is shared by every call.
//!
//! **Operands:**
//! - [`layouts::Znx8`] -- dense polynomial with `i8` coefficients (the binary operand `a`
//!   and the result `c`).
//! - [`layouts::TernaryCoeffs`] -- general sparse form: `(exponent, sign)` pairs in any order.
//! - [`layouts::TernaryIndices`] -- canonical sparse form: [`TERNARY_WEIGHT`] exponents, the
//!   first half carrying `+1`, the second half `-1`.
//! - [`layouts::SparseTernary`] -- tagged variant over both forms.
//! - [`layouts::Scratch`], [`layouts::ScratchOwned`] -- caller-owned aligned scratch memory.
//!
//! Coefficients are never reduced modulo anything: only `X^N = -1` is applied. With a binary
//! `a` and [`TERNARY_WEIGHT`] terms every accumulator stays in `[-20, 20]`. All kernels use
//! 8-bit wrapping arithmetic so that every backend agrees bit-for-bit.
//!
//! ## Architecture
//!
//! 1. **[`api`]** -- Safe, user-facing traits (e.g. [`api::TernaryMul`], [`api::TernaryMulIndices`]).
//! 2. **[`oep`]** -- Unsafe extension-point traits mirroring the API. Backend crates implement these.
//! 3. **[`delegates`]** -- Blanket `impl` glue connecting each [`api`] trait to its [`oep`] trait
//!    on [`layouts::Module`].
//! 4. **[`mod@reference`]** -- Pure-Rust kernels: the scalar convolution that defines correct
//!    semantics, the portable lane convolution, and a dense schoolbook oracle.
//!
//! ## Testing and Benchmarking
//!
//! The [`test_suite`] module provides backend-parametric test functions, instantiated by
//! backend crates through [`backend_test_suite!`] and [`cross_backend_test_suite!`].
//! The [`bench_suite`] module provides the matching Criterion harnesses.
//!
//! ## Non-Goals
//!
//! - The NTT multiplication path and the signature/commitment protocols around this
//!   primitive are not part of this crate.
//! - No constant-time enforcement.

#![deny(rustdoc::broken_intra_doc_links)]

/// Safe, user-facing trait definitions.
pub mod api;

/// Criterion-based benchmark harnesses, generic over any backend.
pub mod bench_suite;

/// Blanket implementations connecting [`api`] traits to [`oep`] traits on
/// [`layouts::Module`].
pub mod delegates;

/// Backend-agnostic layouts for dense and sparse polynomials, modules and scratch space.
pub mod layouts;

/// Open Extension Points: `unsafe` traits that backend crates implement.
pub mod oep;

/// Pure-Rust reference kernels.
pub mod reference;

/// Deterministic pseudorandom number generation based on ChaCha8.
pub mod source;

/// Backend-parametric test functions.
pub mod test_suite;

#[doc(hidden)]
pub use once_cell;

/// Embedded safety contract documentation for backend implementors.
pub mod doc {
    /// Safety contract that all [`crate::oep`] trait implementations must uphold.
    #[doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/docs/backend_safety_contract.md"))]
    pub mod backend_safety {
        pub const _PLACEHOLDER: () = ();
    }
}

/// Production ring degree of the commitment/signature scheme.
pub const RING_DEGREE: usize = 512;

/// Width in bytes of one SIMD lane on the AVX2 target (one `__m256i`).
pub const LANE_BYTES: usize = 32;

/// Number of non-zero coefficients of a sparse ternary operand.
pub const TERNARY_WEIGHT: usize = 20;

/// Number of `+1` (and of `-1`) coefficients of a canonical sparse ternary operand.
pub const TERNARY_HALF_WEIGHT: usize = TERNARY_WEIGHT >> 1;

/// Default memory alignment in bytes for all allocated buffers.
pub const DEFAULTALIGN: usize = 64;

fn is_aligned_custom<T>(ptr: *const T, align: usize) -> bool {
    (ptr as usize).is_multiple_of(align)
}

/// Returns `true` if `ptr` is aligned to [`DEFAULTALIGN`] bytes.
pub fn is_aligned<T>(ptr: *const T) -> bool {
    is_aligned_custom(ptr, DEFAULTALIGN)
}

/// Allocates a zero-initialized byte buffer that contains at least `size` bytes
/// starting on a [`DEFAULTALIGN`] boundary.
///
/// The buffer carries up to `DEFAULTALIGN - 1` bytes of leading slack; consumers
/// (e.g. [`layouts::Scratch`]) skip to the first aligned byte before use.
pub fn alloc_aligned(size: usize) -> Vec<u8> {
    vec![0u8; size.next_multiple_of(DEFAULTALIGN) + DEFAULTALIGN - 1]
}

/// Splits `data` into an aligned prefix of `take_len` bytes and an unaligned remainder.
///
/// The returned prefix starts at the first [`DEFAULTALIGN`]-aligned address within `data`.
///
/// # Panics
///
/// Panics if the aligned region of `data` is smaller than `take_len`.
pub fn take_slice_aligned(data: &mut [u8], take_len: usize) -> (&mut [u8], &mut [u8]) {
    let aligned_offset: usize = data.as_ptr().align_offset(DEFAULTALIGN).min(data.len());
    let aligned_len: usize = data.len() - aligned_offset;

    if aligned_len < take_len {
        panic!("Attempted to take {take_len} from scratch with {aligned_len} aligned bytes left");
    }

    data[aligned_offset..].split_at_mut(take_len)
}
