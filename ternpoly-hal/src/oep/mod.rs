//! Open Extension Points (OEP) for backend crates.
//!
//! This module defines the `unsafe` trait layer that backend crates implement
//! to provide concrete kernels. Each trait mirrors a corresponding safe trait
//! in the [`crate::api`] module, distinguished by an `Impl` suffix
//! (e.g., [`crate::api::TernaryMul`] is backed by [`TernaryMulImpl`]).
//!
//! All traits in this module are `unsafe` because implementations must uphold
//! the backend safety contract.

mod module;
mod scratch;
mod ternary;

pub use module::*;
pub use scratch::*;
pub use ternary::*;
