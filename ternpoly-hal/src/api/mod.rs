//! Safe, user-facing trait definitions.
//!
//! Traits are organized by operation category:
//! - **module** -- module instantiation and ring degree queries.
//! - **ternary** -- products of a dense binary polynomial by a sparse ternary one.
//! - **scratch** -- scratch buffer management.
//!
//! Callers program against these traits; the actual computation is
//! dispatched to a backend via the [`oep`](crate::oep) extension points.

mod module;
mod scratch;
mod ternary;

pub use module::*;
pub use scratch::*;
pub use ternary::*;
