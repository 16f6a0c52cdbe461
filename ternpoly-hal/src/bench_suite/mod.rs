//! Criterion-based benchmark harnesses, generic over any backend.
//!
//! Backend crates call these functions to measure their kernels over a range
//! of ring degrees, with the production degree [`RING_DEGREE`](crate::RING_DEGREE) included.

pub mod ternary;
