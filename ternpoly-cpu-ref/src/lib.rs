//! Portable reference backend for [`ternpoly_hal`].
//!
//! [`TernaryRef`] implements every open extension point of the HAL with the
//! pure-Rust kernels of [`ternpoly_hal::reference`]: the scalar convolution for
//! the general sparse form and the lane convolution on
//! [`LANE_BYTES`](ternpoly_hal::LANE_BYTES)-byte lanes for the canonical form.
//! It runs on every architecture and is the ground truth other backends are
//! tested against.

mod module;
mod scratch;
mod ternary;
mod znx;

#[cfg(test)]
mod tests;

pub struct TernaryRef {}
