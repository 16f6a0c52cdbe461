use rand::seq::SliceRandom;
use rand_core::RngCore;
use rand_distr::{Bernoulli, Distribution};

use crate::{
    layouts::{Data, DataMut, DataRef},
    source::Source,
};

/// A polynomial in `Z[X]/(X^N + 1)` with `i8` coefficients.
///
/// Used for the dense binary operand of a ternary multiplication and for its
/// result. The type parameter `D` controls ownership: `Vec<u8>` for owned,
/// `&[u8]` for shared borrows, `&mut [u8]` for mutable borrows.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct Znx8<D: Data> {
    pub data: D,
    pub n: usize,
}

/// Owned [`Znx8`] backed by a `Vec<u8>`.
pub type Znx8Owned = Znx8<Vec<u8>>;

impl<D: Data> Znx8<D> {
    /// Constructs a `Znx8` from raw parts without validation.
    pub fn from_data(data: D, n: usize) -> Self {
        Self { data, n }
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl<D: DataRef> Znx8<D> {
    pub fn coeffs(&self) -> &[i8] {
        bytemuck::cast_slice(&self.data.as_ref()[..self.n])
    }

    /// Returns `true` if every coefficient is `0` or `1`.
    pub fn is_binary(&self) -> bool {
        self.coeffs().iter().all(|&x| x == 0 || x == 1)
    }

    /// Returns `true` if every coefficient is `-1`, `0` or `1`.
    pub fn is_ternary(&self) -> bool {
        self.coeffs().iter().all(|&x| (-1..=1).contains(&x))
    }

    /// Widens the coefficients to `i64`.
    pub fn to_i64(&self) -> Vec<i64> {
        self.coeffs().iter().map(|&x| x as i64).collect()
    }
}

impl<D: DataMut> Znx8<D> {
    pub fn coeffs_mut(&mut self) -> &mut [i8] {
        let n: usize = self.n;
        bytemuck::cast_slice_mut(&mut self.data.as_mut()[..n])
    }

    pub fn zero(&mut self) {
        self.coeffs_mut().fill(0)
    }

    /// Fills with independent uniform bits.
    pub fn fill_binary(&mut self, source: &mut Source) {
        let n: usize = self.n;
        let data: &mut [u8] = &mut self.data.as_mut()[..n];
        source.fill_bytes(data);
        data.iter_mut().for_each(|x| *x &= 1);
    }

    /// Fills with binary values where each entry is `1` with probability `prob`.
    ///
    /// # Panics
    ///
    /// Panics if `prob` is not in `[0, 1]`.
    pub fn fill_binary_prob(&mut self, prob: f64, source: &mut Source) {
        let dist: Bernoulli = Bernoulli::new(prob).unwrap_or_else(|e| panic!("invalid probability {prob}: {e}"));
        self.coeffs_mut()
            .iter_mut()
            .for_each(|x| *x = dist.sample(source) as i8);
    }

    /// Fills with exactly `hw` ones at uniformly random positions.
    ///
    /// # Panics
    ///
    /// Panics if `hw > N`.
    pub fn fill_binary_hw(&mut self, hw: usize, source: &mut Source) {
        assert!(hw <= self.n, "hw={hw} > n={}", self.n);
        let coeffs: &mut [i8] = self.coeffs_mut();
        coeffs.fill(0);
        coeffs[..hw].fill(1);
        coeffs.shuffle(source);
    }
}

impl Znx8<Vec<u8>> {
    pub fn bytes_of(n: usize) -> usize {
        n * size_of::<i8>()
    }

    /// Allocates a zero polynomial of degree `n`.
    pub fn alloc(n: usize) -> Self {
        Self {
            data: vec![0u8; Self::bytes_of(n)],
            n,
        }
    }

    pub fn from_i8(coeffs: &[i8]) -> Self {
        Self {
            data: bytemuck::cast_slice(coeffs).to_vec(),
            n: coeffs.len(),
        }
    }
}

/// Borrow a `Znx8` as a shared reference view.
pub trait Znx8ToRef {
    fn to_ref(&self) -> Znx8<&[u8]>;
}

impl<D: DataRef> Znx8ToRef for Znx8<D> {
    fn to_ref(&self) -> Znx8<&[u8]> {
        Znx8 {
            data: self.data.as_ref(),
            n: self.n,
        }
    }
}

/// Borrow a `Znx8` as a mutable reference view.
pub trait Znx8ToMut {
    fn to_mut(&mut self) -> Znx8<&mut [u8]>;
}

impl<D: DataMut> Znx8ToMut for Znx8<D> {
    fn to_mut(&mut self) -> Znx8<&mut [u8]> {
        Znx8 {
            data: self.data.as_mut(),
            n: self.n,
        }
    }
}
