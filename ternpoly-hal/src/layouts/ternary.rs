use std::ops::Neg;

use rand::seq::index;
use thiserror::Error;

use crate::{TERNARY_HALF_WEIGHT, TERNARY_WEIGHT, source::Source};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TernaryError {
    #[error("expected {expected} non-zero coefficients, got {got}")]
    WrongWeight { expected: usize, got: usize },
    #[error("expected {expected} positive and {expected} negative coefficients, got {pos} and {neg}")]
    Unbalanced { expected: usize, pos: usize, neg: usize },
    #[error("exponent {exp} is outside [0, {n})")]
    ExponentOutOfRange { exp: usize, n: usize },
    #[error("exponent {0} appears more than once")]
    DuplicateExponent(usize),
    #[error("coefficient {value} at index {index} is not in {{-1, 0, 1}}")]
    NotTernary { index: usize, value: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    #[inline(always)]
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

/// The monomial `sign * X^exp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TernaryTerm {
    pub exp: usize,
    pub sign: Sign,
}

impl TernaryTerm {
    pub fn pos(exp: usize) -> Self {
        Self { exp, sign: Sign::Pos }
    }

    pub fn neg(exp: usize) -> Self {
        Self { exp, sign: Sign::Neg }
    }
}

fn check_exponents<'a>(exps: impl Iterator<Item = &'a usize>, n: usize) -> Result<(), TernaryError> {
    let mut sorted: Vec<usize> = Vec::with_capacity(TERNARY_WEIGHT);
    for &exp in exps {
        if exp >= n {
            return Err(TernaryError::ExponentOutOfRange { exp, n });
        }
        sorted.push(exp);
    }
    sorted.sort_unstable();
    match sorted.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(TernaryError::DuplicateExponent(w[0])),
        None => Ok(()),
    }
}

/// Sparse ternary polynomial in general form: `(exponent, sign)` pairs in any order.
///
/// This is the operand of the reference convolution. The production shape has
/// [`TERNARY_WEIGHT`] terms; any count is accepted so that degenerate operands
/// (e.g. a single monomial) can be expressed.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TernaryCoeffs {
    terms: Vec<TernaryTerm>,
}

impl TernaryCoeffs {
    /// Wraps `terms` without validation; see [`TernaryCoeffs::check`].
    pub fn new(terms: Vec<TernaryTerm>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[TernaryTerm] {
        &self.terms
    }

    pub fn terms_mut(&mut self) -> &mut [TernaryTerm] {
        &mut self.terms
    }

    pub fn weight(&self) -> usize {
        self.terms.len()
    }

    /// Checks that every exponent is in `[0, n)` and that exponents are distinct.
    pub fn check(&self, n: usize) -> Result<(), TernaryError> {
        check_exponents(self.terms.iter().map(|t| &t.exp), n)
    }

    /// Extracts the non-zero coefficients of a dense polynomial, positive terms
    /// first, each half in ascending exponent order.
    pub fn from_dense(poly: &[i64]) -> Result<Self, TernaryError> {
        if let Some((index, &value)) = poly.iter().enumerate().find(|(_, x)| !(-1..=1).contains(*x)) {
            return Err(TernaryError::NotTernary { index, value });
        }
        let pos = poly
            .iter()
            .enumerate()
            .filter(|(_, x)| **x == 1)
            .map(|(exp, _)| TernaryTerm::pos(exp));
        let neg = poly
            .iter()
            .enumerate()
            .filter(|(_, x)| **x == -1)
            .map(|(exp, _)| TernaryTerm::neg(exp));
        Ok(Self {
            terms: pos.chain(neg).collect(),
        })
    }

    /// Expands into a dense polynomial of degree `n`.
    ///
    /// # Panics
    ///
    /// Panics if an exponent is `>= n`.
    pub fn to_dense(&self, n: usize) -> Vec<i64> {
        let mut res: Vec<i64> = vec![0; n];
        self.terms
            .iter()
            .for_each(|t| res[t.exp] += t.sign.as_i8() as i64);
        res
    }

    /// Samples `weight` distinct exponents in `[0, n)` with independent uniform signs.
    ///
    /// # Panics
    ///
    /// Panics if `weight > n`.
    pub fn sample(n: usize, weight: usize, source: &mut Source) -> Self {
        assert!(weight <= n, "weight={weight} > n={n}");
        let terms: Vec<TernaryTerm> = index::sample(source, n, weight)
            .into_iter()
            .map(|exp| TernaryTerm {
                exp,
                sign: if source.next_bool() { Sign::Neg } else { Sign::Pos },
            })
            .collect();
        Self { terms }
    }

    /// Returns `-self`.
    pub fn negated(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| TernaryTerm { exp: t.exp, sign: -t.sign })
                .collect(),
        }
    }
}

/// Sparse ternary polynomial in canonical form: [`TERNARY_WEIGHT`] exponents, the first
/// [`TERNARY_HALF_WEIGHT`] carrying `+1` and the last [`TERNARY_HALF_WEIGHT`] carrying `-1`.
///
/// This is the operand of the vectorized convolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TernaryIndices {
    indices: [usize; TERNARY_WEIGHT],
}

impl TernaryIndices {
    /// Builds the operand `sum X^pos[i] - sum X^neg[i]` without validation;
    /// see [`TernaryIndices::check`].
    pub fn new(pos: [usize; TERNARY_HALF_WEIGHT], neg: [usize; TERNARY_HALF_WEIGHT]) -> Self {
        let mut indices: [usize; TERNARY_WEIGHT] = [0; TERNARY_WEIGHT];
        indices[..TERNARY_HALF_WEIGHT].copy_from_slice(&pos);
        indices[TERNARY_HALF_WEIGHT..].copy_from_slice(&neg);
        Self { indices }
    }

    /// Checked variant of [`TernaryIndices::new`] for ring degree `n`.
    pub fn try_new(
        n: usize,
        pos: [usize; TERNARY_HALF_WEIGHT],
        neg: [usize; TERNARY_HALF_WEIGHT],
    ) -> Result<Self, TernaryError> {
        let res: Self = Self::new(pos, neg);
        res.check(n)?;
        Ok(res)
    }

    pub fn indices(&self) -> &[usize; TERNARY_WEIGHT] {
        &self.indices
    }

    /// Exponents carrying `+1`.
    pub fn pos(&self) -> &[usize] {
        &self.indices[..TERNARY_HALF_WEIGHT]
    }

    /// Exponents carrying `-1`.
    pub fn neg(&self) -> &[usize] {
        &self.indices[TERNARY_HALF_WEIGHT..]
    }

    /// Checks that every exponent is in `[0, n)` and that exponents are distinct.
    pub fn check(&self, n: usize) -> Result<(), TernaryError> {
        check_exponents(self.indices.iter(), n)
    }

    /// Samples a balanced operand with [`TERNARY_WEIGHT`] distinct exponents in `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n < TERNARY_WEIGHT`.
    pub fn sample(n: usize, source: &mut Source) -> Self {
        assert!(n >= TERNARY_WEIGHT, "n={n} < {TERNARY_WEIGHT}");
        let mut indices: [usize; TERNARY_WEIGHT] = [0; TERNARY_WEIGHT];
        index::sample(source, n, TERNARY_WEIGHT)
            .into_iter()
            .zip(indices.iter_mut())
            .for_each(|(exp, x)| *x = exp);
        Self { indices }
    }

    /// Returns `-self`: the two halves swapped.
    pub fn negated(&self) -> Self {
        let mut indices: [usize; TERNARY_WEIGHT] = [0; TERNARY_WEIGHT];
        indices[..TERNARY_HALF_WEIGHT].copy_from_slice(self.neg());
        indices[TERNARY_HALF_WEIGHT..].copy_from_slice(self.pos());
        Self { indices }
    }
}

impl From<&TernaryIndices> for TernaryCoeffs {
    fn from(b: &TernaryIndices) -> Self {
        let pos = b.pos().iter().map(|&exp| TernaryTerm::pos(exp));
        let neg = b.neg().iter().map(|&exp| TernaryTerm::neg(exp));
        Self {
            terms: pos.chain(neg).collect(),
        }
    }
}

impl TryFrom<&TernaryCoeffs> for TernaryIndices {
    type Error = TernaryError;

    /// Partitions the terms by sign, preserving their relative order.
    ///
    /// Exponent bounds are not checked since the ring degree is unknown here;
    /// see [`TernaryIndices::check`].
    fn try_from(b: &TernaryCoeffs) -> Result<Self, TernaryError> {
        if b.weight() != TERNARY_WEIGHT {
            return Err(TernaryError::WrongWeight {
                expected: TERNARY_WEIGHT,
                got: b.weight(),
            });
        }

        let pos: usize = b.terms().iter().filter(|t| t.sign == Sign::Pos).count();
        let neg: usize = b.weight() - pos;
        if pos != TERNARY_HALF_WEIGHT {
            return Err(TernaryError::Unbalanced {
                expected: TERNARY_HALF_WEIGHT,
                pos,
                neg,
            });
        }

        check_exponents(b.terms().iter().map(|t| &t.exp), usize::MAX)?;

        let mut indices: [usize; TERNARY_WEIGHT] = [0; TERNARY_WEIGHT];
        let (mut i_pos, mut i_neg) = (0, TERNARY_HALF_WEIGHT);
        for t in b.terms() {
            match t.sign {
                Sign::Pos => {
                    indices[i_pos] = t.exp;
                    i_pos += 1;
                }
                Sign::Neg => {
                    indices[i_neg] = t.exp;
                    i_neg += 1;
                }
            }
        }
        Ok(Self { indices })
    }
}

/// A sparse ternary operand in either encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SparseTernary {
    Coeffs(TernaryCoeffs),
    Indices(TernaryIndices),
}

impl SparseTernary {
    pub fn weight(&self) -> usize {
        match self {
            SparseTernary::Coeffs(b) => b.weight(),
            SparseTernary::Indices(_) => TERNARY_WEIGHT,
        }
    }

    pub fn check(&self, n: usize) -> Result<(), TernaryError> {
        match self {
            SparseTernary::Coeffs(b) => b.check(n),
            SparseTernary::Indices(b) => b.check(n),
        }
    }

    pub fn to_coeffs(&self) -> TernaryCoeffs {
        match self {
            SparseTernary::Coeffs(b) => b.clone(),
            SparseTernary::Indices(b) => b.into(),
        }
    }

    pub fn to_indices(&self) -> Result<TernaryIndices, TernaryError> {
        match self {
            SparseTernary::Coeffs(b) => b.try_into(),
            SparseTernary::Indices(b) => Ok(*b),
        }
    }
}

impl From<TernaryCoeffs> for SparseTernary {
    fn from(b: TernaryCoeffs) -> Self {
        SparseTernary::Coeffs(b)
    }
}

impl From<TernaryIndices> for SparseTernary {
    fn from(b: TernaryIndices) -> Self {
        SparseTernary::Indices(b)
    }
}
