use itertools::izip;
use rand::seq::SliceRandom;

use crate::{
    DEFAULTALIGN, TERNARY_HALF_WEIGHT, TERNARY_WEIGHT,
    api::{
        ModuleN, ScratchAvailable, ScratchFromBytes, ScratchOwnedAlloc, ScratchOwnedBorrow, TakeSlice, TernaryMul,
        TernaryMulIndices, TernaryMulSparse, TernaryMulTmpBytes,
    },
    layouts::{
        Backend, Scratch, ScratchOwned, Sign, SparseTernary, TernaryCoeffs, TernaryIndices, TernaryTerm, Znx8, Znx8Owned,
    },
    reference::znx::znx_negacyclic_mul_i64_ref,
    source::Source,
};

/// Canonical operand with `+1` on `X^0..X^9` and `-1` on `X^(N-12)..X^(N-3)`.
fn head_tail_indices(n: usize) -> TernaryIndices {
    let mut pos: [usize; TERNARY_HALF_WEIGHT] = [0; TERNARY_HALF_WEIGHT];
    let mut neg: [usize; TERNARY_HALF_WEIGHT] = [0; TERNARY_HALF_WEIGHT];
    (0..TERNARY_HALF_WEIGHT).for_each(|i| {
        pos[i] = i;
        neg[i] = n - 12 + i;
    });
    TernaryIndices::new(pos, neg)
}

fn monomial(n: usize, e: usize) -> Znx8Owned {
    let mut a: Znx8Owned = Znx8::alloc(n);
    a.coeffs_mut()[e] = 1;
    a
}

pub fn test_ternary_mul_indices<M, BE: Backend>(module: &M)
where
    M: ModuleN + TernaryMul<BE> + TernaryMulIndices<BE> + TernaryMulTmpBytes,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
{
    let n: usize = module.n();
    let mut source: Source = Source::new([0u8; 32]);
    let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());

    let mut a: Znx8Owned = Znx8::alloc(n);
    let mut c_want: Znx8Owned = Znx8::alloc(n);
    let mut c_have: Znx8Owned = Znx8::alloc(n);

    for _ in 0..64 {
        a.fill_binary(&mut source);
        let b: TernaryIndices = TernaryIndices::sample(n, &mut source);

        module.ternary_mul(&mut c_want, &a, &TernaryCoeffs::from(&b), scratch.borrow());
        module.ternary_mul_indices(&mut c_have, &a, &b, scratch.borrow());

        assert_eq!(c_want, c_have);
    }

    for hw in [0, 1, n >> 1, n] {
        a.fill_binary_hw(hw, &mut source);
        let b: TernaryIndices = TernaryIndices::sample(n, &mut source);

        module.ternary_mul(&mut c_want, &a, &TernaryCoeffs::from(&b), scratch.borrow());
        module.ternary_mul_indices(&mut c_have, &a, &b, scratch.borrow());

        assert_eq!(c_want, c_have, "hw={hw}");
    }
}

pub fn test_ternary_mul_schoolbook<M, BE: Backend>(module: &M)
where
    M: ModuleN + TernaryMul<BE> + TernaryMulIndices<BE> + TernaryMulTmpBytes,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
{
    let n: usize = module.n();
    let mut source: Source = Source::new([1u8; 32]);
    let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());

    let mut a: Znx8Owned = Znx8::alloc(n);
    let mut c_have: Znx8Owned = Znx8::alloc(n);
    let mut c_want: Vec<i64> = vec![0; n];

    for _ in 0..16 {
        a.fill_binary(&mut source);

        let b: TernaryCoeffs = TernaryCoeffs::sample(n, TERNARY_WEIGHT, &mut source);
        znx_negacyclic_mul_i64_ref(&mut c_want, &a.to_i64(), &b.to_dense(n));
        module.ternary_mul(&mut c_have, &a, &b, scratch.borrow());
        assert_eq!(c_have.to_i64(), c_want);

        let b: TernaryIndices = TernaryIndices::sample(n, &mut source);
        znx_negacyclic_mul_i64_ref(&mut c_want, &a.to_i64(), &TernaryCoeffs::from(&b).to_dense(n));
        module.ternary_mul_indices(&mut c_have, &a, &b, scratch.borrow());
        assert_eq!(c_have.to_i64(), c_want);
    }
}

pub fn test_ternary_mul_shift<M, BE: Backend>(module: &M)
where
    M: ModuleN + TernaryMul<BE> + TernaryMulTmpBytes,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
{
    let n: usize = module.n();
    let mut source: Source = Source::new([2u8; 32]);
    let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());

    let mut a: Znx8Owned = Znx8::alloc(n);
    let mut c: Znx8Owned = Znx8::alloc(n);
    a.fill_binary(&mut source);

    let mut exps: Vec<usize> = vec![0, 1, n >> 1, n - 1];
    exps.extend((0..8).map(|_| source.next_index(n)));

    for e in exps {
        module.ternary_mul(&mut c, &a, &TernaryCoeffs::new(vec![TernaryTerm::pos(e)]), scratch.borrow());
        for i in 0..n {
            let want: i8 = if i >= e {
                a.coeffs()[i - e]
            } else {
                -a.coeffs()[i + n - e]
            };
            assert_eq!(c.coeffs()[i], want, "e={e} i={i}");
        }
    }
}

pub fn test_ternary_mul_unit_operand<M, BE: Backend>(module: &M)
where
    M: ModuleN + TernaryMul<BE> + TernaryMulIndices<BE> + TernaryMulTmpBytes,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
{
    let n: usize = module.n();
    let mut source: Source = Source::new([3u8; 32]);
    let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());

    let one: Znx8Owned = monomial(n, 0);
    let mut c: Znx8Owned = Znx8::alloc(n);

    module.ternary_mul(&mut c, &one, &TernaryCoeffs::new(vec![TernaryTerm::pos(5)]), scratch.borrow());
    assert_eq!(c, monomial(n, 5));

    for _ in 0..8 {
        let b: TernaryIndices = TernaryIndices::sample(n, &mut source);
        let b_dense: Vec<i64> = TernaryCoeffs::from(&b).to_dense(n);

        module.ternary_mul_indices(&mut c, &one, &b, scratch.borrow());
        assert_eq!(c.to_i64(), b_dense);

        module.ternary_mul(&mut c, &one, &TernaryCoeffs::from(&b), scratch.borrow());
        assert_eq!(c.to_i64(), b_dense);
    }
}

pub fn test_ternary_mul_all_ones<M, BE: Backend>(module: &M)
where
    M: ModuleN + TernaryMul<BE> + TernaryMulIndices<BE> + TernaryMulTmpBytes,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
{
    let n: usize = module.n();
    let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());

    let a: Znx8Owned = Znx8::from_i8(&vec![1i8; n]);
    let b: TernaryIndices = head_tail_indices(n);

    let mut c_want: Znx8Owned = Znx8::alloc(n);
    let mut c_have: Znx8Owned = Znx8::alloc(n);
    module.ternary_mul_indices(&mut c_have, &a, &b, scratch.borrow());
    module.ternary_mul(&mut c_want, &a, &TernaryCoeffs::from(&b), scratch.borrow());
    assert_eq!(c_want, c_have);

    // Ramps at both ends, plateau of 20 in between.
    for (i, &x) in c_have.coeffs().iter().enumerate() {
        let want: i64 = if i < TERNARY_HALF_WEIGHT - 1 {
            2 * i as i64 + 2
        } else if i < n - 12 {
            TERNARY_WEIGHT as i64
        } else if i < n - 3 {
            2 * n as i64 - 6 - 2 * i as i64
        } else {
            0
        };
        assert_eq!(x as i64, want, "i={i}");
    }
}

pub fn test_ternary_mul_negation<M, BE: Backend>(module: &M)
where
    M: ModuleN + TernaryMul<BE> + TernaryMulIndices<BE> + TernaryMulTmpBytes,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
{
    let n: usize = module.n();
    let mut source: Source = Source::new([4u8; 32]);
    let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());

    let mut a: Znx8Owned = Znx8::alloc(n);
    let mut c0: Znx8Owned = Znx8::alloc(n);
    let mut c1: Znx8Owned = Znx8::alloc(n);

    for _ in 0..16 {
        a.fill_binary(&mut source);
        let b: TernaryIndices = TernaryIndices::sample(n, &mut source);

        module.ternary_mul_indices(&mut c0, &a, &b, scratch.borrow());
        module.ternary_mul_indices(&mut c1, &a, &b.negated(), scratch.borrow());
        izip!(c0.coeffs(), c1.coeffs()).for_each(|(&x, &y)| assert_eq!(x.wrapping_add(y), 0));

        // a * b = a * b_pos + a * b_neg
        let b: TernaryCoeffs = TernaryCoeffs::from(&b);
        let (b_pos, b_neg): (Vec<TernaryTerm>, Vec<TernaryTerm>) =
            b.terms().iter().copied().partition(|t| t.sign == Sign::Pos);
        module.ternary_mul(&mut c0, &a, &TernaryCoeffs::new(b_pos), scratch.borrow());
        module.ternary_mul(&mut c1, &a, &TernaryCoeffs::new(b_neg), scratch.borrow());
        let sum: Vec<i8> = izip!(c0.coeffs(), c1.coeffs())
            .map(|(&x, &y)| x.wrapping_add(y))
            .collect();
        module.ternary_mul(&mut c0, &a, &b, scratch.borrow());
        assert_eq!(c0.coeffs(), sum.as_slice());
    }
}

pub fn test_ternary_mul_permutation<M, BE: Backend>(module: &M)
where
    M: ModuleN + TernaryMul<BE> + TernaryMulTmpBytes,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
{
    let n: usize = module.n();
    let mut source: Source = Source::new([5u8; 32]);
    let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());

    let mut a: Znx8Owned = Znx8::alloc(n);
    let mut c_want: Znx8Owned = Znx8::alloc(n);
    let mut c_have: Znx8Owned = Znx8::alloc(n);

    for _ in 0..16 {
        a.fill_binary(&mut source);
        let mut b: TernaryCoeffs = TernaryCoeffs::sample(n, TERNARY_WEIGHT, &mut source);
        module.ternary_mul(&mut c_want, &a, &b, scratch.borrow());
        b.terms_mut().shuffle(&mut source);
        module.ternary_mul(&mut c_have, &a, &b, scratch.borrow());
        assert_eq!(c_want, c_have);
    }
}

pub fn test_ternary_mul_sparse<M, BE: Backend>(module: &M)
where
    M: ModuleN + TernaryMul<BE> + TernaryMulSparse<BE> + TernaryMulTmpBytes,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
{
    let n: usize = module.n();
    let mut source: Source = Source::new([6u8; 32]);
    let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(module.ternary_mul_tmp_bytes());

    let mut a: Znx8Owned = Znx8::alloc(n);
    let mut c_want: Znx8Owned = Znx8::alloc(n);
    let mut c_have: Znx8Owned = Znx8::alloc(n);

    a.fill_binary(&mut source);
    let b: TernaryIndices = TernaryIndices::sample(n, &mut source);
    module.ternary_mul(&mut c_want, &a, &TernaryCoeffs::from(&b), scratch.borrow());

    module.ternary_mul_sparse(&mut c_have, &a, &SparseTernary::from(b), scratch.borrow());
    assert_eq!(c_want, c_have);

    c_have.zero();
    module.ternary_mul_sparse(&mut c_have, &a, &SparseTernary::from(TernaryCoeffs::from(&b)), scratch.borrow());
    assert_eq!(c_want, c_have);
}

pub fn test_ternary_mul_concurrent<M, BE: Backend>(module: &M)
where
    M: ModuleN + TernaryMulIndices<BE> + TernaryMulTmpBytes + Sync,
    ScratchOwned<BE>: ScratchOwnedAlloc<BE> + ScratchOwnedBorrow<BE>,
    Scratch<BE>: TakeSlice + ScratchAvailable + ScratchFromBytes<BE>,
{
    let n: usize = module.n();
    let threads: usize = 4;
    let mut source: Source = Source::new([7u8; 32]);

    let inputs: Vec<(Znx8Owned, TernaryIndices)> = (0..threads)
        .map(|_| {
            let mut a: Znx8Owned = Znx8::alloc(n);
            a.fill_binary(&mut source);
            (a, TernaryIndices::sample(n, &mut source))
        })
        .collect();

    let tmp_bytes: usize = module.ternary_mul_tmp_bytes();
    let mut scratch: ScratchOwned<BE> = ScratchOwned::alloc(threads * (tmp_bytes + DEFAULTALIGN));

    let mut c_want: Vec<Znx8Owned> = (0..threads).map(|_| Znx8::alloc(n)).collect();
    for ((a, b), c) in inputs.iter().zip(c_want.iter_mut()) {
        module.ternary_mul_indices(c, a, b, scratch.borrow());
    }

    let mut c_have: Vec<Znx8Owned> = (0..threads).map(|_| Znx8::alloc(n)).collect();
    let (scratches, _) = scratch.borrow().split_mut(threads, tmp_bytes);
    std::thread::scope(|s| {
        for (((a, b), c), scratch) in inputs.iter().zip(c_have.iter_mut()).zip(scratches) {
            s.spawn(move || module.ternary_mul_indices(c, a, b, scratch));
        }
    });

    assert_eq!(c_want, c_have);
}

pub fn test_ternary_mul_indices_cross<MR, MT, BR: Backend, BT: Backend>(module_ref: &MR, module_test: &MT)
where
    MR: ModuleN + TernaryMulIndices<BR> + TernaryMulTmpBytes,
    MT: ModuleN + TernaryMulIndices<BT> + TernaryMulTmpBytes,
    ScratchOwned<BR>: ScratchOwnedAlloc<BR> + ScratchOwnedBorrow<BR>,
    ScratchOwned<BT>: ScratchOwnedAlloc<BT> + ScratchOwnedBorrow<BT>,
{
    assert_eq!(module_ref.n(), module_test.n());
    let n: usize = module_ref.n();
    let mut source: Source = Source::new([8u8; 32]);

    let mut scratch_ref: ScratchOwned<BR> = ScratchOwned::alloc(module_ref.ternary_mul_tmp_bytes());
    let mut scratch_test: ScratchOwned<BT> = ScratchOwned::alloc(module_test.ternary_mul_tmp_bytes());

    let mut a: Znx8Owned = Znx8::alloc(n);
    let mut c_want: Znx8Owned = Znx8::alloc(n);
    let mut c_have: Znx8Owned = Znx8::alloc(n);

    let mut operands: Vec<TernaryIndices> = vec![head_tail_indices(n), head_tail_indices(n).negated()];
    operands.extend((0..64).map(|_| TernaryIndices::sample(n, &mut source)));

    for b in operands.iter() {
        a.fill_binary(&mut source);
        module_ref.ternary_mul_indices(&mut c_want, &a, b, scratch_ref.borrow());
        module_test.ternary_mul_indices(&mut c_have, &a, b, scratch_test.borrow());
        assert_eq!(c_want, c_have);
    }
}

pub fn test_ternary_mul_cross<MR, MT, BR: Backend, BT: Backend>(module_ref: &MR, module_test: &MT)
where
    MR: ModuleN + TernaryMul<BR> + TernaryMulTmpBytes,
    MT: ModuleN + TernaryMul<BT> + TernaryMulTmpBytes,
    ScratchOwned<BR>: ScratchOwnedAlloc<BR> + ScratchOwnedBorrow<BR>,
    ScratchOwned<BT>: ScratchOwnedAlloc<BT> + ScratchOwnedBorrow<BT>,
{
    assert_eq!(module_ref.n(), module_test.n());
    let n: usize = module_ref.n();
    let mut source: Source = Source::new([9u8; 32]);

    let mut scratch_ref: ScratchOwned<BR> = ScratchOwned::alloc(module_ref.ternary_mul_tmp_bytes());
    let mut scratch_test: ScratchOwned<BT> = ScratchOwned::alloc(module_test.ternary_mul_tmp_bytes());

    let mut a: Znx8Owned = Znx8::alloc(n);
    let mut c_want: Znx8Owned = Znx8::alloc(n);
    let mut c_have: Znx8Owned = Znx8::alloc(n);

    for weight in [1, TERNARY_WEIGHT, TERNARY_WEIGHT + 3] {
        a.fill_binary(&mut source);
        let b: TernaryCoeffs = TernaryCoeffs::sample(n, weight, &mut source);
        module_ref.ternary_mul(&mut c_want, &a, &b, scratch_ref.borrow());
        module_test.ternary_mul(&mut c_have, &a, &b, scratch_test.borrow());
        assert_eq!(c_want, c_have, "weight={weight}");
    }
}
