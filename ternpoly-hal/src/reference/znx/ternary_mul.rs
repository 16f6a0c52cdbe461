use itertools::izip;

use crate::{
    LANE_BYTES,
    layouts::{Sign, TernaryTerm},
    reference::znx::znx_negacyclic_fold_ref,
};

/// Scalar product of a dense polynomial by a sparse ternary polynomial in general form.
///
/// `tmp[..2N]` is zeroed and used as the double-length accumulator: every term
/// `(e, s)` adds `s * a` into the window `tmp[e..e + N]`, then the accumulator is
/// folded into `res`. All arithmetic wraps on 8 bits.
///
/// Bytes of `tmp` past `2N` are never touched.
pub fn znx_ternary_mul_ref(res: &mut [i8], tmp: &mut [i8], a: &[i8], b: &[TernaryTerm]) {
    let n: usize = res.len();

    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), n);
        assert!(tmp.len() >= n << 1, "tmp.len()={} < 2n={}", tmp.len(), n << 1);
        b.iter()
            .for_each(|t| assert!(t.exp < n, "exponent {} >= n={n}", t.exp));
    }

    let tmp: &mut [i8] = &mut tmp[..n << 1];
    tmp.fill(0);

    for t in b {
        let window: &mut [i8] = &mut tmp[t.exp..t.exp + n];
        match t.sign {
            Sign::Pos => izip!(window.iter_mut(), a.iter()).for_each(|(r, &x)| *r = r.wrapping_add(x)),
            Sign::Neg => izip!(window.iter_mut(), a.iter()).for_each(|(r, &x)| *r = r.wrapping_sub(x)),
        }
    }

    znx_negacyclic_fold_ref(res, tmp);
}

#[inline(always)]
fn lane_add_ref<const LANE: usize>(dst: &mut [i8], src: &[i8]) {
    izip!(dst[..LANE].iter_mut(), src[..LANE].iter()).for_each(|(d, &s)| *d = d.wrapping_add(s));
}

#[inline(always)]
fn lane_sub_ref<const LANE: usize>(dst: &mut [i8], src: &[i8]) {
    izip!(dst[..LANE].iter_mut(), src[..LANE].iter()).for_each(|(d, &s)| *d = d.wrapping_sub(s));
}

#[inline(always)]
fn lane_fold_ref<const LANE: usize>(dst: &mut [i8], lo: &[i8], hi: &[i8]) {
    izip!(dst[..LANE].iter_mut(), lo[..LANE].iter(), hi[..LANE].iter()).for_each(|(d, &x, &y)| *d = x.wrapping_sub(y));
}

/// Lane-parallel product of a dense polynomial by a sparse ternary polynomial in
/// canonical form (`pos` carries `+1`, `neg` carries `-1`), on lanes of `LANE` bytes.
///
/// Each lane of `a` is loaded once and added (resp. subtracted) into the
/// `LANE`-byte windows of `tmp` starting at `LANE * j + e` for every exponent `e`.
/// The highest byte written is `2N - 2`.
///
/// # Panics
/// Panics if `a.len() != res.len()` or if `N` is not a multiple of `LANE`.
pub fn znx_ternary_mul_indices_lanes_ref<const LANE: usize>(
    res: &mut [i8],
    tmp: &mut [i8],
    a: &[i8],
    pos: &[usize],
    neg: &[usize],
) {
    let n: usize = res.len();

    assert_eq!(a.len(), n, "a.len()={} != res.len()={n}", a.len());
    assert!(n.is_multiple_of(LANE), "n={n} is not a multiple of LANE={LANE}");

    #[cfg(debug_assertions)]
    {
        assert!(tmp.len() >= n << 1, "tmp.len()={} < 2n={}", tmp.len(), n << 1);
        pos.iter()
            .chain(neg.iter())
            .for_each(|&e| assert!(e < n, "exponent {e} >= n={n}"));
    }

    let tmp: &mut [i8] = &mut tmp[..n << 1];
    tmp.fill(0);

    for (j, base) in a.chunks_exact(LANE).enumerate() {
        let offset: usize = j * LANE;
        for &e in pos {
            lane_add_ref::<LANE>(&mut tmp[offset + e..], base);
        }
        for &e in neg {
            lane_sub_ref::<LANE>(&mut tmp[offset + e..], base);
        }
    }

    for (j, r) in res.chunks_exact_mut(LANE).enumerate() {
        let offset: usize = j * LANE;
        lane_fold_ref::<LANE>(r, &tmp[offset..], &tmp[offset + n..]);
    }
}

/// [`znx_ternary_mul_indices_lanes_ref`] on [`LANE_BYTES`]-byte lanes.
#[inline(always)]
pub fn znx_ternary_mul_indices_ref(res: &mut [i8], tmp: &mut [i8], a: &[i8], pos: &[usize], neg: &[usize]) {
    znx_ternary_mul_indices_lanes_ref::<LANE_BYTES>(res, tmp, a, pos, neg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layouts::{TernaryCoeffs, TernaryIndices, Znx8, Znx8Owned},
        reference::znx::znx_negacyclic_mul_i64_ref,
        source::Source,
    };

    fn mul_ref(a: &[i8], b: &TernaryCoeffs) -> Vec<i8> {
        let n: usize = a.len();
        let mut tmp: Vec<i8> = vec![0; 2 * n];
        let mut res: Vec<i8> = vec![0; n];
        znx_ternary_mul_ref(&mut res, &mut tmp, a, b.terms());
        res
    }

    fn mul_lanes<const LANE: usize>(a: &[i8], b: &TernaryIndices) -> Vec<i8> {
        let n: usize = a.len();
        let mut tmp: Vec<i8> = vec![0; 2 * n];
        let mut res: Vec<i8> = vec![0; n];
        znx_ternary_mul_indices_lanes_ref::<LANE>(&mut res, &mut tmp, a, b.pos(), b.neg());
        res
    }

    #[test]
    fn single_term_is_a_negacyclic_shift() {
        let n: usize = 64;
        let mut source: Source = Source::new([0u8; 32]);
        let mut a: Znx8Owned = Znx8::alloc(n);
        a.fill_binary(&mut source);

        for e in [0, 1, 17, n - 1] {
            let res: Vec<i8> = mul_ref(a.coeffs(), &TernaryCoeffs::new(vec![TernaryTerm::pos(e)]));
            for i in 0..n {
                let expected: i8 = if i >= e { a.coeffs()[i - e] } else { -a.coeffs()[i + n - e] };
                assert_eq!(res[i], expected, "e={e} i={i}");
            }

            let res_neg: Vec<i8> = mul_ref(a.coeffs(), &TernaryCoeffs::new(vec![TernaryTerm::neg(e)]));
            izip!(res.iter(), res_neg.iter()).for_each(|(&x, &y)| assert_eq!(x, -y));
        }
    }

    #[test]
    fn scratch_past_two_n_is_untouched() {
        let n: usize = 64;
        let mut source: Source = Source::new([1u8; 32]);
        let mut a: Znx8Owned = Znx8::alloc(n);
        a.fill_binary(&mut source);

        let mut pos: [usize; 10] = [0; 10];
        let mut neg: [usize; 10] = [0; 10];
        (0..10).for_each(|i| {
            pos[i] = i;
            neg[i] = n - 1 - i;
        });
        let b: TernaryIndices = TernaryIndices::new(pos, neg);

        let sentinel: i8 = 0x5a;
        let mut tmp: Vec<i8> = vec![sentinel; 2 * n + LANE_BYTES];
        let mut res: Vec<i8> = vec![0; n];
        znx_ternary_mul_indices_lanes_ref::<32>(&mut res, &mut tmp, a.coeffs(), b.pos(), b.neg());
        assert!(tmp[2 * n..].iter().all(|&x| x == sentinel));

        tmp.fill(sentinel);
        znx_ternary_mul_ref(&mut res, &mut tmp, a.coeffs(), TernaryCoeffs::from(&b).terms());
        assert!(tmp[2 * n..].iter().all(|&x| x == sentinel));
    }

    #[test]
    fn lanes_match_scalar() {
        let mut source: Source = Source::new([2u8; 32]);
        for n in [32, 64, 512] {
            let mut a: Znx8Owned = Znx8::alloc(n);
            for _ in 0..8 {
                a.fill_binary(&mut source);
                let b: TernaryIndices = TernaryIndices::sample(n, &mut source);
                let want: Vec<i8> = mul_ref(a.coeffs(), &TernaryCoeffs::from(&b));
                assert_eq!(mul_lanes::<1>(a.coeffs(), &b), want);
                assert_eq!(mul_lanes::<8>(a.coeffs(), &b), want);
                assert_eq!(mul_lanes::<32>(a.coeffs(), &b), want);
            }
        }
    }

    #[test]
    fn matches_schoolbook() {
        let n: usize = 256;
        let mut source: Source = Source::new([3u8; 32]);
        let mut a: Znx8Owned = Znx8::alloc(n);
        a.fill_binary(&mut source);
        let b: TernaryCoeffs = TernaryCoeffs::sample(n, 20, &mut source);

        let mut want: Vec<i64> = vec![0; n];
        znx_negacyclic_mul_i64_ref(&mut want, &a.to_i64(), &b.to_dense(n));

        let have: Vec<i64> = mul_ref(a.coeffs(), &b).iter().map(|&x| x as i64).collect();
        assert_eq!(have, want);
    }

    #[test]
    fn all_ones_triangular_pattern() {
        let n: usize = 512;
        let a: Vec<i8> = vec![1; n];
        let b: TernaryIndices = TernaryIndices::new(
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
            [500, 501, 502, 503, 504, 505, 506, 507, 508, 509],
        );

        let res: Vec<i8> = mul_lanes::<32>(&a, &b);
        for (i, &c) in res.iter().enumerate() {
            let expected: i64 = match i {
                0..9 => 2 * i as i64 + 2,
                9..500 => 20,
                500..509 => 1018 - 2 * i as i64,
                _ => 0,
            };
            assert_eq!(c as i64, expected, "i={i}");
        }
        assert_eq!(mul_ref(&a, &TernaryCoeffs::from(&b)), res);
    }

    #[test]
    #[should_panic(expected = "is not a multiple of LANE=32")]
    fn partial_lane_degree_panics() {
        let n: usize = 48;
        let a: Vec<i8> = vec![1; n];
        let b: TernaryIndices = TernaryIndices::new(
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
            [10, 11, 12, 13, 14, 15, 16, 17, 18, 19],
        );
        mul_lanes::<32>(&a, &b);
    }

    #[test]
    fn accumulation_wraps_on_eight_bits() {
        // 20 positive terms on a = -128 everywhere overflow i8 in both kernels alike.
        let n: usize = 32;
        let a: Vec<i8> = vec![-128; n];
        let terms: Vec<TernaryTerm> = (0..20).map(TernaryTerm::pos).collect();
        let b: TernaryCoeffs = TernaryCoeffs::new(terms);
        let mut pos_half: [usize; 10] = [0; 10];
        let mut neg_half: [usize; 10] = [0; 10];
        (0..10).for_each(|i| {
            pos_half[i] = i;
            neg_half[i] = 31 - i;
        });
        let idx: TernaryIndices = TernaryIndices::new(pos_half, neg_half);
        assert_eq!(mul_ref(&a, &TernaryCoeffs::from(&idx)), mul_lanes::<32>(&a, &idx));
        assert!(mul_ref(&a, &b).iter().all(|&x| x == 0));
    }
}
