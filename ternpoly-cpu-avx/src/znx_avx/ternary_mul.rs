/// AVX2 product of a dense polynomial by a sparse ternary polynomial in canonical
/// form (`pos` carries `+1`, `neg` carries `-1`).
///
/// For each 32-byte lane `j` of `a`, the lane is loaded once and added (resp.
/// subtracted) with `_mm256_add_epi8` (resp. `_mm256_sub_epi8`) into the unaligned
/// 32-byte window of `tmp` at `32 * j + e`, for every exponent `e`. The windows
/// end at byte `2N - 2`. `tmp[..2N]` is then folded lane by lane into `res`.
///
/// # Panics
/// Panics if `a.len() != res.len()`, if `N` is not a multiple of 32, if `tmp`
/// is shorter than `2N` or if an exponent is `>= N`.
///
/// # Safety
/// Caller must ensure the CPU supports AVX2 (e.g., via `is_x86_feature_detected!("avx2")`).
#[target_feature(enable = "avx2")]
pub fn znx_ternary_mul_indices_avx(res: &mut [i8], tmp: &mut [i8], a: &[i8], pos: &[usize], neg: &[usize]) {
    use core::arch::x86_64::{__m256i, _mm256_add_epi8, _mm256_loadu_si256, _mm256_storeu_si256, _mm256_sub_epi8};

    let n: usize = res.len();

    // Lanes are read and windows written through raw pointers.
    assert_eq!(a.len(), n, "a.len()={} != res.len()={n}", a.len());
    assert!(n.is_multiple_of(32), "n={n} is not a multiple of 32");
    assert!(tmp.len() >= n << 1, "tmp.len()={} < 2n={}", tmp.len(), n << 1);
    pos.iter()
        .chain(neg.iter())
        .for_each(|&e| assert!(e < n, "exponent {e} >= n={n}"));

    let tmp: &mut [i8] = &mut tmp[..n << 1];
    tmp.fill(0);

    let lanes: usize = n >> 5;

    let aa: *const __m256i = a.as_ptr() as *const __m256i;
    let tt: *mut i8 = tmp.as_mut_ptr();

    unsafe {
        for j in 0..lanes {
            let base: __m256i = _mm256_loadu_si256(aa.add(j));
            let off: *mut i8 = tt.add(j << 5);

            for &e in pos {
                let w: *mut __m256i = off.add(e) as *mut __m256i;
                _mm256_storeu_si256(w, _mm256_add_epi8(_mm256_loadu_si256(w), base));
            }

            for &e in neg {
                let w: *mut __m256i = off.add(e) as *mut __m256i;
                _mm256_storeu_si256(w, _mm256_sub_epi8(_mm256_loadu_si256(w), base));
            }
        }
    }

    let rr: *mut __m256i = res.as_mut_ptr() as *mut __m256i;
    let lo: *const __m256i = tmp.as_ptr() as *const __m256i;

    unsafe {
        let hi: *const __m256i = tmp.as_ptr().add(n) as *const __m256i;
        for j in 0..lanes {
            let diff: __m256i = _mm256_sub_epi8(_mm256_loadu_si256(lo.add(j)), _mm256_loadu_si256(hi.add(j)));
            _mm256_storeu_si256(rr.add(j), diff);
        }
    }
}
