use itertools::izip;

/// Reduces a double-length product modulo `X^N + 1`: `res[i] = tmp[i] - tmp[i + N]`.
#[inline(always)]
pub fn znx_negacyclic_fold_ref(res: &mut [i8], tmp: &[i8]) {
    let n: usize = res.len();

    #[cfg(debug_assertions)]
    {
        assert!(tmp.len() >= n << 1, "tmp.len()={} < 2n={}", tmp.len(), n << 1);
    }

    let (lo, hi) = tmp[..n << 1].split_at(n);
    izip!(res.iter_mut(), lo.iter(), hi.iter()).for_each(|(r, &x, &y)| *r = x.wrapping_sub(y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_subtracts_high_half() {
        let tmp: Vec<i8> = vec![1, 2, 3, 4, 10, 20, 30, 40];
        let mut res: Vec<i8> = vec![0; 4];
        znx_negacyclic_fold_ref(&mut res, &tmp);
        assert_eq!(res, vec![-9, -18, -27, -36]);
    }

    #[test]
    fn fold_wraps() {
        let tmp: Vec<i8> = vec![-128, 127, 1, -1];
        let mut res: Vec<i8> = vec![0; 2];
        znx_negacyclic_fold_ref(&mut res, &tmp);
        assert_eq!(res, vec![127, -128]);
    }
}
