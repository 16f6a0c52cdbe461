/// Dense negacyclic product `res = a * b mod (X^N + 1)` over `i64`, in `O(N^2)`.
///
/// Independent of the sparse kernels; tests use it as an oracle.
pub fn znx_negacyclic_mul_i64_ref(res: &mut [i64], a: &[i64], b: &[i64]) {
    let n: usize = res.len();

    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), n);
        assert_eq!(b.len(), n);
    }

    res.fill(0);
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            let k: usize = i + j;
            if k < n {
                res[k] += ai * bj;
            } else {
                res[k - n] -= ai * bj;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_to_the_n_is_minus_one() {
        // X^3 * X^2 = X^5 = -X in Z[X]/(X^4 + 1)
        let a: Vec<i64> = vec![0, 0, 0, 1];
        let b: Vec<i64> = vec![0, 0, 1, 0];
        let mut res: Vec<i64> = vec![0; 4];
        znx_negacyclic_mul_i64_ref(&mut res, &a, &b);
        assert_eq!(res, vec![0, -1, 0, 0]);
    }

    #[test]
    fn dense_product() {
        // (1 + X) * (1 - X + X^3) = 1 + X^3 - X^2 + X^4 = X^3 - X^2 + 0X + 0
        let a: Vec<i64> = vec![1, 1, 0, 0];
        let b: Vec<i64> = vec![1, -1, 0, 1];
        let mut res: Vec<i64> = vec![0; 4];
        znx_negacyclic_mul_i64_ref(&mut res, &a, &b);
        assert_eq!(res, vec![0, 0, -1, 1]);
    }
}
