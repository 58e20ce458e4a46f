use tally_utilities::debug_trace;

use crate::Count;
use crate::product::divided_product;
use crate::product::product;

/// Returns the number of permutations without repetition, `P(n, m) = n! / (n - m)!`.
///
/// This is `n * (n - 1) * ... * (n - m + 1)`, and zero when `n < m`.
pub fn p_count(n: Count, m: Count) -> Count {
    if n < m {
        return 0;
    }

    match (n - m).checked_add(1) {
        Some(lower) => product(lower, n),
        // Only for n = Count::MAX and m = 0, which is the empty product.
        None => 1,
    }
}

/// Returns the number of permutations with repetition of a multiset with the
/// given multiplicities, `Pr(m0, m1, ...) = (m0 + m1 + ...)! / (m0! * m1! * ...)`.
///
/// The multinomial is computed as a product of binomial coefficients, folding
/// the multiplicities in from the last one. An empty or single element list
/// gives one. See [`crate::pr_count!`] for a variadic form.
pub fn pr_count(multiplicities: &[Count]) -> Count {
    let Some((&last, rest)) = multiplicities.split_last() else {
        return 1;
    };

    // The window start is one more than the number of elements placed so far.
    let (result, _) = rest.iter().rev().fold((1, last.wrapping_add(1)), |(p, start): (Count, Count), &m| {
        let next = start.wrapping_add(m);
        debug_trace!("pr_count window [{start}, {}]", next.wrapping_sub(1));
        (p.wrapping_mul(divided_product(start, next.wrapping_sub(1))), next)
    });

    result
}

/// Returns the number of combinations without repetition, `C(n, m) = n! / ((n - m)! * m!)`.
///
/// Computed as `(n - m + 1) / 1 * (n - m + 2) / 2 * ... * n / m`, and zero when `n < m`.
pub fn c_count(n: Count, m: Count) -> Count {
    if n < m {
        return 0;
    }

    match (n - m).checked_add(1) {
        Some(lower) => divided_product(lower, n),
        // Only for n = Count::MAX and m = 0, which is the empty product.
        None => 1,
    }
}

/// Returns the number of combinations with repetition, `Cr(n, m) = C(n + m - 1, m)`.
///
/// By convention `Cr(0, 0) = 0`.
pub fn cr_count(n: Count, m: Count) -> Count {
    if n == 0 && m == 0 {
        return 0;
    }

    divided_product(n, n.wrapping_add(m).wrapping_sub(1))
}

/// Returns the number of words of length `m` over an alphabet of `n` letters, `W(n, m) = n^m`.
///
/// Uses exponentiation by squaring, so the number of steps is bounded by the
/// bit width of `m`. Note that `W(0, 0) = 1`.
pub fn w_count(mut n: Count, mut m: Count) -> Count {
    let mut p: Count = 1;
    while m != 0 {
        if m & 1 == 1 {
            p = p.wrapping_mul(n);
        }
        n = n.wrapping_mul(n);
        m >>= 1;
    }
    p
}

#[cfg(test)]
mod tests {
    use num::BigUint;
    use num::ToPrimitive;
    use rand::Rng;
    use test_case::test_case;

    use tally_macros::tally_test;
    use tally_utilities::random_test;

    use crate::factorial;
    use crate::pr_count;

    use super::*;

    #[test_case(5, 3, 60)]
    #[test_case(5, 0, 1)]
    #[test_case(5, 5, 120)]
    #[test_case(2, 5, 0)]
    #[test_case(0, 0, 1)]
    #[test_case(0, 1, 0)]
    fn test_p_count(n: Count, m: Count, expected: Count) {
        assert_eq!(p_count(n, m), expected);
    }

    #[test]
    fn test_p_count_largest_n() {
        assert_eq!(p_count(Count::MAX, 0), 1);
        assert_eq!(p_count(Count::MAX, 1), Count::MAX);
    }

    #[tally_test]
    fn test_p_count_full_is_factorial() {
        for n in 0..100 {
            assert_eq!(p_count(n, n), factorial(n), "P({n}, {n})");
        }
    }

    #[test]
    fn test_pr_count_boundaries() {
        assert_eq!(pr_count(&[]), 1);
        assert_eq!(pr_count(&[7]), 1);
        assert_eq!(pr_count(&[0, 0, 0]), 1);
    }

    #[test_case(&[2, 3], 10 ; "two and three")]
    #[test_case(&[3, 2], 10 ; "order independent")]
    #[test_case(&[1, 1, 1, 1], 24 ; "all distinct")]
    #[test_case(&[4, 4, 2, 1], 34_650 ; "mississippi")]
    #[test_case(&[0, 5], 1 ; "leading zero")]
    fn test_pr_count(multiplicities: &[Count], expected: Count) {
        assert_eq!(pr_count(multiplicities), expected);
    }

    #[test]
    fn test_pr_count_macro() {
        assert_eq!(pr_count![], 1);
        assert_eq!(pr_count![2, 3], 10);
        assert_eq!(pr_count![4, 4, 2, 1,], 34_650);
    }

    #[tally_test]
    fn test_random_pr_count_multinomial() {
        random_test(100, |rng| {
            let length = rng.random_range(0..6);
            let multiplicities: Vec<Count> = (0..length).map(|_| rng.random_range(0..6)).collect();

            // The sum is at most 25, so compute the multinomial exactly.
            let factorial_big = |n: Count| (1..=n).fold(BigUint::from(1u32), |p, k| p * BigUint::from(k));
            let total: Count = multiplicities.iter().sum();
            let denominator = multiplicities
                .iter()
                .fold(BigUint::from(1u32), |p, &m| p * factorial_big(m));
            let expected = (factorial_big(total) / denominator).to_u64();

            assert_eq!(Some(pr_count(&multiplicities)), expected, "Pr{multiplicities:?}");
        });
    }

    #[test_case(5, 3, 10)]
    #[test_case(5, 0, 1)]
    #[test_case(2, 5, 0)]
    #[test_case(0, 0, 1)]
    #[test_case(52, 5, 2_598_960)]
    #[test_case(60, 30, 118_264_581_564_861_424)]
    fn test_c_count(n: Count, m: Count, expected: Count) {
        assert_eq!(c_count(n, m), expected);
    }

    #[tally_test]
    fn test_random_c_count_symmetry() {
        random_test(100, |rng| {
            let n: Count = rng.random_range(0..60);
            let m: Count = rng.random_range(0..=n);
            assert_eq!(c_count(n, m), c_count(n, n - m), "C({n}, {m})");
        });
    }

    #[tally_test]
    fn test_c_count_pascal() {
        for n in 1..60 {
            for m in 1..=n {
                assert_eq!(c_count(n, m), c_count(n - 1, m - 1) + c_count(n - 1, m), "C({n}, {m})");
            }
        }
    }

    #[test_case(0, 0, 0)]
    #[test_case(3, 2, 6)]
    #[test_case(0, 2, 0)]
    #[test_case(4, 0, 1)]
    #[test_case(1, 10, 1)]
    #[test_case(10, 3, 220)]
    fn test_cr_count(n: Count, m: Count, expected: Count) {
        assert_eq!(cr_count(n, m), expected);
    }

    #[tally_test]
    fn test_random_cr_count_is_c_count() {
        random_test(100, |rng| {
            let n: Count = rng.random_range(1..40);
            let m: Count = rng.random_range(0..20);
            assert_eq!(cr_count(n, m), c_count(n + m - 1, m), "Cr({n}, {m})");
        });
    }

    #[test_case(0, 0, 1)]
    #[test_case(0, 3, 0)]
    #[test_case(3, 0, 1)]
    #[test_case(2, 10, 1024)]
    #[test_case(3, 40, 12_157_665_459_056_928_801)]
    #[test_case(2, 64, 0 ; "wraps to zero")]
    fn test_w_count(n: Count, m: Count, expected: Count) {
        assert_eq!(w_count(n, m), expected);
    }

    #[tally_test]
    fn test_random_w_count_wraps() {
        random_test(100, |rng| {
            let n: Count = rng.random();
            let m: u32 = rng.random_range(0..1000);
            assert_eq!(w_count(n, Count::from(m)), n.wrapping_pow(m), "W({n}, {m})");
        });
    }
}
