use crate::Count;
use crate::product::product;

/// Returns the factorial `n! = n * (n - 1) * ... * 1`, where `0! = 1`.
pub fn factorial(n: Count) -> Count {
    product(2, n)
}

/// Returns the subfactorial `!n`, the number of derangements of `n` elements.
///
/// Uses `!n = n!/0! - n!/1! + n!/2! - ... ± n!/n!`, where the positive and
/// negative terms are summed separately from the largest term down:
///
///   s0 = 1 + n(n - 1) + n(n - 1)(n - 2)(n - 3) + ...
///   s1 = n + n(n - 1)(n - 2) + ...
///
/// Then `!n = s0 - s1` for even `n` and `s1 - s0` for odd `n`.
pub fn subfactorial(mut n: Count) -> Count {
    let mut p: Count = 1;
    let mut s0: Count = 1;
    let mut s1: Count = 0;

    loop {
        if n == 0 {
            return s0.wrapping_sub(s1);
        }
        p = p.wrapping_mul(n);
        s1 = s1.wrapping_add(p);
        n -= 1;

        if n == 0 {
            return s1.wrapping_sub(s0);
        }
        p = p.wrapping_mul(n);
        s0 = s0.wrapping_add(p);
        n -= 1;
    }
}

/// Returns the superfactorial `sf(n) = 1! * 2! * ... * n!`, where `sf(0) = 1`.
pub fn superfactorial(n: Count) -> Count {
    let (_, result) = (1..=n).fold((1, 1), |(p, pp): (Count, Count), i| {
        let p = p.wrapping_mul(i);
        (p, pp.wrapping_mul(p))
    });

    result
}

/// Returns the multifactorial `n * (n - m) * (n - 2m) * ...` for as long as the
/// terms stay positive.
///
/// By convention the result is zero when `m = 0`, and otherwise one when `n = 0`.
pub fn multifactorial(mut n: Count, m: Count) -> Count {
    if m == 0 {
        return 0;
    }
    if n == 0 {
        return 1;
    }

    let mut p = n;
    while m < n {
        n -= m;
        p = p.wrapping_mul(n);
    }
    p
}

/// Returns the rising factorial `n * (n + 1) * ... * (n + m - 1)`.
///
/// This is one for `m = 0`, except that the rising factorial of zero by zero
/// is defined to be zero.
pub fn rising_factorial(n: Count, m: Count) -> Count {
    if n == 0 && m == 0 {
        return 0;
    }

    let upper = n.wrapping_add(m).wrapping_sub(1);
    (n..=upper).rev().fold(1, |p: Count, factor| p.wrapping_mul(factor))
}
