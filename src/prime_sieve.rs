use std::cmp;

use crate::bit_vec::BitVec;
use crate::math::isqrt;

/// Generate every prime in [2, max_value], ascending.
///
/// This is the plain sieve of Eratosthenes over a fresh array of crossed-out flags, one per
/// integer in [0, max_value]. Each candidate i up to sqrt(max_value + 1) + 1 that is still
/// uncrossed is prime, so every multiple of it from 2 * i onward gets crossed out. Whatever
/// survives in [2, max_value] is prime.
///
/// Any integer is accepted. A bound below 2 has no primes and yields an empty vector.
///
/// Usage:
///
///     use eratosthenes::generate_primes;
///
///     assert_eq!(vec![2, 3, 5, 7], generate_primes(10));
///     assert!(generate_primes(-7).is_empty());
///
/// Memory use is one bit per integer up to max_value; for large bounds prefer
/// [`Sieve::segmented`](crate::Sieve::segmented).
pub fn generate_primes(max_value: i64) -> Vec<u64> {
    if max_value < 2 {
        return Vec::new();
    }
    // Saturate rather than wrap on targets where usize is narrower than i64; the allocation
    // then fails the same way any oversized Vec would.
    let len = usize::try_from(max_value).map_or(usize::MAX, |n| n.saturating_add(1));

    let mut crossed_out = BitVec::new(len);
    crossed_out.cross_out(0);
    crossed_out.cross_out(1);

    for i in 2..=max_prime_factor(len) {
        if !crossed_out.is_crossed_out(i) {
            for multiple in (2 * i..len).step_by(i) {
                crossed_out.cross_out(multiple);
            }
        }
    }

    crossed_out.map(|p| p as u64).collect()
}

/// Largest candidate whose multiples still need crossing out in a flag array of length len.
///
/// isqrt is exact, so floor(sqrt(len)) + 1 already overshoots the largest possible smallest
/// factor of any composite below len. Clamped so the candidate is always a valid flag index.
fn max_prime_factor(len: usize) -> usize {
    let factor = isqrt(len as u64) as usize + 1;
    cmp::min(factor, len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_prime;

    #[test]
    fn generate_primes_degenerate() {
        assert_eq!(vec![0; 0], generate_primes(i64::MIN));
        assert_eq!(vec![0; 0], generate_primes(-1));
        assert_eq!(vec![0; 0], generate_primes(0));
        assert_eq!(vec![0; 0], generate_primes(1));
    }

    #[test]
    fn generate_primes_small() {
        assert_eq!(vec![2], generate_primes(2));
        assert_eq!(vec![2, 3], generate_primes(3));
        assert_eq!(vec![2, 3], generate_primes(4));
        assert_eq!(vec![2, 3, 5, 7], generate_primes(10));
        assert_eq!(
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29],
            generate_primes(30)
        );
    }

    #[test]
    fn generate_primes_perfect_squares() {
        for &square in &[4, 9, 25, 49, 121, 169, 289, 361, 529, 841, 961] {
            for max_value in square - 1..=square + 1 {
                let expected = (0..=max_value as u64).filter(|&n| is_prime(n)).collect::<Vec<_>>();
                assert_eq!(expected, generate_primes(max_value), "max_value = {}", max_value);
            }
        }
    }

    #[test]
    fn generate_primes_word_boundaries() {
        for &max_value in &[63, 64, 65, 127, 128, 129] {
            let expected = (0..=max_value as u64).filter(|&n| is_prime(n)).collect::<Vec<_>>();
            assert_eq!(expected, generate_primes(max_value), "max_value = {}", max_value);
        }
    }

    #[test]
    fn generate_primes_counts() {
        assert_eq!(25, generate_primes(100).len());
        assert_eq!(168, generate_primes(1000).len());
        assert_eq!(1229, generate_primes(10_000).len());
        assert_eq!(Some(&997), generate_primes(1000).last());
    }

    #[test]
    fn max_prime_factor_clamped() {
        assert_eq!(2, max_prime_factor(3));
        assert_eq!(3, max_prime_factor(4));
        assert_eq!(4, max_prime_factor(11));
        assert_eq!(6, max_prime_factor(25));
        assert_eq!(6, max_prime_factor(26));
    }
}
