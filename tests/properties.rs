use proptest::prelude::*;

use eratosthenes::{generate_primes, Sieve};

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

proptest! {
    #[test]
    fn below_two_is_empty(max_value in i64::MIN..2) {
        prop_assert!(generate_primes(max_value).is_empty());
    }

    #[test]
    fn idempotent(max_value in -10i64..5_000) {
        prop_assert_eq!(generate_primes(max_value), generate_primes(max_value));
    }

    #[test]
    fn every_element_is_prime(max_value in 0i64..5_000) {
        let primes = generate_primes(max_value);
        for &p in &primes {
            prop_assert!(is_prime(p), "{} is not prime", p);
        }
        prop_assert!(primes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_prime_is_listed(max_value in 0i64..2_000) {
        let expected = (0..=max_value as u64).filter(|&n| is_prime(n)).collect::<Vec<_>>();
        prop_assert_eq!(expected, generate_primes(max_value));
    }

    #[test]
    fn monotonic_containment(b1 in 0i64..3_000, delta in 1i64..3_000) {
        let smaller = generate_primes(b1);
        let larger = generate_primes(b1 + delta);
        prop_assert!(smaller.len() <= larger.len());
        prop_assert_eq!(&smaller[..], &larger[..smaller.len()]);
    }

    #[test]
    fn segmented_matches_plain_sieve(bound in 0u64..20_000) {
        prop_assert_eq!(
            generate_primes(bound as i64),
            Sieve::segmented(bound).collect::<Vec<_>>()
        );
    }

    #[test]
    fn range_matches_filtered_plain_sieve(low in 0u64..10_000, len in 0u64..10_000) {
        let high = low + len;
        let expected = generate_primes(high as i64)
            .into_iter()
            .filter(|&p| p >= low)
            .collect::<Vec<_>>();
        prop_assert_eq!(expected, Sieve::range(low, high).collect::<Vec<_>>());
    }
}
