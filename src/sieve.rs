use std::cmp;

use crate::constants::SEGMENT_LENGTH;
use crate::math::isqrt;
use crate::prime_sieve::generate_primes;
use crate::segment::Segment;

/// Segmented sieve of Eratosthenes over an inclusive range of u64s
///
/// The plain sieve keeps a flag for every number up to the bound in memory at once, striding
/// through the whole array once per prime. A segmented sieve partitions the range into contiguous
/// segments of SEGMENT_LENGTH numbers instead. Once a segment's primes have been yielded its
/// memory is dropped and the next segment is sieved in its place.
///
/// Each segment is struck by the origin primes: the primes up to sqrt(high), found up front with
/// [`generate_primes`]. These suffice because every composite n <= high has a prime factor
/// <= sqrt(n).
///
/// Usage:
///
///     use eratosthenes::Sieve;
///
///     assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19], Sieve::segmented(20).collect::<Vec<_>>());
///     assert_eq!(vec![83, 89, 97], Sieve::range(80, 100).collect::<Vec<_>>());
pub struct Sieve {
    high: u64,
    yield_two: bool,
    origin_primes: Vec<u64>,
    segment_last: u64,
    segment: Option<Segment>,
}

impl Sieve {
    /// Primes in [2, bound].
    pub fn segmented(bound: u64) -> Sieve {
        Sieve::range(0, bound)
    }

    /// Primes in [low, high]. Empty if low > high.
    pub fn range(low: u64, high: u64) -> Sieve {
        let yield_two = low <= 2 && 2 <= high;

        // 2 is yielded on its own, so segments only ever hold odd candidates >= 3.
        let segment_start = cmp::max(low, 3);
        if segment_start > high {
            return Sieve {
                high,
                yield_two,
                origin_primes: Vec::new(),
                segment_last: high,
                segment: None,
            };
        }

        let origin_primes = Sieve::origin_primes(high);
        let segment_last = Sieve::segment_last(segment_start, high);
        let segment = Some(Segment::new(&origin_primes, segment_start, segment_last));

        Sieve {
            high,
            yield_two,
            origin_primes,
            segment_last,
            segment,
        }
    }

    /// Odd primes up to sqrt(high).
    fn origin_primes(high: u64) -> Vec<u64> {
        // isqrt(u64::MAX) < 2^32, so this always fits in an i64.
        let origin_end = isqrt(high) as i64;
        generate_primes(origin_end)
            .into_iter()
            .filter(|&p| p != 2)
            .collect()
    }

    fn segment_last(segment_start: u64, high: u64) -> u64 {
        cmp::min(segment_start.saturating_add(SEGMENT_LENGTH - 1), high)
    }

    // Was this the last segment to sieve?
    fn done(&self) -> bool {
        self.segment_last == self.high
    }

    // Sieve the next segment in place of the exhausted one
    fn advance_segment(&mut self) {
        let segment_start = self.segment_last + 1;
        self.segment_last = Sieve::segment_last(segment_start, self.high);
        self.segment = Some(Segment::new(
            &self.origin_primes,
            segment_start,
            self.segment_last,
        ));
    }
}

impl Iterator for Sieve {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.yield_two {
            self.yield_two = false;
            return Some(2);
        }
        loop {
            if let Some(p) = self.segment.as_mut()?.next() {
                return Some(p);
            }
            if self.done() {
                self.segment = None;
                return None;
            }
            self.advance_segment();
        }
    }
}
