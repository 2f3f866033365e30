use crate::bit_vec::BitVec;

/// Iterate through the primes of one segment [segment_start, segment_last] of the sieve.
///
/// Only odd numbers get a flag, so bit i of the segment stands for odd_start + 2 * i where
/// odd_start is the first odd number at or after segment_start. Even numbers are never prime
/// past 2, which the caller handles separately.
///
/// Every odd composite n in the segment has a prime factor p <= sqrt(n), so striking the odd
/// multiples of all odd origin primes p <= sqrt(segment_last) leaves exactly the primes.
/// Striking starts at p * p at the earliest, so an origin prime inside the segment survives.
pub struct Segment {
    sieve: BitVec,
    odd_start: u64,
    bit_len: usize,
}

impl Iterator for Segment {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.sieve.next()?;
        Some(self.bit_to_n(bit))
    }
}

impl Segment {
    /// Create a Segment over [segment_start, segment_last] and sieve it.
    ///
    /// origin_primes must be the ascending odd primes up to at least sqrt(segment_last), and
    /// segment_start must be at least 3.
    pub fn new(origin_primes: &[u64], segment_start: u64, segment_last: u64) -> Segment {
        let odd_start = segment_start | 1;
        let bit_len = if segment_last >= odd_start {
            ((segment_last - odd_start) / 2 + 1) as usize
        } else {
            0
        };
        let sieve = BitVec::new(bit_len);

        let mut segment = Segment {
            sieve,
            odd_start,
            bit_len,
        };
        for &p in origin_primes {
            if p * p > segment_last {
                break;
            }
            segment.strike_prime(p);
        }
        segment
    }

    /// Strike the odd multiples of p within the segment.
    ///
    /// Note that a step of p in bit offsets corresponds to a step of 2 * p in number space.
    fn strike_prime(&mut self, p: u64) {
        let first_multiple = match Segment::first_multiple(p, self.odd_start) {
            Some(multiple) => multiple,
            None => return,
        };
        let step = p as usize;
        let mut bit_multiple = self.n_to_bit(first_multiple);
        while bit_multiple < self.bit_len {
            self.sieve.cross_out(bit_multiple);
            bit_multiple += step;
        }
    }

    /// First odd multiple of p that is at least p * p and at least odd_start.
    ///
    /// None when that multiple does not fit in a u64, in which case nothing in range needs striking.
    fn first_multiple(p: u64, odd_start: u64) -> Option<u64> {
        let factor = odd_start / p + (odd_start % p != 0) as u64;
        let multiple = p.checked_mul(factor)?.max(p * p);
        if multiple % 2 == 0 {
            multiple.checked_add(p)
        } else {
            Some(multiple)
        }
    }

    /// Convert between numbers and bit offsets within the segment.
    fn n_to_bit(&self, n: u64) -> usize {
        ((n - self.odd_start) / 2) as usize
    }
    fn bit_to_n(&self, bit: usize) -> u64 {
        self.odd_start + 2 * bit as u64
    }
}
