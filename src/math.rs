//! Integer helpers shared by the sieves

/// Divide and round up. Used to size bit vectors in whole words.
pub fn ceil_div(numerator: usize, denominator: usize) -> usize {
    numerator / denominator + (numerator % denominator != 0) as usize
}

/// Largest x such that x * x <= n.
///
/// f64 only has 53 bits of mantissa, so its square root can be off by one for large n. Seed with
/// the float estimate, then correct in integer space until x is exact.
pub fn isqrt(n: u64) -> u64 {
    let mut x = (n as f64).sqrt() as u64;
    while x.checked_mul(x).map_or(true, |square| square > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |square| square <= n) {
        x += 1;
    }
    x
}

/// Trial division, for checking sieve output in tests.
#[cfg(test)]
pub fn is_prime(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}
