//! Sieves of Eratosthenes for enumerating primes up to a bound

// Internal modules
mod bit_vec;
mod constants;
mod math;
mod prime_sieve;
mod segment;
mod sieve;

pub use prime_sieve::generate_primes;
pub use sieve::Sieve;
