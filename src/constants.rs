/// Number of integers covered by one segment of the segmented sieve.
///
/// Only odd integers get a bit, so a segment occupies SEGMENT_LENGTH / 16 bytes (16 KiB), which
/// fits in the L1/L2 cache of most modern CPUs.
pub const SEGMENT_LENGTH: u64 = 1 << 18;
