use crate::math::ceil_div;

/// Packed crossed-out flags, one bit per index in [0, len).
///
/// A set bit means the index is still a prime candidate; crossing it out clears the bit. Iterating
/// consumes the vector and yields the indices that were never crossed out, in ascending order.
pub struct BitVec {
    bit_vec: Vec<u64>,
    word_index: usize,
    bit_index: usize,
}

impl Iterator for BitVec {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let word = self.bit_vec.get(self.word_index)?;
            let masked_word = word & BitVec::greater_or_equal_bits(self.bit_index);
            match BitVec::find_first_set(masked_word) {
                Some(bit_index) => {
                    let result = (self.word_index << BitVec::SHIFT) + bit_index;
                    if bit_index + 1 == BitVec::WORD_BITS {
                        self.word_index += 1;
                        self.bit_index = 0;
                    } else {
                        self.bit_index = bit_index + 1;
                    }
                    return Some(result);
                }
                None => {
                    self.word_index += 1;
                    self.bit_index = 0;
                }
            }
        }
    }
}

impl BitVec {
    const WORD_BITS: usize = 64;
    const SHIFT: usize = 6;
    const MASK: usize = 0b11_1111;
    const ONES: u64 = u64::MAX;

    /// Create len flags, none of them crossed out.
    pub fn new(len: usize) -> BitVec {
        let mut bit_vec = vec![BitVec::ONES; ceil_div(len, BitVec::WORD_BITS)];
        // Clear the padding bits past len in the last word so iteration never yields them.
        if let Some(end) = bit_vec.get_mut(len >> BitVec::SHIFT) {
            *end &= !BitVec::greater_or_equal_bits(len & BitVec::MASK);
        }
        let word_index = 0;
        let bit_index = 0;

        BitVec {
            bit_vec,
            word_index,
            bit_index,
        }
    }

    /// Mark index as composite. Panics if index is past the last word.
    #[inline]
    pub fn cross_out(&mut self, index: usize) {
        self.bit_vec[index >> BitVec::SHIFT] &= !(1u64 << (index & BitVec::MASK));
    }

    #[inline]
    pub fn is_crossed_out(&self, index: usize) -> bool {
        self.bit_vec[index >> BitVec::SHIFT] & (1u64 << (index & BitVec::MASK)) == 0
    }

    #[inline]
    fn greater_or_equal_bits(bit_index: usize) -> u64 {
        BitVec::ONES << bit_index
    }

    /// Find the first set bit in word. This index is equal to the number of word's trailing zeros.
    fn find_first_set(word: u64) -> Option<usize> {
        if word == 0 {
            return None;
        }
        Some(word.trailing_zeros() as usize)
    }
}
