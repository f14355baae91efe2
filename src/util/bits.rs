const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-size set of bits, packed into `u64` words. Backs the prime sieve and the permutation
/// state check, neither of which needs growth or iteration - just set, clear, test and count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<u64>,
    len: usize,
}

impl BitSet {
    /// Creates a BitSet of `len` bits, all zero.
    pub fn empty(len: usize) -> BitSet {
        BitSet {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Creates a BitSet of `len` bits, all one. Bits in the final word beyond `len` are kept zero
    /// so that [`count_ones`](BitSet::count_ones) stays honest.
    pub fn filled(len: usize) -> BitSet {
        let mut words = vec![u64::MAX; len.div_ceil(WORD_BITS)];
        if len % WORD_BITS != 0
            && let Some(last) = words.last_mut()
        {
            *last = (1_u64 << (len % WORD_BITS)) - 1;
        }
        BitSet { words, len }
    }

    /// The number of bits in the set.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set holds no bits at all.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value of the bit at `index`. Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Sets the bit at `index` to one. Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    /// Sets the bit at `index` to zero. Panics if `index` is out of bounds.
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / WORD_BITS] &= !(1 << (index % WORD_BITS));
    }

    /// The number of one bits in the set.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut bits = BitSet::empty(130);
        assert_eq!(bits.len(), 130);
        assert!(!bits.is_empty());
        assert_eq!(bits.count_ones(), 0, "An empty BitSet should hold no ones.");

        bits.set(0);
        bits.set(64);
        bits.set(129);
        assert!(bits.get(0) && bits.get(64) && bits.get(129));
        assert!(!bits.get(63), "Untouched bits should read as zero.");
        assert_eq!(bits.count_ones(), 3);

        bits.clear(64);
        assert!(!bits.get(64));
        assert_eq!(bits.count_ones(), 2);
    }

    #[test]
    fn test_filled_tail() {
        let bits = BitSet::filled(70);
        assert_eq!(
            bits.count_ones(),
            70,
            "Bits past the length should not count towards the total."
        );
        assert!(bits.get(69));

        assert!(BitSet::filled(0).is_empty());
        assert_eq!(BitSet::filled(64).count_ones(), 64);
    }
}
