//! Word/bit index arithmetic.
//!
//! Every other module goes through these helpers, so the capacity and
//! offset formulas live in exactly one place.

/// Width of one storage word, in bits.
pub(crate) const WORD_BITS: usize = u64::BITS as usize;

/// Number of words needed to hold `len` logical bits.
#[inline]
pub(crate) const fn word_count(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

/// Index of the word holding bit `bit`.
#[inline]
pub(crate) const fn word_index(bit: usize) -> usize {
    bit / WORD_BITS
}

/// Position of bit `bit` within its word.
#[inline]
pub(crate) const fn bit_offset(bit: usize) -> usize {
    bit % WORD_BITS
}

/// Mask with the low `n` bits set. `n` is clamped to the word width.
#[inline]
pub(crate) const fn low_mask(n: usize) -> u64 {
    if n >= WORD_BITS {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_at_boundaries() {
        assert_eq!(word_count(0), 0);
        assert_eq!(word_count(1), 1);
        assert_eq!(word_count(63), 1);
        assert_eq!(word_count(64), 1);
        assert_eq!(word_count(65), 2);
        assert_eq!(word_count(128), 2);
        assert_eq!(word_count(129), 3);
    }

    #[test]
    fn word_index_and_offset() {
        assert_eq!(word_index(0), 0);
        assert_eq!(bit_offset(0), 0);
        assert_eq!(word_index(63), 0);
        assert_eq!(bit_offset(63), 63);
        assert_eq!(word_index(64), 1);
        assert_eq!(bit_offset(64), 0);
    }

    #[test]
    fn low_mask_edges() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(1), 1);
        assert_eq!(low_mask(8), 0xFF);
        assert_eq!(low_mask(63), u64::MAX >> 1);
        assert_eq!(low_mask(64), u64::MAX);
        assert_eq!(low_mask(100), u64::MAX);
    }
}
