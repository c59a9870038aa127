//! Dynamic-length bit sequence packed into `u64` words.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use bit_store::BitStore;
//!
//! let mut bits = BitStore::with_len(8);
//! bits.set(0, true);
//! bits.set(3, true);
//!
//! assert_eq!(bits.get(0), Ok(true));
//! assert_eq!(bits.count(), 2);
//! assert_eq!(bits.to_text(), "00001001");
//! ```
//!
//! ## Bitwise combination
//!
//! ```rust
//! use bit_store::BitStore;
//!
//! let a = BitStore::with_word(8, 0b0000_1001);
//! let b = BitStore::with_word(8, 0b0000_1100);
//!
//! assert_eq!(a.and(&b).unwrap().to_text(), "00001000");
//! assert_eq!(a.or(&b).unwrap().to_text(), "00001101");
//! assert_eq!((&a << 1).to_text(), "00010010");
//! ```
//!
use core::fmt;
use core::mem;
use core::ops::{
    BitAndAssign, BitOrAssign, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign,
};

use crate::BitStoreError;
use crate::bit_ops::{self, WORD_BITS};

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

type Result<T> = core::result::Result<T, BitStoreError>;

/// An ordered sequence of logical bits, stored `WORD_BITS` per word.
///
/// The buffer always holds exactly `len.div_ceil(WORD_BITS)` words, and any
/// bit positions at index >= `len` in the last word (the padding bits) are
/// kept at zero. Every whole-word bulk operation re-masks the last word, so
/// counting, equality and rendering never observe padding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStore {
    words: Vec<u64>,
    len: usize,
}

impl BitStore {
    /// Creates an empty store of zero bits.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Creates a store of `len` zero bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_store::BitStore;
    ///
    /// let bits = BitStore::with_len(100);
    /// assert_eq!(bits.len(), 100);
    /// assert!(bits.none());
    /// ```
    pub fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; bit_ops::word_count(len)],
            len,
        }
    }

    /// Creates a store of `len` bits whose first word is initialized from
    /// `init`, masked to the low `min(len, WORD_BITS)` bits. All bits past
    /// one word width start at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_store::BitStore;
    ///
    /// let bits = BitStore::with_word(4, 0xFF);
    /// assert_eq!(bits.to_text(), "1111");
    /// ```
    pub fn with_word(len: usize, init: u64) -> Self {
        let mut store = Self::with_len(len);
        if let Some(first) = store.words.first_mut() {
            *first = init & bit_ops::low_mask(len.min(WORD_BITS));
        }
        store
    }

    /// Number of logical bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bit at `index`, or [`BitStoreError::OutOfRange`] when
    /// `index >= len`.
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(BitStoreError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let word = self.words[bit_ops::word_index(index)];
        Ok((word >> bit_ops::bit_offset(index)) & 1 == 1)
    }

    /// Writes the bit at `index`. An out-of-range index is silently ignored;
    /// callers that need growth must call [`resize`](Self::resize) or
    /// [`push`](Self::push) first. Note the asymmetry with
    /// [`get`](Self::get), which reports out-of-range reads as errors.
    pub fn set(&mut self, index: usize, value: bool) {
        if index >= self.len {
            return;
        }
        let word = &mut self.words[bit_ops::word_index(index)];
        let mask = 1u64 << bit_ops::bit_offset(index);
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Sets every bit to 1.
    pub fn set_all(&mut self) {
        for word in &mut self.words {
            *word = u64::MAX;
        }
        self.mask_padding();
    }

    /// Clears the bit at `index`. Out-of-range indices are ignored, as in
    /// [`set`](Self::set).
    pub fn reset(&mut self, index: usize) {
        self.set(index, false);
    }

    /// Sets every bit to 0 without changing the length.
    pub fn reset_all(&mut self) {
        self.clear();
    }

    /// Sets every bit to 0 without changing the length.
    pub fn clear(&mut self) {
        for word in &mut self.words {
            *word = 0;
        }
    }

    /// Changes the logical length to `new_len`.
    ///
    /// The overlapping prefix is preserved bit-for-bit (the buffer is resized
    /// by word count, never by a byte count derived from the bit length).
    /// Bits introduced by growth all equal `fill`; bits removed by shrinking
    /// are discarded and the padding in the final word is re-masked to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_store::BitStore;
    ///
    /// let mut bits = BitStore::with_word(3, 0b111);
    /// bits.resize(1, false);
    /// bits.resize(3, true);
    /// assert_eq!(bits.to_text(), "111");
    ///
    /// bits.resize(5, false);
    /// assert_eq!(bits.to_text(), "00111");
    /// ```
    pub fn resize(&mut self, new_len: usize, fill: bool) {
        if new_len == self.len {
            return;
        }
        let old_len = self.len;
        self.words.resize(bit_ops::word_count(new_len), 0);
        self.len = new_len;
        if new_len < old_len {
            // Discarded bits in the surviving last word must not linger.
            self.mask_padding();
        } else if fill {
            for i in old_len..new_len {
                self.set(i, true);
            }
        }
    }

    /// Appends one bit at the highest index, growing the length by one.
    pub fn push(&mut self, bit: bool) {
        self.resize(self.len + 1, false);
        self.set(self.len - 1, bit);
    }

    /// Exchanges the contents of two stores without copying bit values.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.words, &mut other.words);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// True iff at least one bit is 1.
    pub fn any(&self) -> bool {
        self.words.iter().any(|&word| word != 0)
    }

    /// True iff every bit is 0.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Number of bits equal to 1.
    pub fn count(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Bitwise AND of two equal-length stores.
    ///
    /// Returns [`BitStoreError::LengthMismatch`] when the lengths differ.
    /// The in-place `&=` operator accepts differing lengths instead.
    pub fn and(&self, other: &Self) -> Result<Self> {
        self.require_same_len(other)?;
        let mut out = self.clone();
        out &= other;
        Ok(out)
    }

    /// Bitwise OR of two equal-length stores. See [`and`](Self::and).
    pub fn or(&self, other: &Self) -> Result<Self> {
        self.require_same_len(other)?;
        let mut out = self.clone();
        out |= other;
        Ok(out)
    }

    /// Bitwise XOR of two equal-length stores. See [`and`](Self::and).
    pub fn xor(&self, other: &Self) -> Result<Self> {
        self.require_same_len(other)?;
        let mut out = self.clone();
        out ^= other;
        Ok(out)
    }

    /// Renders the store most-significant-bit first: the first character is
    /// bit `len - 1`, the last character is bit 0. Exactly `len` characters;
    /// empty for a zero-length store.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    fn require_same_len(&self, other: &Self) -> Result<()> {
        if self.len != other.len {
            return Err(BitStoreError::LengthMismatch {
                left: self.len,
                right: other.len,
            });
        }
        Ok(())
    }

    /// Zeroes the padding bits at positions >= `len` in the last word.
    fn mask_padding(&mut self) {
        let tail = bit_ops::bit_offset(self.len);
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= bit_ops::low_mask(tail);
            }
        }
    }
}

/// In-place AND over the overlapping word prefix.
///
/// The receiver's length is unchanged and its words past the other operand's
/// extent are left as-is. This is word-granular at the overlap edge, so at a
/// non-word-aligned boundary the other operand's padding participates; the
/// equal-length [`BitStore::and`] is exact.
impl BitAndAssign<&BitStore> for BitStore {
    fn bitand_assign(&mut self, rhs: &BitStore) {
        for (dst, src) in self.words.iter_mut().zip(&rhs.words) {
            *dst &= *src;
        }
        self.mask_padding();
    }
}

/// In-place OR over the overlapping word prefix. See the `&=` notes.
impl BitOrAssign<&BitStore> for BitStore {
    fn bitor_assign(&mut self, rhs: &BitStore) {
        for (dst, src) in self.words.iter_mut().zip(&rhs.words) {
            *dst |= *src;
        }
        self.mask_padding();
    }
}

/// In-place XOR over the overlapping word prefix. See the `&=` notes.
impl BitXorAssign<&BitStore> for BitStore {
    fn bitxor_assign(&mut self, rhs: &BitStore) {
        for (dst, src) in self.words.iter_mut().zip(&rhs.words) {
            *dst ^= *src;
        }
        // A longer rhs can raise bits past our length inside the last word.
        self.mask_padding();
    }
}

/// Inverts every logical bit; padding stays zero.
impl Not for &BitStore {
    type Output = BitStore;

    fn not(self) -> BitStore {
        let mut out = self.clone();
        for word in &mut out.words {
            *word = !*word;
        }
        out.mask_padding();
        out
    }
}

/// Shifts toward higher indices. Vacated low bits are zero; a shift of
/// `len` or more clears the store; the length never changes.
impl ShlAssign<usize> for BitStore {
    fn shl_assign(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if n >= self.len {
            self.clear();
            return;
        }
        let word_shift = n / WORD_BITS;
        let bit_shift = n % WORD_BITS;
        for i in (word_shift..self.words.len()).rev() {
            let mut word = self.words[i - word_shift] << bit_shift;
            // Carry from the next-lower source word, when one exists.
            if bit_shift > 0 && i > word_shift {
                word |= self.words[i - word_shift - 1] >> (WORD_BITS - bit_shift);
            }
            self.words[i] = word;
        }
        for word in &mut self.words[..word_shift] {
            *word = 0;
        }
        self.mask_padding();
    }
}

/// Shifts toward lower indices. Vacated high bits are zero; a shift of
/// `len` or more clears the store; the length never changes.
impl ShrAssign<usize> for BitStore {
    fn shr_assign(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if n >= self.len {
            self.clear();
            return;
        }
        let nwords = self.words.len();
        let word_shift = n / WORD_BITS;
        let bit_shift = n % WORD_BITS;
        for i in 0..nwords - word_shift {
            let mut word = self.words[i + word_shift] >> bit_shift;
            // Carry from the next-higher source word, when one exists.
            if bit_shift > 0 && i + word_shift + 1 < nwords {
                word |= self.words[i + word_shift + 1] << (WORD_BITS - bit_shift);
            }
            self.words[i] = word;
        }
        for word in &mut self.words[nwords - word_shift..] {
            *word = 0;
        }
        self.mask_padding();
    }
}

impl Shl<usize> for &BitStore {
    type Output = BitStore;

    fn shl(self, n: usize) -> BitStore {
        let mut out = self.clone();
        out <<= n;
        out
    }
}

impl Shr<usize> for &BitStore {
    type Output = BitStore;

    fn shr(self, n: usize) -> BitStore {
        let mut out = self.clone();
        out >>= n;
        out
    }
}

impl fmt::Display for BitStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.len).rev() {
            let bit = (self.words[bit_ops::word_index(i)] >> bit_ops::bit_offset(i)) & 1;
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}
