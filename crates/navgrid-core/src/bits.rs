//! Dense bitset over cell indices.

/// A fixed-size bitset with one bit per grid cell.
///
/// Used for the static-obstacle bitmap and for per-search overlays; the
/// search hot path performs millions of lookups, so a word-packed bitset
/// beats a hash set for grids up to ~10⁶ cells.
#[derive(Clone, Debug, Default)]
pub struct BitGrid {
    words: Vec<u64>,
    len: usize,
}

impl BitGrid {
    /// Create a bitset of `len` bits, all zero.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Number of addressable bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the bitset has zero bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read bit `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len);
        self.words[idx >> 6] & (1 << (idx & 63)) != 0
    }

    /// Set bit `idx` to one. Idempotent.
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.words[idx >> 6] |= 1 << (idx & 63);
    }

    /// Reset every bit to zero without reallocating.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
