//! Single-word bitboard for one colour

use super::Pos;

/// One bit per cell, bit index = `Pos::to_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set bit positions, lowest index first
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(7, 7);
        assert!(!bb.get(pos));

        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.bits(), 1u64 << 63);

        bb.clear(pos);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_iter_ones_row_major() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(4, 4));
        bb.set(Pos::new(0, 1));
        bb.set(Pos::new(3, 7));

        let ones: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(ones, vec![Pos::new(0, 1), Pos::new(3, 7), Pos::new(4, 4)]);
        assert_eq!(bb.count(), 3);
    }
}
