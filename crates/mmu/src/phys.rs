//! Sparse physical-memory image.
//!
//! Only the cells a workload wrote exist. A read of any other address
//! reports absence rather than zero, which is what lets the walk tell a
//! missing table apart from a table of non-present entries.

use hashbrown::HashMap;

/// A sparse map of 64-bit physical addresses to 64-bit cell values.
#[derive(Debug, Clone, Default)]
pub struct PhysMemory {
    cells: HashMap<u64, u64>,
}

impl PhysMemory {
    /// An image with no populated cells.
    #[inline]
    pub fn new() -> Self {
        Self { cells: HashMap::new() }
    }

    /// Populate one cell. A later write to the same address replaces the
    /// earlier value.
    #[inline]
    pub fn write(&mut self, addr: u64, value: u64) {
        self.cells.insert(addr, value);
    }

    /// Read one cell, or `None` if the address was never written.
    #[inline]
    pub fn read(&self, addr: u64) -> Option<u64> {
        self.cells.get(&addr).copied()
    }

    /// Whether a cell exists at `addr`.
    #[inline]
    pub fn contains(&self, addr: u64) -> bool {
        self.cells.contains_key(&addr)
    }

    /// Number of populated cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is populated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(u64, u64)> for PhysMemory {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl Extend<(u64, u64)> for PhysMemory {
    fn extend<I: IntoIterator<Item = (u64, u64)>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

// ============================================================================
// Unit Tests
// Gated on the `std` feature because this is a no_std crate.
// Run with: cargo test -p pagewalk-mmu
// ============================================================================

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_reads_nothing() {
        let mem = PhysMemory::new();
        assert!(mem.is_empty());
        assert_eq!(mem.read(0), None);
        assert_eq!(mem.read(0x1000), None);
    }

    #[test]
    fn test_read_returns_written_value() {
        let mut mem = PhysMemory::new();
        mem.write(0x1000, 0x2001);
        assert_eq!(mem.read(0x1000), Some(0x2001));
        assert_eq!(mem.len(), 1);
    }

    #[test]
    fn test_absent_is_not_zero() {
        let mut mem = PhysMemory::new();
        mem.write(0x1000, 0);
        // A cell holding zero exists; its neighbor does not.
        assert_eq!(mem.read(0x1000), Some(0));
        assert!(mem.contains(0x1000));
        assert_eq!(mem.read(0x1008), None);
        assert!(!mem.contains(0x1008));
    }

    #[test]
    fn test_later_write_replaces_earlier() {
        let mut mem = PhysMemory::new();
        mem.write(0x2000, 0x3000);
        mem.write(0x2000, 0x3001);
        assert_eq!(mem.read(0x2000), Some(0x3001));
        assert_eq!(mem.len(), 1);
    }

    #[test]
    fn test_collects_from_pairs() {
        let mem: PhysMemory = [(0x0u64, 0x1001u64), (0x1000, 0x2001)].into_iter().collect();
        assert_eq!(mem.len(), 2);
        assert_eq!(mem.read(0), Some(0x1001));
        assert_eq!(mem.read(0x1000), Some(0x2001));
    }

    #[test]
    fn test_extend_appends_and_overwrites() {
        let mut mem: PhysMemory = [(0x0u64, 0x1u64)].into_iter().collect();
        mem.extend([(0x0, 0x3), (0x8, 0x5)]);
        assert_eq!(mem.read(0), Some(0x3));
        assert_eq!(mem.read(8), Some(0x5));
        assert_eq!(mem.len(), 2);
    }
}
