//! Paging geometry: the fixed bit layout of a 64-bit virtual address.
//!
//! A virtual address selects one entry at each of the four table levels,
//! plus a byte offset inside the final 4 KiB frame:
//!
//! ```text
//! 63        48 47     39 38     30 29     21 20     12 11        0
//! [  ignored  |  PML4   |  PDPT   |   PD    |   PT    |  offset   ]
//! ```
//!
//! Bits above 47 play no part in the translation; the shifts below discard
//! them, so addresses of arbitrary magnitude decompose without error.

/// Page size: 4 KiB.
pub const PAGE_SIZE: u64 = 4096;
/// Page shift (log2 of page size).
pub const PAGE_SHIFT: u32 = 12;
/// Entries per page table (512 eight-byte entries fill one 4 KiB table).
pub const ENTRIES_PER_TABLE: u64 = 512;
/// Width of one page-table entry in bytes.
pub const ENTRY_SIZE: u64 = 8;

/// Mask for one 9-bit table index.
pub const INDEX_MASK: u64 = 0x1FF;
/// Mask for the 12-bit byte offset within a frame.
pub const OFFSET_MASK: u64 = 0xFFF;

/// Extract the PML4 index from a virtual address (bits [47:39]).
#[inline]
pub const fn pml4_index(va: u64) -> u64 {
    (va >> 39) & INDEX_MASK
}

/// Extract the page-directory-pointer index (bits [38:30]).
#[inline]
pub const fn pdpt_index(va: u64) -> u64 {
    (va >> 30) & INDEX_MASK
}

/// Extract the page-directory index (bits [29:21]).
#[inline]
pub const fn pd_index(va: u64) -> u64 {
    (va >> 21) & INDEX_MASK
}

/// Extract the page-table index (bits [20:12]).
#[inline]
pub const fn pt_index(va: u64) -> u64 {
    (va >> 12) & INDEX_MASK
}

/// Extract the byte offset within the final frame (bits [11:0]).
#[inline]
pub const fn page_offset(va: u64) -> u64 {
    va & OFFSET_MASK
}

/// Decompose a virtual address into its four table indices, in walk order
/// (PML4 first).
#[inline]
pub const fn table_indices(va: u64) -> [u64; 4] {
    [pml4_index(va), pdpt_index(va), pd_index(va), pt_index(va)]
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
    fn test_zero_address_decomposes_to_zero() {
        assert_eq!(table_indices(0), [0, 0, 0, 0]);
        assert_eq!(page_offset(0), 0);
    }

    #[test]
    fn test_bit_39_selects_pml4_entry_one() {
        assert_eq!(table_indices(0x0000_0080_0000_0000), [1, 0, 0, 0]);
    }

    #[test]
    fn test_pml4_index_boundaries() {
        assert_eq!(pml4_index(0x0000_0080_0000_0000), 1); // 512 GiB boundary
        assert_eq!(pml4_index(0x0000_FF80_0000_0000), 511);
    }

    #[test]
    fn test_pdpt_index_boundaries() {
        assert_eq!(pdpt_index(0x0000_0000_4000_0000), 1); // 1 GiB boundary
        assert_eq!(pdpt_index(0x0000_0000_8000_0000), 2);
    }

    #[test]
    fn test_pd_index_boundaries() {
        assert_eq!(pd_index(0x0000_0000_0020_0000), 1); // 2 MiB boundary
        assert_eq!(pd_index(0x0000_0000_0040_0000), 2);
    }

    #[test]
    fn test_pt_index_boundaries() {
        assert_eq!(pt_index(0x0000_0000_0000_1000), 1); // 4 KiB boundary
        assert_eq!(pt_index(0x0000_0000_0000_2000), 2);
    }

    #[test]
    fn test_indices_ignore_bits_above_47() {
        let low = 0x0000_7FED_CBA9_8123u64;
        let high = 0xFFFF_7FED_CBA9_8123u64; // same low 48 bits
        assert_eq!(table_indices(low), table_indices(high));
        assert_eq!(page_offset(low), page_offset(high));
    }

    #[test]
    fn test_all_ones_saturates_every_field() {
        assert_eq!(table_indices(u64::MAX), [511, 511, 511, 511]);
        assert_eq!(page_offset(u64::MAX), 0xFFF);
    }

    #[test]
    fn test_mixed_address_splits_per_field() {
        let va = (3 << 39) | (1 << 30) | (511 << 21) | (2 << 12) | 0x123;
        assert_eq!(pml4_index(va), 3);
        assert_eq!(pdpt_index(va), 1);
        assert_eq!(pd_index(va), 511);
        assert_eq!(pt_index(va), 2);
        assert_eq!(page_offset(va), 0x123);
    }
}
