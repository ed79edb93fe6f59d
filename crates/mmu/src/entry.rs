//! Page-table entries: one 64-bit word per slot.
//!
//! An entry packs a frame base address (bits [51:12]) together with a set of
//! attribute bits. Only the present bit (bit 0) gates translation here; the
//! remaining architectural bits are modeled so images produced by real
//! tables decode faithfully, but the walk ignores them.

use bitflags::bitflags;

bitflags! {
    /// Attribute bits of a page-table entry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EntryFlags: u64 {
        /// Entry refers to a table or frame that is in memory.
        const PRESENT       = 1 << 0;
        /// Writes are allowed through this entry.
        const WRITABLE      = 1 << 1;
        /// User-mode accesses are allowed.
        const USER          = 1 << 2;
        /// Write-through caching.
        const WRITE_THROUGH = 1 << 3;
        /// Caching disabled.
        const NO_CACHE      = 1 << 4;
        /// Set by hardware on access.
        const ACCESSED      = 1 << 5;
        /// Set by hardware on write.
        const DIRTY         = 1 << 6;
        /// Entry maps a large page instead of pointing at a table.
        const HUGE          = 1 << 7;
        /// Mapping survives address-space switches.
        const GLOBAL        = 1 << 8;
        /// Instruction fetches are not allowed.
        const NO_EXECUTE    = 1 << 63;
    }
}

/// A single page-table entry, stored exactly as the hardware lays it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct PageTableEntry(u64);

impl PageTableEntry {
    /// Bits [51:12]: the physical base address carried by an entry.
    pub const BASE_MASK: u64 = 0x000F_FFFF_FFFF_F000;

    /// Build an entry from a frame base and attribute flags.
    ///
    /// Bits of `base` outside [`Self::BASE_MASK`] are discarded.
    #[inline]
    pub const fn new(base: u64, flags: EntryFlags) -> Self {
        Self((base & Self::BASE_MASK) | flags.bits())
    }

    /// Reinterpret a raw 64-bit word as an entry.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw 64-bit word.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whether the present bit is set.
    ///
    /// Odd raw values are present, even values are not.
    #[inline]
    pub const fn is_present(self) -> bool {
        self.0 & EntryFlags::PRESENT.bits() != 0
    }

    /// The physical base address this entry points at (bits [51:12]).
    ///
    /// Always page-aligned; meaningless unless [`Self::is_present`].
    #[inline]
    pub const fn base(self) -> u64 {
        self.0 & Self::BASE_MASK
    }

    /// The attribute bits of this entry.
    ///
    /// Address bits are dropped, so the result contains only known flags.
    #[inline]
    pub fn flags(self) -> EntryFlags {
        EntryFlags::from_bits_truncate(self.0)
    }
}

// ============================================================================
// Unit Tests
// Gated on the `std` feature because this is a no_std crate.
// Run with: cargo test -p pagewalk-mmu
// ============================================================================
