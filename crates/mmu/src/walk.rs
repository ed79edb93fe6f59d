//! The four-level table walk.
//!
//! Starting from the PML4 base, each level reads one eight-byte entry from
//! the memory image at `table + index * 8`. A present entry supplies the
//! next table base in bits [51:12]; the fourth level supplies the frame base,
//! and the page offset completes the physical address. The walk stops at
//! the first missing cell or non-present entry.

use core::fmt;

use crate::addr::{ENTRY_SIZE, page_offset, table_indices};
use crate::entry::PageTableEntry;
use crate::phys::PhysMemory;

/// Table names per walk level, for trace output.
const LEVELS: [&str; 4] = ["PML4", "PDPT", "PD", "PT"];

/// Outcome of one address translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    /// The walk reached a present leaf entry; the payload is the physical
    /// address.
    Mapped(u64),
    /// The walk stopped on a missing cell or a non-present entry.
    Fault,
}

impl Translation {
    /// The physical address, if the walk succeeded.
    #[inline]
    pub const fn physical(self) -> Option<u64> {
        match self {
            Self::Mapped(pa) => Some(pa),
            Self::Fault => None,
        }
    }

    /// Whether the walk faulted.
    #[inline]
    pub const fn is_fault(self) -> bool {
        matches!(self, Self::Fault)
    }
}

/// Renders the reporting form: the physical address in decimal, or the
/// literal `fault`.
impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapped(pa) => write!(f, "{pa}"),
            Self::Fault => f.write_str("fault"),
        }
    }
}

/// Walk the four table levels for `va`, starting at the PML4 base `root`.
///
/// # Examples
///
/// ```
/// use pagewalk_mmu::{PhysMemory, Translation, translate};
///
/// // One chain of tables; each level's slot 0 points at the next.
/// let image: PhysMemory = [
///     (0x0000, 0x1001), // PML4[0] -> 0x1000, present
///     (0x1000, 0x2001), // PDPT[0] -> 0x2000, present
///     (0x2000, 0x3001), // PD[0]   -> 0x3000, present
///     (0x3000, 0x4001), // PT[0]   -> frame 0x4000, present
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(translate(0x00, 0x0, &image), Translation::Mapped(0x4000));
/// assert_eq!(translate(0x42, 0x0, &image), Translation::Mapped(0x4042));
/// // PT slot 1 was never written, so the next page over faults.
/// assert_eq!(translate(0x1000, 0x0, &image), Translation::Fault);
/// ```
pub fn translate(va: u64, root: u64, image: &PhysMemory) -> Translation {
    let mut table = root;
    for (level, idx) in table_indices(va).into_iter().enumerate() {
        let Some(entry_addr) = table.checked_add(idx * ENTRY_SIZE) else {
            log::debug!("[MMU] {}: index {} overflows base 0x{:x}", LEVELS[level], idx, table);
            return Translation::Fault;
        };
        let Some(raw) = image.read(entry_addr) else {
            log::debug!("[MMU] {}: no cell at 0x{:x}", LEVELS[level], entry_addr);
            return Translation::Fault;
        };
        let entry = PageTableEntry::from_raw(raw);
        if !entry.is_present() {
            log::debug!(
                "[MMU] {}: entry 0x{:x} at 0x{:x} not present",
                LEVELS[level],
                raw,
                entry_addr
            );
            return Translation::Fault;
        }
        log::trace!(
            "[MMU] {}: entry 0x{:x} at 0x{:x} -> base 0x{:x}",
            LEVELS[level],
            raw,
            entry_addr,
            entry.base()
        );
        table = entry.base();
    }
    // After four present levels `table` is the frame base, page-aligned.
    let pa = table + page_offset(va);
    log::trace!("[MMU] translate(0x{:x}) -> 0x{:x}", va, pa);
    Translation::Mapped(pa)
}

// ============================================================================
// Unit Tests
// Gated on the `std` feature because this is a no_std crate.
// Run with: cargo test -p pagewalk-mmu
// ============================================================================
