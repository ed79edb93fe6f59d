//! Software model of x86-64 four-level paging.
//!
//! Translates 64-bit virtual addresses by walking PML4 → PDPT → PD → PT
//! tables held in a sparse physical-memory image. The walk itself is
//! [`translate`]; the rest of the crate is the small vocabulary it needs:
//! address decomposition ([`addr`]), entry decoding ([`entry`]), and the
//! image ([`phys`]).
//!
//! Nothing here allocates frames or caches translations. The image is
//! written up front by the caller and every walk reads it as-is.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod addr;
pub mod entry;
pub mod phys;
pub mod walk;

pub use entry::{EntryFlags, PageTableEntry};
pub use phys::PhysMemory;
pub use walk::{Translation, translate};
