//! Batch translation of virtual addresses over a workload file.
//!
//! A workload file describes a physical-memory image and a list of virtual
//! addresses; the runner walks the page tables for each address and writes
//! one result line per request. See [`input`] for the file format.

pub mod input;
pub mod run;

pub use input::Workload;
