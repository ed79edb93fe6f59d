//! Batch runner: one result line per request.

use std::io::Write;

use anyhow::{Context, Result};
use pagewalk_mmu::translate;

use crate::input::Workload;

/// Translate every request in file order and write one line each: the
/// physical address in decimal, or the literal `fault`.
pub fn run(workload: &Workload, mut out: impl Write) -> Result<()> {
    for &va in &workload.requests {
        let result = translate(va, workload.root, &workload.image);
        writeln!(out, "{result}").context("failed to write result line")?;
    }
    out.flush().context("failed to flush results")?;
    Ok(())
}
