//! Workload file loader.
//!
//! A workload is three sections of whitespace-separated decimal unsigned
//! 64-bit integers:
//!
//! ```text
//! <writes> <requests> <root>    header: section sizes + PML4 base
//! <address> <value>             x writes, one populated memory cell each
//! <vaddr>                       x requests, one virtual address each
//! ```
//!
//! The header counts drive the parse, so every malformed or missing line
//! is reported with its 1-based line number. Content after the last
//! request is rejected; trailing blank lines are tolerated.

use std::io::BufRead;

use anyhow::{Context, Result, bail};
use pagewalk_mmu::PhysMemory;

/// A parsed workload: the walk root, the memory image, and the virtual
/// addresses to translate, in file order.
#[derive(Debug, Clone)]
pub struct Workload {
    pub root: u64,
    pub image: PhysMemory,
    pub requests: Vec<u64>,
}

/// Line reader that tracks 1-based line numbers for error reporting.
struct Cursor<R> {
    lines: std::io::Lines<R>,
    number: usize,
}

impl<R: BufRead> Cursor<R> {
    fn new(reader: R) -> Self {
        Self { lines: reader.lines(), number: 0 }
    }

    /// The next line, or an error naming `what` if the file ends first.
    fn expect_line(&mut self, what: &str) -> Result<String> {
        self.number += 1;
        match self.lines.next() {
            Some(line) => line.with_context(|| format!("failed to read line {}", self.number)),
            None => bail!("line {}: expected {what}, found end of file", self.number),
        }
    }

    /// Error if anything other than blank lines remains.
    fn expect_end(&mut self) -> Result<()> {
        for line in self.lines.by_ref() {
            self.number += 1;
            let line = line.with_context(|| format!("failed to read line {}", self.number))?;
            if !line.trim().is_empty() {
                bail!("line {}: unexpected content after the last request", self.number);
            }
        }
        Ok(())
    }
}

fn field(token: &str, line: usize, what: &str) -> Result<u64> {
    token.parse().with_context(|| format!("line {line}: invalid {what} `{token}`"))
}

/// Parse a workload from a reader.
pub fn parse<R: BufRead>(reader: R) -> Result<Workload> {
    let mut cursor = Cursor::new(reader);

    let header = cursor.expect_line("the `<writes> <requests> <root>` header")?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 3 {
        bail!(
            "line {}: expected `<writes> <requests> <root>` header, found {} fields",
            cursor.number,
            fields.len()
        );
    }
    let n_writes = field(fields[0], cursor.number, "write count")?;
    let n_requests = field(fields[1], cursor.number, "request count")?;
    let root = field(fields[2], cursor.number, "root address")?;

    // Counts come from the file, so they are not trusted for preallocation.
    let mut image = PhysMemory::new();
    for _ in 0..n_writes {
        let line = cursor.expect_line("an `<address> <value>` pair")?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            bail!(
                "line {}: expected `<address> <value>` pair, found {} fields",
                cursor.number,
                fields.len()
            );
        }
        let addr = field(fields[0], cursor.number, "cell address")?;
        let value = field(fields[1], cursor.number, "cell value")?;
        image.write(addr, value);
    }

    let mut requests = Vec::new();
    for _ in 0..n_requests {
        let line = cursor.expect_line("a virtual address")?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 1 {
            bail!(
                "line {}: expected one virtual address, found {} fields",
                cursor.number,
                fields.len()
            );
        }
        requests.push(field(fields[0], cursor.number, "virtual address")?);
    }

    cursor.expect_end()?;

    log::debug!(
        "[INPUT] loaded {} cells, {} requests, root 0x{:x}",
        image.len(),
        requests.len(),
        root
    );
    Ok(Workload { root, image, requests })
}
