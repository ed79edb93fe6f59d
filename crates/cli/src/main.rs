//! pagewalk - batch x86-64 address translation.
//!
//! Reads a workload file describing a physical-memory image and a list of
//! virtual addresses, then walks the four-level page tables for each one.
//! Every request produces one output line: the physical address in
//! decimal, or `fault`.
//!
//! Usage: pagewalk [INPUT] [OUTPUT]
//!
//! INPUT defaults to `input.txt`, OUTPUT to `output.txt`. Set RUST_LOG
//! (e.g. RUST_LOG=trace) to watch individual walk steps.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pagewalk_cli::{input, run};

#[derive(Parser)]
#[command(name = "pagewalk")]
#[command(about = "Translate virtual addresses through an x86-64 page-table image")]
struct Args {
    /// Workload file: header, memory writes, then requests
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Destination file: one result line per request
    #[arg(default_value = "output.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let reader = File::open(&args.input)
        .map(BufReader::new)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let workload = input::parse(reader)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let writer = File::create(&args.output)
        .map(BufWriter::new)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    run::run(&workload, writer)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
