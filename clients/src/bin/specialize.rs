//! `vecgeom-specialize` — Emits the volume factory specialization dispatch
//! source from the code tables.
//!
//! **Default:** writes the 32 dispatch blocks to standard output, one per
//! (translation, rotation) pair in rotation-major order, and nothing else.
//!
//! **Usage:**
//! ```
//! vecgeom-specialize [--factory] [--out <dir>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vecgeom_codegen::{dispatch, factory};
use vecgeom_codes::SpecializationTable;

/// Generate the VecGeom volume factory specialization source.
#[derive(Parser)]
#[command(
    name = "vecgeom-specialize",
    about = "Generate volume factory specialization dispatch source"
)]
struct Args {
    /// Emit the complete CreateByTransformation function instead of the raw
    /// dispatch blocks.
    #[arg(long)]
    factory: bool,

    /// Write both artifacts into this directory instead of standard output.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let table = SpecializationTable::full();

    if let Some(out) = &args.out {
        let report = vecgeom_codegen::generate(table, out)?;
        println!(
            "Generated {} specialization blocks ({} bytes)",
            report.block_count, report.byte_count
        );
        for file in &report.files {
            println!("  Written: {}", out.join(file).display());
        }
        return Ok(());
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.factory {
        handle
            .write_all(factory::generate_factory_function(table).as_bytes())
            .context("Failed to write factory function to standard output")?;
    } else {
        dispatch::emit_dispatch_blocks(table, &mut handle)?;
    }
    handle
        .flush()
        .context("Failed to flush standard output")?;

    Ok(())
}
