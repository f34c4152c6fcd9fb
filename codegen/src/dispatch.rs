//! Generation of the specialization dispatch blocks.
//!
//! One conditional block is produced per (translation, rotation) pair, in
//! rotation-major order. The output is spliced into a dispatch routine where
//! `trans_code`, `rot_code`, `logical_volume`, `matrix` and the generic
//! parameter `VolumeType` are in scope; dispatch order carries no semantics
//! there, but the text must be byte-stable so generated files diff cleanly.

use std::io;

use anyhow::{Context, Result};
use vecgeom_codes::{RotationCode, SpecializationTable, TranslationCode};

use crate::emit::SourceFile;
use crate::GenerationReport;

/// Renders the dispatch block for one specialization pair.
fn render_block(trans: TranslationCode, rot: RotationCode) -> String {
    let mut f = SourceFile::new();
    f.line(&format!(
        "if (trans_code == {trans} && rot_code == {rot}) {{"
    ));
    f.line(&format!(
        "  return Factory<VolumeType>::template Create<{trans}, {rot}>("
    ));
    f.line("           logical_volume, matrix");
    f.line("         );");
    f.line("}");
    f.finish()
}

/// Renders all 32 dispatch blocks as a single string, in emission order,
/// with no separators between blocks.
#[must_use]
pub fn generate_dispatch_blocks(table: &SpecializationTable) -> String {
    let mut out = String::with_capacity(8 * 1024);
    for (trans, rot) in table.pairs() {
        out.push_str(&render_block(trans, rot));
    }
    out
}

/// Writes the dispatch blocks to `writer`, one fully rendered block per
/// write.
///
/// Each block is rendered to completion before it is written, so a failing
/// stream never receives a truncated block; the error aborts the run
/// immediately with no retry.
///
/// # Errors
///
/// Returns an error if the writer rejects a block (closed pipe, full disk).
pub fn emit_dispatch_blocks<W: io::Write>(
    table: &SpecializationTable,
    writer: &mut W,
) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();
    for (trans, rot) in table.pairs() {
        let block = render_block(trans, rot);
        writer.write_all(block.as_bytes()).with_context(|| {
            format!("Failed to write dispatch block for pair ({trans}, {rot})")
        })?;
        report.block_count += 1;
        report.byte_count += block.len();
    }
    Ok(report)
}
