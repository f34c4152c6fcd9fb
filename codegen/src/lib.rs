//! VecGeom specialization code generator.
//!
//! Reads the code tables from `vecgeom_codes::SpecializationTable::full()`
//! and generates the volume factory dispatch source: one conditional block
//! per (translation, rotation) pair, plus the complete
//! `CreateByTransformation` function that hosts them.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod dispatch;
pub mod emit;
pub mod factory;

use std::path::Path;

use anyhow::Result;
use vecgeom_codes::SpecializationTable;

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of dispatch blocks emitted.
    pub block_count: usize,
    /// Total bytes emitted.
    pub byte_count: usize,
    /// Files written.
    pub files: Vec<String>,
}

/// Generates both dispatch artifacts into `out_dir`:
/// `specializations.icc` (the raw blocks) and `volume_factory.icc` (the
/// complete factory function).
///
/// # Errors
///
/// Returns an error if either file cannot be written.
pub fn generate(table: &SpecializationTable, out_dir: &Path) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();

    let blocks = dispatch::generate_dispatch_blocks(table);
    report.block_count = table.pair_count();
    report.byte_count += blocks.len();
    emit::write_file(&out_dir.join("specializations.icc"), &blocks)?;
    report.files.push("specializations.icc".to_string());

    let function = factory::generate_factory_function(table);
    report.byte_count += function.len();
    emit::write_file(&out_dir.join("volume_factory.icc"), &function)?;
    report.files.push("volume_factory.icc".to_string());

    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn generate_writes_both_artifacts() {
        let out_dir = std::env::temp_dir().join("vecgeom-codegen-test");
        let report = generate(SpecializationTable::full(), &out_dir).unwrap();

        assert_eq!(report.block_count, 32);
        assert_eq!(
            report.files,
            vec!["specializations.icc".to_string(), "volume_factory.icc".to_string()]
        );

        let blocks = std::fs::read_to_string(out_dir.join("specializations.icc")).unwrap();
        let function = std::fs::read_to_string(out_dir.join("volume_factory.icc")).unwrap();
        assert_eq!(report.byte_count, blocks.len() + function.len());
        std::fs::remove_dir_all(&out_dir).unwrap();
    }
}
