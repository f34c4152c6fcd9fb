//! Generation of the full `CreateByTransformation` factory function.
//!
//! The dispatch blocks of [`crate::dispatch`] are fragments; the build also
//! carries the complete templated member function that hosts the dispatch,
//! ending in the unspecialized `Create<1, 0>` fallback for code pairs with
//! no dedicated specialization.

use vecgeom_codes::SpecializationTable;

use crate::emit::SourceFile;

/// Renders the complete `VolumeFactory::CreateByTransformation` function:
/// signature, one branch per specialization pair, and the generic fallback.
#[must_use]
pub fn generate_factory_function(table: &SpecializationTable) -> String {
    let mut f = SourceFile::new();

    f.line("template<typename VolumeType>");
    f.line("VPlacedVolume* VolumeFactory::CreateByTransformation(");
    f.line("    LogicalVolume const *const logical_volume,");
    f.line("    TransformationMatrix const *const matrix,");
    f.line("    const TranslationCode trans_code, const RotationCode rot_code) const {");
    f.blank();

    for (trans, rot) in table.pairs() {
        f.line(&format!(
            "  if (trans_code == {trans} && rot_code == {rot}) {{"
        ));
        f.line(&format!(
            "    return VolumeType::template Create<{trans}, {rot}>(logical_volume, matrix);"
        ));
        f.line("  }");
    }

    f.blank();
    f.line("  // No specialization");
    f.line("  return VolumeType::template Create<1, 0>(logical_volume, matrix);");
    f.blank();
    f.line("}");

    f.finish()
}
