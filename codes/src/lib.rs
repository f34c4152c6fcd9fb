//! VecGeom transformation specialization codes encoded as typed Rust data.
//!
//! The `vecgeom-codes` crate provides the specialization vocabulary of the
//! volume factory — 16 rotation codes and 2 translation codes — as static
//! Rust data structures, in the exact order specializations are generated.
//!
//! # Entry Point
//!
//! ```
//! let table = vecgeom_codes::SpecializationTable::full();
//! assert_eq!(table.pair_count(), 32);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod tables;

pub use model::{CodeEntry, RotationCode, SpecializationTable, TranslationCode};

impl SpecializationTable {
    /// Returns the complete specialization table: all 16 rotation codes and
    /// both translation codes, in emission order.
    #[must_use]
    pub fn full() -> &'static SpecializationTable {
        static TABLE: std::sync::OnceLock<SpecializationTable> = std::sync::OnceLock::new();
        TABLE.get_or_init(|| SpecializationTable {
            rotations: tables::rotation_entries(),
            translations: &[TranslationCode::Origin, TranslationCode::Translation],
        })
    }

    /// Number of rotation codes in the table.
    #[must_use]
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Number of translation codes in the table.
    #[must_use]
    pub fn translation_count(&self) -> usize {
        self.translations.len()
    }

    /// Number of (translation, rotation) specialization pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.rotation_count() * self.translation_count()
    }

    /// Whether the table contains the given rotation code.
    #[must_use]
    pub fn contains_rotation(&self, code: RotationCode) -> bool {
        self.rotations.iter().any(|entry| entry.code == code)
    }

    /// Iterates every specialization pair in emission order: for each
    /// rotation code in table order, each translation code in table order.
    pub fn pairs(&self) -> impl Iterator<Item = (TranslationCode, RotationCode)> + '_ {
        self.rotations.iter().flat_map(move |entry| {
            self.translations
                .iter()
                .map(move |&trans| (trans, entry.code))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_count() {
        assert_eq!(SpecializationTable::full().rotation_count(), 16);
    }

    #[test]
    fn translation_count() {
        assert_eq!(SpecializationTable::full().translation_count(), 2);
    }

    #[test]
    fn pair_count() {
        assert_eq!(SpecializationTable::full().pair_count(), 32);
    }

    #[test]
    fn table_order_is_the_generator_order() {
        let table = SpecializationTable::full();
        let codes: Vec<u16> = table.rotations.iter().map(|e| e.code.value()).collect();
        assert_eq!(
            codes,
            vec![
                0x1B1, 0x18E, 0x076, 0x16A, 0x155, 0x0AD, 0x0DC, 0x0E3, 0x11B, 0x0A1, 0x10A,
                0x046, 0x062, 0x054, 0x111, 0x200,
            ]
        );
        assert_eq!(
            table.translations,
            &[TranslationCode::Origin, TranslationCode::Translation]
        );
    }

    #[test]
    fn pairs_are_rotation_major_and_complete() {
        let table = SpecializationTable::full();
        let pairs: Vec<(TranslationCode, RotationCode)> = table.pairs().collect();
        assert_eq!(pairs.len(), 32);

        // Rotation-major: the first two pairs share the first rotation code,
        // with translation 0 before 1.
        assert_eq!(pairs[0], (TranslationCode::Origin, RotationCode(0x1B1)));
        assert_eq!(pairs[1], (TranslationCode::Translation, RotationCode(0x1B1)));
        assert_eq!(
            pairs[31],
            (TranslationCode::Translation, RotationCode::IDENTITY)
        );

        // Cartesian-complete, no duplicates.
        for entry in &table.rotations {
            for &trans in table.translations {
                let matches = pairs
                    .iter()
                    .filter(|&&p| p == (trans, entry.code))
                    .count();
                assert_eq!(matches, 1, "pair ({trans}, {}) not unique", entry.code);
            }
        }
    }

    #[test]
    fn contains_rotation_distinguishes_members() {
        let table = SpecializationTable::full();
        assert!(table.contains_rotation(RotationCode::DIAGONAL));
        assert!(table.contains_rotation(RotationCode(0x054)));
        assert!(!table.contains_rotation(RotationCode(0x000)));
        assert!(!table.contains_rotation(RotationCode(0x1FF)));
    }
}
