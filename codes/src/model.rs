//! Core types for transformation specialization codes.
//!
//! These types represent the specialization vocabulary of the volume factory
//! as typed Rust data. The rotation table is built as an owned `Vec` and
//! referenced via borrows. The top-level entry point is
//! [`SpecializationTable::full()`](crate::SpecializationTable::full).

use core::fmt;

/// A rotation code: the 9-bit mask of the nonzero entries of a 3x3 rotation
/// matrix, with bit `i` set iff `rot[i] != 0` in row-major order.
///
/// The identity matrix would produce the diagonal mask `0x111`; it is instead
/// assigned the out-of-band code `0x200` so that identity placements can be
/// dispatched separately from general diagonal matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationCode(pub u16);

impl RotationCode {
    /// Mask of a purely diagonal rotation matrix (`rot[0]`, `rot[4]`,
    /// `rot[8]` nonzero).
    pub const DIAGONAL: RotationCode = RotationCode(0x111);

    /// Out-of-band code assigned to the identity matrix.
    pub const IDENTITY: RotationCode = RotationCode(0x200);

    /// Returns the raw code value.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Whether this is the identity code.
    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl fmt::Display for RotationCode {
    /// Renders the code as a lower-case hex literal with a minimum of three
    /// digits after the `0x` prefix, growing as needed (`0x046`, `0x1b1`,
    /// `0x200`). This rendering appears verbatim in generated source text,
    /// so it must stay byte-stable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}

/// A translation code: whether a transformation carries a translation
/// component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationCode {
    /// The transformation leaves the origin fixed.
    Origin,
    /// The transformation has a nonzero translation vector.
    Translation,
}

impl TranslationCode {
    /// Returns the integer code used in generated dispatch conditions:
    /// `0` for no translation, `1` otherwise. Kept as an integer in case
    /// more translation cases are introduced later.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            TranslationCode::Origin => 0,
            TranslationCode::Translation => 1,
        }
    }
}

impl fmt::Display for TranslationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One row of the rotation code table.
#[derive(Debug, Clone)]
pub struct CodeEntry {
    /// The rotation code.
    pub code: RotationCode,
    /// Description of the nonzero pattern this code encodes.
    pub comment: &'static str,
}

/// The full specialization table: every rotation code and translation code
/// the factory dispatches on, in emission order.
///
/// The table encodes both the value set and the order in which
/// specializations are generated; there is deliberately no sorting or
/// deduplication downstream.
#[derive(Debug, Clone)]
pub struct SpecializationTable {
    /// Rotation entries in emission order.
    pub rotations: Vec<CodeEntry>,
    /// Translation codes in emission order (`Origin` before `Translation`).
    pub translations: &'static [TranslationCode],
}
