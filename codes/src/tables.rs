//! The rotation code table.
//!
//! The 16 codes below are the rotation masks the volume factory specializes
//! on, listed in the exact order specializations are generated. Order matters
//! only for reproducibility of the generated text, not for dispatch
//! semantics.

use crate::model::{CodeEntry, RotationCode};

/// Returns the rotation entries in emission order.
#[must_use]
pub fn rotation_entries() -> Vec<CodeEntry> {
    vec![
        CodeEntry {
            code: RotationCode(0x1B1),
            comment: "Nonzero in rot[0], rot[4], rot[5], rot[7], rot[8]: \
                      a rotation about the x-axis.",
        },
        CodeEntry {
            code: RotationCode(0x18E),
            comment: "Nonzero in rot[1], rot[2], rot[3], rot[7], rot[8].",
        },
        CodeEntry {
            code: RotationCode(0x076),
            comment: "Nonzero in rot[1], rot[2], rot[4], rot[5], rot[6].",
        },
        CodeEntry {
            code: RotationCode(0x16A),
            comment: "Nonzero in rot[1], rot[3], rot[5], rot[6], rot[8].",
        },
        CodeEntry {
            code: RotationCode(0x155),
            comment: "Nonzero in rot[0], rot[2], rot[4], rot[6], rot[8]: \
                      a rotation about the y-axis.",
        },
        CodeEntry {
            code: RotationCode(0x0AD),
            comment: "Nonzero in rot[0], rot[2], rot[3], rot[5], rot[7].",
        },
        CodeEntry {
            code: RotationCode(0x0DC),
            comment: "Nonzero in rot[2], rot[3], rot[4], rot[6], rot[7].",
        },
        CodeEntry {
            code: RotationCode(0x0E3),
            comment: "Nonzero in rot[0], rot[1], rot[5], rot[6], rot[7].",
        },
        CodeEntry {
            code: RotationCode(0x11B),
            comment: "Nonzero in rot[0], rot[1], rot[3], rot[4], rot[8]: \
                      a rotation about the z-axis.",
        },
        CodeEntry {
            code: RotationCode(0x0A1),
            comment: "Nonzero in rot[0], rot[5], rot[7]: a quarter turn \
                      about the x-axis.",
        },
        CodeEntry {
            code: RotationCode(0x10A),
            comment: "Nonzero in rot[1], rot[3], rot[8]: a quarter turn \
                      about the z-axis.",
        },
        CodeEntry {
            code: RotationCode(0x046),
            comment: "Nonzero in rot[1], rot[2], rot[6].",
        },
        CodeEntry {
            code: RotationCode(0x062),
            comment: "Nonzero in rot[1], rot[5], rot[6]: a cyclic \
                      permutation of the axes.",
        },
        CodeEntry {
            code: RotationCode(0x054),
            comment: "Nonzero in rot[2], rot[4], rot[6]: a quarter turn \
                      about the y-axis.",
        },
        CodeEntry {
            code: RotationCode::DIAGONAL,
            comment: "Diagonal matrix: nonzero in rot[0], rot[4], rot[8] \
                      only, but not the identity.",
        },
        CodeEntry {
            code: RotationCode::IDENTITY,
            comment: "The identity matrix, flagged out of band so identity \
                      placements skip the rotation entirely.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_fit_nine_bits_except_identity() {
        for entry in rotation_entries() {
            if !entry.code.is_identity() {
                assert!(
                    entry.code.value() <= 0x1FF,
                    "mask {} exceeds nine bits",
                    entry.code
                );
            }
        }
    }

    #[test]
    fn diagonal_and_identity_are_last_two() {
        let entries = rotation_entries();
        assert_eq!(entries[entries.len() - 2].code, RotationCode::DIAGONAL);
        assert_eq!(entries[entries.len() - 1].code, RotationCode::IDENTITY);
    }
}
