//! RISC-V instruction formats and the major-opcode table used to classify them.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::EnumCount;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Number of distinct values of the 7-bit major opcode field.
pub const OPCODE_SPACE: usize = 1 << OPCODE_BITS;

/// Width of the major opcode field, located in bits `[6:0]` of every word.
pub const OPCODE_BITS: usize = 7;

/// One of the six base instruction formats.
///
/// The discriminant doubles as the index into per-format arrays such as
/// [`InstructionCount`](crate::InstructionCount) and
/// [`CyclesPerFormat`](crate::CyclesPerFormat), so the declaration order is
/// also the canonical reporting order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumCount,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
pub enum InstructionFormat {
    U = 0,
    J = 1,
    I = 2,
    B = 3,
    S = 4,
    R = 5,
}

/// Major opcodes and the format each one is encoded with.
///
/// Every opcode appears at most once, which keeps the format sets disjoint.
pub const OPCODE_FORMATS: [(u8, InstructionFormat); 11] = [
    (0b0110111, InstructionFormat::U), // LUI
    (0b0010111, InstructionFormat::U), // AUIPC
    (0b1101111, InstructionFormat::J), // JAL
    (0b1100111, InstructionFormat::I), // JALR
    (0b0000011, InstructionFormat::I), // LOAD
    (0b0010011, InstructionFormat::I), // OP-IMM
    (0b0001111, InstructionFormat::I), // MISC-MEM
    (0b1110011, InstructionFormat::I), // SYSTEM
    (0b1100011, InstructionFormat::B), // BRANCH
    (0b0100011, InstructionFormat::S), // STORE
    (0b0110011, InstructionFormat::R), // OP
];

/// Opcode-indexed lookup table, built once at compile time.
static FORMAT_TABLE: [Option<InstructionFormat>; OPCODE_SPACE] = build_format_table();

const fn build_format_table() -> [Option<InstructionFormat>; OPCODE_SPACE] {
    let mut table = [None; OPCODE_SPACE];
    let mut i = 0;
    while i < OPCODE_FORMATS.len() {
        let (opcode, format) = OPCODE_FORMATS[i];
        table[opcode as usize] = Some(format);
        i += 1;
    }
    table
}

impl InstructionFormat {
    /// Number of formats, usable as an array length.
    pub const NUM_FORMATS: usize = Self::COUNT;

    /// Returns the format encoded by the given major opcode, if any.
    ///
    /// Only the low [`OPCODE_BITS`] bits of `opcode` are considered.
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        FORMAT_TABLE[(opcode as usize) & (OPCODE_SPACE - 1)]
    }

    /// Position of this format in per-format arrays.
    pub fn index(self) -> usize {
        u8::from(self) as usize
    }

    /// Returns every major opcode that decodes to this format.
    pub fn opcodes(self) -> impl Iterator<Item = u8> {
        (0..OPCODE_SPACE as u8).filter(move |&op| Self::from_opcode(op) == Some(self))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_known_opcodes() {
        let cases = [
            ("0110111", InstructionFormat::U),
            ("0010111", InstructionFormat::U),
            ("1101111", InstructionFormat::J),
            ("1100111", InstructionFormat::I),
            ("0000011", InstructionFormat::I),
            ("0010011", InstructionFormat::I),
            ("0001111", InstructionFormat::I),
            ("1110011", InstructionFormat::I),
            ("1100011", InstructionFormat::B),
            ("0100011", InstructionFormat::S),
            ("0110011", InstructionFormat::R),
        ];
        for (bits, expected) in cases {
            let opcode = u8::from_str_radix(bits, 2).unwrap();
            assert_eq!(
                InstructionFormat::from_opcode(opcode),
                Some(expected),
                "opcode {bits}"
            );
        }
    }

    #[test]
    fn test_opcode_sets_are_disjoint() {
        let opcodes: HashSet<u8> = OPCODE_FORMATS.iter().map(|(op, _)| *op).collect();
        assert_eq!(opcodes.len(), OPCODE_FORMATS.len());

        let per_format: usize = InstructionFormat::iter().map(|f| f.opcodes().count()).sum();
        assert_eq!(per_format, OPCODE_FORMATS.len());
    }

    #[test]
    fn test_unknown_opcodes() {
        let known: HashSet<u8> = OPCODE_FORMATS.iter().map(|(op, _)| *op).collect();
        for opcode in 0..OPCODE_SPACE as u8 {
            if !known.contains(&opcode) {
                assert_eq!(InstructionFormat::from_opcode(opcode), None);
            }
        }
    }

    #[test]
    fn test_index_matches_declaration_order() {
        let letters: Vec<String> = InstructionFormat::iter().map(|f| f.to_string()).collect();
        assert_eq!(letters, ["U", "J", "I", "B", "S", "R"]);
        for (i, format) in InstructionFormat::iter().enumerate() {
            assert_eq!(format.index(), i);
            assert_eq!(InstructionFormat::try_from(i as u8).unwrap(), format);
        }
        assert_eq!("B".parse::<InstructionFormat>().unwrap(), InstructionFormat::B);
    }
}
