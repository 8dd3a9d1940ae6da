//! Opcode-field decoding of fixed-width instruction words.

use std::fmt;
use std::str::FromStr;

use crate::error::WordError;
use crate::opcodes::{InstructionFormat, OPCODE_BITS};

/// Width in bits of every instruction word this crate accepts.
pub const WORD_BITS: usize = 32;

const OPCODE_MASK: u32 = (1 << OPCODE_BITS) - 1;

/// A validated 32-bit instruction word.
///
/// Textually, a word is exactly 32 characters of `0`/`1`, most significant
/// bit first. The major opcode lives in the trailing 7 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstructionWord(u32);

impl InstructionWord {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw 32-bit encoding.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the major opcode, bits `[6:0]`.
    pub const fn opcode(self) -> u8 {
        (self.0 & OPCODE_MASK) as u8
    }

    /// Returns the format of this word, or `None` for an opcode outside the
    /// six known format sets.
    pub fn format(self) -> Option<InstructionFormat> {
        InstructionFormat::from_opcode(self.opcode())
    }
}

impl FromStr for InstructionWord {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_BITS {
            return Err(WordError::InvalidLength(len));
        }

        let mut raw = 0u32;
        for (position, found) in s.chars().enumerate() {
            let bit = match found {
                '0' => 0,
                '1' => 1,
                _ => return Err(WordError::InvalidBit { position, found }),
            };
            raw = (raw << 1) | bit;
        }

        Ok(Self(raw))
    }
}

impl fmt::Display for InstructionWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032b}", self.0)
    }
}

/// Classifies a textual instruction word by its trailing 7 characters.
///
/// The word itself is not validated: only the opcode field is inspected.
/// Text shorter than 7 characters, or whose opcode field contains anything
/// other than `0`/`1`, yields `None`.
pub fn classify(word: &str) -> Option<InstructionFormat> {
    let start = word.len().checked_sub(OPCODE_BITS)?;
    let field = word.get(start..)?;
    let opcode = field.bytes().try_fold(0u8, |acc, bit| match bit {
        b'0' => Some(acc << 1),
        b'1' => Some((acc << 1) | 1),
        _ => None,
    })?;

    InstructionFormat::from_opcode(opcode)
}
