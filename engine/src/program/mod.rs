//! Loading raw program text into profiled [`Program`]s.

use pest::Parser;
use tracing::{debug, instrument, trace};

mod counts;

pub use counts::InstructionCount;

use crate::decoder::InstructionWord;

#[derive(pest_derive::Parser)]
#[grammar = "program/line.pest"]
struct LineParser;

/// A loaded program: its retained instruction words and their per-format
/// counts.
///
/// A `Program` never changes after [`Program::load`]; performance figures are
/// derived from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    name: String,
    instructions: Vec<InstructionWord>,
    counts: InstructionCount,
}

impl Program {
    /// Profiles `raw_text`, one candidate word per line.
    ///
    /// Lines that are not exactly 32 binary characters (after stripping
    /// trailing carriage returns) are skipped. This never fails: empty or
    /// fully filtered input yields an empty program.
    #[instrument(level = "debug", skip_all, fields(bytes = raw_text.len()))]
    pub fn load(name: impl Into<String>, raw_text: &str) -> Self {
        let name = name.into();

        let instructions: Vec<InstructionWord> = raw_text
            .split('\n')
            .enumerate()
            .filter_map(|(index, line)| {
                let word = parse_line(line);
                if word.is_none() {
                    trace!(line_number = index + 1, "skipping non-instruction line");
                }
                word
            })
            .collect();

        let counts: InstructionCount = instructions.iter().map(|word| word.format()).collect();

        debug!(
            program = %name,
            instructions = instructions.len(),
            unclassified = counts.unclassified(),
            "profiled program"
        );

        Self {
            name,
            instructions,
            counts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the retained words in source order.
    pub fn instructions(&self) -> &[InstructionWord] {
        &self.instructions
    }

    pub const fn counts(&self) -> &InstructionCount {
        &self.counts
    }

    /// Number of retained words, including unclassified ones.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Returns the instruction word held by `line`, if it holds one.
fn parse_line(line: &str) -> Option<InstructionWord> {
    let mut pairs = LineParser::parse(Rule::line, line).ok()?;
    let word = pairs
        .next()?
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::word)?;

    u32::from_str_radix(word.as_str(), 2)
        .ok()
        .map(InstructionWord::new)
}
