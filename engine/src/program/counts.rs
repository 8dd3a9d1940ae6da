use std::ops::Index;

use strum::IntoEnumIterator;

use crate::opcodes::InstructionFormat;

/// Per-format instruction counters for a whole program.
///
/// Every format always has an entry, zero when the program contains none.
/// Words whose opcode matches no format are tracked separately in
/// [`unclassified`](Self::unclassified): they count toward
/// [`total`](Self::total) but toward no format, and therefore add no cycles
/// in the performance model while still weighing on the CPI denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstructionCount {
    per_format: [u64; InstructionFormat::NUM_FORMATS],
    unclassified: u64,
}

impl InstructionCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds counters from explicit values, indexed in
    /// [`InstructionFormat`] declaration order.
    pub const fn from_counts(
        per_format: [u64; InstructionFormat::NUM_FORMATS],
        unclassified: u64,
    ) -> Self {
        Self {
            per_format,
            unclassified,
        }
    }

    /// Records one retained word with the given classification.
    pub fn record(&mut self, format: Option<InstructionFormat>) {
        match format {
            Some(format) => self.per_format[format.index()] += 1,
            None => self.unclassified += 1,
        }
    }

    pub fn get(&self, format: InstructionFormat) -> u64 {
        self.per_format[format.index()]
    }

    /// Number of retained words whose opcode matched no format.
    pub const fn unclassified(&self) -> u64 {
        self.unclassified
    }

    /// Number of words attributed to one of the six formats.
    pub fn classified(&self) -> u64 {
        self.per_format
            .iter()
            .fold(0u64, |acc, &count| acc.saturating_add(count))
    }

    /// Number of retained words, classified or not.
    pub fn total(&self) -> u64 {
        self.classified().saturating_add(self.unclassified)
    }

    /// Iterates over `(format, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (InstructionFormat, u64)> + '_ {
        InstructionFormat::iter().map(move |format| (format, self.get(format)))
    }
}

impl Index<InstructionFormat> for InstructionCount {
    type Output = u64;

    fn index(&self, format: InstructionFormat) -> &Self::Output {
        &self.per_format[format.index()]
    }
}

impl FromIterator<Option<InstructionFormat>> for InstructionCount {
    fn from_iter<T: IntoIterator<Item = Option<InstructionFormat>>>(iter: T) -> Self {
        let mut counts = Self::new();
        for format in iter {
            counts.record(format);
        }
        counts
    }
}
