//! Cycle, CPI and execution-time model for one program on one organization.

use std::fmt;

use tracing::instrument;

use crate::organization::Organization;
use crate::program::InstructionCount;

/// Average cycles per instruction.
///
/// A program with no retained instructions has no meaningful average, which
/// is kept apart from any numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cpi {
    Defined(f64),
    Undefined,
}

impl Cpi {
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Defined(cpi) => Some(cpi),
            Self::Undefined => None,
        }
    }

    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl fmt::Display for Cpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, f.precision()) {
            (Self::Defined(cpi), Some(precision)) => write!(f, "{cpi:.precision$}"),
            (Self::Defined(cpi), None) => write!(f, "{cpi}"),
            (Self::Undefined, _) => f.write_str("n/a"),
        }
    }
}

/// Performance figures of one program on one organization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceResult {
    /// Sum over formats of `count × cycles`.
    pub total_cycles: u128,
    /// `total_cycles` divided by the number of retained instructions,
    /// unclassified ones included.
    pub average_cpi: Cpi,
    /// `total_cycles × clock`.
    pub execution_time: f64,
}

/// Evaluates `counts` on `org`.
///
/// Unclassified instructions add nothing to `total_cycles` yet still count in
/// the CPI denominator, so a program with unknown opcodes reports a lower CPI
/// than its classified instructions alone would give.
#[instrument(
    level = "trace",
    skip_all,
    fields(clock = org.clock, instructions = counts.total())
)]
pub fn evaluate(counts: &InstructionCount, org: &Organization) -> PerformanceResult {
    let total_cycles: u128 = counts
        .iter()
        .map(|(format, count)| u128::from(count) * u128::from(org.cycles[format]))
        .sum();

    let instructions = counts.total();
    let average_cpi = if instructions == 0 {
        Cpi::Undefined
    } else {
        Cpi::Defined(total_cycles as f64 / instructions as f64)
    };

    PerformanceResult {
        total_cycles,
        average_cpi,
        execution_time: total_cycles as f64 * org.clock,
    }
}
