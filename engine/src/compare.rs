//! Head-to-head comparison of two organizations on the same program.

use crate::model::PerformanceResult;
use crate::organization::OrganizationId;

/// Which organization ran the program faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner(OrganizationId),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonResult {
    pub verdict: Verdict,
    /// Slower execution time divided by the faster one. Exactly `1.0` on a
    /// tie, and infinite when the faster organization takes no time at all.
    pub ratio: f64,
}

impl ComparisonResult {
    pub const fn winner(&self) -> Option<OrganizationId> {
        match self.verdict {
            Verdict::Winner(id) => Some(id),
            Verdict::Tie => None,
        }
    }

    pub const fn is_tie(&self) -> bool {
        matches!(self.verdict, Verdict::Tie)
    }
}

/// Compares the execution times of `a` (organization A) and `b`
/// (organization B).
///
/// Equality is exact: two times that differ in the last bit still produce a
/// winner.
pub fn compare(a: &PerformanceResult, b: &PerformanceResult) -> ComparisonResult {
    let (time_a, time_b) = (a.execution_time, b.execution_time);

    if time_a < time_b {
        ComparisonResult {
            verdict: Verdict::Winner(OrganizationId::A),
            ratio: time_b / time_a,
        }
    } else if time_a > time_b {
        ComparisonResult {
            verdict: Verdict::Winner(OrganizationId::B),
            ratio: time_a / time_b,
        }
    } else {
        ComparisonResult {
            verdict: Verdict::Tie,
            ratio: 1.0,
        }
    }
}
