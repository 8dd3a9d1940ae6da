//! Plain-text rendering of session results.

use std::io::{self, Write};

use orgperf_engine::{
    ComparisonResult, OrganizationId, PerformanceResult, ProgramReport, Session, Verdict,
};

/// Decimal places of the performance ratio.
const RATIO_PRECISION: usize = 3;

pub fn write_organizations(out: &mut impl Write, session: &Session) -> io::Result<()> {
    for id in OrganizationId::ALL {
        match session.organization(id) {
            Some(org) => writeln!(out, "Organization {id}: {org}")?,
            None => writeln!(out, "Organization {id}: not configured")?,
        }
    }
    Ok(())
}

pub fn write_report(
    out: &mut impl Write,
    report: &ProgramReport,
    precision: usize,
) -> io::Result<()> {
    writeln!(out, "== {} ==", report.name)?;
    writeln!(
        out,
        "Instructions: {} (unclassified: {})",
        report.total_instructions,
        report.counts.unclassified()
    )?;

    let formats: Vec<String> = report
        .counts
        .iter()
        .map(|(format, count)| format!("{format}={count}"))
        .collect();
    writeln!(out, "Formats: {}", formats.join(" "))?;

    for id in OrganizationId::ALL {
        write!(out, "Organization {id}: ")?;
        match report.performance(id) {
            Some(perf) => write_performance(out, perf, precision)?,
            None => writeln!(out, "not configured")?,
        }
    }

    write!(out, "Best performance: ")?;
    match &report.comparison {
        Some(comparison) => write_comparison(out, comparison),
        None => writeln!(out, "not available"),
    }
}

fn write_performance(
    out: &mut impl Write,
    perf: &PerformanceResult,
    precision: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "CPI {:.precision$} | cycles {} | time {:.precision$}",
        perf.average_cpi, perf.total_cycles, perf.execution_time
    )
}

fn write_comparison(out: &mut impl Write, comparison: &ComparisonResult) -> io::Result<()> {
    match comparison.verdict {
        Verdict::Winner(id) => writeln!(
            out,
            "Organization {id} ({:.RATIO_PRECISION$}x)",
            comparison.ratio
        ),
        Verdict::Tie => writeln!(out, "same performance"),
    }
}
