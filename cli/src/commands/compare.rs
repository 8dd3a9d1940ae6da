use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use orgperf_engine::{Organization, OrganizationId, Session};
use tracing::info;

use crate::render;

#[derive(clap::Args)]
pub struct CompareCmd {
    /// Program files holding one 32-bit binary word per line.
    #[clap(required = true)]
    files: Vec<PathBuf>,

    /// Organization A, e.g. `clock=1,U=1,J=1,I=2,B=2,S=2,R=1`. Omitted keys
    /// default to 1.
    #[clap(long, default_value = "")]
    org_a: Organization,

    /// Organization B, same syntax as `--org-a`.
    #[clap(long, default_value = "")]
    org_b: Organization,

    /// Leave organization A unconfigured.
    #[clap(long)]
    no_org_a: bool,

    /// Leave organization B unconfigured.
    #[clap(long)]
    no_org_b: bool,

    /// Decimal places for CPI and execution time.
    #[clap(long, default_value_t = 2)]
    precision: usize,
}

impl CompareCmd {
    pub fn run(&self) -> Result<()> {
        let mut session = Session::new();
        if !self.no_org_a {
            session.set_organization(OrganizationId::A, self.org_a);
        }
        if !self.no_org_b {
            session.set_organization(OrganizationId::B, self.org_b);
        }

        for path in &self.files {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let program = session.load_program(program_name(path), &raw);
            info!(
                program = program.name(),
                instructions = program.len(),
                "loaded program"
            );
        }

        let mut out = io::stdout().lock();
        render::write_organizations(&mut out, &session)?;
        for report in session.reports() {
            writeln!(out)?;
            render::write_report(&mut out, &report, self.precision)?;
        }

        Ok(())
    }
}

/// Programs are named after their file, like an upload would be.
fn program_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
