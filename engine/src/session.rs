//! The set of loaded programs and the two organization slots.
//!
//! A [`Session`] owns all mutable state. Every change to it leaves derived
//! figures untouched: callers run [`Session::reports`] afterwards to get a
//! fresh, consistent view over every program at once.

use tracing::{debug, instrument};

use crate::compare::{compare, ComparisonResult};
use crate::model::{evaluate, PerformanceResult};
use crate::organization::{Organization, OrganizationId};
use crate::program::{InstructionCount, Program};

#[derive(Debug, Default)]
pub struct Session {
    programs: Vec<Program>,
    organizations: [Option<Organization>; 2],
}

impl Session {
    /// Creates a session with no programs and no configured organization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with both organization slots configured.
    pub fn with_organizations(a: Organization, b: Organization) -> Self {
        Self {
            programs: Vec::new(),
            organizations: [Some(a), Some(b)],
        }
    }

    /// Profiles `raw_text` and appends the resulting program.
    pub fn load_program(&mut self, name: impl Into<String>, raw_text: &str) -> &Program {
        self.add_program(Program::load(name, raw_text))
    }

    pub fn add_program(&mut self, program: Program) -> &Program {
        self.programs.push(program);
        &self.programs[self.programs.len() - 1]
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn organization(&self, id: OrganizationId) -> Option<&Organization> {
        self.organizations[id.index()].as_ref()
    }

    /// Replaces the configuration of one slot.
    pub fn set_organization(&mut self, id: OrganizationId, organization: Organization) {
        debug!(%id, %organization, "organization configured");
        self.organizations[id.index()] = Some(organization);
    }

    /// Unconfigures one slot, returning its previous configuration.
    pub fn clear_organization(&mut self, id: OrganizationId) -> Option<Organization> {
        self.organizations[id.index()].take()
    }

    /// Recomputes the figures of every loaded program against the current
    /// organizations.
    #[instrument(level = "debug", skip_all, fields(programs = self.programs.len()))]
    pub fn reports(&self) -> Vec<ProgramReport> {
        let a = self.organization(OrganizationId::A);
        let b = self.organization(OrganizationId::B);
        self.programs
            .iter()
            .map(|program| ProgramReport::new(program, a, b))
            .collect()
    }
}

/// Everything known about one program under the current organizations.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramReport {
    pub name: String,
    /// Retained instructions, unclassified ones included.
    pub total_instructions: u64,
    pub counts: InstructionCount,
    /// `None` while organization A is not configured.
    pub performance_a: Option<PerformanceResult>,
    /// `None` while organization B is not configured.
    pub performance_b: Option<PerformanceResult>,
    /// `None` until both organizations are configured.
    pub comparison: Option<ComparisonResult>,
}

impl ProgramReport {
    pub fn new(program: &Program, a: Option<&Organization>, b: Option<&Organization>) -> Self {
        let counts = *program.counts();
        let performance_a = a.map(|org| evaluate(&counts, org));
        let performance_b = b.map(|org| evaluate(&counts, org));
        let comparison = performance_a
            .as_ref()
            .zip(performance_b.as_ref())
            .map(|(a, b)| compare(a, b));

        Self {
            name: program.name().to_string(),
            total_instructions: counts.total(),
            counts,
            performance_a,
            performance_b,
            comparison,
        }
    }

    pub fn performance(&self, id: OrganizationId) -> Option<&PerformanceResult> {
        match id {
            OrganizationId::A => self.performance_a.as_ref(),
            OrganizationId::B => self.performance_b.as_ref(),
        }
    }
}
