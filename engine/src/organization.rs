//! Machine organizations: a clock period plus a cycle cost per format.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::Display;

use crate::error::{ConfigError, Result};
use crate::opcodes::InstructionFormat;

/// Names the two organization slots being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OrganizationId {
    A,
    B,
}

impl OrganizationId {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the opposite slot.
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Cycles spent by one instruction of each format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclesPerFormat([u32; InstructionFormat::NUM_FORMATS]);

impl Default for CyclesPerFormat {
    fn default() -> Self {
        Self::uniform(Organization::DEFAULT_CYCLES)
    }
}

impl CyclesPerFormat {
    /// Assigns the same cost to every format.
    pub const fn uniform(cycles: u32) -> Self {
        Self([cycles; InstructionFormat::NUM_FORMATS])
    }

    /// Builds costs indexed in [`InstructionFormat`] declaration order.
    pub const fn from_cycles(cycles: [u32; InstructionFormat::NUM_FORMATS]) -> Self {
        Self(cycles)
    }

    pub fn get(&self, format: InstructionFormat) -> u32 {
        self.0[format.index()]
    }

    pub fn set(&mut self, format: InstructionFormat, cycles: u32) {
        self.0[format.index()] = cycles;
    }

    pub fn iter(&self) -> impl Iterator<Item = (InstructionFormat, u32)> + '_ {
        InstructionFormat::iter().map(move |format| (format, self.get(format)))
    }
}

impl Index<InstructionFormat> for CyclesPerFormat {
    type Output = u32;

    fn index(&self, format: InstructionFormat) -> &Self::Output {
        &self.0[format.index()]
    }
}

/// A machine organization.
///
/// The engine takes these values as given. Rejecting negative or
/// non-numeric input is the job of whoever builds the organization, see the
/// [`FromStr`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Organization {
    /// Clock period, in whatever time unit the caller uses consistently.
    pub clock: f64,
    pub cycles: CyclesPerFormat,
}

impl Default for Organization {
    fn default() -> Self {
        Self {
            clock: Self::DEFAULT_CLOCK,
            cycles: CyclesPerFormat::default(),
        }
    }
}

impl Organization {
    pub const DEFAULT_CLOCK: f64 = 1.0;
    pub const DEFAULT_CYCLES: u32 = 1;

    pub const fn new(clock: f64, cycles: CyclesPerFormat) -> Self {
        Self { clock, cycles }
    }

    pub fn with_clock(mut self, clock: f64) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_cycles(mut self, format: InstructionFormat, cycles: u32) -> Self {
        self.cycles.set(format, cycles);
        self
    }
}

/// Parses `key=value` pairs separated by commas, e.g.
/// `clock=2,U=1,J=1,I=2,B=3,S=2,R=1`.
///
/// Keys are `clock` and the six format letters, case-insensitively. Omitted
/// keys keep their default. An empty string yields the default organization.
impl FromStr for Organization {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let mut org = Self::default();
        if s.trim().is_empty() {
            return Ok(org);
        }

        for entry in s.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(ConfigError::EmptyEntry(s.to_string()));
            }
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::MissingValue(entry.to_string()))?;
            let (key, value) = (key.trim(), value.trim());

            if key.eq_ignore_ascii_case("clock") {
                org.clock = parse_clock(value)?;
            } else {
                let format = InstructionFormat::from_str(&key.to_ascii_uppercase())
                    .map_err(|_| ConfigError::UnknownKey(key.to_string()))?;
                org.cycles.set(format, parse_cycles(key, value)?);
            }
        }

        Ok(org)
    }
}

fn parse_clock(value: &str) -> Result<f64> {
    let clock = value
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumber {
            key: "clock".to_string(),
            value: value.to_string(),
        })?;
    if !clock.is_finite() {
        return Err(ConfigError::NonFiniteClock(clock));
    }
    if clock < 0.0 {
        return Err(ConfigError::Negative {
            key: "clock".to_string(),
            value: value.to_string(),
        });
    }
    Ok(clock)
}

fn parse_cycles(key: &str, value: &str) -> Result<u32> {
    let invalid = || ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    };
    let cycles = value.parse::<i64>().map_err(|_| invalid())?;
    if cycles < 0 {
        return Err(ConfigError::Negative {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    u32::try_from(cycles).map_err(|_| invalid())
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock={}", self.clock)?;
        for (format, cycles) in self.cycles.iter() {
            write!(f, ",{format}={cycles}")?;
        }
        Ok(())
    }
}
