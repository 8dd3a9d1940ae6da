//! Instruction-format profiling and performance comparison of two machine
//! organizations running the same RISC-V programs.
//!
//! Programs are given as text, one 32-bit word per line written as `0`/`1`
//! characters. Each retained word is classified into one of the six base
//! formats (U, J, I, B, S, R) by its major opcode. The per-format counts are
//! then weighted by each organization's per-format cycle costs and clock
//! period to obtain total cycles, average CPI and execution time, and the two
//! organizations are compared.
//!
//! ```
//! use orgperf_engine::{InstructionFormat, Organization, OrganizationId, Session};
//!
//! let fast = Organization::default();
//! let slow = Organization::default().with_clock(2.0);
//! let mut session = Session::with_organizations(fast, slow);
//! session.load_program("add.txt", "00000000001000001000000110110011\n");
//!
//! let report = &session.reports()[0];
//! assert_eq!(report.counts[InstructionFormat::R], 1);
//! assert_eq!(report.comparison.unwrap().winner(), Some(OrganizationId::A));
//! ```

mod compare;
mod decoder;
mod error;
mod model;
pub mod opcodes;
mod organization;
mod program;
mod session;
pub mod util;

pub use compare::{compare, ComparisonResult, Verdict};
pub use decoder::{classify, InstructionWord, WORD_BITS};
pub use error::{ConfigError, WordError};
pub use model::{evaluate, Cpi, PerformanceResult};
pub use opcodes::InstructionFormat;
pub use organization::{CyclesPerFormat, Organization, OrganizationId};
pub use program::{InstructionCount, Program};
pub use session::{ProgramReport, Session};
pub use util::init_logger;
