//! End-to-end runs of the engine: program text in, comparison out.

pub mod common;

use common::{load_fixture, repeat_lines};
use orgperf_engine::{
    evaluate, Cpi, CyclesPerFormat, InstructionFormat, Organization, OrganizationId, Program,
    Session, Verdict,
};

const LUI: &str = "00000000000000000000000110110111";
const ADD: &str = "00000000001000001000000110110011";

#[test]
fn test_single_u_instruction_among_invalid_lines() {
    let raw = format!("program header\r\n0110111\r\n{LUI}\r\n\r\n{LUI}1\r\n2{LUI}\r\n");
    let program = Program::load("one_u.txt", &raw);

    let counts = program.counts();
    assert_eq!(counts[InstructionFormat::U], 1);
    for format in [
        InstructionFormat::J,
        InstructionFormat::I,
        InstructionFormat::B,
        InstructionFormat::S,
        InstructionFormat::R,
    ] {
        assert_eq!(counts[format], 0, "format {format}");
    }
    assert_eq!(program.len(), 1);
    assert_eq!(counts.total(), 1);
}

#[test]
fn test_slower_clock_loses_by_its_ratio() {
    let a = Organization::new(1.0, CyclesPerFormat::uniform(1));
    let b = Organization::new(2.0, CyclesPerFormat::uniform(1));
    let mut session = Session::with_organizations(a, b);
    session.load_program("ten_r.txt", &repeat_lines(ADD, 10));

    let report = &session.reports()[0];
    let perf_a = report.performance_a.unwrap();
    let perf_b = report.performance_b.unwrap();
    assert_eq!(perf_a.total_cycles, 10);
    assert_eq!(perf_b.total_cycles, 10);
    assert_eq!(perf_a.execution_time, 10.0);
    assert_eq!(perf_b.execution_time, 20.0);

    let comparison = report.comparison.unwrap();
    assert_eq!(comparison.verdict, Verdict::Winner(OrganizationId::A));
    assert_eq!(comparison.ratio, 2.0);
}

#[test]
fn test_empty_program_is_a_tie_with_undefined_cpi() {
    let mut session = Session::with_organizations(
        Organization::default(),
        Organization::default().with_clock(3.0),
    );
    session.load_program("empty.txt", "no instructions\nhere\n");

    let report = &session.reports()[0];
    assert_eq!(report.total_instructions, 0);
    for id in [OrganizationId::A, OrganizationId::B] {
        let perf = report.performance(id).unwrap();
        assert_eq!(perf.average_cpi, Cpi::Undefined);
        assert_eq!(perf.execution_time, 0.0);
    }

    let comparison = report.comparison.unwrap();
    assert!(comparison.is_tie());
    assert_eq!(comparison.ratio, 1.0);
}

#[test]
fn test_cycle_change_after_load_needs_no_reload() {
    let program = Program::load("ten_r.txt", &repeat_lines(ADD, 10));
    let before = evaluate(program.counts(), &Organization::default());
    assert_eq!(before.total_cycles, 10);

    let tuned = Organization::default().with_cycles(InstructionFormat::R, 4);
    let after = evaluate(program.counts(), &tuned);
    assert_eq!(after.total_cycles, 40);
    assert_eq!(after.average_cpi, Cpi::Defined(4.0));

    let mut session = Session::with_organizations(Organization::default(), tuned);
    session.add_program(program);
    let first = session.reports();
    session.set_organization(OrganizationId::B, Organization::default());
    let second = session.reports();

    assert_eq!(first[0].performance_b.unwrap().total_cycles, 40);
    assert_eq!(second[0].performance_b.unwrap().total_cycles, 10);
    assert!(second[0].comparison.unwrap().is_tie());
}

#[test]
fn test_mixed_fixture_counts() {
    let program = load_fixture("mixed.txt");
    let counts = program.counts();

    let expected = [
        (InstructionFormat::U, 2),
        (InstructionFormat::J, 1),
        (InstructionFormat::I, 4),
        (InstructionFormat::B, 1),
        (InstructionFormat::S, 1),
        (InstructionFormat::R, 1),
    ];
    for (format, count) in expected {
        assert_eq!(counts[format], count, "format {format}");
    }
    assert_eq!(counts.unclassified(), 1);
    assert_eq!(program.len(), 11);
}

#[test]
fn test_mixed_fixture_comparison() {
    let a = Organization::default();
    let b: Organization = "clock=0.5,I=3,R=2".parse().unwrap();
    let mut session = Session::with_organizations(a, b);
    session.add_program(load_fixture("mixed.txt"));

    let report = &session.reports()[0];
    let perf_a = report.performance_a.unwrap();
    let perf_b = report.performance_b.unwrap();

    // The RV64 word adds no cycles but still counts as an instruction.
    assert_eq!(perf_a.total_cycles, 10);
    assert_eq!(perf_a.average_cpi, Cpi::Defined(10.0 / 11.0));
    assert_eq!(perf_b.total_cycles, 19);
    assert_eq!(perf_b.execution_time, 9.5);

    let comparison = report.comparison.unwrap();
    assert_eq!(comparison.winner(), Some(OrganizationId::B));
    assert_eq!(comparison.ratio, 10.0 / 9.5);
}

#[test]
fn test_many_programs_in_one_pass() {
    let mut session = Session::with_organizations(
        Organization::default().with_cycles(InstructionFormat::R, 2),
        Organization::default().with_cycles(InstructionFormat::B, 5),
    );
    session.add_program(load_fixture("mixed.txt"));
    session.add_program(load_fixture("loop.txt"));

    let reports = session.reports();
    let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["mixed.txt", "loop.txt"]);

    // loop.txt: I=1, R=3, B=1, J=1.
    let looped = &reports[1];
    assert_eq!(looped.total_instructions, 6);
    assert_eq!(looped.performance_a.unwrap().total_cycles, 1 + 6 + 1 + 1);
    assert_eq!(looped.performance_b.unwrap().total_cycles, 1 + 3 + 5 + 1);
    assert_eq!(looped.comparison.unwrap().winner(), Some(OrganizationId::A));
}
