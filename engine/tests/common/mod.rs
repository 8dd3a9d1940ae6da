#![allow(dead_code)]

use orgperf_engine::Program;

/// Loads one of the sample programs under the workspace `programs/`
/// directory, named after its file.
pub fn load_fixture(file_name: &str) -> Program {
    let path = format!("{}/../programs/{}", env!("CARGO_MANIFEST_DIR"), file_name);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
    Program::load(file_name, &raw)
}

/// Renders a 32-character word from 25 upper bits and a 7-bit opcode.
pub fn word_with_opcode(upper: u32, opcode: u8) -> String {
    format!("{:025b}{:07b}", upper & 0x1ff_ffff, opcode & 0x7f)
}

/// Joins `n` copies of `line` into newline-separated program text.
pub fn repeat_lines(line: &str, n: usize) -> String {
    vec![line; n].join("\n")
}
