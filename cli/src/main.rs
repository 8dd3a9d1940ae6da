//! `orgperf`: compare two machine organizations on a set of RISC-V programs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use orgperf_engine::init_logger;

mod commands;
mod render;

use commands::{ClassifyCmd, CompareCmd};

#[derive(Parser)]
#[command(name = "orgperf", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Profile program files and compare organizations A and B on each.
    Compare(CompareCmd),
    /// Print the opcode and format of individual instruction words.
    Classify(ClassifyCmd),
}

fn main() -> Result<()> {
    init_logger();

    match Cli::parse().command {
        Command::Compare(cmd) => cmd.run(),
        Command::Classify(cmd) => cmd.run(),
    }
}
