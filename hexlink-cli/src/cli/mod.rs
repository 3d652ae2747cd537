//! Command-line interface orchestration for the `hexlink` binary.
//!
//! `play` runs a Hex game against a random opponent, `check` answers a
//! connectivity query over an edge-list file, and `generate` draws a random
//! graph and reports how it decomposes into components.

mod commands;
mod human;

pub use commands::{
    CheckArgs, CheckSummary, Cli, CliError, Command, ExecutionSummary, GenerateArgs,
    GenerateSummary, PlayArgs, PlaySummary, render_summary, run_cli,
};
pub use human::HumanPlayer;

#[cfg(test)]
mod test_helpers;
