//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, ExecutionSummary, render_summary, run_cli};

pub(super) type TestResult = Result<(), Box<dyn std::error::Error>>;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// Runs `cli` against `input` and returns the summary with everything the
/// command wrote.
pub(super) fn run_with_input(
    cli: Cli,
    input: &str,
) -> Result<(ExecutionSummary, String), CliError> {
    let mut output = Vec::new();
    let summary = run_cli(cli, input.as_bytes(), &mut output)?;
    Ok((summary, String::from_utf8_lossy(&output).into_owned()))
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli, io::empty(), io::sink()) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn rendered(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    match render_summary(summary, &mut buffer) {
        Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
        Err(err) => panic!("rendering into memory failed: {err}"),
    }
}
