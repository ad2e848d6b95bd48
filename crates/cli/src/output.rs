// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console output: diagnostics on stderr, artifact report on stdout.

use std::io::{self, IsTerminal, Write};

use modeltap_capture::RunSummary;

/// Exit codes for the binary.
pub mod exit_codes {
    /// Run completed and the summary was written.
    pub const SUCCESS: i32 = 0;
    /// Configuration or artifact error before/while finalizing.
    pub const ERROR: i32 = 1;
}

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Print the artifact report for a finished run.
///
/// Always emitted, success or failure, so a caller can locate the log, the
/// summary, and the expected output without parsing anything else.
pub fn print_artifacts(summary: &RunSummary, summary_path: &std::path::Path) {
    let mut stdout = io::stdout();
    let _ = write_artifacts(&mut stdout, summary, summary_path);
}

/// Write the artifact report to a writer.
pub fn write_artifacts<W: Write>(
    writer: &mut W,
    summary: &RunSummary,
    summary_path: &std::path::Path,
) -> io::Result<()> {
    writeln!(writer, "{}", summary.raw_calls_file.display())?;
    writeln!(writer, "{}", summary_path.display())?;
    writeln!(writer, "{}", summary.expected_output.display())?;
    writeln!(writer, "output_exists: {}", summary.output_exists)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
