//! PDF export through `pandoc`
//!
//! The Markdown rendering is piped to `pandoc`, which must be on `PATH`.

use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use crate::error::{Result, RevisorError};

use super::{markdown, Report};

/// Executable used for PDF conversion
pub const PANDOC: &str = "pandoc";

/// Write the report as a PDF file
pub fn write_pdf(report: &Report, output: &Path) -> Result<()> {
    let source = markdown::render(report);

    let mut command = Command::new(PANDOC);
    command.args(["--from", "markdown", "--output"]).arg(output);
    run_converter(command, &source, output)?;

    tracing::debug!(path = %output.display(), "pdf_written");
    Ok(())
}

/// Feed `input` to a converter process and wait for it.
///
/// Input is written from a scoped thread while the child's stderr is
/// drained, and the child is always waited on, even when the write fails.
fn run_converter(mut command: Command, input: &str, target: &Path) -> Result<()> {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| RevisorError::failed("run pandoc (is it installed?)", e))?;

    let stdin = child.stdin.take();
    let (written, finished) = thread::scope(|scope| {
        let writer = stdin.map(|mut stdin| scope.spawn(move || stdin.write_all(input.as_bytes())));
        let finished = child.wait_with_output();
        let written = match writer {
            Some(handle) => handle
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("converter input writer panicked"))),
            None => Ok(()),
        };
        (written, finished)
    });

    let finished = finished?;
    if !finished.status.success() {
        let stderr = String::from_utf8_lossy(&finished.stderr);
        return Err(RevisorError::io_operation(
            "convert report to PDF",
            target.display(),
            stderr.trim(),
        ));
    }

    written.map_err(|e| RevisorError::io_operation("send report to pandoc for", target.display(), e))
}
