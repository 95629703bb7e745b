//! Report export
//!
//! Writes the review report for the current batch into a directory, named
//! `review_report_<code>_<timestamp>.<ext>`. With PDF requested, the
//! Markdown rendering is additionally converted through `pandoc`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use revisor_core::error::{Result, RevisorError};
use revisor_core::report::pdf::write_pdf;
use revisor_core::report::{Report, ReportFormat};

/// Write the report and return the paths of the files created
pub fn write_report(
    report: &Report,
    dir: &Path,
    format: ReportFormat,
    pdf: bool,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .map_err(|e| RevisorError::io_operation("create export directory", dir.display(), e))?;

    let path = dir.join(report.file_name(format.extension()));
    let content = report.render(format)?;
    fs::write(&path, content)
        .map_err(|e| RevisorError::io_operation("write report", path.display(), e))?;
    info!(path = %path.display(), %format, "report_written");

    let mut written = vec![path];

    if pdf {
        let pdf_path = dir.join(report.file_name("pdf"));
        write_pdf(report, &pdf_path)?;
        written.push(pdf_path);
    }

    Ok(written)
}
