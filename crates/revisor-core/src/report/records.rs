//! Records report renderer
//!
//! ```text
//! H revisor=1 records=1 mode=report project="..." code="..." generated=... documents=N
//! S <index> "<document>" score=<total>
//! D <index> "<criterion>" pts=<p> max=<m> "<comment>"
//! ```

use std::fmt::Write;

use super::Report;
use crate::records::quoted;

pub fn render(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "H revisor=1 records=1 mode=report project={} code={} generated={} documents={}",
        quoted(&report.project_name),
        quoted(&report.project_code),
        report.generated_at.format("%Y-%m-%dT%H:%M:%S"),
        report.documents.len()
    );

    for section in &report.documents {
        let _ = writeln!(
            out,
            "S {} {} score={}",
            section.index,
            quoted(&section.document_id),
            section.total_score
        );
    }

    for section in &report.documents {
        for row in &section.table.rows {
            if let [criterion, pts, max, comment] = row.as_slice() {
                let _ = writeln!(
                    out,
                    "D {} {} pts={} max={} {}",
                    section.index,
                    quoted(criterion),
                    pts,
                    max,
                    quoted(comment)
                );
            }
        }
    }

    out
}
