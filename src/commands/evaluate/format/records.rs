//! Records output formatting for the evaluate command

use crate::commands::evaluate::Dashboard;
use revisor_core::records::quoted;

/// Output in records format
pub fn output_records(dashboard: &Dashboard, show_comments: bool) {
    for line in records_lines(dashboard, show_comments) {
        println!("{}", line);
    }
}

/// Build the record lines: header, ranking, criteria, metrics, histogram, exports
pub fn records_lines(dashboard: &Dashboard, show_comments: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "H revisor=1 records=1 mode=evaluate project={} code={} draw={} documents={} dropped={}",
        quoted(dashboard.project_name),
        quoted(dashboard.project_code),
        dashboard.draw_sequence,
        dashboard.results.len(),
        dashboard.dropped.len()
    )];

    for entry in &dashboard.ranking {
        lines.push(format!(
            "R {} {} score={:.2}",
            entry.rank,
            quoted(entry.document_id),
            entry.total_score
        ));
    }

    if show_comments {
        for result in dashboard.results {
            for r in &result.criteria_results {
                lines.push(format!(
                    "C {} {} pts={} max={} tier={} {}",
                    quoted(&result.document_id),
                    quoted(&r.criterion),
                    r.points_awarded,
                    r.max_points,
                    r.tier,
                    quoted(&r.comment)
                ));
            }
        }
    }

    let summary = &dashboard.summary;
    lines.push(format!(
        "M mean={:.2} passing={} passing_pct={:.1} max={:.2} min={:.2} threshold={:.2}",
        summary.mean, summary.passing, summary.passing_pct, summary.max, summary.min, summary.pass_threshold
    ));

    for bin in &dashboard.histogram {
        lines.push(format!(
            "B lower={:.2} upper={:.2} count={}",
            bin.lower, bin.upper, bin.count
        ));
    }

    for path in &dashboard.exports {
        lines.push(format!("E {}", quoted(&path.display().to_string())));
    }

    lines
}
