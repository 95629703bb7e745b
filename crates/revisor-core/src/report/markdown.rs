//! Markdown report renderer
//!
//! Pages are separated with `\newpage`, which `pandoc` honors when producing
//! PDF and other renderers show as a plain line.

use std::fmt::Write;

use super::{Report, Table};

const PAGE_BREAK: &str = "\\newpage";

pub fn render(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}", report.title);
    out.push('\n');
    let _ = writeln!(
        out,
        "**Project:** {} ({})  ",
        escape_cell(&report.project_name),
        escape_cell(&report.project_code)
    );
    let _ = writeln!(out, "**Generated:** {}", report.generated_label());
    out.push('\n');

    out.push_str("## Summary\n\n");
    write_table(&mut out, &report.summary);

    for section in &report.documents {
        out.push('\n');
        out.push_str(PAGE_BREAK);
        out.push_str("\n\n");
        let _ = writeln!(out, "### {}", escape_cell(&section.heading()));
        out.push('\n');
        write_table(&mut out, &section.table);
    }

    out
}

fn write_table(out: &mut String, table: &Table) {
    let header: Vec<String> = table.header.iter().map(|h| escape_cell(h)).collect();
    let _ = writeln!(out, "| {} |", header.join(" | "));
    let rule: Vec<&str> = table.header.iter().map(|_| "---").collect();
    let _ = writeln!(out, "| {} |", rule.join(" | "));
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
}

/// Keep cell text on one line and out of the table syntax
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}
