//! `revisor rubric` command - show the scoring rubric
//!
//! Scoring always uses the built-in rubric. A supplied rubric document is
//! shown alongside it for reference.

use std::path::Path;

use serde_json::json;

use crate::cli::paths::resolve_against;
use crate::cli::{Cli, OutputFormat, RubricArgs};
use revisor_core::config::ReviewConfig;
use revisor_core::error::Result;
use revisor_core::records::quoted;
use revisor_core::rubric::{Rubric, Tier};
use revisor_core::rubric_doc::RubricReference;

const TIERS: [Tier; 4] = [Tier::Excellent, Tier::Good, Tier::Fair, Tier::Poor];

/// Execute the rubric command
pub fn execute(cli: &Cli, root: &Path, config: &ReviewConfig, args: &RubricArgs) -> Result<()> {
    let document = args
        .rubric_doc
        .as_ref()
        .or(config.rubric_document.as_ref())
        .map(|path| resolve_against(root, path))
        .or_else(|| RubricReference::discover(root));
    let reference = RubricReference::load(document.as_deref());
    if let Some(warning) = reference.warning() {
        if !cli.quiet {
            eprintln!("warning: {}", warning);
        }
    }

    let rubric = Rubric::default();
    match cli.format {
        OutputFormat::Human => output_human(cli, &rubric, &reference),
        OutputFormat::Json => {
            let output = json!({
                "criteria": rubric.criteria(),
                "total_points": rubric.total_points(),
                "reference": reference,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            for line in records_lines(&rubric, &reference) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn output_human(cli: &Cli, rubric: &Rubric, reference: &RubricReference) {
    let width = rubric
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(0);

    for criterion in rubric.iter() {
        println!(
            "{:<width$}  {:>2} pts",
            criterion.name(),
            criterion.max_points(),
            width = width
        );
        if !cli.quiet {
            for tier in TIERS {
                println!("    {:<9}  {}", tier, criterion.comment(tier));
            }
        }
    }
    println!("{:<width$}  {:>2} pts", "Total", rubric.total_points(), width = width);

    if let RubricReference::Document(document) = reference {
        println!();
        println!("Reference document: {}", document.path.display());
        for line in &document.lines {
            println!("  {}", line);
        }
    }
}

/// Record lines: header, one `R` per criterion, one `L` per document line
pub fn records_lines(rubric: &Rubric, reference: &RubricReference) -> Vec<String> {
    let source = match reference {
        RubricReference::Builtin => "builtin",
        RubricReference::Document(_) => "document",
        RubricReference::Unreadable { .. } => "unreadable",
    };
    let mut lines = vec![format!(
        "H revisor=1 records=1 mode=rubric criteria={} total={} reference={}",
        rubric.len(),
        rubric.total_points(),
        source
    )];
    for criterion in rubric.iter() {
        lines.push(format!(
            "R {} max={}",
            quoted(criterion.name()),
            criterion.max_points()
        ));
    }
    if let RubricReference::Document(document) = reference {
        lines.extend(document.lines.iter().map(|line| format!("L {}", quoted(line))));
    }
    lines
}
