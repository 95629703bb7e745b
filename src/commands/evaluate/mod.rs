//! `revisor evaluate` command - score a batch of documents
//!
//! Only the final path component of each file is used; file contents are
//! never read. The batch is capped, scored in submission order and shown as
//! a dashboard. With `--export` the review report is written to disk.

pub mod format;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::cli::paths::{document_id, resolve_against};
use crate::cli::{Cli, EvaluateArgs, OutputFormat};
use crate::commands::export;
use revisor_core::batch::{BatchRunner, PreparedBatch};
use revisor_core::config::ReviewConfig;
use revisor_core::error::Result;
use revisor_core::report::ReportFormat;
use revisor_core::rubric::Rubric;
use revisor_core::rubric_doc::RubricReference;
use revisor_core::scoring::{DrawSequence, Scorer};
use revisor_core::session::{ProjectLabels, Session};
use revisor_core::stats::{histogram, ranking, BatchSummary, HistogramBin, RankedResult};

use self::format::{output_human, output_json, output_records};

/// Effective settings: command-line flags over configuration values
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateSettings {
    pub labels: ProjectLabels,
    pub max_documents: usize,
    pub draw_sequence: DrawSequence,
    pub pass_threshold: f64,
    pub histogram_bins: usize,
    pub rubric_document: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub report_format: ReportFormat,
    pub pdf: bool,
    pub show_comments: bool,
}

impl EvaluateSettings {
    pub fn resolve(config: &ReviewConfig, args: &EvaluateArgs, root: &Path) -> Self {
        Self {
            labels: ProjectLabels::new(
                args.project_name
                    .clone()
                    .unwrap_or_else(|| config.project_name.clone()),
                args.project_code
                    .clone()
                    .unwrap_or_else(|| config.project_code.clone()),
            ),
            max_documents: args.max_documents.unwrap_or(config.max_documents),
            draw_sequence: args.draw_sequence.unwrap_or(config.draw_sequence),
            pass_threshold: config.pass_threshold,
            histogram_bins: config.histogram_bins,
            rubric_document: args
                .rubric_doc
                .as_ref()
                .or(config.rubric_document.as_ref())
                .map(|path| resolve_against(root, path))
                .or_else(|| RubricReference::discover(root)),
            export_dir: args.export.as_ref().map(|dir| resolve_against(root, dir)),
            report_format: args.report_format,
            pdf: args.pdf,
            show_comments: !args.no_comments,
        }
    }
}

/// Everything the output formats show for one evaluation
#[derive(Debug, Serialize)]
pub struct Dashboard<'a> {
    pub project_name: &'a str,
    pub project_code: &'a str,
    pub evaluated_at: NaiveDateTime,
    pub draw_sequence: DrawSequence,
    pub dropped: &'a [String],
    pub rubric: &'a RubricReference,
    pub summary: BatchSummary,
    pub ranking: Vec<RankedResult<'a>>,
    pub histogram: Vec<HistogramBin>,
    pub results: &'a [revisor_core::EvaluationResult],
    pub max_score: u32,
    pub exports: Vec<PathBuf>,
}

/// Execute the evaluate command
pub fn execute(cli: &Cli, root: &Path, config: &ReviewConfig, args: &EvaluateArgs) -> Result<()> {
    let settings = EvaluateSettings::resolve(config, args, root);
    let runner = BatchRunner::new(settings.max_documents, Scorer::new(settings.draw_sequence));

    let prepared = runner.prepare(args.files.iter().map(|path| document_id(path)))?;
    if prepared.was_truncated() && !cli.quiet {
        eprintln!("error: {}", truncation_message(&prepared, settings.max_documents));
    }

    let reference = RubricReference::load(settings.rubric_document.as_deref());
    if let Some(warning) = reference.warning() {
        if !cli.quiet {
            eprintln!("warning: {}", warning);
        }
    }

    let rubric = Rubric::default();
    let show_progress = cli.format == OutputFormat::Human && !cli.quiet;
    let batch = runner.run(&prepared, &rubric, |progress| {
        if show_progress {
            eprintln!(
                "[{}/{}] {:>3.0}% {}",
                progress.completed,
                progress.total,
                progress.fraction() * 100.0,
                progress.document_id
            );
        }
    });

    let mut session = Session::new();
    let evaluated_at = Local::now().naive_local();
    session.replace(batch, settings.labels.clone(), evaluated_at);

    let exports = match (&settings.export_dir, session.report(evaluated_at)) {
        (Some(dir), Some(report)) => {
            export::write_report(&report, dir, settings.report_format, settings.pdf)?
        }
        _ => Vec::new(),
    };
    debug!(exports = exports.len(), "export");

    let Some(dashboard) =
        build_dashboard(&session, &prepared, &reference, &rubric, &settings, exports)
    else {
        return Ok(());
    };

    match cli.format {
        OutputFormat::Human => output_human(cli, &dashboard, settings.show_comments),
        OutputFormat::Json => output_json(&dashboard)?,
        OutputFormat::Records => output_records(&dashboard, settings.show_comments),
    }

    Ok(())
}

/// Assemble the dashboard for the session's current batch
pub fn build_dashboard<'a>(
    session: &'a Session,
    prepared: &'a PreparedBatch,
    reference: &'a RubricReference,
    rubric: &Rubric,
    settings: &EvaluateSettings,
    exports: Vec<PathBuf>,
) -> Option<Dashboard<'a>> {
    let batch = session.batch()?;
    let labels = session.labels()?;
    let evaluated_at = session.evaluated_at()?;
    let summary = BatchSummary::from_batch(batch, settings.pass_threshold)?;
    let scores: Vec<f64> = batch.iter().map(|r| r.total_score).collect();

    Some(Dashboard {
        project_name: &labels.name,
        project_code: &labels.code,
        evaluated_at,
        draw_sequence: settings.draw_sequence,
        dropped: &prepared.dropped,
        rubric: reference,
        summary,
        ranking: ranking(batch),
        histogram: histogram(&scores, settings.histogram_bins),
        results: batch,
        max_score: rubric.total_points(),
        exports,
    })
}

fn truncation_message(prepared: &PreparedBatch, max_documents: usize) -> String {
    format!(
        "{} documents submitted; only the first {} are evaluated ({} dropped)",
        prepared.identifiers.len() + prepared.dropped.len(),
        max_documents,
        prepared.dropped.len()
    )
}
