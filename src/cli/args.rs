use super::parse::{parse_draw_sequence, parse_positive, parse_report_format};
use clap::Args;
use revisor_core::report::ReportFormat;
use revisor_core::scoring::DrawSequence;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Documents to evaluate (only the file name is used; contents are never read)
    pub files: Vec<PathBuf>,

    /// Project name shown in the report
    #[arg(long)]
    pub project_name: Option<String>,

    /// Project code shown in the report and embedded in its file name
    #[arg(long)]
    pub project_code: Option<String>,

    /// Maximum documents per batch; extra documents are dropped
    #[arg(long, value_parser = parse_positive)]
    pub max_documents: Option<usize>,

    /// Generator draw sequence: legacy (historical scores) or compact
    #[arg(long, value_parser = parse_draw_sequence)]
    pub draw_sequence: Option<DrawSequence>,

    /// Rubric document to show for reference (scoring uses the built-in rubric)
    #[arg(long)]
    pub rubric_doc: Option<PathBuf>,

    /// Write the report into this directory
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Report serialization: markdown, json, or records
    #[arg(long, value_parser = parse_report_format, default_value = "markdown")]
    pub report_format: ReportFormat,

    /// Also convert the report to PDF (requires pandoc to be installed)
    #[arg(long, requires = "export")]
    pub pdf: bool,

    /// Hide the per-criterion comment panel
    #[arg(long)]
    pub no_comments: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RubricArgs {
    /// Rubric document to show for reference
    #[arg(long)]
    pub rubric_doc: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SeedArgs {
    /// Document identifiers (file names)
    #[arg(required = true)]
    pub identifiers: Vec<String>,
}
