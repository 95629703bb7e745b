//! Exportable review report
//!
//! A report is a pure serialization of a batch: a title block, a summary
//! table with one row per document, and one detail table per document with
//! one row per criterion. Renderers turn it into Markdown (paginated, ready
//! for `pandoc`), JSON or records.

pub mod markdown;
pub mod pdf;
pub mod records;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{Result, RevisorError};
use crate::scoring::EvaluationResult;
use crate::session::ProjectLabels;

/// Report title
pub const REPORT_TITLE: &str = "SIMULATED REVIEW REPORT";

/// Prefix of generated report file names
pub const FILE_PREFIX: &str = "review_report";

const SUMMARY_HEADER: [&str; 3] = ["#", "Document", "Score (0-20)"];
const DETAIL_HEADER: [&str; 4] = ["Criterion", "Pts", "Max", "Comment"];

/// A table whose first row is the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Row count including the header row
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// Detail section for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSection {
    pub index: usize,
    pub document_id: String,
    pub total_score: String,
    pub table: Table,
}

impl DocumentSection {
    pub fn heading(&self) -> String {
        format!(
            "{}. {} - Score: {}",
            self.index, self.document_id, self.total_score
        )
    }
}

/// Serialized view of a batch, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub project_name: String,
    pub project_code: String,
    pub generated_at: NaiveDateTime,
    pub summary: Table,
    pub documents: Vec<DocumentSection>,
}

impl Report {
    pub fn new(batch: &[EvaluationResult], labels: &ProjectLabels, generated_at: NaiveDateTime) -> Self {
        let mut summary = Table::new(&SUMMARY_HEADER);
        let mut documents = Vec::with_capacity(batch.len());

        for (i, result) in batch.iter().enumerate() {
            let index = i + 1;
            let total = format!("{:.2}", result.total_score);
            summary
                .rows
                .push(vec![index.to_string(), result.document_id.clone(), total.clone()]);

            let mut table = Table::new(&DETAIL_HEADER);
            for r in &result.criteria_results {
                table.rows.push(vec![
                    r.criterion.clone(),
                    r.points_awarded.to_string(),
                    r.max_points.to_string(),
                    r.comment.clone(),
                ]);
            }
            documents.push(DocumentSection {
                index,
                document_id: result.document_id.clone(),
                total_score: total,
                table,
            });
        }

        Self {
            title: REPORT_TITLE.to_string(),
            project_name: labels.name.clone(),
            project_code: labels.code.clone(),
            generated_at,
            summary,
            documents,
        }
    }

    /// Timestamp as printed in the title block
    pub fn generated_label(&self) -> String {
        self.generated_at.format("%d/%m/%Y %H:%M:%S").to_string()
    }

    /// `review_report_<code>_<YYYYmmdd_HHMMSS>.<ext>`
    pub fn file_name(&self, extension: &str) -> String {
        let code = slug::slugify(&self.project_code);
        let code = if code.is_empty() {
            "untitled".to_string()
        } else {
            code
        };
        format!(
            "{}_{}_{}.{}",
            FILE_PREFIX,
            code,
            self.generated_at.format("%Y%m%d_%H%M%S"),
            extension
        )
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Markdown => Ok(markdown::render(self)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ReportFormat::Records => Ok(records::render(self)),
        }
    }
}

/// Serialization format of an exported report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
    Records,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
            ReportFormat::Records => "txt",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = RevisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "records" => Ok(ReportFormat::Records),
            other => Err(RevisorError::invalid_value(
                "report format (expected: markdown, json, or records)",
                other,
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Records => write!(f, "records"),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::batch::BatchRunner;
    use crate::rubric::Rubric;
    use chrono::NaiveDate;

    pub fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 15)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap()
    }

    pub fn sample_report(ids: &[&str]) -> Report {
        let batch = BatchRunner::default()
            .evaluate_all(ids.iter().copied(), &Rubric::default())
            .unwrap();
        Report::new(
            &batch,
            &ProjectLabels::new("Article Review", "ART-REV"),
            generated_at(),
        )
    }
}
