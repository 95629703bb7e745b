//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::batch::DEFAULT_MAX_DOCUMENTS;
use crate::scoring::DrawSequence;
use crate::stats::{DEFAULT_HISTOGRAM_BINS, DEFAULT_PASS_THRESHOLD};

/// Default project name shown in reports
pub const DEFAULT_PROJECT_NAME: &str = "Article Review";

/// Default project code embedded in report file names
pub const DEFAULT_PROJECT_CODE: &str = "ART-REV";

/// Review configuration (`revisor.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Maximum documents per batch; extras are dropped
    #[serde(default = "default_max_documents")]
    pub max_documents: usize,

    /// Minimum total score counted as passing
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,

    /// Bins in the score distribution histogram
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// Generator draw sequence used for scoring
    #[serde(default)]
    pub draw_sequence: DrawSequence,

    /// Project name for reports
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Project code for reports and report file names
    #[serde(default = "default_project_code")]
    pub project_code: String,

    /// Rubric document shown for reference (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric_document: Option<PathBuf>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            max_documents: default_max_documents(),
            pass_threshold: default_pass_threshold(),
            histogram_bins: default_histogram_bins(),
            draw_sequence: DrawSequence::default(),
            project_name: default_project_name(),
            project_code: default_project_code(),
            rubric_document: None,
        }
    }
}

fn default_max_documents() -> usize {
    DEFAULT_MAX_DOCUMENTS
}

fn default_pass_threshold() -> f64 {
    DEFAULT_PASS_THRESHOLD
}

fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

fn default_project_code() -> String {
    DEFAULT_PROJECT_CODE.to_string()
}
