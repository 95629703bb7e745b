//! Review configuration for revisor
//!
//! Configuration lives in `revisor.toml`. An explicit `--config` path wins;
//! otherwise the file is looked up in the working directory, and defaults are
//! used when it does not exist. Command-line flags override file values.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RevisorError};

pub use types::{ReviewConfig, DEFAULT_PROJECT_CODE, DEFAULT_PROJECT_NAME};

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "revisor.toml";

impl ReviewConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RevisorError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: ReviewConfig =
            toml::from_str(&content).map_err(|e| RevisorError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve configuration: explicit path, then `revisor.toml` in `root`,
    /// then defaults
    pub fn resolve(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = root.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values the batch runner and dashboard cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_documents == 0 {
            crate::bail_invalid!("max_documents", self.max_documents);
        }
        if self.histogram_bins == 0 {
            crate::bail_invalid!("histogram_bins", self.histogram_bins);
        }
        if !self.pass_threshold.is_finite() || self.pass_threshold < 0.0 {
            crate::bail_invalid!("pass_threshold", self.pass_threshold);
        }
        Ok(())
    }
}
