//! Review session state
//!
//! Holds the current batch together with the project labels it was produced
//! under. Every evaluation replaces all of it; batches are never merged.

use chrono::NaiveDateTime;

use crate::batch::Batch;
use crate::report::Report;

/// Labels attached to a batch and its report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLabels {
    pub name: String,
    pub code: String,
}

impl ProjectLabels {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// The most recent evaluation and its labels
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<(Batch, ProjectLabels, NaiveDateTime)>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly evaluated batch, discarding whatever was there
    pub fn replace(&mut self, batch: Batch, labels: ProjectLabels, evaluated_at: NaiveDateTime) {
        if let Some((previous, _, _)) = &self.current {
            tracing::debug!(discarded = previous.len(), "replacing previous batch");
        }
        self.current = Some((batch, labels, evaluated_at));
    }

    pub fn batch(&self) -> Option<&Batch> {
        self.current.as_ref().map(|(batch, _, _)| batch)
    }

    pub fn labels(&self) -> Option<&ProjectLabels> {
        self.current.as_ref().map(|(_, labels, _)| labels)
    }

    pub fn evaluated_at(&self) -> Option<NaiveDateTime> {
        self.current.as_ref().map(|(_, _, at)| *at)
    }

    /// Build the exportable report for the current batch
    pub fn report(&self, generated_at: NaiveDateTime) -> Option<Report> {
        self.current
            .as_ref()
            .map(|(batch, labels, _)| Report::new(batch, labels, generated_at))
    }
}
