//! Batch runner
//!
//! Evaluates an ordered list of document identifiers one at a time. The list
//! is capped (first N kept, the rest dropped) and must not be empty. Each
//! evaluation is independent: only the identifier and the rubric decide a
//! document's result, so batch order never changes a score.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Result, RevisorError};
use crate::rubric::Rubric;
use crate::scoring::{EvaluationResult, Scorer};

/// Default number of documents evaluated per batch
pub const DEFAULT_MAX_DOCUMENTS: usize = 5;

/// Ordered results of one evaluation run
pub type Batch = Vec<EvaluationResult>;

/// Progress notification emitted after each completed evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchProgress<'a> {
    pub completed: usize,
    pub total: usize,
    pub document_id: &'a str,
}

impl BatchProgress<'_> {
    /// Completed fraction in `(0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Identifiers accepted for a batch after applying the cap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedBatch {
    pub identifiers: Vec<String>,
    /// Identifiers beyond the cap, in submission order
    pub dropped: Vec<String>,
}

impl PreparedBatch {
    pub fn was_truncated(&self) -> bool {
        !self.dropped.is_empty()
    }
}

/// Sequential batch evaluator
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner {
    max_documents: usize,
    scorer: Scorer,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DOCUMENTS, Scorer::default())
    }
}

impl BatchRunner {
    pub fn new(max_documents: usize, scorer: Scorer) -> Self {
        Self {
            max_documents,
            scorer,
        }
    }

    pub fn max_documents(&self) -> usize {
        self.max_documents
    }

    /// Validate and cap a list of identifiers
    ///
    /// An empty list is rejected before any scoring happens.
    pub fn prepare<I, S>(&self, identifiers: I) -> Result<PreparedBatch>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();
        if identifiers.is_empty() {
            return Err(RevisorError::EmptyBatch);
        }

        let dropped = if identifiers.len() > self.max_documents {
            identifiers.split_off(self.max_documents)
        } else {
            Vec::new()
        };

        if !dropped.is_empty() {
            warn!(
                max_documents = self.max_documents,
                dropped = dropped.len(),
                "batch exceeds document cap; extra documents dropped"
            );
        }

        Ok(PreparedBatch {
            identifiers,
            dropped,
        })
    }

    /// Evaluate a prepared batch in order, notifying after each document
    pub fn run<F>(&self, prepared: &PreparedBatch, rubric: &Rubric, mut on_progress: F) -> Batch
    where
        F: FnMut(BatchProgress<'_>),
    {
        let start = Instant::now();
        let total = prepared.identifiers.len();
        let mut batch = Vec::with_capacity(total);

        for (i, id) in prepared.identifiers.iter().enumerate() {
            let result = self.scorer.evaluate(id, rubric);
            debug!(document_id = %id, total_score = result.total_score, "document_scored");
            batch.push(result);
            on_progress(BatchProgress {
                completed: i + 1,
                total,
                document_id: id,
            });
        }

        info!(documents = total, elapsed = ?start.elapsed(), "batch_complete");
        batch
    }

    /// Prepare and run in one step, without progress reporting
    pub fn evaluate_all<I, S>(&self, identifiers: I, rubric: &Rubric) -> Result<Batch>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prepared = self.prepare(identifiers)?;
        Ok(self.run(&prepared, rubric, |_| {}))
    }
}
